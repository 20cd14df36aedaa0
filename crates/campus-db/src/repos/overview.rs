//! Administrator dashboard counts.
//!
//! Dates compare on the first ten characters of the stored timestamp, which
//! is `YYYY-MM-DD` in both RFC 3339 and `SQLite`'s `datetime('now')` format.
//! All dates are UTC.

use std::collections::HashMap;

use campus_core::responses::{DailyCount, OverviewStats};
use chrono::{Days, NaiveDate};

use crate::error::DatabaseError;
use crate::helpers::get_count;
use crate::service::CatalogService;

const SERIES_DAYS: u64 = 7;

impl CatalogService {
    async fn count(&self, sql: &str, day: Option<&str>) -> Result<u64, DatabaseError> {
        let mut rows = match day {
            Some(day) => self.db().query_with(sql, || [day]).await?,
            None => self.db().query_with(sql, || ()).await?,
        };
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        get_count(&row, 0)
    }

    /// Totals for the dashboard, with `today` as the reference day.
    pub async fn overview_stats(&self, today: NaiveDate) -> Result<OverviewStats, DatabaseError> {
        let day = today.format("%Y-%m-%d").to_string();

        let total_enquiries = self.count("SELECT COUNT(*) FROM enquiries", None).await?;
        let enquiries_today = self
            .count(
                "SELECT COUNT(*) FROM enquiries WHERE substr(created_at, 1, 10) = ?1",
                Some(&day),
            )
            .await?;
        let calls_today = self
            .count(
                "SELECT COUNT(*) FROM enquiries WHERE called = 1 AND substr(updated_at, 1, 10) = ?1",
                Some(&day),
            )
            .await?;
        let registered_users = self.count("SELECT COUNT(*) FROM user_profiles", None).await?;
        let last_seven_days = self.daily_enquiries(today).await?;

        Ok(OverviewStats {
            total_enquiries,
            enquiries_today,
            calls_today,
            registered_users,
            last_seven_days,
        })
    }

    async fn daily_enquiries(&self, today: NaiveDate) -> Result<Vec<DailyCount>, DatabaseError> {
        let first = today
            .checked_sub_days(Days::new(SERIES_DAYS - 1))
            .ok_or_else(|| DatabaseError::InvalidState(format!("date out of range: {today}")))?;
        let first_text = first.format("%Y-%m-%d").to_string();
        let today_text = today.format("%Y-%m-%d").to_string();

        let mut rows = self
            .db()
            .query_with(
                "SELECT substr(created_at, 1, 10) AS day, COUNT(*) FROM enquiries
                 WHERE substr(created_at, 1, 10) BETWEEN ?1 AND ?2
                 GROUP BY day",
                || [first_text.as_str(), today_text.as_str()],
            )
            .await?;

        let mut by_day = HashMap::new();
        while let Some(row) = rows.next().await? {
            by_day.insert(row.get::<String>(0)?, get_count(&row, 1)?);
        }

        Ok(first
            .iter_days()
            .take_while(|date| *date <= today)
            .map(|date| DailyCount {
                date,
                count: by_day
                    .get(&date.format("%Y-%m-%d").to_string())
                    .copied()
                    .unwrap_or(0),
            })
            .collect())
    }
}
