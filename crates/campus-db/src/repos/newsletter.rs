//! Newsletter subscriptions.

use campus_core::entities::NewsletterSubscription;
use campus_core::ids::PREFIX_SUBSCRIPTION;
use chrono::Utc;

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, required};
use crate::service::CatalogService;

pub const ALREADY_SUBSCRIBED: &str = "This email is already subscribed!";

impl CatalogService {
    /// Subscribe an email. Addresses are stored lowercased.
    pub async fn subscribe(&self, email: &str) -> Result<NewsletterSubscription, DatabaseError> {
        let email = required(email, "Please enter your email.")?.to_lowercase();
        if !email.contains('@') {
            return Err(DatabaseError::validation("Please enter a valid email address."));
        }

        let mut existing = self
            .db()
            .query_with(
                "SELECT id FROM newsletter_subscriptions WHERE email = ?1",
                || [email.as_str()],
            )
            .await?;
        if existing.next().await?.is_some() {
            return Err(DatabaseError::Conflict(ALREADY_SUBSCRIBED.into()));
        }

        let id = self.db().generate_id(PREFIX_SUBSCRIPTION).await?;
        let now = Utc::now();
        self.db()
            .execute_with(
                "INSERT INTO newsletter_subscriptions (id, email, created_at) VALUES (?1, ?2, ?3)",
                || libsql::params![id.as_str(), email.as_str(), now.to_rfc3339()],
            )
            .await?;

        tracing::info!(subscription_id = %id, "newsletter subscription");
        Ok(NewsletterSubscription {
            id,
            email,
            created_at: now,
        })
    }

    pub async fn list_subscriptions(&self) -> Result<Vec<NewsletterSubscription>, DatabaseError> {
        let mut rows = self
            .db()
            .query_with(
                "SELECT id, email, created_at FROM newsletter_subscriptions ORDER BY created_at DESC",
                || (),
            )
            .await?;

        let mut subscriptions = Vec::new();
        while let Some(row) = rows.next().await? {
            subscriptions.push(NewsletterSubscription {
                id: row.get::<String>(0)?,
                email: row.get::<String>(1)?,
                created_at: parse_datetime(&row.get::<String>(2)?)?,
            });
        }
        Ok(subscriptions)
    }
}
