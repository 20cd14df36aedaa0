//! Homepage news ticker.

use campus_core::entities::NewsItem;
use campus_core::ids::PREFIX_NEWS;
use chrono::Utc;

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, required};
use crate::service::CatalogService;

const NEWS_REQUIRED: &str = "News content cannot be empty.";

fn row_to_news(row: &libsql::Row) -> Result<NewsItem, DatabaseError> {
    Ok(NewsItem {
        id: row.get::<String>(0)?,
        content: row.get::<String>(1)?,
        created_at: parse_datetime(&row.get::<String>(2)?)?,
    })
}

impl CatalogService {
    pub async fn add_news(&self, content: &str) -> Result<NewsItem, DatabaseError> {
        let content = required(content, NEWS_REQUIRED)?;
        let id = self.db().generate_id(PREFIX_NEWS).await?;
        let now = Utc::now();

        self.db()
            .execute_with(
                "INSERT INTO news (id, content, created_at) VALUES (?1, ?2, ?3)",
                || libsql::params![id.as_str(), content, now.to_rfc3339()],
            )
            .await?;

        tracing::info!(news_id = %id, "added news");
        Ok(NewsItem {
            id,
            content: content.to_string(),
            created_at: now,
        })
    }

    pub async fn update_news(&self, id: &str, content: &str) -> Result<NewsItem, DatabaseError> {
        let content = required(content, NEWS_REQUIRED)?;
        let affected = self
            .db()
            .execute_with("UPDATE news SET content = ?1 WHERE id = ?2", || {
                libsql::params![content, id]
            })
            .await?;
        if affected == 0 {
            return Err(DatabaseError::not_found(format!("News item {id} not found.")));
        }

        let mut rows = self
            .db()
            .query_with("SELECT id, content, created_at FROM news WHERE id = ?1", || [id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_news(&row)
    }

    pub async fn delete_news(&self, id: &str) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .execute_with("DELETE FROM news WHERE id = ?1", || [id])
            .await?;
        if affected == 0 {
            return Err(DatabaseError::not_found(format!("News item {id} not found.")));
        }
        tracing::info!(news_id = id, "deleted news");
        Ok(())
    }

    /// News items, newest first.
    pub async fn list_news(&self) -> Result<Vec<NewsItem>, DatabaseError> {
        let mut rows = self
            .db()
            .query_with(
                "SELECT id, content, created_at FROM news ORDER BY created_at DESC",
                || (),
            )
            .await?;

        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_news(&row)?);
        }
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::test_support::test_service;

    use super::*;

    #[tokio::test]
    async fn add_update_delete() {
        let svc = test_service().await;
        let item = svc.add_news("Admissions open for 2026").await.unwrap();

        let updated = svc
            .update_news(&item.id, "Admissions close on 30 June")
            .await
            .unwrap();
        assert_eq!(updated.content, "Admissions close on 30 June");
        assert_eq!(updated.created_at, item.created_at);

        svc.delete_news(&item.id).await.unwrap();
        assert!(svc.list_news().await.unwrap().is_empty());
        assert!(matches!(
            svc.delete_news(&item.id).await,
            Err(DatabaseError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn blank_content_is_rejected() {
        let svc = test_service().await;
        let err = svc.add_news("   ").await.unwrap_err();
        assert_eq!(err.to_string(), NEWS_REQUIRED);
    }

    #[tokio::test]
    async fn newest_first() {
        let svc = test_service().await;
        svc.add_news("older").await.unwrap();
        svc.add_news("newer").await.unwrap();
        let items = svc.list_news().await.unwrap();
        assert_eq!(items[0].content, "newer");
    }
}
