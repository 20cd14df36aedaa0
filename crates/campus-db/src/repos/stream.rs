//! Stream repository.

use campus_core::entities::Stream;
use campus_core::ids::PREFIX_STREAM;

use crate::error::DatabaseError;
use crate::helpers::required;
use crate::service::CatalogService;

pub const DUPLICATE_STREAM: &str = "A stream with this name already exists.";

fn row_to_stream(row: &libsql::Row) -> Result<Stream, DatabaseError> {
    Ok(Stream {
        id: row.get::<String>(0)?,
        name: row.get::<String>(1)?,
    })
}

impl CatalogService {
    /// Create a stream. Names are unique ignoring case.
    pub async fn create_stream(&self, name: &str) -> Result<Stream, DatabaseError> {
        let name = required(name, "Stream name is required.")?;

        let mut existing = self
            .db()
            .query_with("SELECT id FROM streams WHERE lower(name) = lower(?1)", || [name])
            .await?;
        if existing.next().await?.is_some() {
            return Err(DatabaseError::Conflict(DUPLICATE_STREAM.into()));
        }

        let id = self.db().generate_id(PREFIX_STREAM).await?;
        self.db()
            .execute_with("INSERT INTO streams (id, name) VALUES (?1, ?2)", || {
                libsql::params![id.as_str(), name]
            })
            .await?;

        tracing::info!(stream_id = %id, name, "created stream");
        Ok(Stream {
            id,
            name: name.to_string(),
        })
    }

    pub async fn get_stream(&self, id: &str) -> Result<Stream, DatabaseError> {
        let mut rows = self
            .db()
            .query_with("SELECT id, name FROM streams WHERE id = ?1", || [id])
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found(format!("Stream {id} not found.")))?;
        row_to_stream(&row)
    }

    pub async fn list_streams(&self) -> Result<Vec<Stream>, DatabaseError> {
        let mut rows = self
            .db()
            .query_with("SELECT id, name FROM streams ORDER BY name", || ())
            .await?;

        let mut streams = Vec::new();
        while let Some(row) = rows.next().await? {
            streams.push(row_to_stream(&row)?);
        }
        Ok(streams)
    }

    /// Delete a stream. Its courses stay, with no stream.
    pub async fn delete_stream(&self, id: &str) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .execute_with("DELETE FROM streams WHERE id = ?1", || [id])
            .await?;
        if affected == 0 {
            return Err(DatabaseError::not_found(
                "Couldn't find the selected stream to delete.",
            ));
        }
        tracing::info!(stream_id = id, "deleted stream");
        Ok(())
    }
}
