//! Service layer over the catalog store.
//!
//! `CatalogService` wraps `CampusDb`. All repo methods are implemented as
//! `impl CatalogService` blocks in [`crate::repos`].

use crate::CampusDb;
use crate::error::DatabaseError;

pub struct CatalogService {
    db: CampusDb,
}

impl CatalogService {
    /// Create a service over a local database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        Ok(Self {
            db: CampusDb::open_local(db_path).await?,
        })
    }

    /// Create a service over a remote libSQL database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the remote database cannot be reached.
    pub async fn new_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        Ok(Self {
            db: CampusDb::open_remote(url, auth_token).await?,
        })
    }

    #[must_use]
    pub const fn from_db(db: CampusDb) -> Self {
        Self { db }
    }

    #[must_use]
    pub const fn db(&self) -> &CampusDb {
        &self.db
    }
}
