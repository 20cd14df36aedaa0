//! Certification categories and certification courses.
//!
//! Mirrors the stream/course pair: categories are unique ignoring case, and
//! deleting a category leaves its courses uncategorised.

use campus_core::entities::{CertificationCategory, CertificationCourse};
use campus_core::ids::{PREFIX_CERT_CATEGORY, PREFIX_CERT_COURSE};
use campus_core::responses::CertificationDetail;

use crate::error::DatabaseError;
use crate::helpers::{UpdateSql, get_opt_string, required};
use crate::service::CatalogService;
use crate::updates::certification::CertificationUpdate;

pub const DUPLICATE_CATEGORY: &str = "A category with this name already exists.";

const CERTIFICATION_COLUMNS: &str = "id, name, overview, duration, category_id";

#[derive(Debug, Clone, Default)]
pub struct NewCertificationCourse {
    pub name: String,
    pub category_id: String,
    pub overview: Option<String>,
    pub duration: Option<String>,
}

fn row_to_category(row: &libsql::Row) -> Result<CertificationCategory, DatabaseError> {
    Ok(CertificationCategory {
        id: row.get::<String>(0)?,
        name: row.get::<String>(1)?,
    })
}

fn row_to_certification(row: &libsql::Row) -> Result<CertificationCourse, DatabaseError> {
    Ok(CertificationCourse {
        id: row.get::<String>(0)?,
        name: row.get::<String>(1)?,
        overview: get_opt_string(row, 2)?,
        duration: get_opt_string(row, 3)?,
        category_id: get_opt_string(row, 4)?,
    })
}

impl CatalogService {
    pub async fn create_certification_category(
        &self,
        name: &str,
    ) -> Result<CertificationCategory, DatabaseError> {
        let name = required(name, "Category name is required.")?;

        let mut existing = self
            .db()
            .query_with(
                "SELECT id FROM certification_categories WHERE lower(name) = lower(?1)",
                || [name],
            )
            .await?;
        if existing.next().await?.is_some() {
            return Err(DatabaseError::Conflict(DUPLICATE_CATEGORY.into()));
        }

        let id = self.db().generate_id(PREFIX_CERT_CATEGORY).await?;
        self.db()
            .execute_with(
                "INSERT INTO certification_categories (id, name) VALUES (?1, ?2)",
                || libsql::params![id.as_str(), name],
            )
            .await?;

        tracing::info!(category_id = %id, name, "created certification category");
        Ok(CertificationCategory {
            id,
            name: name.to_string(),
        })
    }

    pub async fn get_certification_category(
        &self,
        id: &str,
    ) -> Result<CertificationCategory, DatabaseError> {
        let mut rows = self
            .db()
            .query_with(
                "SELECT id, name FROM certification_categories WHERE id = ?1",
                || [id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found(format!("Category {id} not found.")))?;
        row_to_category(&row)
    }

    pub async fn list_certification_categories(
        &self,
    ) -> Result<Vec<CertificationCategory>, DatabaseError> {
        let mut rows = self
            .db()
            .query_with(
                "SELECT id, name FROM certification_categories ORDER BY name",
                || (),
            )
            .await?;

        let mut categories = Vec::new();
        while let Some(row) = rows.next().await? {
            categories.push(row_to_category(&row)?);
        }
        Ok(categories)
    }

    pub async fn delete_certification_category(&self, id: &str) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .execute_with("DELETE FROM certification_categories WHERE id = ?1", || [id])
            .await?;
        if affected == 0 {
            return Err(DatabaseError::not_found(
                "Couldn't find the selected category to delete.",
            ));
        }
        tracing::info!(category_id = id, "deleted certification category");
        Ok(())
    }

    pub async fn create_certification_course(
        &self,
        input: &NewCertificationCourse,
    ) -> Result<CertificationCourse, DatabaseError> {
        let message = "Certification name and category are required.";
        let name = required(&input.name, message)?;
        let category_id = required(&input.category_id, message)?;
        self.get_certification_category(category_id).await?;

        let id = self.db().generate_id(PREFIX_CERT_COURSE).await?;
        self.db()
            .execute_with(
                "INSERT INTO certification_courses (id, name, overview, duration, category_id)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                || {
                    libsql::params![
                        id.as_str(),
                        name,
                        input.overview.as_deref(),
                        input.duration.as_deref(),
                        category_id
                    ]
                },
            )
            .await?;

        tracing::info!(certification_id = %id, name, "created certification course");
        Ok(CertificationCourse {
            id,
            name: name.to_string(),
            overview: input.overview.clone(),
            duration: input.duration.clone(),
            category_id: Some(category_id.to_string()),
        })
    }

    pub async fn get_certification_course(
        &self,
        id: &str,
    ) -> Result<CertificationCourse, DatabaseError> {
        let sql = format!("SELECT {CERTIFICATION_COLUMNS} FROM certification_courses WHERE id = ?1");
        let mut rows = self.db().query_with(&sql, || [id]).await?;
        let row = rows.next().await?.ok_or_else(|| {
            DatabaseError::not_found(format!("Certification course {id} not found."))
        })?;
        row_to_certification(&row)
    }

    pub async fn list_certification_courses(
        &self,
    ) -> Result<Vec<CertificationCourse>, DatabaseError> {
        let sql = format!("SELECT {CERTIFICATION_COLUMNS} FROM certification_courses ORDER BY name");
        let mut rows = self.db().query_with(&sql, || ()).await?;

        let mut courses = Vec::new();
        while let Some(row) = rows.next().await? {
            courses.push(row_to_certification(&row)?);
        }
        Ok(courses)
    }

    pub async fn update_certification_course(
        &self,
        id: &str,
        update: CertificationUpdate,
    ) -> Result<CertificationCourse, DatabaseError> {
        let mut sql = UpdateSql::new();

        if let Some(ref name) = update.name {
            sql.set("name", required(name, "Certification name is required.")?);
        }
        if let Some(ref overview) = update.overview {
            sql.set("overview", overview.clone());
        }
        if let Some(ref duration) = update.duration {
            sql.set("duration", duration.clone());
        }
        if let Some(ref category_id) = update.category_id {
            self.get_certification_category(category_id).await?;
            sql.set("category_id", category_id.as_str());
        }

        if sql.is_empty() {
            return self.get_certification_course(id).await;
        }

        let (sql, params) = sql.finish("certification_courses", id);
        let affected = self
            .db()
            .execute_with(&sql, || libsql::params_from_iter(params.clone()))
            .await?;
        if affected == 0 {
            return Err(DatabaseError::not_found(format!(
                "Certification course {id} not found."
            )));
        }

        tracing::info!(certification_id = id, "updated certification course");
        self.get_certification_course(id).await
    }

    pub async fn delete_certification_course(&self, id: &str) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .execute_with("DELETE FROM certification_courses WHERE id = ?1", || [id])
            .await?;
        if affected == 0 {
            return Err(DatabaseError::not_found(
                "Couldn't find the selected certification course to delete.",
            ));
        }
        tracing::info!(certification_id = id, "deleted certification course");
        Ok(())
    }

    pub async fn certification_detail(
        &self,
        id: &str,
    ) -> Result<CertificationDetail, DatabaseError> {
        let course = self.get_certification_course(id).await?;
        let category_name = match course.category_id.as_deref() {
            Some(category_id) => match self.get_certification_category(category_id).await {
                Ok(category) => Some(category.name),
                Err(DatabaseError::NotFound(_)) => None,
                Err(e) => return Err(e),
            },
            None => None,
        };
        Ok(CertificationDetail {
            course,
            category_name,
        })
    }
}
