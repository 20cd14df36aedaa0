//! University repository.

use campus_core::entities::University;
use campus_core::ids::PREFIX_UNIVERSITY;
use campus_core::responses::UniversityDetail;

use crate::error::DatabaseError;
use crate::helpers::{UpdateSql, get_opt_string, required};
use crate::repos::course::{COURSE_COLUMNS, qualified, row_to_course};
use crate::service::CatalogService;
use crate::updates::university::UniversityUpdate;

pub const UNIVERSITY_NOT_FOUND_FOR_DELETE: &str = "Couldn't find the selected university to delete.";

pub(crate) const UNIVERSITY_COLUMNS: &str = "id, name, location, image_url, logo_url, package, \
     accreditation, description, about, website";

#[derive(Debug, Clone, Default)]
pub struct NewUniversity {
    pub name: String,
    pub location: String,
    pub image_url: Option<String>,
    pub logo_url: Option<String>,
    pub package: Option<String>,
    pub accreditation: Option<String>,
    pub description: Option<String>,
    pub about: Option<String>,
    pub website: Option<String>,
}

pub(crate) fn row_to_university(row: &libsql::Row) -> Result<University, DatabaseError> {
    Ok(University {
        id: row.get::<String>(0)?,
        name: row.get::<String>(1)?,
        location: row.get::<String>(2)?,
        image_url: get_opt_string(row, 3)?,
        logo_url: get_opt_string(row, 4)?,
        package: get_opt_string(row, 5)?,
        accreditation: get_opt_string(row, 6)?,
        description: get_opt_string(row, 7)?,
        about: get_opt_string(row, 8)?,
        website: get_opt_string(row, 9)?,
    })
}

impl CatalogService {
    pub async fn create_university(
        &self,
        input: &NewUniversity,
    ) -> Result<University, DatabaseError> {
        let name = required(&input.name, "University name is required.")?;
        let location = required(&input.location, "Location is required.")?;
        let id = self.db().generate_id(PREFIX_UNIVERSITY).await?;

        self.db()
            .execute_with(
                "INSERT INTO universities (id, name, location, image_url, logo_url, package,
                     accreditation, description, about, website)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                || {
                    libsql::params![
                        id.as_str(),
                        name,
                        location,
                        input.image_url.as_deref(),
                        input.logo_url.as_deref(),
                        input.package.as_deref(),
                        input.accreditation.as_deref(),
                        input.description.as_deref(),
                        input.about.as_deref(),
                        input.website.as_deref()
                    ]
                },
            )
            .await?;

        tracing::info!(university_id = %id, name, "created university");
        Ok(University {
            id,
            name: name.to_string(),
            location: location.to_string(),
            image_url: input.image_url.clone(),
            logo_url: input.logo_url.clone(),
            package: input.package.clone(),
            accreditation: input.accreditation.clone(),
            description: input.description.clone(),
            about: input.about.clone(),
            website: input.website.clone(),
        })
    }

    pub async fn get_university(&self, id: &str) -> Result<University, DatabaseError> {
        let sql = format!("SELECT {UNIVERSITY_COLUMNS} FROM universities WHERE id = ?1");
        let mut rows = self.db().query_with(&sql, || [id]).await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found(format!("University {id} not found.")))?;
        row_to_university(&row)
    }

    pub async fn list_universities(&self) -> Result<Vec<University>, DatabaseError> {
        let sql = format!("SELECT {UNIVERSITY_COLUMNS} FROM universities ORDER BY name");
        let mut rows = self.db().query_with(&sql, || ()).await?;

        let mut universities = Vec::new();
        while let Some(row) = rows.next().await? {
            universities.push(row_to_university(&row)?);
        }
        Ok(universities)
    }

    pub async fn update_university(
        &self,
        id: &str,
        update: UniversityUpdate,
    ) -> Result<University, DatabaseError> {
        let mut sql = UpdateSql::new();

        if let Some(ref name) = update.name {
            sql.set("name", required(name, "University name is required.")?);
        }
        if let Some(ref location) = update.location {
            sql.set("location", required(location, "Location is required.")?);
        }
        let optional = [
            ("image_url", &update.image_url),
            ("logo_url", &update.logo_url),
            ("package", &update.package),
            ("accreditation", &update.accreditation),
            ("description", &update.description),
            ("about", &update.about),
            ("website", &update.website),
        ];
        for (column, value) in optional {
            if let Some(value) = value {
                sql.set(column, value.clone());
            }
        }

        if sql.is_empty() {
            return self.get_university(id).await;
        }

        let (sql, params) = sql.finish("universities", id);
        let affected = self
            .db()
            .execute_with(&sql, || libsql::params_from_iter(params.clone()))
            .await?;
        if affected == 0 {
            return Err(DatabaseError::not_found(format!("University {id} not found.")));
        }

        tracing::info!(university_id = id, "updated university");
        self.get_university(id).await
    }

    /// Delete a university and its course offerings in one transaction.
    pub async fn delete_university(&self, id: &str) -> Result<(), DatabaseError> {
        let tx = self.db().conn().transaction().await?;
        tx.execute("DELETE FROM university_courses WHERE university_id = ?1", [id])
            .await?;
        let affected = tx
            .execute("DELETE FROM universities WHERE id = ?1", [id])
            .await?;
        if affected == 0 {
            tx.rollback().await?;
            return Err(DatabaseError::not_found(UNIVERSITY_NOT_FOUND_FOR_DELETE));
        }
        tx.commit().await?;

        tracing::info!(university_id = id, "deleted university");
        Ok(())
    }

    /// College page data: the university and the courses it offers.
    pub async fn university_detail(&self, id: &str) -> Result<UniversityDetail, DatabaseError> {
        let university = self.get_university(id).await?;

        let sql = format!(
            "SELECT {} FROM courses c
             JOIN university_courses uc ON uc.course_id = c.id
             WHERE uc.university_id = ?1
             GROUP BY c.id
             ORDER BY c.name",
            qualified(COURSE_COLUMNS, "c")
        );
        let mut rows = self.db().query_with(&sql, || [id]).await?;
        let mut courses = Vec::new();
        while let Some(row) = rows.next().await? {
            courses.push(row_to_course(&row)?);
        }

        Ok(UniversityDetail {
            university,
            courses,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::test_support::{seed_course, seed_stream, seed_university, test_service};
    use crate::updates::university::UniversityUpdateBuilder;

    use super::*;

    #[tokio::test]
    async fn name_and_location_are_required() {
        let svc = test_service().await;
        let err = svc
            .create_university(&NewUniversity {
                name: "Northfield".into(),
                ..NewUniversity::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Location is required.");
    }

    #[tokio::test]
    async fn update_clears_and_sets_fields() {
        let svc = test_service().await;
        let created = svc
            .create_university(&NewUniversity {
                name: "Northfield".into(),
                location: "Pune".into(),
                website: Some("https://old.example.org".into()),
                ..NewUniversity::default()
            })
            .await
            .unwrap();

        let updated = svc
            .update_university(
                &created.id,
                UniversityUpdateBuilder::new()
                    .website(None)
                    .package(Some("9 LPA".into()))
                    .build(),
            )
            .await
            .unwrap();

        assert_eq!(updated.website, None);
        assert_eq!(updated.package.as_deref(), Some("9 LPA"));
        assert_eq!(updated.location, "Pune");
    }

    #[tokio::test]
    async fn delete_removes_links_and_reports_missing() {
        let svc = test_service().await;
        let stream = seed_stream(&svc, "Engineering").await;
        let course = seed_course(&svc, "BTech", &stream.id).await;
        let uni = seed_university(&svc, "Northfield", "Pune").await;
        svc.assign_course(&course.id, &[uni.id.clone()]).await.unwrap();

        svc.delete_university(&uni.id).await.unwrap();
        assert!(svc.list_offerings().await.unwrap().is_empty());

        let err = svc.delete_university(&uni.id).await.unwrap_err();
        assert_eq!(err.to_string(), UNIVERSITY_NOT_FOUND_FOR_DELETE);
    }

    #[tokio::test]
    async fn detail_lists_offered_courses() {
        let svc = test_service().await;
        let stream = seed_stream(&svc, "Engineering").await;
        let mtech = seed_course(&svc, "MTech", &stream.id).await;
        let btech = seed_course(&svc, "BTech", &stream.id).await;
        let uni = seed_university(&svc, "Northfield", "Pune").await;
        svc.assign_course(&mtech.id, &[uni.id.clone()]).await.unwrap();
        svc.assign_course(&btech.id, &[uni.id.clone()]).await.unwrap();

        let detail = svc.university_detail(&uni.id).await.unwrap();
        let names: Vec<&str> = detail.courses.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["BTech", "MTech"]);
    }
}
