//! University/course offering repository.
//!
//! Pair uniqueness is enforced here: `assign_course` skips pairs that
//! already exist instead of relying on a storage constraint.

use std::collections::HashSet;

use campus_core::entities::UniversityCourseLink;
use campus_core::responses::AssignOutcome;

use crate::error::DatabaseError;
use crate::service::CatalogService;

pub const ALREADY_ASSIGNED: &str = "This course is already assigned to ALL selected universities.";

fn row_to_link(row: &libsql::Row) -> Result<UniversityCourseLink, DatabaseError> {
    Ok(UniversityCourseLink {
        university_id: row.get::<String>(0)?,
        course_id: row.get::<String>(1)?,
    })
}

impl CatalogService {
    /// Offer `course_id` at each of `university_ids`.
    ///
    /// Already-linked universities are reported as skipped. Fails when
    /// nothing new would be added.
    pub async fn assign_course(
        &self,
        course_id: &str,
        university_ids: &[String],
    ) -> Result<AssignOutcome, DatabaseError> {
        if course_id.trim().is_empty() || university_ids.is_empty() {
            return Err(DatabaseError::validation(
                "Please select a course and at least one university.",
            ));
        }
        self.get_course(course_id).await?;
        for university_id in university_ids {
            self.get_university(university_id).await?;
        }

        let mut rows = self
            .db()
            .query_with(
                "SELECT university_id FROM university_courses WHERE course_id = ?1",
                || [course_id],
            )
            .await?;
        let mut existing = HashSet::new();
        while let Some(row) = rows.next().await? {
            existing.insert(row.get::<String>(0)?);
        }

        let mut assigned = Vec::new();
        let mut skipped = Vec::new();
        for university_id in university_ids {
            if existing.contains(university_id) {
                skipped.push(university_id.clone());
            } else if !assigned.contains(university_id) {
                assigned.push(university_id.clone());
            }
        }

        if assigned.is_empty() {
            return Err(DatabaseError::Conflict(ALREADY_ASSIGNED.into()));
        }

        let tx = self.db().conn().transaction().await?;
        for university_id in &assigned {
            tx.execute(
                "INSERT INTO university_courses (university_id, course_id) VALUES (?1, ?2)",
                [university_id.as_str(), course_id],
            )
            .await?;
        }
        tx.commit().await?;

        tracing::info!(
            course_id,
            assigned = assigned.len(),
            skipped = skipped.len(),
            "assigned course to universities"
        );
        Ok(AssignOutcome {
            course_id: course_id.to_string(),
            assigned,
            skipped,
        })
    }

    pub async fn unassign_course(
        &self,
        course_id: &str,
        university_id: &str,
    ) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .execute_with(
                "DELETE FROM university_courses WHERE course_id = ?1 AND university_id = ?2",
                || [course_id, university_id],
            )
            .await?;
        if affected == 0 {
            return Err(DatabaseError::not_found(
                "This course is not assigned to the selected university.",
            ));
        }
        tracing::info!(course_id, university_id, "unassigned course");
        Ok(())
    }

    pub async fn list_offerings(&self) -> Result<Vec<UniversityCourseLink>, DatabaseError> {
        let mut rows = self
            .db()
            .query_with(
                "SELECT university_id, course_id FROM university_courses ORDER BY created_at",
                || (),
            )
            .await?;

        let mut links = Vec::new();
        while let Some(row) = rows.next().await? {
            links.push(row_to_link(&row)?);
        }
        Ok(links)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::test_support::{seed_course, seed_stream, seed_university, test_service};

    use super::*;

    #[tokio::test]
    async fn reassign_skips_existing_pairs() {
        let svc = test_service().await;
        let stream = seed_stream(&svc, "Engineering").await;
        let course = seed_course(&svc, "BTech", &stream.id).await;
        let a = seed_university(&svc, "Alpha", "Pune").await;
        let b = seed_university(&svc, "Beta", "Delhi").await;

        svc.assign_course(&course.id, &[a.id.clone()]).await.unwrap();
        let outcome = svc
            .assign_course(&course.id, &[a.id.clone(), b.id.clone(), b.id.clone()])
            .await
            .unwrap();

        assert_eq!(outcome.assigned, vec![b.id.clone()]);
        assert_eq!(outcome.skipped, vec![a.id.clone()]);
        assert_eq!(svc.list_offerings().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn nothing_new_is_a_conflict() {
        let svc = test_service().await;
        let stream = seed_stream(&svc, "Engineering").await;
        let course = seed_course(&svc, "BTech", &stream.id).await;
        let a = seed_university(&svc, "Alpha", "Pune").await;

        svc.assign_course(&course.id, &[a.id.clone()]).await.unwrap();
        let err = svc.assign_course(&course.id, &[a.id.clone()]).await.unwrap_err();

        assert!(err.to_string().contains("already assigned to ALL selected universities"));
    }

    #[tokio::test]
    async fn empty_selection_is_rejected() {
        let svc = test_service().await;
        assert!(matches!(
            svc.assign_course("crs-00000001", &[]).await,
            Err(DatabaseError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn unassign_reports_missing_pair() {
        let svc = test_service().await;
        let stream = seed_stream(&svc, "Engineering").await;
        let course = seed_course(&svc, "BTech", &stream.id).await;
        let a = seed_university(&svc, "Alpha", "Pune").await;
        svc.assign_course(&course.id, &[a.id.clone()]).await.unwrap();

        svc.unassign_course(&course.id, &a.id).await.unwrap();
        assert!(matches!(
            svc.unassign_course(&course.id, &a.id).await,
            Err(DatabaseError::NotFound(_))
        ));
    }
}
