//! Concurrent load of every catalog table for navigation and listings.

use campus_core::snapshot::CatalogSnapshot;

use crate::error::DatabaseError;
use crate::service::CatalogService;

/// Keep the rows of a successful fetch, or warn and fall back to nothing.
fn or_empty<T>(table: &str, result: Result<Vec<T>, DatabaseError>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        tracing::warn!(table, error = %e, "catalog fetch failed; using empty list");
        Vec::new()
    })
}

impl CatalogService {
    /// Fetch streams, courses, universities, offerings, certification
    /// categories and certification courses at the same time.
    ///
    /// Never fails: a table that cannot be read comes back empty.
    pub async fn load_snapshot(&self) -> CatalogSnapshot {
        let (streams, courses, universities, offerings, categories, certifications) = tokio::join!(
            self.list_streams(),
            self.list_courses(),
            self.list_universities(),
            self.list_offerings(),
            self.list_certification_categories(),
            self.list_certification_courses(),
        );

        let snapshot = CatalogSnapshot {
            streams: or_empty("streams", streams),
            courses: or_empty("courses", courses),
            universities: or_empty("universities", universities),
            offerings: or_empty("university_courses", offerings),
            categories: or_empty("certification_categories", categories),
            certifications: or_empty("certification_courses", certifications),
        };
        tracing::debug!(
            streams = snapshot.streams.len(),
            courses = snapshot.courses.len(),
            universities = snapshot.universities.len(),
            "loaded catalog snapshot"
        );
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{
        seed_category, seed_course, seed_stream, seed_university, test_service,
    };

    use super::*;

    #[tokio::test]
    async fn loads_every_table() {
        let svc = test_service().await;
        let stream = seed_stream(&svc, "Engineering").await;
        let course = seed_course(&svc, "BTech", &stream.id).await;
        let uni = seed_university(&svc, "Northfield", "Pune").await;
        svc.assign_course(&course.id, &[uni.id.clone()]).await.unwrap();
        seed_category(&svc, "Data").await;

        let snapshot = svc.load_snapshot().await;
        assert_eq!(snapshot.streams.len(), 1);
        assert_eq!(snapshot.courses.len(), 1);
        assert_eq!(snapshot.universities.len(), 1);
        assert_eq!(snapshot.offerings.len(), 1);
        assert_eq!(snapshot.categories.len(), 1);
        assert!(snapshot.certifications.is_empty());
    }

    #[tokio::test]
    async fn failed_table_degrades_to_empty() {
        let svc = test_service().await;
        seed_stream(&svc, "Engineering").await;
        svc.db()
            .conn()
            .execute("DROP TABLE certification_courses", ())
            .await
            .unwrap();

        let snapshot = svc.load_snapshot().await;
        assert_eq!(snapshot.streams.len(), 1);
        assert!(snapshot.certifications.is_empty());
    }

    #[test]
    fn or_empty_keeps_rows() {
        assert_eq!(or_empty("streams", Ok::<_, DatabaseError>(vec![1, 2])), vec![1, 2]);
        assert!(or_empty::<u8>("streams", Err(DatabaseError::NoResult)).is_empty());
    }
}
