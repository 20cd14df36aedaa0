//! Shared fixtures for in-crate repo tests.

use campus_core::entities::{CertificationCategory, Course, Stream, University};

use crate::repos::course::NewCourse;
use crate::repos::university::NewUniversity;
use crate::service::CatalogService;

/// In-memory service with the schema applied.
pub async fn test_service() -> CatalogService {
    CatalogService::new_local(":memory:").await.unwrap()
}

pub async fn seed_stream(svc: &CatalogService, name: &str) -> Stream {
    svc.create_stream(name).await.unwrap()
}

pub async fn seed_course(svc: &CatalogService, name: &str, stream_id: &str) -> Course {
    svc.create_course(&NewCourse {
        name: name.into(),
        stream_id: stream_id.into(),
        ..NewCourse::default()
    })
    .await
    .unwrap()
}

pub async fn seed_university(svc: &CatalogService, name: &str, location: &str) -> University {
    svc.create_university(&NewUniversity {
        name: name.into(),
        location: location.into(),
        ..NewUniversity::default()
    })
    .await
    .unwrap()
}

pub async fn seed_category(svc: &CatalogService, name: &str) -> CertificationCategory {
    svc.create_certification_category(name).await.unwrap()
}
