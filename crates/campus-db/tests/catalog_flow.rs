//! End-to-end catalog flow against a file-backed database.

use campus_catalog::index::HierarchyIndex;
use campus_catalog::Selection;
use campus_catalog::filter::{UniversityFilters, filter_universities};
use campus_catalog::menu::colleges_menu;
use campus_core::entities::{EnquiryTarget, NewEnquiry};
use campus_core::enums::{Breakpoint, EnquiryKind};
use campus_core::limits::MenuLimits;
use campus_db::error::DatabaseError;
use campus_db::repos::course::NewCourse;
use campus_db::repos::offering::ALREADY_ASSIGNED;
use campus_db::repos::university::NewUniversity;
use campus_db::service::CatalogService;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

async fn file_service(dir: &TempDir) -> CatalogService {
    let path = dir.path().join("campus.db");
    CatalogService::new_local(path.to_str().unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn admin_builds_catalog_and_student_enquires() {
    let dir = TempDir::new().unwrap();
    let svc = file_service(&dir).await;

    let engineering = svc.create_stream("Engineering").await.unwrap();
    let medical = svc.create_stream("Medical").await.unwrap();
    let btech = svc
        .create_course(&NewCourse {
            name: "BTech".into(),
            stream_id: engineering.id.clone(),
            ..NewCourse::default()
        })
        .await
        .unwrap();
    let mbbs = svc
        .create_course(&NewCourse {
            name: "MBBS".into(),
            stream_id: medical.id.clone(),
            ..NewCourse::default()
        })
        .await
        .unwrap();

    let north = svc
        .create_university(&NewUniversity {
            name: "Northfield".into(),
            location: "Pune".into(),
            ..NewUniversity::default()
        })
        .await
        .unwrap();
    let south = svc
        .create_university(&NewUniversity {
            name: "Southgate".into(),
            location: "Chennai".into(),
            ..NewUniversity::default()
        })
        .await
        .unwrap();

    let outcome = svc
        .assign_course(&btech.id, &[north.id.clone(), south.id.clone()])
        .await
        .unwrap();
    assert_eq!(outcome.assigned.len(), 2);
    svc.assign_course(&mbbs.id, &[south.id.clone()]).await.unwrap();

    let err = svc
        .assign_course(&btech.id, &[north.id.clone()])
        .await
        .unwrap_err();
    assert!(matches!(err, DatabaseError::Conflict(ref m) if m == ALREADY_ASSIGNED));

    // Menu over the stored catalog.
    let snapshot = svc.load_snapshot().await;
    let index = HierarchyIndex::new(&snapshot.courses, &snapshot.offerings);
    let menu = colleges_menu(
        &snapshot.streams,
        &snapshot.universities,
        &index,
        Some(medical.id.as_str()),
        Breakpoint::Lg,
        &MenuLimits::default(),
    );
    let names: Vec<&str> = menu.visible_items.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Southgate"]);

    // Filtering by stream uses the same index.
    let selected = filter_universities(
        &snapshot.universities,
        &UniversityFilters {
            locations: Selection::default(),
            streams: Selection::single(engineering.id.clone()),
        },
        &index,
    );
    assert_eq!(selected.items.len(), 2);

    // A student enquires about BTech at Northfield.
    svc.submit_enquiry(&NewEnquiry {
        name: "Asha".into(),
        phone: "9800000000".into(),
        email: None,
        current_class: Some("12th".into()),
        target: EnquiryTarget::Course {
            course_id: Some(btech.id.clone()),
            college_id: Some(north.id.clone()),
        },
    })
    .await
    .unwrap();

    let rows = svc.enquiry_rows(EnquiryKind::Course, 20).await.unwrap();
    assert_eq!(rows[0].course_label, "BTech");
    assert_eq!(rows[0].college_label.as_deref(), Some("Northfield"));

    // Deleting the university keeps the enquiry but its label falls back.
    svc.delete_university(&north.id).await.unwrap();
    let rows = svc.enquiry_rows(EnquiryKind::Course, 20).await.unwrap();
    assert_eq!(rows[0].college_label.as_deref(), Some("N/A"));

    let detail = svc.course_detail(&btech.id).await.unwrap();
    assert_eq!(detail.universities.len(), 1);
    assert!(detail.syllabus.is_coming_soon());
}

#[tokio::test]
async fn data_survives_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let svc = file_service(&dir).await;
        svc.create_stream("Commerce").await.unwrap();
        svc.subscribe("reader@example.org").await.unwrap();
    }

    let svc = file_service(&dir).await;
    let streams = svc.list_streams().await.unwrap();
    assert_eq!(streams.len(), 1);
    assert_eq!(streams[0].name, "Commerce");
    assert_eq!(svc.list_subscriptions().await.unwrap().len(), 1);
}
