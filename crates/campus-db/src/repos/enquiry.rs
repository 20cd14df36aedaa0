//! Enquiry repository.
//!
//! The target of an enquiry is a tagged union in memory. On insert, the
//! columns belonging to the other shape are always written as NULL, and a
//! CHECK constraint rejects rows that carry both.

use campus_catalog::index::{NOT_AVAILABLE, UNKNOWN_COURSE, build_id_name_map};
use campus_core::entities::{Enquiry, EnquiryTarget, NewEnquiry};
use campus_core::enums::EnquiryKind;
use campus_core::ids::PREFIX_ENQUIRY;
use campus_core::responses::EnquiryRow;
use chrono::Utc;

use crate::error::DatabaseError;
use crate::helpers::{get_bool, get_opt_string, parse_datetime};
use crate::service::CatalogService;

const ENQUIRY_COLUMNS: &str = "id, name, phone, email, current_class, course_id, college_id, \
     certification_course_id, called, remark, created_at, updated_at";

fn row_to_enquiry(row: &libsql::Row) -> Result<Enquiry, DatabaseError> {
    let target = match get_opt_string(row, 7)? {
        Some(certification_course_id) => EnquiryTarget::Certification {
            certification_course_id,
        },
        None => EnquiryTarget::Course {
            course_id: get_opt_string(row, 5)?,
            college_id: get_opt_string(row, 6)?,
        },
    };

    Ok(Enquiry {
        id: row.get::<String>(0)?,
        name: row.get::<String>(1)?,
        phone: row.get::<String>(2)?,
        email: get_opt_string(row, 3)?,
        current_class: get_opt_string(row, 4)?,
        target,
        called: get_bool(row, 8)?,
        remark: row.get::<String>(9)?,
        created_at: parse_datetime(&row.get::<String>(10)?)?,
        updated_at: parse_datetime(&row.get::<String>(11)?)?,
    })
}

const fn kind_filter(kind: EnquiryKind) -> &'static str {
    match kind {
        EnquiryKind::Course => "certification_course_id IS NULL",
        EnquiryKind::Certification => "certification_course_id IS NOT NULL",
    }
}

impl CatalogService {
    pub async fn submit_enquiry(&self, input: &NewEnquiry) -> Result<Enquiry, DatabaseError> {
        input.validate()?;
        if let EnquiryTarget::Certification {
            certification_course_id,
        } = &input.target
            && certification_course_id.trim().is_empty()
        {
            return Err(DatabaseError::validation(
                "Please choose a certification course.",
            ));
        }

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_ENQUIRY).await?;
        let target = &input.target;

        self.db()
            .execute_with(
                "INSERT INTO enquiries (id, name, phone, email, current_class, course_id,
                     college_id, certification_course_id, called, remark, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, 0, '', ?9, ?10)",
                || {
                    libsql::params![
                        id.as_str(),
                        input.name.trim(),
                        input.phone.trim(),
                        input.email.as_deref(),
                        input.current_class.as_deref(),
                        target.course_id(),
                        target.college_id(),
                        target.certification_course_id(),
                        now.to_rfc3339(),
                        now.to_rfc3339()
                    ]
                },
            )
            .await?;

        tracing::info!(enquiry_id = %id, kind = %target.kind(), "submitted enquiry");
        Ok(Enquiry {
            id,
            name: input.name.trim().to_string(),
            phone: input.phone.trim().to_string(),
            email: input.email.clone(),
            current_class: input.current_class.clone(),
            target: target.clone(),
            called: false,
            remark: String::new(),
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_enquiry(&self, id: &str) -> Result<Enquiry, DatabaseError> {
        let sql = format!("SELECT {ENQUIRY_COLUMNS} FROM enquiries WHERE id = ?1");
        let mut rows = self.db().query_with(&sql, || [id]).await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found(format!("Enquiry {id} not found.")))?;
        row_to_enquiry(&row)
    }

    /// Enquiries of one shape, newest first.
    pub async fn list_enquiries(
        &self,
        kind: EnquiryKind,
        limit: u32,
    ) -> Result<Vec<Enquiry>, DatabaseError> {
        let sql = format!(
            "SELECT {ENQUIRY_COLUMNS} FROM enquiries WHERE {} ORDER BY created_at DESC LIMIT ?1",
            kind_filter(kind)
        );
        let mut rows = self.db().query_with(&sql, || [i64::from(limit)]).await?;

        let mut enquiries = Vec::new();
        while let Some(row) = rows.next().await? {
            enquiries.push(row_to_enquiry(&row)?);
        }
        Ok(enquiries)
    }

    /// Enquiries with course, college, or certification names resolved.
    ///
    /// Missing course and college references read "N/A"; a missing
    /// certification course reads "Unknown Course".
    pub async fn enquiry_rows(
        &self,
        kind: EnquiryKind,
        limit: u32,
    ) -> Result<Vec<EnquiryRow>, DatabaseError> {
        let enquiries = self.list_enquiries(kind, limit).await?;

        let rows = match kind {
            EnquiryKind::Course => {
                let courses = self.list_courses().await?;
                let universities = self.list_universities().await?;
                let course_names = build_id_name_map(&courses);
                let college_names = build_id_name_map(&universities);
                enquiries
                    .into_iter()
                    .map(|enquiry| EnquiryRow {
                        course_label: course_names
                            .label_or(enquiry.target.course_id(), NOT_AVAILABLE)
                            .to_string(),
                        college_label: Some(
                            college_names
                                .label_or(enquiry.target.college_id(), NOT_AVAILABLE)
                                .to_string(),
                        ),
                        enquiry,
                    })
                    .collect()
            }
            EnquiryKind::Certification => {
                let certifications = self.list_certification_courses().await?;
                let names = build_id_name_map(&certifications);
                enquiries
                    .into_iter()
                    .map(|enquiry| EnquiryRow {
                        course_label: names
                            .label_or(enquiry.target.certification_course_id(), UNKNOWN_COURSE)
                            .to_string(),
                        college_label: None,
                        enquiry,
                    })
                    .collect()
            }
        };
        Ok(rows)
    }

    /// Record whether the student has been phoned. Bumps `updated_at`.
    pub async fn set_enquiry_called(
        &self,
        id: &str,
        called: bool,
    ) -> Result<Enquiry, DatabaseError> {
        let now = Utc::now().to_rfc3339();
        let affected = self
            .db()
            .execute_with(
                "UPDATE enquiries SET called = ?1, updated_at = ?2 WHERE id = ?3",
                || libsql::params![i64::from(called), now.as_str(), id],
            )
            .await?;
        if affected == 0 {
            return Err(DatabaseError::not_found(format!("Enquiry {id} not found.")));
        }
        tracing::info!(enquiry_id = id, called, "updated called flag");
        self.get_enquiry(id).await
    }

    /// Replace the administrator remark. Bumps `updated_at`.
    pub async fn set_enquiry_remark(
        &self,
        id: &str,
        remark: &str,
    ) -> Result<Enquiry, DatabaseError> {
        let now = Utc::now().to_rfc3339();
        let affected = self
            .db()
            .execute_with(
                "UPDATE enquiries SET remark = ?1, updated_at = ?2 WHERE id = ?3",
                || libsql::params![remark.trim(), now.as_str(), id],
            )
            .await?;
        if affected == 0 {
            return Err(DatabaseError::not_found(format!("Enquiry {id} not found.")));
        }
        tracing::info!(enquiry_id = id, "updated remark");
        self.get_enquiry(id).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::test_support::{seed_course, seed_stream, seed_university, test_service};

    use super::*;

    fn new_enquiry(target: EnquiryTarget) -> NewEnquiry {
        NewEnquiry {
            name: "Asha Rao".into(),
            phone: "9800000000".into(),
            email: Some("asha@example.org".into()),
            current_class: Some("12th".into()),
            target,
        }
    }

    #[tokio::test]
    async fn certification_enquiry_stores_null_course_columns() {
        let svc = test_service().await;
        let enquiry = svc
            .submit_enquiry(&new_enquiry(EnquiryTarget::Certification {
                certification_course_id: "crt-00000001".into(),
            }))
            .await
            .unwrap();

        let mut rows = svc
            .db()
            .conn()
            .query(
                "SELECT course_id, college_id, certification_course_id FROM enquiries WHERE id = ?1",
                [enquiry.id.as_str()],
            )
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<Option<String>>(0).unwrap(), None);
        assert_eq!(row.get::<Option<String>>(1).unwrap(), None);
        assert_eq!(
            row.get::<Option<String>>(2).unwrap().as_deref(),
            Some("crt-00000001")
        );
    }

    #[tokio::test]
    async fn course_enquiry_stores_null_certification_column() {
        let svc = test_service().await;
        let enquiry = svc
            .submit_enquiry(&new_enquiry(EnquiryTarget::Course {
                course_id: Some("crs-00000001".into()),
                college_id: Some("uni-00000001".into()),
            }))
            .await
            .unwrap();

        let mut rows = svc
            .db()
            .conn()
            .query(
                "SELECT certification_course_id FROM enquiries WHERE id = ?1",
                [enquiry.id.as_str()],
            )
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<Option<String>>(0).unwrap(), None);

        let fetched = svc.get_enquiry(&enquiry.id).await.unwrap();
        assert_eq!(fetched.target, enquiry.target);
    }

    #[tokio::test]
    async fn lists_are_split_by_shape() {
        let svc = test_service().await;
        svc.submit_enquiry(&new_enquiry(EnquiryTarget::Course {
            course_id: None,
            college_id: None,
        }))
        .await
        .unwrap();
        svc.submit_enquiry(&new_enquiry(EnquiryTarget::Certification {
            certification_course_id: "crt-00000001".into(),
        }))
        .await
        .unwrap();

        assert_eq!(svc.list_enquiries(EnquiryKind::Course, 20).await.unwrap().len(), 1);
        assert_eq!(
            svc.list_enquiries(EnquiryKind::Certification, 20)
                .await
                .unwrap()
                .len(),
            1
        );
    }

    #[tokio::test]
    async fn rows_resolve_labels_with_fallbacks() {
        let svc = test_service().await;
        let stream = seed_stream(&svc, "Engineering").await;
        let course = seed_course(&svc, "BTech", &stream.id).await;
        let uni = seed_university(&svc, "Northfield", "Pune").await;

        svc.submit_enquiry(&new_enquiry(EnquiryTarget::Course {
            course_id: Some(course.id.clone()),
            college_id: None,
        }))
        .await
        .unwrap();
        svc.submit_enquiry(&new_enquiry(EnquiryTarget::Certification {
            certification_course_id: "crt-deadbeef".into(),
        }))
        .await
        .unwrap();

        let rows = svc.enquiry_rows(EnquiryKind::Course, 20).await.unwrap();
        assert_eq!(rows[0].course_label, "BTech");
        assert_eq!(rows[0].college_label.as_deref(), Some(NOT_AVAILABLE));
        assert_ne!(rows[0].college_label.as_deref(), Some(uni.name.as_str()));

        let rows = svc
            .enquiry_rows(EnquiryKind::Certification, 20)
            .await
            .unwrap();
        assert_eq!(rows[0].course_label, UNKNOWN_COURSE);
        assert_eq!(rows[0].college_label, None);
    }

    #[tokio::test]
    async fn called_and_remark_bump_updated_at() {
        let svc = test_service().await;
        let enquiry = svc
            .submit_enquiry(&new_enquiry(EnquiryTarget::Course {
                course_id: None,
                college_id: None,
            }))
            .await
            .unwrap();

        let called = svc.set_enquiry_called(&enquiry.id, true).await.unwrap();
        assert!(called.called);
        assert!(called.updated_at >= enquiry.updated_at);

        let remarked = svc
            .set_enquiry_remark(&enquiry.id, " call after 6pm ")
            .await
            .unwrap();
        assert_eq!(remarked.remark, "call after 6pm");
        assert!(remarked.called);
    }

    #[tokio::test]
    async fn missing_phone_is_rejected() {
        let svc = test_service().await;
        let mut input = new_enquiry(EnquiryTarget::Course {
            course_id: None,
            college_id: None,
        });
        input.phone = String::new();
        assert!(matches!(
            svc.submit_enquiry(&input).await,
            Err(DatabaseError::Core(_))
        ));
    }
}
