//! Course repository, including the course detail view.

use campus_core::documents::{jobs_section, syllabus_section};
use campus_core::entities::{Course, University};
use campus_core::ids::PREFIX_COURSE;
use campus_core::responses::CourseDetail;

use crate::error::DatabaseError;
use crate::helpers::{UpdateSql, get_opt_string, json_text, parse_optional_json, required};
use crate::repos::university::{UNIVERSITY_COLUMNS, row_to_university};
use crate::service::CatalogService;
use crate::updates::course::CourseUpdate;

pub(crate) const COURSE_COLUMNS: &str =
    "id, name, stream_id, description, duration, syllabus, jobs_info";

/// Input for creating a course. Documents are already parsed.
#[derive(Debug, Clone, Default)]
pub struct NewCourse {
    pub name: String,
    pub stream_id: String,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub syllabus: Option<serde_json::Value>,
    pub jobs_info: Option<serde_json::Value>,
}

pub(crate) fn row_to_course(row: &libsql::Row) -> Result<Course, DatabaseError> {
    Ok(Course {
        id: row.get::<String>(0)?,
        name: row.get::<String>(1)?,
        stream_id: get_opt_string(row, 2)?,
        description: get_opt_string(row, 3)?,
        duration: get_opt_string(row, 4)?,
        syllabus: parse_optional_json(get_opt_string(row, 5)?.as_deref())?,
        jobs_info: parse_optional_json(get_opt_string(row, 6)?.as_deref())?,
    })
}

impl CatalogService {
    pub async fn create_course(&self, input: &NewCourse) -> Result<Course, DatabaseError> {
        let name = required(&input.name, "Course name and stream are required.")?;
        let stream_id = required(&input.stream_id, "Course name and stream are required.")?;
        self.get_stream(stream_id).await?;

        let id = self.db().generate_id(PREFIX_COURSE).await?;
        let syllabus = json_text(input.syllabus.as_ref());
        let jobs_info = json_text(input.jobs_info.as_ref());

        self.db()
            .execute_with(
                "INSERT INTO courses (id, name, stream_id, description, duration, syllabus, jobs_info)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                || {
                    libsql::params![
                        id.as_str(),
                        name,
                        stream_id,
                        input.description.as_deref(),
                        input.duration.as_deref(),
                        syllabus.as_deref(),
                        jobs_info.as_deref()
                    ]
                },
            )
            .await?;

        tracing::info!(course_id = %id, name, "created course");
        Ok(Course {
            id,
            name: name.to_string(),
            stream_id: Some(stream_id.to_string()),
            description: input.description.clone(),
            duration: input.duration.clone(),
            syllabus: input.syllabus.clone(),
            jobs_info: input.jobs_info.clone(),
        })
    }

    pub async fn get_course(&self, id: &str) -> Result<Course, DatabaseError> {
        let sql = format!("SELECT {COURSE_COLUMNS} FROM courses WHERE id = ?1");
        let mut rows = self.db().query_with(&sql, || [id]).await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found(format!("Course {id} not found.")))?;
        row_to_course(&row)
    }

    pub async fn list_courses(&self) -> Result<Vec<Course>, DatabaseError> {
        let sql = format!("SELECT {COURSE_COLUMNS} FROM courses ORDER BY name");
        let mut rows = self.db().query_with(&sql, || ()).await?;

        let mut courses = Vec::new();
        while let Some(row) = rows.next().await? {
            courses.push(row_to_course(&row)?);
        }
        Ok(courses)
    }

    pub async fn update_course(
        &self,
        id: &str,
        update: CourseUpdate,
    ) -> Result<Course, DatabaseError> {
        let mut sql = UpdateSql::new();

        if let Some(ref name) = update.name {
            sql.set("name", required(name, "Course name is required.")?);
        }
        if let Some(ref stream_id) = update.stream_id {
            self.get_stream(stream_id).await?;
            sql.set("stream_id", stream_id.as_str());
        }
        if let Some(ref description) = update.description {
            sql.set("description", description.clone());
        }
        if let Some(ref duration) = update.duration {
            sql.set("duration", duration.clone());
        }
        if let Some(ref syllabus) = update.syllabus {
            sql.set("syllabus", json_text(syllabus.as_ref()));
        }
        if let Some(ref jobs_info) = update.jobs_info {
            sql.set("jobs_info", json_text(jobs_info.as_ref()));
        }

        if sql.is_empty() {
            return self.get_course(id).await;
        }

        let (sql, params) = sql.finish("courses", id);
        let affected = self
            .db()
            .execute_with(&sql, || libsql::params_from_iter(params.clone()))
            .await?;
        if affected == 0 {
            return Err(DatabaseError::not_found(format!("Course {id} not found.")));
        }

        tracing::info!(course_id = id, "updated course");
        self.get_course(id).await
    }

    /// Delete a course and its university offerings in one transaction.
    pub async fn delete_course(&self, id: &str) -> Result<(), DatabaseError> {
        let tx = self.db().conn().transaction().await?;
        tx.execute("DELETE FROM university_courses WHERE course_id = ?1", [id])
            .await?;
        let affected = tx.execute("DELETE FROM courses WHERE id = ?1", [id]).await?;
        if affected == 0 {
            tx.rollback().await?;
            return Err(DatabaseError::not_found(
                "Couldn't find the selected course to delete.",
            ));
        }
        tx.commit().await?;

        tracing::info!(course_id = id, "deleted course");
        Ok(())
    }

    /// Course page data: stream name, syllabus and jobs tabs, and the
    /// universities offering the course.
    pub async fn course_detail(&self, id: &str) -> Result<CourseDetail, DatabaseError> {
        let course = self.get_course(id).await?;

        let stream_name = match course.stream_id.as_deref() {
            Some(stream_id) => match self.get_stream(stream_id).await {
                Ok(stream) => Some(stream.name),
                Err(DatabaseError::NotFound(_)) => None,
                Err(e) => return Err(e),
            },
            None => None,
        };

        let sql = format!(
            "SELECT {} FROM universities u
             JOIN university_courses uc ON uc.university_id = u.id
             WHERE uc.course_id = ?1
             GROUP BY u.id
             ORDER BY u.name",
            qualified(UNIVERSITY_COLUMNS, "u")
        );
        let mut rows = self.db().query_with(&sql, || [id]).await?;
        let mut universities: Vec<University> = Vec::new();
        while let Some(row) = rows.next().await? {
            universities.push(row_to_university(&row)?);
        }

        Ok(CourseDetail {
            syllabus: syllabus_section(course.syllabus.as_ref()),
            jobs: jobs_section(course.jobs_info.as_ref()),
            stream_name,
            universities,
            course,
        })
    }
}

/// Prefix every column in a comma-separated list with `alias.`.
pub(crate) fn qualified(columns: &str, alias: &str) -> String {
    columns
        .split(',')
        .map(|column| format!("{alias}.{}", column.trim()))
        .collect::<Vec<_>>()
        .join(", ")
}
