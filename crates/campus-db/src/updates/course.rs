//! Course update builder.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct CourseUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syllabus: Option<Option<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jobs_info: Option<Option<serde_json::Value>>,
}

pub struct CourseUpdateBuilder(CourseUpdate);

impl CourseUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(CourseUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn stream_id(mut self, stream_id: impl Into<String>) -> Self {
        self.0.stream_id = Some(stream_id.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: Option<String>) -> Self {
        self.0.description = Some(description);
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Option<String>) -> Self {
        self.0.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn syllabus(mut self, syllabus: Option<serde_json::Value>) -> Self {
        self.0.syllabus = Some(syllabus);
        self
    }

    #[must_use]
    pub fn jobs_info(mut self, jobs_info: Option<serde_json::Value>) -> Self {
        self.0.jobs_info = Some(jobs_info);
        self
    }

    #[must_use]
    pub fn build(self) -> CourseUpdate {
        self.0
    }
}

impl Default for CourseUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
