//! Certification course update builder.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct CertificationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

pub struct CertificationUpdateBuilder(CertificationUpdate);

impl CertificationUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(CertificationUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn overview(mut self, overview: Option<String>) -> Self {
        self.0.overview = Some(overview);
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Option<String>) -> Self {
        self.0.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn category_id(mut self, category_id: impl Into<String>) -> Self {
        self.0.category_id = Some(category_id.into());
        self
    }

    #[must_use]
    pub fn build(self) -> CertificationUpdate {
        self.0
    }
}

impl Default for CertificationUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
