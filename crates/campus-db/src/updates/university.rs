//! University update builder.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct UniversityUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accreditation: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<Option<String>>,
}

pub struct UniversityUpdateBuilder(UniversityUpdate);

macro_rules! optional_setters {
    ($($field:ident),+ $(,)?) => {
        $(
            #[must_use]
            pub fn $field(mut self, value: Option<String>) -> Self {
                self.0.$field = Some(value);
                self
            }
        )+
    };
}

impl UniversityUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(UniversityUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.0.location = Some(location.into());
        self
    }

    optional_setters!(
        image_url,
        logo_url,
        package,
        accreditation,
        description,
        about,
        website,
    );

    #[must_use]
    pub fn build(self) -> UniversityUpdate {
        self.0
    }
}

impl Default for UniversityUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
