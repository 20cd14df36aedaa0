//! Breakpoints, roles, menu kinds, and the sign-in modal state machine.
//!
//! All enums serialize in `snake_case` unless a variant needs an explicit name
//! (the `2xl` breakpoint). The modal state provides `allowed_next_states()` to
//! enforce valid transitions, the same way entity lifecycles are checked.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Breakpoint
// ---------------------------------------------------------------------------

/// Responsive screen-width tier controlling mega-menu limits.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Breakpoint {
    Sm,
    Md,
    #[default]
    Lg,
    Xl,
    #[serde(rename = "2xl")]
    Xxl,
}

impl Breakpoint {
    /// Every breakpoint, narrowest first.
    pub const ALL: [Self; 5] = [Self::Sm, Self::Md, Self::Lg, Self::Xl, Self::Xxl];

    /// Classify a viewport width in CSS pixels.
    ///
    /// ```text
    /// < 640 sm | < 768 md | < 1024 lg | < 1280 xl | otherwise 2xl
    /// ```
    #[must_use]
    pub const fn from_width(width: u32) -> Self {
        if width < 640 {
            Self::Sm
        } else if width < 768 {
            Self::Md
        } else if width < 1024 {
            Self::Lg
        } else if width < 1280 {
            Self::Xl
        } else {
            Self::Xxl
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Role stored on a user profile. Anything other than `admin` is a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Student,
}

impl Role {
    /// Parse a stored role string. Unknown values map to `Student`.
    #[must_use]
    pub fn from_stored(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("admin") {
            Self::Admin
        } else {
            Self::Student
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Student => "student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MenuKind
// ---------------------------------------------------------------------------

/// The three header mega-menus and their listing pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MenuKind {
    Courses,
    Colleges,
    Certifications,
}

impl MenuKind {
    /// Path of the listing page, also the "view all" target.
    #[must_use]
    pub const fn listing_path(self) -> &'static str {
        match self {
            Self::Courses => "/courses",
            Self::Colleges => "/colleges",
            Self::Certifications => "/certifications",
        }
    }

    /// Query parameter that carries the category selection on the listing page.
    #[must_use]
    pub const fn category_param(self) -> &'static str {
        match self {
            Self::Courses | Self::Colleges => "stream",
            Self::Certifications => "category",
        }
    }

    /// Link target for a single menu item.
    #[must_use]
    pub fn item_href(self, id: &str) -> String {
        match self {
            Self::Courses => format!("/courses/{id}"),
            Self::Colleges => format!("/colleges?view={id}"),
            Self::Certifications => format!("/certifications/{id}"),
        }
    }

    /// Link target for a category entry in the left column.
    #[must_use]
    pub fn category_href(self, id: &str) -> String {
        format!("{}?{}={id}", self.listing_path(), self.category_param())
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Courses => "courses",
            Self::Colleges => "colleges",
            Self::Certifications => "certifications",
        }
    }
}

impl fmt::Display for MenuKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EnquiryKind
// ---------------------------------------------------------------------------

/// Which of the two enquiry shapes a listing or export covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EnquiryKind {
    Course,
    Certification,
}

impl EnquiryKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Course => "course",
            Self::Certification => "certification",
        }
    }
}

impl fmt::Display for EnquiryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AuthModal
// ---------------------------------------------------------------------------

/// Which authentication dialog is showing.
///
/// ```text
/// closed → sign_in → sign_up (switch)
///        → sign_up
/// sign_in | sign_up → closed
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum AuthModal {
    #[default]
    Closed,
    SignIn,
    SignUp,
}

impl AuthModal {
    #[must_use]
    #[allow(clippy::match_same_arms)]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Closed => &[Self::SignIn, Self::SignUp],
            Self::SignIn => &[Self::Closed, Self::SignUp],
            Self::SignUp => &[Self::Closed],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Move to `next`, or stay put when the transition is not allowed.
    #[must_use]
    pub fn transition(self, next: Self) -> Self {
        if self.can_transition_to(next) { next } else { self }
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Closed)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::SignIn => "sign_in",
            Self::SignUp => "sign_up",
        }
    }
}

impl fmt::Display for AuthModal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
