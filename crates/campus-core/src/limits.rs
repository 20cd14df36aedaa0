//! Breakpoint-indexed limits for the header mega-menus.
//!
//! Two independent tables: how many items (courses, colleges, certification
//! courses) to show, and how many categories (streams, certification
//! categories) to list in the left column. These are configuration data and
//! are loaded through `campus-config`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Breakpoint;

/// One value per breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BreakpointLimits {
    pub sm: usize,
    pub md: usize,
    pub lg: usize,
    pub xl: usize,
    #[serde(rename = "2xl")]
    pub xxl: usize,
}

impl BreakpointLimits {
    #[must_use]
    pub const fn get(&self, breakpoint: Breakpoint) -> usize {
        match breakpoint {
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
            Breakpoint::Xxl => self.xxl,
        }
    }
}

const fn default_item_count() -> BreakpointLimits {
    BreakpointLimits {
        sm: 6,
        md: 9,
        lg: 12,
        xl: 15,
        xxl: 18,
    }
}

const fn default_filter_count() -> BreakpointLimits {
    BreakpointLimits {
        sm: 5,
        md: 7,
        lg: 8,
        xl: 10,
        xxl: 12,
    }
}

/// Both mega-menu limit tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MenuLimits {
    /// Maximum visible items in the right column.
    #[serde(default = "default_item_count")]
    pub item_count: BreakpointLimits,

    /// Maximum visible categories in the left column.
    #[serde(default = "default_filter_count")]
    pub filter_count: BreakpointLimits,
}

impl Default for MenuLimits {
    fn default() -> Self {
        Self {
            item_count: default_item_count(),
            filter_count: default_filter_count(),
        }
    }
}

impl MenuLimits {
    #[must_use]
    pub const fn item_count_for(&self, breakpoint: Breakpoint) -> usize {
        self.item_count.get(breakpoint)
    }

    #[must_use]
    pub const fn filter_count_for(&self, breakpoint: Breakpoint) -> usize {
        self.filter_count.get(breakpoint)
    }
}
