//! # campus-catalog
//!
//! Pure derivations over already-fetched catalog tables:
//!
//! - [`index`]: id-to-name label maps, parent-to-children groups, and the
//!   bidirectional university/course association
//! - [`menu`]: bounded, breakpoint-aware mega-menu view models
//! - [`filter`]: multi-select listing filters (OR within a group, AND across
//!   groups)
//! - [`query`]: one-time selection seeding from a page's query string
//!
//! Nothing here performs I/O or holds state between calls. Callers own the
//! active category and filter selections and pass them in.

pub mod filter;
pub mod index;
pub mod menu;
pub mod query;

pub use filter::{FilterGroup, FilterOutcome, Selection, apply_filters};
pub use index::{AssociationIndex, HierarchyIndex, IdNameMap, ParentChildIndex};
pub use menu::{MegaMenu, MenuEntry, MenuState, compose_menu};
pub use query::QuerySeed;
