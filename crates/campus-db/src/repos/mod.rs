//! Repository modules implementing operations for every Campus entity.
//!
//! Each module adds methods to `CatalogService` via `impl CatalogService` blocks.

pub mod certification;
pub mod course;
pub mod enquiry;
pub mod news;
pub mod newsletter;
pub mod offering;
pub mod overview;
pub mod profile;
pub mod snapshot;
pub mod stream;
pub mod university;
