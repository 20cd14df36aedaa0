//! Update builder types for entity mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some`
//! fields generate SET clauses in the dynamic UPDATE SQL. A nested
//! `Option<Option<_>>` distinguishes "leave alone" from "clear".

pub mod certification;
pub mod course;
pub mod profile;
pub mod university;
