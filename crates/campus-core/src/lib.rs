//! # campus-core
//!
//! Core types, ID prefixes, and error types for Campus.
//!
//! This crate provides the foundational types shared across all Campus crates:
//! - Entity structs for the admissions catalog (streams, courses, universities,
//!   certification programs, enquiries, profiles, news)
//! - Enums for breakpoints, roles, and the sign-in modal state machine
//! - ID prefix constants
//! - Cross-cutting error types
//! - Breakpoint-indexed menu limits
//! - Structured course documents (syllabus, job outcomes)
//! - The catalog snapshot handed from storage to the catalog engines
//! - CLI response types

pub mod documents;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod ids;
pub mod limits;
pub mod responses;
pub mod snapshot;
