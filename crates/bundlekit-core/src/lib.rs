//! Core types for the bundlekit workflow.
//!
//! This crate holds the pieces of the workflow that need no I/O: the embedded
//! icon catalog, the fuzzy query filter, CSS colour validation, and the
//! script-filter feedback model the launcher consumes.

pub mod catalog;
pub mod colour;
pub mod feedback;
pub mod filter;
