//! Shared utilities.
//!
//! Hashing and permission helpers used by the pipeline steps.

pub mod fs;
pub mod hash;
