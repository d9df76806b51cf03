//! Test utilities for the ISIR gateway CLI
//!
//! This crate provides mock implementations of the collaborator traits
//! (authorization, record API, filesystem) with call counting, so the
//! command orchestrator can be tested without credentials or network access.

pub mod mocks;

// Re-export commonly used types
pub use mocks::{MockAuthProvider, MockFileReader, MockRecordApi};
