//! ISIR Gateway Command Line Interface
//!
//! Command orchestration for the two gateway operations: fetching a
//! date-ranged batch of ISIR correction files and uploading a
//! record-correction payload. Exposed as a library so the orchestrator can
//! be exercised by integration tests with mocked collaborators.

pub mod config;
pub mod date_range;
pub mod error;
pub mod orchestrators;
