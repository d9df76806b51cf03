//! Gateway Client Core Library
//!
//! Clients for the two remote collaborators of the ISIR CLI: the OAuth-WRAP
//! identity service and the student-aid record API. Both are exposed behind
//! traits so the command orchestrator can be driven by test doubles.

pub mod auth;
pub mod error;
pub mod fs;
pub mod isirs;
pub mod secret;

// Re-export main types
pub use auth::{AuthHeader, AuthorizationProvider, WrapAuthClient};
pub use error::{Error, Result};
pub use fs::{FileReader, TokioFileReader};
pub use isirs::{CorrectionFile, IsirClient, RecordApi, UploadId};
pub use secret::{Credentials, Secret};
