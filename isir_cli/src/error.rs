//! Workflow error taxonomy
//!
//! Workflows return failures as values; nothing is caught and swallowed
//! inside them. The CLI boundary emits one log line per failure and applies
//! the fatality policy defined here.

use std::path::PathBuf;

use thiserror::Error;

use crate::date_range::DateRangeError;

/// Failures of the corrections workflow
#[derive(Error, Debug)]
pub enum CorrectionsError {
    /// Output directory argument missing or not present on disk
    #[error("output directory does not exist{}", fmt_output_dir(.0))]
    OutputDir(Option<PathBuf>),

    #[error("invalid date(s) detected: {0}")]
    InvalidDateRange(#[from] DateRangeError),

    #[error("error retrieving authorization: {0}")]
    Authorization(#[source] isir_client_core::Error),

    #[error("error retrieving ISIR corrections: {0}")]
    Fetch(#[source] isir_client_core::Error),
}

/// Failures of the upload workflow
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("invalid file argument detected")]
    MissingFileArgument,

    #[error("failed to read file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: isir_client_core::Error,
    },

    #[error("failed to obtain authorization: {0}")]
    Authorization(#[source] isir_client_core::Error),

    #[error("upload rejected: {0}")]
    Rejected(#[source] isir_client_core::Error),
}

/// Top-level workflow error reported at the CLI boundary
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("command parameter not found")]
    MissingCommand,

    #[error(transparent)]
    Corrections(#[from] CorrectionsError),

    #[error(transparent)]
    Upload(#[from] UploadError),
}

impl WorkflowError {
    /// Whether this failure aborts the invocation with a non-zero exit
    ///
    /// Remote failures during a corrections run are fatal; precondition
    /// failures and every upload failure are reported and the process exits
    /// clean. See DESIGN.md for the open question around the upload side of
    /// this policy.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            WorkflowError::Corrections(
                CorrectionsError::Authorization(_) | CorrectionsError::Fetch(_)
            )
        )
    }

    /// Log level for the single report line emitted at the CLI boundary
    ///
    /// A missing upload file argument is a warn-level no-op; everything
    /// else reports at error level.
    pub fn log_level(&self) -> log::Level {
        match self {
            WorkflowError::Upload(UploadError::MissingFileArgument) => log::Level::Warn,
            _ => log::Level::Error,
        }
    }
}

fn fmt_output_dir(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(": {}", path.display()),
        None => String::from(" (argument not provided)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error() -> isir_client_core::Error {
        isir_client_core::Error::api(500, "boom")
    }

    #[test]
    fn test_corrections_remote_failures_are_fatal() {
        assert!(WorkflowError::from(CorrectionsError::Authorization(api_error())).is_fatal());
        assert!(WorkflowError::from(CorrectionsError::Fetch(api_error())).is_fatal());
    }

    #[test]
    fn test_precondition_failures_are_not_fatal() {
        assert!(!WorkflowError::MissingCommand.is_fatal());
        assert!(!WorkflowError::from(CorrectionsError::OutputDir(None)).is_fatal());
        assert!(
            !WorkflowError::from(CorrectionsError::InvalidDateRange(DateRangeError::Missing))
                .is_fatal()
        );
    }

    #[test]
    fn test_upload_failures_are_never_fatal() {
        assert!(!WorkflowError::from(UploadError::MissingFileArgument).is_fatal());
        assert!(!WorkflowError::from(UploadError::Authorization(api_error())).is_fatal());
        assert!(!WorkflowError::from(UploadError::Rejected(api_error())).is_fatal());
    }

    #[test]
    fn test_missing_file_argument_reports_at_warn() {
        let error = WorkflowError::from(UploadError::MissingFileArgument);
        assert_eq!(error.log_level(), log::Level::Warn);

        let error = WorkflowError::from(UploadError::Rejected(api_error()));
        assert_eq!(error.log_level(), log::Level::Error);
    }

    #[test]
    fn test_display_embeds_underlying_detail() {
        let error = WorkflowError::from(UploadError::Rejected(isir_client_core::Error::api(
            403,
            "quota exceeded",
        )));

        assert!(error.to_string().contains("quota exceeded"));
    }

    #[test]
    fn test_output_dir_display_with_and_without_path() {
        let with_path = CorrectionsError::OutputDir(Some(PathBuf::from("/tmp/out")));
        assert!(with_path.to_string().contains("/tmp/out"));

        let without_path = CorrectionsError::OutputDir(None);
        assert!(without_path.to_string().contains("argument not provided"));
    }
}
