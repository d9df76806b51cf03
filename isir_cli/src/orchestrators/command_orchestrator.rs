//! Command orchestrator
//!
//! Selects a workflow from the command argument and drives its
//! authorize-then-act sequence. Each workflow is a linear chain of awaited
//! steps; preconditions short-circuit before any remote call is made, and
//! failures come back as values for the CLI boundary to report.

use std::path::PathBuf;
use std::sync::Arc;

use isir_client_core::{AuthorizationProvider, CorrectionFile, FileReader, RecordApi, UploadId};
use log::{debug, info};

use crate::config::AppConfig;
use crate::date_range::DateRange;
use crate::error::{CorrectionsError, UploadError, WorkflowError};

/// Award-year range the record API expects on correction uploads
pub const UPLOAD_AWARD_YEARS: &str = "3000-3001";

/// The closed set of operations selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Corrections,
    Upload,
    Unsupported,
}

impl Command {
    /// Case-insensitive match against the canonical command names
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "corrections" => Self::Corrections,
            "upload" => Self::Upload,
            _ => Self::Unsupported,
        }
    }
}

/// Raw per-invocation arguments handed to the orchestrator
#[derive(Debug, Clone, Default)]
pub struct CommandArgs {
    pub command: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub file: Option<PathBuf>,
}

/// What a completed invocation produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Correction files fetched; an empty batch is still a success
    Corrections(Vec<CorrectionFile>),
    /// Payload uploaded; carries the API-assigned file id
    Uploaded(UploadId),
    /// Unrecognized command; nothing executed
    Unsupported,
}

/// Orchestrator for the gateway commands
///
/// Configuration and collaborators are injected at construction; one
/// orchestrator serves one process invocation.
pub struct CommandOrchestrator {
    config: AppConfig,
    auth: Arc<dyn AuthorizationProvider>,
    api: Arc<dyn RecordApi>,
    files: Arc<dyn FileReader>,
}

impl CommandOrchestrator {
    pub fn new(
        config: AppConfig,
        auth: Arc<dyn AuthorizationProvider>,
        api: Arc<dyn RecordApi>,
        files: Arc<dyn FileReader>,
    ) -> Self {
        Self {
            config,
            auth,
            api,
            files,
        }
    }

    /// Select and run the workflow named by the command argument
    pub async fn dispatch(&self, args: &CommandArgs) -> Result<CommandOutcome, WorkflowError> {
        let Some(raw) = args.command.as_deref() else {
            return Err(WorkflowError::MissingCommand);
        };

        match Command::parse(raw) {
            Command::Corrections => Ok(self.fetch_corrections(args).await?),
            Command::Upload => Ok(self.upload_file(args).await?),
            Command::Unsupported => {
                debug!("unsupported command detected: {raw}");
                Ok(CommandOutcome::Unsupported)
            }
        }
    }

    /// Corrections workflow: output directory and date-range preconditions,
    /// then authorize and fetch
    async fn fetch_corrections(
        &self,
        args: &CommandArgs,
    ) -> Result<CommandOutcome, CorrectionsError> {
        let Some(output_dir) = args.output_dir.as_deref() else {
            return Err(CorrectionsError::OutputDir(None));
        };
        if !output_dir.exists() {
            return Err(CorrectionsError::OutputDir(Some(output_dir.to_path_buf())));
        }

        let range = DateRange::validate(args.start_date.as_deref(), args.end_date.as_deref())?;

        let oauth = &self.config.oauth;
        let authorization = self
            .auth
            .get_auth_header(&oauth.credentials, &oauth.scope)
            .await
            .map_err(CorrectionsError::Authorization)?;

        let files = self
            .api
            .get_corrections(
                &authorization,
                &range.wire_start(),
                &range.wire_end(),
                output_dir,
            )
            .await
            .map_err(CorrectionsError::Fetch)?;

        if files.is_empty() {
            info!("No ISIR corrections found.");
        } else {
            info!(
                "{} ISIR correction files were successfully retrieved.",
                files.len()
            );
            for file in &files {
                info!("File Name: {}", file.name);
            }
        }

        Ok(CommandOutcome::Corrections(files))
    }

    /// Upload workflow: read the payload, authorize, upload
    async fn upload_file(&self, args: &CommandArgs) -> Result<CommandOutcome, UploadError> {
        let file = match args.file.as_deref() {
            Some(file) if !file.as_os_str().is_empty() => file,
            _ => return Err(UploadError::MissingFileArgument),
        };

        let content = self
            .files
            .read_text(file)
            .await
            .map_err(|source| UploadError::Read {
                path: file.to_path_buf(),
                source,
            })?;

        let oauth = &self.config.oauth;
        let authorization = self
            .auth
            .get_auth_header(&oauth.credentials, &oauth.scope)
            .await
            .map_err(UploadError::Authorization)?;

        let id = self
            .api
            .upload(&authorization, UPLOAD_AWARD_YEARS, &content)
            .await
            .map_err(UploadError::Rejected)?;

        info!("file uploaded successfully; file id={id}");
        Ok(CommandOutcome::Uploaded(id))
    }
}
