//! Command orchestration

pub mod command_orchestrator;

pub use command_orchestrator::{
    Command, CommandArgs, CommandOrchestrator, CommandOutcome, UPLOAD_AWARD_YEARS,
};
