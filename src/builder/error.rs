//! Build and configuration errors.

use crate::machine::{ConfigIssue, MachineError};
use thiserror::Error;

/// Errors that can occur when building a state machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states registered. Call .states(..) before .build()")]
    NoStates,

    #[error(transparent)]
    Machine(#[from] MachineError),

    #[error("Configuration has {} issue(s): {}", .issues.len(), summarize(.issues))]
    InvalidConfiguration { issues: Vec<ConfigIssue> },
}

/// Errors that can occur when loading a machine from a configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse machine configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Machine(#[from] MachineError),
}

fn summarize(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
