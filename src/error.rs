use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FfError {
    #[error("failed to launch transcoder: {0}")]
    Launch(String),
    #[error("external dependency missing: {0}")]
    Dependency(String),
    #[error("failed to launch probe: {0}")]
    ProbeLaunch(String),
    #[error("unexpected probe output: {0}")]
    ProbeParse(String),
    #[error("output capture task failed: {0}")]
    Task(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl FfError {
    pub fn launch(message: impl Display) -> Self {
        Self::Launch(message.to_string())
    }

    pub fn dependency(message: impl Display) -> Self {
        Self::Dependency(message.to_string())
    }

    pub fn probe_launch(message: impl Display) -> Self {
        Self::ProbeLaunch(message.to_string())
    }

    pub fn probe_parse(message: impl Display) -> Self {
        Self::ProbeParse(message.to_string())
    }

    /// True when the child process never started.
    pub fn is_launch_failure(&self) -> bool {
        matches!(
            self,
            FfError::Launch(_) | FfError::Dependency(_) | FfError::ProbeLaunch(_)
        )
    }
}
