//! Unified error types surfaced by the runtime API.
use thiserror::Error;

use game_core::{ConfigError, ErrorSeverity, GameError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to load content")]
    Content(#[source] anyhow::Error),

    #[error("class slot {slot} is out of range ({available} classes)")]
    UnknownClassSlot { slot: usize, available: usize },
}

impl RuntimeError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::Config(err) => err.severity(),
            RuntimeError::Content(_) => ErrorSeverity::Fatal,
            RuntimeError::UnknownClassSlot { .. } => ErrorSeverity::Validation,
        }
    }
}
