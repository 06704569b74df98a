//! Structured error types for the BioChat workspace.

mod model_error;

pub use model_error::ModelError;

/// Workspace-wide error aggregate.
#[derive(Debug, thiserror::Error)]
pub enum BioChatError {
    #[error(transparent)]
    ModelError(#[from] ModelError),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type BioChatResult<T> = Result<T, BioChatError>;
