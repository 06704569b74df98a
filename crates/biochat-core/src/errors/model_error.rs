/// Encoder subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("model load failed: {path}: {reason}")]
    ModelLoadFailed { path: String, reason: String },

    #[error("tokenizer load failed: {path}: {reason}")]
    TokenizerLoadFailed { path: String, reason: String },

    #[error("inference failed: {reason}")]
    InferenceFailed { reason: String },
}

impl ModelError {
    /// True for errors raised while loading the model or tokenizer, as
    /// opposed to errors raised while running it.
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            Self::ModelLoadFailed { .. } | Self::TokenizerLoadFailed { .. }
        )
    }
}
