//! Configuration for the BioChat workspace.
//!
//! All values have working defaults; a `biochat.toml` file overrides them
//! section by section.

pub mod defaults;

mod chat_config;
mod log_config;
mod model_config;

pub use chat_config::ChatConfig;
pub use log_config::LogConfig;
pub use model_config::ModelConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{BioChatError, BioChatResult};

/// Top-level configuration aggregate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BioChatConfig {
    pub model: ModelConfig,
    pub chat: ChatConfig,
    pub log: LogConfig,
}

impl BioChatConfig {
    /// Load configuration from a TOML file.
    ///
    /// `None` or a missing file yields the defaults. A file that exists but
    /// does not parse is an error.
    pub fn load(path: Option<&Path>) -> BioChatResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw)
            .map_err(|e| BioChatError::ConfigError(format!("{}: {e}", path.display())))
    }
}
