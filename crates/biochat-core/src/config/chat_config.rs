use serde::{Deserialize, Serialize};

use super::defaults;

/// Chat surface configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Characters of raw input echoed in an analysis reply.
    pub raw_preview_chars: usize,
    /// Characters of the processed sequence echoed in an analysis reply.
    pub sequence_preview_chars: usize,
    /// Characters of raw input echoed in a rejection reply.
    pub rejected_preview_chars: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            raw_preview_chars: defaults::DEFAULT_RAW_PREVIEW_CHARS,
            sequence_preview_chars: defaults::DEFAULT_SEQUENCE_PREVIEW_CHARS,
            rejected_preview_chars: defaults::DEFAULT_REJECTED_PREVIEW_CHARS,
        }
    }
}
