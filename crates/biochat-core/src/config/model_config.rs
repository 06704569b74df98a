use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::defaults;

/// Encoder subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Encoder provider: "onnx" or "kmer".
    pub provider: String,
    /// Directory holding the pretrained model and tokenizer files.
    pub model_dir: String,
    /// ONNX graph file name inside `model_dir`.
    pub model_file: String,
    /// Vocabulary file name inside `model_dir`.
    pub vocab_file: String,
    /// Token budget per sequence; longer inputs are truncated.
    pub max_tokens: usize,
    /// K-mer width used by the tokenizer and the fallback encoder.
    pub kmer_size: usize,
    /// Expected hidden size. 0 accepts whatever the model emits.
    pub hidden_size: usize,
    /// Output width of the deterministic k-mer fallback encoder.
    pub fallback_dimensions: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_PROVIDER.to_string(),
            model_dir: defaults::DEFAULT_MODEL_DIR.to_string(),
            model_file: defaults::DEFAULT_MODEL_FILE.to_string(),
            vocab_file: defaults::DEFAULT_VOCAB_FILE.to_string(),
            max_tokens: defaults::DEFAULT_MAX_TOKENS,
            kmer_size: defaults::DEFAULT_KMER_SIZE,
            hidden_size: defaults::DEFAULT_HIDDEN_SIZE,
            fallback_dimensions: defaults::DEFAULT_FALLBACK_DIMENSIONS,
        }
    }
}

impl ModelConfig {
    /// Full path to the ONNX graph file.
    pub fn model_path(&self) -> PathBuf {
        Path::new(&self.model_dir).join(&self.model_file)
    }

    /// Full path to the vocabulary file.
    pub fn vocab_path(&self) -> PathBuf {
        Path::new(&self.model_dir).join(&self.vocab_file)
    }
}
