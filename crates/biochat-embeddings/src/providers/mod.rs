//! Encoder registry.
//!
//! Providers:
//! 1. ONNX (pretrained transformer, default)
//! 2. K-mer profile (deterministic, always available, lowest quality)

pub mod kmer_encoder;
pub mod onnx_encoder;

pub use kmer_encoder::KmerEncoder;
pub use onnx_encoder::OnnxEncoder;

use std::sync::Arc;

use tracing::{info, warn};

use biochat_core::config::ModelConfig;
use biochat_core::errors::BioChatResult;
use biochat_core::traits::SequenceEncoder;

/// Create the configured encoder.
///
/// An ONNX load failure propagates instead of degrading to the fallback;
/// the chat layer answers those turns with its fixed cannot-load reply.
/// Only an unknown provider name falls back to the k-mer encoder.
pub fn create_encoder(config: &ModelConfig) -> BioChatResult<Arc<dyn SequenceEncoder>> {
    match config.provider.as_str() {
        "onnx" => {
            let encoder = OnnxEncoder::load(config)?;
            info!(provider = "onnx", model = encoder.name(), "sequence encoder loaded");
            Ok(Arc::new(encoder))
        }
        "kmer" => {
            info!(
                provider = "kmer",
                dims = config.fallback_dimensions,
                "using k-mer profile encoder"
            );
            Ok(Arc::new(KmerEncoder::new(
                config.fallback_dimensions,
                config.kmer_size,
            )))
        }
        other => {
            warn!(provider = %other, "unknown encoder provider, using k-mer fallback");
            Ok(Arc::new(KmerEncoder::new(
                config.fallback_dimensions,
                config.kmer_size,
            )))
        }
    }
}
