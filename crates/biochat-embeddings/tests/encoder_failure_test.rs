//! Failure-mode tests for the encoder stack.
//!
//! Every test targets a specific way the pipeline can break in the field:
//! - Missing model files → load error surfaced, not a panic or silent fallback
//! - Missing vocab next to a present model → tokenizer load error
//! - Unknown provider name → k-mer fallback, not an error
//! - Cell holding an encoder → later configs ignored until teardown
//! - Trait impl consistency → hidden_size matches emitted vector width

use std::sync::Arc;

use tempfile::TempDir;

use biochat_core::config::ModelConfig;
use biochat_core::errors::{BioChatError, ModelError};
use biochat_core::traits::SequenceEncoder;
use biochat_embeddings::engine::EncoderCell;
use biochat_embeddings::providers::{create_encoder, KmerEncoder};

fn onnx_config(dir: &str) -> ModelConfig {
    ModelConfig {
        provider: "onnx".to_string(),
        model_dir: dir.to_string(),
        ..Default::default()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// PROVIDER CREATION
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn missing_model_dir_is_a_load_error_not_a_fallback() {
    let err = create_encoder(&onnx_config("/nonexistent/models")).unwrap_err();
    assert!(matches!(
        err,
        BioChatError::ModelError(ModelError::ModelLoadFailed { .. })
    ));
}

#[test]
fn present_model_with_missing_vocab_is_a_tokenizer_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("model.onnx"), b"not a real graph").unwrap();

    let err = create_encoder(&onnx_config(dir.path().to_str().unwrap())).unwrap_err();
    assert!(matches!(
        err,
        BioChatError::ModelError(ModelError::TokenizerLoadFailed { .. })
    ));
}

#[test]
fn unknown_provider_falls_back_to_kmer() {
    let config = ModelConfig {
        provider: "quantum".to_string(),
        ..Default::default()
    };
    let encoder = create_encoder(&config).unwrap();
    assert_eq!(encoder.name(), "kmer-fallback");
    assert_eq!(encoder.hidden_size(), config.fallback_dimensions);
}

#[test]
fn kmer_encoder_hidden_size_matches_emitted_width() {
    let config = ModelConfig {
        provider: "kmer".to_string(),
        fallback_dimensions: 128,
        ..Default::default()
    };
    let encoder = create_encoder(&config).unwrap();
    let vector = encoder.encode("ATGCGATCGATCGATCG").unwrap();
    assert_eq!(vector.len(), encoder.hidden_size());

    let batch = encoder
        .encode_batch(&["ATGCGATCGATCGATCG".to_string(), "AAAAAAAAAAAAAAAA".to_string()])
        .unwrap();
    assert_eq!(batch.len(), 2);
    assert!(batch.iter().all(|v| v.len() == 128));
}

// ═══════════════════════════════════════════════════════════════════════════
// ENCODER CELL
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn loaded_cell_ignores_later_configs_until_teardown() {
    let cell = EncoderCell::new();
    cell.install(Arc::new(KmerEncoder::new(64, 6))).unwrap();

    // A broken config does not disturb the installed encoder.
    let encoder = cell.get_or_load(&onnx_config("/nonexistent/models")).unwrap();
    assert_eq!(encoder.name(), "kmer-fallback");
    assert_eq!(encoder.hidden_size(), 64);

    // After teardown the broken config fails honestly.
    cell.teardown();
    assert!(cell.get_or_load(&onnx_config("/nonexistent/models")).is_err());
}
