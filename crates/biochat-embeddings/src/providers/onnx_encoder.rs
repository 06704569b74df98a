//! ONNX Runtime sequence encoder.
//!
//! Loads a pretrained nucleotide transformer exported to ONNX via the `ort`
//! crate (v2), together with the k-mer vocabulary published next to it.
//! Inference runs the forward pass and mean-pools the last hidden state.

use std::sync::Mutex;

use ort::session::Session;
use ort::value::Tensor;
use tracing::debug;

use biochat_core::config::ModelConfig;
use biochat_core::errors::{BioChatResult, ModelError};
use biochat_core::traits::SequenceEncoder;

use crate::pooling;
use crate::tokenizer::{KmerTokenizer, TokenizedInput};

/// ONNX-based sequence encoder.
///
/// Wraps an ort `Session` and the model's tokenizer, and handles the
/// forward pass and mean pooling. Pooled vectors are returned raw; the
/// downstream statistics read their unnormalized norm and mean.
#[derive(Debug)]
pub struct OnnxEncoder {
    /// Session requires `&mut self` for `run`, so we wrap in Mutex
    /// to satisfy the `&self` trait requirement.
    session: Mutex<Session>,
    tokenizer: KmerTokenizer,
    max_tokens: usize,
    hidden_size: usize,
    model_name: String,
}

// Safety: Session is Send but not Sync by default. The Mutex provides Sync.
unsafe impl Sync for OnnxEncoder {}

impl OnnxEncoder {
    /// Load the ONNX graph and its tokenizer from the configured directory.
    ///
    /// # Errors
    /// `ModelError::ModelLoadFailed` if the graph is missing or rejected by
    /// the runtime, `ModelError::TokenizerLoadFailed` if the vocab file is
    /// unusable.
    pub fn load(config: &ModelConfig) -> BioChatResult<Self> {
        let model_path = config.model_path();
        let path_str = model_path.display().to_string();
        if !model_path.exists() {
            return Err(ModelError::ModelLoadFailed {
                path: path_str,
                reason: "model file not found".to_string(),
            }
            .into());
        }

        let tokenizer = KmerTokenizer::load(&config.vocab_path(), config.kmer_size)?;

        let session = Session::builder()
            .map_err(|e| ModelError::ModelLoadFailed {
                path: path_str.clone(),
                reason: e.to_string(),
            })?
            .with_intra_threads(2)
            .map_err(|e| ModelError::ModelLoadFailed {
                path: path_str.clone(),
                reason: e.to_string(),
            })?
            .commit_from_file(&model_path)
            .map_err(|e| ModelError::ModelLoadFailed {
                path: path_str.clone(),
                reason: e.to_string(),
            })?;

        let model_name = model_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("onnx-model")
            .to_string();

        debug!(model = %model_name, vocab = tokenizer.vocab_size(), "ONNX model loaded");

        Ok(Self {
            session: Mutex::new(session),
            tokenizer,
            max_tokens: config.max_tokens,
            hidden_size: config.hidden_size,
            model_name,
        })
    }

    /// Run the forward pass for pre-tokenized rows shaped `[batch, seq]`,
    /// returning the pooled rows.
    fn forward(&self, batch: usize, seq_len: usize, rows: Vec<TokenizedInput>) -> BioChatResult<Vec<Vec<f32>>> {
        let mut input_ids = Vec::with_capacity(batch * seq_len);
        let mut attention_mask = Vec::with_capacity(batch * seq_len);
        for row in rows {
            input_ids.extend(row.input_ids);
            attention_mask.extend(row.attention_mask);
        }

        let ids_tensor = Tensor::from_array((vec![batch as i64, seq_len as i64], input_ids))
            .map_err(|e| ModelError::InferenceFailed {
                reason: format!("tensor creation error: {e}"),
            })?;

        let mask_tensor = Tensor::from_array((vec![batch as i64, seq_len as i64], attention_mask))
            .map_err(|e| ModelError::InferenceFailed {
                reason: format!("tensor creation error: {e}"),
            })?;

        let mut session = self.session.lock().map_err(|e| ModelError::InferenceFailed {
            reason: format!("session lock poisoned: {e}"),
        })?;

        let outputs = session
            .run(ort::inputs![ids_tensor, mask_tensor])
            .map_err(|e| ModelError::InferenceFailed {
                reason: e.to_string(),
            })?;

        // Extract the first output tensor.
        let (_name, output) =
            outputs
                .iter()
                .next()
                .ok_or_else(|| ModelError::InferenceFailed {
                    reason: "no output tensor".to_string(),
                })?;

        let (shape, data) =
            output
                .try_extract_tensor::<f32>()
                .map_err(|e| ModelError::InferenceFailed {
                    reason: format!("tensor extraction failed: {e}"),
                })?;

        let dims: Vec<i64> = shape.to_vec();
        let pooled = pooling::mean_pool_batch(&dims, data)?;
        for row in &pooled {
            self.check_width(row.len())?;
        }
        Ok(pooled)
    }

    /// Reject output rows that disagree with a configured hidden size.
    fn check_width(&self, actual: usize) -> Result<(), ModelError> {
        if self.hidden_size != 0 && actual != self.hidden_size {
            return Err(ModelError::InferenceFailed {
                reason: format!(
                    "hidden size mismatch: expected {}, got {actual}",
                    self.hidden_size
                ),
            });
        }
        Ok(())
    }

    fn infer(&self, sequence: &str) -> BioChatResult<Vec<f32>> {
        let encoded = self.tokenizer.encode(sequence, self.max_tokens);
        let seq_len = encoded.len();
        let mut rows = self.forward(1, seq_len, vec![encoded])?;
        match rows.len() {
            1 => Ok(rows.remove(0)),
            n => Err(ModelError::InferenceFailed {
                reason: format!("expected one batch row, got {n}"),
            }
            .into()),
        }
    }
}

impl SequenceEncoder for OnnxEncoder {
    fn encode(&self, sequence: &str) -> BioChatResult<Vec<f32>> {
        self.infer(sequence)
    }

    fn encode_batch(&self, sequences: &[String]) -> BioChatResult<Vec<Vec<f32>>> {
        if sequences.is_empty() {
            return Ok(Vec::new());
        }
        let rows = self.tokenizer.encode_batch(sequences, self.max_tokens);
        let seq_len = rows[0].len();
        self.forward(sequences.len(), seq_len, rows)
    }

    fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    fn name(&self) -> &str {
        &self.model_name
    }

    fn is_available(&self) -> bool {
        true
    }
}
