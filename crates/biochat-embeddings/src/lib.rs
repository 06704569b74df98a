//! # biochat-embeddings
//!
//! Sequence encoders for the BioChat demo.
//! Supports ONNX (pretrained nucleotide transformer) and a hashed k-mer
//! fallback. Vectors are raw mean pools; the chat layer reads their norm
//! and mean.
//!
//! ## Architecture
//!
//! ```text
//! EncoderCell (lazy, process-wide, explicit teardown)
//! └── providers
//!     ├── OnnxEncoder (default; KmerTokenizer + ort Session + mean pool)
//!     └── KmerEncoder (always available)
//! ```

pub mod engine;
pub mod pooling;
pub mod providers;
pub mod tokenizer;

pub use engine::EncoderCell;
pub use providers::{create_encoder, KmerEncoder, OnnxEncoder};
pub use tokenizer::{KmerTokenizer, TokenizedInput};
