//! # biochat-core
//!
//! Foundation crate for the BioChat demo.
//! Defines the shared types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::BioChatConfig;
pub use errors::{BioChatError, BioChatResult, ModelError};
pub use models::{EmbeddingSummary, Message, NucleotideSequence, Role};
pub use traits::SequenceEncoder;
