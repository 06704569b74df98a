//! Domain types shared across the workspace.

pub mod message;
pub mod sequence;
pub mod summary;

pub use message::{Message, Role};
pub use sequence::NucleotideSequence;
pub use summary::EmbeddingSummary;
