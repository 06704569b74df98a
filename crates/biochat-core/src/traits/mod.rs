//! Trait seams between the workspace crates.

mod encoder;

pub use encoder::SequenceEncoder;
