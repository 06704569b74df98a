//! # biochat-chat
//!
//! The input-to-response pipeline of the BioChat demo: input normalization,
//! embedding statistics, threshold classification, canned response mapping,
//! and session/turn bookkeeping.
//!
//! ## Pipeline
//!
//! ```text
//! raw input
//! ├── empty? → greeting
//! ├── normalize → NucleotideSequence
//! ├── encode → EmbeddingSummary (norm, mean)   [failures → fixed replies]
//! ├── classify → Complexity + Tendency
//! └── respond → analysis report | rejection
//! ```

pub mod classify;
pub mod normalize;
pub mod respond;
pub mod session;
pub mod turn;

pub use session::{ChatSession, TurnState};
pub use turn::TurnProcessor;
