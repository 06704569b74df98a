//! Canned response templates.
//!
//! Every user-facing string lives here: the analysis report, the rejection
//! notice, the greeting, and the two fixed failure replies. Statistics are
//! printed with three decimals; echoed input is truncated by character
//! count with a `...` marker.

use biochat_core::config::ChatConfig;
use biochat_core::constants::FALLBACK_SEQUENCE;
use biochat_core::models::{EmbeddingSummary, NucleotideSequence};

use crate::classify::Classification;

/// Reply for empty or whitespace-only input.
pub const GREETING_REPLY: &str =
    "Hello! Enter a DNA/RNA sequence and I will analyze it for you.";

/// Fixed reply when the model cannot be loaded.
pub const MODEL_LOAD_FAILURE_REPLY: &str =
    "The model could not be loaded. Please download the model first.";

/// Fixed apology when inference fails mid-turn.
pub const INFERENCE_FAILURE_REPLY: &str =
    "Sorry, the service is currently having problems. Please try again later.";

/// Character-counted preview with an ellipsis past `max_chars`.
fn preview(text: &str, max_chars: usize) -> String {
    let mut out: String = text.chars().take(max_chars).collect();
    if text.chars().nth(max_chars).is_some() {
        out.push_str("...");
    }
    out
}

/// Structured analysis report for input that looks like a sequence.
pub fn analysis_report(
    raw_input: &str,
    sequence: &NucleotideSequence,
    summary: &EmbeddingSummary,
    classification: &Classification,
    config: &ChatConfig,
) -> String {
    format!(
        "\u{1f9ec} **Nucleotide sequence analysis**\n\
         \n\
         **Input sequence**: {input}\n\
         \n\
         **Processed sequence**: {processed}\n\
         \n\
         **Sequence length**: {len} bp\n\
         \n\
         **Analysis results**:\n\
         - Structure complexity: {complexity}\n\
         - Trait tendency: {tendency}\n\
         - Embedding norm: {norm:.3}\n\
         - Mean activation: {mean:.3}\n\
         \n\
         From an agricultural biotechnology standpoint, this sequence exhibits {complexity} and leans toward a {tendency}.",
        input = preview(raw_input, config.raw_preview_chars),
        processed = preview(sequence.as_str(), config.sequence_preview_chars),
        len = sequence.len(),
        complexity = classification.complexity,
        tendency = classification.tendency,
        norm = summary.norm,
        mean = summary.mean,
    )
}

/// Redirect for input with no nucleotide characters, with the statistics of
/// the substitute sequence that was analyzed instead.
pub fn rejection(raw_input: &str, classification: &Classification, config: &ChatConfig) -> String {
    format!(
        "Sorry, this model is specialized for DNA/RNA sequence analysis.\n\
         \n\
         **You entered**: {input}\n\
         \n\
         Please provide a nucleotide sequence in a form like:\n\
         - Example: {example}\n\
         - Allowed characters: A, T, G, C, U\n\
         \n\
         Analyzing a substitute sequence instead, for demonstration:\n\
         - Structure complexity: {complexity}\n\
         - Trait tendency: {tendency}",
        input = preview(raw_input, config.rejected_preview_chars),
        example = FALLBACK_SEQUENCE,
        complexity = classification.complexity,
        tendency = classification.tendency,
    )
}
