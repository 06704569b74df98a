//! Input inspection and normalization.

use biochat_core::models::NucleotideSequence;

/// Coerce raw user input into a model-ready nucleotide sequence.
pub fn normalize(input: &str) -> NucleotideSequence {
    NucleotideSequence::coerce(input)
}

/// Heuristic check on the ORIGINAL, unfiltered input: true when any
/// character uppercases into {A,T,G,C,U}.
///
/// Deliberately loose: "CAT and dog" contains C, A and T and counts as a
/// sequence. This routes between the analysis and rejection replies; it is
/// not validation. Tightening it would change which reply known inputs get.
pub fn looks_like_sequence(input: &str) -> bool {
    input.chars().any(NucleotideSequence::is_nucleotide)
}
