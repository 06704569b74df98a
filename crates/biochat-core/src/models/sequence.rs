use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{FALLBACK_SEQUENCE, MIN_SEQUENCE_LEN, PAD_BASE};

/// A normalized nucleotide sequence: uppercase {A,T,G,C,U}, at least 16 bases.
///
/// Construction is total. Arbitrary text is filtered down to the alphabet,
/// an empty result is replaced by a fixed substitute sequence, and short
/// results are right-padded with 'A'. There is no failing constructor and no
/// way to hold an invalid sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NucleotideSequence(String);

impl NucleotideSequence {
    /// True for the five accepted bases, case-insensitively.
    pub fn is_nucleotide(c: char) -> bool {
        matches!(c.to_ascii_uppercase(), 'A' | 'T' | 'G' | 'C' | 'U')
    }

    /// Coerce arbitrary input text into a valid sequence.
    ///
    /// Uppercases, drops every character outside {A,T,G,C,U}, substitutes
    /// [`FALLBACK_SEQUENCE`] for empty results, and right-pads with
    /// [`PAD_BASE`] up to [`MIN_SEQUENCE_LEN`]. The substitute sequence is
    /// 17 bases and passes through unpadded.
    pub fn coerce(input: &str) -> Self {
        let mut cleaned: String = input
            .chars()
            .map(|c| c.to_ascii_uppercase())
            .filter(|&c| Self::is_nucleotide(c))
            .collect();

        if cleaned.is_empty() {
            return Self(FALLBACK_SEQUENCE.to_string());
        }
        while cleaned.len() < MIN_SEQUENCE_LEN {
            cleaned.push(PAD_BASE);
        }
        Self(cleaned)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Sequence length in bases.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; coercion never yields an empty sequence.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NucleotideSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NucleotideSequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
