//! Threshold classification of embedding statistics.

use std::fmt;

use biochat_core::models::EmbeddingSummary;

/// Structure-complexity bucket for a pooled-embedding norm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
}

impl Complexity {
    /// Bucket a norm. Boundaries are strict: exactly 10.0 is `Medium`,
    /// exactly 5.0 is `Simple`. NaN compares false everywhere and lands in
    /// `Simple`.
    pub fn from_norm(norm: f32) -> Self {
        if norm > 10.0 {
            Self::Complex
        } else if norm > 5.0 {
            Self::Medium
        } else {
            Self::Simple
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Simple => "simple structure",
            Self::Medium => "medium complexity",
            Self::Complex => "complex structure",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Trait-tendency bucket for a pooled-embedding mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tendency {
    Positive,
    Negative,
}

impl Tendency {
    /// Bucket a mean. Exactly 0.0 is `Negative` (strict greater-than).
    pub fn from_mean(mean: f32) -> Self {
        if mean > 0.0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Positive => "positive trait",
            Self::Negative => "negative trait",
        }
    }
}

impl fmt::Display for Tendency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Both buckets for one summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub complexity: Complexity,
    pub tendency: Tendency,
}

impl Classification {
    pub fn from_summary(summary: &EmbeddingSummary) -> Self {
        Self {
            complexity: Complexity::from_norm(summary.norm),
            tendency: Tendency::from_mean(summary.mean),
        }
    }
}
