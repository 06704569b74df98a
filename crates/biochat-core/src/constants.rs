/// BioChat system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Bases the sequence normalizer keeps, uppercase.
pub const NUCLEOTIDE_ALPHABET: &[char] = &['A', 'T', 'G', 'C', 'U'];

/// Substitute sequence used when an input contains no nucleotide characters.
pub const FALLBACK_SEQUENCE: &str = "ATGCGATCGATCGATCG";

/// Minimum length fed to the encoder; shorter sequences are right-padded.
pub const MIN_SEQUENCE_LEN: usize = 16;

/// Base appended when padding a short sequence.
pub const PAD_BASE: char = 'A';
