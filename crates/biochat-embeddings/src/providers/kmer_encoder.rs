//! Hashed k-mer profile fallback encoder.
//!
//! Generates fixed-dimension vectors from the counts of overlapping k-mers.
//! Needs no model files, so it works before the pretrained model has been
//! fetched.

use biochat_core::errors::BioChatResult;
use biochat_core::traits::SequenceEncoder;

/// K-mer profile fallback encoder.
///
/// Hashes every overlapping k-mer of the sequence into a fixed-dimension
/// bucket with a signed contribution, feature-hashing style. Not as rich as
/// the transformer, but deterministic and always available. Output is raw
/// counts, so the vector norm grows with sequence length and repetition.
#[derive(Debug)]
pub struct KmerEncoder {
    dimensions: usize,
    kmer_size: usize,
}

impl KmerEncoder {
    pub fn new(dimensions: usize, kmer_size: usize) -> Self {
        Self {
            dimensions,
            kmer_size,
        }
    }

    /// Hash a k-mer with FNV-1a. The low bits pick the bucket, the top bit
    /// picks the sign.
    fn hash_kmer(kmer: &[u8], dims: usize) -> (usize, f32) {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in kmer {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        let sign = if h >> 63 == 0 { 1.0 } else { -1.0 };
        ((h as usize) % dims, sign)
    }

    /// Build the bucketed k-mer profile for one sequence.
    fn profile(&self, sequence: &str) -> Vec<f32> {
        let mut vec = vec![0.0f32; self.dimensions];
        let bytes = sequence.as_bytes();
        if bytes.len() < self.kmer_size {
            return vec;
        }
        for window in bytes.windows(self.kmer_size) {
            let (bucket, sign) = Self::hash_kmer(window, self.dimensions);
            vec[bucket] += sign;
        }
        vec
    }
}

impl SequenceEncoder for KmerEncoder {
    fn encode(&self, sequence: &str) -> BioChatResult<Vec<f32>> {
        Ok(self.profile(sequence))
    }

    fn encode_batch(&self, sequences: &[String]) -> BioChatResult<Vec<Vec<f32>>> {
        Ok(sequences.iter().map(|s| self.profile(s)).collect())
    }

    fn hidden_size(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "kmer-fallback"
    }

    fn is_available(&self) -> bool {
        true // No model files needed.
    }
}
