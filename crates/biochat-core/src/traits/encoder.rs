use crate::errors::BioChatResult;

/// Nucleotide sequence encoder.
///
/// Input is a normalized sequence (uppercase {A,T,G,C,U}). Output is the
/// raw mean-pooled hidden-state vector; it is not length-normalized, so its
/// norm and mean carry information downstream.
pub trait SequenceEncoder: std::fmt::Debug + Send + Sync {
    /// Encode a single sequence, returning the pooled vector.
    fn encode(&self, sequence: &str) -> BioChatResult<Vec<f32>>;

    /// Encode a batch of sequences.
    fn encode_batch(&self, sequences: &[String]) -> BioChatResult<Vec<Vec<f32>>>;

    /// The dimensionality of vectors produced by this encoder.
    /// 0 means the model's native width, discovered at inference time.
    fn hidden_size(&self) -> usize;

    /// Human-readable encoder name.
    fn name(&self) -> &str;

    /// Whether this encoder is currently available.
    fn is_available(&self) -> bool;
}
