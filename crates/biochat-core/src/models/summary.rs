use serde::{Deserialize, Serialize};

/// Scalar summary of a pooled embedding vector.
///
/// Computed fresh for every request and never stored. The vector is the
/// encoder's raw mean pool, so both statistics reflect unnormalized
/// activations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingSummary {
    /// Euclidean norm of the pooled vector.
    pub norm: f32,
    /// Arithmetic mean of the pooled vector.
    pub mean: f32,
}

impl EmbeddingSummary {
    /// Reduce a pooled embedding to its summary statistics.
    ///
    /// An empty vector yields zeros rather than NaN.
    pub fn from_vector(vector: &[f32]) -> Self {
        if vector.is_empty() {
            return Self {
                norm: 0.0,
                mean: 0.0,
            };
        }
        let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        let mean = vector.iter().sum::<f32>() / vector.len() as f32;
        Self { norm, mean }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vector() {
        let summary = EmbeddingSummary::from_vector(&[3.0, 4.0]);
        assert!((summary.norm - 5.0).abs() < 1e-6);
        assert!((summary.mean - 3.5).abs() < 1e-6);
    }

    #[test]
    fn negative_components_lower_the_mean_not_the_norm() {
        let summary = EmbeddingSummary::from_vector(&[-3.0, -4.0]);
        assert!((summary.norm - 5.0).abs() < 1e-6);
        assert!((summary.mean + 3.5).abs() < 1e-6);
    }

    #[test]
    fn empty_vector_yields_zeros() {
        let summary = EmbeddingSummary::from_vector(&[]);
        assert_eq!(summary.norm, 0.0);
        assert_eq!(summary.mean, 0.0);
    }

    #[test]
    fn zero_vector_yields_zeros() {
        let summary = EmbeddingSummary::from_vector(&[0.0; 16]);
        assert_eq!(summary.norm, 0.0);
        assert_eq!(summary.mean, 0.0);
    }
}
