//! Mean pooling of encoder output tensors.
//!
//! The transformer emits last hidden states shaped `[batch, seq, hidden]`.
//! Pooling averages over the sequence axis and returns one vector per batch
//! row. Vectors are returned raw, without length normalization.

use biochat_core::errors::ModelError;

/// Mean-pool every row of an output tensor.
///
/// Accepts `[batch, seq, hidden]`, or `[batch, hidden]` when the graph
/// already pooled. Padding positions are included in the average. Any other
/// rank is an inference failure.
pub fn mean_pool_batch(shape: &[i64], data: &[f32]) -> Result<Vec<Vec<f32>>, ModelError> {
    match shape.len() {
        3 => {
            let batch = shape[0] as usize;
            let seq = shape[1] as usize;
            let hidden = shape[2] as usize;
            if seq == 0 {
                return Err(ModelError::InferenceFailed {
                    reason: format!("empty sequence axis in shape {shape:?}"),
                });
            }
            if data.len() < batch * seq * hidden {
                return Err(shape_error(shape, data.len()));
            }
            let mut rows = Vec::with_capacity(batch);
            for b in 0..batch {
                let row = &data[b * seq * hidden..(b + 1) * seq * hidden];
                let mut pooled = vec![0.0f32; hidden];
                for s in 0..seq {
                    for d in 0..hidden {
                        pooled[d] += row[s * hidden + d];
                    }
                }
                for v in &mut pooled {
                    *v /= seq as f32;
                }
                rows.push(pooled);
            }
            Ok(rows)
        }
        2 => {
            let batch = shape[0] as usize;
            let hidden = shape[1] as usize;
            if data.len() < batch * hidden {
                return Err(shape_error(shape, data.len()));
            }
            Ok(data
                .chunks(hidden)
                .take(batch)
                .map(<[f32]>::to_vec)
                .collect())
        }
        _ => Err(ModelError::InferenceFailed {
            reason: format!("unexpected output shape: {shape:?}"),
        }),
    }
}

fn shape_error(shape: &[i64], len: usize) -> ModelError {
    ModelError::InferenceFailed {
        reason: format!("output tensor has {len} values, shorter than shape {shape:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pools_over_the_sequence_axis() {
        // [1, 2, 3]: positions (1,2,3) and (3,4,5) average to (2,3,4).
        let data = [1.0, 2.0, 3.0, 3.0, 4.0, 5.0];
        let rows = mean_pool_batch(&[1, 2, 3], &data).unwrap();
        assert_eq!(rows, vec![vec![2.0, 3.0, 4.0]]);
    }

    #[test]
    fn passes_through_already_pooled_output() {
        let data = [0.5, -0.5];
        let rows = mean_pool_batch(&[1, 2], &data).unwrap();
        assert_eq!(rows, vec![vec![0.5, -0.5]]);
    }

    #[test]
    fn does_not_normalize() {
        let data = [6.0, 8.0];
        let rows = mean_pool_batch(&[1, 1, 2], &data).unwrap();
        let norm: f32 = rows[0].iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 10.0).abs() < 1e-6);
    }

    #[test]
    fn batch_rows_pool_independently() {
        // [2, 2, 2]
        let data = [1.0, 1.0, 3.0, 3.0, 10.0, 0.0, 20.0, 0.0];
        let rows = mean_pool_batch(&[2, 2, 2], &data).unwrap();
        assert_eq!(rows[0], vec![2.0, 2.0]);
        assert_eq!(rows[1], vec![15.0, 0.0]);
    }

    #[test]
    fn rejects_rank_one_output() {
        let err = mean_pool_batch(&[4], &[0.0; 4]).unwrap_err();
        assert!(err.to_string().contains("unexpected output shape"));
    }

    #[test]
    fn rejects_zero_length_sequence_axis() {
        let err = mean_pool_batch(&[1, 0, 8], &[]).unwrap_err();
        assert!(err.to_string().contains("empty sequence axis"));
    }

    #[test]
    fn rejects_data_shorter_than_shape() {
        let err = mean_pool_batch(&[1, 4, 8], &[0.0; 3]).unwrap_err();
        assert!(err.to_string().contains("shorter than shape"));
    }
}
