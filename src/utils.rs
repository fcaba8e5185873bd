use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::error::{MlErr, Result};

/// Fails with `SizeMismatch` unless `got == expected`.
pub(crate) fn check_size(a: &'static str, b: &'static str, got: usize, expected: usize) -> Result<()> {
    if got != expected {
        return Err(MlErr::SizeMismatch {
            a,
            b,
            got,
            expected,
        });
    }
    Ok(())
}

/// Computes `features · weights + bias`, broadcasting the bias over every row.
///
/// Callers are responsible for `features.ncols() == weights.len()`.
pub(crate) fn affine(features: ArrayView2<f64>, weights: ArrayView1<f64>, bias: f64) -> Array1<f64> {
    features.dot(&weights) + bias
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_affine_broadcasts_bias() {
        let x = array![[1.0, 2.0], [3.0, 4.0], [0.0, 0.0]];
        let w = array![0.5, -1.0];

        let out = affine(x.view(), w.view(), 2.0);

        assert_eq!(out, array![0.5, -0.5, 2.0]);
    }

    #[test]
    fn test_affine_without_features_is_bias() {
        let x = ndarray::Array2::<f64>::zeros((3, 0));
        let w = Array1::<f64>::zeros(0);

        assert_eq!(affine(x.view(), w.view(), 1.5), array![1.5, 1.5, 1.5]);
    }

    #[test]
    fn test_check_size() {
        assert!(check_size("a", "b", 3, 3).is_ok());
        assert_eq!(
            check_size("a", "b", 2, 3),
            Err(MlErr::SizeMismatch {
                a: "a",
                b: "b",
                got: 2,
                expected: 3
            })
        );
    }
}
