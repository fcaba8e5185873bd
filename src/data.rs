use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::error::{MlErr, Result};
use crate::utils::check_size;

/// A feature matrix paired with its targets, one row per sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    features: Array2<f64>,
    targets: Array1<f64>,
}

impl Dataset {
    /// Pairs `features` with `targets`, failing if the row count differs
    /// from the number of targets.
    pub fn new(features: Array2<f64>, targets: Array1<f64>) -> Result<Self> {
        check_size("features rows", "targets", features.nrows(), targets.len())?;
        Ok(Self { features, targets })
    }

    /// Samples `n_samples` points of `y = x·weights + bias + ε`.
    ///
    /// Features are drawn uniformly from `[-1, 1)` and `ε ~ N(0, noise_std)`.
    /// The same `seed` always yields the same dataset.
    ///
    /// # Arguments
    ///
    /// * `weights` - True coefficients, one per feature
    /// * `bias` - True intercept
    /// * `n_samples` - Number of rows to generate
    /// * `noise_std` - Standard deviation of the target noise, finite and non-negative
    /// * `seed` - Seed for the generator
    pub fn linear(
        weights: &[f64],
        bias: f64,
        n_samples: usize,
        noise_std: f64,
        seed: u64,
    ) -> Result<Self> {
        if !noise_std.is_finite() || noise_std < 0.0 {
            return Err(MlErr::InvalidHyperparameter {
                param: "noise_std",
                value: noise_std,
            });
        }
        let noise = Normal::new(0.0, noise_std).map_err(|_| MlErr::InvalidHyperparameter {
            param: "noise_std",
            value: noise_std,
        })?;
        let mut rng = StdRng::seed_from_u64(seed);

        let features: Array2<f64> = Array2::from_shape_fn((n_samples, weights.len()), |_| rng.random_range(-1.0..1.0));
        let coefficients = ArrayView1::from(weights);
        let mut targets = features.dot(&coefficients) + bias;
        targets.mapv_inplace(|t| t + noise.sample(&mut rng));

        Ok(Self { features, targets })
    }

    pub fn features(&self) -> ArrayView2<f64> {
        self.features.view()
    }

    pub fn targets(&self) -> ArrayView1<f64> {
        self.targets.view()
    }

    pub fn n_samples(&self) -> usize {
        self.targets.len()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }
}
