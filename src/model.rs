use log::debug;
use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::data::Dataset;
use crate::error::{MlErr, Result};
use crate::loss::LossFunction;
use crate::optimizer::Optimizer;
use crate::utils::{affine, check_size};

/// A trainable regressor.
pub trait Model {
    /// Fits the model's parameters to (`features`, `targets`) using `optimizer`.
    fn train(
        &mut self,
        features: ArrayView2<f64>,
        targets: ArrayView1<f64>,
        optimizer: Option<&dyn Optimizer>,
    ) -> Result<()>;

    /// Returns one prediction per row of `features`.
    fn predict(&self, features: ArrayView2<f64>) -> Result<Array1<f64>>;
}

/// Affine regression, `ŷ = X·w + b`.
///
/// Starts untrained; a successful `train` replaces any previous parameters.
/// `predict` only reads the parameters, so shared references can predict
/// concurrently as long as nobody trains in the meantime.
#[derive(Debug, Clone, Default)]
pub struct LinearRegression {
    weights: Option<Array1<f64>>,
    bias: f64,
}

impl LinearRegression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn weights(&self) -> Option<ArrayView1<f64>> {
        self.weights.as_ref().map(|w| w.view())
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn is_trained(&self) -> bool {
        self.weights.is_some()
    }

    /// Number of features the model was trained on, if any.
    pub fn n_features(&self) -> Option<usize> {
        self.weights.as_ref().map(Array1::len)
    }

    /// Trains on a validated dataset.
    pub fn fit_dataset(&mut self, dataset: &Dataset, optimizer: Option<&dyn Optimizer>) -> Result<()> {
        self.train(dataset.features(), dataset.targets(), optimizer)
    }

    /// Returns the loss of the current predictions against `targets`.
    pub fn evaluate<L: LossFunction>(
        &self,
        features: ArrayView2<f64>,
        targets: ArrayView1<f64>,
        loss: &L,
    ) -> Result<f64> {
        let predictions = self.predict(features)?;
        loss.compute(targets, predictions.view())
    }
}

impl Model for LinearRegression {
    /// Weights are zeroed when the feature count differs from the previous fit
    /// and otherwise kept as the starting point. The bias always restarts at
    /// zero. The optimizer updates both in place.
    fn train(
        &mut self,
        features: ArrayView2<f64>,
        targets: ArrayView1<f64>,
        optimizer: Option<&dyn Optimizer>,
    ) -> Result<()> {
        let optimizer = optimizer.ok_or(MlErr::MissingOptimizer)?;
        check_size("features rows", "targets", features.nrows(), targets.len())?;

        let n_features = features.ncols();
        let weights = match self.weights.take() {
            Some(w) if w.len() == n_features => w,
            previous => {
                if let Some(w) = previous {
                    debug!("feature count changed from {} to {n_features}, resetting weights", w.len());
                }
                Array1::zeros(n_features)
            }
        };
        let weights = self.weights.insert(weights);
        self.bias = 0.0;

        debug!("training linear regression on {} samples", features.nrows());
        if let Err(err) = optimizer.optimize(features, targets, weights, &mut self.bias) {
            // Half-fitted parameters are not kept.
            self.weights = None;
            self.bias = 0.0;
            return Err(err);
        }
        Ok(())
    }

    fn predict(&self, features: ArrayView2<f64>) -> Result<Array1<f64>> {
        let weights = self.weights.as_ref().ok_or(MlErr::NotTrained)?;
        check_size("features columns", "weights", features.ncols(), weights.len())?;
        Ok(affine(features, weights.view(), self.bias))
    }
}
