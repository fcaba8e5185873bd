use log::{debug, trace};
use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::error::{MlErr, Result};
use crate::hyperparameters::Hyperparameters;
use crate::loss::DifferentiableLossFunction;
use crate::utils::{affine, check_size};

/// An update rule for the parameters of an affine model.
pub trait Optimizer {
    /// Moves `weights` and `bias` toward a minimum of the loss over
    /// (`features`, `targets`), updating them in place.
    ///
    /// The optimizer never owns the parameters, so one instance can drive any
    /// number of independent runs.
    fn optimize(
        &self,
        features: ArrayView2<f64>,
        targets: ArrayView1<f64>,
        weights: &mut Array1<f64>,
        bias: &mut f64,
    ) -> Result<()>;
}

/// Full-batch gradient descent.
///
/// Every epoch computes the predictions of the whole dataset, asks the loss for
/// `∂L/∂ŷ` and steps against `Xᵀ·∂L/∂ŷ` and `Σ ∂L/∂ŷ`. There is no early
/// stopping: exactly `max_epochs` updates are applied.
#[derive(Debug, Clone)]
pub struct GradientDescent<L> {
    loss: L,
    learning_rate: f64,
    max_epochs: usize,
}

impl<L: DifferentiableLossFunction> GradientDescent<L> {
    /// Returns a new `GradientDescent`.
    ///
    /// # Arguments
    ///
    /// * `loss` - The loss whose gradient drives the updates
    /// * `learning_rate` - The length of each step, finite and non-negative
    /// * `max_epochs` - The number of updates applied per `optimize` call
    pub fn new(loss: L, learning_rate: f64, max_epochs: usize) -> Result<Self> {
        if !learning_rate.is_finite() || learning_rate < 0.0 {
            return Err(MlErr::InvalidHyperparameter {
                param: "learning_rate",
                value: learning_rate,
            });
        }

        Ok(Self {
            loss,
            learning_rate,
            max_epochs,
        })
    }

    pub fn with_hyperparameters(loss: L, hyperparameters: Hyperparameters) -> Result<Self> {
        Self::new(loss, hyperparameters.learning_rate, hyperparameters.max_epochs)
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn max_epochs(&self) -> usize {
        self.max_epochs
    }

    pub fn loss(&self) -> &L {
        &self.loss
    }
}

impl<L: DifferentiableLossFunction> Optimizer for GradientDescent<L> {
    fn optimize(
        &self,
        features: ArrayView2<f64>,
        targets: ArrayView1<f64>,
        weights: &mut Array1<f64>,
        bias: &mut f64,
    ) -> Result<()> {
        check_size("features rows", "targets", features.nrows(), targets.len())?;
        check_size("weights", "features columns", weights.len(), features.ncols())?;

        debug!(
            "gradient descent: {} samples, {} features, lr {}, {} epochs",
            features.nrows(),
            features.ncols(),
            self.learning_rate,
            self.max_epochs
        );

        let lr = self.learning_rate;
        if lr == 0.0 {
            debug!("learning rate is zero, parameters left unchanged");
            return Ok(());
        }

        for epoch in 0..self.max_epochs {
            let predictions = affine(features, weights.view(), *bias);
            let dl_dy = self.loss.gradient(targets, predictions.view())?;
            check_size("loss gradient", "targets", dl_dy.len(), targets.len())?;
            let dl_dw = features.t().dot(&dl_dy);
            let dl_db = dl_dy.sum();

            weights.scaled_add(-lr, &dl_dw);
            *bias -= lr * dl_db;

            trace!("epoch {epoch}: |dL/dw|² {}, dL/db {dl_db}", dl_dw.dot(&dl_dw));
        }

        debug!("gradient descent finished: bias {}", *bias);
        Ok(())
    }
}
