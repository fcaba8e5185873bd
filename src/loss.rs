use std::sync::Arc;

use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::error::Result;
use crate::utils::check_size;

/// Maps predictions and targets to a scalar cost.
pub trait LossFunction {
    /// Returns the cost of `y_pred` against `y_true`.
    ///
    /// Fails with `SizeMismatch` if the two differ in length.
    fn compute(&self, y_true: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> Result<f64>;
}

/// A loss function that also knows its derivative.
pub trait DifferentiableLossFunction: LossFunction {
    /// Returns `∂L/∂y_pred`, one entry per sample.
    fn gradient(&self, y_true: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> Result<Array1<f64>>;

    /// Returns `∂L/∂w` for an affine model, `featuresᵀ · gradient`.
    fn dl_dw(
        &self,
        features: ArrayView2<f64>,
        y_true: ArrayView1<f64>,
        y_pred: ArrayView1<f64>,
    ) -> Result<Array1<f64>> {
        check_size("features rows", "y_true", features.nrows(), y_true.len())?;
        let dl_dy = self.gradient(y_true, y_pred)?;
        Ok(features.t().dot(&dl_dy))
    }

    /// Returns `∂L/∂b` for an affine model, the sum of the gradient.
    fn dl_db(&self, y_true: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> Result<f64> {
        Ok(self.gradient(y_true, y_pred)?.sum())
    }
}

/// Mean squared error, `(1/n) Σ (ŷᵢ − yᵢ)²`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Mse;

impl Mse {
    pub fn new() -> Self {
        Self
    }
}

impl LossFunction for Mse {
    fn compute(&self, y_true: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> Result<f64> {
        check_size("y_pred", "y_true", y_pred.len(), y_true.len())?;
        Ok((&y_pred - &y_true).mapv(|r| r * r).mean().unwrap_or_default())
    }
}

impl DifferentiableLossFunction for Mse {
    fn gradient(&self, y_true: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> Result<Array1<f64>> {
        check_size("y_pred", "y_true", y_pred.len(), y_true.len())?;
        let n = y_true.len() as f64;
        Ok((&y_pred - &y_true) * (2.0 / n))
    }

    // Closed forms, skipping the per-sample gradient.
    fn dl_dw(
        &self,
        features: ArrayView2<f64>,
        y_true: ArrayView1<f64>,
        y_pred: ArrayView1<f64>,
    ) -> Result<Array1<f64>> {
        check_size("y_pred", "y_true", y_pred.len(), y_true.len())?;
        check_size("features rows", "y_true", features.nrows(), y_true.len())?;
        if y_true.is_empty() {
            return Ok(Array1::zeros(features.ncols()));
        }
        let residuals = &y_pred - &y_true;
        Ok(features.t().dot(&residuals) * (2.0 / y_true.len() as f64))
    }

    fn dl_db(&self, y_true: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> Result<f64> {
        check_size("y_pred", "y_true", y_pred.len(), y_true.len())?;
        if y_true.is_empty() {
            return Ok(0.0);
        }
        Ok(2.0 * (&y_pred - &y_true).sum() / y_true.len() as f64)
    }
}

impl<L: LossFunction + ?Sized> LossFunction for &L {
    fn compute(&self, y_true: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> Result<f64> {
        (**self).compute(y_true, y_pred)
    }
}

impl<L: DifferentiableLossFunction + ?Sized> DifferentiableLossFunction for &L {
    fn gradient(&self, y_true: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> Result<Array1<f64>> {
        (**self).gradient(y_true, y_pred)
    }

    fn dl_dw(
        &self,
        features: ArrayView2<f64>,
        y_true: ArrayView1<f64>,
        y_pred: ArrayView1<f64>,
    ) -> Result<Array1<f64>> {
        (**self).dl_dw(features, y_true, y_pred)
    }

    fn dl_db(&self, y_true: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> Result<f64> {
        (**self).dl_db(y_true, y_pred)
    }
}

impl<L: LossFunction + ?Sized> LossFunction for Arc<L> {
    fn compute(&self, y_true: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> Result<f64> {
        (**self).compute(y_true, y_pred)
    }
}

impl<L: DifferentiableLossFunction + ?Sized> DifferentiableLossFunction for Arc<L> {
    fn gradient(&self, y_true: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> Result<Array1<f64>> {
        (**self).gradient(y_true, y_pred)
    }

    fn dl_dw(
        &self,
        features: ArrayView2<f64>,
        y_true: ArrayView1<f64>,
        y_pred: ArrayView1<f64>,
    ) -> Result<Array1<f64>> {
        (**self).dl_dw(features, y_true, y_pred)
    }

    fn dl_db(&self, y_true: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> Result<f64> {
        (**self).dl_db(y_true, y_pred)
    }
}
