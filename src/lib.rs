//! Linear regression fitted by full-batch gradient descent.
//!
//! Three pieces compose bottom-up: a [`LossFunction`] scoring predictions, an
//! [`Optimizer`] that updates parameters against the loss gradient, and a
//! [`Model`] owning the parameters and serving predictions.

mod data;
mod error;
mod hyperparameters;
mod loss;
mod model;
mod optimizer;
mod utils;

pub use data::Dataset;
pub use error::{MlErr, Result};
pub use hyperparameters::Hyperparameters;
pub use loss::{DifferentiableLossFunction, LossFunction, Mse};
pub use model::{LinearRegression, Model};
pub use optimizer::{GradientDescent, Optimizer};
