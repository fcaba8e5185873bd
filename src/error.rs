use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used across the crate.
pub type Result<T> = std::result::Result<T, MlErr>;

/// The crate's error type.
///
/// Every variant is an invalid-input failure: the offending call is aborted
/// before any state is modified and the caller decides what to do next.
#[derive(Debug, Clone, PartialEq)]
pub enum MlErr {
    /// Two operands that must agree in length disagree.
    SizeMismatch {
        a: &'static str,
        b: &'static str,
        got: usize,
        expected: usize,
    },
    /// `train` was called without an update rule.
    MissingOptimizer,
    /// The model has no parameters yet.
    NotTrained,
    /// A configuration value is out of its domain.
    InvalidHyperparameter { param: &'static str, value: f64 },
}

impl MlErr {
    /// Whether this error belongs to the invalid-input category.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            MlErr::SizeMismatch { .. }
            | MlErr::MissingOptimizer
            | MlErr::NotTrained
            | MlErr::InvalidHyperparameter { .. } => true,
        }
    }
}

impl Display for MlErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MlErr::SizeMismatch {
                a,
                b,
                got,
                expected,
            } => write!(
                f,
                "invalid input: size mismatch between {a} and {b}, got {got} and expected {expected}"
            ),
            MlErr::MissingOptimizer => write!(f, "invalid input: an optimizer is required to train"),
            MlErr::NotTrained => write!(f, "invalid input: the model has not been trained"),
            MlErr::InvalidHyperparameter { param, value } => {
                write!(f, "invalid input: {param} cannot be {value}")
            }
        }
    }
}

impl Error for MlErr {}
