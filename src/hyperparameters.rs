/// Hyperparameters for gradient descent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hyperparameters {
    /// Step size for each update, must be finite and non-negative
    pub learning_rate: f64,

    /// Number of full-batch updates
    pub max_epochs: usize,
}

impl Default for Hyperparameters {
    fn default() -> Self {
        Hyperparameters {
            learning_rate: 0.01,
            max_epochs: 100,
        }
    }
}
