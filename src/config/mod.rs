//! Options read when setting up a [`Network`][crate::Network]. See [`NetworkConfig`].

#[cfg(feature = "json")]
mod error;
#[cfg(feature = "json")]
mod functions;

use num_traits::Float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "json")]
pub use error::Error;

/// The metric used to measure the difference between network outputs and their targets.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ErrorType {
    /// Sum of absolute differences.
    L1,
    /// Sum of squared differences.
    L2,
    /// Largest absolute difference.
    LInf,
}

impl Default for ErrorType {
    fn default() -> Self {
        ErrorType::L2
    }
}

impl ErrorType {
    /// Returns the error between `outputs` and `targets`, or `None` if their lengths differ.
    ///
    /// The error of two empty slices is zero.
    pub fn evaluate<T: Float>(&self, outputs: &[T], targets: &[T]) -> Option<T> {
        if outputs.len() != targets.len() {
            return None;
        }

        let diffs = outputs.iter().zip(targets).map(|(&o, &t)| (o - t).abs());
        let error = match self {
            ErrorType::L1 => diffs.fold(T::zero(), |sum, d| sum + d),
            ErrorType::L2 => diffs.fold(T::zero(), |sum, d| sum + d * d),
            ErrorType::LInf => diffs.fold(T::zero(), T::max),
        };

        Some(error)
    }
}

/// Options for setting up and persisting a [`Network`][crate::Network].
///
/// This is a plain record. It is read by [`Network::initialize_weights`] and by external code
/// that trains or stores networks, and is never changed by the network itself.
///
/// [`Network::initialize_weights`]: crate::Network::initialize_weights
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NetworkConfig {
    /// Whether network outputs should be written out after evaluation.
    pub save_output: bool,
    /// Whether a previously saved network should be loaded instead of building a new one.
    pub load_neural_network: bool,
    /// Whether the network should be saved once set up.
    pub save_neural_network: bool,
    /// Whether weights are randomized when the network is initialized.
    pub initial_weights_randomization: bool,
    /// The error metric used to score the network.
    pub error_type: ErrorType,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            save_output: false,
            load_neural_network: false,
            save_neural_network: false,
            initial_weights_randomization: true,
            error_type: ErrorType::L2,
        }
    }
}
