//! Handling of neuron activation functions.

use num_traits::Float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents which activation function to use when evaluating a neuron.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Activation {
    /// Hyperbolic tangent function. Outputs `tanh(x)`.
    Tanh,
    /// Logistic function. Outputs `1 / (1 + exp(-x))`.
    Exp,
    /// Identity function. Outputs `x`.
    Id,
    /// First order polynomial. Outputs `1 + x`.
    Pol1,
    /// Second order polynomial. Outputs `1 + x + x^2`.
    Pol2,
}

impl Default for Activation {
    fn default() -> Self {
        Activation::Id
    }
}

impl Activation {
    /// All activation kinds, in declaration order.
    pub const ALL: [Activation; 5] = [
        Activation::Tanh,
        Activation::Exp,
        Activation::Id,
        Activation::Pol1,
        Activation::Pol2,
    ];

    /// Applies the activation function to the input.
    pub fn apply<T: Float>(&self, x: T) -> T {
        match self {
            Activation::Tanh => tanh(x),
            Activation::Exp => logistic(x),
            Activation::Id => identity(x),
            Activation::Pol1 => pol1(x),
            Activation::Pol2 => pol2(x),
        }
    }

    /// Returns the corresponding function to the `Activation`.
    pub fn get_function<T: Float>(&self) -> fn(T) -> T {
        match self {
            Activation::Tanh => tanh,
            Activation::Exp => logistic,
            Activation::Id => identity,
            Activation::Pol1 => pol1,
            Activation::Pol2 => pol2,
        }
    }
}

/// Applies the activation function of the given kind to `x`.
pub fn activation<T: Float>(kind: Activation, x: T) -> T {
    kind.apply(x)
}

/// Outputs `tanh(x)`, kept strictly inside `(-1, 1)`.
///
/// For large `|x|` the result would round to `±1`, so it stops one epsilon short instead.
pub fn tanh<T: Float>(x: T) -> T {
    let bound = T::one() - T::epsilon();
    within(x.tanh(), -bound, bound)
}

/// Logistic function. Outputs `1 / (1 + exp(-x))`, kept strictly inside `(0, 1)`.
///
/// The exponent is always taken of a non-positive value, so large inputs of either sign
/// saturate toward `0` or `1` instead of overflowing. Results that would round to either bound
/// are moved to the nearest value inside it.
pub fn logistic<T: Float>(x: T) -> T {
    let y = if x >= T::zero() {
        T::one() / (T::one() + (-x).exp())
    } else {
        let e = x.exp();
        e / (T::one() + e)
    };

    within(y, T::min_positive_value(), T::one() - T::epsilon())
}

// Clamps `y` to `[lo, hi]`, letting NaN through
fn within<T: Float>(y: T, lo: T, hi: T) -> T {
    if y < lo {
        lo
    } else if y > hi {
        hi
    } else {
        y
    }
}

/// Outputs `x`.
pub fn identity<T>(x: T) -> T {
    x
}

/// Outputs `1 + x`.
pub fn pol1<T: Float>(x: T) -> T {
    T::one() + x
}

/// Outputs `1 + x + x^2`.
pub fn pol2<T: Float>(x: T) -> T {
    T::one() + x + x * x
}
