//! In-place activation functions
//!
//! Each activation is a per-element map over the buffer. Values are evaluated in
//! `f64` and narrowed back to the element type, so integer tensors truncate toward
//! zero (a sigmoid over `i32` yields 0 everywhere except for saturated inputs).

use super::types::Tensor;
use crate::element::Element;
use std::fmt;

/// Activation function selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActivationKind {
    /// `max(0, x)`
    ReLU,
    /// `x` for `x > 0`, otherwise `alpha * x`
    LeakyReLU,
    /// `1 / (1 + e^-x)`
    Sigmoid,
    /// `1 - 2 / (e^2x + 1)`
    Tanh,
}

impl ActivationKind {
    /// Evaluate the activation at one point
    ///
    /// `alpha` is only read by [`ActivationKind::LeakyReLU`].
    ///
    /// # Examples
    ///
    /// ```
    /// use toco_core::ActivationKind;
    ///
    /// assert_eq!(ActivationKind::ReLU.eval(-3.0, 0.0), 0.0);
    /// assert_eq!(ActivationKind::LeakyReLU.eval(-3.0, 0.1), -0.30000000000000004);
    /// assert_eq!(ActivationKind::Sigmoid.eval(0.0, 0.0), 0.5);
    /// ```
    #[inline]
    pub fn eval(self, x: f64, alpha: f64) -> f64 {
        match self {
            ActivationKind::ReLU => x.max(0.0),
            ActivationKind::LeakyReLU => {
                if x > 0.0 {
                    x
                } else {
                    alpha * x
                }
            }
            ActivationKind::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            ActivationKind::Tanh => 1.0 - 2.0 / ((2.0 * x).exp() + 1.0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ActivationKind::ReLU => "relu",
            ActivationKind::LeakyReLU => "leaky_relu",
            ActivationKind::Sigmoid => "sigmoid",
            ActivationKind::Tanh => "tanh",
        }
    }
}

impl fmt::Display for ActivationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<T: Element> Tensor<T> {
    /// Apply an activation to every element in place
    ///
    /// # Examples
    ///
    /// ```
    /// use toco_core::{ActivationKind, Tensor};
    ///
    /// let mut tensor = Tensor::from_vec(vec![-2.0f32, 0.0, 3.0], &[3]).unwrap();
    /// tensor.activate(ActivationKind::LeakyReLU, 0.5);
    /// assert_eq!(tensor.as_slice(), &[-1.0, 0.0, 3.0]);
    /// ```
    pub fn activate(&mut self, kind: ActivationKind, alpha: f64) {
        for x in self.data.iter_mut() {
            *x = T::from_f64_truncated(kind.eval(x.as_f64(), alpha));
        }
    }

    /// Rectified linear unit, in place
    pub fn relu(&mut self) {
        self.activate(ActivationKind::ReLU, 0.0);
    }

    /// Leaky rectified linear unit, in place
    pub fn leaky_relu(&mut self, alpha: f64) {
        self.activate(ActivationKind::LeakyReLU, alpha);
    }

    /// Logistic sigmoid, in place
    pub fn sigmoid(&mut self) {
        self.activate(ActivationKind::Sigmoid, 0.0);
    }

    /// Hyperbolic tangent, in place
    pub fn tanh(&mut self) {
        self.activate(ActivationKind::Tanh, 0.0);
    }
}
