//! # toco-nn
//!
//! Convolution and activation layers composed into sequential networks.
//!
//! - [`ConvolutionLayer`] holds a shared kernel, a stride and a
//!   [`DestinationPolicy`] saying where its output goes
//! - [`ActivationLayer`] applies an [`ActivationKind`](toco_core::ActivationKind)
//!   in place
//! - [`Network`] runs its [`Layer`]s left to right, feeding each output to the
//!   next layer
//!
//! ## Quick Start
//!
//! ```rust
//! use toco_core::Tensor;
//! use toco_nn::{ActivationLayer, ConvolutionLayer, Network};
//!
//! let input = Tensor::from_vec(
//!     vec![1.0, 7.0, 9.0, 2.3, 4.0, 1.8, 6.5, 4.5, 3.0, 3.4, 7.3, 8.7, 1.2, 1.6, 1.4, 2.3],
//!     &[4, 4],
//! )
//! .unwrap();
//! let kernel = Tensor::from_vec(vec![1.0, 3.4, 1.1, 8.4, 7.6, 3.2, 3.7, 4.0, 5.1], &[3, 3]).unwrap();
//!
//! let mut network = Network::new();
//! network
//!     .add_layer(ConvolutionLayer::new(kernel, 1).unwrap())
//!     .add_layer(ActivationLayer::tanh());
//!
//! let output = network.forward(&input).unwrap();
//! assert_eq!(output.shape(), &[2, 2]);
//! assert!(output.iter().all(|&x| x == 1.0));
//! ```
//!
//! ## Features
//!
//! - `parallel` - Convolution layers use the parallel kernel
//!
//! ## Logging
//!
//! `Network::forward` emits a `debug` event per call and `trace` events per
//! layer; a failing layer is reported with `warn` before the error is returned.

pub mod layer;
pub mod network;

#[cfg(test)]
mod property_tests;

pub use layer::{
    ActivationLayer, ConvolutionLayer, ConvolutionLayerBuilder, DestinationPolicy, Layer,
    LayerKind,
};
pub use network::Network;
