//! # TO-Core - Tensor Operations Core
//!
//! Dense N-dimensional tensors over `i32`, `f32` and `f64`, an N-dimensional
//! convolution engine and sequential convolution/activation networks.
//!
//! This is the **meta crate** that re-exports all TO-Core components.
//!
//! ## Quick Start
//!
//! ```
//! use toco::prelude::*;
//!
//! let tensor = Tensor::from_vec(vec![5, -4, 43, -17, 0], &[5])?;
//! let kernel = Tensor::from_vec(vec![3, -17], &[2])?;
//! let response = convolve_new(&tensor, &kernel, 1)?;
//! assert_eq!(response.as_slice(), &[83, -743, 418, -51]);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Components
//!
//! ### Tensors ([`core`])
//!
//! Creation, reshape/flatten, jump tables, elementwise arithmetic, clamp,
//! statistics and activations.
//!
//! ```
//! use toco::core::Tensor;
//!
//! let mut tensor = Tensor::<f64>::ones(&[2, 3, 4])?;
//! tensor.reshape(&[6, 4])?;
//! assert_eq!(tensor.shape(), &[6, 4]);
//! assert_eq!(tensor.mean(), 1.0);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ### Kernels ([`kernels`])
//!
//! N-dimensional strided convolution and loss metrics.
//!
//! ```
//! use toco::core::Tensor;
//! use toco::kernels::{mse, output_extents};
//!
//! let extents = output_extents(&[28, 28], &[5, 5], 3)?;
//! assert_eq!(&extents[..], &[8, 8]);
//!
//! let a = Tensor::from_vec(vec![1.0, 2.0], &[2])?;
//! let b = Tensor::from_vec(vec![2.0, 4.0], &[2])?;
//! assert_eq!(mse(&a, &b)?, 2.5);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ### Networks ([`nn`])
//!
//! ```
//! use toco::prelude::*;
//!
//! let mut network = Network::new();
//! network
//!     .add_layer(ConvolutionLayer::new(Tensor::<f32>::ones(&[2, 2])?, 1)?)
//!     .add_layer(ActivationLayer::relu());
//! let output = network.forward(&Tensor::ones(&[3, 3])?)?;
//! assert_eq!(output.as_slice(), &[4.0; 4]);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `tracing` (default) - [`tracing_support::init_tracing`] installs a
//!   `tracing-subscriber` subscriber
//! - `parallel` - Parallel convolution, also used by convolution layers
//! - `serde` - Serialize/deserialize tensors

pub use toco_core as core;
pub use toco_kernels as kernels;
pub use toco_nn as nn;

pub mod tracing_support;

#[cfg(test)]
mod property_tests;

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! # Example
    //!
    //! ```
    //! use toco::prelude::*;
    //!
    //! let tensor = Tensor::<f64>::zeros(&[10, 20, 30]).unwrap();
    //! assert_eq!(tensor.element_kind(), ElementKind::Double);
    //! ```

    // Core types
    pub use crate::core::{
        elementwise, ActivationKind, BinaryOp, Element, ElementKind, ErrorKind, Shape, Tensor,
        TensorError, TensorResult,
    };

    // Kernels
    pub use crate::kernels::{convolve, convolve_new, huber_loss, mad, mse, output_extents, sad};
    #[cfg(feature = "parallel")]
    pub use crate::kernels::convolve_parallel;

    // Networks
    pub use crate::nn::{ActivationLayer, ConvolutionLayer, DestinationPolicy, Layer, Network};

    pub use crate::tracing_support::{init_tracing, TracingConfig, TracingFormat};
}
