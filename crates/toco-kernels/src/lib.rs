//! # toco-kernels
//!
//! Compute kernels for TO-Core tensors.
//!
//! ## Overview
//!
//! - **N-dimensional convolution** ([`convolve`]) over any rank, driven by the
//!   jump tables of the input and the kernel
//! - **Output sizing** ([`output_extents`], [`convolve_new`])
//! - **Parallel convolution** ([`convolve_parallel`], feature `parallel`) that
//!   splits the output along the first axis
//! - **Loss metrics** ([`mse`], [`sad`], [`mad`], [`huber_loss`])
//!
//! ## Quick Start
//!
//! ```rust
//! use toco_core::Tensor;
//! use toco_kernels::{convolve, mad, output_extents, sad};
//!
//! let image = Tensor::<f64>::ones(&[5, 5]).unwrap();
//! let kernel = Tensor::full(&[3, 3], 0.5).unwrap();
//!
//! let extents = output_extents(image.shape(), kernel.shape(), 1).unwrap();
//! let mut response = Tensor::zeros(&extents).unwrap();
//! convolve(&image, &kernel, &mut response, 1).unwrap();
//! assert!(response.iter().all(|&x| x == 4.5));
//!
//! let target = Tensor::full(&extents, 4.0).unwrap();
//! assert_eq!(mad(&response, &target).unwrap(), sad(&response, &target).unwrap() / 9.0);
//! ```
//!
//! ## Features
//!
//! - `parallel` - Enable the parallel convolution entry point (rayon via scirs2-core)
//!
//! ## Logging
//!
//! Convolution emits `tracing` events: `debug` on entry with the operand shapes,
//! `warn` when a precondition rejects the call.

pub mod convolution;
pub mod loss;


// Re-exports
pub use convolution::{convolve, convolve_new, output_extents};
#[cfg(feature = "parallel")]
pub use convolution::convolve_parallel;
pub use loss::{huber_loss, mad, mse, sad};
