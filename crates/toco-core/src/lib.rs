//! # toco-core
//!
//! Dense N-dimensional tensors and the elementwise, statistical and activation
//! operations of TO-Core.
//!
//! - **Dense tensor representation** ([`Tensor`]) over a closed set of element
//!   types ([`Element`]: `i32`, `f32`, `f64`)
//! - **Jump tables** ([`JumpTable`]) mapping multi-indices to flat buffer offsets
//! - **Elementwise engine** ([`elementwise`]) for add, subtract, multiply, divide,
//!   scalar multiply and clamp
//! - **Statistics** (mean, variance, standard deviation, arg-min, arg-max)
//! - **Activations** ([`ActivationKind`]) applied in place
//!
//! ## Core Principles
//!
//! ### SciRS2 Integration
//!
//! Numeric traits and ndarray interop come from `scirs2-core`
//! (`scirs2_core::numeric`, `scirs2_core::ndarray_ext`).
//!
//! ### Memory Layout
//!
//! Every tensor owns one contiguous row-major buffer. Reshape and flatten only
//! replace the shape, never the data.
//!
//! ### Safety
//!
//! All indexing is bounds-checked. No unsafe code.
//!
//! ## Quick Start
//!
//! ```
//! use toco_core::{elementwise, Tensor};
//!
//! let a = Tensor::<f64>::ones(&[2, 3]).unwrap();
//! let b = Tensor::full(&[2, 3], 2.5).unwrap();
//! let mut sum = Tensor::zeros(&[2, 3]).unwrap();
//!
//! elementwise::add(&a, &b, &mut sum).unwrap();
//! assert_eq!(sum.mean(), 3.5);
//! assert_eq!(sum.standard_deviation(), 0.0);
//! ```
//!
//! ## Shape Operations
//!
//! ```
//! use toco_core::Tensor;
//!
//! let mut tensor = Tensor::from_vec((0..24).collect::<Vec<i32>>(), &[2, 3, 4]).unwrap();
//! assert_eq!(&tensor.jump_table().unwrap()[..], &[12, 4, 1]);
//!
//! tensor.reshape(&[6, 4]).unwrap();
//! assert_eq!(tensor[&[5, 3]], 23);
//!
//! tensor.flatten();
//! assert_eq!(tensor.shape(), &[24]);
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`TensorResult`]. Preconditions are checked before
//! any data is touched:
//!
//! ```
//! use toco_core::{ErrorKind, Tensor};
//!
//! assert_eq!(Tensor::<f32>::zeros(&[3, 0]).unwrap_err().kind(), ErrorKind::InvalidShape);
//!
//! let mut tensor = Tensor::<f32>::zeros(&[2, 3]).unwrap();
//! assert_eq!(tensor.reshape(&[7]).unwrap_err().kind(), ErrorKind::ShapeMismatch);
//! assert_eq!(tensor.shape(), &[2, 3]);
//! ```
//!
//! ## Integration with Other Crates
//!
//! - **toco-kernels:** N-dimensional convolution and loss metrics over `Tensor`
//! - **toco-nn:** Convolution and activation layers composed into a `Network`
//!
//! ## Features
//!
//! - `parallel`: Enable parallel operations via Rayon (through scirs2-core)
//! - `serde`: Enable serialization/deserialization support

pub mod dense;
pub mod element;
pub mod error;
pub mod types;


pub use dense::{elementwise, ActivationKind, BinaryOp, Tensor};
pub use element::{Element, ElementKind};
pub use error::{ErrorKind, TensorError, TensorResult};
pub use types::{Axis, JumpTable, Rank, Shape};
