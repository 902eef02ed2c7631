//! Dense tensor implementation and operations
//!
//! The `Tensor` type is defined in [`types`]; every other sub-module adds an
//! `impl` block or a family of free functions over it.

// Core type definition
pub mod types;

// Operation modules (organized by functionality)
mod activation;
mod creation;
pub mod elementwise;
mod indexing;
mod shape_ops;
mod statistics;

// Supporting modules
mod tensor_traits;

pub use activation::ActivationKind;
pub use elementwise::BinaryOp;
pub use types::Tensor;
