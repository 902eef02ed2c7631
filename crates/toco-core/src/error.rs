//! Error types for tensor operations
//!
//! Every fallible operation in TO-Core returns [`TensorResult`]. Preconditions are
//! checked before any element is read or written, so an `Err` never leaves a
//! destination tensor partially updated.
//!
//! # Examples
//!
//! ```
//! use toco_core::{ErrorKind, Tensor};
//!
//! let mut tensor = Tensor::<i32>::zeros(&[2, 3]).unwrap();
//! let err = tensor.reshape(&[4, 2]).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
//! ```

use thiserror::Error;

/// Error type for tensor operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TensorError {
    /// Zero rank or a zero-sized axis at construction
    #[error("Invalid shape {shape:?}: {reason}")]
    InvalidShape { shape: Vec<usize>, reason: String },

    /// Two tensors that must agree in rank and extent do not
    #[error("{operation}: shape mismatch - expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        operation: String,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// Convolution input and kernel have different ranks
    #[error("{operation}: rank mismatch - tensor has rank {tensor_rank}, kernel has rank {kernel_rank}")]
    RankMismatch {
        operation: String,
        tensor_rank: usize,
        kernel_rank: usize,
    },

    /// The destination cannot hold the convolution output on some axis
    #[error("Destination too small on axis {axis}: output needs {required}, destination has {actual}")]
    DestinationTooSmall {
        axis: usize,
        required: usize,
        actual: usize,
    },

    /// A precondition on a scalar argument or configuration was violated
    #[error("{operation}: {message}")]
    InvalidArgument { operation: String, message: String },

    /// A required operand was not supplied
    #[error("{operation}: required argument '{parameter}' is missing")]
    NullReference {
        operation: String,
        parameter: String,
    },

    /// The element buffer could not be allocated
    #[error("Failed to allocate buffer for {elements} elements")]
    AllocationFailure { elements: usize },

    /// Integer division by a zero element
    #[error("{operation}: integer division by zero at flat index {index}")]
    DivisionByZero { operation: String, index: usize },
}

/// Category of a [`TensorError`], without its context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidShape,
    ShapeMismatch,
    RankMismatch,
    DestinationTooSmall,
    InvalidArgument,
    NullReference,
    AllocationFailure,
    DivisionByZero,
}

/// Result type for tensor operations
pub type TensorResult<T> = Result<T, TensorError>;

impl TensorError {
    /// The category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TensorError::InvalidShape { .. } => ErrorKind::InvalidShape,
            TensorError::ShapeMismatch { .. } => ErrorKind::ShapeMismatch,
            TensorError::RankMismatch { .. } => ErrorKind::RankMismatch,
            TensorError::DestinationTooSmall { .. } => ErrorKind::DestinationTooSmall,
            TensorError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            TensorError::NullReference { .. } => ErrorKind::NullReference,
            TensorError::AllocationFailure { .. } => ErrorKind::AllocationFailure,
            TensorError::DivisionByZero { .. } => ErrorKind::DivisionByZero,
        }
    }

    /// Create an invalid shape error
    pub fn invalid_shape(shape: &[usize], reason: impl Into<String>) -> Self {
        TensorError::InvalidShape {
            shape: shape.to_vec(),
            reason: reason.into(),
        }
    }

    /// Create a shape mismatch error
    pub fn shape_mismatch(
        operation: impl Into<String>,
        expected: &[usize],
        actual: &[usize],
    ) -> Self {
        TensorError::ShapeMismatch {
            operation: operation.into(),
            expected: expected.to_vec(),
            actual: actual.to_vec(),
        }
    }

    /// Create a rank mismatch error
    pub fn rank_mismatch(operation: impl Into<String>, tensor_rank: usize, kernel_rank: usize) -> Self {
        TensorError::RankMismatch {
            operation: operation.into(),
            tensor_rank,
            kernel_rank,
        }
    }

    /// Create a destination-too-small error
    pub fn destination_too_small(axis: usize, required: usize, actual: usize) -> Self {
        TensorError::DestinationTooSmall {
            axis,
            required,
            actual,
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(operation: impl Into<String>, message: impl Into<String>) -> Self {
        TensorError::InvalidArgument {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create a missing-operand error
    pub fn null_reference(operation: impl Into<String>, parameter: impl Into<String>) -> Self {
        TensorError::NullReference {
            operation: operation.into(),
            parameter: parameter.into(),
        }
    }

    /// Create an allocation failure error
    pub fn allocation_failure(elements: usize) -> Self {
        TensorError::AllocationFailure { elements }
    }

    /// Create a division-by-zero error
    pub fn division_by_zero(operation: impl Into<String>, index: usize) -> Self {
        TensorError::DivisionByZero {
            operation: operation.into(),
            index,
        }
    }
}
