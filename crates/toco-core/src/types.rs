//! Core type aliases for TO-Core tensors.
//!
//! - [`Axis`] and [`Rank`] name the two ways an axis count is used
//! - [`Shape`] holds per-axis extents
//! - [`JumpTable`] holds the per-axis flat-buffer strides derived from a shape
//!
//! # Examples
//!
//! ```
//! use toco_core::{JumpTable, Shape, Tensor};
//!
//! let tensor = Tensor::<f64>::zeros(&[2, 3, 4]).unwrap();
//! let shape: Shape = tensor.shape_vec();
//! let jumps: JumpTable = tensor.jump_table().unwrap();
//!
//! assert_eq!(&shape[..], &[2, 3, 4]);
//! assert_eq!(&jumps[..], &[12, 4, 1]);
//! ```

use crate::error::{TensorError, TensorResult};
use smallvec::SmallVec;

/// Zero-indexed axis of a tensor.
pub type Axis = usize;

/// Number of axes of a tensor.
pub type Rank = usize;

/// Shape type using SmallVec to avoid heap allocation for common cases.
///
/// Inline up to 6 axes, which covers the convolution workloads this crate targets.
pub type Shape = SmallVec<[usize; 6]>;

/// Per-axis strides: `jump[i]` elements must be skipped in the flat buffer to
/// advance index `i` by one.
///
/// `jump[rank - 1] == 1` and `jump[i] == jump[i + 1] * shape[i + 1]`.
pub type JumpTable = SmallVec<[usize; 6]>;

/// Build the jump table for a row-major shape.
///
/// Returns an empty table for an empty shape; callers validate rank first.
pub(crate) fn jumps_for(shape: &[usize]) -> TensorResult<JumpTable> {
    let mut jumps = JumpTable::new();
    jumps
        .try_reserve_exact(shape.len())
        .map_err(|_| TensorError::allocation_failure(shape.len()))?;
    jumps.resize(shape.len(), 1);
    for axis in (0..shape.len().saturating_sub(1)).rev() {
        jumps[axis] = jumps[axis + 1] * shape[axis + 1];
    }
    Ok(jumps)
}
