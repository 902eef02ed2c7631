//! Shape manipulation and addressing
//!
//! Reshape and flatten reinterpret the existing row-major buffer in place. The
//! element order never changes, so neither operation copies data.

use super::types::Tensor;
use crate::element::Element;
use crate::error::{TensorError, TensorResult};
use crate::types::{jumps_for, JumpTable, Shape};

impl<T: Element> Tensor<T> {
    /// Collapse the tensor to rank 1 in place
    ///
    /// # Examples
    ///
    /// ```
    /// use toco_core::Tensor;
    ///
    /// let mut tensor = Tensor::<f64>::zeros(&[2, 3, 4]).unwrap();
    /// tensor.flatten();
    /// assert_eq!(tensor.shape(), &[24]);
    /// ```
    pub fn flatten(&mut self) {
        let count = self.data.len();
        self.shape.clear();
        self.shape.push(count);
    }

    /// Reinterpret the buffer under a new shape in place
    ///
    /// The new shape must have the same element count. On error the tensor is
    /// left untouched.
    ///
    /// # Errors
    ///
    /// - [`TensorError::InvalidShape`] if `new_shape` is empty or has a zero extent
    /// - [`TensorError::ShapeMismatch`] if the element counts differ
    ///
    /// # Examples
    ///
    /// ```
    /// use toco_core::Tensor;
    ///
    /// let mut tensor = Tensor::from_vec((0..12).collect::<Vec<i32>>(), &[3, 4]).unwrap();
    /// tensor.reshape(&[2, 6]).unwrap();
    /// assert_eq!(tensor.shape(), &[2, 6]);
    /// assert_eq!(tensor[&[1, 0]], 6);
    /// ```
    pub fn reshape(&mut self, new_shape: &[usize]) -> TensorResult<()> {
        if new_shape.is_empty() {
            return Err(TensorError::invalid_shape(
                new_shape,
                "rank must be at least 1",
            ));
        }
        if new_shape.contains(&0) {
            return Err(TensorError::invalid_shape(
                new_shape,
                "every axis extent must be at least 1",
            ));
        }
        let new_count = new_shape
            .iter()
            .try_fold(1usize, |acc, &extent| acc.checked_mul(extent));
        if new_count != Some(self.data.len()) {
            return Err(TensorError::shape_mismatch(
                "reshape",
                &self.shape,
                new_shape,
            ));
        }
        self.shape = Shape::from_slice(new_shape);
        Ok(())
    }

    /// Per-axis flat-buffer strides for this tensor's shape
    ///
    /// `jump[rank - 1] == 1` and `jump[i] == jump[i + 1] * shape[i + 1]`.
    ///
    /// # Errors
    ///
    /// - [`TensorError::AllocationFailure`] if the table cannot be allocated
    pub fn jump_table(&self) -> TensorResult<JumpTable> {
        jumps_for(&self.shape)
    }

    /// Flat buffer index of a multi-index
    ///
    /// # Errors
    ///
    /// - [`TensorError::RankMismatch`] if `indices.len() != rank()`
    /// - [`TensorError::InvalidArgument`] if some index is out of range for its axis
    ///
    /// # Examples
    ///
    /// ```
    /// use toco_core::Tensor;
    ///
    /// let tensor = Tensor::<i32>::zeros(&[2, 3, 4]).unwrap();
    /// assert_eq!(tensor.element_index(&[1, 2, 3]).unwrap(), 23);
    /// ```
    pub fn element_index(&self, indices: &[usize]) -> TensorResult<usize> {
        if indices.len() != self.shape.len() {
            return Err(TensorError::rank_mismatch(
                "element_index",
                self.shape.len(),
                indices.len(),
            ));
        }
        let mut flat = 0;
        let mut stride = 1;
        for axis in (0..self.shape.len()).rev() {
            let (index, extent) = (indices[axis], self.shape[axis]);
            if index >= extent {
                return Err(TensorError::invalid_argument(
                    "element_index",
                    format!(
                        "index {} out of range for axis {} with extent {}",
                        index, axis, extent
                    ),
                ));
            }
            flat += index * stride;
            stride *= extent;
        }
        Ok(flat)
    }
}
