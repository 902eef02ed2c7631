//! Tensor creation and initialization methods
//!
//! Every constructor validates the shape and reserves the element buffer fallibly,
//! so an oversized request surfaces as [`TensorError::AllocationFailure`] instead
//! of aborting the process.

use super::types::Tensor;
use crate::element::Element;
use crate::error::{TensorError, TensorResult};
use crate::types::{Rank, Shape};
use scirs2_core::ndarray_ext::{Array, IxDyn};

/// Check rank and extents, returning the element count
pub(crate) fn validate_shape(shape: &[usize]) -> TensorResult<usize> {
    if shape.is_empty() {
        return Err(TensorError::invalid_shape(shape, "rank must be at least 1"));
    }
    if let Some(axis) = shape.iter().position(|&extent| extent == 0) {
        return Err(TensorError::invalid_shape(
            shape,
            format!("axis {} has zero extent", axis),
        ));
    }
    shape
        .iter()
        .try_fold(1usize, |acc, &extent| acc.checked_mul(extent))
        .ok_or(TensorError::allocation_failure(usize::MAX))
}

/// Reserve exactly `count` slots and fill them with `value`
pub(crate) fn allocate_filled<T: Clone>(count: usize, value: T) -> TensorResult<Vec<T>> {
    let mut data = Vec::new();
    data.try_reserve_exact(count)
        .map_err(|_| TensorError::allocation_failure(count))?;
    data.resize(count, value);
    Ok(data)
}

impl<T: Element> Tensor<T> {
    /// Create a tensor with the given shape, every element zero
    ///
    /// Equivalent to [`Tensor::zeros`].
    ///
    /// # Errors
    ///
    /// - [`TensorError::InvalidShape`] if `shape` is empty or has a zero extent
    /// - [`TensorError::AllocationFailure`] if the buffer cannot be reserved
    pub fn new(shape: &[usize]) -> TensorResult<Self> {
        Self::zeros(shape)
    }

    /// Create a tensor from an explicit rank and shape
    ///
    /// `rank` must equal `shape.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use toco_core::{ErrorKind, Tensor};
    ///
    /// let tensor = Tensor::<f32>::create(2, &[3, 3]).unwrap();
    /// assert_eq!(tensor.len(), 9);
    ///
    /// let err = Tensor::<f32>::create(0, &[]).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidShape);
    /// ```
    pub fn create(rank: Rank, shape: &[usize]) -> TensorResult<Self> {
        if rank != shape.len() {
            return Err(TensorError::invalid_shape(
                shape,
                format!("declared rank {} but shape has {} axes", rank, shape.len()),
            ));
        }
        Self::zeros(shape)
    }

    /// Create a tensor filled with zeros
    ///
    /// # Examples
    ///
    /// ```
    /// use toco_core::Tensor;
    ///
    /// let tensor = Tensor::<i32>::zeros(&[2, 3]).unwrap();
    /// assert!(tensor.iter().all(|&x| x == 0));
    /// ```
    pub fn zeros(shape: &[usize]) -> TensorResult<Self> {
        Self::full(shape, T::zero())
    }

    /// Create a tensor filled with ones
    pub fn ones(shape: &[usize]) -> TensorResult<Self> {
        let mut tensor = Self::zeros(shape)?;
        tensor.fill(T::one());
        Ok(tensor)
    }

    /// Create a tensor filled with a specific value
    ///
    /// # Examples
    ///
    /// ```
    /// use toco_core::Tensor;
    ///
    /// let tensor = Tensor::full(&[2, 2], 3.5f64).unwrap();
    /// assert_eq!(tensor.as_slice(), &[3.5, 3.5, 3.5, 3.5]);
    /// ```
    pub fn full(shape: &[usize], value: T) -> TensorResult<Self> {
        let count = validate_shape(shape)?;
        let data = allocate_filled(count, value)?;
        Ok(Self {
            shape: Shape::from_slice(shape),
            data,
        })
    }

    /// Create a tensor from a row-major vector
    ///
    /// # Errors
    ///
    /// - [`TensorError::InvalidShape`] for an empty shape or a zero extent
    /// - [`TensorError::ShapeMismatch`] if `data.len()` differs from the shape product
    ///
    /// # Examples
    ///
    /// ```
    /// use toco_core::Tensor;
    ///
    /// let tensor = Tensor::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
    /// assert_eq!(tensor[&[1, 0]], 4);
    /// ```
    pub fn from_vec(data: Vec<T>, shape: &[usize]) -> TensorResult<Self> {
        let count = validate_shape(shape)?;
        if data.len() != count {
            return Err(TensorError::shape_mismatch(
                "from_vec",
                &[count],
                &[data.len()],
            ));
        }
        Ok(Self {
            shape: Shape::from_slice(shape),
            data,
        })
    }

    /// Create a tensor by copying an ndarray array in logical (row-major) order
    ///
    /// # Examples
    ///
    /// ```
    /// use scirs2_core::ndarray_ext::{Array, IxDyn};
    /// use toco_core::Tensor;
    ///
    /// let array = Array::from_shape_vec(IxDyn(&[2, 2]), vec![1.0f32, 2.0, 3.0, 4.0]).unwrap();
    /// let tensor = Tensor::from_array(&array).unwrap();
    /// assert_eq!(tensor.shape(), &[2, 2]);
    /// ```
    pub fn from_array(array: &Array<T, IxDyn>) -> TensorResult<Self> {
        let count = validate_shape(array.shape())?;
        let mut data = Vec::new();
        data.try_reserve_exact(count)
            .map_err(|_| TensorError::allocation_failure(count))?;
        data.extend(array.iter().copied());
        Ok(Self {
            shape: Shape::from_slice(array.shape()),
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_zeros_and_ones() {
        let zeros = Tensor::<f64>::zeros(&[3, 4]).unwrap();
        assert!(zeros.iter().all(|&x| x == 0.0));

        let ones = Tensor::<i32>::ones(&[2, 2, 2]).unwrap();
        assert_eq!(ones.len(), 8);
        assert!(ones.iter().all(|&x| x == 1));
    }

    #[test]
    fn test_new_rejects_empty_and_zero_axes() {
        let err = Tensor::<i32>::new(&[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidShape);

        let err = Tensor::<i32>::new(&[3, 0, 2]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidShape);
        assert!(err.to_string().contains("axis 1"));
    }

    #[test]
    fn test_create_checks_declared_rank() {
        assert!(Tensor::<f32>::create(3, &[1, 2, 3]).is_ok());
        let err = Tensor::<f32>::create(2, &[1, 2, 3]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidShape);
    }

    #[test]
    fn test_overflowing_shape_is_allocation_failure() {
        let err = Tensor::<f64>::zeros(&[usize::MAX, 2]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AllocationFailure);
    }

    #[test]
    fn test_oversized_buffer_is_allocation_failure() {
        let err = Tensor::<f64>::zeros(&[1 << 40, 1 << 20]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AllocationFailure);
    }

    #[test]
    fn test_from_vec_length_mismatch() {
        let err = Tensor::from_vec(vec![1, 2, 3], &[2, 2]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
    }

    #[test]
    fn test_from_array_copies_logical_order() {
        let array = Array::from_shape_vec(IxDyn(&[2, 3]), vec![1, 2, 3, 4, 5, 6]).unwrap();
        let transposed = array.t().to_owned();
        let tensor = Tensor::from_array(&transposed).unwrap();
        assert_eq!(tensor.shape(), &[3, 2]);
        assert_eq!(tensor.as_slice(), &[1, 4, 2, 5, 3, 6]);
    }
}
