//! Element access and ndarray interop
//!
//! Multi-index access goes through [`Tensor::element_index`], so all indexing is
//! bounds-checked against each axis, not only against the buffer length.

use super::types::Tensor;
use crate::element::Element;
use crate::error::{TensorError, TensorResult};
use scirs2_core::ndarray_ext::{Array, ArrayView, IxDyn};

impl<T: Element> Tensor<T> {
    /// Get an element by multi-index without panicking
    ///
    /// # Examples
    ///
    /// ```
    /// use toco_core::Tensor;
    ///
    /// let tensor = Tensor::<f64>::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// assert_eq!(tensor.get(&[0, 1]), Some(&2.0));
    /// assert_eq!(tensor.get(&[0, 2]), None);
    /// assert_eq!(tensor.get(&[1]), None);
    /// ```
    pub fn get(&self, index: &[usize]) -> Option<&T> {
        let flat = self.element_index(index).ok()?;
        self.data.get(flat)
    }

    /// Get a mutable reference to an element by multi-index without panicking
    pub fn get_mut(&mut self, index: &[usize]) -> Option<&mut T> {
        let flat = self.element_index(index).ok()?;
        self.data.get_mut(flat)
    }

    /// Get an element by multi-index, reporting why the index is invalid
    ///
    /// # Errors
    ///
    /// Same as [`Tensor::element_index`].
    pub fn get_checked(&self, index: &[usize]) -> TensorResult<&T> {
        let flat = self.element_index(index)?;
        self.data
            .get(flat)
            .ok_or_else(|| TensorError::invalid_argument("get_checked", "index out of bounds"))
    }

    /// Borrow the tensor as a dynamic-rank ndarray view
    ///
    /// # Examples
    ///
    /// ```
    /// use toco_core::Tensor;
    ///
    /// let tensor = Tensor::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
    /// let view = tensor.view().unwrap();
    /// assert_eq!(view[[1, 2]], 6);
    /// ```
    pub fn view(&self) -> TensorResult<ArrayView<'_, T, IxDyn>> {
        ArrayView::from_shape(IxDyn(&self.shape), &self.data)
            .map_err(|e| TensorError::invalid_shape(&self.shape, e.to_string()))
    }

    /// Copy the tensor into an owned ndarray array
    pub fn to_array(&self) -> TensorResult<Array<T, IxDyn>> {
        Ok(self.view()?.to_owned())
    }
}
