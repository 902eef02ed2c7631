//! Tensor type definition and basic accessors
//!
//! This module defines the core `Tensor<T>` type. Creation, shape manipulation and
//! arithmetic live in sibling modules as further `impl` blocks.

use crate::element::{Element, ElementKind};
use crate::types::{Rank, Shape};

/// Dense N-dimensional tensor with a contiguous row-major buffer
///
/// Each tensor exclusively owns its shape and its element buffer. The last axis
/// varies fastest in the buffer.
///
/// # Invariants
///
/// - `rank() >= 1`
/// - every axis extent is at least 1
/// - `len()` equals the product of the shape and the buffer length
///
/// # Type Parameters
///
/// * `T` - The element type: `i32`, `f32` or `f64`
///
/// # Examples
///
/// ```
/// use toco_core::Tensor;
///
/// // Create a 3D tensor of zeros
/// let tensor = Tensor::<f64>::zeros(&[2, 3, 4]).unwrap();
/// assert_eq!(tensor.shape(), &[2, 3, 4]);
/// assert_eq!(tensor.rank(), 3);
/// assert_eq!(tensor.len(), 24);
/// ```
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(bound(serialize = "T: serde::Serialize")))]
pub struct Tensor<T> {
    /// Per-axis extents
    pub(crate) shape: Shape,
    /// Row-major element buffer of length `shape.iter().product()`
    pub(crate) data: Vec<T>,
}

impl<T: Element> Tensor<T> {
    /// Get the rank (number of axes) of this tensor
    ///
    /// # Examples
    ///
    /// ```
    /// use toco_core::Tensor;
    ///
    /// let tensor = Tensor::<f32>::zeros(&[2, 3, 4]).unwrap();
    /// assert_eq!(tensor.rank(), 3);
    /// ```
    pub fn rank(&self) -> Rank {
        self.shape.len()
    }

    /// Get the shape of this tensor
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Get an owned copy of the shape
    pub fn shape_vec(&self) -> Shape {
        self.shape.clone()
    }

    /// Get the total number of elements (the product of the shape)
    ///
    /// # Examples
    ///
    /// ```
    /// use toco_core::Tensor;
    ///
    /// let tensor = Tensor::<i32>::zeros(&[2, 3, 4]).unwrap();
    /// assert_eq!(tensor.len(), 24);
    /// ```
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false` for a tensor built through the public constructors
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element type tag of this tensor
    pub fn element_kind(&self) -> ElementKind {
        T::KIND
    }

    /// Whether `other` has the same rank and per-axis extents
    pub fn same_shape(&self, other: &Self) -> bool {
        self.shape == other.shape
    }

    /// Borrow the flat row-major buffer
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutably borrow the flat row-major buffer
    ///
    /// The length of the buffer is fixed; only element values may change.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Copy the buffer into a new vector
    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }

    /// Consume the tensor and return its buffer
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Iterate over elements in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Mutably iterate over elements in row-major order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }

    /// Overwrite every element with `value`
    ///
    /// # Examples
    ///
    /// ```
    /// use toco_core::Tensor;
    ///
    /// let mut tensor = Tensor::<i32>::zeros(&[2, 2]).unwrap();
    /// tensor.fill(-1);
    /// assert!(tensor.iter().all(|&x| x == -1));
    /// ```
    pub fn fill(&mut self, value: T) {
        self.data.iter_mut().for_each(|x| *x = value);
    }

    /// Size of the element buffer in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len() * std::mem::size_of::<T>()
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::Tensor;
    use crate::element::Element;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    struct TensorParts<T> {
        shape: Vec<usize>,
        data: Vec<T>,
    }

    // Shape and length are validated by `from_vec`.
    impl<'de, T> Deserialize<'de> for Tensor<T>
    where
        T: Element + Deserialize<'de>,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let parts = TensorParts::<T>::deserialize(deserializer)?;
            Tensor::from_vec(parts.data, &parts.shape).map_err(serde::de::Error::custom)
        }
    }
}
