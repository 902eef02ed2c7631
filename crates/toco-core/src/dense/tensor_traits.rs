//! Trait implementations for `Tensor`
//!
//! - `Index` / `IndexMut` by multi-index, panicking on an invalid index like slice indexing
//! - `Debug` for compact field dumps
//! - `Display` for the diagnostic layout: a metadata header followed by the
//!   elements in nested brackets

use super::types::Tensor;
use crate::element::Element;
use crate::types::jumps_for;
use std::fmt;

impl<T: Element> std::ops::Index<&[usize]> for Tensor<T> {
    type Output = T;

    fn index(&self, index: &[usize]) -> &Self::Output {
        match self.element_index(index) {
            Ok(flat) => &self.data[flat],
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: Element> std::ops::IndexMut<&[usize]> for Tensor<T> {
    fn index_mut(&mut self, index: &[usize]) -> &mut Self::Output {
        match self.element_index(index) {
            Ok(flat) => &mut self.data[flat],
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape)
            .field("data", &self.data)
            .finish()
    }
}

fn write_nested<T: Element>(
    f: &mut fmt::Formatter<'_>,
    tensor: &Tensor<T>,
    jumps: &[usize],
    axis: usize,
    offset: usize,
) -> fmt::Result {
    let extent = tensor.shape[axis];
    f.write_str("[")?;
    for i in 0..extent {
        if i > 0 {
            f.write_str(", ")?;
        }
        let position = offset + i * jumps[axis];
        if axis + 1 == tensor.shape.len() {
            fmt::Display::fmt(&tensor.data[position], f)?;
        } else {
            write_nested(f, tensor, jumps, axis + 1, position)?;
        }
    }
    f.write_str("]")
}

/// Diagnostic rendering
///
/// # Examples
///
/// ```
/// use toco_core::Tensor;
///
/// let tensor = Tensor::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
/// let text = tensor.to_string();
/// assert!(text.contains("Shape: [2, 3]"));
/// assert!(text.ends_with("[[1, 2, 3], [4, 5, 6]]"));
/// ```
impl<T: Element> fmt::Display for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let jumps = jumps_for(&self.shape).map_err(|_| fmt::Error)?;
        writeln!(f, "Tensor<{}>", T::KIND)?;
        writeln!(f, " > Dimensions: {}", self.rank())?;
        writeln!(f, " > Elements: {}", self.len())?;
        writeln!(f, " > Shape: {:?}", self.shape())?;
        write_nested(f, self, &jumps, 0, 0)
    }
}
