//! Statistical reductions over a single tensor
//!
//! Sums are accumulated in `f64` whatever the element type, so integer tensors
//! cannot overflow the accumulator and `f32` tensors keep precision.

use super::types::Tensor;
use crate::element::Element;

impl<T: Element> Tensor<T> {
    /// Sum of all elements, accumulated in `f64`
    pub fn sum_f64(&self) -> f64 {
        self.data.iter().map(|x| x.as_f64()).sum()
    }

    /// Arithmetic mean of all elements
    ///
    /// # Examples
    ///
    /// ```
    /// use toco_core::Tensor;
    ///
    /// let tensor = Tensor::from_vec(vec![1, 2, 3, 4], &[2, 2]).unwrap();
    /// assert_eq!(tensor.mean(), 2.5);
    /// ```
    pub fn mean(&self) -> f64 {
        self.sum_f64() / self.data.len() as f64
    }

    /// Population variance: `Σ (x - mean)² / n`
    ///
    /// Two passes: the mean first, then the squared deviations. Both passes work
    /// on values shifted by the first element, so a constant tensor has a
    /// variance of exactly zero.
    pub fn variance(&self) -> f64 {
        let n = self.data.len() as f64;
        let pivot = self.data.first().map_or(0.0, |x| x.as_f64());
        let shifted_mean = self.data.iter().map(|x| x.as_f64() - pivot).sum::<f64>() / n;
        let squared: f64 = self
            .data
            .iter()
            .map(|x| {
                let d = (x.as_f64() - pivot) - shifted_mean;
                d * d
            })
            .sum();
        squared / n
    }

    /// Population standard deviation
    ///
    /// # Examples
    ///
    /// ```
    /// use toco_core::Tensor;
    ///
    /// let tensor = Tensor::from_vec(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], &[8]).unwrap();
    /// assert_eq!(tensor.standard_deviation(), 2.0);
    /// ```
    pub fn standard_deviation(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Flat index of the first smallest element
    ///
    /// NaN elements never compare smaller, so they are skipped unless the
    /// first element is NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// use toco_core::Tensor;
    ///
    /// let tensor = Tensor::from_vec(vec![3, -1, 7, -1], &[4]).unwrap();
    /// assert_eq!(tensor.arg_min(), 1);
    /// ```
    pub fn arg_min(&self) -> usize {
        self.arg_by(|candidate, best| candidate < best)
    }

    /// Flat index of the first largest element
    pub fn arg_max(&self) -> usize {
        self.arg_by(|candidate, best| candidate > best)
    }

    fn arg_by(&self, better: impl Fn(T, T) -> bool) -> usize {
        let mut best = 0;
        for (index, &value) in self.data.iter().enumerate().skip(1) {
            if better(value, self.data[best]) {
                best = index;
            }
        }
        best
    }
}
