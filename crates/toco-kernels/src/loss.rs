//! Loss metrics between two tensors of identical shape
//!
//! All metrics return `f64`. MSE, SAD and MAD widen both operands to `f64`
//! before subtracting. Huber evaluates its penalty terms in the element type.

use toco_core::{elementwise::check_compatible, Element, Tensor, TensorError, TensorResult};

/// Mean squared error: `Σ (a - b)² / n`
///
/// Both operands are widened to `f64` before the difference is taken, so
/// integer differences never overflow.
///
/// # Examples
///
/// ```
/// use toco_core::Tensor;
/// use toco_kernels::mse;
///
/// let a = Tensor::from_vec(vec![1, 2, 3, 4], &[4]).unwrap();
/// let b = Tensor::from_vec(vec![1, 4, 3, 0], &[4]).unwrap();
/// assert_eq!(mse(&a, &b).unwrap(), 5.0);
/// ```
pub fn mse<T: Element>(a: &Tensor<T>, b: &Tensor<T>) -> TensorResult<f64> {
    check_compatible("mse", a, b)?;
    let sum: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let d = x.as_f64() - y.as_f64();
            d * d
        })
        .sum();
    Ok(sum / a.len() as f64)
}

/// Sum of absolute differences: `Σ |a - b|`
///
/// Differences are taken in `f64`.
pub fn sad<T: Element>(a: &Tensor<T>, b: &Tensor<T>) -> TensorResult<f64> {
    check_compatible("sad", a, b)?;
    Ok(a
        .iter()
        .zip(b.iter())
        .map(|(&x, &y)| (x.as_f64() - y.as_f64()).abs())
        .sum())
}

/// Mean absolute difference: `sad(a, b) / n`
pub fn mad<T: Element>(a: &Tensor<T>, b: &Tensor<T>) -> TensorResult<f64> {
    Ok(sad(a, b)? / a.len() as f64)
}

/// Huber loss summed over all elements
///
/// For each `d = |a - b|`: `d² / 2` when `d <= delta`, otherwise
/// `delta * (d - delta / 2)`. Both penalty terms are evaluated in the element
/// type, so integer tensors use integer division for the halving.
///
/// # Errors
///
/// - [`TensorError::InvalidArgument`] if `delta <= 0`
/// - [`TensorError::ShapeMismatch`] if the shapes differ
///
/// # Examples
///
/// ```
/// use toco_core::Tensor;
/// use toco_kernels::huber_loss;
///
/// let a = Tensor::from_vec(vec![0.0, 0.0], &[2]).unwrap();
/// let b = Tensor::from_vec(vec![0.5, 3.0], &[2]).unwrap();
/// // 0.5² / 2 + 1 * (3 - 0.5)
/// assert_eq!(huber_loss(&a, &b, 1.0).unwrap(), 2.625);
/// ```
pub fn huber_loss<T: Element>(a: &Tensor<T>, b: &Tensor<T>, delta: T) -> TensorResult<f64> {
    if delta <= T::zero() {
        return Err(TensorError::invalid_argument(
            "huber_loss",
            format!("delta must be positive, got {}", delta),
        ));
    }
    check_compatible("huber_loss", a, b)?;

    let two = T::one() + T::one();
    let half = |x: T| x.checked_quotient(two).unwrap_or_else(T::zero);
    let half_delta = half(delta);

    Ok(a
        .iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let d = x.distance(y);
            let penalty = if d <= delta {
                half(d.wrapping_mul(d))
            } else {
                delta.wrapping_mul(d.wrapping_sub(half_delta))
            };
            penalty.as_f64()
        })
        .sum())
}
