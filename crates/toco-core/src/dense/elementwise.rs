//! Elementwise operation engine
//!
//! Binary operations combine two tensors of identical shape index by index into a
//! destination of the same shape. There is no broadcasting. All shape checks run
//! before the first write, and integer division scans the divisor for zeros
//! first, so a failed call never leaves the destination half-written.
//!
//! Aliasing the destination with an operand is expressed with the `_assign`
//! variants, since the borrow checker rules out passing the same tensor as both
//! `&` and `&mut`.
//!
//! # Examples
//!
//! ```
//! use toco_core::{elementwise, Tensor};
//!
//! let a = Tensor::from_vec(vec![1, 2, 3, 4], &[2, 2]).unwrap();
//! let b = Tensor::from_vec(vec![10, 20, 30, 40], &[2, 2]).unwrap();
//! let mut dest = Tensor::<i32>::zeros(&[2, 2]).unwrap();
//!
//! elementwise::add(&a, &b, &mut dest).unwrap();
//! assert_eq!(dest.as_slice(), &[11, 22, 33, 44]);
//! ```

use super::types::Tensor;
use crate::element::Element;
use crate::error::{TensorError, TensorResult};
use std::fmt;

/// Binary operator applied by the elementwise engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    /// Integer division truncates toward zero, float division follows IEEE-754
    Divide,
}

impl BinaryOp {
    /// Lowercase operation name used in error context
    pub fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Subtract => "subtract",
            BinaryOp::Multiply => "multiply",
            BinaryOp::Divide => "divide",
        }
    }

    /// Apply the operator to one pair of elements
    ///
    /// Returns `None` only for integer division by zero.
    #[inline]
    pub fn eval<T: Element>(self, lhs: T, rhs: T) -> Option<T> {
        match self {
            BinaryOp::Add => Some(lhs.wrapping_add(rhs)),
            BinaryOp::Subtract => Some(lhs.wrapping_sub(rhs)),
            BinaryOp::Multiply => Some(lhs.wrapping_mul(rhs)),
            BinaryOp::Divide => lhs.checked_quotient(rhs),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fail with `ShapeMismatch` unless `a` and `b` have the same rank and extents
pub fn check_compatible<T: Element>(
    operation: &str,
    a: &Tensor<T>,
    b: &Tensor<T>,
) -> TensorResult<()> {
    if a.same_shape(b) {
        Ok(())
    } else {
        tracing::warn!(
            operation,
            expected = ?a.shape(),
            actual = ?b.shape(),
            "incompatible tensor shapes"
        );
        Err(TensorError::shape_mismatch(operation, a.shape(), b.shape()))
    }
}

/// Reject an integer division whose divisor holds a zero
fn check_divisor<T: Element>(op: BinaryOp, divisor: &[T]) -> TensorResult<()> {
    if op != BinaryOp::Divide || !T::KIND.is_integer() {
        return Ok(());
    }
    match divisor.iter().position(|x| x.is_zero()) {
        Some(index) => Err(TensorError::division_by_zero(op.name(), index)),
        None => Ok(()),
    }
}

/// Apply `op` to every pair, storing into `out`. Preconditions already hold.
#[inline]
fn combine_into<T: Element>(op: BinaryOp, lhs: &[T], rhs: &[T], out: &mut [T]) {
    for ((o, &l), &r) in out.iter_mut().zip(lhs).zip(rhs) {
        // Divisor was pre-scanned, so `eval` only yields `None` for integers at
        // indices already rejected.
        *o = op.eval(l, r).unwrap_or_else(T::zero);
    }
}

/// `destination[i] = op(a[i], b[i])` for every flat index
///
/// # Errors
///
/// - [`TensorError::ShapeMismatch`] if any pair among `a`, `b`, `destination`
///   differs in shape
/// - [`TensorError::DivisionByZero`] for integer division by a zero element
pub fn apply<T: Element>(
    a: &Tensor<T>,
    b: &Tensor<T>,
    destination: &mut Tensor<T>,
    op: BinaryOp,
) -> TensorResult<()> {
    check_compatible(op.name(), a, b)?;
    check_compatible(op.name(), a, destination)?;
    check_divisor(op, &b.data)?;
    combine_into(op, &a.data, &b.data, &mut destination.data);
    Ok(())
}

/// In-place variant of [`apply`] where the destination is `a`
///
/// # Examples
///
/// ```
/// use toco_core::{elementwise, BinaryOp, Tensor};
///
/// let mut a = Tensor::from_vec(vec![1.0f32, 2.0, 3.0], &[3]).unwrap();
/// let b = Tensor::from_vec(vec![2.0f32, 2.0, 2.0], &[3]).unwrap();
/// elementwise::apply_assign(&mut a, &b, BinaryOp::Multiply).unwrap();
/// assert_eq!(a.as_slice(), &[2.0, 4.0, 6.0]);
/// ```
pub fn apply_assign<T: Element>(a: &mut Tensor<T>, b: &Tensor<T>, op: BinaryOp) -> TensorResult<()> {
    check_compatible(op.name(), a, b)?;
    check_divisor(op, &b.data)?;
    for (l, &r) in a.data.iter_mut().zip(&b.data) {
        *l = op.eval(*l, r).unwrap_or_else(T::zero);
    }
    Ok(())
}

/// In-place variant of [`apply`] where the destination is `b`
pub fn apply_assign_rhs<T: Element>(
    a: &Tensor<T>,
    b: &mut Tensor<T>,
    op: BinaryOp,
) -> TensorResult<()> {
    check_compatible(op.name(), a, b)?;
    check_divisor(op, &b.data)?;
    for (&l, r) in a.data.iter().zip(b.data.iter_mut()) {
        *r = op.eval(l, *r).unwrap_or_else(T::zero);
    }
    Ok(())
}

/// `destination[i] = op(a[i], scalar)` for every flat index
///
/// # Errors
///
/// - [`TensorError::ShapeMismatch`] if `a` and `destination` differ in shape
/// - [`TensorError::DivisionByZero`] for integer division by a zero scalar
pub fn scalar_apply<T: Element>(
    a: &Tensor<T>,
    scalar: T,
    destination: &mut Tensor<T>,
    op: BinaryOp,
) -> TensorResult<()> {
    check_compatible(op.name(), a, destination)?;
    check_divisor(op, std::slice::from_ref(&scalar))?;
    for (o, &l) in destination.data.iter_mut().zip(&a.data) {
        *o = op.eval(l, scalar).unwrap_or_else(T::zero);
    }
    Ok(())
}

/// In-place variant of [`scalar_apply`]
pub fn scalar_apply_assign<T: Element>(a: &mut Tensor<T>, scalar: T, op: BinaryOp) -> TensorResult<()> {
    check_divisor(op, std::slice::from_ref(&scalar))?;
    for x in a.data.iter_mut() {
        *x = op.eval(*x, scalar).unwrap_or_else(T::zero);
    }
    Ok(())
}

/// `destination = a + b`
pub fn add<T: Element>(a: &Tensor<T>, b: &Tensor<T>, destination: &mut Tensor<T>) -> TensorResult<()> {
    apply(a, b, destination, BinaryOp::Add)
}

/// `destination = a - b`
pub fn subtract<T: Element>(
    a: &Tensor<T>,
    b: &Tensor<T>,
    destination: &mut Tensor<T>,
) -> TensorResult<()> {
    apply(a, b, destination, BinaryOp::Subtract)
}

/// `destination = a * b` (Hadamard product)
pub fn multiply<T: Element>(
    a: &Tensor<T>,
    b: &Tensor<T>,
    destination: &mut Tensor<T>,
) -> TensorResult<()> {
    apply(a, b, destination, BinaryOp::Multiply)
}

/// `destination = a / b`
///
/// # Examples
///
/// ```
/// use toco_core::{elementwise, ErrorKind, Tensor};
///
/// let a = Tensor::from_vec(vec![7, -7, 9], &[3]).unwrap();
/// let b = Tensor::from_vec(vec![2, 2, 0], &[3]).unwrap();
/// let mut dest = Tensor::<i32>::zeros(&[3]).unwrap();
///
/// let err = elementwise::divide(&a, &b, &mut dest).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
/// assert_eq!(dest.as_slice(), &[0, 0, 0]);
/// ```
pub fn divide<T: Element>(
    a: &Tensor<T>,
    b: &Tensor<T>,
    destination: &mut Tensor<T>,
) -> TensorResult<()> {
    apply(a, b, destination, BinaryOp::Divide)
}

/// `destination = a * scalar`
pub fn scalar_multiply<T: Element>(
    a: &Tensor<T>,
    scalar: T,
    destination: &mut Tensor<T>,
) -> TensorResult<()> {
    scalar_apply(a, scalar, destination, BinaryOp::Multiply)
}

/// Clamp every element of `source` into `[min, max]`, writing into `destination`
///
/// # Errors
///
/// - [`TensorError::InvalidArgument`] if `min > max`
/// - [`TensorError::ShapeMismatch`] if `source` and `destination` differ in shape
///
/// # Examples
///
/// ```
/// use toco_core::{elementwise, Tensor};
///
/// let source = Tensor::from_vec(vec![-5, 0, 3, 12], &[2, 2]).unwrap();
/// let mut dest = Tensor::<i32>::zeros(&[2, 2]).unwrap();
/// elementwise::clamp(&source, &mut dest, 0, 10).unwrap();
/// assert_eq!(dest.as_slice(), &[0, 0, 3, 10]);
/// ```
pub fn clamp<T: Element>(
    source: &Tensor<T>,
    destination: &mut Tensor<T>,
    min: T,
    max: T,
) -> TensorResult<()> {
    if min > max {
        return Err(TensorError::invalid_argument(
            "clamp",
            format!("lower bound {} exceeds upper bound {}", min, max),
        ));
    }
    check_compatible("clamp", source, destination)?;
    for (o, &x) in destination.data.iter_mut().zip(&source.data) {
        *o = if x < min {
            min
        } else if x > max {
            max
        } else {
            x
        };
    }
    Ok(())
}
