//! Numeric element types supported by [`Tensor`](crate::Tensor).
//!
//! TO-Core works over a closed set of element types: `i32`, `f32` and `f64`.
//! Operations are generic over [`Element`] and monomorphize per type, so there is
//! no runtime dispatch on the element type.
//!
//! Integer arithmetic wraps on overflow. Floating-point arithmetic follows IEEE-754
//! in the element's own precision.

use scirs2_core::numeric::{Num, NumCast};
use std::fmt;

/// Tag identifying the element type of a tensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementKind {
    /// 32-bit signed integer
    Integer,
    /// 32-bit float
    Float,
    /// 64-bit float
    Double,
}

impl ElementKind {
    /// Whether arithmetic on this kind is integer arithmetic
    pub fn is_integer(self) -> bool {
        matches!(self, ElementKind::Integer)
    }

    /// Short lowercase name
    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Integer => "int32",
            ElementKind::Float => "float32",
            ElementKind::Double => "float64",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A numeric type that can be stored in a [`Tensor`](crate::Tensor)
///
/// # Examples
///
/// ```
/// use toco_core::{Element, ElementKind};
///
/// assert_eq!(<i32 as Element>::KIND, ElementKind::Integer);
/// assert_eq!(Element::wrapping_add(i32::MAX, 1), i32::MIN);
/// assert_eq!(7i32.checked_quotient(0), None);
/// assert!(7.0f64.checked_quotient(0.0).unwrap().is_infinite());
/// ```
pub trait Element:
    Copy + Num + NumCast + PartialOrd + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Runtime tag for this type
    const KIND: ElementKind;

    /// Addition, wrapping on integer overflow
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Subtraction, wrapping on integer overflow
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Multiplication, wrapping on integer overflow
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// Division. `None` only for integer division by zero; integer division
    /// truncates toward zero, float division may yield infinity or NaN.
    fn checked_quotient(self, rhs: Self) -> Option<Self>;

    /// Absolute difference `|self - rhs|`
    fn distance(self, rhs: Self) -> Self;

    /// Widen to `f64`
    fn as_f64(self) -> f64;

    /// Narrow from `f64`; integers truncate toward zero and saturate, NaN becomes 0
    fn from_f64_truncated(value: f64) -> Self;
}

impl Element for i32 {
    const KIND: ElementKind = ElementKind::Integer;

    #[inline]
    fn wrapping_add(self, rhs: Self) -> Self {
        i32::wrapping_add(self, rhs)
    }

    #[inline]
    fn wrapping_sub(self, rhs: Self) -> Self {
        i32::wrapping_sub(self, rhs)
    }

    #[inline]
    fn wrapping_mul(self, rhs: Self) -> Self {
        i32::wrapping_mul(self, rhs)
    }

    #[inline]
    fn checked_quotient(self, rhs: Self) -> Option<Self> {
        if rhs == 0 {
            None
        } else {
            Some(self.wrapping_div(rhs))
        }
    }

    #[inline]
    fn distance(self, rhs: Self) -> Self {
        i32::wrapping_sub(self, rhs).wrapping_abs()
    }

    #[inline]
    fn as_f64(self) -> f64 {
        <f64 as From<i32>>::from(self)
    }

    #[inline]
    fn from_f64_truncated(value: f64) -> Self {
        value as i32
    }
}

macro_rules! impl_float_element {
    ($ty:ty, $kind:expr) => {
        impl Element for $ty {
            const KIND: ElementKind = $kind;

            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline]
            fn wrapping_sub(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline]
            fn wrapping_mul(self, rhs: Self) -> Self {
                self * rhs
            }

            #[inline]
            fn checked_quotient(self, rhs: Self) -> Option<Self> {
                Some(self / rhs)
            }

            #[inline]
            fn distance(self, rhs: Self) -> Self {
                (self - rhs).abs()
            }

            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64_truncated(value: f64) -> Self {
                value as $ty
            }
        }
    };
}

impl_float_element!(f32, ElementKind::Float);
impl_float_element!(f64, ElementKind::Double);
