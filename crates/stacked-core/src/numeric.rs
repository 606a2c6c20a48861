//! Numeric trait for values and weights
//!
//! Values and weights may be integers or floats. Every computation happens in
//! the associated [`Numeric::Float`] type, so `i32` values pair naturally with
//! `f64` weights.

use num_traits::{Float, NumCast};
use std::fmt::Debug;

/// Element type accepted as a value or a weight
///
/// `i64` and `u64` convert to `f64`, which holds integers exactly only up to
/// 2^53. Larger magnitudes are rounded to the nearest `f64`, so a quantile of
/// such values is the rounded input rather than the input itself.
pub trait Numeric: Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// Floating-point type used for sums, targets and averaged results
    type Float: Float + NumCast + Debug + Send + Sync + 'static;

    /// Convert to the floating-point computation type
    ///
    /// Lossy for 64-bit integers beyond 2^53.
    fn to_float(self) -> Self::Float;

    /// Check if value is finite (always true for integers)
    fn is_finite(&self) -> bool;

    /// Exactly zero (`-0.0` included)
    fn is_zero(&self) -> bool;

    /// Strictly below zero
    fn is_negative(&self) -> bool;
}

macro_rules! impl_numeric_float {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                type Float = $t;

                #[inline]
                fn to_float(self) -> Self::Float {
                    self
                }

                #[inline]
                fn is_finite(&self) -> bool {
                    <$t>::is_finite(*self)
                }

                #[inline]
                fn is_zero(&self) -> bool {
                    *self == 0.0
                }

                #[inline]
                fn is_negative(&self) -> bool {
                    *self < 0.0
                }
            }
        )*
    };
}

macro_rules! impl_numeric_signed {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                type Float = f64;

                #[inline]
                fn to_float(self) -> Self::Float {
                    self as f64
                }

                #[inline]
                fn is_finite(&self) -> bool {
                    true
                }

                #[inline]
                fn is_zero(&self) -> bool {
                    *self == 0
                }

                #[inline]
                fn is_negative(&self) -> bool {
                    *self < 0
                }
            }
        )*
    };
}

macro_rules! impl_numeric_unsigned {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                type Float = f64;

                #[inline]
                fn to_float(self) -> Self::Float {
                    self as f64
                }

                #[inline]
                fn is_finite(&self) -> bool {
                    true
                }

                #[inline]
                fn is_zero(&self) -> bool {
                    *self == 0
                }

                #[inline]
                fn is_negative(&self) -> bool {
                    false
                }
            }
        )*
    };
}

impl_numeric_float!(f32, f64);
impl_numeric_signed!(i32, i64);
impl_numeric_unsigned!(u32, u64);
