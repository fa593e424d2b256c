//! Scalar arithmetic primitives: the [`Numeric`] and [`Integral`] traits.
//!
//! The whole numeric mesh layer is written against these few operations.
//! Each scalar type supplies them exactly once, through the macros at the
//! bottom of this module.
//!
//! # Numeric contract
//!
//! - [`Numeric::from_f64`] follows Rust `as` semantics: truncation toward
//!   zero, saturation at the type bounds, and `NaN` mapping to zero.
//! - Integer `sum`, `difference`, and `product` wrap on overflow.
//! - [`Numeric::to_f64`] is the promotion every scaling operation goes
//!   through, so `i64` values above 2^53 lose precision when scaled.

use num_traits::AsPrimitive;
use std::fmt;

/// A scalar element type with the four arithmetic primitives.
pub trait Numeric:
    Copy + PartialEq + PartialOrd + Default + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// The additive identity.
    fn zero() -> Self;

    /// Convert from `f64` with `as` semantics.
    fn from_f64(value: f64) -> Self;

    /// Convert from any primitive with `as` semantics.
    fn cast<N: AsPrimitive<Self>>(value: N) -> Self {
        value.as_()
    }

    /// Promote to `f64`.
    fn to_f64(self) -> f64;

    /// `self + other`, wrapping for integers.
    fn sum(self, other: Self) -> Self;

    /// `self - other`, wrapping for integers.
    fn difference(self, other: Self) -> Self;
}

/// The integer-only algebra: products, quotients, and bitwise logic.
pub trait Integral: Numeric {
    /// `self * other`, wrapping.
    fn product(self, other: Self) -> Self;

    /// `self / other` truncated toward zero, or `None` for a zero divisor.
    ///
    /// `MIN / -1` wraps to `MIN`.
    fn ratio(self, other: Self) -> Option<Self>;

    /// Bitwise AND.
    fn bit_and(self, other: Self) -> Self;

    /// Bitwise OR.
    fn bit_or(self, other: Self) -> Self;

    /// Bitwise XOR.
    fn bit_xor(self, other: Self) -> Self;

    /// Bitwise NAND: `!(self & other)`.
    fn bit_nand(self, other: Self) -> Self;

    /// Bitwise complement.
    fn bit_not(self) -> Self;
}

macro_rules! impl_float_numeric {
    ($($t:ty),*) => {$(
        impl Numeric for $t {
            #[inline]
            fn zero() -> Self {
                0.0
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn sum(self, other: Self) -> Self {
                self + other
            }

            #[inline]
            fn difference(self, other: Self) -> Self {
                self - other
            }
        }
    )*};
}

macro_rules! impl_integral_numeric {
    ($($t:ty),*) => {$(
        impl Numeric for $t {
            #[inline]
            fn zero() -> Self {
                0
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn sum(self, other: Self) -> Self {
                self.wrapping_add(other)
            }

            #[inline]
            fn difference(self, other: Self) -> Self {
                self.wrapping_sub(other)
            }
        }

        impl Integral for $t {
            #[inline]
            fn product(self, other: Self) -> Self {
                self.wrapping_mul(other)
            }

            #[inline]
            fn ratio(self, other: Self) -> Option<Self> {
                if other == 0 {
                    None
                } else {
                    Some(self.wrapping_div(other))
                }
            }

            #[inline]
            fn bit_and(self, other: Self) -> Self {
                self & other
            }

            #[inline]
            fn bit_or(self, other: Self) -> Self {
                self | other
            }

            #[inline]
            fn bit_xor(self, other: Self) -> Self {
                self ^ other
            }

            #[inline]
            fn bit_nand(self, other: Self) -> Self {
                !(self & other)
            }

            #[inline]
            fn bit_not(self) -> Self {
                !self
            }
        }
    )*};
}

impl_float_numeric!(f64, f32);
impl_integral_numeric!(i64, i32, i16, i8);
