use core::fmt::Debug;
use core::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};

use crate::complex::{Complex, EPSILON};
use crate::error::{Error, Result};

/// Trait for types that can be used as matrix elements.
///
/// Implemented for `f64` and [`Complex`]. Every kernel in [`crate::matrix`]
/// that needs division or a pivot comparison goes through this trait, so the
/// real and complex matrices share one implementation.
///
/// Division is exposed as [`Scalar::checked_div`] rather than `Div` because
/// [`Complex`] has no infallible division.
pub trait Scalar:
    Copy
    + PartialEq
    + Debug
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// Absolute value / modulus: `|z|` for complex, `.abs()` for real.
    fn modulus(self) -> f64;

    /// Both components finite.
    fn is_finite(self) -> bool;

    /// `self / rhs`, failing with [`Error::DivisionByZero`] when
    /// `rhs.modulus() < EPSILON`.
    fn checked_div(self, rhs: Self) -> Result<Self>;

    /// Multiply by a real factor.
    fn scale(self, k: f64) -> Self;

    /// Equal within [`EPSILON`]: `|a - b| < EPSILON` for reals, componentwise
    /// for complex values (the rule behind `Complex`'s `==`).
    fn approx_eq(self, other: Self) -> bool;

    /// Modulus below [`EPSILON`].
    #[inline]
    fn is_negligible(self) -> bool {
        self.modulus() < EPSILON
    }
}

impl Scalar for f64 {
    #[inline]
    fn modulus(self) -> f64 {
        self.abs()
    }

    #[inline]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }

    #[inline]
    fn checked_div(self, rhs: f64) -> Result<f64> {
        if rhs.abs() < EPSILON {
            return Err(Error::DivisionByZero);
        }
        Ok(self / rhs)
    }

    #[inline]
    fn scale(self, k: f64) -> f64 {
        self * k
    }

    #[inline]
    fn approx_eq(self, other: f64) -> bool {
        (self - other).abs() < EPSILON
    }
}

impl Scalar for Complex {
    #[inline]
    fn modulus(self) -> f64 {
        Complex::modulus(&self)
    }

    #[inline]
    fn is_finite(self) -> bool {
        self.re().is_finite() && self.im().is_finite()
    }

    #[inline]
    fn checked_div(self, rhs: Complex) -> Result<Complex> {
        Complex::checked_div(self, rhs)
    }

    #[inline]
    fn scale(self, k: f64) -> Complex {
        self * k
    }

    #[inline]
    fn approx_eq(self, other: Complex) -> bool {
        self == other
    }
}
