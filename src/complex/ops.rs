use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_complex::Complex64;
use num_traits::{One, Zero};

use super::{Complex, Imag};
use crate::error::{Error, Result};

// Operators are infallible: finite inputs stay finite unless a component
// overflows past f64::MAX. Division is the only arithmetic that can fail on
// ordinary inputs and is exposed as `checked_div*` instead of `Div`.

// ── Complex ∘ Complex ────────────────────────────────────────────────

impl Add for Complex {
    type Output = Complex;

    #[inline]
    fn add(self, rhs: Complex) -> Complex {
        Complex(self.0 + rhs.0)
    }
}

impl Sub for Complex {
    type Output = Complex;

    #[inline]
    fn sub(self, rhs: Complex) -> Complex {
        Complex(self.0 - rhs.0)
    }
}

/// `(a + bi)(c + di) = (ac - bd) + (ad + bc)i`, each component with one
/// fused multiply-add.
impl Mul for Complex {
    type Output = Complex;

    #[inline]
    fn mul(self, rhs: Complex) -> Complex {
        let (a, b) = (self.0.re, self.0.im);
        let (c, d) = (rhs.0.re, rhs.0.im);
        Complex::raw(a.mul_add(c, -(b * d)), a.mul_add(d, b * c))
    }
}

impl Neg for Complex {
    type Output = Complex;

    #[inline]
    fn neg(self) -> Complex {
        Complex(-self.0)
    }
}

impl AddAssign for Complex {
    #[inline]
    fn add_assign(&mut self, rhs: Complex) {
        *self = *self + rhs;
    }
}

impl SubAssign for Complex {
    #[inline]
    fn sub_assign(&mut self, rhs: Complex) {
        *self = *self - rhs;
    }
}

impl MulAssign for Complex {
    #[inline]
    fn mul_assign(&mut self, rhs: Complex) {
        *self = *self * rhs;
    }
}

// ── Complex ∘ real scalar ────────────────────────────────────────────

impl Add<f64> for Complex {
    type Output = Complex;

    #[inline]
    fn add(self, rhs: f64) -> Complex {
        Complex(self.0 + rhs)
    }
}

impl Sub<f64> for Complex {
    type Output = Complex;

    #[inline]
    fn sub(self, rhs: f64) -> Complex {
        Complex(self.0 - rhs)
    }
}

impl Mul<f64> for Complex {
    type Output = Complex;

    #[inline]
    fn mul(self, rhs: f64) -> Complex {
        Complex(self.0 * rhs)
    }
}

impl Add<Complex> for f64 {
    type Output = Complex;

    #[inline]
    fn add(self, rhs: Complex) -> Complex {
        rhs + self
    }
}

impl Sub<Complex> for f64 {
    type Output = Complex;

    #[inline]
    fn sub(self, rhs: Complex) -> Complex {
        Complex(self - rhs.0)
    }
}

impl Mul<Complex> for f64 {
    type Output = Complex;

    #[inline]
    fn mul(self, rhs: Complex) -> Complex {
        rhs * self
    }
}

// ── Complex ∘ imaginary scalar ───────────────────────────────────────

impl Add<Imag> for Complex {
    type Output = Complex;

    #[inline]
    fn add(self, rhs: Imag) -> Complex {
        Complex(self.0 + Complex64::new(0.0, rhs.0))
    }
}

impl Sub<Imag> for Complex {
    type Output = Complex;

    #[inline]
    fn sub(self, rhs: Imag) -> Complex {
        Complex(self.0 - Complex64::new(0.0, rhs.0))
    }
}

/// `(a + bi)(yi) = -by + ayi`
impl Mul<Imag> for Complex {
    type Output = Complex;

    #[inline]
    fn mul(self, rhs: Imag) -> Complex {
        Complex::raw(-self.0.im * rhs.0, self.0.re * rhs.0)
    }
}

impl Mul<Complex> for Imag {
    type Output = Complex;

    #[inline]
    fn mul(self, rhs: Complex) -> Complex {
        rhs * self
    }
}

// ── Division ─────────────────────────────────────────────────────────

impl Complex {
    /// `self / rhs`. Fails with `DivisionByZero` when `|rhs| < EPSILON`.
    ///
    /// Uses Smith's scaling so that `|rhs|²` is never formed explicitly.
    ///
    /// ```
    /// use algebrix::{Complex, Error};
    ///
    /// let z = Complex::new(1.0, 2.0).unwrap();
    /// let w = Complex::new(3.0, -1.0).unwrap();
    /// assert_eq!((z * w).checked_div(w).unwrap(), z);
    /// assert_eq!(z.checked_div(Complex::ZERO), Err(Error::DivisionByZero));
    /// ```
    pub fn checked_div(self, rhs: Complex) -> Result<Complex> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let (a, b, c, d) = (self.0.re, self.0.im, rhs.0.re, rhs.0.im);
        let q = if c.abs() >= d.abs() {
            let r = d / c;
            let den = r.mul_add(d, c);
            Complex::raw(b.mul_add(r, a) / den, (-a).mul_add(r, b) / den)
        } else {
            let r = c / d;
            let den = r.mul_add(c, d);
            Complex::raw(a.mul_add(r, b) / den, b.mul_add(r, -a) / den)
        };
        q.finite("division")
    }

    /// `self / x` for a real `x`. Fails when `|x| < EPSILON`.
    pub fn checked_div_real(self, x: f64) -> Result<Complex> {
        if x.abs() < crate::complex::EPSILON {
            return Err(Error::DivisionByZero);
        }
        Complex(self.0 / x).finite("division")
    }

    /// `self / (y·i)` for a real `y`. Fails when `|y| < EPSILON`.
    ///
    /// `(a + bi) / (yi) = b/y - (a/y)i`.
    pub fn checked_div_imag(self, y: f64) -> Result<Complex> {
        if y.abs() < crate::complex::EPSILON {
            return Err(Error::DivisionByZero);
        }
        Complex::raw(self.0.im / y, -self.0.re / y).finite("division")
    }

    /// `x / self` for a real numerator.
    pub fn checked_rdiv_real(self, x: f64) -> Result<Complex> {
        Complex::raw(x, 0.0).checked_div(self)
    }

    /// Fallible addition that rejects overflow.
    pub fn checked_add(self, rhs: Complex) -> Result<Complex> {
        (self + rhs).finite("addition")
    }

    /// Fallible subtraction that rejects overflow.
    pub fn checked_sub(self, rhs: Complex) -> Result<Complex> {
        (self - rhs).finite("subtraction")
    }

    /// Fallible multiplication that rejects overflow.
    pub fn checked_mul(self, rhs: Complex) -> Result<Complex> {
        (self * rhs).finite("multiplication")
    }
}

// ── num-traits identities and iterator folds ─────────────────────────

impl Zero for Complex {
    #[inline]
    fn zero() -> Self {
        Complex::ZERO
    }

    /// Tolerance-based, consistent with `==`.
    #[inline]
    fn is_zero(&self) -> bool {
        Complex::is_zero(self)
    }
}

impl One for Complex {
    #[inline]
    fn one() -> Self {
        Complex::ONE
    }
}

impl Sum for Complex {
    fn sum<I: Iterator<Item = Complex>>(iter: I) -> Complex {
        iter.fold(Complex::ZERO, |acc, z| acc + z)
    }
}

impl<'a> Sum<&'a Complex> for Complex {
    fn sum<I: Iterator<Item = &'a Complex>>(iter: I) -> Complex {
        iter.fold(Complex::ZERO, |acc, z| acc + *z)
    }
}

impl Product for Complex {
    fn product<I: Iterator<Item = Complex>>(iter: I) -> Complex {
        iter.fold(Complex::ONE, |acc, z| acc * z)
    }
}
