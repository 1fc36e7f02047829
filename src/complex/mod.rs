//! Complex number value type.
//!
//! [`Complex`] wraps [`num_complex::Complex64`] and adds the invariant that
//! both components are finite. Construction rejects NaN and infinity, so every
//! value that escapes a constructor is finite.
//!
//! # Approximate equality
//!
//! `==` compares both components with an absolute tolerance of [`EPSILON`].
//! This is deliberately *not* an equivalence relation: `a == b` and `b == c`
//! do not imply `a == c` when the differences accumulate past `EPSILON`.
//! For that reason `Complex` implements `PartialEq` but neither `Eq` nor
//! `Hash`. [`Complex::is_zero`], [`Complex::is_pure_real`] and
//! [`Complex::is_pure_imaginary`] use the same tolerance.
//!
//! ```
//! use algebrix::Complex;
//!
//! let z = Complex::new(3.0, 4.0).unwrap();
//! assert_eq!(z.modulus(), 5.0);
//! assert_eq!(z.conj(), Complex::new(3.0, -4.0).unwrap());
//! assert_eq!(z * z.reciprocal().unwrap(), Complex::ONE);
//!
//! assert!(Complex::new(f64::NAN, 0.0).is_err());
//! ```

mod ops;


use core::cmp::Ordering;
use core::f64::consts::PI;

use num_complex::Complex64;

use crate::error::{Error, Result};

/// Absolute tolerance used by equality and all zero tests.
pub const EPSILON: f64 = 1e-10;

/// √3 / 2.
const HALF_SQRT_3: f64 = 0.866_025_403_784_438_6;

/// A complex number `re + im·i` with finite components.
///
/// Addition, negation, conjugation, modulus, argument and polar construction
/// delegate to the wrapped [`Complex64`].
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "(f64, f64)", into = "(f64, f64)")
)]
pub struct Complex(Complex64);

/// A bare imaginary scalar `y·i`.
///
/// Tags an `f64` operand as imaginary for the mixed overloads, so that
/// `z + Imag(2.0)` adds to the imaginary part while `z + 2.0` adds to the
/// real part.
///
/// ```
/// use algebrix::{Complex, Imag};
///
/// let z = Complex::new(1.0, 1.0).unwrap();
/// assert_eq!(z + Imag(2.0), Complex::new(1.0, 3.0).unwrap());
/// assert_eq!(z * Imag(1.0), Complex::new(-1.0, 1.0).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Imag(pub f64);

// ── Constants ────────────────────────────────────────────────────────

impl Complex {
    /// `0 + 0i`.
    pub const ZERO: Complex = Complex::raw(0.0, 0.0);
    /// `1 + 0i`.
    pub const ONE: Complex = Complex::raw(1.0, 0.0);
    /// `-1 + 0i`.
    pub const NEG_ONE: Complex = Complex::raw(-1.0, 0.0);
    /// Imaginary unit `i`.
    pub const I: Complex = Complex::raw(0.0, 1.0);
    /// `-i`.
    pub const NEG_I: Complex = Complex::raw(0.0, -1.0);
    /// Primitive cube root of unity `ω = e^{2πi/3}`.
    pub const OMEGA: Complex = Complex::raw(-0.5, HALF_SQRT_3);
    /// `ω² = e^{4πi/3}`.
    pub const OMEGA_SQR: Complex = Complex::raw(-0.5, -HALF_SQRT_3);
}

// ── Constructors ─────────────────────────────────────────────────────

impl Complex {
    /// Construct without the finiteness check. Callers guarantee finite inputs.
    #[inline]
    pub(crate) const fn raw(re: f64, im: f64) -> Self {
        Self(Complex64::new(re, im))
    }

    /// Create `re + im·i`. Fails if either component is NaN or infinite.
    pub fn new(re: f64, im: f64) -> Result<Self> {
        if re.is_finite() && im.is_finite() {
            Ok(Self::raw(re, im))
        } else {
            Err(Error::NonFinite { re, im })
        }
    }

    /// Create the real number `re + 0i`.
    pub fn from_real(re: f64) -> Result<Self> {
        Self::new(re, 0.0)
    }

    /// Create the imaginary number `0 + im·i`.
    pub fn from_imag(im: f64) -> Result<Self> {
        Self::new(0.0, im)
    }

    /// Create `r·(cos θ + i sin θ)` from polar coordinates.
    ///
    /// ```
    /// use algebrix::Complex;
    /// use core::f64::consts::FRAC_PI_2;
    ///
    /// let z = Complex::from_polar(2.0, FRAC_PI_2).unwrap();
    /// assert_eq!(z, Complex::new(0.0, 2.0).unwrap());
    /// ```
    pub fn from_polar(r: f64, theta: f64) -> Result<Self> {
        if !(r.is_finite() && theta.is_finite()) {
            return Err(Error::NonFinite { re: r, im: theta });
        }
        Self::try_from(Complex64::from_polar(r, theta))
    }

    /// Replace both components in place.
    ///
    /// Intended for call sites that hold a `Complex` in a mutable slot; on
    /// error the value is left unchanged.
    pub fn set(&mut self, re: f64, im: f64) -> Result<()> {
        *self = Self::new(re, im)?;
        Ok(())
    }

    /// Re-validate a value produced by infallible arithmetic.
    #[inline]
    pub(crate) fn finite(self, op: &'static str) -> Result<Self> {
        if self.0.is_finite() {
            Ok(self)
        } else {
            Err(Error::NonFiniteResult { op })
        }
    }
}

// ── Accessors and predicates ─────────────────────────────────────────

impl Complex {
    /// Real part.
    #[inline]
    pub const fn re(&self) -> f64 {
        self.0.re
    }

    /// Imaginary part.
    #[inline]
    pub const fn im(&self) -> f64 {
        self.0.im
    }

    /// Both components within `EPSILON` of zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.re.abs() < EPSILON && self.0.im.abs() < EPSILON
    }

    /// Non-zero with a negligible imaginary part.
    #[inline]
    pub fn is_pure_real(&self) -> bool {
        !self.is_zero() && self.0.im.abs() < EPSILON
    }

    /// Non-zero with a negligible real part.
    #[inline]
    pub fn is_pure_imaginary(&self) -> bool {
        !self.is_zero() && self.0.re.abs() < EPSILON
    }

    /// Real axis membership including zero (`|im| < EPSILON`).
    #[inline]
    pub(crate) fn is_real(&self) -> bool {
        self.0.im.abs() < EPSILON
    }

    /// Compare by modulus.
    ///
    /// ```
    /// use algebrix::Complex;
    /// use core::cmp::Ordering;
    ///
    /// let a = Complex::new(3.0, 4.0).unwrap();
    /// let b = Complex::new(0.0, 6.0).unwrap();
    /// assert_eq!(a.cmp_modulus(&b), Ordering::Less);
    /// ```
    pub fn cmp_modulus(&self, other: &Complex) -> Ordering {
        self.modulus().total_cmp(&other.modulus())
    }
}

// ── Derived quantities ───────────────────────────────────────────────

impl Complex {
    /// Euclidean norm `|z|`.
    #[inline]
    pub fn modulus(&self) -> f64 {
        self.0.norm()
    }

    /// Squared modulus `re² + im²`.
    #[inline]
    pub fn modulus_squared(&self) -> f64 {
        self.0.norm_sqr()
    }

    /// Principal argument in `(-π, π]`. Fails for zero.
    pub fn arg(&self) -> Result<f64> {
        if self.is_zero() {
            return Err(Error::UndefinedAngle);
        }
        let theta = self.0.arg();
        // atan2(-0.0, x<0) yields -π; fold it onto the closed end of the range.
        Ok(if theta <= -PI { PI } else { theta })
    }

    /// Argument in `[0, 2π)`. Fails for zero.
    pub fn standard_arg(&self) -> Result<f64> {
        let theta = self.arg()?;
        Ok(if theta < 0.0 { theta + 2.0 * PI } else { theta })
    }

    /// Principal argument in degrees.
    pub fn arg_degrees(&self) -> Result<f64> {
        Ok(self.arg()?.to_degrees())
    }

    /// Standard argument in degrees, `[0, 360)`.
    pub fn standard_arg_degrees(&self) -> Result<f64> {
        Ok(self.standard_arg()?.to_degrees())
    }

    /// Complex conjugate `re - im·i`.
    #[inline]
    pub fn conj(&self) -> Self {
        Self(self.0.conj())
    }

    /// Multiplicative inverse `1 / z`. Fails for zero.
    pub fn reciprocal(&self) -> Result<Self> {
        Complex::ONE.checked_div(*self)
    }
}

// ── Equality ─────────────────────────────────────────────────────────

impl PartialEq for Complex {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        let d = self.0 - other.0;
        d.re.abs() < EPSILON && d.im.abs() < EPSILON
    }
}

impl PartialEq<f64> for Complex {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        (self.0.re - other).abs() < EPSILON && self.0.im.abs() < EPSILON
    }
}

// ── Conversions ──────────────────────────────────────────────────────

impl TryFrom<f64> for Complex {
    type Error = Error;

    fn try_from(re: f64) -> Result<Self> {
        Self::from_real(re)
    }
}

impl TryFrom<Imag> for Complex {
    type Error = Error;

    fn try_from(im: Imag) -> Result<Self> {
        Self::from_imag(im.0)
    }
}

impl TryFrom<(f64, f64)> for Complex {
    type Error = Error;

    fn try_from((re, im): (f64, f64)) -> Result<Self> {
        Self::new(re, im)
    }
}

impl From<Complex> for (f64, f64) {
    fn from(z: Complex) -> Self {
        (z.0.re, z.0.im)
    }
}

impl TryFrom<Complex64> for Complex {
    type Error = Error;

    fn try_from(z: Complex64) -> Result<Self> {
        Self::new(z.re, z.im)
    }
}

impl From<Complex> for Complex64 {
    fn from(z: Complex) -> Self {
        z.0
    }
}
