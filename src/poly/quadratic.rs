use tracing::trace;

use crate::complex::Complex;
use crate::error::{Error, Result};
use crate::transcendental::sqrt;

/// Roots of `a·x² + b·x + c = 0` by the quadratic formula.
///
/// Returns `[(-b + √D) / 2a, (-b - √D) / 2a]` with `D = b² - 4ac` and the
/// principal square root. Of `-b ± √D`, only the larger in modulus is divided
/// by `2a`; the other root is `2c / (-b ∓ √D)`, which is the same value
/// without the cancellation.
///
/// # Errors
///
/// [`Error::ZeroLeadingCoefficient`] when `a` is zero.
///
/// # Example
///
/// ```
/// use algebrix::Complex;
/// use algebrix::poly::solve_quadratic;
///
/// // x² + 1 = 0
/// let [r1, r2] = solve_quadratic(Complex::ONE, Complex::ZERO, Complex::ONE).unwrap();
/// assert_eq!(r1, Complex::I);
/// assert_eq!(r2, Complex::NEG_I);
/// ```
pub fn solve_quadratic(a: Complex, b: Complex, c: Complex) -> Result<[Complex; 2]> {
    if a.is_zero() {
        return Err(Error::ZeroLeadingCoefficient);
    }
    let disc = quadratic_discriminant(a, b, c).finite("quadratic discriminant")?;
    let root = sqrt(disc)?;
    let two_a = a * 2.0;
    trace!(?disc, "quadratic: solving");
    let plus = root - b;
    let minus = -b - root;
    if plus.is_zero() && minus.is_zero() {
        return Ok([plus.checked_div(two_a)?, minus.checked_div(two_a)?]);
    }
    let two_c = c * 2.0;
    if plus.modulus() >= minus.modulus() {
        Ok([plus.checked_div(two_a)?, two_c.checked_div(plus)?])
    } else {
        Ok([two_c.checked_div(minus)?, minus.checked_div(two_a)?])
    }
}

#[inline]
fn quadratic_discriminant(a: Complex, b: Complex, c: Complex) -> Complex {
    b * b - a * c * 4.0
}

/// A quadratic equation `a·x² + b·x + c = 0` together with its two roots.
///
/// Coefficients and roots are always consistent: an instance is built either
/// from coefficients (roots solved) or from roots (coefficients expanded by
/// Vieta's formulas).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Quadratic {
    coefficients: [Complex; 3],
    roots: [Complex; 2],
}

impl Quadratic {
    /// Solve `a·x² + b·x + c = 0`.
    pub fn from_coefficients(a: Complex, b: Complex, c: Complex) -> Result<Self> {
        let roots = solve_quadratic(a, b, c)?;
        Ok(Self {
            coefficients: [a, b, c],
            roots,
        })
    }

    /// Solve a quadratic with real coefficients.
    pub fn from_real_coefficients(a: f64, b: f64, c: f64) -> Result<Self> {
        Self::from_coefficients(
            Complex::from_real(a)?,
            Complex::from_real(b)?,
            Complex::from_real(c)?,
        )
    }

    /// Monic quadratic `(x - r1)(x - r2)`.
    pub fn from_roots(r1: Complex, r2: Complex) -> Result<Self> {
        Self::from_roots_scaled(Complex::ONE, r1, r2)
    }

    /// `a·(x - r1)(x - r2)`.
    ///
    /// ```
    /// use algebrix::{Complex, Quadratic};
    ///
    /// let two = Complex::from_real(2.0).unwrap();
    /// let q = Quadratic::from_roots_scaled(two, Complex::ONE, Complex::NEG_ONE).unwrap();
    /// // 2x² - 2
    /// let [a, b, c] = q.coefficients();
    /// assert_eq!((a, b, c), (two, Complex::ZERO, -two));
    /// ```
    pub fn from_roots_scaled(a: Complex, r1: Complex, r2: Complex) -> Result<Self> {
        if a.is_zero() {
            return Err(Error::ZeroLeadingCoefficient);
        }
        let b = (-a * (r1 + r2)).finite("quadratic expansion")?;
        let c = (a * r1 * r2).finite("quadratic expansion")?;
        Ok(Self {
            coefficients: [a, b, c],
            roots: [r1, r2],
        })
    }

    /// `[a, b, c]`.
    pub fn coefficients(&self) -> [Complex; 3] {
        self.coefficients
    }

    /// Both roots. From coefficients, `+√D` comes first.
    pub fn roots(&self) -> [Complex; 2] {
        self.roots
    }

    /// Leading coefficient `a`.
    pub fn leading(&self) -> Complex {
        self.coefficients[0]
    }

    /// `D = b² - 4ac`.
    pub fn discriminant(&self) -> Complex {
        let [a, b, c] = self.coefficients;
        quadratic_discriminant(a, b, c)
    }

    /// Value of the polynomial at `x` (Horner).
    pub fn evaluate(&self, x: Complex) -> Complex {
        let [a, b, c] = self.coefficients;
        (a * x + b) * x + c
    }
}
