//! Inverse trigonometric functions via logarithmic identities.
//!
//! All results are principal values. `arcsec` and `arccsc` are restricted to
//! arguments outside the real interval `(-1, 1)`; `arctan` and `arccot` have
//! poles at `±i`.

use core::f64::consts::FRAC_PI_2;

use crate::complex::Complex;
use crate::error::{Error, Result};

use super::trig::to_degrees;
use super::{ln, sqrt};

/// `sqrt(1 - z)·sqrt(1 + z)`: the branch of `sqrt(1 - z²)` used by
/// `arcsin`/`arccos`, formed without squaring `z`.
fn cosine_leg(z: Complex) -> Result<Complex> {
    Ok(sqrt(1.0 - z)? * sqrt(1.0 + z)?)
}

/// `ln a` for a reciprocal pair `a·b = 1`.
///
/// The smaller of the two is the result of a cancellation, so the logarithm
/// is taken of the larger one and negated when that is `b`. `b` on the
/// negative real axis keeps `ln a`, because `-ln b` would land on `-π`.
fn ln_of_pair(a: Complex, b: Complex) -> Result<Complex> {
    let b_on_cut = b.im() == 0.0 && b.re() < 0.0;
    if a.modulus() >= b.modulus() || b_on_cut {
        ln(a)
    } else {
        Ok(-ln(b)?)
    }
}

/// `arcsin z = -i · ln(iz + sqrt(1 - z²))`.
///
/// `(iz + w)(w - iz) = 1` with `w = sqrt(1 - z²)`, so the logarithm is taken
/// of whichever factor is larger and stays accurate for large `|z|`.
///
/// ```
/// use algebrix::Complex;
/// use algebrix::transcendental::arcsin;
/// use core::f64::consts::FRAC_PI_2;
///
/// assert_eq!(arcsin(Complex::ONE).unwrap(), Complex::from_real(FRAC_PI_2).unwrap());
/// ```
pub fn arcsin(z: Complex) -> Result<Complex> {
    let w = cosine_leg(z)?;
    let iz = z * Complex::I;
    let l = ln_of_pair(iz + w, w - iz)?;
    (l * Complex::NEG_I).finite("arcsin")
}

/// `arccos z = -i · ln(z + i·sqrt(1 - z²))`.
///
/// Evaluated through the larger of `z ± i·sqrt(1 - z²)`, whose product is 1.
///
/// ```
/// use algebrix::Complex;
/// use algebrix::transcendental::arccos;
///
/// // arccos x = i·acosh x for real x > 1
/// let z = arccos(Complex::from_real(1e8).unwrap()).unwrap();
/// assert_eq!(z, Complex::from_imag(1e8_f64.acosh()).unwrap());
/// ```
pub fn arccos(z: Complex) -> Result<Complex> {
    let iw = cosine_leg(z)? * Complex::I;
    let l = ln_of_pair(z + iw, z - iw)?;
    (l * Complex::NEG_I).finite("arccos")
}

/// `arctan z = (ln(1 + iz) - ln(1 - iz)) / 2i`.
///
/// # Errors
///
/// [`Error::InverseTrigPole`] at `z = ±i`.
pub fn arctan(z: Complex) -> Result<Complex> {
    arctan_named(z, "arctan")
}

fn arctan_named(z: Complex, function: &'static str) -> Result<Complex> {
    let iz = z * Complex::I;
    let plus = Complex::ONE + iz;
    let minus = Complex::ONE - iz;
    if plus.is_zero() || minus.is_zero() {
        return Err(Error::InverseTrigPole { function });
    }
    (ln(plus)? - ln(minus)?).checked_div_imag(2.0)
}

/// `arccot z = π/2 - arctan z`, so `arccot 0 = π/2`.
pub fn arccot(z: Complex) -> Result<Complex> {
    Ok(FRAC_PI_2 - arctan_named(z, "arccot")?)
}

/// Zero or a real value strictly inside `(-1, 1)`.
fn inside_unit_interval(z: Complex) -> bool {
    z.is_real() && z.re().abs() < 1.0
}

/// `arcsec z = arccos(1/z)`.
///
/// # Errors
///
/// [`Error::InverseTrigDomain`] for zero or real `|z| < 1`.
pub fn arcsec(z: Complex) -> Result<Complex> {
    if inside_unit_interval(z) {
        return Err(Error::InverseTrigDomain { function: "arcsec" });
    }
    arccos(z.reciprocal()?)
}

/// `arccsc z = arcsin(1/z)`.
///
/// # Errors
///
/// [`Error::InverseTrigDomain`] for zero or real `|z| < 1`.
pub fn arccsc(z: Complex) -> Result<Complex> {
    if inside_unit_interval(z) {
        return Err(Error::InverseTrigDomain { function: "arccsc" });
    }
    arcsin(z.reciprocal()?)
}

// ── Degree-valued variants ───────────────────────────────────────────

/// [`arcsin`] in degrees.
pub fn arcsin_deg(z: Complex) -> Result<Complex> {
    arcsin(z).map(to_degrees)
}

/// [`arccos`] in degrees.
pub fn arccos_deg(z: Complex) -> Result<Complex> {
    arccos(z).map(to_degrees)
}

/// [`arctan`] in degrees.
///
/// ```
/// use algebrix::Complex;
/// use algebrix::transcendental::arctan_deg;
///
/// assert_eq!(arctan_deg(Complex::ONE).unwrap(), Complex::from_real(45.0).unwrap());
/// ```
pub fn arctan_deg(z: Complex) -> Result<Complex> {
    arctan(z).map(to_degrees)
}

/// [`arcsec`] in degrees.
pub fn arcsec_deg(z: Complex) -> Result<Complex> {
    arcsec(z).map(to_degrees)
}

/// [`arccsc`] in degrees.
pub fn arccsc_deg(z: Complex) -> Result<Complex> {
    arccsc(z).map(to_degrees)
}

/// [`arccot`] in degrees.
pub fn arccot_deg(z: Complex) -> Result<Complex> {
    arccot(z).map(to_degrees)
}
