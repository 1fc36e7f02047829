//! Trigonometric functions via Euler's formula.

use core::f64::consts::PI;

use crate::complex::Complex;
use crate::error::{Error, Result};

use super::exp;

const DEG_PER_RAD: f64 = 180.0 / PI;
const RAD_PER_DEG: f64 = PI / 180.0;

/// `(e^{iz}, e^{-iz})`.
fn exp_pair(z: Complex) -> Result<(Complex, Complex)> {
    let iz = z * Complex::I;
    Ok((exp(iz)?, exp(-iz)?))
}

/// `sin z = (e^{iz} - e^{-iz}) / 2i`.
pub fn sin(z: Complex) -> Result<Complex> {
    let (a, b) = exp_pair(z)?;
    (a - b).checked_div_imag(2.0)
}

/// `cos z = (e^{iz} + e^{-iz}) / 2`.
pub fn cos(z: Complex) -> Result<Complex> {
    let (a, b) = exp_pair(z)?;
    Ok((a + b) * 0.5)
}

/// `tan z = sin z / cos z`.
///
/// # Errors
///
/// [`Error::UndefinedTrig`] where `cos z` is zero.
pub fn tan(z: Complex) -> Result<Complex> {
    let (a, b) = exp_pair(z)?;
    let den = (a + b) * Complex::I;
    if den.is_zero() {
        return Err(Error::UndefinedTrig {
            function: "tan",
            denominator: "cos",
        });
    }
    (a - b).checked_div(den)
}

/// `sec z = 1 / cos z`.
pub fn sec(z: Complex) -> Result<Complex> {
    let c = cos(z)?;
    if c.is_zero() {
        return Err(Error::UndefinedTrig {
            function: "sec",
            denominator: "cos",
        });
    }
    c.reciprocal()
}

/// `csc z = 1 / sin z`.
pub fn csc(z: Complex) -> Result<Complex> {
    let s = sin(z)?;
    if s.is_zero() {
        return Err(Error::UndefinedTrig {
            function: "csc",
            denominator: "sin",
        });
    }
    s.reciprocal()
}

/// `cot z = cos z / sin z`. Zero wherever `cos z` is.
///
/// # Errors
///
/// [`Error::UndefinedTrig`] where `tan z` is zero.
pub fn cot(z: Complex) -> Result<Complex> {
    let s = sin(z)?;
    if s.is_zero() {
        return Err(Error::UndefinedTrig {
            function: "cot",
            denominator: "tan",
        });
    }
    cos(z)?.checked_div(s)
}

// ── Angle units ──────────────────────────────────────────────────────

/// Component-wise radians → degrees.
pub fn to_degrees(z: Complex) -> Complex {
    z * DEG_PER_RAD
}

/// Component-wise degrees → radians.
pub fn to_radians(z: Complex) -> Complex {
    z * RAD_PER_DEG
}

/// [`sin`] of an angle in degrees.
///
/// ```
/// use algebrix::Complex;
/// use algebrix::transcendental::sin_deg;
///
/// let half = sin_deg(Complex::from_real(30.0).unwrap()).unwrap();
/// assert_eq!(half, Complex::from_real(0.5).unwrap());
/// ```
pub fn sin_deg(z: Complex) -> Result<Complex> {
    sin(to_radians(z))
}

/// [`cos`] of an angle in degrees.
pub fn cos_deg(z: Complex) -> Result<Complex> {
    cos(to_radians(z))
}

/// [`tan`] of an angle in degrees.
pub fn tan_deg(z: Complex) -> Result<Complex> {
    tan(to_radians(z))
}

/// [`sec`] of an angle in degrees.
pub fn sec_deg(z: Complex) -> Result<Complex> {
    sec(to_radians(z))
}

/// [`csc`] of an angle in degrees.
pub fn csc_deg(z: Complex) -> Result<Complex> {
    csc(to_radians(z))
}

/// [`cot`] of an angle in degrees.
pub fn cot_deg(z: Complex) -> Result<Complex> {
    cot(to_radians(z))
}
