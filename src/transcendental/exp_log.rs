//! Exponential and logarithms on the principal branch.

use core::f64::consts::{FRAC_PI_2, LN_10, PI};

use crate::complex::{Complex, EPSILON};
use crate::error::{Error, Result};

/// Complex exponential `e^re · (cos im + i sin im)`.
///
/// # Example
///
/// ```
/// use algebrix::Complex;
/// use algebrix::transcendental::exp;
/// use core::f64::consts::PI;
///
/// // Euler's identity
/// let z = exp(Complex::new(0.0, PI).unwrap()).unwrap();
/// assert_eq!(z, Complex::NEG_ONE);
/// ```
pub fn exp(z: Complex) -> Result<Complex> {
    let scale = z.re().exp();
    let (s, c) = z.im().sin_cos();
    Complex::raw(scale * c, scale * s).finite("exp")
}

/// `e^{iθ} = cos θ + i sin θ` for a real angle.
pub fn expi(theta: f64) -> Result<Complex> {
    Complex::from_polar(1.0, theta)
}

/// Principal natural logarithm `ln|z| + i·arg z`, imaginary part in `(-π, π]`.
///
/// Exactly real or exactly imaginary arguments take the [`ln_real`] /
/// [`ln_imag`] fast paths, which agree with the general formula.
///
/// # Errors
///
/// [`Error::LogOfZero`] when `z` is zero.
pub fn ln(z: Complex) -> Result<Complex> {
    if z.is_zero() {
        return Err(Error::LogOfZero);
    }
    if z.im() == 0.0 {
        return ln_real(z.re());
    }
    if z.re() == 0.0 {
        return ln_imag(z.im());
    }
    Ok(Complex::raw(z.modulus().ln(), z.arg()?))
}

/// Logarithm of a real number: `ln x` for `x > 0`, `ln|x| + iπ` for `x < 0`.
pub fn ln_real(x: f64) -> Result<Complex> {
    if !x.is_finite() {
        return Err(Error::NonFinite { re: x, im: 0.0 });
    }
    if x.abs() < EPSILON {
        return Err(Error::LogOfZero);
    }
    let im = if x < 0.0 { PI } else { 0.0 };
    Ok(Complex::raw(x.abs().ln(), im))
}

/// Logarithm of the imaginary number `y·i`: `ln|y| + i·sign(y)·π/2`.
pub fn ln_imag(y: f64) -> Result<Complex> {
    if !y.is_finite() {
        return Err(Error::NonFinite { re: 0.0, im: y });
    }
    if y.abs() < EPSILON {
        return Err(Error::LogOfZero);
    }
    Ok(Complex::raw(y.abs().ln(), y.signum() * FRAC_PI_2))
}

/// `ln|z|`, the real part of [`ln`].
pub fn ln_modulus(z: Complex) -> Result<f64> {
    if z.is_zero() {
        return Err(Error::LogOfZero);
    }
    Ok(z.modulus().ln())
}

/// Base-10 logarithm.
pub fn log10(z: Complex) -> Result<Complex> {
    Ok(ln(z)? * (1.0 / LN_10))
}

/// Logarithm of `z` in an arbitrary complex `base`: `ln z / ln base`.
///
/// Base `-1` is evaluated as `ln z / (iπ)`.
///
/// # Errors
///
/// - [`Error::LogBaseOne`] when `base == 1`.
/// - [`Error::LogOfZero`] when `z` or `base` is zero.
///
/// ```
/// use algebrix::{Complex, Error};
/// use algebrix::transcendental::log;
///
/// let eight = Complex::from_real(8.0).unwrap();
/// let two = Complex::from_real(2.0).unwrap();
/// assert_eq!(log(eight, two).unwrap(), Complex::from_real(3.0).unwrap());
/// assert_eq!(log(eight, Complex::ONE), Err(Error::LogBaseOne));
/// ```
pub fn log(z: Complex, base: Complex) -> Result<Complex> {
    if base == Complex::ONE {
        return Err(Error::LogBaseOne);
    }
    if base == Complex::NEG_ONE {
        return ln(z)?.checked_div_imag(PI);
    }
    ln(z)?.checked_div(ln(base)?)
}

/// [`log`] with a real base.
pub fn log_real_base(z: Complex, base: f64) -> Result<Complex> {
    log(z, Complex::from_real(base)?)
}
