//! Powers and roots.

use core::f64::consts::TAU;

use crate::complex::Complex;
use crate::error::{Error, Result};

use super::{exp, ln};

/// Principal power `z^w = exp(w · ln z)`.
///
/// `0^w` is `0` for any non-zero `w`.
///
/// # Errors
///
/// [`Error::UndefinedPower`] for `0^0`.
///
/// ```
/// use algebrix::{Complex, Error};
/// use algebrix::transcendental::pow;
///
/// // i^i = e^{-π/2}
/// let r = pow(Complex::I, Complex::I).unwrap();
/// assert_eq!(r, Complex::from_real((-core::f64::consts::FRAC_PI_2).exp()).unwrap());
/// assert_eq!(pow(Complex::ZERO, Complex::ZERO), Err(Error::UndefinedPower));
/// ```
pub fn pow(z: Complex, w: Complex) -> Result<Complex> {
    if z.is_zero() {
        return if w.is_zero() {
            Err(Error::UndefinedPower)
        } else {
            Ok(Complex::ZERO)
        };
    }
    exp(w * ln(z)?)
}

/// [`pow`] with a real exponent.
pub fn powf(z: Complex, x: f64) -> Result<Complex> {
    pow(z, Complex::from_real(x)?)
}

/// Integer power by repeated squaring.
///
/// Negative exponents invert first, so `0^-n` fails with
/// [`Error::DivisionByZero`]. `0^0` fails with [`Error::UndefinedPower`].
pub fn powi(z: Complex, n: i32) -> Result<Complex> {
    if n == 0 {
        return if z.is_zero() {
            Err(Error::UndefinedPower)
        } else {
            Ok(Complex::ONE)
        };
    }
    let mut base = if n < 0 { z.reciprocal()? } else { z };
    let mut e = n.unsigned_abs();
    let mut acc = Complex::ONE;
    while e > 0 {
        if e & 1 == 1 {
            acc = acc.checked_mul(base)?;
        }
        e >>= 1;
        if e > 0 {
            base = base.checked_mul(base)?;
        }
    }
    Ok(acc)
}

/// The `k`-th of the `n` roots: `r^(1/n) · e^{i(θ + 2πk)/n}`.
fn root_k(z: Complex, n: u32, k: u32) -> Result<Complex> {
    if z.is_zero() {
        return Ok(Complex::ZERO);
    }
    let n = f64::from(n);
    let r = z.modulus().powf(1.0 / n);
    let theta = (z.arg()? + TAU * f64::from(k)) / n;
    Complex::from_polar(r, theta)
}

fn root_set<const N: usize>(z: Complex) -> Result<[Complex; N]> {
    let mut out = [Complex::ZERO; N];
    for (k, slot) in (0u32..).zip(out.iter_mut()) {
        *slot = root_k(z, N as u32, k)?;
    }
    Ok(out)
}

/// Principal square root.
pub fn sqrt(z: Complex) -> Result<Complex> {
    root_k(z, 2, 0)
}

/// Principal cube root. Note that for negative reals this is *not* the real
/// cube root: `cbrt(-8) = 1 + √3·i`.
pub fn cbrt(z: Complex) -> Result<Complex> {
    root_k(z, 3, 0)
}

/// Principal `n`-th root, identical to `all_nth_roots(z, n)[0]`.
pub fn nth_root(z: Complex, n: u32) -> Result<Complex> {
    if n == 0 {
        return Err(Error::ZeroRootIndex);
    }
    root_k(z, n, 0)
}

/// Principal root with a complex index, `z^(1/w)`.
pub fn nth_root_complex(z: Complex, w: Complex) -> Result<Complex> {
    if w.is_zero() {
        return Err(Error::ZeroRootIndex);
    }
    pow(z, w.reciprocal()?)
}

/// All `n` distinct `n`-th roots, ordered by increasing `k` in
/// `r^(1/n) · e^{i(θ + 2πk)/n}` with `θ = arg z ∈ (-π, π]`.
///
/// The order is stable; the cubic solver relies on element `0` being the
/// principal root. Zero yields `n` zeros.
///
/// ```
/// use algebrix::Complex;
/// use algebrix::transcendental::all_nth_roots;
///
/// let roots = all_nth_roots(Complex::ONE, 3).unwrap();
/// assert_eq!(roots, vec![Complex::ONE, Complex::OMEGA, Complex::OMEGA_SQR]);
/// ```
pub fn all_nth_roots(z: Complex, n: u32) -> Result<Vec<Complex>> {
    if n == 0 {
        return Err(Error::ZeroRootIndex);
    }
    (0..n).map(|k| root_k(z, n, k)).collect()
}

/// Both square roots, principal first.
pub fn sqrt_all(z: Complex) -> Result<[Complex; 2]> {
    root_set(z)
}

/// All three cube roots, principal first.
pub fn cbrt_all(z: Complex) -> Result<[Complex; 3]> {
    root_set(z)
}
