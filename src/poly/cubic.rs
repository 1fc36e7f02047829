use core::f64::consts::TAU;

use tracing::{error, trace};

use crate::complex::Complex;
use crate::error::{Error, Result};
use crate::transcendental::{arccos, cbrt, cos, sqrt};

/// Relative tolerance for the `v³ = V` check on the Cardano pair.
const PAIRING_TOL: f64 = 1e-8;

/// Coefficients `(p, q)` of the depressed cubic `t³ + p·t + q = 0` obtained
/// from `a·x³ + b·x² + c·x + d` by `x = t - b/3a`.
///
/// ```
/// use algebrix::Complex;
/// use algebrix::poly::depressed_cubic;
///
/// // (x - 1)(x - 2)(x - 3) = x³ - 6x² + 11x - 6  →  t³ - t
/// let r = |x: f64| Complex::from_real(x).unwrap();
/// let (p, q) = depressed_cubic(r(1.0), r(-6.0), r(11.0), r(-6.0)).unwrap();
/// assert_eq!(p, r(-1.0));
/// assert_eq!(q, Complex::ZERO);
/// ```
pub fn depressed_cubic(
    a: Complex,
    b: Complex,
    c: Complex,
    d: Complex,
) -> Result<(Complex, Complex)> {
    if a.is_zero() {
        return Err(Error::ZeroLeadingCoefficient);
    }
    let b = b.checked_div(a)?;
    let c = c.checked_div(a)?;
    let d = d.checked_div(a)?;
    let p = c - b * b * (1.0 / 3.0);
    let q = b * b * b * (2.0 / 27.0) - b * c * (1.0 / 3.0) + d;
    Ok((p.finite("depressed cubic")?, q.finite("depressed cubic")?))
}

/// Cardano discriminant `Δ = q²/4 + p³/27` of the depressed cubic.
pub fn cubic_discriminant(a: Complex, b: Complex, c: Complex, d: Complex) -> Result<Complex> {
    let (p, q) = depressed_cubic(a, b, c, d)?;
    cardano_discriminant(p, q)
}

fn cardano_discriminant(p: Complex, q: Complex) -> Result<Complex> {
    (q * q * 0.25 + p * p * p * (1.0 / 27.0)).finite("cubic discriminant")
}

/// Roots of `a·x³ + b·x² + c·x + d = 0`.
///
/// Three branches:
///
/// - `b = c = 0`: the three cube roots of `-d/a`, as `k, k·ω, k·ω²` with `k`
///   the principal cube root.
/// - `b = 0, c ≠ 0`: the trigonometric method on `t³ + p·t + q`,
///   `2s·cos((θ + 2πk)/3)` with `s = √(-p/3)` and
///   `θ = arccos(3q / (2p·s))`.
/// - otherwise Cardano's method; see below.
///
/// Cardano's auxiliary values `u, v` must satisfy both `u³ = -q/2 - √Δ`,
/// `v³ = -q/2 + √Δ` and `u·v = -p/3`. `u` is the principal cube root of its
/// radicand and `v = (-p/3)/u`, so the pair is always consistent and the
/// root order follows `u`'s place in [`all_nth_roots`] order. The cube root
/// is computed from whichever radicand has the larger modulus; when that is
/// `v`'s, the pair is rotated by a cube root of unity to put `u` back on the
/// principal branch. The roots are `u + v`, `ωu + ω²v`, `ω²u + ωv`, shifted
/// by `-b/3a`.
///
/// [`all_nth_roots`]: crate::transcendental::all_nth_roots
///
/// # Errors
///
/// - [`Error::ZeroLeadingCoefficient`] when `a` is zero.
/// - [`Error::NonFiniteResult`] when an intermediate overflows.
/// - [`Error::CardanoPairing`] if the computed pair fails its own check.
///
/// # Example
///
/// ```
/// use algebrix::Complex;
/// use algebrix::poly::solve_cubic;
///
/// // x³ - 1 = 0
/// let roots = solve_cubic(Complex::ONE, Complex::ZERO, Complex::ZERO, Complex::NEG_ONE).unwrap();
/// assert_eq!(roots, [Complex::ONE, Complex::OMEGA, Complex::OMEGA_SQR]);
/// ```
pub fn solve_cubic(a: Complex, b: Complex, c: Complex, d: Complex) -> Result<[Complex; 3]> {
    let (p, q) = depressed_cubic(a, b, c, d)?;

    if b.is_zero() && c.is_zero() {
        trace!("cubic: cube roots of -d/a");
        let k = cbrt((-d).checked_div(a)?)?;
        return Ok([k, k * Complex::OMEGA, k * Complex::OMEGA_SQR]);
    }

    if b.is_zero() {
        let s = sqrt(-p * (1.0 / 3.0))?;
        let den = p * s * 2.0;
        if !den.is_zero() {
            trace!(?p, ?q, "cubic: trigonometric method");
            return trigonometric(s, den, q);
        }
        trace!(?p, "cubic: trigonometric denominator negligible");
    }

    trace!(?p, ?q, "cubic: Cardano");
    let (u, v) = cardano_pair(p, q)?;
    let shift = b.checked_div(a * 3.0)?;
    let roots = [
        u + v - shift,
        Complex::OMEGA * u + Complex::OMEGA_SQR * v - shift,
        Complex::OMEGA_SQR * u + Complex::OMEGA * v - shift,
    ];
    for r in roots {
        r.finite("cubic roots")?;
    }
    Ok(roots)
}

/// Depressed-cubic roots `2s·cos((θ + 2πk)/3)`, `k = 0, 1, 2`.
///
/// `cos 3φ = 3q / (2p·s)` follows from substituting `t = 2s·cos φ` with
/// `s² = -p/3`. `den` is `2p·s`; dividing by `s` instead of multiplying by an
/// independent `√(-3/p)` keeps both factors on the same branch.
fn trigonometric(s: Complex, den: Complex, q: Complex) -> Result<[Complex; 3]> {
    let ratio = (q * 3.0).checked_div(den)?;
    let theta = arccos(ratio)?;
    let two_s = s * 2.0;
    let mut roots = [Complex::ZERO; 3];
    for (k, slot) in roots.iter_mut().enumerate() {
        let angle = (theta + TAU * k as f64) * (1.0 / 3.0);
        *slot = (two_s * cos(angle)?).finite("cubic roots")?;
    }
    Ok(roots)
}

/// Consistent Cardano pair `(u, v)` with `u·v = -p/3`.
fn cardano_pair(p: Complex, q: Complex) -> Result<(Complex, Complex)> {
    let delta = cardano_discriminant(p, q)?;
    let root_delta = sqrt(delta)?;
    let half_q = q * 0.5;
    let big_u = -half_q - root_delta;
    let big_v = -half_q + root_delta;
    let neg_p_third = -p * (1.0 / 3.0);

    let anchor_is_u = big_u.modulus() >= big_v.modulus();
    let (radicand, other) = if anchor_is_u {
        (big_u, big_v)
    } else {
        (big_v, big_u)
    };

    let anchor = cbrt(radicand)?;
    if anchor.is_zero() {
        // Both radicands vanish with p and q: triple root at -b/3a.
        trace!(?delta, "cubic: degenerate Cardano pair");
        return Ok((Complex::ZERO, Complex::ZERO));
    }
    let partner = neg_p_third.checked_div(anchor)?;

    let residual = (partner * partner * partner - other).modulus();
    let scale = 1.0 + big_u.modulus() + big_v.modulus();
    if residual > PAIRING_TOL * scale {
        error!(
            ?p,
            ?q,
            ?anchor,
            ?partner,
            residual,
            "cubic: Cardano pair does not reproduce its radicand"
        );
        return Err(Error::CardanoPairing);
    }

    let (u, v) = if anchor_is_u {
        (anchor, partner)
    } else {
        principal_rotation(partner, anchor, cbrt(big_u)?)
    };
    trace!(?u, ?v, anchor_is_u, "cubic: Cardano pair");
    Ok((u, v))
}

/// Rotate `(u, v)` to `(u·ωᵏ, v·ω⁻ᵏ)` with `u·ωᵏ` closest to `principal`.
///
/// `u·v` and the root set are unchanged; only their order moves.
fn principal_rotation(u: Complex, v: Complex, principal: Complex) -> (Complex, Complex) {
    let rotations = [
        (u, v),
        (u * Complex::OMEGA, v * Complex::OMEGA_SQR),
        (u * Complex::OMEGA_SQR, v * Complex::OMEGA),
    ];
    let mut best = rotations[0];
    let mut best_dist = (best.0 - principal).modulus();
    for pair in &rotations[1..] {
        let dist = (pair.0 - principal).modulus();
        if dist < best_dist {
            best = *pair;
            best_dist = dist;
        }
    }
    best
}

/// A cubic equation `a·x³ + b·x² + c·x + d = 0` together with its three roots.
///
/// Like [`Quadratic`](super::Quadratic), an instance is built either from
/// coefficients or from roots and the two views are always consistent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Cubic {
    coefficients: [Complex; 4],
    roots: [Complex; 3],
}

impl Cubic {
    /// Solve `a·x³ + b·x² + c·x + d = 0`.
    pub fn from_coefficients(a: Complex, b: Complex, c: Complex, d: Complex) -> Result<Self> {
        let roots = solve_cubic(a, b, c, d)?;
        Ok(Self {
            coefficients: [a, b, c, d],
            roots,
        })
    }

    /// Solve a cubic with real coefficients.
    pub fn from_real_coefficients(a: f64, b: f64, c: f64, d: f64) -> Result<Self> {
        Self::from_coefficients(
            Complex::from_real(a)?,
            Complex::from_real(b)?,
            Complex::from_real(c)?,
            Complex::from_real(d)?,
        )
    }

    /// Monic cubic `(x - r1)(x - r2)(x - r3)`.
    pub fn from_roots(r1: Complex, r2: Complex, r3: Complex) -> Result<Self> {
        Self::from_roots_scaled(Complex::ONE, r1, r2, r3)
    }

    /// `a·(x - r1)(x - r2)(x - r3)`, expanded with the elementary symmetric
    /// polynomials of the roots.
    pub fn from_roots_scaled(a: Complex, r1: Complex, r2: Complex, r3: Complex) -> Result<Self> {
        if a.is_zero() {
            return Err(Error::ZeroLeadingCoefficient);
        }
        let e1 = r1 + r2 + r3;
        let e2 = r1 * r2 + r1 * r3 + r2 * r3;
        let e3 = r1 * r2 * r3;
        let b = (-a * e1).finite("cubic expansion")?;
        let c = (a * e2).finite("cubic expansion")?;
        let d = (-a * e3).finite("cubic expansion")?;
        Ok(Self {
            coefficients: [a, b, c, d],
            roots: [r1, r2, r3],
        })
    }

    /// `[a, b, c, d]`.
    pub fn coefficients(&self) -> [Complex; 4] {
        self.coefficients
    }

    /// All three roots.
    pub fn roots(&self) -> [Complex; 3] {
        self.roots
    }

    /// Leading coefficient `a`.
    pub fn leading(&self) -> Complex {
        self.coefficients[0]
    }

    /// Depressed coefficients `(p, q)`.
    pub fn depressed(&self) -> Result<(Complex, Complex)> {
        let [a, b, c, d] = self.coefficients;
        depressed_cubic(a, b, c, d)
    }

    /// Cardano discriminant `Δ = q²/4 + p³/27`.
    pub fn discriminant(&self) -> Result<Complex> {
        let [a, b, c, d] = self.coefficients;
        cubic_discriminant(a, b, c, d)
    }

    /// Value of the polynomial at `x` (Horner).
    pub fn evaluate(&self, x: Complex) -> Complex {
        let [a, b, c, d] = self.coefficients;
        ((a * x + b) * x + c) * x + d
    }
}
