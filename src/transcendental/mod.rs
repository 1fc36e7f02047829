//! Elementary transcendental functions on [`Complex`](crate::Complex).
//!
//! Everything is built from complex arithmetic and Euler's formula. Every
//! function returns [`Result`](crate::Result): arguments outside a function's
//! domain are reported as errors and never as NaN or infinity.
//!
//! # Functions
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`exp`], [`expi`] | `e^z`, `e^{iθ}` |
//! | [`ln`], [`ln_real`], [`ln_imag`] | Principal natural log, with real / imaginary fast paths |
//! | [`ln_modulus`], [`log10`], [`log`], [`log_real_base`] | Other logarithms |
//! | [`pow`], [`powf`], [`powi`] | Complex, real and integer exponents |
//! | [`sqrt`], [`cbrt`], [`nth_root`], [`nth_root_complex`] | Principal roots |
//! | [`all_nth_roots`], [`sqrt_all`], [`cbrt_all`] | Every root, ordered by branch index |
//! | [`sin`], [`cos`], [`tan`], [`sec`], [`csc`], [`cot`] | Trigonometric |
//! | [`arcsin`], [`arccos`], [`arctan`], [`arcsec`], [`arccsc`], [`arccot`] | Inverse trigonometric |
//! | `*_deg` | Degree-valued counterparts of each (inverse) trigonometric function |
//! | [`to_degrees`], [`to_radians`] | Component-wise angle conversion |
//!
//! # Branches
//!
//! - [`ln`] returns imaginary part in `(-π, π]`.
//! - Roots use `θ = arg z ∈ (-π, π]`; [`all_nth_roots`] orders them by `k`.
//! - `0^w = 0` for `w ≠ 0`, and `0^0` is an error.
//!
//! # Example
//!
//! ```
//! use algebrix::Complex;
//! use algebrix::transcendental::{exp, ln, sqrt};
//!
//! let z = Complex::new(-3.0, 4.0).unwrap();
//! assert_eq!(exp(ln(z).unwrap()).unwrap(), z);
//! assert_eq!(sqrt(z).unwrap(), Complex::new(1.0, 2.0).unwrap());
//! ```

mod exp_log;
mod inverse_trig;
mod power;
mod trig;

#[cfg(test)]
mod tests;

pub use exp_log::{exp, expi, ln, ln_imag, ln_modulus, ln_real, log, log10, log_real_base};
pub use inverse_trig::{
    arccos, arccos_deg, arccot, arccot_deg, arccsc, arccsc_deg, arcsec, arcsec_deg, arcsin,
    arcsin_deg, arctan, arctan_deg,
};
pub use power::{
    all_nth_roots, cbrt, cbrt_all, nth_root, nth_root_complex, pow, powf, powi, sqrt, sqrt_all,
};
pub use trig::{
    cos, cos_deg, cot, cot_deg, csc, csc_deg, sec, sec_deg, sin, sin_deg, tan, tan_deg,
    to_degrees, to_radians,
};
