//! Closed-form quadratic and cubic equations over the complex field.
//!
//! | Item | Description |
//! |------|-------------|
//! | [`solve_quadratic`] | Roots of `ax² + bx + c` by the quadratic formula |
//! | [`solve_cubic`] | Roots of `ax³ + bx² + cx + d` (cube roots, trigonometric, Cardano) |
//! | [`depressed_cubic`], [`cubic_discriminant`] | `(p, q)` and `Δ = q²/4 + p³/27` |
//! | [`Quadratic`], [`Cubic`] | Equation values holding consistent coefficients and roots |
//!
//! An equation value is built either from coefficients, in which case the
//! roots are solved, or from roots, in which case the coefficients follow from
//! Vieta's formulas. The leading coefficient must be non-zero.
//!
//! # Example
//!
//! ```
//! use algebrix::{Complex, Cubic};
//!
//! let r = |x: f64| Complex::from_real(x).unwrap();
//! let cubic = Cubic::from_roots(r(1.0), r(1.0), r(1.0)).unwrap();
//! assert_eq!(cubic.coefficients(), [r(1.0), r(-3.0), r(3.0), r(-1.0)]);
//!
//! let solved = Cubic::from_coefficients(r(1.0), r(-3.0), r(3.0), r(-1.0)).unwrap();
//! assert_eq!(solved.roots(), [r(1.0); 3]);
//! ```

mod cubic;
mod quadratic;


pub use cubic::{cubic_discriminant, depressed_cubic, solve_cubic, Cubic};
pub use quadratic::{solve_quadratic, Quadratic};
