//! # algebrix
//!
//! Complex-number algebra, the elementary complex transcendental functions,
//! closed-form quadratic and cubic solvers, and dense real/complex matrices.
//!
//! ## Quick start
//!
//! ```
//! use algebrix::{transcendental, Complex, Cubic, RealMatrix};
//!
//! // i^2 = -1
//! assert_eq!(Complex::I * Complex::I, Complex::NEG_ONE);
//!
//! // e^(i*pi) = -1
//! let z = transcendental::expi(std::f64::consts::PI).unwrap();
//! assert_eq!(z, Complex::NEG_ONE);
//!
//! // Roots of x^3 - 1
//! let cubic = Cubic::from_real_coefficients(1.0, 0.0, 0.0, -1.0).unwrap();
//! assert!(cubic.roots().contains(&Complex::ONE));
//!
//! // Inverse of a 2x2 matrix
//! let a = RealMatrix::from_rows(&[[4.0, 7.0], [2.0, 6.0]]).unwrap();
//! let inv = a.inverse().unwrap();
//! assert!(a.try_mul(&inv).unwrap().try_sub(&RealMatrix::identity(2).unwrap()).unwrap().is_zero());
//! ```
//!
//! ## Modules
//!
//! - [`complex`]: the [`Complex`] value type. Components are always finite,
//!   equality is approximate (componentwise within [`EPSILON`]). Operators
//!   are infallible; `checked_*` methods report division by zero and
//!   overflow. [`Imag`] wraps a purely imaginary `f64` for mixed arithmetic.
//!
//! - [`transcendental`]: `exp`, `ln`, `log`, powers and roots, the six
//!   trigonometric functions and their inverses, all on the principal branch.
//!   Every function returns [`Result`].
//!
//! - [`poly`]: [`Quadratic`] and [`Cubic`] solvers. Both construct from
//!   coefficients (solving for roots) or from roots (expanding coefficients).
//!
//! - [`matrix`]: heap-allocated [`Matrix<T>`] with runtime dimensions and
//!   row-major storage. [`RealMatrix`] and [`ComplexMatrix`] share one
//!   implementation: arithmetic, determinant, cofactor, adjugate, inverse,
//!   and integer powers.
//!
//! - [`traits`]: [`Scalar`], the element trait implemented for `f64` and
//!   [`Complex`].
//!
//! - [`error`]: the crate-wide [`Error`] enum and its coarse [`ErrorKind`].
//!
//! ## Diagnostics
//!
//! The solvers and eliminations emit [`tracing`](https://docs.rs/tracing)
//! events at `trace`/`debug` level (branch taken, pivot swaps, singular
//! columns). Install any subscriber to see them; nothing is printed otherwise.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no      | `Serialize`/`Deserialize` for `Complex`, `Serialize` for matrices, polynomials and `ErrorKind` |

pub mod complex;
pub mod error;
pub mod matrix;
pub mod poly;
pub mod traits;
pub mod transcendental;

pub use complex::{Complex, Imag, EPSILON};
pub use error::{Error, ErrorKind, Result};
pub use matrix::{ComplexMatrix, Matrix, RealMatrix};
pub use poly::{Cubic, Quadratic};
pub use traits::Scalar;
