//! Element-type aliases for [`Matrix`].

use crate::complex::Complex;

use super::Matrix;

/// Matrix with `f64` elements.
pub type RealMatrix = Matrix<f64>;

/// Matrix with [`Complex`] elements.
pub type ComplexMatrix = Matrix<Complex>;
