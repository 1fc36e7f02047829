use core::ops::Neg;

use crate::error::{Error, Result};
use crate::traits::Scalar;

use super::Matrix;

// Shape-checked arithmetic. Mismatched operands are a recoverable error, so
// these are methods returning `Result` rather than `Add`/`Sub`/`Mul` impls.

impl<T: Scalar> Matrix<T> {
    fn require_same_shape(&self, rhs: &Self, op: &'static str) -> Result<()> {
        if self.shape() == rhs.shape() {
            Ok(())
        } else {
            Err(Error::DimensionMismatch {
                op,
                left: self.shape(),
                right: rhs.shape(),
            })
        }
    }

    fn zip_with(&self, rhs: &Self, f: impl Fn(T, T) -> T) -> Self {
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Element-wise sum.
    ///
    /// ```
    /// use algebrix::RealMatrix;
    /// let a = RealMatrix::from_rows(&[[1.0, 2.0]]).unwrap();
    /// let b = RealMatrix::from_rows(&[[3.0, 4.0]]).unwrap();
    /// assert_eq!(a.try_add(&b).unwrap(), RealMatrix::from_rows(&[[4.0, 6.0]]).unwrap());
    /// assert!(a.try_add(&a.transpose()).is_err());
    /// ```
    pub fn try_add(&self, rhs: &Self) -> Result<Self> {
        self.require_same_shape(rhs, "add")?;
        self.zip_with(rhs, |a, b| a + b).finite("add")
    }

    /// Element-wise difference.
    pub fn try_sub(&self, rhs: &Self) -> Result<Self> {
        self.require_same_shape(rhs, "subtract")?;
        self.zip_with(rhs, |a, b| a - b).finite("subtract")
    }

    /// Matrix product `(M×N)·(N×P) → (M×P)`.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] when `self.ncols() != rhs.nrows()`.
    pub fn try_mul(&self, rhs: &Self) -> Result<Self> {
        if self.ncols != rhs.nrows {
            return Err(Error::DimensionMismatch {
                op: "multiply",
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        self.mul_unchecked(rhs).finite("multiply")
    }

    /// i-k-j loop order over row-major storage; inner dimension already checked.
    pub(crate) fn mul_unchecked(&self, rhs: &Self) -> Self {
        let m = self.nrows;
        let n = self.ncols;
        let p = rhs.ncols;
        let mut data = vec![T::zero(); m * p];
        for i in 0..m {
            for k in 0..n {
                let a_ik = self.data[i * n + k];
                for j in 0..p {
                    data[i * p + j] = data[i * p + j] + a_ik * rhs.data[k * p + j];
                }
            }
        }
        Matrix {
            data,
            nrows: m,
            ncols: p,
        }
    }

    /// `A / B = A·B⁻¹`.
    ///
    /// # Errors
    ///
    /// - [`Error::NotSquare`] when `rhs` is not square.
    /// - [`Error::DimensionMismatch`] when `self.ncols() != rhs.nrows()`.
    /// - [`Error::SingularMatrix`] when `rhs` has no inverse.
    pub fn try_div(&self, rhs: &Self) -> Result<Self> {
        rhs.require_square("divide")?;
        if self.ncols != rhs.nrows {
            return Err(Error::DimensionMismatch {
                op: "divide",
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        self.try_mul(&rhs.inverse()?)
    }

    /// Multiply every element by `k`.
    ///
    /// ```
    /// use algebrix::{Complex, ComplexMatrix};
    ///
    /// let m = ComplexMatrix::identity(2).unwrap().scale(Complex::I).unwrap();
    /// assert_eq!(m[(1, 1)], Complex::I);
    /// assert_eq!(m[(0, 1)], Complex::ZERO);
    /// ```
    pub fn scale(&self, k: T) -> Result<Self> {
        self.map(|x| x * k).finite("scale")
    }
}

impl<T: Scalar> Neg for Matrix<T> {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

impl<T: Scalar> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.map(|x| -x)
    }
}
