use crate::complex::Complex;
use crate::traits::Scalar;

use super::Matrix;

impl<T: Copy> Matrix<T> {
    /// Apply a function to every element, producing a new matrix.
    ///
    /// ```
    /// use algebrix::RealMatrix;
    /// let m = RealMatrix::from_rows(&[[1.0, 4.0], [9.0, 16.0]]).unwrap();
    /// let r = m.map(f64::sqrt);
    /// assert_eq!(r[(1, 1)], 4.0);
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Matrix<U> {
        Matrix {
            data: self.data.iter().map(|&x| f(x)).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Transpose (`nrows` and `ncols` swapped).
    ///
    /// ```
    /// use algebrix::RealMatrix;
    /// let a = RealMatrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    /// let t = a.transpose();
    /// assert_eq!(t.shape(), (3, 2));
    /// assert_eq!(t[(2, 1)], 6.0);
    /// ```
    pub fn transpose(&self) -> Self {
        Self::from_fn_unchecked(self.ncols, self.nrows, |i, j| self.data[j * self.ncols + i])
    }

    /// Copy out as a grid of rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows().map(<[T]>::to_vec).collect()
    }
}

impl<T> Matrix<T> {
    /// Swap two rows in place.
    ///
    /// Panics if either index is out of range.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        assert!(
            a < self.nrows && b < self.nrows,
            "row index out of range for {} rows",
            self.nrows
        );
        if a != b {
            let n = self.ncols;
            for j in 0..n {
                self.data.swap(a * n + j, b * n + j);
            }
        }
    }
}

impl<T: Scalar> Matrix<T> {
    /// Every element has modulus below `EPSILON`.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|x| x.is_negligible())
    }
}

impl Matrix<f64> {
    /// Promote to a complex matrix with zero imaginary parts.
    ///
    /// ```
    /// use algebrix::{Complex, RealMatrix};
    /// let m = RealMatrix::identity(2).unwrap().to_complex();
    /// assert_eq!(m[(0, 0)], Complex::ONE);
    /// ```
    pub fn to_complex(&self) -> Matrix<Complex> {
        // Elements are finite by construction.
        self.map(|x| Complex::raw(x, 0.0))
    }
}
