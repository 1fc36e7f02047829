use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::traits::Scalar;

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Sum of diagonal elements.
    ///
    /// ```
    /// use algebrix::RealMatrix;
    /// let m = RealMatrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(m.trace().unwrap(), 5.0);
    /// ```
    pub fn trace(&self) -> Result<T> {
        let n = self.require_square("trace")?;
        let mut sum = T::zero();
        for i in 0..n {
            sum = sum + self[(i, i)];
        }
        Ok(sum)
    }

    /// Row index in `col..n` holding the largest-modulus entry of column
    /// `col`. The first maximum wins.
    fn pivot_row(&self, col: usize) -> usize {
        let mut max_row = col;
        let mut max_val = self[(col, col)].modulus();
        for row in (col + 1)..self.nrows {
            let val = self[(row, col)].modulus();
            if val > max_val {
                max_val = val;
                max_row = row;
            }
        }
        max_row
    }

    /// Determinant via Gaussian elimination with partial pivoting.
    ///
    /// Returns exactly zero as soon as a column has no pivot of modulus
    /// at least `EPSILON`.
    ///
    /// ```
    /// use algebrix::RealMatrix;
    /// let m = RealMatrix::from_rows(&[[3.0, 8.0], [4.0, 6.0]]).unwrap();
    /// assert!((m.det().unwrap() - (-14.0)).abs() < 1e-12);
    /// ```
    pub fn det(&self) -> Result<T> {
        let n = self.require_square("determinant")?;
        let mut a = self.clone();
        let mut sign = T::one();

        for col in 0..n {
            let max_row = a.pivot_row(col);
            if a[(max_row, col)].is_negligible() {
                debug!(col, "determinant: no usable pivot, matrix is singular");
                return Ok(T::zero());
            }

            if max_row != col {
                trace!(col, max_row, "determinant: row swap");
                a.swap_rows(col, max_row);
                sign = -sign;
            }

            let pivot = a[(col, col)];
            for row in (col + 1)..n {
                let factor = a[(row, col)].checked_div(pivot)?;
                for j in (col + 1)..n {
                    let val = a[(col, j)];
                    a[(row, j)] = a[(row, j)] - factor * val;
                }
                a[(row, col)] = T::zero();
            }
        }

        let mut det = sign;
        for i in 0..n {
            det = det * a[(i, i)];
        }
        if det.is_finite() {
            Ok(det)
        } else {
            Err(Error::NonFiniteResult { op: "determinant" })
        }
    }

    /// Submatrix with row `i` and column `j` removed, using **1-based**
    /// indices. Its determinant is the `(i, j)` minor.
    ///
    /// # Errors
    ///
    /// - [`Error::NotSquare`] for a rectangular matrix.
    /// - [`Error::CofactorOfScalar`] for a 1x1 matrix.
    /// - [`Error::IndexOutOfRange`] unless `1 <= i, j <= n`.
    ///
    /// ```
    /// use algebrix::RealMatrix;
    /// let m = RealMatrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]).unwrap();
    /// let c = m.cofactor(2, 2).unwrap();
    /// assert_eq!(c, RealMatrix::from_rows(&[[1.0, 3.0], [7.0, 9.0]]).unwrap());
    /// ```
    pub fn cofactor(&self, i: usize, j: usize) -> Result<Self> {
        let n = self.require_square("cofactor")?;
        if n == 1 {
            return Err(Error::CofactorOfScalar);
        }
        if i == 0 || j == 0 || i > n || j > n {
            return Err(Error::IndexOutOfRange {
                row: i,
                col: j,
                rows: n,
                cols: n,
            });
        }
        let (skip_row, skip_col) = (i - 1, j - 1);
        Ok(Self::from_fn_unchecked(n - 1, n - 1, |r, c| {
            let src_r = if r < skip_row { r } else { r + 1 };
            let src_c = if c < skip_col { c } else { c + 1 };
            self[(src_r, src_c)]
        }))
    }

    /// Adjugate: the transpose of the signed cofactor-determinant matrix.
    ///
    /// The sign of entry `(i, j)` (1-based) is `+` when `i + j` is even.
    /// The adjugate of a 1x1 matrix is `[1]`.
    pub fn adjoint(&self) -> Result<Self> {
        let n = self.require_square("adjoint")?;
        if n == 1 {
            return Self::identity(1);
        }
        let mut adj = Self::filled(n, n, T::zero());
        for i in 1..=n {
            for j in 1..=n {
                let minor = self.cofactor(i, j)?.det()?;
                let signed = if (i + j) % 2 == 0 { minor } else { -minor };
                adj[(j - 1, i - 1)] = signed;
            }
        }
        Ok(adj)
    }

    /// Inverse by Gauss-Jordan elimination on `[A | I]` with partial
    /// pivoting on the largest-modulus entry of each column.
    ///
    /// # Errors
    ///
    /// - [`Error::NotSquare`] for a rectangular matrix.
    /// - [`Error::SingularMatrix`] when the best available pivot of some
    ///   column has modulus below `EPSILON`.
    ///
    /// ```
    /// use algebrix::{Error, RealMatrix};
    ///
    /// let singular = RealMatrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]).unwrap();
    /// assert_eq!(singular.inverse(), Err(Error::SingularMatrix));
    /// ```
    pub fn inverse(&self) -> Result<Self> {
        let n = self.require_square("inverse")?;
        let mut a = self.clone();
        let mut inv = Self::filled(n, n, T::zero());
        for i in 0..n {
            inv[(i, i)] = T::one();
        }

        for col in 0..n {
            let max_row = a.pivot_row(col);
            if a[(max_row, col)].is_negligible() {
                debug!(col, "inverse: no usable pivot, matrix is singular");
                return Err(Error::SingularMatrix);
            }
            if max_row != col {
                trace!(col, max_row, "inverse: row swap");
                a.swap_rows(col, max_row);
                inv.swap_rows(col, max_row);
            }

            let scale = T::one().checked_div(a[(col, col)])?;
            for j in 0..n {
                a[(col, j)] = a[(col, j)] * scale;
                inv[(col, j)] = inv[(col, j)] * scale;
            }

            for row in 0..n {
                if row == col {
                    continue;
                }
                let factor = a[(row, col)];
                for j in 0..n {
                    let (pa, pi) = (a[(col, j)], inv[(col, j)]);
                    a[(row, j)] = a[(row, j)] - factor * pa;
                    inv[(row, j)] = inv[(row, j)] - factor * pi;
                }
            }
        }

        inv.finite("inverse")
    }

    /// Integer matrix power via repeated squaring. `pow(0)` is the identity.
    ///
    /// ```
    /// use algebrix::RealMatrix;
    /// let m = RealMatrix::from_rows(&[[1.0, 1.0], [0.0, 1.0]]).unwrap();
    /// let m3 = m.pow(3).unwrap();
    /// assert_eq!(m3[(0, 1)], 3.0);
    /// ```
    pub fn pow(&self, mut n: u32) -> Result<Self> {
        let sz = self.require_square("pow")?;
        let mut result = Self::identity(sz)?;
        let mut base = self.clone();
        while n > 0 {
            if n & 1 == 1 {
                result = result.mul_unchecked(&base).finite("pow")?;
            }
            n >>= 1;
            if n > 0 {
                base = base.mul_unchecked(&base).finite("pow")?;
            }
        }
        Ok(result)
    }

    /// Signed integer power; negative exponents raise the inverse.
    pub fn powi(&self, n: i32) -> Result<Self> {
        if n < 0 {
            self.inverse()?.pow(n.unsigned_abs())
        } else {
            self.pow(n.unsigned_abs())
        }
    }
}
