//! Dense heap-allocated matrices over [`Scalar`] elements.
//!
//! [`Matrix<T>`] stores a fixed `nrows x ncols` grid in a row-major `Vec<T>`.
//! Dimensions are chosen at construction, must both be at least 1, and never
//! change afterwards. `Clone` is a deep copy.
//!
//! | Operation | Method |
//! |-----------|--------|
//! | Construction | [`Matrix::from_rows`], [`Matrix::zeros`], [`Matrix::identity`], [`Matrix::negative_identity`], [`Matrix::from_fn`] |
//! | Arithmetic | [`Matrix::try_add`], [`Matrix::try_sub`], [`Matrix::try_mul`], [`Matrix::try_div`], [`Matrix::scale`], `-A` |
//! | Square only | [`Matrix::trace`], [`Matrix::det`], [`Matrix::cofactor`], [`Matrix::adjoint`], [`Matrix::inverse`], [`Matrix::pow`], [`Matrix::powi`] |
//! | Utilities | [`Matrix::transpose`], [`Matrix::map`], [`Matrix::swap_rows`], [`Matrix::is_zero`], [`Matrix::to_complex`] |
//!
//! The same code serves [`RealMatrix`] (`Matrix<f64>`) and [`ComplexMatrix`]
//! (`Matrix<Complex>`).
//!
//! `==` compares shapes exactly and elements within `EPSILON`, for both
//! element types.
//!
//! # Example
//!
//! ```
//! use algebrix::RealMatrix;
//!
//! let a = RealMatrix::from_rows(&[[2.0, 0.0], [0.0, 2.0]]).unwrap();
//! let inv = a.inverse().unwrap();
//! assert_eq!(inv, RealMatrix::from_rows(&[[0.5, 0.0], [0.0, 0.5]]).unwrap());
//! assert_eq!(a.try_mul(&inv).unwrap(), RealMatrix::identity(2).unwrap());
//! ```

pub mod aliases;
mod ops;
mod square;
mod util;


pub use aliases::*;

use core::ops::{Index, IndexMut};

use crate::error::{Error, Result};
use crate::traits::Scalar;

/// Dynamically-sized heap-allocated matrix.
///
/// Row-major `Vec<T>` storage: element `(i, j)` lives at `i * ncols + j`.
/// Indices are 0-based everywhere except [`Matrix::cofactor`], which follows
/// the 1-based textbook convention.
///
/// # Examples
///
/// ```
/// use algebrix::RealMatrix;
///
/// let a = RealMatrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.nrows(), 2);
/// assert_eq!(a.ncols(), 2);
/// assert!(a.get(2, 0).is_err());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Matrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

fn check_shape(nrows: usize, ncols: usize) -> Result<()> {
    if nrows == 0 || ncols == 0 {
        return Err(Error::EmptyMatrix {
            rows: nrows,
            cols: ncols,
        });
    }
    Ok(())
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Create an `nrows x ncols` matrix of zeros.
    ///
    /// ```
    /// use algebrix::RealMatrix;
    /// let m = RealMatrix::zeros(2, 3).unwrap();
    /// assert_eq!(m[(1, 2)], 0.0);
    /// assert!(RealMatrix::zeros(0, 3).is_err());
    /// ```
    pub fn zeros(nrows: usize, ncols: usize) -> Result<Self> {
        check_shape(nrows, ncols)?;
        Ok(Self::filled(nrows, ncols, T::zero()))
    }

    /// Create an `n x n` identity matrix.
    pub fn identity(n: usize) -> Result<Self> {
        Self::scaled_identity(n, T::one())
    }

    /// Create an `n x n` matrix with `-1` on the diagonal.
    pub fn negative_identity(n: usize) -> Result<Self> {
        Self::scaled_identity(n, -T::one())
    }

    fn scaled_identity(n: usize, diag: T) -> Result<Self> {
        check_shape(n, n)?;
        let mut m = Self::filled(n, n, T::zero());
        for i in 0..n {
            m[(i, i)] = diag;
        }
        Ok(m)
    }

    /// Create a matrix from a 2D grid of rows. The grid is copied.
    ///
    /// Accepts anything that yields row slices: `&[[T; N]]`, `&[Vec<T>]`, ...
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyMatrix`] for no rows or empty rows.
    /// - [`Error::RaggedRows`] when rows differ in length.
    /// - [`Error::NonFiniteElement`] for NaN or infinite entries.
    ///
    /// ```
    /// use algebrix::{Error, RealMatrix};
    ///
    /// let m = RealMatrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    /// assert_eq!(m[(1, 0)], 4.0);
    ///
    /// let ragged = RealMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
    /// assert_eq!(ragged, Err(Error::RaggedRows { row: 1, expected: 2, got: 1 }));
    /// ```
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.as_ref().len());
        check_shape(nrows, ncols)?;
        let mut data = Vec::with_capacity(nrows * ncols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != ncols {
                return Err(Error::RaggedRows {
                    row: i,
                    expected: ncols,
                    got: row.len(),
                });
            }
            if let Some(col) = row.iter().position(|x| !x.is_finite()) {
                return Err(Error::NonFiniteElement { row: i, col });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { data, nrows, ncols })
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use algebrix::RealMatrix;
    /// let m = RealMatrix::from_fn(3, 3, |i, j| (i * 3 + j) as f64).unwrap();
    /// assert_eq!(m[(1, 1)], 4.0);
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> T) -> Result<Self> {
        check_shape(nrows, ncols)?;
        let m = Self::from_fn_unchecked(nrows, ncols, f);
        match m.data.iter().position(|x| !x.is_finite()) {
            Some(k) => Err(Error::NonFiniteElement {
                row: k / ncols,
                col: k % ncols,
            }),
            None => Ok(m),
        }
    }

    /// Element `(row, col)`, or [`Error::IndexOutOfRange`].
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.check_index(row, col)?;
        Ok(self[(row, col)])
    }

    /// Overwrite element `(row, col)`, or fail with [`Error::IndexOutOfRange`].
    ///
    /// Rejects non-finite values with [`Error::NonFiniteElement`].
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.check_index(row, col)?;
        if !value.is_finite() {
            return Err(Error::NonFiniteElement { row, col });
        }
        self[(row, col)] = value;
        Ok(())
    }

    pub(crate) fn filled(nrows: usize, ncols: usize, value: T) -> Self {
        Self {
            data: vec![value; nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Fail with [`Error::NonFiniteResult`] if any element overflowed.
    pub(crate) fn finite(self, op: &'static str) -> Result<Self> {
        if self.data.iter().all(|x| x.is_finite()) {
            Ok(self)
        } else {
            Err(Error::NonFiniteResult { op })
        }
    }

    /// Dimension of a square matrix, or [`Error::NotSquare`].
    pub(crate) fn require_square(&self, op: &'static str) -> Result<usize> {
        if self.is_square() {
            Ok(self.nrows)
        } else {
            Err(Error::NotSquare {
                op,
                rows: self.nrows,
                cols: self.ncols,
            })
        }
    }
}

impl<T> Matrix<T> {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(nrows, ncols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Row-major view of the elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.data.chunks_exact(self.ncols)
    }

    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        if row < self.nrows && col < self.ncols {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                row,
                col,
                rows: self.nrows,
                cols: self.ncols,
            })
        }
    }

    pub(crate) fn from_fn_unchecked(
        nrows: usize,
        ncols: usize,
        f: impl Fn(usize, usize) -> T,
    ) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }
}

// ── Equality ────────────────────────────────────────────────────────

/// Same shape and every element pair equal under [`Scalar::approx_eq`].
impl<T: Scalar> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(&a, &b)| a.approx_eq(b))
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    /// Panics if `(row, col)` is out of range.
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({row}, {col}) out of range for {}x{} matrix",
            self.nrows,
            self.ncols,
        );
        &self.data[row * self.ncols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({row}, {col}) out of range for {}x{} matrix",
            self.nrows,
            self.ncols,
        );
        &mut self.data[row * self.ncols + col]
    }
}
