//! Crate-wide error type.
//!
//! Every fallible operation returns [`Result<T>`]. Individual variants name the
//! exact precondition that was violated; [`Error::kind`] folds them into the
//! five coarse categories callers usually branch on.
//!
//! ```
//! use algebrix::{Complex, ErrorKind};
//!
//! let err = Complex::ONE.checked_div(Complex::ZERO).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::UndefinedOperation);
//! assert!(err.is_recoverable());
//! ```

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ErrorKind {
    /// Bad input: non-finite value, empty shape, zero leading coefficient, bad index.
    InvalidArgument,
    /// Operand shapes are incompatible, or a square matrix was required.
    DimensionMismatch,
    /// Mathematically undefined result (division by zero, log of zero, poles, ...).
    UndefinedOperation,
    /// Inversion of a matrix with no usable pivot.
    SingularMatrix,
    /// An internal consistency check failed. Indicates a bug, not bad input.
    InternalInvariantViolation,
}

/// Errors returned by complex arithmetic, transcendental functions,
/// polynomial solvers and matrix kernels.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A component was NaN or infinite.
    #[error("non-finite input: ({re}, {im})")]
    NonFinite { re: f64, im: f64 },

    /// A computation overflowed to NaN or infinity.
    #[error("{op} produced a non-finite result")]
    NonFiniteResult { op: &'static str },

    /// A matrix element was NaN or infinite.
    #[error("non-finite matrix element at ({row}, {col})")]
    NonFiniteElement { row: usize, col: usize },

    /// Matrix dimensions must both be at least 1.
    #[error("matrix dimensions must be at least 1x1, got {rows}x{cols}")]
    EmptyMatrix { rows: usize, cols: usize },

    /// Rows of a 2D grid have differing lengths.
    #[error("row {row} has {got} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// Element index outside the matrix.
    #[error("index ({row}, {col}) out of range for {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Cofactor requested for a 1x1 matrix.
    #[error("cofactor is undefined for a 1x1 matrix")]
    CofactorOfScalar,

    /// Root index `n` (or complex index `w`) is zero.
    #[error("root index must be non-zero")]
    ZeroRootIndex,

    /// Leading polynomial coefficient is zero.
    #[error("leading coefficient must be non-zero")]
    ZeroLeadingCoefficient,

    /// Incompatible operand shapes.
    #[error("dimension mismatch in {op}: {}x{} vs {}x{}", .left.0, .left.1, .right.0, .right.1)]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Operation requires a square matrix.
    #[error("{op} requires a square matrix, got {rows}x{cols}")]
    NotSquare {
        op: &'static str,
        rows: usize,
        cols: usize,
    },

    /// Division (or reciprocal) by a value with modulus below `EPSILON`.
    #[error("division by zero")]
    DivisionByZero,

    /// Argument of the origin requested.
    #[error("angle is undefined for zero")]
    UndefinedAngle,

    /// Logarithm of zero requested.
    #[error("logarithm of zero is undefined")]
    LogOfZero,

    /// Logarithm with base one requested.
    #[error("logarithm base 1 is undefined")]
    LogBaseOne,

    /// `0^0` requested.
    #[error("0 raised to the power 0 is undefined")]
    UndefinedPower,

    /// Reciprocal trigonometric function evaluated at a zero of its denominator.
    #[error("{function} is undefined where {denominator} is zero")]
    UndefinedTrig {
        function: &'static str,
        denominator: &'static str,
    },

    /// Inverse trigonometric function evaluated outside its principal domain.
    #[error("{function} is undefined for real |z| < 1")]
    InverseTrigDomain { function: &'static str },

    /// Inverse trigonometric function evaluated at a pole.
    #[error("{function} has a pole at this argument")]
    InverseTrigPole { function: &'static str },

    /// No usable pivot during elimination.
    #[error("matrix is singular")]
    SingularMatrix,

    /// Cardano's method could not pair the auxiliary cube roots.
    #[error("no cube-root pair satisfies u*v = -p/3")]
    CardanoPairing,
}

impl Error {
    /// Coarse category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NonFinite { .. }
            | Error::NonFiniteElement { .. }
            | Error::EmptyMatrix { .. }
            | Error::RaggedRows { .. }
            | Error::IndexOutOfRange { .. }
            | Error::CofactorOfScalar
            | Error::ZeroRootIndex
            | Error::ZeroLeadingCoefficient => ErrorKind::InvalidArgument,
            Error::DimensionMismatch { .. } | Error::NotSquare { .. } => {
                ErrorKind::DimensionMismatch
            }
            Error::NonFiniteResult { .. }
            | Error::DivisionByZero
            | Error::UndefinedAngle
            | Error::LogOfZero
            | Error::LogBaseOne
            | Error::UndefinedPower
            | Error::UndefinedTrig { .. }
            | Error::InverseTrigDomain { .. }
            | Error::InverseTrigPole { .. } => ErrorKind::UndefinedOperation,
            Error::SingularMatrix => ErrorKind::SingularMatrix,
            Error::CardanoPairing => ErrorKind::InternalInvariantViolation,
        }
    }

    /// `false` for internal invariant violations, which callers should not
    /// retry or report as user error.
    pub fn is_recoverable(&self) -> bool {
        self.kind() != ErrorKind::InternalInvariantViolation
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
