//! Error types for cdspricer.
//!
//! A single `thiserror`-derived enum covers the model's failure taxonomy.
//! Bootstrap code wraps solver failures into [`Error::CurveBootstrapFailed`]
//! (carrying the failing knot index) before they cross a crate boundary, so
//! callers of the top-level pricer only ever observe the public kinds.

use thiserror::Error;

/// The top-level error type used throughout cdspricer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Malformed caller input: negative notional, recovery outside `[0, 1)`,
    /// unparseable date or tenor, empty or non-increasing instrument lists.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The curve bootstrapper could not bracket or converge at a knot.
    #[error("curve bootstrap failed at knot {knot}: {detail}")]
    CurveBootstrapFailed {
        /// Index of the instrument whose knot could not be solved.
        knot: usize,
        /// Human-readable description of the solver failure.
        detail: String,
    },

    /// A date computation left the representable range, or a query produced
    /// an ambiguous negative time.
    #[error("date out of range: {0}")]
    DateOutOfRange(String),

    /// The stable-evaluation fallbacks still produced a non-finite result.
    /// Must not occur on well-formed inputs.
    #[error("numerical instability: {0}")]
    NumericalInstability(String),

    /// A 1-D root finder failed (no bracket, or iteration cap reached).
    /// Bootstrappers re-wrap this kind with the knot index.
    #[error("root finder: {0}")]
    Solver(String),
}

/// Shorthand `Result` type used throughout cdspricer.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Validate a caller-supplied precondition.
///
/// Returns `Err(Error::InvalidInput(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use cds_core::ensure;
/// fn positive(x: f64) -> cds_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidInput(
                format!($($msg)*)
            ));
        }
    };
}

/// Bail out with an [`Error::InvalidInput`].
///
/// # Example
/// ```
/// use cds_core::fail;
/// fn always_err() -> cds_core::errors::Result<()> {
///     fail!("unsupported configuration");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::InvalidInput(format!($($msg)*)))
    };
}
