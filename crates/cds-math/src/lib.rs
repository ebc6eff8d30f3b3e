//! # cds-math
//!
//! The numerical layer of cdspricer: bracketed 1-D root finders for the
//! curve bootstrappers, flat-forward interpolation on `r·t`, and the
//! stable exponential-decay kernels used by the leg integrators.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod interp;
pub mod kernels;
pub mod solvers1d;

pub use interp::flat_forward;
pub use kernels::{decay_integral, decay_time_integral, TAYLOR_THRESHOLD};
pub use solvers1d::{bisection, brent};
