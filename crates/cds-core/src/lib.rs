//! # cds-core
//!
//! Core types and error definitions shared across the cdspricer workspace:
//! type aliases for the numeric vocabulary of the model and the error
//! hierarchy every fallible operation reports through.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod errors;

/// Floating-point type used throughout the library.
pub type Real = f64;

/// A time measurement in years (ACT/365F from a curve's base date).
pub type Time = Real;

/// A rate expressed as a decimal (e.g. 0.05 = 5 %).
pub type Rate = Real;

/// A spread over a reference rate, expressed as a decimal.
pub type Spread = Real;

/// A discount factor in (0, 1].
pub type DiscountFactor = Real;

/// A survival probability in [0, 1].
pub type Probability = Real;

/// Alias used for array sizes / indices.
pub type Size = usize;

/// One basis point (1e-4) as a decimal rate.
pub const BASIS_POINT: Rate = 1.0e-4;
