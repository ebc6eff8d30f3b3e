//! # cds-curves
//!
//! Immutable curve snapshots for cdspricer: the risk-free [`ZeroCurve`]
//! (with its money-market + par-swap bootstrap) and the [`CreditCurve`] of
//! hazard-integrated rates. Both interpolate flat-forward on `r·t` and
//! measure time in ACT/365F years from their base date.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod bootstrap;
pub mod credit_curve;
pub mod zero_curve;

pub use bootstrap::{bootstrap_zero_curve, CurveInstrument, SwapConventions};
pub use credit_curve::CreditCurve;
pub use zero_curve::ZeroCurve;
