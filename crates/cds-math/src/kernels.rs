//! Stable exponential-decay kernels.
//!
//! The leg integrators reduce every sub-interval to the two integrals
//!
//! * `decay_integral(x)      = ∫₀¹ e^{-x·u} du       = (1 − e^{-x}) / x`
//! * `decay_time_integral(x) = ∫₀¹ u·e^{-x·u} du     = (1 − (1 + x)·e^{-x}) / x²`
//!
//! where `x` is the combined hazard + forward-rate increment over the
//! sub-interval. Near `x = 0` the closed forms cancel catastrophically
//! (hazard ≈ −forward rate), so below [`TAYLOR_THRESHOLD`] both switch to
//! series expansions good to well beyond 12 digits.

use cds_core::Real;

/// Switch-over point between the closed form and the Taylor expansion.
pub const TAYLOR_THRESHOLD: Real = 1.0e-4;

/// `(1 − e^{-x}) / x`, continuous through `x = 0` where it equals 1.
pub fn decay_integral(x: Real) -> Real {
    if x.abs() <= TAYLOR_THRESHOLD {
        // Σ (−x)^n / (n! (n+1)); the x⁵ term is below 1e-22 at the threshold.
        1.0 + x * (-1.0 / 2.0 + x * (1.0 / 6.0 + x * (-1.0 / 24.0 + x / 120.0)))
    } else {
        (1.0 - (-x).exp()) / x
    }
}

/// `(1 − (1 + x)·e^{-x}) / x²`, continuous through `x = 0` where it
/// equals 1/2.
pub fn decay_time_integral(x: Real) -> Real {
    if x.abs() <= TAYLOR_THRESHOLD {
        // Σ (−x)^n / (n! (n+2)).
        0.5 + x * (-1.0 / 3.0 + x * (1.0 / 8.0 + x * (-1.0 / 30.0 + x / 144.0)))
    } else {
        (1.0 - (1.0 + x) * (-x).exp()) / (x * x)
    }
}
