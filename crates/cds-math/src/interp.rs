//! Flat-forward interpolation.
//!
//! Curve knots store `(t_i, r_i)` with `r_i` continuously compounded. The
//! product `R = r·t` is interpolated linearly in `t`, which makes the
//! instantaneous forward rate piecewise constant between knots. This is
//! the interpolation rule of the ISDA standard model for both discount
//! and survival curves.

use cds_core::{Rate, Real, Time};

/// Interpolate the continuously-compounded rate at `t` from flat-forward
/// knots.
///
/// * `t ≤ t_0` (including `t = 0`) returns `r_0`: the first segment's
///   forward rate extends flat back to the origin.
/// * `t ≥ t_N` extrapolates with the last segment's forward rate.
/// * Interior points interpolate `R = r·t` linearly over the bracketing
///   segment.
///
/// Knot times must be strictly increasing and positive; the curve types
/// enforce this at construction.
pub fn flat_forward(times: &[Time], rates: &[Rate], t: Time) -> Rate {
    debug_assert_eq!(times.len(), rates.len());
    debug_assert!(!times.is_empty());

    let n = times.len();
    if t <= times[0] {
        return rates[0];
    }
    // Exact knot hits bypass the arithmetic so r(t_i) = r_i to the bit.
    if let Ok(i) = times.binary_search_by(|ti| ti.partial_cmp(&t).expect("knot times are finite")) {
        return rates[i];
    }
    if t >= times[n - 1] {
        if n == 1 {
            return rates[0];
        }
        // Forward rate of the last segment, extended flat.
        let r_last = rates[n - 1] * times[n - 1];
        let r_prev = rates[n - 2] * times[n - 2];
        let fwd = (r_last - r_prev) / (times[n - 1] - times[n - 2]);
        return (r_last + fwd * (t - times[n - 1])) / t;
    }

    // Bracketing segment: times[i] < t < times[i + 1].
    let i = times.partition_point(|&ti| ti < t) - 1;
    let (t0, t1) = (times[i], times[i + 1]);
    let (rt0, rt1) = (rates[i] * t0, rates[i + 1] * t1);
    let rt = rt0 + (rt1 - rt0) * (t - t0) / (t1 - t0);
    rt / t
}

/// Log-discount at `t`: `-r(t)·t`, the linearly-interpolated `R` itself.
/// The leg integrators difference this quantity directly.
pub fn flat_forward_log_discount(times: &[Time], rates: &[Rate], t: Time) -> Real {
    if t <= 0.0 {
        return 0.0;
    }
    -flat_forward(times, rates, t) * t
}
