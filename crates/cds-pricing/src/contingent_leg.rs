//! Contingent (protection) leg valuation.

use crate::timeline::integration_grid;
use cds_core::Real;
use cds_curves::{CreditCurve, ZeroCurve};
use cds_math::decay_integral;
use cds_time::Date;

/// Present value of the protection payout `(1 − R)·N` at default,
/// discounted to the curves' base date.
///
/// The default-time density is `λ(t)·Q(t)`; over each sub-interval of the
/// integration grid the forward hazard and discount rates are constant, so
/// each piece contributes `λ'·g(x)·Q(t₀)·DF(t₀)` with
/// `g(x) = (1 − e^{-x})/x` evaluated through its Taylor expansion near
/// zero. Protection runs from `max(protection_start, value_date)` to
/// `maturity`.
pub fn contingent_leg_pv(
    value_date: Date,
    protection_start: Date,
    maturity: Date,
    zero: &ZeroCurve,
    credit: &CreditCurve,
    recovery_rate: Real,
    notional: Real,
) -> Real {
    let start = protection_start.max(value_date);
    if start >= maturity {
        return 0.0;
    }

    let t0 = credit.time_from_base(start);
    let t1 = credit.time_from_base(maturity);
    let grid = integration_grid(zero, credit, t0, t1);

    let mut expected_loss = 0.0;
    for w in grid.windows(2) {
        let (s0, s1) = (w[0], w[1]);
        let log_q0 = credit.log_survival(s0);
        let log_df0 = zero.log_discount(s0);
        let lambda = log_q0 - credit.log_survival(s1);
        let fwd = log_df0 - zero.log_discount(s1);
        expected_loss += lambda * decay_integral(lambda + fwd) * (log_q0 + log_df0).exp();
    }
    (1.0 - recovery_rate) * notional * expected_loss
}
