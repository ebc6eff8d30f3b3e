//! Credit-curve bootstrap from par CDS spreads.
//!
//! One knot per quoted maturity. Knot `k` is solved so that a CDS with
//! that maturity and a running coupon equal to its par spread has zero
//! upfront value: `ContingentPV(h_k) − FeePV(c = spread, h_k) = 0`. Only
//! the last segment is free at each step; earlier segments stay frozen
//! from previous iterations, and the residual is monotone in `h_k`.

use crate::contingent_leg::contingent_leg_pv;
use crate::contract::CdsConventions;
use crate::fee_leg::fee_leg_pv;
use cds_core::errors::{Error, Result};
use cds_core::{ensure, Rate, Real, Time};
use cds_curves::{CreditCurve, ZeroCurve};
use cds_math::solvers1d;
use cds_time::{Calendar, CdsSchedule, Date, DayCount, IMM};

/// Hazard-rate search bracket.
const HAZARD_MIN: Rate = 1.0e-8;
const HAZARD_MAX: Rate = 10.0;

/// Residual tolerance (per unit notional) for each knot solve.
const CREDIT_ACCURACY: Real = 1.0e-14;

/// Bootstrap a [`CreditCurve`] from ordered `(maturity, par spread)`
/// quotes against a bootstrapped zero curve.
///
/// The calibration CDSs follow the trade conventions: accrual from the
/// IMM date preceding the curve base date, step-in one business day after
/// it. A knot that cannot be bracketed or solved surfaces as
/// [`Error::CurveBootstrapFailed`] with the knot index.
pub fn bootstrap_credit_curve(
    zero: &ZeroCurve,
    quotes: &[(Date, Rate)],
    recovery_rate: Real,
    calendar: &dyn Calendar,
    conventions: &CdsConventions,
) -> Result<CreditCurve> {
    ensure!(!quotes.is_empty(), "at least one CDS quote is required");
    ensure!(
        (0.0..1.0).contains(&recovery_rate),
        "recovery rate must lie in [0, 1), got {recovery_rate}"
    );
    ensure!(
        quotes.iter().all(|(_, s)| s.is_finite() && *s > 0.0),
        "par spreads must be positive and finite"
    );
    ensure!(
        quotes.windows(2).all(|w| w[0].0 < w[1].0),
        "quote maturities must be strictly increasing"
    );

    let base = zero.base_date();
    let step_in = calendar.add_business_days(base, 1);
    let accrual_start = IMM::previous(base);
    let protection_start = if conventions.protection_from_start_date {
        step_in
    } else {
        step_in + 1
    };

    let mut times: Vec<Time> = Vec::with_capacity(quotes.len());
    let mut rates: Vec<Rate> = Vec::with_capacity(quotes.len());

    for (knot, &(maturity, spread)) in quotes.iter().enumerate() {
        ensure!(
            maturity > step_in,
            "quote maturity {maturity} is not after the step-in date {step_in}"
        );
        let t_k = DayCount::Act365Fixed.year_fraction(base, maturity);

        let schedule = CdsSchedule::generate(
            accrual_start,
            maturity,
            conventions.frequency,
            conventions.accrual_day_count,
            conventions.bad_day,
            calendar,
        )?;

        let mut trial_times = times.clone();
        trial_times.push(t_k);
        let mut trial_rates = rates.clone();
        trial_rates.push(0.0);

        let solved = solvers1d::brent(
            |h: Rate| {
                *trial_rates.last_mut().expect("trial knot present") = h;
                let credit =
                    match CreditCurve::new(base, trial_times.clone(), trial_rates.clone()) {
                        Ok(curve) => curve,
                        Err(_) => return f64::NAN,
                    };
                let fee = fee_leg_pv(
                    step_in,
                    &schedule,
                    spread,
                    zero,
                    &credit,
                    1.0,
                    conventions.pay_accrued_on_default,
                );
                let contingent = contingent_leg_pv(
                    step_in,
                    protection_start,
                    maturity,
                    zero,
                    &credit,
                    recovery_rate,
                    1.0,
                );
                contingent - fee
            },
            HAZARD_MIN,
            HAZARD_MAX,
            CREDIT_ACCURACY,
        )
        .map_err(|e| Error::CurveBootstrapFailed {
            knot,
            detail: e.to_string(),
        })?;

        times.push(t_k);
        rates.push(solved);
    }

    CreditCurve::new(base, times, rates)
}
