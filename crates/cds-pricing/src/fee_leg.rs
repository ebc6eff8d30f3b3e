//! Fee (premium) leg valuation.
//!
//! The leg is worth the sum of the risky regular coupons plus, when the
//! contract pays accrued at default, the expected accrued premium paid at
//! the default time. Interior periods observe survival one day before
//! their accrual end; the final period observes at its accrual end, which
//! already extends one day past maturity.

use crate::timeline::integration_grid;
use cds_core::{Rate, Real};
use cds_curves::{CreditCurve, ZeroCurve};
use cds_math::{decay_integral, decay_time_integral};
use cds_time::{CdsSchedule, Date, SchedulePeriod};

/// Present value of the fee leg, discounted to the curves' base date.
///
/// Periods whose payment falls on or before `value_date` contribute
/// nothing; accrual-on-default integration starts no earlier than
/// `value_date`. `RPV01` is this function at unit coupon and unit
/// notional.
pub fn fee_leg_pv(
    value_date: Date,
    schedule: &CdsSchedule,
    coupon: Rate,
    zero: &ZeroCurve,
    credit: &CreditCurve,
    notional: Real,
    pay_accrued_on_default: bool,
) -> Real {
    let n = schedule.len();
    let mut pv = 0.0;
    for (i, period) in schedule.periods().iter().enumerate() {
        if period.payment_date <= value_date {
            continue;
        }
        let is_final = i + 1 == n;
        let observation = if is_final {
            period.accrual_end
        } else {
            period.accrual_end - 1
        };

        let q = credit.survival_date(observation);
        let df = zero.discount_date(period.payment_date);
        pv += period.year_fraction * q * df;

        if pay_accrued_on_default {
            pv += accrual_on_default(period, observation, value_date, zero, credit);
        }
    }
    coupon * notional * pv
}

/// Expected accrued premium paid at default within one period, per unit
/// coupon and unit notional.
///
/// The accrued grows linearly from the period's accrual start at the
/// period's day-count rate; over each sub-interval of the integration grid
/// the forward hazard and discount rates are constant, so the integral
/// reduces to the two decay kernels:
///
/// `pv = λ'·A·Q₀·DF₀·[(t₀ − a)·g(x) + Δt·h(x)]`,   `x = λ' + f'`
///
/// with `g(x) = (1 − e^{-x})/x` and `h(x) = (1 − (1 + x)e^{-x})/x²`
/// switching to their Taylor expansions near the removable singularity.
fn accrual_on_default(
    period: &SchedulePeriod,
    observation_end: Date,
    value_date: Date,
    zero: &ZeroCurve,
    credit: &CreditCurve,
) -> Real {
    let start_date = period.accrual_start.max(value_date);
    if observation_end <= start_date {
        return 0.0;
    }

    // Accrued time is measured from the true period start, even when the
    // integration window is truncated at the value date.
    let t_accrual_start = credit.time_from_base(period.accrual_start);
    let t_accrual_end = credit.time_from_base(period.accrual_end);
    let accrual_rate = period.year_fraction / (t_accrual_end - t_accrual_start);

    let t0 = credit.time_from_base(start_date);
    let t1 = credit.time_from_base(observation_end);
    let grid = integration_grid(zero, credit, t0, t1);

    let mut pv = 0.0;
    for w in grid.windows(2) {
        let (s0, s1) = (w[0], w[1]);
        let log_q0 = credit.log_survival(s0);
        let log_df0 = zero.log_discount(s0);
        let lambda = log_q0 - credit.log_survival(s1);
        let fwd = log_df0 - zero.log_discount(s1);
        let x = lambda + fwd;
        let weight =
            (s0 - t_accrual_start) * decay_integral(x) + (s1 - s0) * decay_time_integral(x);
        pv += lambda * accrual_rate * (log_q0 + log_df0).exp() * weight;
    }
    pv
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use cds_time::{BadDayConvention, CdsSchedule, DayCount, PaymentFrequency, WeekendsOnly};

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    /// Single-period numerical walkthrough: one coupon of 91/360 at 1% on
    /// 10MM, with Q and DF pinned at the observation/payment date.
    #[test]
    fn single_period_regular_coupon() {
        let base = date(2022, 6, 20);
        let t_pay = DayCount::Act365Fixed.year_fraction(base, date(2022, 12, 20));

        let zero = ZeroCurve::new(base, vec![t_pay], vec![-(0.99f64.ln()) / t_pay]).unwrap();
        let credit = CreditCurve::new(base, vec![t_pay], vec![-(0.9946f64.ln()) / t_pay]).unwrap();

        let schedule = CdsSchedule::from_periods(vec![SchedulePeriod {
            accrual_start: date(2022, 9, 20),
            accrual_end: date(2022, 12, 20),
            payment_date: date(2022, 12, 20),
            year_fraction: 91.0 / 360.0,
        }])
        .unwrap();

        let pv = fee_leg_pv(base, &schedule, 0.01, &zero, &credit, 10_000_000.0, false);
        let expected = 0.01 * 10_000_000.0 * (91.0 / 360.0) * 0.9946 * 0.99;
        assert_abs_diff_eq!(pv, expected, epsilon = 1e-6);
        assert_abs_diff_eq!(pv, 24_889.0, epsilon = 5.0);
    }

    #[test]
    fn past_payments_contribute_nothing() {
        let base = date(2022, 6, 20);
        let zero = ZeroCurve::new(base, vec![5.0], vec![0.02]).unwrap();
        let credit = CreditCurve::flat(base, 5.0, 0.01).unwrap();
        let schedule = CdsSchedule::generate(
            date(2022, 6, 20),
            date(2023, 6, 20),
            PaymentFrequency::Quarterly,
            DayCount::Act360,
            BadDayConvention::ModifiedFollowing,
            &WeekendsOnly,
        )
        .unwrap();

        // Valued after the last payment, the leg is worthless.
        let pv = fee_leg_pv(date(2024, 1, 1), &schedule, 0.01, &zero, &credit, 1e6, true);
        assert_eq!(pv, 0.0);
    }

    #[test]
    fn accrual_on_default_adds_value() {
        let base = date(2022, 6, 20);
        let zero = ZeroCurve::new(base, vec![5.0], vec![0.02]).unwrap();
        let credit = CreditCurve::flat(base, 5.0, 0.03).unwrap();
        let schedule = CdsSchedule::generate(
            date(2022, 6, 20),
            date(2027, 6, 20),
            PaymentFrequency::Quarterly,
            DayCount::Act360,
            BadDayConvention::ModifiedFollowing,
            &WeekendsOnly,
        )
        .unwrap();

        let without = fee_leg_pv(base, &schedule, 0.01, &zero, &credit, 1e6, false);
        let with = fee_leg_pv(base, &schedule, 0.01, &zero, &credit, 1e6, true);
        assert!(with > without);
        // The accrued-at-default add-on is worth roughly half a coupon
        // period of the expected default mass, a small positive fraction.
        assert!(with - without < 0.02 * without);
    }

    #[test]
    fn accrual_on_default_matches_brute_force() {
        // Flat curves, one quarterly period; compare the closed form with a
        // dense Riemann sum of lambda * accrued(t) * Q(t) * DF(t).
        let base = date(2022, 6, 20);
        let hazard = 0.05;
        let rate = 0.03;
        let zero = ZeroCurve::new(base, vec![10.0], vec![rate]).unwrap();
        let credit = CreditCurve::flat(base, 10.0, hazard).unwrap();

        let period = SchedulePeriod {
            accrual_start: date(2023, 6, 20),
            accrual_end: date(2023, 9, 20),
            payment_date: date(2023, 9, 20),
            year_fraction: DayCount::Act360.year_fraction(date(2023, 6, 20), date(2023, 9, 20)),
        };
        let closed = accrual_on_default(
            &period,
            date(2023, 9, 19),
            base,
            &zero,
            &credit,
        );

        let t_a = credit.time_from_base(period.accrual_start);
        let t_b = credit.time_from_base(date(2023, 9, 19));
        let accrual_rate =
            period.year_fraction / (credit.time_from_base(period.accrual_end) - t_a);
        let steps = 200_000;
        let dt = (t_b - t_a) / steps as f64;
        let mut brute = 0.0;
        for i in 0..steps {
            let t = t_a + (i as f64 + 0.5) * dt;
            brute += hazard * accrual_rate * (t - t_a) * (-(hazard + rate) * t).exp() * dt;
        }
        assert_relative_eq!(closed, brute, max_relative = 1e-6);
    }

    #[test]
    fn rpv01_scales_linearly() {
        let base = date(2022, 6, 20);
        let zero = ZeroCurve::new(base, vec![5.0], vec![0.02]).unwrap();
        let credit = CreditCurve::flat(base, 5.0, 0.01).unwrap();
        let schedule = CdsSchedule::generate(
            date(2022, 6, 20),
            date(2027, 6, 20),
            PaymentFrequency::Quarterly,
            DayCount::Act360,
            BadDayConvention::ModifiedFollowing,
            &WeekendsOnly,
        )
        .unwrap();

        let rpv01 = fee_leg_pv(base, &schedule, 1.0, &zero, &credit, 1.0, true);
        let pv = fee_leg_pv(base, &schedule, 0.05, &zero, &credit, 2_000_000.0, true);
        assert_relative_eq!(pv, 0.05 * 2_000_000.0 * rpv01, max_relative = 1e-12);
    }
}
