//! The risk-free discount curve.

use cds_core::errors::Result;
use cds_core::{ensure, DiscountFactor, Rate, Real, Time};
use cds_math::interp;
use cds_time::{Date, DayCount};

/// An immutable zero-coupon curve.
///
/// Knot times are ACT/365F years from `base_date`; knot rates are
/// continuously compounded. Discount factors come from flat-forward
/// interpolation: `DF(t) = exp(-r(t)·t)`.
#[derive(Debug, Clone)]
pub struct ZeroCurve {
    base_date: Date,
    times: Vec<Time>,
    rates: Vec<Rate>,
}

impl ZeroCurve {
    /// Build a curve from knot times and zero rates.
    ///
    /// Times must be non-negative and strictly increasing; rates must be
    /// finite.
    pub fn new(base_date: Date, times: Vec<Time>, rates: Vec<Rate>) -> Result<Self> {
        ensure!(!times.is_empty(), "curve needs at least one knot");
        ensure!(
            times.len() == rates.len(),
            "knot times and rates differ in length ({} vs {})",
            times.len(),
            rates.len()
        );
        ensure!(times[0] >= 0.0, "knot times must be non-negative");
        ensure!(
            times.windows(2).all(|w| w[0] < w[1]),
            "knot times must be strictly increasing"
        );
        ensure!(
            times.iter().chain(rates.iter()).all(|v| v.is_finite()),
            "curve knots must be finite"
        );
        Ok(Self {
            base_date,
            times,
            rates,
        })
    }

    /// The curve's base (anchor) date.
    pub fn base_date(&self) -> Date {
        self.base_date
    }

    /// The knot times in ACT/365F years.
    pub fn times(&self) -> &[Time] {
        &self.times
    }

    /// The continuously-compounded knot rates.
    pub fn rates(&self) -> &[Rate] {
        &self.rates
    }

    /// ACT/365F time from the base date to `date`.
    pub fn time_from_base(&self, date: Date) -> Time {
        DayCount::Act365Fixed.year_fraction(self.base_date, date)
    }

    /// The interpolated zero rate at `t`. `t = 0` returns the first knot
    /// rate by convention.
    pub fn zero_rate(&self, t: Time) -> Rate {
        interp::flat_forward(&self.times, &self.rates, t)
    }

    /// The discount factor at `t`. `DF(0) = 1`; non-positive times clamp
    /// to 1 (the base date itself carries no discounting).
    pub fn discount(&self, t: Time) -> DiscountFactor {
        if t <= 0.0 {
            return 1.0;
        }
        (-self.zero_rate(t) * t).exp()
    }

    /// The discount factor at a date.
    pub fn discount_date(&self, date: Date) -> DiscountFactor {
        self.discount(self.time_from_base(date))
    }

    /// `ln DF(t) = -r(t)·t`; the leg integrators difference this directly.
    pub fn log_discount(&self, t: Time) -> Real {
        interp::flat_forward_log_discount(&self.times, &self.rates, t)
    }

    /// A logical copy with every knot rate shifted by `shift`
    /// (e.g. `1e-4` for the DV01 bump). The original is untouched.
    pub fn bumped(&self, shift: Rate) -> Self {
        Self {
            base_date: self.base_date,
            times: self.times.clone(),
            rates: self.rates.iter().map(|r| r + shift).collect(),
        }
    }
}
