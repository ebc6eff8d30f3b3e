//! The credit (survival) curve.

use cds_core::errors::Result;
use cds_core::{ensure, Probability, Rate, Real, Time};
use cds_math::interp;
use cds_time::{Date, DayCount};

/// An immutable credit curve.
///
/// Shaped like a [`ZeroCurve`](crate::ZeroCurve) but the knot rates are
/// hazard-integrated: `h(t)` such that `Q(t) = exp(-h(t)·t)`. Flat-forward
/// interpolation of `h·t` makes the forward hazard rate piecewise constant
/// between knots.
#[derive(Debug, Clone)]
pub struct CreditCurve {
    base_date: Date,
    times: Vec<Time>,
    rates: Vec<Rate>,
}

impl CreditCurve {
    /// Build a curve from knot times and hazard-integrated rates.
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

    /// A flat curve: one knot at `t` with constant hazard rate `hazard`.
    pub fn flat(base_date: Date, t: Time, hazard: Rate) -> Result<Self> {
        ensure!(t > 0.0, "flat-curve knot time must be positive");
        Self::new(base_date, vec![t], vec![hazard])
    }

    /// The curve's base (anchor) date.
    pub fn base_date(&self) -> Date {
        self.base_date
    }

    /// The knot times in ACT/365F years.
    pub fn times(&self) -> &[Time] {
        &self.times
    }

    /// The hazard-integrated knot rates.
    pub fn rates(&self) -> &[Rate] {
        &self.rates
    }

    /// ACT/365F time from the base date to `date`.
    pub fn time_from_base(&self, date: Date) -> Time {
        DayCount::Act365Fixed.year_fraction(self.base_date, date)
    }

    /// The interpolated hazard-integrated rate at `t`.
    pub fn hazard_rate(&self, t: Time) -> Rate {
        interp::flat_forward(&self.times, &self.rates, t)
    }

    /// Survival probability `Q(t) = exp(-h(t)·t)`. `Q(0) = 1`.
    pub fn survival(&self, t: Time) -> Probability {
        if t <= 0.0 {
            return 1.0;
        }
        (-self.hazard_rate(t) * t).exp()
    }

    /// Survival probability at a date.
    pub fn survival_date(&self, date: Date) -> Probability {
        self.survival(self.time_from_base(date))
    }

    /// `ln Q(t) = -h(t)·t`; the leg integrators difference this directly.
    pub fn log_survival(&self, t: Time) -> Real {
        interp::flat_forward_log_discount(&self.times, &self.rates, t)
    }

    /// A logical copy with every knot rate shifted by `shift`
    /// (e.g. `1e-4` for the CS01 bump). The original is untouched.
    pub fn bumped(&self, shift: Rate) -> Self {
        Self {
            base_date: self.base_date,
            times: self.times.clone(),
            rates: self.rates.iter().map(|r| r + shift).collect(),
        }
    }
}
