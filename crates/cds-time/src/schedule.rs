//! CDS coupon schedule generation.
//!
//! Period ends are generated backward from maturity at the payment
//! frequency, so any short stub lands at the front. Year fractions are
//! computed on unadjusted accrual dates; payment dates are bad-day
//! adjusted. Per the ISDA protection-includes-maturity convention the final
//! period accrues through maturity + 1 day.

use crate::bad_day_convention::BadDayConvention;
use crate::calendar::Calendar;
use crate::date::Date;
use crate::day_count::DayCount;
use crate::frequency::PaymentFrequency;
use cds_core::errors::Result;
use cds_core::{ensure, Time};

/// One accrual period of a CDS premium leg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchedulePeriod {
    /// Unadjusted accrual start.
    pub accrual_start: Date,
    /// Unadjusted accrual end (maturity + 1 day for the final period).
    pub accrual_end: Date,
    /// Bad-day-adjusted payment date.
    pub payment_date: Date,
    /// Accrual year fraction on the unadjusted endpoints.
    pub year_fraction: Time,
}

/// An ordered, contiguous sequence of [`SchedulePeriod`]s.
#[derive(Debug, Clone)]
pub struct CdsSchedule {
    periods: Vec<SchedulePeriod>,
}

impl CdsSchedule {
    /// Generate the schedule for a CDS accruing from `accrual_start` to
    /// `maturity`.
    ///
    /// Period ends run backward from `maturity` by the frequency interval;
    /// the first period starts exactly at `accrual_start` (a short front
    /// stub when the anchor is not on cycle). The final period's accrual
    /// end is `maturity + 1` day and its payment date is the adjusted
    /// maturity.
    pub fn generate(
        accrual_start: Date,
        maturity: Date,
        frequency: PaymentFrequency,
        day_count: DayCount,
        bad_day: BadDayConvention,
        calendar: &dyn Calendar,
    ) -> Result<Self> {
        ensure!(
            accrual_start < maturity,
            "accrual start {accrual_start} must precede maturity {maturity}"
        );

        let step = frequency.months();
        let mut ends = vec![maturity];
        for k in 1.. {
            match maturity.add_months(-k * step) {
                Ok(d) if d > accrual_start => ends.push(d),
                _ => break,
            }
        }
        ends.push(accrual_start);
        ends.reverse();

        let n = ends.len() - 1;
        let mut periods = Vec::with_capacity(n);
        for i in 0..n {
            let start = ends[i];
            let (end, payment) = if i == n - 1 {
                (maturity.add_days(1)?, calendar.adjust(maturity, bad_day))
            } else {
                (ends[i + 1], calendar.adjust(ends[i + 1], bad_day))
            };
            periods.push(SchedulePeriod {
                accrual_start: start,
                accrual_end: end,
                payment_date: payment,
                year_fraction: day_count.year_fraction(start, end),
            });
        }
        Ok(Self { periods })
    }

    /// Build a schedule from explicit periods, validating ordering and
    /// contiguity.
    pub fn from_periods(periods: Vec<SchedulePeriod>) -> Result<Self> {
        ensure!(!periods.is_empty(), "schedule must contain at least one period");
        for p in &periods {
            ensure!(
                p.accrual_start < p.accrual_end,
                "period start {} must precede end {}",
                p.accrual_start,
                p.accrual_end
            );
        }
        for w in periods.windows(2) {
            ensure!(
                w[0].accrual_end == w[1].accrual_start,
                "periods must be contiguous ({} != {})",
                w[0].accrual_end,
                w[1].accrual_start
            );
        }
        Ok(Self { periods })
    }

    /// The periods in chronological order.
    pub fn periods(&self) -> &[SchedulePeriod] {
        &self.periods
    }

    /// Number of periods.
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Return `true` if the schedule has no periods.
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// The period whose accrual window contains `date`, if any.
    pub fn period_containing(&self, date: Date) -> Option<&SchedulePeriod> {
        self.periods
            .iter()
            .find(|p| p.accrual_start <= date && date < p.accrual_end)
    }
}
