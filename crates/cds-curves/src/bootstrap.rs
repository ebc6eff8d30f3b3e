//! Zero-curve bootstrap from money-market and par-swap quotes.
//!
//! One knot per instrument, placed at the instrument's (adjusted) maturity
//! in ACT/365F years. Money-market knots follow in closed form from simple
//! interest; each par-swap knot is solved with Brent's method so that the
//! swap's fixed leg plus final redemption reprices to par, with earlier
//! knots frozen and the last segment interpolating flat-forward through the
//! trial rate.

use crate::zero_curve::ZeroCurve;
use cds_core::errors::{Error, Result};
use cds_core::{ensure, Rate, Real, Time};
use cds_math::{flat_forward, solvers1d};
use cds_time::{BadDayConvention, Calendar, Date, DayCount, PaymentFrequency, Tenor};

/// Residual tolerance for the par-swap solve.
const SWAP_ACCURACY: Real = 1.0e-12;

/// Zero-rate search bracket for the swap solve.
const MIN_ZERO_RATE: Rate = -0.10;
const MAX_ZERO_RATE: Rate = 1.0;

/// A market quote the zero curve is bootstrapped from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveInstrument {
    /// A money-market deposit: simple interest from the base date to the
    /// tenor date.
    MoneyMarket {
        /// Quoted simple rate (decimal).
        rate: Rate,
        /// Deposit tenor.
        tenor: Tenor,
    },
    /// A fixed-for-floating par swap: periodic fixed payments, floating leg
    /// worth par.
    ParSwap {
        /// Quoted par rate (decimal).
        rate: Rate,
        /// Swap tenor.
        tenor: Tenor,
    },
}

impl CurveInstrument {
    /// Classify a quote the way standard curve inputs are tagged: tenors up
    /// to and including one year are money-market deposits, longer tenors
    /// are par swaps.
    pub fn from_quote(tenor: Tenor, rate: Rate) -> Self {
        if tenor.approx_years() <= 1.0 {
            CurveInstrument::MoneyMarket { rate, tenor }
        } else {
            CurveInstrument::ParSwap { rate, tenor }
        }
    }

    /// The instrument's tenor.
    pub fn tenor(&self) -> Tenor {
        match self {
            CurveInstrument::MoneyMarket { tenor, .. } => *tenor,
            CurveInstrument::ParSwap { tenor, .. } => *tenor,
        }
    }

    /// The quoted rate.
    pub fn rate(&self) -> Rate {
        match self {
            CurveInstrument::MoneyMarket { rate, .. } => *rate,
            CurveInstrument::ParSwap { rate, .. } => *rate,
        }
    }
}

/// Conventions for the bootstrap instruments.
#[derive(Debug, Clone, Copy)]
pub struct SwapConventions {
    /// Day count for money-market simple interest.
    pub money_market_day_count: DayCount,
    /// Day count for swap fixed-leg accrual.
    pub fixed_day_count: DayCount,
    /// Swap fixed-leg payment frequency.
    pub fixed_frequency: PaymentFrequency,
    /// Payment-date adjustment.
    pub bad_day: BadDayConvention,
}

impl Default for SwapConventions {
    /// ISDA standard-converter defaults: ACT/360 deposits, semi-annual
    /// 30/360 fixed legs, Modified Following.
    fn default() -> Self {
        Self {
            money_market_day_count: DayCount::Act360,
            fixed_day_count: DayCount::Thirty360,
            fixed_frequency: PaymentFrequency::SemiAnnual,
            bad_day: BadDayConvention::ModifiedFollowing,
        }
    }
}

/// Bootstrap a [`ZeroCurve`] from ordered instruments.
///
/// Instruments must produce strictly increasing knot times. A solver
/// failure surfaces as [`Error::CurveBootstrapFailed`] carrying the index
/// of the offending instrument.
pub fn bootstrap_zero_curve(
    base_date: Date,
    instruments: &[CurveInstrument],
    conventions: &SwapConventions,
    calendar: &dyn Calendar,
) -> Result<ZeroCurve> {
    ensure!(
        !instruments.is_empty(),
        "at least one curve instrument is required"
    );
    ensure!(
        instruments.iter().all(|i| i.rate().is_finite()),
        "instrument rates must be finite"
    );

    let mut times: Vec<Time> = Vec::with_capacity(instruments.len());
    let mut rates: Vec<Rate> = Vec::with_capacity(instruments.len());

    for (idx, instrument) in instruments.iter().enumerate() {
        match *instrument {
            CurveInstrument::MoneyMarket { rate, tenor } => {
                let end = calendar.adjust(base_date.add_tenor(tenor)?, conventions.bad_day);
                let tau = conventions.money_market_day_count.year_fraction(base_date, end);
                ensure!(tau > 0.0, "money-market tenor {tenor} has zero accrual");
                let df = 1.0 / (1.0 + rate * tau);
                ensure!(
                    df > 0.0,
                    "money-market rate {rate} at {tenor} implies a non-positive discount factor"
                );
                let t = DayCount::Act365Fixed.year_fraction(base_date, end);
                push_knot(&mut times, &mut rates, t, -df.ln() / t)?;
            }
            CurveInstrument::ParSwap { rate, tenor } => {
                let maturity = base_date.add_tenor(tenor)?;
                // Fixed-leg cash flows: (payment time, accrual fraction) on
                // unadjusted period dates, discounted at adjusted dates.
                let mut flows: Vec<(Time, Real)> = Vec::new();
                let step = conventions.fixed_frequency.months();
                let mut prev = base_date;
                for i in 1.. {
                    let d = base_date.add_months(i * step)?;
                    let d = if d >= maturity { maturity } else { d };
                    let pay = calendar.adjust(d, conventions.bad_day);
                    flows.push((
                        DayCount::Act365Fixed.year_fraction(base_date, pay),
                        conventions.fixed_day_count.year_fraction(prev, d),
                    ));
                    if d == maturity {
                        break;
                    }
                    prev = d;
                }
                let t_n = flows.last().map(|f| f.0).unwrap_or_default();

                // Solve the terminal zero rate against the par equation
                // sum(c tau_i DF_i) + DF_N = 1 on the partially-built curve.
                let mut trial_times = times.clone();
                trial_times.push(t_n);
                let mut trial_rates = rates.clone();
                trial_rates.push(0.0);
                let solved = solvers1d::brent(
                    |z: Real| {
                        *trial_rates.last_mut().expect("trial knot present") = z;
                        let df = |t: Time| -> Real {
                            (-flat_forward(&trial_times, &trial_rates, t) * t).exp()
                        };
                        let annuity: Real =
                            flows.iter().map(|&(t, tau)| rate * tau * df(t)).sum();
                        annuity + df(t_n) - 1.0
                    },
                    MIN_ZERO_RATE,
                    MAX_ZERO_RATE,
                    SWAP_ACCURACY,
                )
                .map_err(|e| Error::CurveBootstrapFailed {
                    knot: idx,
                    detail: e.to_string(),
                })?;
                push_knot(&mut times, &mut rates, t_n, solved)?;
            }
        }
    }

    ZeroCurve::new(base_date, times, rates)
}

fn push_knot(times: &mut Vec<Time>, rates: &mut Vec<Rate>, t: Time, r: Rate) -> Result<()> {
    ensure!(
        times.last().map_or(t > 0.0, |&last| t > last),
        "instrument tenors must be strictly increasing (knot at t = {t})"
    );
    times.push(t);
    rates.push(r);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use cds_time::WeekendsOnly;

    fn base() -> Date {
        Date::from_ymd(2022, 8, 31).unwrap()
    }

    fn tenor(s: &str) -> Tenor {
        s.parse().unwrap()
    }

    #[test]
    fn single_deposit_reprices() {
        let instruments = [CurveInstrument::MoneyMarket {
            rate: 0.03,
            tenor: tenor("6M"),
        }];
        let curve = bootstrap_zero_curve(
            base(),
            &instruments,
            &SwapConventions::default(),
            &WeekendsOnly,
        )
        .unwrap();

        let end = WeekendsOnly.adjust(
            base().add_tenor(tenor("6M")).unwrap(),
            BadDayConvention::ModifiedFollowing,
        );
        let tau = DayCount::Act360.year_fraction(base(), end);
        let implied = (1.0 / curve.discount_date(end) - 1.0) / tau;
        assert_abs_diff_eq!(implied, 0.03, epsilon = 1e-12);
    }

    #[test]
    fn swaps_reprice_to_par() {
        let instruments: Vec<CurveInstrument> = [
            ("3M", 0.006419),
            ("6M", 0.011650),
            ("1Y", 0.017617),
            ("2Y", 0.024417),
            ("5Y", 0.028583),
            ("10Y", 0.030417),
        ]
        .iter()
        .map(|&(t, r)| CurveInstrument::from_quote(tenor(t), r))
        .collect();
        let conventions = SwapConventions::default();
        let curve =
            bootstrap_zero_curve(base(), &instruments, &conventions, &WeekendsOnly).unwrap();

        // Re-evaluate the par equation of every swap on the final curve.
        for instrument in &instruments {
            if let CurveInstrument::ParSwap { rate, tenor } = *instrument {
                let maturity = base().add_tenor(tenor).unwrap();
                let step = conventions.fixed_frequency.months();
                let mut residual = -1.0;
                let mut prev = base();
                for i in 1.. {
                    let d = base().add_months(i * step).unwrap().min(maturity);
                    let pay = WeekendsOnly.adjust(d, conventions.bad_day);
                    let tau = conventions.fixed_day_count.year_fraction(prev, d);
                    residual += rate * tau * curve.discount_date(pay);
                    if d == maturity {
                        residual += curve.discount_date(pay);
                        break;
                    }
                    prev = d;
                }
                assert!(
                    residual.abs() < 1e-10,
                    "swap {tenor} residual {residual:.3e}"
                );
            }
        }
    }

    #[test]
    fn knots_strictly_increasing() {
        let instruments: Vec<CurveInstrument> = ["1M", "3M", "6M", "1Y", "2Y", "3Y"]
            .iter()
            .map(|&t| CurveInstrument::from_quote(tenor(t), 0.02))
            .collect();
        let curve = bootstrap_zero_curve(
            base(),
            &instruments,
            &SwapConventions::default(),
            &WeekendsOnly,
        )
        .unwrap();
        assert!(curve.times().windows(2).all(|w| w[0] < w[1]));
        assert_eq!(curve.times().len(), instruments.len());
    }

    #[test]
    fn unordered_tenors_rejected() {
        let instruments = [
            CurveInstrument::MoneyMarket {
                rate: 0.02,
                tenor: tenor("6M"),
            },
            CurveInstrument::MoneyMarket {
                rate: 0.02,
                tenor: tenor("3M"),
            },
        ];
        assert!(matches!(
            bootstrap_zero_curve(
                base(),
                &instruments,
                &SwapConventions::default(),
                &WeekendsOnly
            ),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn empty_input_rejected() {
        assert!(bootstrap_zero_curve(
            base(),
            &[],
            &SwapConventions::default(),
            &WeekendsOnly
        )
        .is_err());
    }

    #[test]
    fn classification_cutoff_is_one_year() {
        assert!(matches!(
            CurveInstrument::from_quote(tenor("1Y"), 0.02),
            CurveInstrument::MoneyMarket { .. }
        ));
        assert!(matches!(
            CurveInstrument::from_quote(tenor("2Y"), 0.02),
            CurveInstrument::ParSwap { .. }
        ));
        assert!(matches!(
            CurveInstrument::from_quote(tenor("18M"), 0.02),
            CurveInstrument::ParSwap { .. }
        ));
    }
}
