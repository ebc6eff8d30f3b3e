//! Top-level pricing assembly.

use crate::contingent_leg::contingent_leg_pv;
use crate::contract::{CdsContract, CdsConventions};
use crate::credit_bootstrap::bootstrap_credit_curve;
use crate::fee_leg::fee_leg_pv;
use crate::result::CdsPricingResult;
use cds_core::errors::{Error, Result};
use cds_core::{ensure, Rate, Real, BASIS_POINT};
use cds_curves::{bootstrap_zero_curve, CurveInstrument, SwapConventions};
use cds_curves::{CreditCurve, ZeroCurve};
use cds_math::solvers1d;
use cds_time::{Calendar, CdsSchedule, Date, Tenor};

/// Par-spread search bracket for the upfront inversion.
const SPREAD_MIN: Rate = 1.0e-6;
const SPREAD_MAX: Rate = 10.0;

/// Interval tolerance (in spread) for the upfront inversion.
const SPREAD_ACCURACY: Real = 1.0e-12;

/// A CDS pricer: an immutable snapshot of market data (zero and credit
/// curves) plus conventions. Every [`price`](CdsPricer::price) call is
/// pure; risk numbers come from bump-and-reprice on logical curve copies.
#[derive(Debug)]
pub struct CdsPricer {
    zero: ZeroCurve,
    credit: CreditCurve,
    conventions: CdsConventions,
    calendar: Box<dyn Calendar>,
}

impl CdsPricer {
    /// Assemble a pricer from already-built curves.
    pub fn new(
        zero: ZeroCurve,
        credit: CreditCurve,
        conventions: CdsConventions,
        calendar: Box<dyn Calendar>,
    ) -> Result<Self> {
        ensure!(
            zero.base_date() == credit.base_date(),
            "zero and credit curves must share a base date ({} vs {})",
            zero.base_date(),
            credit.base_date()
        );
        Ok(Self {
            zero,
            credit,
            conventions,
            calendar,
        })
    }

    /// Bootstrap both curves from market quotes: swap-curve tenors/rates
    /// plus a term structure of par CDS spreads.
    pub fn from_market(
        trade_date: Date,
        swap_tenors: &[Tenor],
        swap_rates: &[Rate],
        cds_quotes: &[(Date, Rate)],
        recovery_rate: Real,
        calendar: Box<dyn Calendar>,
    ) -> Result<Self> {
        ensure!(
            swap_tenors.len() == swap_rates.len(),
            "swap tenors and rates differ in length ({} vs {})",
            swap_tenors.len(),
            swap_rates.len()
        );
        let instruments: Vec<CurveInstrument> = swap_tenors
            .iter()
            .zip(swap_rates.iter())
            .map(|(&tenor, &rate)| CurveInstrument::from_quote(tenor, rate))
            .collect();
        let zero = bootstrap_zero_curve(
            trade_date,
            &instruments,
            &SwapConventions::default(),
            &*calendar,
        )?;
        let conventions = CdsConventions::default();
        let credit =
            bootstrap_credit_curve(&zero, cds_quotes, recovery_rate, &*calendar, &conventions)?;
        Self::new(zero, credit, conventions, calendar)
    }

    /// Bootstrap the zero curve and build a flat credit curve from a
    /// single traded par spread: the one hazard rate that prices a CDS of
    /// the given maturity at zero upfront for its own spread.
    pub fn from_par_spread(
        trade_date: Date,
        swap_tenors: &[Tenor],
        swap_rates: &[Rate],
        maturity: Date,
        par_spread: Rate,
        recovery_rate: Real,
        calendar: Box<dyn Calendar>,
    ) -> Result<Self> {
        Self::from_market(
            trade_date,
            swap_tenors,
            swap_rates,
            &[(maturity, par_spread)],
            recovery_rate,
            calendar,
        )
    }

    /// The bootstrapped discount curve.
    pub fn zero_curve(&self) -> &ZeroCurve {
        &self.zero
    }

    /// The bootstrapped credit curve.
    pub fn credit_curve(&self) -> &CreditCurve {
        &self.credit
    }

    /// Price a contract against the stored market snapshot.
    ///
    /// Produces dirty/clean PV, accrued, par spread, RPV01, and the CS01 /
    /// DV01 sensitivities from +1bp parallel bumps of the hazard and zero
    /// curves respectively. PVs are signed from the contract's side.
    pub fn price(&self, contract: &CdsContract) -> Result<CdsPricingResult> {
        ensure!(
            contract.trade_date == self.zero.base_date(),
            "contract trade date {} does not match the curve base date {}",
            contract.trade_date,
            self.zero.base_date()
        );
        ensure!(
            contract.notional > 0.0,
            "notional must be positive, got {}",
            contract.notional
        );
        ensure!(
            (0.0..1.0).contains(&contract.recovery_rate),
            "recovery rate must lie in [0, 1), got {}",
            contract.recovery_rate
        );

        let schedule = CdsSchedule::generate(
            contract.accrual_start,
            contract.maturity,
            contract.frequency,
            contract.accrual_day_count,
            contract.bad_day,
            &*self.calendar,
        )?;

        let (fee, contingent) = self.leg_pvs(contract, &schedule, &self.zero, &self.credit);
        let rpv01 = fee_leg_pv(
            contract.step_in_date,
            &schedule,
            1.0,
            &self.zero,
            &self.credit,
            1.0,
            contract.pay_accrued_on_default,
        );
        let pv_dirty = contingent - fee;

        let accrued_interest = match schedule.period_containing(contract.step_in_date) {
            Some(period) => {
                contract.notional
                    * contract.coupon_rate
                    * contract
                        .accrual_day_count
                        .year_fraction(period.accrual_start, contract.step_in_date)
            }
            None => 0.0,
        };
        let pv_clean = pv_dirty + accrued_interest;
        let par_spread = contingent / (rpv01 * contract.notional);

        let credit_up = self.credit.bumped(BASIS_POINT);
        let (fee_c, cont_c) = self.leg_pvs(contract, &schedule, &self.zero, &credit_up);
        let cs01 = (cont_c - fee_c) - pv_dirty;

        let zero_up = self.zero.bumped(BASIS_POINT);
        let (fee_z, cont_z) = self.leg_pvs(contract, &schedule, &zero_up, &self.credit);
        let dv01 = (cont_z - fee_z) - pv_dirty;

        let side = if contract.is_buy_protection { 1.0 } else { -1.0 };
        let result = CdsPricingResult {
            pv_dirty: side * pv_dirty,
            pv_clean: side * pv_clean,
            accrued_interest: side * accrued_interest,
            par_spread,
            rpv01,
            fee_leg_pv: fee,
            contingent_leg_pv: contingent,
            cs01: side * cs01,
            dv01: side * dv01,
        };

        let finite = result.pv_dirty.is_finite()
            && result.pv_clean.is_finite()
            && result.par_spread.is_finite()
            && result.rpv01.is_finite()
            && result.cs01.is_finite()
            && result.dv01.is_finite();
        if !finite {
            return Err(Error::NumericalInstability(
                "pricing produced a non-finite result".into(),
            ));
        }
        Ok(result)
    }

    /// Upfront charge for a contract quoted at `par_spread` but paying
    /// `coupon_bps`: builds a fresh flat credit curve from the spread and
    /// returns `(dirty, clean, accrued)` from the buyer's side.
    pub fn upfront_from_spread(
        &self,
        maturity: Date,
        par_spread: Rate,
        coupon_bps: u32,
        notional: Real,
        recovery_rate: Real,
    ) -> Result<(Real, Real, Real)> {
        let credit = bootstrap_credit_curve(
            &self.zero,
            &[(maturity, par_spread)],
            recovery_rate,
            &*self.calendar,
            &self.conventions,
        )?;
        let contract = CdsContract::with_conventions(
            self.zero.base_date(),
            maturity,
            coupon_bps,
            notional,
            recovery_rate,
            true,
            &*self.calendar,
            &self.conventions,
        )?;
        let schedule = CdsSchedule::generate(
            contract.accrual_start,
            contract.maturity,
            contract.frequency,
            contract.accrual_day_count,
            contract.bad_day,
            &*self.calendar,
        )?;
        let (fee, contingent) = self.leg_pvs(&contract, &schedule, &self.zero, &credit);
        let dirty = contingent - fee;
        let accrued = match schedule.period_containing(contract.step_in_date) {
            Some(period) => {
                notional
                    * contract.coupon_rate
                    * contract
                        .accrual_day_count
                        .year_fraction(period.accrual_start, contract.step_in_date)
            }
            None => 0.0,
        };
        Ok((dirty, dirty + accrued, accrued))
    }

    /// Invert [`upfront_from_spread`](Self::upfront_from_spread): find the
    /// par spread whose dirty upfront matches `target_upfront`.
    pub fn spread_from_upfront(
        &self,
        maturity: Date,
        target_upfront: Real,
        coupon_bps: u32,
        notional: Real,
        recovery_rate: Real,
    ) -> Result<Rate> {
        ensure!(notional > 0.0, "notional must be positive, got {notional}");
        let objective = |spread: Rate| -> Real {
            match self.upfront_from_spread(maturity, spread, coupon_bps, notional, recovery_rate) {
                Ok((dirty, _, _)) => (dirty - target_upfront) / notional,
                Err(_) => f64::NAN,
            }
        };
        // Extreme spreads can fall outside the hazard bracket; shrink the
        // upper end until the objective is defined there.
        let mut hi = SPREAD_MAX;
        while !objective(hi).is_finite() && hi > 1.0e-3 {
            hi *= 0.5;
        }
        solvers1d::brent(objective, SPREAD_MIN, hi, SPREAD_ACCURACY)
    }
}

impl CdsPricer {
    fn leg_pvs(
        &self,
        contract: &CdsContract,
        schedule: &CdsSchedule,
        zero: &ZeroCurve,
        credit: &CreditCurve,
    ) -> (Real, Real) {
        let fee = fee_leg_pv(
            contract.step_in_date,
            schedule,
            contract.coupon_rate,
            zero,
            credit,
            contract.notional,
            contract.pay_accrued_on_default,
        );
        let contingent = contingent_leg_pv(
            contract.step_in_date,
            contract.protection_start(),
            contract.maturity,
            zero,
            credit,
            contract.recovery_rate,
            contract.notional,
        );
        (fee, contingent)
    }
}
