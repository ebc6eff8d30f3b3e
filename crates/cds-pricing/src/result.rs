//! Pricing output record.

use cds_core::{Rate, Real};

/// The outputs of a single CDS valuation.
///
/// Monetary amounts are in the currency of the contract notional and are
/// signed from the side of the trade (`is_buy_protection`); `par_spread`
/// and `rpv01` are side-independent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CdsPricingResult {
    /// Dirty present value: contingent leg minus full fee leg.
    pub pv_dirty: Real,
    /// Clean present value: dirty plus accrued interest.
    pub pv_clean: Real,
    /// Premium accrued from the running period start to the step-in date.
    pub accrued_interest: Real,
    /// Coupon rate that would price the contract to zero dirty PV.
    pub par_spread: Rate,
    /// Risky annuity: fee leg PV per unit coupon per unit notional.
    pub rpv01: Real,
    /// Fee leg PV at the contractual coupon (unsigned).
    pub fee_leg_pv: Real,
    /// Contingent leg PV (unsigned).
    pub contingent_leg_pv: Real,
    /// PV change for a +1bp parallel shift of the hazard curve.
    pub cs01: Real,
    /// PV change for a +1bp parallel shift of the zero curve.
    pub dv01: Real,
}
