//! CDS trade terms and standard conventions.

use cds_core::errors::Result;
use cds_core::{ensure, Rate, Real};
use cds_time::{BadDayConvention, Calendar, Date, DayCount, PaymentFrequency, IMM};

/// The standard recovery-rate assumption for senior unsecured CDS.
pub const STANDARD_RECOVERY: Real = 0.40;

/// Market conventions of a standard CDS.
#[derive(Debug, Clone, Copy)]
pub struct CdsConventions {
    /// Premium payment frequency.
    pub frequency: PaymentFrequency,
    /// Premium accrual day count.
    pub accrual_day_count: DayCount,
    /// Payment-date adjustment.
    pub bad_day: BadDayConvention,
    /// Whether accrued premium is paid at default.
    pub pay_accrued_on_default: bool,
    /// Whether protection covers the effective date itself.
    pub protection_from_start_date: bool,
}

impl Default for CdsConventions {
    /// ISDA standard: quarterly, ACT/360, Modified Following, accrued paid
    /// at default, protection from the start date.
    fn default() -> Self {
        Self {
            frequency: PaymentFrequency::Quarterly,
            accrual_day_count: DayCount::Act360,
            bad_day: BadDayConvention::ModifiedFollowing,
            pay_accrued_on_default: true,
            protection_from_start_date: true,
        }
    }
}

/// The terms of a single CDS trade.
///
/// `coupon_rate` is stored as a decimal. The public constructors take the
/// coupon in **integer basis points** (the market quoting unit, e.g. 100
/// or 500) and normalize here; this is the only place the two scales meet.
#[derive(Debug, Clone, Copy)]
pub struct CdsContract {
    /// Trade date.
    pub trade_date: Date,
    /// Step-in date: trade date + 1 business day.
    pub step_in_date: Date,
    /// Accrual start: the IMM date on or before the trade date.
    pub accrual_start: Date,
    /// Scheduled maturity (an IMM date for standard contracts).
    pub maturity: Date,
    /// Contractual running coupon as a decimal.
    pub coupon_rate: Rate,
    /// Contract notional (positive).
    pub notional: Real,
    /// Assumed recovery rate in `[0, 1)`.
    pub recovery_rate: Real,
    /// Whether accrued premium is paid at default.
    pub pay_accrued_on_default: bool,
    /// Whether protection covers the effective date itself.
    pub protection_from_start_date: bool,
    /// `true` for the protection buyer, `false` for the seller.
    pub is_buy_protection: bool,
    /// Premium payment frequency.
    pub frequency: PaymentFrequency,
    /// Premium accrual day count.
    pub accrual_day_count: DayCount,
    /// Payment-date adjustment.
    pub bad_day: BadDayConvention,
}

impl CdsContract {
    /// Build a standard contract: step-in at trade + 1 business day,
    /// accrual from the previous IMM date, ISDA default conventions.
    ///
    /// `coupon_bps` is the running coupon in basis points (100 = 1%).
    pub fn standard(
        trade_date: Date,
        maturity: Date,
        coupon_bps: u32,
        notional: Real,
        recovery_rate: Real,
        is_buy_protection: bool,
        calendar: &dyn Calendar,
    ) -> Result<Self> {
        Self::with_conventions(
            trade_date,
            maturity,
            coupon_bps,
            notional,
            recovery_rate,
            is_buy_protection,
            calendar,
            &CdsConventions::default(),
        )
    }

    /// Build a contract with explicit conventions.
    #[allow(clippy::too_many_arguments)]
    pub fn with_conventions(
        trade_date: Date,
        maturity: Date,
        coupon_bps: u32,
        notional: Real,
        recovery_rate: Real,
        is_buy_protection: bool,
        calendar: &dyn Calendar,
        conventions: &CdsConventions,
    ) -> Result<Self> {
        ensure!(notional > 0.0, "notional must be positive, got {notional}");
        ensure!(
            (0.0..1.0).contains(&recovery_rate),
            "recovery rate must lie in [0, 1), got {recovery_rate}"
        );
        ensure!(
            maturity > trade_date,
            "maturity {maturity} must be after trade date {trade_date}"
        );
        Ok(Self {
            trade_date,
            step_in_date: calendar.add_business_days(trade_date, 1),
            accrual_start: IMM::previous(trade_date),
            maturity,
            coupon_rate: coupon_bps as Real / 10_000.0,
            notional,
            recovery_rate,
            pay_accrued_on_default: conventions.pay_accrued_on_default,
            protection_from_start_date: conventions.protection_from_start_date,
            is_buy_protection,
            frequency: conventions.frequency,
            accrual_day_count: conventions.accrual_day_count,
            bad_day: conventions.bad_day,
        })
    }

    /// First date of the protection window.
    pub fn protection_start(&self) -> Date {
        if self.protection_from_start_date {
            self.step_in_date
        } else {
            self.step_in_date + 1
        }
    }
}
