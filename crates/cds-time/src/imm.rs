//! CDS IMM date utilities.
//!
//! Credit IMM dates are the 20th of March, June, September, and December,
//! the standard CDS roll and maturity dates. (These are distinct from the
//! futures IMM dates, which fall on third Wednesdays.)

use crate::date::Date;
use crate::tenor::Tenor;
use cds_core::errors::Result;

/// The IMM months: March, June, September, December.
const IMM_MONTHS: [u8; 4] = [3, 6, 9, 12];

/// CDS IMM date utilities.
pub struct IMM;

impl IMM {
    /// Return `true` if `date` is a CDS IMM date (the 20th of an IMM month).
    pub fn is_imm_date(date: Date) -> bool {
        date.day_of_month() == 20 && IMM_MONTHS.contains(&date.month())
    }

    /// Return the smallest IMM date strictly greater than `date`.
    pub fn next(date: Date) -> Date {
        let y = date.year();
        for m in IMM_MONTHS {
            let candidate = Date::from_ymd(y, m, 20).expect("IMM date in valid range");
            if candidate > date {
                return candidate;
            }
        }
        Date::from_ymd(y + 1, 3, 20).expect("IMM date in valid range")
    }

    /// Return the smallest IMM date on or after `date`.
    pub fn next_or_same(date: Date) -> Date {
        if Self::is_imm_date(date) {
            date
        } else {
            Self::next(date)
        }
    }

    /// Return the greatest IMM date less than or equal to `date`.
    ///
    /// Anchors the CDS accrual start: `previous(trade_date)` is the running
    /// coupon period's start. When `date` is itself an IMM date it is
    /// returned unchanged.
    pub fn previous(date: Date) -> Date {
        let y = date.year();
        for m in IMM_MONTHS.iter().rev() {
            let candidate = Date::from_ymd(y, *m, 20).expect("IMM date in valid range");
            if candidate <= date {
                return candidate;
            }
        }
        Date::from_ymd(y - 1, 12, 20).expect("IMM date in valid range")
    }

    /// Standard CDS maturity for a quoted tenor: the first IMM date on or
    /// after `trade_date + tenor`.
    pub fn cds_maturity(trade_date: Date, tenor: Tenor) -> Result<Date> {
        Ok(Self::next_or_same(trade_date.add_tenor(tenor)?))
    }
}
