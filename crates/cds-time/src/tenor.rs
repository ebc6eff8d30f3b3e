//! `Tenor` — a market time span such as `"1M"` or `"5Y"`.

use cds_core::errors::{Error, Result};
use std::str::FromStr;

/// A unit of calendar time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    /// Calendar days.
    Days,
    /// Calendar weeks (7 days).
    Weeks,
    /// Calendar months.
    Months,
    /// Calendar years (12 months).
    Years,
}

/// A time span made up of an integer length and a [`TimeUnit`].
///
/// Adding a tenor to a [`Date`](crate::Date) is pure calendar arithmetic;
/// business-day adjustment, when wanted, is applied afterwards through a
/// [`Calendar`](crate::Calendar).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tenor {
    /// Number of units.
    pub length: i32,
    /// The unit of time.
    pub unit: TimeUnit,
}

impl Tenor {
    /// Create a new tenor.
    pub fn new(length: i32, unit: TimeUnit) -> Self {
        Self { length, unit }
    }

    /// Approximate length in years, used only for ordering and for the
    /// money-market/swap classification cutoff (1Y).
    pub fn approx_years(&self) -> f64 {
        match self.unit {
            TimeUnit::Days => self.length as f64 / 365.0,
            TimeUnit::Weeks => self.length as f64 * 7.0 / 365.0,
            TimeUnit::Months => self.length as f64 / 12.0,
            TimeUnit::Years => self.length as f64,
        }
    }
}

impl FromStr for Tenor {
    type Err = Error;

    /// Parse strings like `"1M"`, `"5Y"`, `"30D"`, `"2w"`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let last = s
            .chars()
            .last()
            .ok_or_else(|| Error::InvalidInput("empty tenor string".into()))?;
        let digits = &s[..s.len() - last.len_utf8()];
        let length: i32 = digits
            .parse()
            .map_err(|_| Error::InvalidInput(format!("unparseable tenor \"{s}\"")))?;
        let unit = match last.to_ascii_uppercase() {
            'D' => TimeUnit::Days,
            'W' => TimeUnit::Weeks,
            'M' => TimeUnit::Months,
            'Y' => TimeUnit::Years,
            _ => {
                return Err(Error::InvalidInput(format!(
                    "unparseable tenor \"{s}\" (unit must be D, W, M, or Y)"
                )))
            }
        };
        Ok(Tenor { length, unit })
    }
}

impl std::fmt::Display for Tenor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let abbr = match self.unit {
            TimeUnit::Days => "D",
            TimeUnit::Weeks => "W",
            TimeUnit::Months => "M",
            TimeUnit::Years => "Y",
        };
        write!(f, "{}{abbr}", self.length)
    }
}

impl std::fmt::Debug for Tenor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tenor({self})")
    }
}
