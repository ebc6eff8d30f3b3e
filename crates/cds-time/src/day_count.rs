//! Day-count conventions.
//!
//! The model prices with a closed set of four conventions, so they live in
//! one enum with pure `day_count`/`year_fraction` functions. Negative day
//! differences produce negative year fractions.

use crate::date::Date;
use cds_core::{Real, Time};

/// A convention for counting the fraction of a year between two dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DayCount {
    /// Actual/360: actual days over 360. The CDS accrual standard.
    #[default]
    Act360,
    /// Actual/365 (Fixed): actual days over 365. The curve-time standard.
    Act365Fixed,
    /// 30/360 (US bond basis) with the ISDA day-clamping rules.
    Thirty360,
    /// 30E/360 (European): both days capped at 30.
    Thirty360European,
}

impl DayCount {
    /// Human-readable name of the convention.
    pub fn name(&self) -> &'static str {
        match self {
            DayCount::Act360 => "Actual/360",
            DayCount::Act365Fixed => "Actual/365 (Fixed)",
            DayCount::Thirty360 => "30/360",
            DayCount::Thirty360European => "30E/360",
        }
    }

    /// Number of days between `d1` and `d2` according to this convention.
    pub fn day_count(&self, d1: Date, d2: Date) -> i64 {
        match self {
            DayCount::Act360 | DayCount::Act365Fixed => (d2 - d1) as i64,
            DayCount::Thirty360 => {
                let (y1, m1, mut dd1) = (d1.year() as i64, d1.month() as i64, d1.day_of_month() as i64);
                let (y2, m2, mut dd2) = (d2.year() as i64, d2.month() as i64, d2.day_of_month() as i64);
                // ISDA 30/360: D1 = 30 if D1 = 31; D2 = 30 if D2 = 31 and D1 is 30 or 31.
                if dd1 == 31 {
                    dd1 = 30;
                }
                if dd2 == 31 && dd1 == 30 {
                    dd2 = 30;
                }
                360 * (y2 - y1) + 30 * (m2 - m1) + (dd2 - dd1)
            }
            DayCount::Thirty360European => {
                let (y1, m1, dd1) = (d1.year() as i64, d1.month() as i64, d1.day_of_month().min(30) as i64);
                let (y2, m2, dd2) = (d2.year() as i64, d2.month() as i64, d2.day_of_month().min(30) as i64);
                360 * (y2 - y1) + 30 * (m2 - m1) + (dd2 - dd1)
            }
        }
    }

    /// Fraction of a year between `d1` and `d2`.
    pub fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        let denominator: Real = match self {
            DayCount::Act365Fixed => 365.0,
            _ => 360.0,
        };
        self.day_count(d1, d2) as Real / denominator
    }
}

impl std::fmt::Display for DayCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn act360_counts_actual_days() {
        // Feb 2020 is a leap month: 29 actual days.
        let yf = DayCount::Act360.year_fraction(date(2020, 2, 1), date(2020, 3, 1));
        assert_abs_diff_eq!(yf, 29.0 / 360.0, epsilon = 1e-15);
    }

    #[test]
    fn thirty360_ignores_leap_years() {
        let yf = DayCount::Thirty360.year_fraction(date(2020, 2, 1), date(2020, 3, 1));
        assert_abs_diff_eq!(yf, 30.0 / 360.0, epsilon = 1e-15);
        let yf_non_leap = DayCount::Thirty360.year_fraction(date(2021, 2, 1), date(2021, 3, 1));
        assert_abs_diff_eq!(yf, yf_non_leap, epsilon = 1e-15);
    }

    #[test]
    fn act365_fixed_full_year() {
        let yf = DayCount::Act365Fixed.year_fraction(date(2023, 1, 1), date(2024, 1, 1));
        assert_abs_diff_eq!(yf, 1.0, epsilon = 1e-15);
    }

    #[test]
    fn thirty360_day_clamping() {
        // D1 = 31 -> 30.
        assert_eq!(DayCount::Thirty360.day_count(date(2023, 1, 31), date(2023, 2, 28)), 28);
        // D2 = 31 clamps only when D1 is 30/31.
        assert_eq!(DayCount::Thirty360.day_count(date(2023, 1, 31), date(2023, 3, 31)), 60);
        assert_eq!(DayCount::Thirty360.day_count(date(2023, 1, 15), date(2023, 1, 31)), 16);
    }

    #[test]
    fn thirty360_european_caps_both_ends() {
        assert_eq!(
            DayCount::Thirty360European.day_count(date(2023, 1, 15), date(2023, 1, 31)),
            15
        );
        assert_eq!(
            DayCount::Thirty360European.day_count(date(2023, 1, 31), date(2023, 3, 31)),
            60
        );
    }

    #[test]
    fn reversed_dates_are_negative() {
        let d1 = date(2023, 6, 1);
        let d2 = date(2023, 1, 1);
        assert!(DayCount::Act360.year_fraction(d1, d2) < 0.0);
        assert!(DayCount::Thirty360.year_fraction(d1, d2) < 0.0);
    }
}
