//! `Calendar` trait and concrete calendar implementations.
//!
//! A calendar knows which dates are business days and can adjust dates
//! according to a [`BadDayConvention`]. Calendars are immutable after
//! construction and are passed around by shared reference.

use crate::bad_day_convention::BadDayConvention;
use crate::date::Date;

/// A financial calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Weekends Only"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a business day in this calendar.
    fn is_business_day(&self, date: Date) -> bool;

    /// Return `true` if `date` is a holiday (non-business) day.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` falls on a weekend (Saturday or Sunday).
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Adjust `date` according to the given bad-day convention.
    ///
    /// Rolls day by day in the convention's direction; the modified
    /// conventions turn around and roll the other way when the first pass
    /// leaves the calendar month.
    fn adjust(&self, date: Date, convention: BadDayConvention) -> Date {
        let direction = match convention {
            BadDayConvention::Unadjusted => return date,
            BadDayConvention::Following | BadDayConvention::ModifiedFollowing => 1,
            BadDayConvention::Preceding | BadDayConvention::ModifiedPreceding => -1,
        };
        let mut rolled = date;
        while !self.is_business_day(rolled) {
            rolled = rolled + direction;
        }
        let modified = matches!(
            convention,
            BadDayConvention::ModifiedFollowing | BadDayConvention::ModifiedPreceding
        );
        if modified && rolled.month() != date.month() {
            rolled = date;
            while !self.is_business_day(rolled) {
                rolled = rolled - direction;
            }
        }
        rolled
    }

    /// Advance `date` by `count` business days (negative goes backward).
    fn add_business_days(&self, date: Date, count: i32) -> Date {
        let direction = count.signum();
        let mut current = date;
        for _ in 0..count.abs() {
            current = current + direction;
            while !self.is_business_day(current) {
                current = current + direction;
            }
        }
        current
    }
}

/// A calendar with Saturday/Sunday weekends and no further holidays.
///
/// The default calendar for standard CDS conventions.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date)
    }
}

/// A calendar carrying an explicit holiday list on top of the Sat/Sun
/// weekend rule.
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    name: String,
    /// Sorted, deduplicated holiday dates.
    holidays: Vec<Date>,
}

impl HolidayCalendar {
    /// Create a calendar from a holiday list. The list is sorted and
    /// deduplicated; weekend dates in it are harmless.
    pub fn new(name: impl Into<String>, mut holidays: Vec<Date>) -> Self {
        holidays.sort_unstable();
        holidays.dedup();
        Self {
            name: name.into(),
            holidays,
        }
    }

    /// The holiday dates (sorted).
    pub fn holidays(&self) -> &[Date] {
        &self.holidays
    }
}

impl Calendar for HolidayCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && self.holidays.binary_search(&date).is_err()
    }
}
