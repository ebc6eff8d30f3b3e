//! `Date` — a calendar day stored as a serial number of days.
//!
//! Serial 1 corresponds to January 1, 1900; the valid range runs through
//! December 31, 2199. A serial representation keeps day arithmetic and
//! day-count differences branch-free; month arithmetic goes through the
//! (year, month, day) decomposition with end-of-month clamping.

use crate::tenor::{Tenor, TimeUnit};
use crate::weekday::Weekday;
use cds_core::errors::{Error, Result};

/// How to read an ambiguous `xx/yy/zzzz` date string.
///
/// ISO `YYYY-MM-DD` strings are unambiguous and accepted under either
/// format. There is deliberately no silent default inside the parser itself;
/// callers that want the conventional US reading pass
/// [`DateFormat::MonthDayYear`] (which is also `DateFormat::default()`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateFormat {
    /// `MM/DD/YYYY` (e.g. `08/31/2022`).
    #[default]
    MonthDayYear,
    /// `DD/MM/YYYY` (e.g. `31/08/2022`).
    DayMonthYear,
}

/// A calendar date represented as a day serial.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Date(i32);

impl Date {
    /// Minimum valid date: January 1, 1900 (serial 1).
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────

    /// Create a date from a serial number.
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial < Self::MIN.0 || serial > Self::MAX.0 {
            return Err(Error::DateOutOfRange(format!(
                "serial {serial} outside [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(Date(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1900..=2199).contains(&year) {
            return Err(Error::InvalidInput(format!(
                "year {year} out of range [1900, 2199]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidInput(format!(
                "month {month} out of range [1, 12]"
            )));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::InvalidInput(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Parse a date string.
    ///
    /// `YYYY-MM-DD` is accepted under either format; `xx/yy/zzzz` strings
    /// are read according to `format`.
    pub fn parse(text: &str, format: DateFormat) -> Result<Self> {
        let text = text.trim();
        let number = |part: &str| -> Result<u32> {
            part.parse::<u32>()
                .map_err(|_| Error::InvalidInput(format!("unparseable date \"{text}\"")))
        };

        if let Some((first, rest)) = text.split_once('-') {
            // ISO: year leads, unambiguous.
            let (second, third) = rest
                .split_once('-')
                .ok_or_else(|| Error::InvalidInput(format!("unparseable date \"{text}\"")))?;
            let (y, m, d) = (number(first)?, number(second)?, number(third)?);
            return Self::from_ymd(y as u16, m as u8, d as u8);
        }

        let mut parts = text.split('/');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(a), Some(b), Some(c), None) => {
                let (a, b, c) = (number(a)?, number(b)?, number(c)?);
                let (m, d) = match format {
                    DateFormat::MonthDayYear => (a, b),
                    DateFormat::DayMonthYear => (b, a),
                };
                Self::from_ymd(c as u16, m as u8, d as u8)
            }
            _ => Err(Error::InvalidInput(format!("unparseable date \"{text}\""))),
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 1 (1900-01-01) is a Monday.
        let w = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, days_in_month(y, m)))
    }

    // ── Arithmetic ───────────────────────────────────────────────────────

    /// Advance by `n` calendar days (negative `n` goes backward).
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0 + n;
        if serial < Self::MIN.0 || serial > Self::MAX.0 {
            return Err(Error::DateOutOfRange(format!(
                "day arithmetic left the valid range (serial {serial})"
            )));
        }
        Ok(Date(serial))
    }

    /// Advance by `n` months, preserving the day-of-month and clamping to
    /// the target month's length (Jan 31 + 1M = Feb 28/29).
    pub fn add_months(self, n: i32) -> Result<Self> {
        let (y, m, d) = ymd_from_serial(self.0);
        let total = m as i32 + n;
        let carry = total.div_euclid(12);
        let rem = total.rem_euclid(12);
        let (new_m, extra_y) = if rem == 0 { (12u8, carry - 1) } else { (rem as u8, carry) };
        let new_y = y as i32 + extra_y;
        if !(1900..=2199).contains(&new_y) {
            return Err(Error::DateOutOfRange(format!(
                "month arithmetic left the valid range (year {new_y})"
            )));
        }
        let new_y = new_y as u16;
        let new_d = d.min(days_in_month(new_y, new_m));
        Ok(Date(serial_from_ymd(new_y, new_m, new_d)))
    }

    /// Advance by `n` years (equivalent to `12 n` months).
    pub fn add_years(self, n: i32) -> Result<Self> {
        self.add_months(n * 12)
    }

    /// Advance by a tenor. Pure calendar arithmetic; no business-day
    /// adjustment is applied.
    pub fn add_tenor(self, tenor: Tenor) -> Result<Self> {
        match tenor.unit {
            TimeUnit::Days => self.add_days(tenor.length),
            TimeUnit::Weeks => self.add_days(tenor.length * 7),
            TimeUnit::Months => self.add_months(tenor.length),
            TimeUnit::Years => self.add_years(tenor.length),
        }
    }

    /// Number of calendar days from `self` to `other` (positive when
    /// `other` is later).
    pub fn days_until(self, other: Date) -> i32 {
        other.0 - self.0
    }
}

// ── Operators ────────────────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display ──────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

// ── Internal helpers ─────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Convert (year, month, day) to a day serial (serial 1 = 1900-01-01).
fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = year as i32;
    let mut serial = (y - 1900) * 365;
    // Leap days in [1900, year); 1900 itself is not a leap year.
    serial += (y - 1901) / 4 - (y - 1901) / 100 + (y - 1601) / 400;
    serial += MONTH_OFFSET[month as usize - 1] as i32;
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32
}

/// Decompose a day serial into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    let mut y = (serial / 365 + 1900) as u16;
    loop {
        if serial < serial_from_ymd(y, 1, 1) {
            y -= 1;
        } else if serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1;
    let mut m = 1u8;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch() {
        let d = Date::from_ymd(1900, 1, 1).unwrap();
        assert_eq!(d.serial(), 1);
        assert_eq!(d.weekday(), Weekday::Monday);
    }

    #[test]
    fn ymd_roundtrip() {
        let cases = [
            (1900, 1, 1),
            (1900, 12, 31),
            (2000, 2, 29), // leap century
            (2100, 2, 28), // non-leap century
            (2022, 8, 31),
            (2199, 12, 31),
        ];
        for (y, m, d) in cases {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(
                (date.year(), date.month(), date.day_of_month()),
                (y, m, d),
                "roundtrip failed for {y}-{m:02}-{d:02}"
            );
        }
    }

    #[test]
    fn add_months_clamps_to_month_end() {
        let d = Date::from_ymd(2023, 1, 31).unwrap();
        assert_eq!(d.add_months(1).unwrap(), Date::from_ymd(2023, 2, 28).unwrap());
        let d = Date::from_ymd(2024, 1, 31).unwrap();
        assert_eq!(d.add_months(1).unwrap(), Date::from_ymd(2024, 2, 29).unwrap());
        // Backward across a year boundary.
        let d = Date::from_ymd(2024, 3, 31).unwrap();
        assert_eq!(d.add_months(-4).unwrap(), Date::from_ymd(2023, 11, 30).unwrap());
    }

    #[test]
    fn day_arithmetic() {
        let d = Date::from_ymd(2023, 1, 1).unwrap();
        assert_eq!((d + 31).month(), 2);
        assert_eq!(Date::from_ymd(2023, 2, 1).unwrap() - d, 31);
        assert_eq!(d.days_until(Date::from_ymd(2023, 1, 11).unwrap()), 10);
    }

    #[test]
    fn leap_day_counts_one_day() {
        let d1 = Date::from_ymd(2020, 2, 28).unwrap();
        let d2 = Date::from_ymd(2020, 3, 1).unwrap();
        assert_eq!(d2 - d1, 2);
    }

    #[test]
    fn parse_iso() {
        let d = Date::parse("2022-08-31", DateFormat::default()).unwrap();
        assert_eq!(d, Date::from_ymd(2022, 8, 31).unwrap());
        // ISO is format-independent.
        let d2 = Date::parse("2022-08-31", DateFormat::DayMonthYear).unwrap();
        assert_eq!(d, d2);
    }

    #[test]
    fn parse_slash_formats() {
        let us = Date::parse("08/31/2022", DateFormat::MonthDayYear).unwrap();
        assert_eq!(us, Date::from_ymd(2022, 8, 31).unwrap());
        let eu = Date::parse("31/08/2022", DateFormat::DayMonthYear).unwrap();
        assert_eq!(us, eu);
        // 31 is not a valid month under the US reading.
        assert!(Date::parse("31/08/2022", DateFormat::MonthDayYear).is_err());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Date::parse("yesterday", DateFormat::default()).is_err());
        assert!(Date::parse("2022/08", DateFormat::default()).is_err());
        assert!(Date::parse("13/13/2022", DateFormat::default()).is_err());
    }

    #[test]
    fn tenor_addition() {
        let d = Date::from_ymd(2022, 8, 31).unwrap();
        assert_eq!(
            d.add_tenor("1M".parse().unwrap()).unwrap(),
            Date::from_ymd(2022, 9, 30).unwrap()
        );
        assert_eq!(
            d.add_tenor("5Y".parse().unwrap()).unwrap(),
            Date::from_ymd(2027, 8, 31).unwrap()
        );
        assert_eq!(
            d.add_tenor("2W".parse().unwrap()).unwrap(),
            Date::from_ymd(2022, 9, 14).unwrap()
        );
    }

    #[test]
    fn out_of_range_is_reported() {
        assert!(Date::MAX.add_days(1).is_err());
        assert!(Date::from_ymd(2199, 12, 31).unwrap().add_months(1).is_err());
        assert!(Date::from_serial(0).is_err());
    }
}
