//! # cds-time
//!
//! The calendar/date layer of cdspricer: a day-serial [`Date`] type with
//! format-disambiguated parsing, tenors, day-count conventions, bad-day
//! adjustment, holiday calendars, CDS IMM dates, and the backward CDS
//! coupon-schedule generator.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod bad_day_convention;
pub mod calendar;
pub mod date;
pub mod day_count;
pub mod frequency;
pub mod imm;
pub mod schedule;
pub mod tenor;
pub mod weekday;

pub use bad_day_convention::BadDayConvention;
pub use calendar::{Calendar, HolidayCalendar, WeekendsOnly};
pub use date::{Date, DateFormat};
pub use day_count::DayCount;
pub use frequency::PaymentFrequency;
pub use imm::IMM;
pub use schedule::{CdsSchedule, SchedulePeriod};
pub use tenor::{Tenor, TimeUnit};
pub use weekday::Weekday;
