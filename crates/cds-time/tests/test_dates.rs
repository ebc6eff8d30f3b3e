//! Integration tests for the date layer: serial round-trips, IMM
//! anchoring, day counts, and bad-day adjustment, including the
//! property-based invariants.

use cds_time::{BadDayConvention, Calendar, Date, DateFormat, DayCount, IMM, WeekendsOnly};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn imm_anchor_matches_standard_roll() {
    // A trade on 2022-08-31 accrues from the June IMM date.
    let trade = Date::parse("08/31/2022", DateFormat::MonthDayYear).unwrap();
    assert_eq!(IMM::previous(trade), date(2022, 6, 20));
    assert_eq!(IMM::next(trade), date(2022, 9, 20));
}

#[test]
fn step_in_is_next_business_day() {
    let trade = date(2022, 8, 31); // Wednesday
    assert_eq!(WeekendsOnly.add_business_days(trade, 1), date(2022, 9, 1));
    let friday = date(2022, 9, 2);
    assert_eq!(WeekendsOnly.add_business_days(friday, 1), date(2022, 9, 5));
}

#[test]
fn spec_day_count_fractions() {
    let d1 = date(2020, 2, 1);
    let d2 = date(2020, 3, 1);
    assert_eq!(DayCount::Act360.year_fraction(d1, d2), 29.0 / 360.0);
    assert_eq!(DayCount::Thirty360.year_fraction(d1, d2), 30.0 / 360.0);
}

proptest! {
    #[test]
    fn ymd_serial_roundtrip(y in 1900u16..=2199, m in 1u8..=12, d in 1u8..=28) {
        let parsed = Date::from_ymd(y, m, d).unwrap();
        let again = Date::from_serial(parsed.serial()).unwrap();
        prop_assert_eq!(parsed, again);
        prop_assert_eq!((again.year(), again.month(), again.day_of_month()), (y, m, d));
    }

    #[test]
    fn add_months_lands_in_target_month(y in 1950u16..=2150, m in 1u8..=12, d in 1u8..=31, n in -24i32..=24) {
        let d = d.min(cds_time::date::days_in_month(y, m));
        let base = Date::from_ymd(y, m, d).unwrap();
        let shifted = base.add_months(n).unwrap();
        let expected_month = ((m as i32 - 1 + n).rem_euclid(12) + 1) as u8;
        prop_assert_eq!(shifted.month(), expected_month);
        // Day preserved or clamped, never grown.
        prop_assert!(shifted.day_of_month() <= d.max(1));
    }

    #[test]
    fn adjustment_always_lands_on_business_day(serial in 40_000i32..80_000) {
        let d = Date::from_serial(serial).unwrap();
        for conv in [
            BadDayConvention::Following,
            BadDayConvention::ModifiedFollowing,
            BadDayConvention::Preceding,
            BadDayConvention::ModifiedPreceding,
        ] {
            let adjusted = WeekendsOnly.adjust(d, conv);
            prop_assert!(WeekendsOnly.is_business_day(adjusted));
        }
        // Modified conventions never change the month.
        let mf = WeekendsOnly.adjust(d, BadDayConvention::ModifiedFollowing);
        prop_assert_eq!(mf.month(), d.month());
    }

    #[test]
    fn imm_next_previous_bracket(serial in 40_000i32..80_000) {
        let d = Date::from_serial(serial).unwrap();
        let prev = IMM::previous(d);
        let next = IMM::next(d);
        prop_assert!(IMM::is_imm_date(prev));
        prop_assert!(IMM::is_imm_date(next));
        prop_assert!(prev <= d);
        prop_assert!(next > d);
        // The bracket is exactly one quarter wide.
        prop_assert_eq!(prev.add_months(3).unwrap(), next);
    }

    #[test]
    fn thirty360_bounded_by_actual(s1 in 40_000i32..79_000, len in 1i32..1000) {
        let d1 = Date::from_serial(s1).unwrap();
        let d2 = Date::from_serial(s1 + len).unwrap();
        let act = DayCount::Act360.day_count(d1, d2);
        let thirty = DayCount::Thirty360.day_count(d1, d2);
        // 30/360 counting never drifts more than a few days per month from actual.
        prop_assert!((act - thirty).abs() <= 3 * (1 + len as i64 / 28));
    }
}
