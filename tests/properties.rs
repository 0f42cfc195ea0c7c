//! Property tests for the salary engine.
//!
//! Exercises the algebraic properties of span construction, overlap
//! classification and salary accumulation over randomly generated inputs.

use chrono::{NaiveTime, Weekday};
use proptest::prelude::*;

use salary_engine::calculation::{IntersectionKind, RateTable, calculate_salary, intersect};
use salary_engine::models::{EmployeeSchedule, TimeSpan, WorkedInterval, normalize_end};

fn clock_time() -> impl Strategy<Value = NaiveTime> {
    (0u32..24, 0u32..60).prop_map(|(h, m)| NaiveTime::from_hms_opt(h, m, 0).unwrap())
}

fn valid_span() -> impl Strategy<Value = TimeSpan> {
    (clock_time(), clock_time())
        .prop_filter_map("span must be constructible", |(start, end)| {
            TimeSpan::new(start, end).ok()
        })
}

fn weekday() -> impl Strategy<Value = Weekday> {
    prop_oneof![
        Just(Weekday::Mon),
        Just(Weekday::Tue),
        Just(Weekday::Wed),
        Just(Weekday::Thu),
        Just(Weekday::Fri),
        Just(Weekday::Sat),
        Just(Weekday::Sun),
    ]
}

fn worked_interval() -> impl Strategy<Value = WorkedInterval> {
    (weekday(), valid_span()).prop_map(|(weekday, span)| {
        WorkedInterval::new(weekday, span.start(), span.raw_end()).unwrap()
    })
}

proptest! {
    /// Construction fails exactly when the start is after the normalized end.
    #[test]
    fn construction_validity(start in clock_time(), end in clock_time()) {
        let (_, normalized_end) = normalize_end(end);
        let result = TimeSpan::new(start, end);
        prop_assert_eq!(result.is_ok(), start <= normalized_end);
    }

    /// Ends within the first minute of the day normalize identically to an
    /// explicit 23:59:59 end, including intersection behavior.
    #[test]
    fn midnight_normalization_idempotence(
        start in clock_time(),
        second in 0u32..60,
        window in valid_span(),
    ) {
        let midnight_end = NaiveTime::from_hms_opt(0, 0, second).unwrap();
        let explicit_end = NaiveTime::from_hms_opt(23, 59, 59).unwrap();

        let via_midnight = TimeSpan::new(start, midnight_end).unwrap();
        let explicit = TimeSpan::new(start, explicit_end).unwrap();

        prop_assert_eq!(via_midnight.end(), explicit.end());
        prop_assert_eq!(via_midnight, explicit);
        prop_assert_eq!(via_midnight.raw_end(), midnight_end);
        prop_assert_eq!(
            intersect(&window, &via_midnight),
            intersect(&window, &explicit)
        );
    }

    /// When spans overlap, the reported minutes match the analytic overlap
    /// length; otherwise the spans are strictly disjoint.
    #[test]
    fn overlap_minutes_match_analytic_length(window in valid_span(), query in valid_span()) {
        let result = intersect(&window, &query);

        let overlap_start = window.start().max(query.start());
        let overlap_end = window.end().min(query.end());

        if result.kind == IntersectionKind::NoOverlap {
            prop_assert!(overlap_end < overlap_start);
            prop_assert_eq!(result.minutes, 0);
        } else {
            prop_assert!(overlap_start <= overlap_end);
            prop_assert_eq!(result.minutes, (overlap_end - overlap_start).num_minutes());
        }
    }

    /// Permuting the worked intervals never changes the total.
    #[test]
    fn accumulation_is_commutative(
        intervals in proptest::collection::vec(worked_interval(), 0..8).prop_shuffle()
    ) {
        let forward = EmployeeSchedule::new("P", intervals.to_vec());
        let reversed = EmployeeSchedule::new("P", intervals.iter().rev().copied().collect());

        let table = RateTable::standard();
        prop_assert_eq!(
            calculate_salary(&forward, table).unwrap(),
            calculate_salary(&reversed, table).unwrap()
        );
    }

    /// Totals are never negative and always carry at most two decimals.
    #[test]
    fn totals_are_non_negative_cents(
        intervals in proptest::collection::vec(worked_interval(), 0..8)
    ) {
        let schedule = EmployeeSchedule::new("P", intervals);
        let total = calculate_salary(&schedule, RateTable::standard()).unwrap();
        prop_assert!(total >= rust_decimal::Decimal::ZERO);
        prop_assert!(total.scale() <= 2);
    }
}
