//! Worked-interval and schedule records.
//!
//! An [`EmployeeSchedule`] is the sole input to the salary calculation: an
//! identifier plus the ordered worked intervals produced by the schedule-line
//! parser. Both types are immutable after construction.

use std::fmt;

use chrono::{NaiveTime, Weekday};

use super::time_span::TimeSpan;
use super::weekday::weekday_abbrev;
use crate::error::EngineResult;

/// One contiguous clocked-in interval on one weekday.
///
/// Multiple intervals for the same weekday may overlap each other; the
/// engine prices each independently and sums the contributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkedInterval {
    weekday: Weekday,
    span: TimeSpan,
}

impl WorkedInterval {
    /// Creates a worked interval, validating the span through
    /// [`TimeSpan::new`].
    pub fn new(weekday: Weekday, start: NaiveTime, end: NaiveTime) -> EngineResult<Self> {
        Ok(Self {
            weekday,
            span: TimeSpan::new(start, end)?,
        })
    }

    /// The weekday this interval was worked on.
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// The clocked-in span.
    pub fn span(&self) -> &TimeSpan {
        &self.span
    }
}

impl fmt::Display for WorkedInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}",
            weekday_abbrev(self.weekday),
            self.span.simple_format()
        )
    }
}

/// An employee's recurring weekly schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeSchedule {
    identifier: String,
    worked_intervals: Vec<WorkedInterval>,
}

impl EmployeeSchedule {
    /// Creates a schedule from already-validated worked intervals.
    pub fn new(identifier: impl Into<String>, worked_intervals: Vec<WorkedInterval>) -> Self {
        Self {
            identifier: identifier.into(),
            worked_intervals,
        }
    }

    /// The employee identifier from the schedule line.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The worked intervals, in the order they were supplied.
    pub fn worked_intervals(&self) -> &[WorkedInterval] {
        &self.worked_intervals
    }
}

impl fmt::Display for EmployeeSchedule {
    /// Formats the schedule grouped by weekday, in first-seen weekday order,
    /// with the spans of each day sorted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut groups: Vec<(Weekday, Vec<&TimeSpan>)> = Vec::new();
        for interval in &self.worked_intervals {
            match groups.iter_mut().find(|(day, _)| *day == interval.weekday) {
                Some((_, spans)) => spans.push(&interval.span),
                None => groups.push((interval.weekday, vec![&interval.span])),
            }
        }
        for (_, spans) in &mut groups {
            spans.sort();
        }

        write!(f, "{}", self.identifier)?;
        for (weekday, spans) in groups {
            write!(f, "\n\t{}", weekday_abbrev(weekday))?;
            for span in spans {
                write!(f, "\n\t\t{}", span.simple_format())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn interval(weekday: Weekday, start: (u32, u32), end: (u32, u32)) -> WorkedInterval {
        WorkedInterval::new(weekday, time(start.0, start.1), time(end.0, end.1)).unwrap()
    }

    #[test]
    fn test_worked_interval_validates_span() {
        let result = WorkedInterval::new(Weekday::Mon, time(12, 0), time(10, 0));
        assert!(result.is_err());
    }

    #[test]
    fn test_worked_interval_display() {
        let interval = interval(Weekday::Mon, (10, 0), (12, 0));
        assert_eq!(interval.to_string(), "MO -> 10:00-12:00");
    }

    #[test]
    fn test_schedule_display_groups_and_sorts_per_weekday() {
        let schedule = EmployeeSchedule::new(
            "C1",
            vec![
                interval(Weekday::Mon, (12, 50), (18, 30)),
                interval(Weekday::Sat, (3, 32), (9, 50)),
                interval(Weekday::Mon, (8, 35), (9, 45)),
            ],
        );
        assert_eq!(
            schedule.to_string(),
            "C1\n\tMO\n\t\t08:35-09:45\n\t\t12:50-18:30\n\tSA\n\t\t03:32-09:50"
        );
    }

    #[test]
    fn test_empty_schedule_display_is_identifier_only() {
        let schedule = EmployeeSchedule::new("EMPTY", vec![]);
        assert_eq!(schedule.to_string(), "EMPTY");
    }

    #[test]
    fn test_schedule_preserves_interval_order() {
        let intervals = vec![
            interval(Weekday::Sun, (20, 0), (21, 0)),
            interval(Weekday::Mon, (10, 0), (12, 0)),
        ];
        let schedule = EmployeeSchedule::new("RENE", intervals.clone());
        assert_eq!(schedule.worked_intervals(), intervals.as_slice());
        assert_eq!(schedule.identifier(), "RENE");
    }
}
