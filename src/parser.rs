//! Schedule-line parsing.
//!
//! Turns a raw line of the form
//! `IDENTIFIER=DD_hh:mm-hh:mm(,DD_hh:mm-hh:mm)*` into an
//! [`EmployeeSchedule`], where `DD` is a two-letter weekday abbreviation
//! (`MO,TU,WE,TH,FR,SA,SU`) and `hh:mm` is a 24-hour clock time.

use chrono::NaiveTime;

use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeSchedule, WorkedInterval, weekday_from_abbrev};

/// Parses a schedule line into an [`EmployeeSchedule`].
///
/// Unknown weekday abbreviations are rejected before any time span is
/// constructed. Interval order is preserved as given.
///
/// # Errors
///
/// - [`EngineError::MalformedSchedule`] when the `=` separator is missing,
///   an interval token is truncated, or a time fails to parse.
/// - [`EngineError::UnknownWeekday`] for weekday tokens outside the seven
///   known abbreviations.
/// - [`EngineError::InvalidSpan`] when an interval's start is after its
///   normalized end.
///
/// # Example
///
/// ```
/// use salary_engine::parser::parse_schedule_line;
///
/// let schedule = parse_schedule_line("RENE=MO10:00-12:00,SU20:00-21:00").unwrap();
/// assert_eq!(schedule.identifier(), "RENE");
/// assert_eq!(schedule.worked_intervals().len(), 2);
/// ```
pub fn parse_schedule_line(line: &str) -> EngineResult<EmployeeSchedule> {
    let (identifier, intervals_part) =
        line.split_once('=')
            .ok_or_else(|| EngineError::MalformedSchedule {
                message: "missing '=' separator".to_string(),
            })?;

    let mut intervals = Vec::new();
    for token in intervals_part.split(',') {
        intervals.push(parse_interval_token(token)?);
    }
    Ok(EmployeeSchedule::new(identifier, intervals))
}

fn parse_interval_token(token: &str) -> EngineResult<WorkedInterval> {
    if token.len() < 2 || !token.is_char_boundary(2) {
        return Err(EngineError::MalformedSchedule {
            message: format!("interval token '{token}' is too short"),
        });
    }
    let (weekday_token, span_token) = token.split_at(2);
    let weekday = weekday_from_abbrev(weekday_token)?;

    let (start_token, end_token) =
        span_token
            .split_once('-')
            .ok_or_else(|| EngineError::MalformedSchedule {
                message: format!("interval token '{token}' is missing the '-' separator"),
            })?;
    let start = parse_clock_time(start_token)?;
    let end = parse_clock_time(end_token)?;
    WorkedInterval::new(weekday, start, end)
}

fn parse_clock_time(token: &str) -> EngineResult<NaiveTime> {
    NaiveTime::parse_from_str(token, "%H:%M").map_err(|_| EngineError::MalformedSchedule {
        message: format!("invalid time token '{token}'"),
    })
}
