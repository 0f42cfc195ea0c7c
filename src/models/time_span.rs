//! Time span value type with midnight-boundary normalization.
//!
//! A [`TimeSpan`] is a validated time-of-day interval within a single day.
//! An end time falling in `[00:00, 00:01)` stands for "end of day" and is
//! normalized to `23:59:59` for all ordering and arithmetic, while the
//! originally supplied end is retained for display.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveTime;

use crate::error::{EngineError, EngineResult};

/// The normalized stand-in for a midnight end time.
fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 59).expect("valid clock time")
}

/// Applies the midnight rule to an end time.
///
/// Returns whether normalization was performed, and the value to use for
/// ordering and subtraction. Any end time in `[00:00, 00:01)` is treated as
/// "end of day", so a schedule entry ending exactly at midnight runs through
/// the entire day.
pub fn normalize_end(end: NaiveTime) -> (bool, NaiveTime) {
    let midnight_cutoff = NaiveTime::from_hms_opt(0, 1, 0).expect("valid clock time");
    if end < midnight_cutoff {
        (true, end_of_day())
    } else {
        (false, end)
    }
}

/// Returns the whole minutes between two times on the same nominal day.
///
/// The second difference is floored to minutes, so `23:59:59 - 18:01:00`
/// yields 358 minutes. Callers pass the later time first; no day-wraparound
/// arithmetic is applied beyond the midnight normalization already baked into
/// span endpoints.
pub fn minutes_between(later: NaiveTime, earlier: NaiveTime) -> i64 {
    (later - earlier).num_minutes()
}

/// A validated, orderable time interval within one day.
///
/// Construction is the sole validation gate for intervals in the engine:
/// both worked intervals and rate slots pass through [`TimeSpan::new`].
/// Spans are immutable once constructed.
///
/// # Example
///
/// ```
/// use chrono::NaiveTime;
/// use salary_engine::models::TimeSpan;
///
/// let span = TimeSpan::new(
///     NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(0, 0, 0).unwrap(),
/// )
/// .unwrap();
///
/// // The midnight end is normalized to end of day...
/// assert_eq!(span.end(), NaiveTime::from_hms_opt(23, 59, 59).unwrap());
/// // ...while the raw end is kept for display.
/// assert_eq!(span.raw_end(), NaiveTime::from_hms_opt(0, 0, 0).unwrap());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TimeSpan {
    start: NaiveTime,
    end: NaiveTime,
    raw_end: NaiveTime,
}

impl TimeSpan {
    /// Creates a span from a start and an end time.
    ///
    /// The end is normalized per the midnight rule before validation.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidSpan`] when the start is after the
    /// normalized end.
    pub fn new(start: NaiveTime, end: NaiveTime) -> EngineResult<Self> {
        let (_, normalized_end) = normalize_end(end);
        if start > normalized_end {
            return Err(EngineError::InvalidSpan { start, end });
        }
        Ok(Self {
            start,
            end: normalized_end,
            raw_end: end,
        })
    }

    /// The start of the span.
    pub fn start(&self) -> NaiveTime {
        self.start
    }

    /// The end of the span after midnight normalization. All ordering,
    /// subtraction and intersection logic uses this value.
    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// The end of the span exactly as supplied by the caller. Display only;
    /// carries no computation semantics.
    pub fn raw_end(&self) -> NaiveTime {
        self.raw_end
    }

    /// The span duration in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        minutes_between(self.end, self.start)
    }

    /// Formats the span as `HH:MM-HH:MM` using the raw end, the way a
    /// schedule line shows it.
    pub fn simple_format(&self) -> String {
        format!(
            "{}-{}",
            self.start.format("%H:%M"),
            self.raw_end.format("%H:%M")
        )
    }
}

// Equality and ordering compare (start, normalized end); the raw end is a
// display artifact and must not affect either.
impl PartialEq for TimeSpan {
    fn eq(&self, other: &Self) -> bool {
        (self.start, self.end) == (other.start, other.end)
    }
}

impl Eq for TimeSpan {}

impl PartialOrd for TimeSpan {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimeSpan {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.start, self.end).cmp(&(other.start, other.end))
    }
}

impl fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}[{}]",
            self.start.format("%H:%M"),
            self.end.format("%H:%M"),
            self.raw_end.format("%H:%M")
        )
    }
}
