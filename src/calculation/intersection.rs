//! Interval overlap classification.
//!
//! This module classifies how a query span (a worked interval) overlaps a
//! fixed window span (a rate slot) and measures the shared minutes. All
//! comparisons operate on normalized endpoints, so a span ending at midnight
//! always compares as ending at `23:59:59`.

use crate::models::{TimeSpan, minutes_between};

/// The five ways a query span can relate to a window span.
///
/// Exactly one kind applies to any pair of spans. The closed enumeration
/// makes exhaustive matches catch any future extension of the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntersectionKind {
    /// Neither endpoint of the query lies within the window and the query
    /// does not contain the window.
    NoOverlap,
    /// The query lies entirely within the window.
    FitsInWindow,
    /// The query fully contains the window.
    ExceedsWindow,
    /// Only the query's start lies within the window.
    StartBounded,
    /// Only the query's end lies within the window.
    EndBounded,
}

impl std::fmt::Display for IntersectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntersectionKind::NoOverlap => write!(f, "NoOverlap"),
            IntersectionKind::FitsInWindow => write!(f, "FitsInWindow"),
            IntersectionKind::ExceedsWindow => write!(f, "ExceedsWindow"),
            IntersectionKind::StartBounded => write!(f, "StartBounded"),
            IntersectionKind::EndBounded => write!(f, "EndBounded"),
        }
    }
}

/// The outcome of classifying a query span against a window span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intersection {
    /// How the query relates to the window.
    pub kind: IntersectionKind,
    /// Whole minutes the two spans share. Zero when the kind is
    /// [`IntersectionKind::NoOverlap`].
    pub minutes: i64,
}

/// Classifies the overlap between a window span and a query span.
///
/// The containment checks run before the bounded checks: a query that
/// exactly matches the window satisfies both bounded predicates at once,
/// and must be reported as a containment case. Pure function of the two
/// spans.
///
/// # Example
///
/// ```
/// use chrono::NaiveTime;
/// use salary_engine::calculation::{IntersectionKind, intersect};
/// use salary_engine::models::TimeSpan;
///
/// let window = TimeSpan::new(
///     NaiveTime::from_hms_opt(9, 1, 0).unwrap(),
///     NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
/// )
/// .unwrap();
/// let query = TimeSpan::new(
///     NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
/// )
/// .unwrap();
///
/// let overlap = intersect(&window, &query);
/// assert_eq!(overlap.kind, IntersectionKind::FitsInWindow);
/// assert_eq!(overlap.minutes, 120);
/// ```
pub fn intersect(window: &TimeSpan, query: &TimeSpan) -> Intersection {
    let start_is_bounded = window.start() <= query.start() && query.start() <= window.end();
    let end_is_bounded = window.start() <= query.end() && query.end() <= window.end();
    let query_contains_window = query.start() <= window.start() && window.end() <= query.end();

    if start_is_bounded && end_is_bounded {
        Intersection {
            kind: IntersectionKind::FitsInWindow,
            minutes: minutes_between(query.end(), query.start()),
        }
    } else if query_contains_window {
        Intersection {
            kind: IntersectionKind::ExceedsWindow,
            minutes: minutes_between(window.end(), window.start()),
        }
    } else if start_is_bounded {
        Intersection {
            kind: IntersectionKind::StartBounded,
            minutes: minutes_between(window.end(), query.start()),
        }
    } else if end_is_bounded {
        Intersection {
            kind: IntersectionKind::EndBounded,
            minutes: minutes_between(query.end(), window.start()),
        }
    } else {
        Intersection {
            kind: IntersectionKind::NoOverlap,
            minutes: 0,
        }
    }
}
