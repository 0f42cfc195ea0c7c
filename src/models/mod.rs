//! Core data models for the salary engine.
//!
//! This module contains the domain value types used throughout the engine.

mod schedule;
mod time_span;
mod weekday;

pub use schedule::{EmployeeSchedule, WorkedInterval};
pub use time_span::{TimeSpan, minutes_between, normalize_end};
pub use weekday::{weekday_abbrev, weekday_from_abbrev};
