//! Calculation logic for the salary engine.
//!
//! This module contains the interval overlap classifier, the built-in
//! per-weekday rate table and the salary accumulation over a schedule.

mod intersection;
mod rate_table;
mod salary;

pub use intersection::{Intersection, IntersectionKind, intersect};
pub use rate_table::{RateSlot, RateTable};
pub use salary::calculate_salary;
