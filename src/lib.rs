//! Salary calculation engine for recurring weekly work schedules.
//!
//! This crate prices an employee's weekly schedule against a fixed per-weekday
//! rate table, where the hourly rate depends on both the day of week and the
//! time of day each worked interval falls in.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod error;
pub mod models;
pub mod parser;
