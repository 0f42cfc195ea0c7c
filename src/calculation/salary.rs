//! Salary accumulation over a weekly schedule.
//!
//! Combines the worked intervals of an [`EmployeeSchedule`] with the
//! per-weekday [`RateTable`] through the interval intersector, accumulating
//! a monetary total in fixed-point decimal arithmetic.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::error::EngineResult;
use crate::models::EmployeeSchedule;

use super::intersection::{IntersectionKind, intersect};
use super::rate_table::RateTable;

const CENTS: u32 = 2;

/// Calculates the total salary for a schedule against a rate table.
///
/// For each worked interval, every rate slot of that weekday is intersected
/// with the worked span; the shared minutes are converted to hours, rounded
/// to two decimal places, priced at the slot rate and accumulated. Worked
/// intervals that overlap each other are each priced independently and
/// summed. An empty schedule yields `0.00`.
///
/// The result does not depend on the order of the worked intervals, and the
/// function is pure, so independent schedules may be priced concurrently.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::MissingRateSlots`] if the table has
/// no slots for a referenced weekday, which the built-in table rules out.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use salary_engine::calculation::{RateTable, calculate_salary};
/// use salary_engine::parser::parse_schedule_line;
/// use std::str::FromStr;
///
/// let schedule = parse_schedule_line("ASTRID=MO10:00-12:00,TH12:00-14:00,SU20:00-21:00").unwrap();
/// let total = calculate_salary(&schedule, RateTable::standard()).unwrap();
/// assert_eq!(total, Decimal::from_str("85.00").unwrap());
/// ```
pub fn calculate_salary(schedule: &EmployeeSchedule, table: &RateTable) -> EngineResult<Decimal> {
    let mut total = Decimal::new(0, CENTS);

    for interval in schedule.worked_intervals() {
        for slot in table.slots_for(interval.weekday())? {
            let overlap = intersect(slot.span(), interval.span());
            if overlap.kind == IntersectionKind::NoOverlap {
                continue;
            }
            let hours = (Decimal::from(overlap.minutes) / Decimal::from(60))
                .round_dp_with_strategy(CENTS, RoundingStrategy::MidpointAwayFromZero);
            let amount = slot.hourly_rate() * hours;
            debug!(
                interval = %interval,
                slot = %slot.span(),
                kind = %overlap.kind,
                minutes = overlap.minutes,
                %amount,
                "priced slot overlap"
            );
            total += amount;
        }
    }

    Ok(total.round_dp_with_strategy(CENTS, RoundingStrategy::MidpointAwayFromZero))
}
