//! The built-in per-weekday rate table.
//!
//! Each weekday maps to an ordered list of [`RateSlot`]s covering the day:
//!
//! | Local time window | Mon-Fri | Sat-Sun |
//! |-------------------|---------|---------|
//! | 00:01 - 09:00     | 25      | 30      |
//! | 09:01 - 18:00     | 15      | 20      |
//! | 18:01 - 24:00     | 20      | 25      |
//!
//! The table is process-wide, built exactly once and never mutated, so it is
//! safe to read from any number of threads without coordination.

use std::collections::HashMap;

use chrono::{NaiveTime, Weekday};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::TimeSpan;

/// One contiguous priced interval of a day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateSlot {
    span: TimeSpan,
    hourly_rate: Decimal,
}

impl RateSlot {
    /// Creates a rate slot, validating the window through [`TimeSpan::new`].
    pub fn new(start: NaiveTime, end: NaiveTime, hourly_rate: Decimal) -> EngineResult<Self> {
        Ok(Self {
            span: TimeSpan::new(start, end)?,
            hourly_rate,
        })
    }

    /// The priced window.
    pub fn span(&self) -> &TimeSpan {
        &self.span
    }

    /// The hourly rate paid within the window.
    pub fn hourly_rate(&self) -> Decimal {
        self.hourly_rate
    }
}

/// The mapping from weekday to its ordered rate slots.
#[derive(Debug, Clone)]
pub struct RateTable {
    slots: HashMap<Weekday, Vec<RateSlot>>,
}

static STANDARD_TABLE: Lazy<RateTable> =
    Lazy::new(|| RateTable::build_standard().expect("built-in rate table must be valid"));

impl RateTable {
    /// Returns the fixed built-in rate table, built on first use.
    pub fn standard() -> &'static RateTable {
        &STANDARD_TABLE
    }

    /// Returns the ordered rate slots for a weekday.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MissingRateSlots`] if the weekday has no slots.
    /// The built-in table covers all seven weekdays, so this failing
    /// indicates an internal-consistency defect rather than bad input.
    pub fn slots_for(&self, weekday: Weekday) -> EngineResult<&[RateSlot]> {
        self.slots
            .get(&weekday)
            .map(Vec::as_slice)
            .ok_or(EngineError::MissingRateSlots { weekday })
    }

    fn build_standard() -> EngineResult<Self> {
        let weekday_rates = (Decimal::from(25), Decimal::from(15), Decimal::from(20));
        let weekend_rates = (Decimal::from(30), Decimal::from(20), Decimal::from(25));

        let mut slots = HashMap::new();
        for weekday in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ] {
            let (morning, daytime, evening) = match weekday {
                Weekday::Sat | Weekday::Sun => weekend_rates,
                _ => weekday_rates,
            };
            let day_slots = Self::day_slots(morning, daytime, evening)?;
            debug_assert!(Self::slots_are_ascending(&day_slots));
            slots.insert(weekday, day_slots);
        }
        Ok(Self { slots })
    }

    fn day_slots(
        morning: Decimal,
        daytime: Decimal,
        evening: Decimal,
    ) -> EngineResult<Vec<RateSlot>> {
        Ok(vec![
            RateSlot::new(clock(0, 1), clock(9, 0), morning)?,
            RateSlot::new(clock(9, 1), clock(18, 0), daytime)?,
            // The 00:00 end normalizes to end of day inside TimeSpan.
            RateSlot::new(clock(18, 1), clock(0, 0), evening)?,
        ])
    }

    fn slots_are_ascending(slots: &[RateSlot]) -> bool {
        slots
            .windows(2)
            .all(|pair| pair[0].span().end() < pair[1].span().start())
    }
}

fn clock(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid clock time")
}
