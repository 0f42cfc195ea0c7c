//! Application state for the salary engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use crate::calculation::RateTable;

/// Shared application state.
///
/// Carries the process-wide rate table. The table is immutable after
/// initialization, so the state is freely cloneable across handlers.
#[derive(Clone, Copy)]
pub struct AppState {
    table: &'static RateTable,
}

impl AppState {
    /// Creates an application state backed by the built-in rate table.
    pub fn new() -> Self {
        Self {
            table: RateTable::standard(),
        }
    }

    /// Returns the rate table.
    pub fn table(&self) -> &'static RateTable {
        self.table
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
