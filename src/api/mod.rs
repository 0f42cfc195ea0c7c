//! HTTP API module for the salary engine.
//!
//! This module provides the REST endpoint for pricing a schedule line
//! against the built-in rate table.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, CalculationResponse};
pub use state::AppState;
