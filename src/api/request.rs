//! Request types for the salary engine API.
//!
//! This module defines the JSON request structure for the `/calculate`
//! endpoint.

use serde::{Deserialize, Serialize};

/// Request body for the `/calculate` endpoint.
///
/// Carries a raw schedule line in the external format
/// `IDENTIFIER=DD_hh:mm-hh:mm(,DD_hh:mm-hh:mm)*`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The schedule line to price.
    pub schedule: String,
}
