//! Insurance eligibility messages

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::BaggageStatus;

/// Eligibility check request body
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct EligibilityRequest {
    pub name: String,
    #[serde(rename = "flightId")]
    pub flight_id: String,
    pub baggage: BaggageStatus,
    /// Serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
}

/// Eligibility decision made by the warehouse service
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct EligibilityResponse {
    pub eligible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
