//! Core value types used throughout the warehouse client

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::SharedError;

/// Workflow identifier attached to every log event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Workflow {
    /// Two-phase file upload and processing
    Upload,
    /// Insurance eligibility query
    Eligibility,
    /// Aggregate record counts
    Statistics,
    /// Tab selection
    View,
}

impl fmt::Display for Workflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Workflow::Upload => write!(f, "upload"),
            Workflow::Eligibility => write!(f, "eligibility"),
            Workflow::Statistics => write!(f, "statistics"),
            Workflow::View => write!(f, "view"),
        }
    }
}

/// Baggage outcome reported by the passenger
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaggageStatus {
    #[default]
    Delivered,
    Lost,
    Damaged,
}

impl BaggageStatus {
    pub const ALL: [BaggageStatus; 3] = [
        BaggageStatus::Delivered,
        BaggageStatus::Lost,
        BaggageStatus::Damaged,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BaggageStatus::Delivered => "Delivered",
            BaggageStatus::Lost => "Lost",
            BaggageStatus::Damaged => "Damaged",
        }
    }
}

impl fmt::Display for BaggageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BaggageStatus {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| SharedError::invalid_value("baggage", s))
    }
}

/// Entity categories counted by the warehouse statistics endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityCategory {
    Airlines,
    Airports,
    Passengers,
    Flights,
    Sales,
    DirtyData,
}

impl EntityCategory {
    /// Display order of the statistics view
    pub const ALL: [EntityCategory; 6] = [
        EntityCategory::Airlines,
        EntityCategory::Airports,
        EntityCategory::Passengers,
        EntityCategory::Flights,
        EntityCategory::Sales,
        EntityCategory::DirtyData,
    ];

    /// Card title shown in the statistics view
    pub fn label(&self) -> &'static str {
        match self {
            EntityCategory::Airlines => "✈️ Airlines",
            EntityCategory::Airports => "🏢 Airports",
            EntityCategory::Passengers => "👥 Passengers",
            EntityCategory::Flights => "🛫 Flights",
            EntityCategory::Sales => "💰 Sales",
            EntityCategory::DirtyData => "🚨 Dirty Data",
        }
    }
}

impl fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityCategory::Airlines => "Airlines",
            EntityCategory::Airports => "Airports",
            EntityCategory::Passengers => "Passengers",
            EntityCategory::Flights => "Flights",
            EntityCategory::Sales => "Sales",
            EntityCategory::DirtyData => "DirtyData",
        };
        f.write_str(name)
    }
}
