//! Test fixtures with predefined values for client tests

use chrono::NaiveDate;
use serde_json::{Value, json};

use client::{ClientError, EligibilityForm, EligibilityQuery, UploadSelection};
use shared::{BaggageStatus, EligibilityResponse, ProcessReport, StatsResponse, UploadReceipt};

/// Centralized test fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const AIRLINES_CSV: &'static str = "AirlineKey,AirlineName,Alliance\nAA,American Airlines,Oneworld\nDL,Delta,SkyTeam\n";
    pub const STORED_PATH: &'static str = "uploads/airlines.csv";

    pub fn airlines_selection() -> UploadSelection {
        UploadSelection::csv("airlines.csv", Self::AIRLINES_CSV)
    }

    pub fn receipt() -> UploadReceipt {
        UploadReceipt {
            file_path: Self::STORED_PATH.to_string(),
            message: Some("File uploaded successfully: airlines.csv".to_string()),
        }
    }

    pub fn report(clean_rows: u64, dirty_rows: u64) -> ProcessReport {
        ProcessReport {
            clean_rows,
            dirty_rows,
            message: Some("Processed airlines.csv".to_string()),
            filename: Some("airlines.csv".to_string()),
        }
    }

    pub fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    /// Form filled in for Jane Doe on AA100 with lost baggage
    pub fn jane_doe_form() -> EligibilityForm {
        EligibilityForm {
            name: "Jane Doe".to_string(),
            flight_id: "AA100".to_string(),
            baggage: BaggageStatus::Lost,
            date: Some(Self::date()),
        }
    }

    pub fn jane_doe_query() -> EligibilityQuery {
        EligibilityQuery {
            name: "Jane Doe".to_string(),
            flight_id: "AA100".to_string(),
            baggage: BaggageStatus::Lost,
            date: Self::date(),
        }
    }

    pub fn jane_doe_body() -> Value {
        json!({"name": "Jane Doe", "flightId": "AA100", "baggage": "Lost", "date": "2024-01-01"})
    }

    pub fn baggage_lost() -> EligibilityResponse {
        EligibilityResponse {
            eligible: true,
            reason: Some("Baggage lost".to_string()),
        }
    }

    pub fn stats(airlines: u64) -> StatsResponse {
        StatsResponse {
            dim_airlines: airlines,
            dim_airports: 0,
            dim_passengers: 120,
            dim_flights: 40,
            fact_sales: 900,
            dirty_data: 12,
        }
    }

    pub fn server_error(endpoint: &str) -> ClientError {
        ClientError::HttpStatus {
            endpoint: endpoint.to_string(),
            status: 500,
        }
    }
}
