//! Aggregate statistics and health messages

use serde::{Deserialize, Serialize};

use crate::types::EntityCategory;

/// Aggregate record counts per warehouse table
///
/// Omitted tables count as zero. Both the documented `DimAirlines` style keys
/// and the lowercase table names are accepted.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct StatsResponse {
    #[serde(rename = "DimAirlines", alias = "dimairlines", default)]
    pub dim_airlines: u64,
    #[serde(rename = "DimAirports", alias = "dimairports", default)]
    pub dim_airports: u64,
    #[serde(rename = "DimPassengers", alias = "dimpassengers", default)]
    pub dim_passengers: u64,
    #[serde(rename = "DimFlights", alias = "dimflights", default)]
    pub dim_flights: u64,
    #[serde(rename = "FactSales", alias = "factsales", default)]
    pub fact_sales: u64,
    #[serde(rename = "DirtyData", alias = "dirtydata", default)]
    pub dirty_data: u64,
}

impl StatsResponse {
    pub fn count(&self, category: EntityCategory) -> u64 {
        match category {
            EntityCategory::Airlines => self.dim_airlines,
            EntityCategory::Airports => self.dim_airports,
            EntityCategory::Passengers => self.dim_passengers,
            EntityCategory::Flights => self.dim_flights,
            EntityCategory::Sales => self.fact_sales,
            EntityCategory::DirtyData => self.dirty_data,
        }
    }
}

/// Root endpoint body reporting whether the service is up
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ServiceHealth {
    #[serde(default)]
    pub message: String,
    pub status: String,
}

impl ServiceHealth {
    pub fn is_running(&self) -> bool {
        self.status.eq_ignore_ascii_case("running")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_omitted_categories_default_to_zero() {
        let stats: StatsResponse = serde_json::from_str(r#"{"DimAirlines":5,"DimAirports":0}"#).unwrap();
        assert_eq!(stats.count(EntityCategory::Airlines), 5);
        assert_eq!(stats.count(EntityCategory::Airports), 0);
        assert_eq!(stats.count(EntityCategory::DirtyData), 0);
    }

    #[test]
    fn test_lowercase_table_keys() {
        let body = r#"{"dimairlines":3,"dimairports":7,"dimpassengers":120,"dimflights":40,"factsales":900,"dirtydata":12}"#;
        let stats: StatsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(stats.count(EntityCategory::Passengers), 120);
        assert_eq!(stats.count(EntityCategory::Sales), 900);
        assert_eq!(stats.count(EntityCategory::DirtyData), 12);
    }

    #[test]
    fn test_same_table_under_both_spellings_is_rejected() {
        let err = serde_json::from_str::<StatsResponse>(r#"{"DimAirlines":1,"dimairlines":2}"#).unwrap_err();
        assert!(err.to_string().contains("duplicate field"));
    }

    #[test]
    fn test_negative_count_is_rejected() {
        assert!(serde_json::from_str::<StatsResponse>(r#"{"DimFlights":-1}"#).is_err());
    }

    #[test]
    fn test_service_health() {
        let health: ServiceHealth =
            serde_json::from_str(r#"{"message":"Airline Data Warehouse API","status":"running"}"#).unwrap();
        assert!(health.is_running());
    }
}
