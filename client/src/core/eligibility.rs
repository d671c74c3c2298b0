//! Eligibility query workflow

use shared::{Workflow, logging, workflow_info};

use crate::traits::WarehouseGateway;
use crate::types::{EligibilityQuery, EligibilityResult};

/// Conditions shown next to the form; the service makes the actual decision
pub const ELIGIBILITY_CONDITIONS: [&str; 4] = [
    "⏰ Flight delayed by more than 4 hours",
    "🎒 Baggage is lost",
    "📦 Baggage is damaged",
    "✅ Any one condition satisfied makes customer eligible",
];

/// Submit `query` and interpret the answer
///
/// A transport failure becomes [`EligibilityResult::search_failed`] so there
/// is always something to render.
pub async fn run_query<G>(gateway: &G, query: EligibilityQuery) -> EligibilityResult
where
    G: WarehouseGateway + ?Sized,
{
    workflow_info!(
        Workflow::Eligibility,
        "🔎 Checking {} on {} ({}, {})",
        query.name,
        query.flight_id,
        query.baggage,
        query.date
    );

    match gateway.check_eligibility(query).await {
        Ok(response) => {
            let result = EligibilityResult::from(response);
            workflow_info!(
                Workflow::Eligibility,
                eligible = result.eligible(),
                "📋 Eligibility determined: {}",
                result.reason().unwrap_or("no reason given")
            );
            result
        }
        Err(err) => {
            logging::log_error(Workflow::Eligibility, "Eligibility search", &err);
            EligibilityResult::search_failed()
        }
    }
}
