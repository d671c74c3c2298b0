//! Statistics workflow

use shared::{Workflow, workflow_debug};

use crate::error::ClientResult;
use crate::traits::WarehouseGateway;
use crate::types::StatisticsSnapshot;

/// Fetch a fresh snapshot of the aggregate counts
pub async fn fetch_snapshot<G>(gateway: &G) -> ClientResult<StatisticsSnapshot>
where
    G: WarehouseGateway + ?Sized,
{
    workflow_debug!(Workflow::Statistics, "📊 Fetching aggregate counts");
    let response = gateway.fetch_statistics().await?;
    Ok(StatisticsSnapshot::from(response))
}
