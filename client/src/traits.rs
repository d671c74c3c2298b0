//! Gateway trait definition for dependency injection
//!
//! Every call to the warehouse service goes through this trait so the
//! workflows can be exercised against mocks.

use async_trait::async_trait;

use shared::{EligibilityResponse, ProcessReport, ServiceHealth, StatsResponse, UploadReceipt};
use crate::error::ClientResult;
use crate::types::{EligibilityQuery, UploadSelection};

/// Request gateway to the remote data-warehouse service
///
/// Implementations treat any non-2xx response as a failure regardless of its
/// body. Each method makes exactly one attempt.
#[mockall::automock]
#[async_trait]
pub trait WarehouseGateway: Send + Sync {
    /// Send the selected file to the file-intake endpoint
    async fn upload_file(&self, selection: UploadSelection) -> ClientResult<UploadReceipt>;

    /// Ask the service to clean and load a previously uploaded file
    async fn process_file(&self, file_path: &str) -> ClientResult<ProcessReport>;

    /// Submit an eligibility query
    async fn check_eligibility(&self, query: EligibilityQuery) -> ClientResult<EligibilityResponse>;

    /// Fetch aggregate record counts
    async fn fetch_statistics(&self) -> ClientResult<StatsResponse>;

    /// Check that the service is reachable
    async fn health(&self) -> ClientResult<ServiceHealth>;
}
