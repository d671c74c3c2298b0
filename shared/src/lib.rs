//! Shared types for the warehouse client
//!
//! Contains the wire contract of the remote data-warehouse service plus the
//! value types, errors and logging helpers every workflow relies on.

pub mod types;
pub mod errors;
pub mod messages;
pub mod logging;

pub use types::*;
pub use errors::*;

// Re-export the request/response bodies of the warehouse service
pub use messages::{
    // File intake and processing
    UploadReceipt, ProcessRequest, ProcessReport,

    // Eligibility check
    EligibilityRequest, EligibilityResponse,

    // Aggregate statistics and health
    StatsResponse, ServiceHealth,

    // Endpoint paths
    endpoints,
};
