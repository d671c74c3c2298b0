//! Message types for the warehouse service
//!
//! This module organizes the HTTP/JSON bodies exchanged with the remote
//! data-warehouse service by workflow:
//! - `upload`: file intake and processing trigger
//! - `eligibility`: insurance eligibility check
//! - `stats`: aggregate record counts and service health

pub mod upload;
pub mod eligibility;
pub mod stats;

pub use upload::{UploadReceipt, ProcessRequest, ProcessReport};

pub use eligibility::{EligibilityRequest, EligibilityResponse};

pub use stats::{StatsResponse, ServiceHealth};

/// Paths of the warehouse service, relative to its origin
pub mod endpoints {
    pub const HEALTH: &str = "/";
    pub const UPLOAD: &str = "/upload";
    pub const PROCESS: &str = "/process";
    pub const CHECK_ELIGIBILITY: &str = "/check-eligibility";
    pub const STATS: &str = "/stats";

    /// Multipart form field carrying the uploaded file
    pub const UPLOAD_FIELD: &str = "file";
}
