//! Shared logging utilities for consistent tracing across all workflows

use crate::types::Workflow;
use chrono::{DateTime, Utc};
use tracing::{error, info, warn};

/// Build the filter directive for the client crates at the given level
pub fn filter_directive(log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or("info");
    format!("client={base_level},warehouse_client={base_level},shared={base_level},reqwest=warn,hyper=warn")
}

/// Initialize tracing subscriber with optional log level
///
/// Events go to stderr so rendered views on stdout stay readable.
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(log_level)));

    // try_init: a second initialization (tests, embedded use) is not an error
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

/// Initialize tracing subscriber at the default level
pub fn init_tracing() {
    init_tracing_with_level(None);
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for workflow-aware info logging
#[macro_export]
macro_rules! workflow_info {
    ($workflow:expr, $($arg:tt)*) => {
        tracing::info!(
            workflow = %$workflow,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for workflow-aware warning logging
#[macro_export]
macro_rules! workflow_warn {
    ($workflow:expr, $($arg:tt)*) => {
        tracing::warn!(
            workflow = %$workflow,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for workflow-aware error logging
#[macro_export]
macro_rules! workflow_error {
    ($workflow:expr, $($arg:tt)*) => {
        tracing::error!(
            workflow = %$workflow,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for workflow-aware debug logging
#[macro_export]
macro_rules! workflow_debug {
    ($workflow:expr, $($arg:tt)*) => {
        tracing::debug!(
            workflow = %$workflow,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(details: &str) {
    info!(
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(workflow: Workflow, context: &str, error: &dyn std::fmt::Display) {
    error!(
        workflow = %workflow,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for soft failures that leave state untouched
pub fn log_soft_failure(workflow: Workflow, context: &str, error: &dyn std::fmt::Display) {
    warn!(
        workflow = %workflow,
        timestamp = format_timestamp(),
        error = %error,
        "⚠️ {} failed, keeping previous state: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(workflow: Workflow, message: &str) {
    info!(
        workflow = %workflow,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}

/// Contextual logging helper for progress updates
pub fn log_progress(workflow: Workflow, action: &str, details: &str) {
    info!(
        workflow = %workflow,
        timestamp = format_timestamp(),
        "📋 {}: {}",
        action,
        details
    );
}
