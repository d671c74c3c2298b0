//! Client state management
//!
//! Each piece of state belongs to one workflow and is only written by that
//! workflow's completion path.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::core::{SingleFlight, ViewSelector};
use crate::types::{
    ActiveView, EligibilityForm, EligibilityResult, StatisticsSnapshot, UploadSelection, UploadStatus,
};

/// Session-scoped state of the client; nothing here is persisted
#[derive(Debug, Default)]
pub struct ClientState {
    /// Pending file for the upload workflow
    pub selection: Option<UploadSelection>,
    /// Eligibility form as currently edited
    pub form: EligibilityForm,
    /// Last eligibility outcome
    pub eligibility: Option<EligibilityResult>,
    /// Last good statistics snapshot
    pub statistics: Option<StatisticsSnapshot>,
    pub view: ViewSelector,
}

/// Shared client state wrapper
pub type SharedClientState = Arc<RwLock<ClientState>>;

/// Create new shared client state
pub fn create_shared_state(state: ClientState) -> SharedClientState {
    Arc::new(RwLock::new(state))
}

/// One single-flight counter per workflow
#[derive(Debug, Default)]
pub struct WorkflowFlights {
    pub upload: SingleFlight,
    pub eligibility: SingleFlight,
    pub statistics: SingleFlight,
}

/// Point-in-time copy of everything the views render
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub active: ActiveView,
    pub selection_name: Option<String>,
    pub upload_status: UploadStatus,
    pub form: EligibilityForm,
    pub eligibility: Option<EligibilityResult>,
    pub statistics: Option<StatisticsSnapshot>,
}
