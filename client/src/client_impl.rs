//! Workflow orchestrator with dependency injection

use std::path::Path;
use std::sync::Arc;
use tokio::sync::watch;

use shared::{ServiceHealth, Workflow, logging, workflow_debug, workflow_info, workflow_warn};

use crate::core::{FlightToken, Transition, ViewEffect, eligibility, statistics, upload};
use crate::error::{ClientError, ClientResult};
use crate::state::{ClientState, SharedClientState, ViewModel, WorkflowFlights, create_shared_state};
use crate::traits::WarehouseGateway;
use crate::types::{
    ActiveView, EligibilityForm, EligibilityResult, SELECT_FILE_PROMPT, StatisticsSnapshot,
    UploadSelection, UploadStatus,
};

/// Drives the upload, eligibility and statistics workflows against a gateway
///
/// Cloning is cheap and every clone shares the same state, so workflow calls
/// can be spawned as independent tasks.
pub struct WarehouseClient<G>
where
    G: WarehouseGateway,
{
    gateway: Arc<G>,
    state: SharedClientState,
    upload_status: Arc<watch::Sender<UploadStatus>>,
    flights: Arc<WorkflowFlights>,
}

impl<G> Clone for WarehouseClient<G>
where
    G: WarehouseGateway,
{
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            state: Arc::clone(&self.state),
            upload_status: Arc::clone(&self.upload_status),
            flights: Arc::clone(&self.flights),
        }
    }
}

impl<G> WarehouseClient<G>
where
    G: WarehouseGateway,
{
    /// Create new client instance
    pub fn new(gateway: G) -> Self {
        let (upload_status, _) = watch::channel(UploadStatus::Idle);

        Self {
            gateway: Arc::new(gateway),
            state: create_shared_state(ClientState::default()),
            upload_status: Arc::new(upload_status),
            flights: Arc::new(WorkflowFlights::default()),
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    // ---- Upload-Process workflow ----

    /// Replace the pending file selection
    pub async fn select_file(&self, selection: UploadSelection) {
        workflow_debug!(Workflow::Upload, "Selected {:?}", selection);
        self.state.write().await.selection = Some(selection);
    }

    /// Read a file from disk and make it the pending selection
    pub async fn select_file_path(&self, path: impl AsRef<Path>) -> ClientResult<()> {
        let selection = UploadSelection::from_path(path).await?;
        self.select_file(selection).await;
        Ok(())
    }

    pub async fn selection_name(&self) -> Option<String> {
        self.state.read().await.selection.as_ref().map(|s| s.file_name.clone())
    }

    /// Upload the pending selection and trigger its processing
    ///
    /// Fails with `MissingInput` before any call when nothing is selected.
    /// Otherwise returns the terminal status of this invocation; the shared
    /// status only reflects it while no newer upload has been submitted.
    pub async fn submit_upload(&self) -> ClientResult<UploadStatus> {
        let selection = self.state.read().await.selection.clone();
        let Some(selection) = selection else {
            workflow_warn!(Workflow::Upload, "⚠️ Upload submitted without a file");
            return Err(ClientError::missing_input("file", SELECT_FILE_PROMPT));
        };

        let token = self.flights.upload.issue();
        let status = upload::run_upload(self.gateway.as_ref(), selection, |status| {
            self.publish_upload(token, status)
        })
        .await;

        Ok(status)
    }

    fn publish_upload(&self, token: FlightToken, status: UploadStatus) {
        let flights = &self.flights;
        let written = self.upload_status.send_if_modified(|current| {
            if flights.upload.is_current(token) {
                *current = status.clone();
                true
            } else {
                false
            }
        });

        if !written {
            workflow_debug!(
                Workflow::Upload,
                generation = token.generation(),
                "Discarding superseded upload status: {}",
                status
            );
        }
    }

    pub fn upload_status(&self) -> UploadStatus {
        self.upload_status.borrow().clone()
    }

    /// Observe every upload status change
    pub fn subscribe_upload(&self) -> watch::Receiver<UploadStatus> {
        self.upload_status.subscribe()
    }

    // ---- Eligibility Query workflow ----

    /// Edit the eligibility form in place
    pub async fn edit_form<F>(&self, edit: F)
    where
        F: FnOnce(&mut EligibilityForm),
    {
        let mut state = self.state.write().await;
        edit(&mut state.form);
    }

    pub async fn form(&self) -> EligibilityForm {
        self.state.read().await.form.clone()
    }

    /// Submit a copy of the current form
    ///
    /// Fails with `MissingInput` before any call when a field is empty.
    pub async fn submit_query(&self) -> ClientResult<EligibilityResult> {
        let query = self.state.read().await.form.to_query()?;

        let token = self.flights.eligibility.issue();
        let result = eligibility::run_query(self.gateway.as_ref(), query).await;

        let mut state = self.state.write().await;
        if self.flights.eligibility.is_current(token) {
            state.eligibility = Some(result.clone());
        } else {
            workflow_debug!(
                Workflow::Eligibility,
                generation = token.generation(),
                "Discarding superseded eligibility result"
            );
        }

        Ok(result)
    }

    pub async fn eligibility_result(&self) -> Option<EligibilityResult> {
        self.state.read().await.eligibility.clone()
    }

    // ---- Statistics workflow ----

    /// Fetch fresh counts and return the snapshot now on display
    ///
    /// A failed fetch is logged and leaves the previous snapshot in place.
    pub async fn refresh_statistics(&self) -> Option<StatisticsSnapshot> {
        let token = self.flights.statistics.issue();

        match statistics::fetch_snapshot(self.gateway.as_ref()).await {
            Ok(snapshot) => {
                let mut state = self.state.write().await;
                if self.flights.statistics.is_current(token) {
                    state.statistics = Some(snapshot);
                    logging::log_success(Workflow::Statistics, "Statistics refreshed");
                } else {
                    workflow_debug!(
                        Workflow::Statistics,
                        generation = token.generation(),
                        "Discarding superseded statistics snapshot"
                    );
                }
            }
            Err(err) => logging::log_soft_failure(Workflow::Statistics, "Statistics refresh", &err),
        }

        self.statistics().await
    }

    pub async fn statistics(&self) -> Option<StatisticsSnapshot> {
        self.state.read().await.statistics.clone()
    }

    // ---- View selector ----

    /// Switch views without performing the transition's effects
    pub async fn switch_view(&self, view: ActiveView) -> Transition {
        let transition = self.state.write().await.view.apply(view);
        workflow_info!(Workflow::View, "🗂️ {} → {}", transition.from, transition.to);
        transition
    }

    /// Switch views and perform the resulting effects
    pub async fn activate(&self, view: ActiveView) -> Transition {
        let transition = self.switch_view(view).await;
        for effect in &transition.effects {
            self.perform(*effect).await;
        }
        transition
    }

    /// Perform one effect requested by a view transition
    pub async fn perform(&self, effect: ViewEffect) {
        match effect {
            ViewEffect::RefreshStatistics => {
                self.refresh_statistics().await;
            }
        }
    }

    pub async fn active_view(&self) -> ActiveView {
        self.state.read().await.view.active()
    }

    // ---- Rendering support ----

    /// Copy everything the views need to render
    pub async fn view_model(&self) -> ViewModel {
        let state = self.state.read().await;
        ViewModel {
            active: state.view.active(),
            selection_name: state.selection.as_ref().map(|s| s.file_name.clone()),
            upload_status: self.upload_status(),
            form: state.form.clone(),
            eligibility: state.eligibility.clone(),
            statistics: state.statistics.clone(),
        }
    }

    /// Check that the warehouse service answers
    pub async fn ping(&self) -> ClientResult<ServiceHealth> {
        let health = self.gateway.health().await?;
        workflow_info!(Workflow::View, "🩺 Service says: {} ({})", health.message, health.status);
        Ok(health)
    }
}
