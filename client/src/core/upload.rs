//! Upload-then-process workflow
//!
//! Phase 2 only starts after phase 1 succeeded; any failure ends the run with
//! the stage it happened in. Nothing is retried.

use shared::{Workflow, logging, workflow_info};

use crate::traits::WarehouseGateway;
use crate::types::{UploadSelection, UploadStage, UploadStatus};

/// Run both phases for `selection`, publishing every status change
///
/// Returns the terminal status this invocation reached.
pub async fn run_upload<G, F>(gateway: &G, selection: UploadSelection, mut publish: F) -> UploadStatus
where
    G: WarehouseGateway + ?Sized,
    F: FnMut(UploadStatus),
{
    let file_name = selection.file_name.clone();

    publish(UploadStatus::Uploading);
    workflow_info!(Workflow::Upload, "📤 Uploading {} ({} bytes)", file_name, selection.len());

    let receipt = match gateway.upload_file(selection).await {
        Ok(receipt) => receipt,
        Err(err) => {
            logging::log_error(Workflow::Upload, "File intake", &err);
            let status = UploadStatus::failed(UploadStage::Upload, &err);
            publish(status.clone());
            return status;
        }
    };

    publish(UploadStatus::Processing);
    logging::log_progress(Workflow::Upload, "Processing", &receipt.file_path);

    let status = match gateway.process_file(&receipt.file_path).await {
        Ok(report) => {
            logging::log_success(
                Workflow::Upload,
                &format!(
                    "{}: {} clean rows, {} dirty rows",
                    file_name, report.clean_rows, report.dirty_rows
                ),
            );
            UploadStatus::Succeeded {
                clean_rows: report.clean_rows,
                dirty_rows: report.dirty_rows,
            }
        }
        Err(err) => {
            logging::log_error(Workflow::Upload, "Processing", &err);
            UploadStatus::failed(UploadStage::Process, &err)
        }
    };

    publish(status.clone());
    status
}
