//! Client-side data model for the three workflows

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use shared::{
    BaggageStatus, EligibilityRequest, EligibilityResponse, EntityCategory, SharedError,
    StatsResponse,
};
use crate::error::{ClientError, ClientResult};

/// Prompt shown when an upload is submitted without a file
pub const SELECT_FILE_PROMPT: &str = "Please select a file";

/// Error text of an eligibility query that could not reach the service
pub const SEARCH_FAILED: &str = "Search failed";

/// Media type sent for `.csv` selections
pub const CSV_MEDIA_TYPE: &str = "text/csv";

/// Immutable copy of the eligibility form that is sent to the service
pub type EligibilityQuery = EligibilityRequest;

/// File chosen by the user for upload
#[derive(Clone, PartialEq, Eq)]
pub struct UploadSelection {
    pub file_name: String,
    pub content: Vec<u8>,
    pub media_type: String,
}

impl UploadSelection {
    pub fn new(file_name: impl Into<String>, content: Vec<u8>, media_type: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            content,
            media_type: media_type.into(),
        }
    }

    /// Selection of CSV content
    pub fn csv(file_name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self::new(file_name, content.into(), CSV_MEDIA_TYPE)
    }

    /// Read a selection from disk, inferring the media type from the extension
    pub async fn from_path(path: impl AsRef<Path>) -> ClientResult<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| SharedError::invalid_value("file", &path.display().to_string()))?
            .to_string();

        let content = tokio::fs::read(path).await?;
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        let media_type = if is_csv { CSV_MEDIA_TYPE } else { "application/octet-stream" };

        Ok(Self::new(file_name, content, media_type))
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl fmt::Debug for UploadSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadSelection")
            .field("file_name", &self.file_name)
            .field("bytes", &self.content.len())
            .field("media_type", &self.media_type)
            .finish()
    }
}

/// Phase of the upload workflow a failure happened in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadStage {
    Upload,
    Process,
}

impl UploadStage {
    /// Message for a request the service answered with a non-2xx status
    fn rejected_message(&self) -> &'static str {
        match self {
            UploadStage::Upload => "Upload failed",
            UploadStage::Process => "Processing failed",
        }
    }

    /// Message for a request that never produced a usable response
    fn error_message(&self) -> &'static str {
        match self {
            UploadStage::Upload => "Error uploading file",
            UploadStage::Process => "Error processing file",
        }
    }
}

impl fmt::Display for UploadStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadStage::Upload => write!(f, "upload"),
            UploadStage::Process => write!(f, "process"),
        }
    }
}

/// Progress of the upload workflow
///
/// Moves forward along Idle → Uploading → Processing → Succeeded | Failed.
/// A new submission restarts at Uploading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UploadStatus {
    #[default]
    Idle,
    Uploading,
    Processing,
    Succeeded { clean_rows: u64, dirty_rows: u64 },
    Failed { stage: UploadStage, message: String },
}

impl UploadStatus {
    /// Failure status for an error raised during `stage`
    pub fn failed(stage: UploadStage, error: &ClientError) -> Self {
        let message = match error {
            ClientError::HttpStatus { .. } => stage.rejected_message(),
            _ => stage.error_message(),
        };
        UploadStatus::Failed {
            stage,
            message: message.to_string(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, UploadStatus::Succeeded { .. } | UploadStatus::Failed { .. })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, UploadStatus::Succeeded { .. })
    }

    pub fn failed_stage(&self) -> Option<UploadStage> {
        match self {
            UploadStatus::Failed { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

impl fmt::Display for UploadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadStatus::Idle => Ok(()),
            UploadStatus::Uploading => write!(f, "Uploading..."),
            UploadStatus::Processing => write!(f, "File uploaded! Now processing..."),
            UploadStatus::Succeeded { clean_rows, dirty_rows } => write!(
                f,
                "✅ Success! {clean_rows} clean rows processed, {dirty_rows} moved to DirtyData"
            ),
            UploadStatus::Failed { message, .. } => write!(f, "❌ {message}"),
        }
    }
}

/// Editable eligibility form, changed one field at a time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EligibilityForm {
    pub name: String,
    pub flight_id: String,
    pub baggage: BaggageStatus,
    pub date: Option<NaiveDate>,
}

impl EligibilityForm {
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_flight_id(&mut self, flight_id: impl Into<String>) {
        self.flight_id = flight_id.into();
    }

    pub fn set_baggage(&mut self, baggage: BaggageStatus) {
        self.baggage = baggage;
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = Some(date);
    }

    /// Set the date from a `YYYY-MM-DD` string
    pub fn set_date_str(&mut self, date: &str) -> ClientResult<()> {
        let parsed = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|_| SharedError::invalid_value("date", date))?;
        self.date = Some(parsed);
        Ok(())
    }

    /// Snapshot the form into a query, refusing if any field is empty
    pub fn to_query(&self) -> ClientResult<EligibilityQuery> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ClientError::missing_input("name", "Please enter the passenger name"));
        }
        let flight_id = self.flight_id.trim();
        if flight_id.is_empty() {
            return Err(ClientError::missing_input("flightId", "Please enter the flight ID"));
        }
        let date = self
            .date
            .ok_or_else(|| ClientError::missing_input("date", "Please enter the flight date"))?;

        Ok(EligibilityQuery {
            name: name.to_string(),
            flight_id: flight_id.to_string(),
            baggage: self.baggage,
            date,
        })
    }
}

/// Outcome of one eligibility query
///
/// `TransportError` means the service could not be asked; it reads as not
/// eligible but is never confused with a real negative determination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EligibilityResult {
    Determined { eligible: bool, reason: Option<String> },
    TransportError { error: String },
}

impl EligibilityResult {
    /// Safe default used when the query failed in transit
    pub fn search_failed() -> Self {
        EligibilityResult::TransportError {
            error: SEARCH_FAILED.to_string(),
        }
    }

    pub fn eligible(&self) -> bool {
        match self {
            EligibilityResult::Determined { eligible, .. } => *eligible,
            EligibilityResult::TransportError { .. } => false,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            EligibilityResult::Determined { reason, .. } => reason.as_deref(),
            EligibilityResult::TransportError { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            EligibilityResult::TransportError { error } => Some(error),
            EligibilityResult::Determined { .. } => None,
        }
    }

    pub fn is_determined(&self) -> bool {
        matches!(self, EligibilityResult::Determined { .. })
    }
}

impl From<EligibilityResponse> for EligibilityResult {
    fn from(response: EligibilityResponse) -> Self {
        EligibilityResult::Determined {
            eligible: response.eligible,
            reason: response.reason,
        }
    }
}

#[derive(Serialize)]
struct EligibilityResultBody<'a> {
    eligible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl Serialize for EligibilityResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        EligibilityResultBody {
            eligible: self.eligible(),
            reason: self.reason(),
            error: self.error(),
        }
        .serialize(serializer)
    }
}

/// Record counts per entity category, replaced wholesale on refresh
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatisticsSnapshot {
    counts: BTreeMap<EntityCategory, u64>,
}

impl StatisticsSnapshot {
    pub fn from_counts(counts: impl IntoIterator<Item = (EntityCategory, u64)>) -> Self {
        Self {
            counts: counts.into_iter().collect(),
        }
    }

    /// Count for a category; absent categories read as zero
    pub fn count(&self, category: EntityCategory) -> u64 {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    /// Every category in display order
    pub fn entries(&self) -> Vec<(EntityCategory, u64)> {
        EntityCategory::ALL
            .iter()
            .map(|category| (*category, self.count(*category)))
            .collect()
    }
}

impl From<StatsResponse> for StatisticsSnapshot {
    fn from(response: StatsResponse) -> Self {
        Self::from_counts(
            EntityCategory::ALL
                .iter()
                .map(|category| (*category, response.count(*category))),
        )
    }
}

/// View shown by the client; exactly one is active
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ActiveView {
    #[default]
    Upload,
    Eligibility,
    Statistics,
}

impl ActiveView {
    pub const ALL: [ActiveView; 3] = [ActiveView::Upload, ActiveView::Eligibility, ActiveView::Statistics];

    pub fn title(&self) -> &'static str {
        match self {
            ActiveView::Upload => "📤 Data Upload",
            ActiveView::Eligibility => "📋 Insurance Eligibility",
            ActiveView::Statistics => "📊 Statistics",
        }
    }
}

impl fmt::Display for ActiveView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActiveView::Upload => write!(f, "upload"),
            ActiveView::Eligibility => write!(f, "eligibility"),
            ActiveView::Statistics => write!(f, "stats"),
        }
    }
}

impl FromStr for ActiveView {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upload" => Ok(ActiveView::Upload),
            "eligibility" | "insurance" => Ok(ActiveView::Eligibility),
            "stats" | "statistics" => Ok(ActiveView::Statistics),
            _ => Err(SharedError::invalid_value("view", s)),
        }
    }
}
