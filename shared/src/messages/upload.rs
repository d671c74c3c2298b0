//! File intake and processing messages

use serde::{Deserialize, Serialize};

/// File intake response carrying the server-assigned storage path
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct UploadReceipt {
    pub file_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Processing trigger for a previously uploaded file
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ProcessRequest {
    pub file_path: String,
}

/// Outcome of server-side cleaning; counts are reported verbatim
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ProcessReport {
    pub clean_rows: u64,
    pub dirty_rows: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_ignores_extra_fields() {
        let body = r#"{"message":"File uploaded successfully: airlines.csv","file_path":"uploads/airlines.csv"}"#;
        let receipt: UploadReceipt = serde_json::from_str(body).unwrap();
        assert_eq!(receipt.file_path, "uploads/airlines.csv");
    }

    #[test]
    fn test_receipt_requires_file_path() {
        let result = serde_json::from_str::<UploadReceipt>(r#"{"message":"ok"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_process_report_minimal_body() {
        let report: ProcessReport = serde_json::from_str(r#"{"clean_rows":42,"dirty_rows":3}"#).unwrap();
        assert_eq!(report.clean_rows, 42);
        assert_eq!(report.dirty_rows, 3);
        assert!(report.filename.is_none());
    }
}
