//! Bulk download file descriptors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One downloadable history file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FileDescriptor {
    pub filename: String,
    /// Presigned URL, valid for roughly five minutes from generation.
    /// Treat as ephemeral; never store it.
    pub download_url: String,
    /// Size of the ZIP file in bytes.
    pub file_size: u64,
    #[serde(with = "crate::dates::flexible")]
    pub file_created_on: DateTime<Utc>,
}

/// Result of the bulk-download listing: full snapshots plus daily deltas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkDownload {
    pub bulk: Vec<FileDescriptor>,
    pub delta: Vec<FileDescriptor>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_descriptor_from_wire() {
        let raw = json!({
            "filename": "a.zip",
            "downloadUrl": "https://x",
            "fileSize": 10,
            "fileCreatedOn": "2023-01-01"
        });
        let file: FileDescriptor = serde_json::from_value(raw).unwrap();
        assert_eq!(file.filename, "a.zip");
        assert_eq!(file.file_size, 10);
    }

    #[test]
    fn test_descriptor_rejects_bad_date() {
        let raw = json!({
            "filename": "a.zip",
            "downloadUrl": "https://x",
            "fileSize": 10,
            "fileCreatedOn": "01/01/2023"
        });
        assert!(serde_json::from_value::<FileDescriptor>(raw).is_err());
    }

    #[test]
    fn test_bulk_download_requires_both_lists() {
        let raw = json!({"bulk": []});
        assert!(serde_json::from_value::<BulkDownload>(raw).is_err());
    }
}
