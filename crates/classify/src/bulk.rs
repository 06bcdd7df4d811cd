//! Bulk-download body parsing. A single shape, but routed through the same
//! validate-then-construct path as the vehicle responses.

use mot_history_types::{BulkDownload, HistoryError, traits::Result};
use serde_json::Value;

/// Parse a bulk-download listing body.
///
/// Both the `bulk` and `delta` keys are required; extra top-level keys are
/// tolerated. Every descriptor is validated strictly.
///
/// # Errors
///
/// Returns [`HistoryError::Classification`] naming the raw input when the
/// body does not match the expected shape.
pub fn parse_bulk_download(value: &Value) -> Result<BulkDownload> {
    serde_json::from_value(value.clone()).map_err(|err| HistoryError::Classification {
        reasons: vec![format!("bulk download shape: {err}")],
        payload: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_listing_with_one_bulk_file() {
        let body = json!({
            "bulk": [{
                "filename": "a.zip",
                "downloadUrl": "https://x",
                "fileSize": 10,
                "fileCreatedOn": "2023-01-01"
            }],
            "delta": []
        });
        let listing = parse_bulk_download(&body).unwrap();
        assert_eq!(listing.bulk.len(), 1);
        assert!(listing.delta.is_empty());
        assert_eq!(listing.bulk[0].filename, "a.zip");
    }

    #[test]
    fn test_missing_delta_fails() {
        let body = json!({"bulk": []});
        let err = parse_bulk_download(&body).unwrap_err();
        assert!(matches!(err, HistoryError::Classification { .. }));
    }

    #[test]
    fn test_extra_top_level_keys_tolerated() {
        let body = json!({"bulk": [], "delta": [], "generatedAt": "2023-01-01"});
        assert!(parse_bulk_download(&body).is_ok());
    }

    #[test]
    fn test_malformed_descriptor_fails() {
        let body = json!({
            "bulk": [{"filename": "a.zip"}],
            "delta": []
        });
        assert!(parse_bulk_download(&body).is_err());
    }
}
