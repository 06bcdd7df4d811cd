//! Unified error type for the mot-history workspace.

use std::fmt;
use thiserror::Error;

/// A documented error outcome: the API answered 400, 404 or 500 with a
/// well-formed `{message, errors?}` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code of the response.
    pub status: u16,
    /// Human-readable message from the error body.
    pub message: String,
    /// Machine-readable error codes, when the body carries them.
    pub errors: Option<Vec<String>>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "api error {}: {}", self.status, self.message)?;
        if let Some(errors) = &self.errors {
            write!(f, " [{}]", errors.join(", "))?;
        }
        Ok(())
    }
}

/// Enumerates all error kinds that can occur across mot-history crates.
///
/// None of these are retried internally; every failure propagates to the
/// caller, and classification never produces partial results.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Bearer token acquisition failed.
    #[error("authentication error: {0}")]
    Auth(String),

    /// Connection-level HTTP failure before any status was received.
    #[error("http error: {0}")]
    Http(String),

    /// The API answered with a status outside the documented set.
    #[error("transport fault: status={status}, body={body}")]
    Transport { status: u16, body: String },

    /// A well-formed 400/404/500 error body.
    #[error("{0}")]
    Api(ApiError),

    /// No candidate shape matched the top-level response object.
    #[error("unclassifiable response: {}; payload: {}", .reasons.join("; "), .payload)]
    Classification {
        /// One failure reason per candidate shape tried.
        reasons: Vec<String>,
        /// The raw input that failed to classify.
        payload: String,
    },

    /// A `motTests` element whose `dataSource` is not a known label.
    #[error("unknown dataSource {value:?} in motTests element {index}")]
    Discrimination { index: usize, value: String },

    /// Date text outside the four accepted lexical forms.
    #[error("unparseable date: {0:?}")]
    DateFormat(String),

    /// JSON serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl HistoryError {
    /// The HTTP status attached to this error, for the variants that carry one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => Some(*status),
            Self::Api(api) => Some(api.status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ApiError {
            status: 404,
            message: "not found".to_string(),
            errors: Some(vec!["E1".to_string()]),
        };
        assert_eq!(err.to_string(), "api error 404: not found [E1]");
    }

    #[test]
    fn test_api_error_display_without_codes() {
        let err = ApiError {
            status: 500,
            message: "boom".to_string(),
            errors: None,
        };
        assert_eq!(err.to_string(), "api error 500: boom");
    }

    #[test]
    fn test_transport_display() {
        let err = HistoryError::Transport {
            status: 503,
            body: "maintenance".to_string(),
        };
        let s = err.to_string();
        assert!(s.contains("503"));
        assert!(s.contains("maintenance"));
    }

    #[test]
    fn test_classification_joins_reasons() {
        let err = HistoryError::Classification {
            reasons: vec!["first".to_string(), "second".to_string()],
            payload: "{}".to_string(),
        };
        assert!(err.to_string().contains("first; second"));
    }

    #[test]
    fn test_discrimination_names_offender() {
        let err = HistoryError::Discrimination {
            index: 2,
            value: "UNKNOWN".to_string(),
        };
        let s = err.to_string();
        assert!(s.contains("UNKNOWN"));
        assert!(s.contains('2'));
    }

    #[test]
    fn test_date_format_keeps_text_verbatim() {
        let err = HistoryError::DateFormat("31/12/2020".to_string());
        assert!(err.to_string().contains("31/12/2020"));
    }

    #[test]
    fn test_serialization_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: HistoryError = json_err.into();
        assert!(matches!(err, HistoryError::Serialization(_)));
    }

    #[test]
    fn test_status_accessor() {
        let api = HistoryError::Api(ApiError {
            status: 400,
            message: String::new(),
            errors: None,
        });
        assert_eq!(api.status(), Some(400));
        assert_eq!(
            HistoryError::Transport {
                status: 418,
                body: String::new()
            }
            .status(),
            Some(418)
        );
        assert_eq!(HistoryError::Auth("x".into()).status(), None);
    }
}
