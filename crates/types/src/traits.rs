//! Async boundary traits for the mot-history workspace.
//!
//! The SDK treats the HTTP stack and the OAuth token machinery as opaque
//! collaborators behind two narrow seams: "perform an authenticated GET,
//! return status + body" and "get a valid bearer token". Higher layers
//! depend only on these traits, which also makes the façade testable with
//! in-process stubs.

use crate::HistoryError;
use async_trait::async_trait;
use bytes::Bytes;

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, HistoryError>;

/// Raw outcome of a single GET: the status code plus the unparsed body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Bytes,
}

/// Produces a valid bearer token, acquiring or renewing one as needed.
///
/// Implementations own their caching; callers perform at most one token
/// acquisition per operation and never duplicate the cache.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Obtain a valid access token, performing network I/O if necessary.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::Auth`] when acquisition fails.
    async fn bearer_token(&self) -> Result<String>;
}

/// Performs a single authenticated GET. Connection pooling, TLS, timeouts
/// and retries are all this collaborator's concern, not the caller's.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue one GET with the given headers and return the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::Http`] when the request cannot complete at
    /// the connection level (no status received).
    async fn get(&self, url: &str, headers: &[(String, String)]) -> Result<HttpResponse>;
}
