//! Endpoint façade for the MOT History trade API.
//!
//! Composes the token provider, the HTTP transport and the classification
//! core into the three logical operations: lookup by registration, lookup
//! by VIN, and the bulk-download listing. Each operation performs at most
//! one token acquisition and one network round trip, strictly
//! sequentially; retries, timeouts and cancellation are the transport's
//! business.

pub mod endpoints;

mod client;
mod transport;

pub use client::{Credentials, MotHistoryClient};
pub use transport::ReqwestTransport;
