//! Core types and traits for the mot-history workspace.
//!
//! This crate defines the shared vocabulary used across all layers of the
//! SDK: the error type, the wire enums and record shapes of the MOT History
//! trade API, bearer-token representation, flexible date parsing, and the
//! async traits behind which the HTTP transport and the token provider sit.

pub mod bulk;
pub mod dates;
pub mod enums;
pub mod error;
pub mod token;
pub mod traits;
pub mod vehicle;

pub use bulk::{BulkDownload, FileDescriptor};
pub use enums::{DataSource, OdometerResultType, OdometerUnit, RecallStatus, TestResult};
pub use error::{ApiError, HistoryError};
pub use token::BearerToken;
pub use traits::{HttpResponse, TokenProvider, Transport};
pub use vehicle::{
    CvsMotTest, DvaNiMotTest, DvsaMotTest, MotTest, MotTestDefect, NewRegVehicle, TestedVehicle,
    VehicleHistory,
};
