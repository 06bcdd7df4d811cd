//! Typed async client for the DVSA MOT History trade API.
//!
//! Authenticates with the OAuth2 client-credentials grant, issues the three
//! documented GET operations, and classifies each JSON response onto a
//! closed set of typed records. The caller always receives either a fully
//! typed success value or a specific, inspectable [`HistoryError`].
//!
//! ```no_run
//! use dvsa_mot_history::{Credentials, MotHistoryClient, VehicleHistory};
//!
//! # async fn example() -> Result<(), dvsa_mot_history::HistoryError> {
//! let client = MotHistoryClient::new(&Credentials {
//!     client_id: "…".into(),
//!     client_secret: "…".into(),
//!     tenant_id: "…".into(),
//!     api_key: "…".into(),
//! });
//!
//! match client.vehicle_history_by_registration("AB12CDE").await? {
//!     VehicleHistory::Tested(vehicle) => println!("{} tests", vehicle.mot_tests.len()),
//!     VehicleHistory::NewRegistration(vehicle) => {
//!         println!("first test due {:?}", vehicle.mot_test_due_date);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub use mot_history_auth::ClientCredentials;
pub use mot_history_classify::{classify_vehicle, discriminate, parse_bulk_download};
pub use mot_history_client::{Credentials, MotHistoryClient, ReqwestTransport, endpoints};
pub use mot_history_types::{
    ApiError, BearerToken, BulkDownload, CvsMotTest, DataSource, DvaNiMotTest, DvsaMotTest,
    FileDescriptor, HistoryError, HttpResponse, MotTest, MotTestDefect, NewRegVehicle,
    OdometerResultType, OdometerUnit, RecallStatus, TestResult, TestedVehicle, TokenProvider,
    Transport, VehicleHistory, dates,
};
