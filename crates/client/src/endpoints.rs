//! Endpoint templates for the MOT History trade API.

/// Production base URL.
pub const BASE_URL: &str = "https://history.mot.api.gov.uk/v1/trade";

/// Vehicle lookup by registration number.
#[must_use]
pub fn vehicle_by_registration(base: &str, registration: &str) -> String {
    format!("{base}/vehicles/registration/{registration}")
}

/// Vehicle lookup by VIN.
#[must_use]
pub fn vehicle_by_vin(base: &str, vin: &str) -> String {
    format!("{base}/vehicles/vin/{vin}")
}

/// Bulk-download file listing.
#[must_use]
pub fn bulk_download(base: &str) -> String {
    format!("{base}/vehicles/bulk-download")
}
