//! Top-level structural classification of vehicle history responses.

use mot_history_types::{HistoryError, NewRegVehicle, TestedVehicle, VehicleHistory, traits::Result};
use serde_json::Value;

use crate::discriminate::discriminate;

/// Outcome of trying one candidate shape.
enum TrialError {
    /// The shape did not match; the reason is recorded and the next
    /// candidate is tried.
    Mismatch(String),
    /// A failure that aborts the whole trial (bad discriminant, invalid
    /// element inside a recognised variant).
    Fatal(HistoryError),
}

/// Determine which of the two vehicle shapes a raw response object is, and
/// produce the fully validated record.
///
/// Candidates are tried in priority order: the tested-vehicle shape first,
/// then the new-registration shape. The order matters — a tested vehicle
/// with an empty `motTests` list must never be mistaken for the looser
/// shape. First match wins; there is no fallback shape.
///
/// # Errors
///
/// Returns [`HistoryError::Discrimination`] or
/// [`HistoryError::Classification`] from the nested test-record dispatch,
/// or [`HistoryError::Classification`] naming the raw input and the
/// failure reason of every candidate when none matched.
pub fn classify_vehicle(value: &Value) -> Result<VehicleHistory> {
    let mut reasons = Vec::with_capacity(2);

    match parse_tested(value) {
        Ok(vehicle) => return Ok(VehicleHistory::Tested(vehicle)),
        Err(TrialError::Fatal(err)) => return Err(err),
        Err(TrialError::Mismatch(reason)) => reasons.push(format!("tested vehicle: {reason}")),
    }

    match parse_new_registration(value) {
        Ok(vehicle) => return Ok(VehicleHistory::NewRegistration(vehicle)),
        Err(TrialError::Fatal(err)) => return Err(err),
        Err(TrialError::Mismatch(reason)) => reasons.push(format!("new registration: {reason}")),
    }

    Err(HistoryError::Classification {
        reasons,
        payload: value.to_string(),
    })
}

/// Tested-vehicle candidate: requires the `motTests` key, routes the raw
/// list through discriminant dispatch, then validates the remaining fields
/// strictly with the list detached.
fn parse_tested(value: &Value) -> std::result::Result<TestedVehicle, TrialError> {
    let object = value
        .as_object()
        .ok_or_else(|| TrialError::Mismatch("response is not a JSON object".to_string()))?;
    let raw_tests = object
        .get("motTests")
        .ok_or_else(|| TrialError::Mismatch("missing required field `motTests`".to_string()))?;
    let elements = raw_tests
        .as_array()
        .ok_or_else(|| TrialError::Mismatch("`motTests` is not an array".to_string()))?;

    // Nested dispatch first: an unknown dataSource must surface as a
    // discrimination failure, not as a shape mismatch.
    let mot_tests = discriminate(elements).map_err(TrialError::Fatal)?;

    let mut fields = object.clone();
    fields.remove("motTests");
    let mut vehicle: TestedVehicle = serde_json::from_value(Value::Object(fields))
        .map_err(|err| TrialError::Mismatch(err.to_string()))?;
    vehicle.mot_tests = mot_tests;
    Ok(vehicle)
}

fn parse_new_registration(value: &Value) -> std::result::Result<NewRegVehicle, TrialError> {
    serde_json::from_value(value.clone()).map_err(|err| TrialError::Mismatch(err.to_string()))
}
