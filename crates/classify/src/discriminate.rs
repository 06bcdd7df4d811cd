//! Discriminant-based dispatch for the nested `motTests` list.

use mot_history_types::{
    CvsMotTest, DataSource, DvaNiMotTest, DvsaMotTest, HistoryError, MotTest, traits::Result,
};
use serde_json::Value;

/// Resolve every raw `motTests` element to its typed variant.
///
/// Each element's `dataSource` label selects the constructor by exact
/// string match; the element is then fully validated against that
/// variant's field set (required fields, enum membership, date parsing).
/// Classification of a vehicle's history is all-or-nothing: the first bad
/// element fails the whole list, a valid prefix is never returned.
///
/// # Errors
///
/// Returns [`HistoryError::Discrimination`] for an unknown or missing
/// label, identifying the element index and the offending value, or
/// [`HistoryError::Classification`] when a recognised element fails
/// validation.
pub fn discriminate(raw: &[Value]) -> Result<Vec<MotTest>> {
    raw.iter()
        .enumerate()
        .map(|(index, element)| discriminate_one(index, element))
        .collect()
}

fn discriminate_one(index: usize, element: &Value) -> Result<MotTest> {
    let Some(label) = element.get("dataSource").and_then(Value::as_str) else {
        return Err(HistoryError::Discrimination {
            index,
            value: element
                .get("dataSource")
                .cloned()
                .unwrap_or(Value::Null)
                .to_string(),
        });
    };

    match DataSource::from_label(label) {
        Some(DataSource::Dvsa) => serde_json::from_value::<DvsaMotTest>(element.clone())
            .map(MotTest::Dvsa)
            .map_err(|err| element_error(index, label, &err, element)),
        Some(DataSource::DvaNi) => serde_json::from_value::<DvaNiMotTest>(element.clone())
            .map(MotTest::DvaNi)
            .map_err(|err| element_error(index, label, &err, element)),
        Some(DataSource::Cvs) => serde_json::from_value::<CvsMotTest>(element.clone())
            .map(MotTest::Cvs)
            .map_err(|err| element_error(index, label, &err, element)),
        None => Err(HistoryError::Discrimination {
            index,
            value: label.to_string(),
        }),
    }
}

fn element_error(index: usize, label: &str, err: &serde_json::Error, element: &Value) -> HistoryError {
    HistoryError::Classification {
        reasons: vec![format!("{label} test record {index}: {err}")],
        payload: element.to_string(),
    }
}
