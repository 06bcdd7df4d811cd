//! Vehicle history records and MOT test record variants.
//!
//! Two mutually exclusive shapes exist per vehicle response: a tested
//! vehicle carrying a (possibly empty) list of test records, and a newly
//! registered vehicle carrying a first-test due date instead. The upstream
//! API does not tag the top level; only the nested test records carry a
//! discriminant (`dataSource`). Classification lives in the
//! `mot-history-classify` crate — these types are the vocabulary it
//! produces.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{DataSource, OdometerResultType, OdometerUnit, RecallStatus, TestResult};

/// A defect found during an MOT or annual test. Owned exclusively by its
/// parent test record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MotTestDefect {
    /// Description of the defect.
    pub text: Option<String>,
    /// Defect category as reported by the testing agency.
    #[serde(rename = "type")]
    pub defect_type: Option<String>,
    /// Whether the defect was marked dangerous.
    pub dangerous: Option<bool>,
}

/// Test record from DVSA (Driver and Vehicle Standards Agency, Great Britain).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DvsaMotTest {
    #[serde(with = "crate::dates::flexible")]
    pub completed_date: DateTime<Utc>,
    pub test_result: TestResult,
    #[serde(default, with = "crate::dates::flexible_opt")]
    pub expiry_date: Option<DateTime<Utc>>,
    pub odometer_value: Option<i64>,
    pub odometer_unit: Option<OdometerUnit>,
    pub odometer_result_type: OdometerResultType,
    /// 12-digit MOT test number.
    pub mot_test_number: Option<String>,
    /// Always [`DataSource::Dvsa`]; stored so downstream code can match on
    /// it without re-reading the raw label.
    pub data_source: DataSource,
    #[serde(default)]
    pub defects: Vec<MotTestDefect>,
}

/// Test record from DVA NI (Driver and Vehicle Agency, Northern Ireland).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DvaNiMotTest {
    #[serde(with = "crate::dates::flexible")]
    pub completed_date: DateTime<Utc>,
    pub test_result: TestResult,
    #[serde(default, with = "crate::dates::flexible_opt")]
    pub expiry_date: Option<DateTime<Utc>>,
    pub odometer_value: Option<i64>,
    pub odometer_unit: Option<OdometerUnit>,
    pub odometer_result_type: OdometerResultType,
    pub mot_test_number: Option<String>,
    /// Always [`DataSource::DvaNi`].
    pub data_source: DataSource,
}

/// Test record from CVS (Commercial Vehicle Service).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CvsMotTest {
    #[serde(with = "crate::dates::flexible")]
    pub completed_date: DateTime<Utc>,
    pub test_result: TestResult,
    #[serde(default, with = "crate::dates::flexible_opt")]
    pub expiry_date: Option<DateTime<Utc>>,
    pub odometer_value: Option<i64>,
    pub odometer_unit: Option<OdometerUnit>,
    pub odometer_result_type: OdometerResultType,
    /// Test certificate number.
    pub mot_test_number: Option<String>,
    /// Name of the Authorised Test Facility where the test was conducted.
    pub location: Option<String>,
    /// Always [`DataSource::Cvs`].
    pub data_source: DataSource,
    #[serde(default)]
    pub defects: Vec<MotTestDefect>,
}

/// A single MOT or annual test record, tagged by its originating agency.
///
/// Serializes without an outer tag; each variant carries its `dataSource`
/// literal, so the wire form is preserved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MotTest {
    Dvsa(DvsaMotTest),
    DvaNi(DvaNiMotTest),
    Cvs(CvsMotTest),
}

impl MotTest {
    /// The agency this record originates from.
    #[must_use]
    pub fn data_source(&self) -> DataSource {
        match self {
            Self::Dvsa(t) => t.data_source,
            Self::DvaNi(t) => t.data_source,
            Self::Cvs(t) => t.data_source,
        }
    }

    /// Date-time the test was completed.
    #[must_use]
    pub fn completed_date(&self) -> DateTime<Utc> {
        match self {
            Self::Dvsa(t) => t.completed_date,
            Self::DvaNi(t) => t.completed_date,
            Self::Cvs(t) => t.completed_date,
        }
    }

    /// Pass/fail outcome of the test.
    #[must_use]
    pub fn test_result(&self) -> TestResult {
        match self {
            Self::Dvsa(t) => t.test_result,
            Self::DvaNi(t) => t.test_result,
            Self::Cvs(t) => t.test_result,
        }
    }

    /// Test number or certificate number, when present.
    #[must_use]
    pub fn mot_test_number(&self) -> Option<&str> {
        match self {
            Self::Dvsa(t) => t.mot_test_number.as_deref(),
            Self::DvaNi(t) => t.mot_test_number.as_deref(),
            Self::Cvs(t) => t.mot_test_number.as_deref(),
        }
    }

    /// Defects recorded for this test. DVA NI records carry none.
    #[must_use]
    pub fn defects(&self) -> &[MotTestDefect] {
        match self {
            Self::Dvsa(t) => &t.defects,
            Self::DvaNi(_) => &[],
            Self::Cvs(t) => &t.defects,
        }
    }
}

/// Vehicle with at least one registered MOT or annual test (the list may
/// still be empty for the current year).
///
/// The `motTests` field is populated by the classifier, which validates the
/// raw list through discriminant dispatch before attaching it; plain serde
/// deserialization of this struct deliberately excludes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TestedVehicle {
    pub registration: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    /// Date the vehicle was first used in the United Kingdom.
    #[serde(default, with = "crate::dates::flexible_opt")]
    pub first_used_date: Option<DateTime<Utc>>,
    pub fuel_type: Option<String>,
    pub primary_colour: Option<String>,
    #[serde(default, with = "crate::dates::flexible_opt")]
    pub registration_date: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::dates::flexible_opt")]
    pub manufacture_date: Option<DateTime<Utc>>,
    /// Engine cylinder capacity in cc.
    pub engine_size: Option<String>,
    pub has_outstanding_recall: RecallStatus,
    #[serde(skip_deserializing)]
    pub mot_tests: Vec<MotTest>,
}

/// Newly registered vehicle with no test history yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewRegVehicle {
    pub registration: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub manufacture_year: Option<i32>,
    pub fuel_type: Option<String>,
    pub primary_colour: Option<String>,
    #[serde(default, with = "crate::dates::flexible_opt")]
    pub registration_date: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::dates::flexible_opt")]
    pub manufacture_date: Option<DateTime<Utc>>,
    /// Date the first MOT test is due. The key must be present (it is what
    /// distinguishes this shape structurally), but the value may be null.
    #[serde(with = "crate::dates::flexible_opt")]
    pub mot_test_due_date: Option<DateTime<Utc>>,
    pub has_outstanding_recall: RecallStatus,
}

/// One vehicle history result: exactly one of the two shapes applies.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum VehicleHistory {
    Tested(TestedVehicle),
    NewRegistration(NewRegVehicle),
}

impl VehicleHistory {
    /// Registration number, common to both shapes.
    #[must_use]
    pub fn registration(&self) -> Option<&str> {
        match self {
            Self::Tested(v) => v.registration.as_deref(),
            Self::NewRegistration(v) => v.registration.as_deref(),
        }
    }

    /// Outstanding-recall status, common to both shapes.
    #[must_use]
    pub fn has_outstanding_recall(&self) -> RecallStatus {
        match self {
            Self::Tested(v) => v.has_outstanding_recall,
            Self::NewRegistration(v) => v.has_outstanding_recall,
        }
    }

    /// The test records, if this is a tested vehicle.
    #[must_use]
    pub fn mot_tests(&self) -> Option<&[MotTest]> {
        match self {
            Self::Tested(v) => Some(&v.mot_tests),
            Self::NewRegistration(_) => None,
        }
    }
}
