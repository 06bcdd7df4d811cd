//! Enumerated wire values of the MOT History trade API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of an MOT or annual test. Only passed or failed tests appear in
/// the history feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestResult {
    Passed,
    Failed,
}

/// Unit the odometer was read in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OdometerUnit {
    Mi,
    Km,
}

/// Whether the odometer could be read during the test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OdometerResultType {
    Read,
    Unreadable,
    NoOdometer,
}

/// Outstanding-recall status from the DVSA Recalls service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecallStatus {
    Yes,
    No,
    Unknown,
    Unavailable,
}

/// The agency a test record originates from. This is the discriminant the
/// nested `motTests` dispatch keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataSource {
    #[serde(rename = "DVSA")]
    Dvsa,
    #[serde(rename = "DVA NI")]
    DvaNi,
    #[serde(rename = "CVS")]
    Cvs,
}

impl DataSource {
    /// The exact wire label for this source.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dvsa => "DVSA",
            Self::DvaNi => "DVA NI",
            Self::Cvs => "CVS",
        }
    }

    /// Resolve a wire label to a source. Exact match only; anything else is
    /// an unknown discriminant.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "DVSA" => Some(Self::Dvsa),
            "DVA NI" => Some(Self::DvaNi),
            "CVS" => Some(Self::Cvs),
            _ => None,
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_result_serde() {
        let r: TestResult = serde_json::from_str("\"PASSED\"").unwrap();
        assert_eq!(r, TestResult::Passed);
        assert_eq!(serde_json::to_string(&TestResult::Failed).unwrap(), "\"FAILED\"");
    }

    #[test]
    fn test_odometer_unit_serde() {
        let u: OdometerUnit = serde_json::from_str("\"MI\"").unwrap();
        assert_eq!(u, OdometerUnit::Mi);
        let u: OdometerUnit = serde_json::from_str("\"KM\"").unwrap();
        assert_eq!(u, OdometerUnit::Km);
    }

    #[test]
    fn test_odometer_result_type_serde() {
        let t: OdometerResultType = serde_json::from_str("\"NO_ODOMETER\"").unwrap();
        assert_eq!(t, OdometerResultType::NoOdometer);
    }

    #[test]
    fn test_recall_status_serde() {
        let s: RecallStatus = serde_json::from_str("\"Unavailable\"").unwrap();
        assert_eq!(s, RecallStatus::Unavailable);
        assert_eq!(serde_json::to_string(&RecallStatus::Yes).unwrap(), "\"Yes\"");
    }

    #[test]
    fn test_data_source_labels() {
        assert_eq!(DataSource::Dvsa.as_str(), "DVSA");
        assert_eq!(DataSource::DvaNi.as_str(), "DVA NI");
        assert_eq!(DataSource::Cvs.as_str(), "CVS");
        for source in [DataSource::Dvsa, DataSource::DvaNi, DataSource::Cvs] {
            assert_eq!(DataSource::from_label(source.as_str()), Some(source));
        }
    }

    #[test]
    fn test_data_source_unknown_label() {
        assert_eq!(DataSource::from_label("UNKNOWN"), None);
        // case-sensitive exact match
        assert_eq!(DataSource::from_label("dvsa"), None);
        assert_eq!(DataSource::from_label("DVA  NI"), None);
    }

    #[test]
    fn test_data_source_serde_matches_labels() {
        let s: DataSource = serde_json::from_str("\"DVA NI\"").unwrap();
        assert_eq!(s, DataSource::DvaNi);
        assert_eq!(serde_json::to_string(&DataSource::DvaNi).unwrap(), "\"DVA NI\"");
    }
}
