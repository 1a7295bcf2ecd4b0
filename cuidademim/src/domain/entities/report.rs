//! Administrative report types
//!
//! Tabular payloads produced by the report strategies.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The fixed set of administrative reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    UserReport,
    AdoptionReport,
    PartnershipReport,
}

impl ReportType {
    pub const ALL: [ReportType; 3] = [
        ReportType::UserReport,
        ReportType::AdoptionReport,
        ReportType::PartnershipReport,
    ];

    /// The key callers use to select this report
    pub fn key(&self) -> &'static str {
        match self {
            ReportType::UserReport => "user_report",
            ReportType::AdoptionReport => "adoption_report",
            ReportType::PartnershipReport => "partnership_report",
        }
    }
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl std::str::FromStr for ReportType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportType::ALL
            .into_iter()
            .find(|t| t.key() == s)
            .ok_or_else(|| DomainError::InvalidReportType(s.to_string()))
    }
}

/// Optional filters for a report request
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReportOptions {
    /// Restricts the user report to one account type ("adotante", "ong")
    #[serde(rename = "tipo")]
    pub user_type: Option<String>,
}

impl ReportOptions {
    pub fn for_user_type(user_type: impl Into<String>) -> Self {
        Self {
            user_type: Some(user_type.into()),
        }
    }
}

/// A single scalar in a report row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ReportCell {
    Integer(i64),
    Text(String),
}

impl From<i64> for ReportCell {
    fn from(v: i64) -> Self {
        ReportCell::Integer(v)
    }
}

impl From<&str> for ReportCell {
    fn from(v: &str) -> Self {
        ReportCell::Text(v.to_string())
    }
}

impl std::fmt::Display for ReportCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportCell::Integer(v) => write!(f, "{}", v),
            ReportCell::Text(v) => write!(f, "{}", v),
        }
    }
}

/// A rendered report: title, ordered headers and ordered rows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<ReportCell>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_type_from_str() {
        assert_eq!(
            "user_report".parse::<ReportType>().unwrap(),
            ReportType::UserReport
        );
        assert_eq!(
            "adoption_report".parse::<ReportType>().unwrap(),
            ReportType::AdoptionReport
        );
        assert_eq!(
            "partnership_report".parse::<ReportType>().unwrap(),
            ReportType::PartnershipReport
        );
    }

    #[test]
    fn report_type_from_str_is_exact() {
        assert_eq!(
            "USER_REPORT".parse::<ReportType>(),
            Err(DomainError::InvalidReportType("USER_REPORT".to_string()))
        );
    }

    #[test]
    fn report_type_display_matches_key() {
        for t in ReportType::ALL {
            assert_eq!(t.to_string(), t.key());
        }
    }

    #[test]
    fn options_deserialize_tipo() {
        let options: ReportOptions = serde_json::from_str(r#"{"tipo": "ong"}"#).unwrap();
        assert_eq!(options.user_type.as_deref(), Some("ong"));
    }

    #[test]
    fn cells_serialize_as_plain_scalars() {
        let row = vec![ReportCell::from(7_i64), ReportCell::from("Ana")];
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"[7,"Ana"]"#);
    }
}
