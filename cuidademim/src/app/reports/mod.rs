//! Administrative reports
//!
//! Each report is a `ReportStrategy`: it fetches canned records, formats one
//! row per record and names its columns and title. `ReportRegistry` maps the
//! report keys to strategies and `ReportContext` runs one report request
//! against a registry.

pub mod adoption_report;
pub mod mock_data;
pub mod partnership_report;
pub mod user_report;

use std::collections::HashMap;

use crate::domain::entities::{Report, ReportCell, ReportOptions, ReportType};
use crate::error::DomainError;

pub use adoption_report::AdoptionReportStrategy;
pub use partnership_report::PartnershipReportStrategy;
pub use user_report::UserReportStrategy;

/// The steps a report is assembled from
pub trait ReportStrategy {
    type Record;

    fn fetch_data(&self, options: &ReportOptions) -> Vec<Self::Record>;

    /// Column values in the same order as `headers`
    fn format_row(&self, record: &Self::Record) -> Vec<ReportCell>;

    fn headers(&self) -> &'static [&'static str];

    fn title(&self) -> &'static str;
}

/// Object-safe face of a strategy, as stored in the registry
pub trait Reporter: Send + Sync {
    fn handle_report(&self, options: &ReportOptions) -> Report;
}

impl<S> Reporter for S
where
    S: ReportStrategy + Send + Sync,
{
    fn handle_report(&self, options: &ReportOptions) -> Report {
        let rows = self
            .fetch_data(options)
            .iter()
            .map(|record| self.format_row(record))
            .collect();

        Report {
            title: self.title().to_string(),
            headers: self.headers().iter().map(|h| h.to_string()).collect(),
            rows,
        }
    }
}

/// Mapping from report type to the strategy that produces it
pub struct ReportRegistry {
    strategies: HashMap<ReportType, Box<dyn Reporter>>,
}

impl Default for ReportRegistry {
    fn default() -> Self {
        Self::empty()
            .with(ReportType::UserReport, UserReportStrategy)
            .with(ReportType::AdoptionReport, AdoptionReportStrategy)
            .with(ReportType::PartnershipReport, PartnershipReportStrategy)
    }
}

impl ReportRegistry {
    /// A registry with no strategies
    pub fn empty() -> Self {
        Self {
            strategies: HashMap::new(),
        }
    }

    /// Register (or replace) the strategy for a report type
    pub fn with<R: Reporter + 'static>(mut self, report_type: ReportType, reporter: R) -> Self {
        self.strategies.insert(report_type, Box::new(reporter));
        self
    }

    /// Registered report keys in a stable order
    pub fn available_strategies(&self) -> Vec<&'static str> {
        ReportType::ALL
            .iter()
            .filter(|t| self.strategies.contains_key(*t))
            .map(|t| t.key())
            .collect()
    }

    pub fn is_valid(&self, key: &str) -> bool {
        key.parse::<ReportType>()
            .map(|t| self.strategies.contains_key(&t))
            .unwrap_or(false)
    }

    fn get(&self, key: &str) -> Result<&dyn Reporter, DomainError> {
        let report_type: ReportType = key.parse()?;
        self.strategies
            .get(&report_type)
            .map(|s| &**s)
            .ok_or_else(|| DomainError::InvalidReportType(key.to_string()))
    }
}

/// Runs report requests against a registry
pub struct ReportContext<'a> {
    registry: &'a ReportRegistry,
}

impl<'a> ReportContext<'a> {
    pub fn new(registry: &'a ReportRegistry) -> Self {
        Self { registry }
    }

    /// Produce the report registered under `report_type`
    ///
    /// Fails with `DomainError::InvalidReportType` for an unknown key.
    pub fn execute_report(
        &self,
        report_type: &str,
        options: &ReportOptions,
    ) -> Result<Report, DomainError> {
        let strategy = self.registry.get(report_type).map_err(|e| {
            tracing::warn!(report_type = %report_type, "Unknown report type requested");
            e
        })?;

        let report = strategy.handle_report(options);
        tracing::info!(
            report_type = %report_type,
            rows = report.rows.len(),
            "Report generated"
        );
        Ok(report)
    }
}
