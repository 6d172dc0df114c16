//! Report generation for KPI and metadata results.
//!
//! This module provides multiple output formats:
//! - Text: sectioned listing for terminals and `code_kpis.txt`
//! - JSON: structured data for programmatic integration
//! - CSV: `metric,value` rows
//! - Markdown: the comprehensive analysis report
//!
//! # Security
//!
//! The `escape` module provides utilities for safe output generation.
//! Project-controlled data (metadata strings, file paths, gate report
//! excerpts) should be escaped before embedding in HTML or Markdown.

mod csv;
pub mod escape;
mod json;
mod markdown;
mod summary;
mod types;

pub use csv::CsvReporter;
pub use json::JsonReporter;
pub use markdown::{GateSummary, MarkdownReporter, FALLBACK_RECOMMENDATIONS};
pub use summary::SummaryReporter;
pub use types::{GateReport, ReportConfig, ReportFormat, ToolInfo};

use crate::model::ProjectKpis;
use crate::quality::QualityReport;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report for a full project analysis
    fn generate_kpi_report(
        &self,
        kpis: &ProjectKpis,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Generate a report for a single metadata document
    fn generate_metadata_report(
        &self,
        report: &QualityReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Write a KPI report to a writer
    fn write_kpi_report(
        &self,
        kpis: &ProjectKpis,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_kpi_report(kpis, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Text => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Csv => Box::new(CsvReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn test_factory_respects_format() {
        for format in ReportFormat::value_variants() {
            assert_eq!(create_reporter(*format).format(), *format);
        }
    }
}
