//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Sectioned plain-text listing
    #[default]
    Text,
    /// Structured JSON output
    Json,
    /// `metric,value` rows for spreadsheet import
    Csv,
    /// Comprehensive Markdown analysis report
    #[value(alias = "md")]
    Markdown,
}

impl ReportFormat {
    /// Conventional file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Markdown => "md",
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}

/// A gate-analysis report produced by the synthesis flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateReport {
    /// Path shown in the comprehensive report
    pub path: String,
    /// Markdown text of the report
    pub content: String,
}

/// Configuration for report generation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Title for the report
    pub title: Option<String>,
    /// Gate analysis to summarize, if one was found
    pub gate_report: Option<GateReport>,
    /// Paths of other reports written alongside this one
    pub generated_reports: Vec<String>,
}

impl ReportConfig {
    /// Attach a gate analysis report
    #[must_use]
    pub fn with_gate_report(mut self, gate_report: GateReport) -> Self {
        self.gate_report = Some(gate_report);
        self
    }
}

/// Tool identification embedded in structured reports
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

impl Default for ToolInfo {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
