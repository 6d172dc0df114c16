//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator, ToolInfo};
use crate::model::ProjectKpis;
use crate::quality::QualityReport;
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
    /// Emit the bare payload without the report envelope
    bare: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pretty: true,
            bare: false,
        }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Emit only the payload, as written to `code_kpis.json`
    #[must_use]
    pub const fn bare(mut self) -> Self {
        self.bare = true;
        self
    }

    fn render<T: Serialize>(
        &self,
        payload: &T,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        if self.bare {
            return self.to_json(payload);
        }
        let report = JsonReport {
            metadata: JsonReportMetadata {
                tool: ToolInfo::default(),
                title: config.title.clone(),
                generated_at: Utc::now().to_rfc3339(),
            },
            payload,
        };
        self.to_json(&report)
    }

    fn to_json<T: Serialize>(&self, value: &T) -> Result<String, ReportError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_kpi_report(
        &self,
        kpis: &ProjectKpis,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        self.render(kpis, config)
    }

    fn generate_metadata_report(
        &self,
        report: &QualityReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        self.render(report, config)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

// JSON structures for serialization

#[derive(Serialize)]
struct JsonReport<'a, T: Serialize> {
    metadata: JsonReportMetadata,
    #[serde(flatten)]
    payload: &'a T,
}

#[derive(Serialize)]
struct JsonReportMetadata {
    tool: ToolInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    generated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quality::{CatalogReadiness, QualityReport};

    #[test]
    fn test_envelope_contains_tool_info() {
        let report = QualityReport {
            exists: true,
            catalog_readiness: CatalogReadiness::Ready,
            ..QualityReport::default()
        };
        let out = JsonReporter::new()
            .generate_metadata_report(&report, &ReportConfig::default())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["metadata"]["tool"]["name"], "ip-kpis");
        assert_eq!(value["catalog_readiness"], "ready");
        assert_eq!(value["exists"], true);
    }

    #[test]
    fn test_bare_payload() {
        let out = JsonReporter::new()
            .bare()
            .pretty(false)
            .generate_metadata_report(&QualityReport::default(), &ReportConfig::default())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value.get("metadata").is_none());
        assert_eq!(value["validation_status"], "unknown");
    }
}
