//! CSV report generator.
//!
//! Emits `metric,value` rows suitable for spreadsheet import and for
//! tracking KPIs across CI runs.

use super::escape::escape_csv;
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::ProjectKpis;
use crate::quality::QualityReport;

/// CSV report generator.
pub struct CsvReporter;

impl CsvReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn push_row(content: &mut String, metric: &str, value: impl std::fmt::Display) {
    content.push_str(metric);
    content.push(',');
    content.push_str(&escape_csv(&value.to_string()));
    content.push('\n');
}

fn push_metadata_rows(content: &mut String, report: &QualityReport, prefix: &str) {
    let row = |content: &mut String, name: &str, value: &dyn std::fmt::Display| {
        push_row(content, &format!("{prefix}{name}"), value);
    };
    row(content, "exists", &report.exists);
    row(content, "quality_score", &format!("{:.1}", report.overall_score));
    row(content, "field_completeness", &format!("{:.1}", report.field_completeness));
    row(content, "interface_quality", &format!("{:.1}", report.interface_quality));
    row(content, "test_coverage_score", &report.test_coverage_score);
    row(content, "flow_configuration_score", &report.flow_configuration_score);
    row(
        content,
        "documentation_metadata_score",
        &report.documentation_metadata_score,
    );
    row(content, "ai_generation_ready", &report.ai_generation_ready);
    row(content, "catalog_readiness", &report.catalog_readiness);
    row(content, "validation_status", &report.validation_status);
    row(content, "issues", &report.issues.len());
}

impl ReportGenerator for CsvReporter {
    fn generate_kpi_report(
        &self,
        kpis: &ProjectKpis,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut content = String::from("metric,value\n");

        push_row(&mut content, "overall_score", format!("{:.1}", kpis.summary.overall_score));

        let code = &kpis.code_metrics;
        push_row(&mut content, "rtl_files", code.rtl_files);
        push_row(&mut content, "rtl_lines", code.rtl_lines);
        push_row(&mut content, "rtl_modules", code.rtl_modules);
        push_row(&mut content, "testbench_files", code.testbench_files);
        push_row(&mut content, "testbench_lines", code.testbench_lines);

        let docs = &kpis.documentation_metrics;
        push_row(&mut content, "documentation_files", docs.documentation_files);
        push_row(&mut content, "documentation_lines", docs.documentation_lines);

        let tests = &kpis.test_metrics;
        push_row(&mut content, "test_files", tests.test_files);
        push_row(&mut content, "test_lines", tests.test_lines);
        push_row(&mut content, "coverage_files", tests.coverage_files);

        push_metadata_rows(&mut content, &kpis.metadata_analysis, "metadata_");

        Ok(content)
    }

    fn generate_metadata_report(
        &self,
        report: &QualityReport,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut content = String::from("metric,value\n");
        push_metadata_rows(&mut content, report, "");
        for (name, present) in report
            .required_fields
            .iter()
            .chain(report.optional_fields.iter())
        {
            push_row(&mut content, &format!("field.{name}"), present);
        }
        Ok(content)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Csv
    }
}
