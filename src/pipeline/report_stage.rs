//! Report output stage.
//!
//! Renders KPI and metadata reports in the requested format and writes them
//! to stdout, a file, or the report directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::{should_use_color, write_output, write_report_file, OutputTarget};
use crate::config::ReportDirConfig;
use crate::model::ProjectKpis;
use crate::quality::QualityReport;
use crate::reports::{
    create_reporter_with_options, GateReport, JsonReporter, ReportConfig, ReportFormat,
    ReportGenerator,
};

/// File name of the comprehensive Markdown report
pub const COMPREHENSIVE_REPORT_NAME: &str = "comprehensive_analysis_report.md";
/// File name of the raw KPI dump
pub const KPIS_JSON_NAME: &str = "code_kpis.json";
/// Gate report name looked for in the report directory
pub const GATE_REPORT_NAME: &str = "gate_analysis_report.md";
/// Gate report written by the Yosys flow
pub const FLOW_GATE_REPORT: &str = "flow/yosys/gate_analysis_report.md";

/// Render a project KPI report and write it to `target`.
pub fn output_kpi_report(
    kpis: &ProjectKpis,
    format: ReportFormat,
    target: &OutputTarget,
    no_color: bool,
    quiet: bool,
) -> Result<()> {
    let reporter = create_reporter_with_options(format, should_use_color(no_color, target));
    let report = reporter
        .generate_kpi_report(kpis, &ReportConfig::default())
        .context("Failed to render KPI report")?;
    write_output(&report, target, quiet)
}

/// Render a metadata quality report and write it to `target`.
pub fn output_metadata_report(
    report: &QualityReport,
    format: ReportFormat,
    target: &OutputTarget,
    no_color: bool,
    quiet: bool,
) -> Result<()> {
    let reporter = create_reporter_with_options(format, should_use_color(no_color, target));
    let rendered = reporter
        .generate_metadata_report(report, &ReportConfig::default())
        .context("Failed to render metadata report")?;
    write_output(&rendered, target, quiet)
}

/// Write the comprehensive Markdown report into the report directory.
///
/// Relative directories are resolved against `root`. Returns the path of
/// the written report.
pub fn write_comprehensive_report(
    root: &Path,
    kpis: &ProjectKpis,
    dirs: &ReportDirConfig,
    quiet: bool,
) -> Result<PathBuf> {
    let output_dir = resolve(root, &dirs.output_dir);
    let report_path = output_dir.join(COMPREHENSIVE_REPORT_NAME);

    let mut config = ReportConfig::default();
    if let Some(gate) = find_gate_report(root, &output_dir, dirs.gate_report.as_deref()) {
        config = config.with_gate_report(gate);
    }
    config
        .generated_reports
        .push(format!("Comprehensive Report: {}", report_path.display()));

    let report = create_reporter_with_options(ReportFormat::Markdown, false)
        .generate_kpi_report(kpis, &config)
        .context("Failed to render comprehensive report")?;
    write_report_file(&output_dir, COMPREHENSIVE_REPORT_NAME, &report, quiet)
}

/// Write the full KPI record as pretty JSON into the report directory.
pub fn write_kpis_json(root: &Path, kpis: &ProjectKpis, dirs: &ReportDirConfig, quiet: bool) -> Result<PathBuf> {
    let output_dir = resolve(root, &dirs.output_dir);
    let json = JsonReporter::new()
        .bare()
        .generate_kpi_report(kpis, &ReportConfig::default())
        .context("Failed to serialize KPIs")?;
    write_report_file(&output_dir, KPIS_JSON_NAME, &json, quiet)
}

/// The configured gate report, or the first of the report directory's and
/// the Yosys flow's reports that exists.
fn find_gate_report(root: &Path, output_dir: &Path, configured: Option<&Path>) -> Option<GateReport> {
    let candidates: Vec<PathBuf> = match configured {
        Some(path) => vec![resolve(root, path)],
        None => vec![output_dir.join(GATE_REPORT_NAME), root.join(FLOW_GATE_REPORT)],
    };

    let path = candidates.into_iter().find(|p| p.is_file())?;
    match std::fs::read_to_string(&path) {
        Ok(content) => {
            tracing::debug!("Using gate report {}", path.display());
            Some(GateReport {
                path: display_relative(root, &path),
                content,
            })
        }
        Err(e) => {
            tracing::warn!("Could not read gate report {}: {e}", path.display());
            None
        }
    }
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

fn display_relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
