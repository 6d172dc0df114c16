//! Analyze command handler.
//!
//! Implements the `analyze` subcommand: scan a project tree and print its
//! KPI report.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::analysis::ProjectAnalyzer;
use crate::config::AppConfig;
use crate::pipeline::{exit_codes, output_kpi_report, OutputTarget};

/// Run the analyze command, returning the exit code.
pub fn run_analyze(
    project_root: PathBuf,
    config: &AppConfig,
    output_file: Option<PathBuf>,
    quiet: bool,
) -> Result<i32> {
    let kpis = ProjectAnalyzer::new(&project_root)
        .with_options(config.analysis_options())
        .analyze()
        .with_context(|| format!("Failed to analyze {}", project_root.display()))?;

    let target = OutputTarget::from_option(output_file);
    output_kpi_report(
        &kpis,
        config.output.format,
        &target,
        config.output.no_color,
        quiet,
    )?;

    Ok(exit_codes::SUCCESS)
}
