//! Report command handler.
//!
//! Implements the `report` subcommand: write the comprehensive Markdown
//! report, or only the KPI JSON, into the report directory.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::analysis::ProjectAnalyzer;
use crate::config::AppConfig;
use crate::pipeline::{exit_codes, write_comprehensive_report, write_kpis_json};

/// Run the report command, returning the exit code.
///
/// Reports always carry the detailed analysis section.
pub fn run_report(
    project_root: PathBuf,
    config: &AppConfig,
    kpis_only: bool,
    quiet: bool,
) -> Result<i32> {
    let mut options = config.analysis_options();
    options.detailed = true;
    let kpis = ProjectAnalyzer::new(&project_root)
        .with_options(options)
        .analyze()
        .with_context(|| format!("Failed to analyze {}", project_root.display()))?;

    let path = if kpis_only {
        write_kpis_json(&project_root, &kpis, &config.report, quiet)?
    } else {
        write_comprehensive_report(&project_root, &kpis, &config.report, quiet)?
    };

    if !quiet {
        eprintln!("Report written to {}", path.display());
    }
    Ok(exit_codes::SUCCESS)
}
