//! Metadata command handler.
//!
//! Implements the `metadata` subcommand: score one metadata file and gate
//! on the result.

use std::path::PathBuf;

use anyhow::Result;

use crate::config::AppConfig;
use crate::pipeline::{exit_codes, load_metadata, output_metadata_report, OutputTarget};
use crate::quality::{QualityReport, QualityScorer};

/// Run the metadata command, returning the exit code.
///
/// The caller is responsible for exiting with the returned code when it is
/// non-zero.
pub fn run_metadata(
    metadata_path: PathBuf,
    config: &AppConfig,
    output_file: Option<PathBuf>,
    quiet: bool,
) -> Result<i32> {
    let input = load_metadata(&metadata_path);
    let report = QualityScorer::new()
        .with_weights(config.scoring.weights)
        .score(&input);

    tracing::info!(
        "{}: score {:.1}/100, {}",
        metadata_path.display(),
        report.overall_score,
        report.catalog_readiness
    );

    let target = OutputTarget::from_option(output_file);
    output_metadata_report(
        &report,
        config.output.format,
        &target,
        config.output.no_color,
        quiet,
    )?;

    Ok(gate_exit_code(&report, config))
}

/// Exit code for the score and readiness gates. The score gate is checked
/// first.
#[must_use]
pub fn gate_exit_code(report: &QualityReport, config: &AppConfig) -> i32 {
    if let Some(min) = config.scoring.min_score {
        if report.overall_score < min {
            tracing::error!(
                "Metadata score {:.1} is below minimum {:.1}",
                report.overall_score,
                min
            );
            return exit_codes::BELOW_MIN_SCORE;
        }
    }
    if config.scoring.require_ready && !report.is_catalog_ready() {
        tracing::error!(
            "Metadata is not catalog-ready ({})",
            report.catalog_readiness
        );
        return exit_codes::NOT_CATALOG_READY;
    }
    exit_codes::SUCCESS
}
