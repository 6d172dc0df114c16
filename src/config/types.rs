//! Configuration types for ip-kpis.

use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::analysis::{AnalysisOptions, DEFAULT_EXCLUDED_DIRS};
use crate::model::METADATA_FILE_NAME;
use crate::pages::{DEFAULT_OUTPUT, DEFAULT_TEMPLATE};
use crate::quality::ScoringWeights;
use crate::reports::ReportFormat;

use super::defaults::DEFAULT_REPORT_DIR;

// ============================================================================
// Application Configuration
// ============================================================================

/// Top-level configuration, loaded from `.ip-kpis.yaml` and overridden by
/// command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Project scanning
    pub analysis: AnalysisConfig,
    /// Report format and color
    pub output: OutputConfig,
    /// Metadata score weights and CI gates
    pub scoring: ScoringConfig,
    /// Report directory used by `ip-kpis report`
    pub report: ReportDirConfig,
    /// Landing page generation
    pub pages: PagesConfig,
}

impl AppConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzer options for this configuration
    #[must_use]
    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            metadata_file: self.analysis.metadata_file.clone(),
            excluded_dirs: self.analysis.excluded_dirs.clone(),
            detailed: self.analysis.detailed,
            weights: self.scoring.weights,
        }
    }
}

// ============================================================================
// Sections
// ============================================================================

/// Project scanning options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Metadata file name relative to the project root
    pub metadata_file: String,
    /// Directory names skipped during the walk
    pub excluded_dirs: Vec<String>,
    /// Always include the detailed analysis section
    pub detailed: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            metadata_file: METADATA_FILE_NAME.to_string(),
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|d| (*d).to_string()).collect(),
            detailed: false,
        }
    }
}

/// Output format options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format: text, json, csv, markdown
    pub format: ReportFormat,
    /// Disable ANSI color in text output
    pub no_color: bool,
}

/// Metadata scoring options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScoringConfig {
    /// Overall-score weights; must sum to 1.0
    pub weights: ScoringWeights,
    /// Fail `ip-kpis metadata` below this overall score
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score: Option<f64>,
    /// Fail `ip-kpis metadata` unless the metadata is catalog-ready
    pub require_ready: bool,
}

/// Report directory options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ReportDirConfig {
    /// Directory reports are written into, relative to the project root
    pub output_dir: PathBuf,
    /// Gate analysis report summarized in the comprehensive report
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gate_report: Option<PathBuf>,
}

impl Default for ReportDirConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_REPORT_DIR),
            gate_report: None,
        }
    }
}

/// Landing page options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PagesConfig {
    /// HTML template, relative to the project root
    pub template: PathBuf,
    /// Generated page, relative to the project root
    pub output: PathBuf,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            template: PathBuf::from(DEFAULT_TEMPLATE),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.analysis.metadata_file, "vyges-metadata.json");
        assert_eq!(config.analysis.excluded_dirs, vec![".git"]);
        assert_eq!(config.output.format, ReportFormat::Text);
        assert_eq!(config.report.output_dir, PathBuf::from("reports"));
        assert_eq!(config.pages.template, PathBuf::from("public/index_template.html"));
        assert!(config.scoring.min_score.is_none());
    }

    #[test]
    fn test_analysis_options_carry_weights() {
        let mut config = AppConfig::default();
        config.analysis.detailed = true;
        config.scoring.weights.field_completeness = 0.5;
        config.scoring.weights.interface_quality = 0.0;

        let opts = config.analysis_options();
        assert!(opts.detailed);
        assert_eq!(opts.weights.field_completeness, 0.5);
        assert_eq!(opts.metadata_file, "vyges-metadata.json");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: AppConfig = serde_yaml::from_str("scoring:\n  min_score: 70\n").unwrap();
        assert_eq!(config.scoring.min_score, Some(70.0));
        assert_eq!(config.pages, PagesConfig::default());
        assert!((config.scoring.weights.total() - 1.0).abs() < 1e-9);
    }
}
