//! Default values and named presets.

use super::types::{AppConfig, OutputConfig, ScoringConfig};
use crate::reports::ReportFormat;

/// Report directory used when none is configured
pub const DEFAULT_REPORT_DIR: &str = "reports";
/// Minimum metadata score enforced by the `ci` preset
pub const CI_MIN_SCORE: f64 = 60.0;
/// Minimum metadata score enforced by the `catalog` preset
pub const CATALOG_MIN_SCORE: f64 = 80.0;

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Human-readable reports, no gates
    Default,
    /// JSON output without color, failing on weak metadata
    Ci,
    /// Gates matching catalog publication requirements
    Catalog,
}

impl ConfigPreset {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Ci => "ci",
            Self::Catalog => "catalog",
        }
    }

    /// Parse a preset name, accepting a few aliases
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "ci" | "ci-cd" | "pipeline" => Some(Self::Ci),
            "catalog" | "publish" => Some(Self::Catalog),
            _ => None,
        }
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Text reports with no pass/fail gates",
            Self::Ci => "JSON output for pipelines, failing below a metadata score of 60",
            Self::Catalog => "Fails unless metadata is catalog-ready and scores at least 80",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Ci, Self::Catalog]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl AppConfig {
    /// Configuration for a named preset
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Ci => Self {
                output: OutputConfig {
                    format: ReportFormat::Json,
                    no_color: true,
                },
                scoring: ScoringConfig {
                    min_score: Some(CI_MIN_SCORE),
                    ..ScoringConfig::default()
                },
                ..Self::default()
            },
            ConfigPreset::Catalog => Self {
                scoring: ScoringConfig {
                    min_score: Some(CATALOG_MIN_SCORE),
                    require_ready: true,
                    ..ScoringConfig::default()
                },
                ..Self::default()
            },
        }
    }
}
