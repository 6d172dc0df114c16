//! Configuration validation.

use super::types::{AnalysisConfig, AppConfig, ScoringConfig};
use crate::error::{KpiError, Result};

/// Tolerance for the weights summing to one
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// A single invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// Dotted path of the offending field
    pub field: String,
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Configuration sections that can check their own values.
pub trait Validatable {
    /// All problems found, empty when valid
    fn validate(&self) -> Vec<ConfigError>;

    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

/// Fail with every problem found in `config`, one per line.
///
/// # Errors
///
/// Returns [`KpiError::Config`] when any value is invalid.
pub fn ensure_valid(config: &impl Validatable) -> Result<()> {
    let errors = config.validate();
    if errors.is_empty() {
        return Ok(());
    }
    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
    Err(KpiError::config(format!("\n  {}", messages.join("\n  "))))
}

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = self.analysis.validate();
        errors.extend(self.scoring.validate());
        errors
    }
}

impl Validatable for AnalysisConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.metadata_file.trim().is_empty() {
            errors.push(ConfigError::new(
                "analysis.metadata_file",
                "Metadata file name must not be empty",
            ));
        }
        for dir in &self.excluded_dirs {
            if dir.is_empty() || dir.contains(['/', '\\']) {
                errors.push(ConfigError::new(
                    "analysis.excluded_dirs",
                    format!("'{dir}' must be a single directory name"),
                ));
            }
        }
        errors
    }
}

impl Validatable for ScoringConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let weights = self.weights.as_array();
        if weights.iter().any(|w| !(0.0..=1.0).contains(w)) {
            errors.push(ConfigError::new(
                "scoring.weights",
                "Each weight must be between 0.0 and 1.0",
            ));
        }
        let total = self.weights.total();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            errors.push(ConfigError::new(
                "scoring.weights",
                format!("Weights must sum to 1.0, got {total:.3}"),
            ));
        }
        if let Some(min) = self.min_score {
            if !(0.0..=100.0).contains(&min) {
                errors.push(ConfigError::new(
                    "scoring.min_score",
                    format!("Minimum score must be between 0 and 100, got {min}"),
                ));
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let mut config = AppConfig::default();
        config.scoring.weights.field_completeness = 0.9;
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "scoring.weights");
        assert!(errors[0].message.contains("sum to 1.0"));
    }

    #[test]
    fn test_ensure_valid_lists_every_problem() {
        let mut config = AppConfig::default();
        config.analysis.metadata_file = String::new();
        config.scoring.min_score = Some(-1.0);

        let err = ensure_valid(&config).unwrap_err();
        let text = err.to_string();
        assert!(text.starts_with("Invalid configuration:"));
        assert!(text.contains("analysis.metadata_file"));
        assert!(text.contains("scoring.min_score"));
        assert!(ensure_valid(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_min_score_range() {
        let mut config = AppConfig::default();
        config.scoring.min_score = Some(140.0);
        assert!(!config.is_valid());
    }

    #[test]
    fn test_excluded_dirs_are_names() {
        let mut config = AppConfig::default();
        config.analysis.excluded_dirs.push("build/out".to_string());
        let errors = config.validate();
        assert_eq!(errors[0].field, "analysis.excluded_dirs");
        assert_eq!(errors[0].to_string(), "analysis.excluded_dirs: 'build/out' must be a single directory name");
    }
}
