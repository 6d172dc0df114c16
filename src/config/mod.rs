//! Configuration for ip-kpis.
//!
//! Settings come from an optional YAML file and are overridden by
//! command-line flags.
//!
//! ```yaml
//! analysis:
//!   detailed: true
//! scoring:
//!   min_score: 70
//!   require_ready: true
//! ```
//!
//! ```no_run
//! use ip_kpis::config::{load_or_default, Validatable};
//!
//! let (config, loaded_from) = load_or_default(None);
//! for error in config.validate() {
//!     eprintln!("{error}");
//! }
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{ConfigPreset, CATALOG_MIN_SCORE, CI_MIN_SCORE, DEFAULT_REPORT_DIR};
pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config, load_config_file,
    load_or_default, user_config_dir, ConfigFileError, CONFIG_FILE_NAMES,
};
pub use types::{
    AnalysisConfig, AppConfig, OutputConfig, PagesConfig, ReportDirConfig, ScoringConfig,
};
pub use validation::{ensure_valid, ConfigError, Validatable};

/// JSON Schema for the configuration file format.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
