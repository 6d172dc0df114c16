//! Configuration file discovery and loading.

use std::path::{Path, PathBuf};

use super::types::AppConfig;

// ============================================================================
// Discovery
// ============================================================================

/// File names searched for, in order
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".ip-kpis.yaml",
    ".ip-kpis.yml",
    "ip-kpis.yaml",
    "ip-kpis.yml",
];

/// Directory under the user config dir holding a global config
const CONFIG_DIR_NAME: &str = "ip-kpis";

/// Find a config file.
///
/// Search order:
/// 1. Explicit path if it exists
/// 2. Current directory
/// 3. Enclosing git work tree root
/// 4. User config directory (`~/.config/ip-kpis/`)
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
        tracing::warn!("Config file {} does not exist", path.display());
    }

    let cwd = std::env::current_dir().ok();
    if let Some(path) = cwd.as_deref().and_then(find_config_in_dir) {
        return Some(path);
    }
    if let Some(path) = cwd
        .as_deref()
        .and_then(find_git_root)
        .and_then(|root| find_config_in_dir(&root))
    {
        return Some(path);
    }
    user_config_dir().and_then(|dir| find_config_in_dir(&dir))
}

/// Directory holding the user-wide config file
#[must_use]
pub fn user_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME))
}

fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

fn find_git_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

// ============================================================================
// Loading
// ============================================================================

/// Error loading a config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load an [`AppConfig`] from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&content)?)
}

/// Load the discovered config file, or defaults when there is none or it
/// cannot be parsed. Returns the path actually loaded.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {e}", path.display());
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Example Config
// ============================================================================

/// Serialized form of a configuration, with a short header.
#[must_use]
pub fn generate_example_config(config: &AppConfig) -> String {
    format!(
        "# ip-kpis configuration\n# Save as .ip-kpis.yaml in the project root or ~/.config/ip-kpis/\n\n{}",
        serde_yaml::to_string(config).unwrap_or_default()
    )
}

/// Commented example listing every option.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# ip-kpis configuration
# =====================
#
# Looked up as .ip-kpis.yaml (or .yml, or without the dot) in the current
# directory, the git work tree root, then ~/.config/ip-kpis/.
# Command-line flags override these settings.

# Project scanning
analysis:
  # Metadata file, relative to the project root
  metadata_file: vyges-metadata.json
  # Directory names never descended into
  excluded_dirs:
    - .git
  # Include largest files, module sizes and tool mentions
  detailed: false

# Report output
output:
  # text, json, csv, markdown
  format: text
  no_color: false

# Metadata quality score
scoring:
  # Must sum to 1.0
  weights:
    field_completeness: 0.30
    interface_quality: 0.20
    test_coverage: 0.20
    flow_configuration: 0.15
    documentation_metadata: 0.15
  # Exit 1 from `ip-kpis metadata` below this score
  # min_score: 60
  # Exit 2 from `ip-kpis metadata` unless catalog-ready
  require_ready: false

# `ip-kpis report`
report:
  output_dir: reports
  # gate_report: flow/yosys/gate_analysis_report.md

# `ip-kpis pages`
pages:
  template: public/index_template.html
  output: public/index.html
"
    .to_string()
}
