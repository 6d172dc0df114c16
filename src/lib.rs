//! **Metadata quality scoring and KPI reporting for hardware IP repositories.**
//!
//! `ip-kpis` grades a project's `vyges-metadata.json` against the catalog
//! schema and measures the repository around it: RTL and testbench volume,
//! documentation, verification assets and flow artifacts.
//!
//! ## Modules
//!
//! - **[`model`]**: the metadata document, [`MetadataInput`], and the
//!   [`ProjectKpis`] record.
//! - **[`quality`]**: [`QualityScorer`], five weighted sub-scores, catalog
//!   readiness and validation status.
//! - **[`analysis`]**: [`ProjectAnalyzer`], a single-pass project scan.
//! - **[`reports`]**: text, JSON, CSV and Markdown renderers.
//! - **[`pages`]**: landing-page template filling.
//! - **[`pipeline`]**: metadata loading and report output shared by the CLI.
//! - **[`config`]**: YAML configuration with discovery and validation.
//!
//! ## Scoring a metadata file
//!
//! ```no_run
//! use std::path::Path;
//! use ip_kpis::{load_metadata, QualityScorer};
//!
//! let input = load_metadata(Path::new("vyges-metadata.json"));
//! let report = QualityScorer::new().score(&input);
//!
//! println!("{:.1}/100, {}", report.overall_score, report.catalog_readiness);
//! for issue in &report.issues {
//!     println!("issue: {issue}");
//! }
//! ```
//!
//! ## Analyzing a project
//!
//! ```no_run
//! use ip_kpis::{create_reporter, ProjectAnalyzer, ReportConfig, ReportFormat};
//!
//! let kpis = ProjectAnalyzer::new(".").analyze()?;
//! let text = create_reporter(ReportFormat::Markdown)
//!     .generate_kpi_report(&kpis, &ReportConfig::default())?;
//! println!("{text}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(clippy::unwrap_used)]

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod pages;
pub mod pipeline;
pub mod quality;
pub mod reports;

pub use analysis::{AnalysisOptions, ProjectAnalyzer};
pub use error::{ErrorContext, KpiError, Result};
pub use model::{MetadataDocument, MetadataInput, ProjectKpis};
pub use pages::{generate_pages, render_template, PageData};
pub use pipeline::{load_metadata, parse_metadata_str};
pub use quality::{CatalogReadiness, QualityReport, QualityScorer, ScoringWeights, ValidationStatus};
pub use reports::{create_reporter, ReportConfig, ReportFormat, ReportGenerator};
