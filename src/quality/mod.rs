//! Metadata quality scoring.
//!
//! Rates a `vyges-metadata.json` document on field completeness, interface
//! definitions, test metadata, flow configuration and provenance metadata,
//! then classifies it for catalog publication.
//!
//! Scoring is pure: no I/O, deterministic for a given input, and safe to
//! call from several threads on different documents.
//!
//! # Usage
//!
//! ```no_run
//! use ip_kpis::pipeline::load_metadata;
//! use ip_kpis::quality::QualityScorer;
//! use std::path::Path;
//!
//! let input = load_metadata(Path::new("vyges-metadata.json"));
//! let report = QualityScorer::new().score(&input);
//!
//! println!("Overall score: {:.1}/100", report.overall_score);
//! for rec in &report.recommendations {
//!     println!("- {rec}");
//! }
//! ```

mod metrics;
mod scorer;

pub use metrics::{
    DocumentationMetadataMetrics, FieldPresence, FlowMetrics, InterfaceMetrics,
    TestMetadataMetrics, AI_READY_MODES,
};
pub use scorer::{
    CatalogReadiness, QualityReport, QualityScorer, ScoringWeights, ValidationStatus,
    MOSTLY_VALID_RATIO, NEEDS_IMPROVEMENT_THRESHOLD, READY_THRESHOLD, RECOMMENDATION_THRESHOLD,
    WEIGHT_DOCUMENTATION_METADATA, WEIGHT_FIELD_COMPLETENESS, WEIGHT_FLOW_CONFIGURATION,
    WEIGHT_INTERFACE_QUALITY, WEIGHT_TEST_COVERAGE,
};
