//! Metadata quality scorer.
//!
//! Combines the sub-score metrics into an overall score, then classifies
//! catalog readiness and validation status and collects issues and
//! recommendations.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::metrics::{
    DocumentationMetadataMetrics, FieldPresence, FlowMetrics, InterfaceMetrics,
    TestMetadataMetrics,
};
use crate::model::{MetadataDocument, MetadataInput, REQUIRED_FIELDS};

/// Default weight of field completeness in the overall score
pub const WEIGHT_FIELD_COMPLETENESS: f64 = 0.30;
/// Default weight of interface quality in the overall score
pub const WEIGHT_INTERFACE_QUALITY: f64 = 0.20;
/// Default weight of test metadata in the overall score
pub const WEIGHT_TEST_COVERAGE: f64 = 0.20;
/// Default weight of flow configuration in the overall score
pub const WEIGHT_FLOW_CONFIGURATION: f64 = 0.15;
/// Default weight of documentation metadata in the overall score
pub const WEIGHT_DOCUMENTATION_METADATA: f64 = 0.15;

/// Minimum overall score for a catalog-ready document
pub const READY_THRESHOLD: f64 = 80.0;
/// Minimum overall score for `needs_improvement`
pub const NEEDS_IMPROVEMENT_THRESHOLD: f64 = 60.0;
/// Fraction of required fields needed for `mostly_valid`
pub const MOSTLY_VALID_RATIO: f64 = 0.8;
/// Sub-scores below this trigger a recommendation
pub const RECOMMENDATION_THRESHOLD: f64 = 50.0;

const REC_INTERFACES: &str =
    "Improve interface definitions with proper type and signal specifications";
const REC_TEST_METADATA: &str =
    "Add comprehensive test metadata including coverage, testbenches, and simulators";
const REC_FLOWS: &str = "Configure synthesis and implementation flows for target platforms";
const REC_AI_GENERATION: &str = "Add AI generation metadata for automated development support";

/// Weights for the overall score (sum to 1.0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScoringWeights {
    pub field_completeness: f64,
    pub interface_quality: f64,
    pub test_coverage: f64,
    pub flow_configuration: f64,
    pub documentation_metadata: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            field_completeness: WEIGHT_FIELD_COMPLETENESS,
            interface_quality: WEIGHT_INTERFACE_QUALITY,
            test_coverage: WEIGHT_TEST_COVERAGE,
            flow_configuration: WEIGHT_FLOW_CONFIGURATION,
            documentation_metadata: WEIGHT_DOCUMENTATION_METADATA,
        }
    }
}

impl ScoringWeights {
    /// Return weights as an array for iteration
    #[must_use]
    pub const fn as_array(&self) -> [f64; 5] {
        [
            self.field_completeness,
            self.interface_quality,
            self.test_coverage,
            self.flow_configuration,
            self.documentation_metadata,
        ]
    }

    /// Sum of all weights
    #[must_use]
    pub fn total(&self) -> f64 {
        self.as_array().iter().sum()
    }
}

/// Whether a metadata document can be published to the IP catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogReadiness {
    /// No document was scored
    #[default]
    Unknown,
    Ready,
    NeedsImprovement,
    NotReady,
}

impl CatalogReadiness {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Ready => "ready",
            Self::NeedsImprovement => "needs_improvement",
            Self::NotReady => "not_ready",
        }
    }
}

impl std::fmt::Display for CatalogReadiness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural validity of a metadata document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
    #[default]
    Unknown,
    /// All required fields present
    Valid,
    /// At least 80% of required fields present
    MostlyValid,
    Incomplete,
    /// The document could not be decoded
    Invalid,
}

impl ValidationStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Valid => "valid",
            Self::MostlyValid => "mostly_valid",
            Self::Incomplete => "incomplete",
            Self::Invalid => "invalid",
        }
    }
}

impl std::fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete quality report for a metadata document.
///
/// The default value is the report for a project with no metadata file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct QualityReport {
    /// Whether a metadata file was found
    pub exists: bool,
    pub required_fields: IndexMap<String, bool>,
    pub optional_fields: IndexMap<String, bool>,
    pub field_completeness: f64,
    pub interface_quality: f64,
    pub test_coverage_score: f64,
    pub flow_configuration_score: f64,
    pub documentation_metadata_score: f64,
    /// Weighted sum of the five sub-scores
    pub overall_score: f64,
    pub ai_generation_ready: bool,
    pub catalog_readiness: CatalogReadiness,
    pub validation_status: ValidationStatus,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

impl QualityReport {
    /// Report for a metadata file that could not be decoded
    pub fn malformed(message: &str) -> Self {
        Self {
            exists: true,
            validation_status: ValidationStatus::Invalid,
            issues: vec![format!("JSON parsing error: {message}")],
            ..Self::default()
        }
    }

    /// Whether the document may be published to the catalog
    #[must_use]
    pub fn is_catalog_ready(&self) -> bool {
        self.catalog_readiness == CatalogReadiness::Ready
    }

    /// Number of required fields present
    #[must_use]
    pub fn required_present(&self) -> usize {
        self.required_fields.values().filter(|p| **p).count()
    }
}

/// Quality scorer for metadata documents
#[derive(Debug, Clone, Default)]
pub struct QualityScorer {
    weights: ScoringWeights,
}

impl QualityScorer {
    /// Create a scorer with the default weights
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom overall-score weights
    #[must_use]
    pub const fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Weights in use
    #[must_use]
    pub const fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score whatever the loader produced.
    pub fn score(&self, input: &MetadataInput) -> QualityReport {
        match input {
            MetadataInput::Missing => QualityReport::default(),
            MetadataInput::Malformed(message) => QualityReport::malformed(message),
            MetadataInput::Document(doc) => self.score_document(doc),
        }
    }

    /// Score a decoded document.
    pub fn score_document(&self, doc: &MetadataDocument) -> QualityReport {
        let presence = FieldPresence::from_document(doc);
        let interfaces = InterfaceMetrics::from_document(doc);
        let tests = TestMetadataMetrics::from_document(doc);
        let flows = FlowMetrics::from_document(doc);
        let documentation = DocumentationMetadataMetrics::from_document(doc);

        let field_completeness = presence.completeness();
        let interface_quality = interfaces.quality_score();
        let test_coverage_score = tests.score();
        let flow_configuration_score = flows.score();
        let documentation_metadata_score = documentation.score();
        let ai_generation_ready = documentation.ai_generation_ready();

        let overall_score = self.overall_score(&[
            field_completeness,
            interface_quality,
            test_coverage_score,
            flow_configuration_score,
            documentation_metadata_score,
        ]);

        let catalog_readiness = classify_readiness(overall_score, &presence);
        let validation_status = classify_validation(presence.required_present());

        let mut issues = Vec::new();
        let missing = presence.missing_required();
        if !missing.is_empty() {
            issues.push(format!("Missing required fields: {}", missing.join(", ")));
        }

        let mut recommendations = Vec::new();
        if interface_quality < RECOMMENDATION_THRESHOLD {
            recommendations.push(REC_INTERFACES.to_string());
        }
        if test_coverage_score < RECOMMENDATION_THRESHOLD {
            recommendations.push(REC_TEST_METADATA.to_string());
        }
        if flow_configuration_score < RECOMMENDATION_THRESHOLD {
            recommendations.push(REC_FLOWS.to_string());
        }
        if !ai_generation_ready {
            recommendations.push(REC_AI_GENERATION.to_string());
        }

        QualityReport {
            exists: true,
            required_fields: presence.required,
            optional_fields: presence.optional,
            field_completeness,
            interface_quality,
            test_coverage_score,
            flow_configuration_score,
            documentation_metadata_score,
            overall_score,
            ai_generation_ready,
            catalog_readiness,
            validation_status,
            issues,
            recommendations,
        }
    }

    /// Weighted sum of sub-scores in weight order
    fn overall_score(&self, scores: &[f64; 5]) -> f64 {
        scores
            .iter()
            .zip(self.weights.as_array())
            .map(|(s, w)| s * w)
            .sum()
    }
}

fn classify_readiness(overall: f64, presence: &FieldPresence) -> CatalogReadiness {
    if overall >= READY_THRESHOLD && presence.all_required_present() {
        CatalogReadiness::Ready
    } else if overall >= NEEDS_IMPROVEMENT_THRESHOLD {
        CatalogReadiness::NeedsImprovement
    } else {
        CatalogReadiness::NotReady
    }
}

fn classify_validation(required_present: usize) -> ValidationStatus {
    let total = REQUIRED_FIELDS.len();
    if required_present == total {
        ValidationStatus::Valid
    } else if required_present as f64 >= total as f64 * MOSTLY_VALID_RATIO {
        ValidationStatus::MostlyValid
    } else {
        ValidationStatus::Incomplete
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn score(value: Value) -> QualityReport {
        let doc = MetadataDocument::from_value(value).unwrap();
        QualityScorer::new().score_document(&doc)
    }

    fn required_only() -> Value {
        json!({
            "name": "uart",
            "version": "1.0.0",
            "description": "UART core",
            "license": "Apache-2.0",
            "target": ["asic"],
            "design_type": ["digital"],
            "maturity": "beta"
        })
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        let total = ScoringWeights::default().total();
        assert!((total - 1.0).abs() < 1e-9, "weights sum to {total}");
    }

    #[test]
    fn test_missing_input_is_zero_state() {
        let report = QualityScorer::new().score(&MetadataInput::Missing);
        assert!(!report.exists);
        assert_eq!(report.overall_score, 0.0);
        assert_eq!(report.validation_status, ValidationStatus::Unknown);
        assert_eq!(report.catalog_readiness, CatalogReadiness::Unknown);
        assert!(report.issues.is_empty());
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn test_malformed_input() {
        let report =
            QualityScorer::new().score(&MetadataInput::Malformed("unexpected EOF".into()));
        assert!(report.exists);
        assert_eq!(report.validation_status, ValidationStatus::Invalid);
        assert_eq!(report.issues, vec!["JSON parsing error: unexpected EOF"]);
        assert!(report.recommendations.is_empty());
        assert_eq!(report.field_completeness, 0.0);
    }

    #[test]
    fn test_required_only_boundary() {
        let report = score(required_only());
        assert!((report.field_completeness - 46.666_666).abs() < 1e-3);
        assert!((report.overall_score - 14.0).abs() < 1e-9);
        assert_eq!(report.validation_status, ValidationStatus::Valid);
        assert_eq!(report.catalog_readiness, CatalogReadiness::NotReady);
        assert!(report.issues.is_empty());
        assert_eq!(report.recommendations.len(), 4);
    }

    #[test]
    fn test_missing_license_and_maturity() {
        let mut value = required_only();
        let obj = value.as_object_mut().unwrap();
        obj.remove("license");
        obj.insert("maturity".into(), Value::Null);

        let report = score(value);
        assert_eq!(
            report.issues,
            vec!["Missing required fields: license, maturity"]
        );
        assert_eq!(report.validation_status, ValidationStatus::Incomplete);
    }

    #[test]
    fn test_six_of_seven_is_mostly_valid() {
        let mut value = required_only();
        value.as_object_mut().unwrap().remove("maturity");
        assert_eq!(score(value).validation_status, ValidationStatus::MostlyValid);
    }

    #[test]
    fn test_recommendation_order() {
        let mut value = required_only();
        value["test"] = json!({"coverage": 90, "testbenches": [], "simulators": []});
        let report = score(value);
        assert_eq!(
            report.recommendations,
            vec![REC_INTERFACES, REC_FLOWS, REC_AI_GENERATION]
        );
    }

    #[test]
    fn test_readiness_requires_all_required_fields() {
        let mut value = json!({
            "parameters": {}, "files": {}, "created": "2025-01-01", "updated": "2025-01-02",
            "interfaces": [{"type": "apb", "signals": [], "protocol": "APB4"}],
            "test": {"coverage": 95, "testbenches": [], "simulators": [], "status": "passing"},
            "flows": {"asic": {"synthesis": {}}, "fpga": {"synthesis": {}}},
            "meta": {"generated_by": "x", "schema": "y", "template": "z",
                     "ai_generation": {"mode": "assisted"}}
        });
        for field in REQUIRED_FIELDS.iter().take(6) {
            value[*field] = json!("set");
        }
        let report = score(value);
        // 14/15 fields: 0.3*93.33 + 20 + 20 + 15 + 15 = 98
        assert!(report.overall_score >= READY_THRESHOLD);
        assert_eq!(report.catalog_readiness, CatalogReadiness::NeedsImprovement);
    }

    #[test]
    fn test_custom_weights() {
        let weights = ScoringWeights {
            field_completeness: 1.0,
            interface_quality: 0.0,
            test_coverage: 0.0,
            flow_configuration: 0.0,
            documentation_metadata: 0.0,
        };
        let doc = MetadataDocument::from_value(required_only()).unwrap();
        let report = QualityScorer::new().with_weights(weights).score_document(&doc);
        assert!((report.overall_score - report.field_completeness).abs() < 1e-9);
    }

    #[test]
    fn test_enum_strings() {
        assert_eq!(CatalogReadiness::NeedsImprovement.to_string(), "needs_improvement");
        assert_eq!(ValidationStatus::MostlyValid.as_str(), "mostly_valid");
        let json = serde_json::to_string(&CatalogReadiness::NotReady).unwrap();
        assert_eq!(json, "\"not_ready\"");
    }
}
