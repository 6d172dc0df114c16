//! Metadata scoring tests against fixture documents.
//!
//! These go through the same load → score path as `ip-kpis metadata`.

use ip_kpis::pipeline::{load_metadata, NOT_AN_OBJECT_MESSAGE};
use ip_kpis::quality::{CatalogReadiness, QualityReport, QualityScorer, ValidationStatus};
use ip_kpis::MetadataInput;
use std::path::{Path, PathBuf};

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/metadata");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn score_fixture(name: &str) -> QualityReport {
    QualityScorer::new().score(&load_metadata(&fixture_path(name)))
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 0.01,
        "expected {expected}, got {actual}"
    );
}

// ============================================================================
// Complete documents
// ============================================================================

mod complete {
    use super::*;

    #[test]
    fn full_document_scores_100() {
        let report = score_fixture("full.json");

        assert!(report.exists);
        assert_close(report.field_completeness, 100.0);
        assert_close(report.interface_quality, 100.0);
        assert_close(report.test_coverage_score, 100.0);
        assert_close(report.flow_configuration_score, 100.0);
        assert_close(report.documentation_metadata_score, 100.0);
        assert_close(report.overall_score, 100.0);
    }

    #[test]
    fn full_document_is_publishable() {
        let report = score_fixture("full.json");

        assert_eq!(report.catalog_readiness, CatalogReadiness::Ready);
        assert_eq!(report.validation_status, ValidationStatus::Valid);
        assert!(report.ai_generation_ready);
        assert!(report.issues.is_empty());
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn field_maps_keep_schema_order() {
        let report = score_fixture("full.json");
        let required: Vec<_> = report.required_fields.keys().map(String::as_str).collect();
        assert_eq!(
            required,
            ["name", "version", "description", "license", "target", "design_type", "maturity"]
        );
        assert_eq!(report.optional_fields.len(), 8);
        assert!(report.optional_fields.values().all(|present| *present));
    }
}

// ============================================================================
// Partial documents
// ============================================================================

mod partial {
    use super::*;

    #[test]
    fn required_only_document() {
        let report = score_fixture("required_only.json");

        assert_close(report.field_completeness, 46.67);
        assert_close(report.interface_quality, 0.0);
        assert_close(report.overall_score, 14.0);
        assert_eq!(report.validation_status, ValidationStatus::Valid);
        assert_eq!(report.catalog_readiness, CatalogReadiness::NotReady);
        assert!(report.issues.is_empty());
        assert_eq!(report.recommendations.len(), 4);
    }

    #[test]
    fn missing_license_and_maturity() {
        let report = score_fixture("missing_license_maturity.json");

        assert_eq!(
            report.issues,
            vec!["Missing required fields: license, maturity".to_string()]
        );
        assert_eq!(report.required_present(), 5);
        assert_eq!(report.validation_status, ValidationStatus::Incomplete);
        assert_close(report.interface_quality, 50.0);
        assert_close(report.test_coverage_score, 50.0);
        assert_close(report.overall_score, 34.0);
        assert_eq!(report.catalog_readiness, CatalogReadiness::NotReady);
    }

    #[test]
    fn recommendations_skip_sub_scores_at_threshold() {
        let report = score_fixture("missing_license_maturity.json");

        assert_eq!(
            report.recommendations,
            vec![
                "Configure synthesis and implementation flows for target platforms".to_string(),
                "Add AI generation metadata for automated development support".to_string(),
            ]
        );
    }
}

// ============================================================================
// Missing and broken files
// ============================================================================

mod unusable {
    use super::*;

    #[test]
    fn missing_file() {
        let input = load_metadata(&fixture_path("does_not_exist.json"));
        assert!(matches!(input, MetadataInput::Missing));

        let report = QualityScorer::new().score(&input);
        assert!(!report.exists);
        assert_eq!(report.overall_score, 0.0);
        assert_eq!(report.catalog_readiness, CatalogReadiness::Unknown);
        assert_eq!(report.validation_status, ValidationStatus::Unknown);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn malformed_json() {
        let report = score_fixture("malformed.json");

        assert!(report.exists);
        assert_eq!(report.validation_status, ValidationStatus::Invalid);
        assert_eq!(report.issues.len(), 1);
        assert!(report.issues[0].starts_with("JSON parsing error: "));
        assert_eq!(report.overall_score, 0.0);
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn non_object_root() {
        let report = score_fixture("array_root.json");

        assert_eq!(report.validation_status, ValidationStatus::Invalid);
        assert_eq!(
            report.issues,
            vec![format!("JSON parsing error: {NOT_AN_OBJECT_MESSAGE}")]
        );
    }
}

// ============================================================================
// Serialized form
// ============================================================================

#[test]
fn report_serializes_enum_strings() {
    let report = score_fixture("required_only.json");
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["catalog_readiness"], "not_ready");
    assert_eq!(json["validation_status"], "valid");
    assert_eq!(json["required_fields"]["license"], true);
    assert_eq!(json["optional_fields"]["interfaces"], false);
}
