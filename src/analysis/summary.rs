//! Project-level roll-up of the KPI sections.

use crate::model::{CodeMetrics, DocumentationMetrics, KpiSummary, QualityMetrics, TestMetrics};
use crate::quality::{CatalogReadiness, QualityReport};

const MAX_SCORE: f64 = 100.0;
const SUBSTANTIAL_RTL_LINES: usize = 100;
const SUBSTANTIAL_DOC_LINES: usize = 500;
/// Share of the project score carried by the metadata quality score
const METADATA_POINTS: f64 = 10.0;
const HIGH_METADATA_QUALITY: f64 = 80.0;
const LOW_METADATA_QUALITY: f64 = 60.0;

/// Sections the summary is computed from
#[derive(Debug, Clone, Copy)]
pub struct SummaryInputs<'a> {
    pub code: &'a CodeMetrics,
    pub docs: &'a DocumentationMetrics,
    pub tests: &'a TestMetrics,
    pub quality: &'a QualityMetrics,
    pub metadata: &'a QualityReport,
}

#[must_use]
pub fn summarize(inputs: SummaryInputs<'_>) -> KpiSummary {
    let overall_score = project_score(&inputs);
    KpiSummary {
        overall_score,
        strengths: strengths(&inputs),
        areas_for_improvement: areas_for_improvement(&inputs),
        recommendations: vec![recommendation(overall_score).to_string()],
    }
}

fn project_score(i: &SummaryInputs<'_>) -> f64 {
    let mut score = 0.0;
    let mut award = |cond: bool, points: f64| {
        if cond {
            score += points;
        }
    };

    // Code, 30 points
    award(i.code.rtl_files > 0, 10.0);
    award(i.code.testbench_files > 0, 10.0);
    award(i.code.rtl_lines > SUBSTANTIAL_RTL_LINES, 10.0);
    // Documentation, 25 points
    award(i.docs.readme_exists, 10.0);
    award(i.docs.developer_guide_exists, 10.0);
    award(i.docs.documentation_lines > SUBSTANTIAL_DOC_LINES, 5.0);
    // Tests, 25 points
    award(i.tests.test_files > 0, 15.0);
    award(i.tests.coverage_files > 0, 10.0);
    // Quality, 10 points
    award(i.quality.metadata_complete, 5.0);
    award(i.quality.documentation_complete, 5.0);

    if i.metadata.exists {
        score += i.metadata.overall_score / 100.0 * METADATA_POINTS;
    }
    score.min(MAX_SCORE)
}

fn strengths(i: &SummaryInputs<'_>) -> Vec<String> {
    let mut out = Vec::new();
    if i.code.rtl_files > 0 {
        out.push("RTL implementation present");
    }
    if i.docs.readme_exists {
        out.push("README documentation exists");
    }
    if i.tests.test_files > 0 {
        out.push("Test coverage implemented");
    }
    if i.metadata.exists {
        if i.metadata.overall_score >= HIGH_METADATA_QUALITY {
            out.push("High-quality Vyges metadata");
        }
        if i.metadata.catalog_readiness == CatalogReadiness::Ready {
            out.push("Catalog-ready metadata");
        }
        if i.metadata.ai_generation_ready {
            out.push("AI generation ready");
        }
    }
    out.into_iter().map(String::from).collect()
}

fn areas_for_improvement(i: &SummaryInputs<'_>) -> Vec<String> {
    let mut out = Vec::new();
    if i.code.rtl_files == 0 {
        out.push("No RTL implementation found");
    }
    if !i.docs.readme_exists {
        out.push("Missing README documentation");
    }
    if i.tests.test_files == 0 {
        out.push("No test coverage implemented");
    }
    if !i.metadata.exists {
        out.push("Missing vyges-metadata.json");
    } else if i.metadata.overall_score < LOW_METADATA_QUALITY {
        out.push("Low-quality Vyges metadata");
    }
    if i.metadata.catalog_readiness == CatalogReadiness::NotReady {
        out.push("Metadata not ready for catalog publication");
    }
    out.into_iter().map(String::from).collect()
}

fn recommendation(score: f64) -> &'static str {
    if score < 50.0 {
        "Focus on basic project structure and documentation"
    } else if score < 75.0 {
        "Enhance test coverage and quality metrics"
    } else {
        "Consider advanced features like formal verification"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        code: CodeMetrics,
        docs: DocumentationMetrics,
        tests: TestMetrics,
        quality: QualityMetrics,
        metadata: QualityReport,
    }

    impl Fixture {
        fn empty() -> Self {
            Self {
                code: CodeMetrics::default(),
                docs: DocumentationMetrics::default(),
                tests: TestMetrics::default(),
                quality: QualityMetrics::default(),
                metadata: QualityReport::default(),
            }
        }

        fn summarize(&self) -> KpiSummary {
            summarize(SummaryInputs {
                code: &self.code,
                docs: &self.docs,
                tests: &self.tests,
                quality: &self.quality,
                metadata: &self.metadata,
            })
        }
    }

    #[test]
    fn test_empty_project() {
        let s = Fixture::empty().summarize();
        assert_eq!(s.overall_score, 0.0);
        assert!(s.strengths.is_empty());
        assert_eq!(
            s.areas_for_improvement,
            vec![
                "No RTL implementation found",
                "Missing README documentation",
                "No test coverage implemented",
                "Missing vyges-metadata.json",
            ]
        );
        assert_eq!(
            s.recommendations,
            vec!["Focus on basic project structure and documentation"]
        );
    }

    #[test]
    fn test_well_rounded_project() {
        let mut f = Fixture::empty();
        f.code.rtl_files = 4;
        f.code.rtl_lines = 900;
        f.code.testbench_files = 2;
        f.docs.readme_exists = true;
        f.docs.developer_guide_exists = true;
        f.docs.documentation_lines = 800;
        f.tests.test_files = 3;
        f.tests.coverage_files = 1;
        f.quality.metadata_complete = true;
        f.quality.documentation_complete = true;
        f.metadata.exists = true;
        f.metadata.overall_score = 92.0;
        f.metadata.catalog_readiness = CatalogReadiness::Ready;
        f.metadata.ai_generation_ready = true;

        let s = f.summarize();
        assert!((s.overall_score - 99.2).abs() < 1e-9);
        assert_eq!(s.strengths.len(), 6);
        assert!(s.areas_for_improvement.is_empty());
        assert_eq!(
            s.recommendations,
            vec!["Consider advanced features like formal verification"]
        );
    }

    #[test]
    fn test_low_quality_metadata() {
        let mut f = Fixture::empty();
        f.metadata.exists = true;
        f.metadata.overall_score = 40.0;
        f.metadata.catalog_readiness = CatalogReadiness::NotReady;

        let s = f.summarize();
        assert!((s.overall_score - 4.0).abs() < 1e-9);
        assert!(s
            .areas_for_improvement
            .contains(&"Low-quality Vyges metadata".to_string()));
        assert!(s
            .areas_for_improvement
            .contains(&"Metadata not ready for catalog publication".to_string()));
    }

    #[test]
    fn test_recommendation_tiers() {
        assert_eq!(recommendation(49.9), "Focus on basic project structure and documentation");
        assert_eq!(recommendation(50.0), "Enhance test coverage and quality metrics");
        assert_eq!(recommendation(75.0), "Consider advanced features like formal verification");
    }
}
