//! Pipeline and CLI integration tests.
//!
//! These tests exercise the analyze → report pipeline, report file output,
//! and the CLI command handlers with real fixture files.

use ip_kpis::analysis::ProjectAnalyzer;
use ip_kpis::cli::{gate_exit_code, run_metadata, run_report};
use ip_kpis::config::{AppConfig, ReportDirConfig};
use ip_kpis::model::ProjectKpis;
use ip_kpis::pipeline::{
    exit_codes, output_metadata_report, write_comprehensive_report, write_kpis_json,
    OutputTarget, COMPREHENSIVE_REPORT_NAME, FLOW_GATE_REPORT, KPIS_JSON_NAME,
};
use ip_kpis::quality::QualityScorer;
use ip_kpis::reports::ReportFormat;
use ip_kpis::load_metadata;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/metadata");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Small project with RTL, a README and full metadata
fn project() -> (TempDir, ProjectKpis) {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "README.md", "# UART\n");
    write(root, "rtl/uart.sv", "module uart;\nendmodule\n");
    fs::copy(fixture_path("full.json"), root.join("vyges-metadata.json")).unwrap();

    let kpis = ProjectAnalyzer::new(root).analyze().unwrap();
    (dir, kpis)
}

// ============================================================================
// Report Stage Tests
// ============================================================================

mod report_stage {
    use super::*;

    #[test]
    fn comprehensive_report_lands_in_output_dir() {
        let (dir, kpis) = project();
        let path =
            write_comprehensive_report(dir.path(), &kpis, &ReportDirConfig::default(), true)
                .unwrap();

        assert_eq!(path, dir.path().join("reports").join(COMPREHENSIVE_REPORT_NAME));
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("## 📊 Code KPIs Summary"));
        assert!(content.contains("### Vyges Metadata Analysis"));
        assert!(content.contains("## 🎯 Key Recommendations"));
        assert!(!content.contains("## 🔧 Gate Analysis Summary"));
    }

    #[test]
    fn comprehensive_report_summarizes_flow_gate_report() {
        let (dir, kpis) = project();
        write(
            dir.path(),
            FLOW_GATE_REPORT,
            "Reported Modules: 3 (~1520 cells)\nTotal Estimated Area: ~0.42 mm²\n",
        );

        let path =
            write_comprehensive_report(dir.path(), &kpis, &ReportDirConfig::default(), true)
                .unwrap();
        let content = fs::read_to_string(path).unwrap();

        assert!(content.contains("## 🔧 Gate Analysis Summary"));
        assert!(content.contains("**Total Gate Count:** ~1520 cells"));
        assert!(content.contains("**Estimated Die Area:** ~0.42 mm²"));
        assert!(content.contains(FLOW_GATE_REPORT));
    }

    #[test]
    fn kpis_json_is_the_bare_record() {
        let (dir, kpis) = project();
        let dirs = ReportDirConfig {
            output_dir: PathBuf::from("out/kpis"),
            gate_report: None,
        };

        let path = write_kpis_json(dir.path(), &kpis, &dirs, true).unwrap();
        assert_eq!(path, dir.path().join("out/kpis").join(KPIS_JSON_NAME));

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(json["code_metrics"]["rtl_files"], 1);
        assert_eq!(json["metadata_analysis"]["catalog_readiness"], "ready");
        assert!(json["summary"]["overall_score"].is_number());
    }

    #[test]
    fn metadata_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("quality.csv");
        let report = QualityScorer::new().score(&load_metadata(&fixture_path("full.json")));

        output_metadata_report(
            &report,
            ReportFormat::Csv,
            &OutputTarget::File(out.clone()),
            true,
            true,
        )
        .unwrap();

        let csv = fs::read_to_string(out).unwrap();
        assert!(csv.starts_with("metric,value\n"));
        assert!(csv.contains("quality_score,100.0\n"));
        assert!(csv.contains("field.license,true\n"));
    }
}

// ============================================================================
// CLI Handler Tests
// ============================================================================

mod cli_handlers {
    use super::*;

    fn gated(min_score: Option<f64>, require_ready: bool) -> AppConfig {
        let mut config = AppConfig::default();
        config.scoring.min_score = min_score;
        config.scoring.require_ready = require_ready;
        config
    }

    fn run(fixture: &str, config: &AppConfig) -> i32 {
        let dir = tempfile::tempdir().unwrap();
        run_metadata(
            fixture_path(fixture),
            config,
            Some(dir.path().join("report.txt")),
            true,
        )
        .unwrap()
    }

    #[test]
    fn ungated_run_succeeds() {
        assert_eq!(run("required_only.json", &AppConfig::default()), exit_codes::SUCCESS);
        assert_eq!(run("malformed.json", &AppConfig::default()), exit_codes::SUCCESS);
    }

    #[test]
    fn min_score_gate() {
        assert_eq!(run("full.json", &gated(Some(80.0), false)), exit_codes::SUCCESS);
        assert_eq!(
            run("required_only.json", &gated(Some(80.0), false)),
            exit_codes::BELOW_MIN_SCORE
        );
    }

    #[test]
    fn readiness_gate() {
        assert_eq!(run("full.json", &gated(None, true)), exit_codes::SUCCESS);
        assert_eq!(
            run("required_only.json", &gated(None, true)),
            exit_codes::NOT_CATALOG_READY
        );
        assert_eq!(
            run("does_not_exist.json", &gated(None, true)),
            exit_codes::NOT_CATALOG_READY
        );
    }

    #[test]
    fn score_gate_is_checked_first() {
        let report =
            QualityScorer::new().score(&load_metadata(&fixture_path("required_only.json")));
        assert_eq!(
            gate_exit_code(&report, &gated(Some(50.0), true)),
            exit_codes::BELOW_MIN_SCORE
        );
    }

    #[test]
    fn report_handler_writes_both_modes() {
        let (dir, _) = project();
        let config = AppConfig::default();

        let code = run_report(dir.path().to_path_buf(), &config, false, true).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);
        assert!(dir.path().join("reports").join(COMPREHENSIVE_REPORT_NAME).is_file());

        run_report(dir.path().to_path_buf(), &config, true, true).unwrap();
        assert!(dir.path().join("reports").join(KPIS_JSON_NAME).is_file());
    }

    #[test]
    fn report_handler_includes_detailed_analysis() {
        let (dir, _) = project();
        let config = AppConfig::default();
        assert!(!config.analysis.detailed);

        run_report(dir.path().to_path_buf(), &config, true, true).unwrap();

        let path = dir.path().join("reports").join(KPIS_JSON_NAME);
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        let detailed = &json["detailed_analysis"];
        assert!(detailed.is_object());
        assert_eq!(detailed["complexity_analysis"]["module_count"], 1);
        assert!(detailed["largest_files"]
            .as_array()
            .unwrap()
            .iter()
            .any(|f| f["path"] == "rtl/uart.sv"));
    }

    #[test]
    fn report_handler_rejects_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let result = run_report(dir.path().join("missing"), &AppConfig::default(), false, true);
        assert!(result.is_err());
    }
}
