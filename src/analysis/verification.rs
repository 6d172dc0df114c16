//! Verification assets and flow-artifact checks.

use std::path::Path;

use super::docs::{DEVELOPER_GUIDE, README};
use super::patterns::{self, count_matches};
use super::tree::ProjectTree;
use crate::model::{QualityMetrics, TestMetrics};

/// Testbench counts by verification style.
///
/// Like the code metrics, each matching pattern counts the file once.
#[must_use]
pub fn test_metrics(tree: &ProjectTree) -> TestMetrics {
    let mut tests = TestMetrics::default();

    for file in tree.files() {
        let by_type = [
            (patterns::TEST_SYSTEMVERILOG, &mut tests.test_types.systemverilog),
            (patterns::TEST_COCOTB, &mut tests.test_types.cocotb),
            (patterns::TEST_UVM, &mut tests.test_types.uvm),
            (patterns::TEST_FORMAL, &mut tests.test_types.formal),
        ];
        let mut matched = 0;
        for (pats, counter) in by_type {
            let n = count_matches(pats, &file.name);
            *counter += n;
            matched += n;
        }
        if matched > 0 {
            tests.test_files += matched;
            tests.test_lines += matched * file.lines();
        }

        tests.coverage_files += count_matches(patterns::COVERAGE, &file.name);

        tests.test_vectors += count_matches(patterns::TEST_VECTOR, &file.name);
        if file.parent_name() == Some(patterns::TEST_VECTOR_DIR) {
            tests.test_vectors += 1;
        }
    }

    tests
}

/// Presence of lint, synthesis, simulation and coverage artifacts, plus
/// documentation and metadata completeness.
#[must_use]
pub fn quality_metrics(tree: &ProjectTree, metadata_file: &str) -> QualityMetrics {
    let metadata_name = Path::new(metadata_file)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(metadata_file);
    QualityMetrics {
        linting_clean: tree.any_matching(patterns::LINT_LOG),
        synthesis_clean: tree.any_matching(patterns::SYNTHESIS_LOG),
        simulation_passing: tree.any_matching(patterns::SIMULATION_LOG),
        coverage_goals_met: tree.any_matching(patterns::COVERAGE_REPORT),
        documentation_complete: tree.get(README).is_some() && tree.get(DEVELOPER_GUIDE).is_some(),
        metadata_complete: tree.files().iter().any(|f| f.name == metadata_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn touch(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_test_metrics_by_type() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(root, "tb/tb_fifo.sv", "a\nb\n");
        touch(root, "tb/test_fifo.py", "a\n");
        touch(root, "formal/fifo_formal.sv", "a\n");
        touch(root, "cov/fifo.ucdb", "");
        touch(root, "cov/coverage_fifo.html", "");
        touch(root, "verif/test_vectors/case1.txt", "");
        touch(root, "verif/test_vectors/case2.vec", "");

        let tree = ProjectTree::scan(root, &[]).unwrap();
        let t = test_metrics(&tree);
        assert_eq!(t.test_files, 3);
        assert_eq!(t.test_lines, 4);
        assert_eq!(t.test_types.systemverilog, 1);
        assert_eq!(t.test_types.cocotb, 1);
        assert_eq!(t.test_types.formal, 1);
        assert_eq!(t.coverage_files, 2);
        // case2.vec counts for its extension and for its directory
        assert_eq!(t.test_vectors, 3);
    }

    #[test]
    fn test_quality_metrics() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(root, "README.md", "");
        touch(root, "Developer_Guide.md", "");
        touch(root, "flow/logs/yosys_synthesis.log", "");
        touch(root, "ip/vyges-metadata.json", "{}");

        let tree = ProjectTree::scan(root, &[]).unwrap();
        let q = quality_metrics(&tree, "vyges-metadata.json");
        assert!(q.synthesis_clean);
        assert!(!q.linting_clean);
        assert!(q.documentation_complete);
        assert!(q.metadata_complete);
    }

    #[test]
    fn test_metadata_complete_with_relative_path() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(root, "ip/vyges-metadata.json", "{}");

        let tree = ProjectTree::scan(root, &[]).unwrap();
        assert!(quality_metrics(&tree, "ip/vyges-metadata.json").metadata_complete);
        assert!(!quality_metrics(&tree, "ip/other-metadata.json").metadata_complete);
    }
}
