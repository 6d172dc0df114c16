//! Code volume and project structure.

use std::collections::BTreeMap;

use super::patterns::{self, count_matches};
use super::tree::{FileEntry, ProjectTree};
use crate::model::{CodeMetrics, FileStructure};

const NO_EXTENSION: &str = "no_extension";

/// Extension histogram and directory listing
#[must_use]
pub fn file_structure(tree: &ProjectTree) -> FileStructure {
    let mut file_types: BTreeMap<String, usize> = BTreeMap::new();
    for file in tree.files() {
        let key = file.extension().unwrap_or_else(|| NO_EXTENSION.to_string());
        *file_types.entry(key).or_default() += 1;
    }

    FileStructure {
        total_files: tree.files().len(),
        total_directories: tree.directory_count(),
        file_types,
        directory_structure: tree.directories().clone(),
    }
}

/// RTL, testbench, constraint and script counts.
///
/// A file matching several patterns of one category is counted once per
/// matching pattern.
#[must_use]
pub fn code_metrics(tree: &ProjectTree) -> CodeMetrics {
    let mut metrics = CodeMetrics::default();

    for file in tree.files() {
        let rtl = count_matches(patterns::RTL, &file.name);
        if rtl > 0 {
            metrics.rtl_files += rtl;
            metrics.rtl_lines += rtl * file.lines();
            if matches!(file.raw_extension(), Some(".sv" | ".v")) {
                metrics.rtl_modules += rtl * count_modules(file);
            }
        }

        let tb = count_matches(patterns::TESTBENCH, &file.name);
        metrics.testbench_files += tb;
        metrics.testbench_lines += tb * lines_if(tb, file);

        let constraint = count_matches(patterns::CONSTRAINT, &file.name);
        metrics.constraint_files += constraint;
        metrics.constraint_lines += constraint * lines_if(constraint, file);

        if file.rel_path.contains("scripts") {
            let script = count_matches(patterns::SCRIPT, &file.name);
            metrics.script_files += script;
            metrics.script_lines += script * lines_if(script, file);
        }
    }

    metrics
}

/// Line count, read only when the file matched something
fn lines_if(matched: usize, file: &FileEntry) -> usize {
    if matched == 0 {
        0
    } else {
        file.lines()
    }
}

/// Occurrences of `"module "` in a Verilog or SystemVerilog source.
fn count_modules(file: &FileEntry) -> usize {
    file.read_text()
        .map_or(0, |text| text.matches("module ").count())
}
