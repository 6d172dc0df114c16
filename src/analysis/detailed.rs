//! Opt-in deep analysis: largest files, module sizes, tool mentions.

use super::tree::ProjectTree;
use crate::model::{ComplexityAnalysis, DependencyMentions, DetailedAnalysis, FileSize};

/// Number of files listed in [`DetailedAnalysis::largest_files`]
pub const LARGEST_FILES_LIMIT: usize = 10;

/// Simulators and vendor tools
pub const EXTERNAL_TOOLS: [&str; 5] = ["vivado", "quartus", "modelsim", "verilator", "icarus"];
/// Verification libraries
pub const LIBRARIES: [&str; 4] = ["uvm", "cocotb", "pytest", "numpy"];
/// Open-source implementation flows
pub const FRAMEWORKS: [&str; 3] = ["openlane", "yosys", "nextpnr"];

/// Extensions searched for tool mentions
const MENTION_EXTENSIONS: [&str; 5] = [".py", ".sh", ".tcl", ".make", ".md"];

#[must_use]
pub fn detailed_analysis(tree: &ProjectTree) -> DetailedAnalysis {
    DetailedAnalysis {
        largest_files: largest_files(tree),
        complexity_analysis: complexity(tree),
        dependencies: dependency_mentions(tree),
    }
}

/// Largest files by line count; ties keep walk order.
fn largest_files(tree: &ProjectTree) -> Vec<FileSize> {
    let mut files: Vec<FileSize> = tree
        .files()
        .iter()
        .map(|f| FileSize {
            path: f.rel_path.clone(),
            size_bytes: f.size_bytes,
            lines: f.lines(),
        })
        .collect();
    files.sort_by(|a, b| b.lines.cmp(&a.lines));
    files.truncate(LARGEST_FILES_LIMIT);
    files
}

/// Size statistics over `.sv` files.
fn complexity(tree: &ProjectTree) -> ComplexityAnalysis {
    let mut module_count = 0;
    let mut total_lines = 0;
    let mut largest: Option<(&str, usize)> = None;

    for file in tree.matching("*.sv") {
        let lines = file.lines();
        module_count += 1;
        total_lines += lines;
        if largest.map_or(true, |(_, max)| lines > max) {
            largest = Some((&file.rel_path, lines));
        }
    }

    if module_count == 0 {
        return ComplexityAnalysis::default();
    }
    ComplexityAnalysis {
        avg_module_size: total_lines as f64 / module_count as f64,
        largest_module: largest.map(|(path, _)| path.to_string()).unwrap_or_default(),
        module_count,
    }
}

/// Keywords found in scripts and docs, listed in declaration order.
fn dependency_mentions(tree: &ProjectTree) -> DependencyMentions {
    let contents: Vec<String> = tree
        .files()
        .iter()
        .filter(|f| {
            f.raw_extension()
                .is_some_and(|ext| MENTION_EXTENSIONS.contains(&ext))
        })
        .filter_map(|f| f.read_text())
        .map(|text| text.to_lowercase())
        .collect();

    let found = |keywords: &[&str]| -> Vec<String> {
        keywords
            .iter()
            .filter(|kw| contents.iter().any(|text| text.contains(*kw)))
            .map(|kw| (*kw).to_string())
            .collect()
    };

    DependencyMentions {
        external_tools: found(&EXTERNAL_TOOLS),
        libraries: found(&LIBRARIES),
        frameworks: found(&FRAMEWORKS),
    }
}
