//! File-name patterns for classifying project files.
//!
//! Patterns are shell-style globs over the file name only, with `*` as the
//! sole wildcard, matched case-sensitively.

/// RTL sources
pub const RTL: &[&str] = &["*.sv", "*.v", "*.vhdl", "*.vhd"];
/// Testbench sources counted as code
pub const TESTBENCH: &[&str] = &["tb_*.sv", "tb_*.v", "*_tb.sv", "*_tb.v", "test_*.py"];
/// Timing and pin constraints
pub const CONSTRAINT: &[&str] = &["*.sdc", "*.xdc", "*.pcf", "*.tcl"];
/// Flow scripts, counted only under a `scripts` path
pub const SCRIPT: &[&str] = &["*.py", "*.sh", "*.tcl", "*.make", "Makefile"];

/// SystemVerilog testbenches
pub const TEST_SYSTEMVERILOG: &[&str] = &["tb_*.sv", "*_tb.sv"];
/// cocotb test modules
pub const TEST_COCOTB: &[&str] = &["test_*.py", "*_test.py"];
/// UVM environments
pub const TEST_UVM: &[&str] = &["*_uvm.sv", "uvm_*.sv"];
/// Formal property files
pub const TEST_FORMAL: &[&str] = &["*_formal.sv", "formal_*.sv"];
/// Simulator coverage databases and reports
pub const COVERAGE: &[&str] = &["*.ucdb", "*.vdb", "coverage_*.html"];
/// Stimulus and vector files
pub const TEST_VECTOR: &[&str] = &["*.vec", "*.stim"];
/// Directory whose direct children are all test vectors
pub const TEST_VECTOR_DIR: &str = "test_vectors";

/// Lint logs
pub const LINT_LOG: &str = "lint_*.log";
/// Synthesis logs
pub const SYNTHESIS_LOG: &str = "*synthesis*.log";
/// Simulation logs
pub const SIMULATION_LOG: &str = "*simulation*.log";
/// Coverage reports
pub const COVERAGE_REPORT: &str = "*coverage*.html";

/// Match a file name against a `*` glob.
#[must_use]
pub fn glob_match(pattern: &str, name: &str) -> bool {
    let mut parts = pattern.split('*');
    // split always yields at least one item
    let first = parts.next().unwrap_or_default();
    let Some(mut rest) = name.strip_prefix(first) else {
        return false;
    };

    let parts: Vec<&str> = parts.collect();
    let Some((last, middle)) = parts.split_last() else {
        // no wildcard: exact match
        return rest.is_empty();
    };

    for part in middle {
        match rest.find(part) {
            Some(idx) => rest = &rest[idx + part.len()..],
            None => return false,
        }
    }
    rest.len() >= last.len() && rest.ends_with(last)
}

/// Number of patterns in `patterns` that match `name`.
#[must_use]
pub fn count_matches(patterns: &[&str], name: &str) -> usize {
    patterns.iter().filter(|p| glob_match(p, name)).count()
}
