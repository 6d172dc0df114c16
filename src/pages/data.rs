//! Values substituted into the project page template.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::model::MetadataDocument;

/// Test harness summary written by the simulation flow
pub const TEST_HARNESS_REPORT: &str = "test_harness_report.md";
/// Gate analysis reports, most specific first
pub const GATE_REPORTS: [&str; 2] = [
    "flow/yosys/gate_analysis_report.md",
    "flow/yosys/reports/comprehensive_report.md",
];
/// Text KPI report produced by `ip-kpis analyze -o code_kpis.txt`
pub const CODE_KPIS_REPORT: &str = "code_kpis.txt";
/// Present once generic synthesis has run
pub const SYNTHESIS_REPORT: &str = "flow/synthesis/reports/synthesis_report_generic.txt";
/// Non-empty once an FPGA netlist was produced
pub const FPGA_NETLIST_DIR: &str = "flow/fpga/openfpga/netlists";

const DEFAULT_REPOSITORY: &str = "vyges/hardware-ip";
const UNKNOWN: &str = "unknown";
const NOT_AVAILABLE: &str = "N/A";
/// Transistors per mm² used for the rough die-size estimate
const TRANSISTORS_PER_MM2: f64 = 10_000.0;

macro_rules! static_regex {
    ($name:ident, $pattern:expr) => {
        static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($pattern).expect("static regex"));
    };
}

static_regex!(TEST_CASES, r"Test Cases:\s*(\d+)");
static_regex!(PASSED, r"Passed:\s*(\d+)");
static_regex!(PRIMITIVE_GATES, r"\*\*Primitive Gates\*\*:\s*([\d,]+)");
static_regex!(TRANSISTORS, r"\*\*Estimated Transistors\*\*:\s*([\d,]+)");
static_regex!(RTL_FILES, r"RTL Files:\s*(\d+)");
static_regex!(RTL_LINES, r"RTL Lines:\s*([\d,]+)");
static_regex!(TEST_FILES, r"Test Files:\s*(\d+)");
static_regex!(OVERALL_SCORE, r"OVERALL SCORE:\s*(\d+\.?\d*)/100");

/// Everything the page template can reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageData {
    pub ip_name: String,
    pub ip_description: String,
    pub project_overview: String,
    pub key_features: Vec<String>,
    pub rtl_modules: Vec<String>,
    pub testbench_coverage: Vec<String>,
    pub simulators: String,
    pub synthesis_tools: String,
    pub technology: String,
    pub fpga_families: String,
    pub fpga_tools: String,

    pub overall_score: String,
    pub rtl_files: String,
    pub rtl_lines: String,
    pub test_files: String,
    pub total_gates: String,
    pub die_size: String,

    pub passed_tests: String,
    pub total_tests: String,
    pub success_rate: String,

    pub synthesis_status: String,
    pub fpga_status: String,
    pub simulation_status: String,

    pub generated_date: String,
    pub repository: String,
    pub run_id: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl Default for PageData {
    fn default() -> Self {
        Self {
            ip_name: "Hardware IP".to_string(),
            ip_description: "High-performance hardware accelerator".to_string(),
            project_overview: "A high-performance hardware accelerator designed for efficient \
                computation with comprehensive test coverage."
                .to_string(),
            key_features: strings(&[
                "High-performance architecture",
                "Comprehensive test coverage",
                "Memory-mapped interfaces",
                "Configurable parameters",
                "Open-source toolchain support",
            ]),
            rtl_modules: strings(&[
                "Top-level module",
                "Core computation engine",
                "Control and sequencing",
                "Memory management",
            ]),
            testbench_coverage: strings(&[
                "SystemVerilog testbenches",
                "Functional verification",
                "Performance benchmarking",
                "Interface testing",
            ]),
            simulators: "Icarus Verilog, Verilator, Cocotb".to_string(),
            synthesis_tools: "Yosys, OpenLane".to_string(),
            technology: "Generic, sky130B".to_string(),
            fpga_families: "iCE40, ECP5, Xilinx 7-series".to_string(),
            fpga_tools: "Yosys, NextPNR, IceStorm".to_string(),

            overall_score: "0.0".to_string(),
            rtl_files: "0".to_string(),
            rtl_lines: "0".to_string(),
            test_files: "0".to_string(),
            total_gates: "0".to_string(),
            die_size: NOT_AVAILABLE.to_string(),

            passed_tests: "0".to_string(),
            total_tests: "0".to_string(),
            success_rate: "0.0".to_string(),

            synthesis_status: "Clean".to_string(),
            fpga_status: "Implemented".to_string(),
            simulation_status: "Passing".to_string(),

            generated_date: String::new(),
            repository: DEFAULT_REPOSITORY.to_string(),
            run_id: UNKNOWN.to_string(),
        }
    }
}

impl PageData {
    /// Gather page values from the project tree, its metadata and the CI
    /// environment. Missing sources leave the defaults in place.
    pub fn collect(root: &Path, metadata: Option<&MetadataDocument>) -> Self {
        let mut data = Self::default();
        if let Some(doc) = metadata {
            data.apply_metadata(doc);
        }
        if let Some(text) = read_optional(&root.join(TEST_HARNESS_REPORT)) {
            data.apply_test_report(&text);
        }
        for report in GATE_REPORTS {
            if let Some(text) = read_optional(&root.join(report)) {
                data.apply_gate_report(&text);
            }
        }
        if let Some(text) = read_optional(&root.join(CODE_KPIS_REPORT)) {
            data.apply_code_kpis(&text);
        }
        data.apply_flow_status(root);

        data.generated_date = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();
        if let Ok(repo) = std::env::var("GITHUB_REPOSITORY") {
            data.repository = repo;
        }
        if let Ok(run_id) = std::env::var("GITHUB_RUN_ID") {
            data.run_id = run_id;
        }
        data
    }

    /// Name, description, features, modules and tool lists from metadata.
    pub fn apply_metadata(&mut self, doc: &MetadataDocument) {
        if let Some(name) = doc.get_field("name").and_then(as_text) {
            self.ip_name = name;
        }
        if let Some(description) = doc.get_field("description").and_then(as_text) {
            self.ip_description.clone_from(&description);
            self.project_overview = description;
        }
        if let Some(overview) = doc.get_field("overview").and_then(as_text) {
            self.project_overview = overview;
        }
        if let Some(features) = doc.get_field("features").and_then(as_text_list) {
            self.key_features = features;
        }
        if let Some(modules) = doc.get_field("structure.modules").and_then(as_text_list) {
            self.rtl_modules = modules
                .iter()
                .map(|m| format!("{m} - {}", title_case(m)))
                .collect();
        }
        if let Some(tools) = doc.get_field("compatibility.tools.synthesis").and_then(joined) {
            self.synthesis_tools = tools;
        }
        if let Some(tools) = doc.get_field("compatibility.tools.simulation").and_then(joined) {
            self.simulators = tools;
        }
        if let Some(families) = doc.get_field("fpga.families").and_then(as_text_list) {
            self.fpga_families = families.join(", ");
        }
    }

    /// Test counts and success rate from the harness summary.
    pub fn apply_test_report(&mut self, text: &str) {
        if let Some(total) = capture(&TEST_CASES, text) {
            self.total_tests = total;
        }
        if let Some(passed) = capture(&PASSED, text) {
            self.passed_tests = passed;
        }
        if let (Ok(total), Ok(passed)) = (
            self.total_tests.parse::<u64>(),
            self.passed_tests.parse::<u64>(),
        ) {
            if total > 0 {
                self.success_rate = format!("{:.1}", passed as f64 * 100.0 / total as f64);
            }
        }
    }

    /// Gate count and die-size estimate. Values already taken from an
    /// earlier report are kept.
    pub fn apply_gate_report(&mut self, text: &str) {
        if self.total_gates == "0" {
            if let Some(gates) = capture(&PRIMITIVE_GATES, text) {
                self.total_gates = gates;
            }
        }
        if self.die_size == NOT_AVAILABLE {
            let transistors = capture(&TRANSISTORS, text)
                .and_then(|t| t.replace(',', "").parse::<u64>().ok());
            if let Some(transistors) = transistors {
                self.die_size = die_size(transistors);
            }
        }
    }

    /// Figures scraped from a text KPI report.
    pub fn apply_code_kpis(&mut self, text: &str) {
        let fields = [
            (&*RTL_FILES, &mut self.rtl_files),
            (&*RTL_LINES, &mut self.rtl_lines),
            (&*TEST_FILES, &mut self.test_files),
            (&*OVERALL_SCORE, &mut self.overall_score),
        ];
        for (re, slot) in fields {
            if let Some(value) = capture(re, text) {
                *slot = value;
            }
        }
    }

    fn apply_flow_status(&mut self, root: &Path) {
        if root.join(SYNTHESIS_REPORT).exists() {
            self.synthesis_status = "Complete".to_string();
        }
        let netlists = std::fs::read_dir(root.join(FPGA_NETLIST_DIR))
            .map(|mut entries| entries.next().is_some())
            .unwrap_or(false);
        if netlists {
            self.fpga_status = "Complete".to_string();
        }
    }
}

/// Rough die size in mm², two decimals below 1 mm² and one above.
fn die_size(transistors: u64) -> String {
    let mm2 = transistors as f64 / TRANSISTORS_PER_MM2;
    if mm2 < 1.0 {
        format!("{mm2:.2}mm²")
    } else {
        format!("{mm2:.1}mm²")
    }
}

fn read_optional(path: &Path) -> Option<String> {
    if !path.is_file() {
        return None;
    }
    match std::fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(e) => {
            tracing::warn!("Could not read {}: {e}", path.display());
            None
        }
    }
}

fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn as_text_list(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()
        .map(|items| items.iter().filter_map(as_text).collect())
}

/// A tool list joined with commas, or a single tool name as written
fn joined(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        other => as_text_list(other).map(|items| items.join(", ")),
    }
}

/// `sync_fifo` becomes `Sync Fifo`
fn title_case(name: &str) -> String {
    name.replace('_', " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> MetadataDocument {
        MetadataDocument::from_value(value).unwrap()
    }

    #[test]
    fn test_metadata_overrides() {
        let mut data = PageData::default();
        data.apply_metadata(&doc(json!({
            "name": "uart_core",
            "description": "UART with FIFOs",
            "features": ["16550 compatible", "DMA"],
            "structure": {"modules": ["uart_tx", "baud_gen"]},
            "compatibility": {"tools": {"synthesis": ["yosys"], "simulation": ["verilator", "icarus"]}},
            "fpga": {"families": ["ice40"]}
        })));

        assert_eq!(data.ip_name, "uart_core");
        assert_eq!(data.project_overview, "UART with FIFOs");
        assert_eq!(data.key_features, vec!["16550 compatible", "DMA"]);
        assert_eq!(data.rtl_modules, vec!["uart_tx - Uart Tx", "baud_gen - Baud Gen"]);
        assert_eq!(data.synthesis_tools, "yosys");
        assert_eq!(data.simulators, "verilator, icarus");
        assert_eq!(data.fpga_families, "ice40");
    }

    #[test]
    fn test_overview_wins_over_description() {
        let mut data = PageData::default();
        data.apply_metadata(&doc(json!({"overview": "Long text", "description": "Short"})));
        assert_eq!(data.project_overview, "Long text");
        assert_eq!(data.ip_description, "Short");
    }

    #[test]
    fn test_test_report() {
        let mut data = PageData::default();
        data.apply_test_report("## Summary\nTest Cases: 8\nPassed: 7\nFailed: 1\n");
        assert_eq!(data.total_tests, "8");
        assert_eq!(data.passed_tests, "7");
        assert_eq!(data.success_rate, "87.5");
    }

    #[test]
    fn test_gate_reports_keep_first_values() {
        let mut data = PageData::default();
        data.apply_gate_report("- **Primitive Gates**: 1,234\n");
        data.apply_gate_report("- **Primitive Gates**: 99\n- **Estimated Transistors**: 25,000\n");
        assert_eq!(data.total_gates, "1,234");
        assert_eq!(data.die_size, "2.5mm²");
    }

    #[test]
    fn test_die_size_precision() {
        assert_eq!(die_size(4_200), "0.42mm²");
        assert_eq!(die_size(123_456), "12.3mm²");
    }

    #[test]
    fn test_code_kpis_scrape() {
        let mut data = PageData::default();
        data.apply_code_kpis(
            "OVERALL SCORE: 72.5/100\n   RTL Files: 12\n   RTL Lines: 4,310\n   Test Files: 5\n",
        );
        assert_eq!(data.overall_score, "72.5");
        assert_eq!(data.rtl_files, "12");
        assert_eq!(data.rtl_lines, "4,310");
        assert_eq!(data.test_files, "5");
    }

    #[test]
    fn test_flow_status() {
        let dir = tempfile::tempdir().unwrap();
        let netlists = dir.path().join(FPGA_NETLIST_DIR);
        std::fs::create_dir_all(&netlists).unwrap();

        let mut data = PageData::default();
        data.apply_flow_status(dir.path());
        assert_eq!(data.fpga_status, "Implemented");

        std::fs::write(netlists.join("top.v"), "").unwrap();
        data.apply_flow_status(dir.path());
        assert_eq!(data.fpga_status, "Complete");
        assert_eq!(data.synthesis_status, "Clean");
    }
}
