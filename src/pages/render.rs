//! `{{PLACEHOLDER}}` substitution for the page template.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::PageData;
use crate::reports::escape::escape_html;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([A-Z_]+)\}\}").expect("static regex"));

/// Every placeholder the renderer fills in
pub const PLACEHOLDERS: [&str; 26] = [
    "IP_NAME",
    "IP_DESCRIPTION",
    "PROJECT_OVERVIEW",
    "KEY_FEATURES",
    "RTL_MODULES",
    "TESTBENCH_COVERAGE",
    "SIMULATORS",
    "SYNTHESIS_TOOLS",
    "TECHNOLOGY",
    "FPGA_FAMILIES",
    "FPGA_TOOLS",
    "OVERALL_SCORE",
    "RTL_FILES",
    "RTL_LINES",
    "TEST_FILES",
    "TOTAL_GATES",
    "DIE_SIZE",
    "PASSED_TESTS",
    "TOTAL_TESTS",
    "SUCCESS_RATE",
    "SYNTHESIS_STATUS",
    "FPGA_STATUS",
    "SIMULATION_STATUS",
    "GENERATED_DATE",
    "REPOSITORY",
    "RUN_ID",
];

enum Slot<'a> {
    Text(&'a str),
    List(&'a [String]),
}

impl PageData {
    fn slot(&self, key: &str) -> Option<Slot<'_>> {
        let slot = match key {
            "IP_NAME" => Slot::Text(&self.ip_name),
            "IP_DESCRIPTION" => Slot::Text(&self.ip_description),
            "PROJECT_OVERVIEW" => Slot::Text(&self.project_overview),
            "KEY_FEATURES" => Slot::List(&self.key_features),
            "RTL_MODULES" => Slot::List(&self.rtl_modules),
            "TESTBENCH_COVERAGE" => Slot::List(&self.testbench_coverage),
            "SIMULATORS" => Slot::Text(&self.simulators),
            "SYNTHESIS_TOOLS" => Slot::Text(&self.synthesis_tools),
            "TECHNOLOGY" => Slot::Text(&self.technology),
            "FPGA_FAMILIES" => Slot::Text(&self.fpga_families),
            "FPGA_TOOLS" => Slot::Text(&self.fpga_tools),
            "OVERALL_SCORE" => Slot::Text(&self.overall_score),
            "RTL_FILES" => Slot::Text(&self.rtl_files),
            "RTL_LINES" => Slot::Text(&self.rtl_lines),
            "TEST_FILES" => Slot::Text(&self.test_files),
            "TOTAL_GATES" => Slot::Text(&self.total_gates),
            "DIE_SIZE" => Slot::Text(&self.die_size),
            "PASSED_TESTS" => Slot::Text(&self.passed_tests),
            "TOTAL_TESTS" => Slot::Text(&self.total_tests),
            "SUCCESS_RATE" => Slot::Text(&self.success_rate),
            "SYNTHESIS_STATUS" => Slot::Text(&self.synthesis_status),
            "FPGA_STATUS" => Slot::Text(&self.fpga_status),
            "SIMULATION_STATUS" => Slot::Text(&self.simulation_status),
            "GENERATED_DATE" => Slot::Text(&self.generated_date),
            "REPOSITORY" => Slot::Text(&self.repository),
            "RUN_ID" => Slot::Text(&self.run_id),
            _ => return None,
        };
        Some(slot)
    }
}

/// Substitute every known `{{PLACEHOLDER}}` in `template`.
///
/// Text values are HTML-escaped and lists become `<li>` lines. Unknown
/// placeholders are left as written.
#[must_use]
pub fn render_template(template: &str, data: &PageData) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| match data.slot(&caps[1]) {
            Some(Slot::Text(text)) => escape_html(text),
            Some(Slot::List(items)) => list_items(items),
            None => caps[0].to_string(),
        })
        .into_owned()
}

fn list_items(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect::<Vec<_>>()
        .join("\n")
}
