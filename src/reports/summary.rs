//! Text report generator for shell output.
//!
//! The KPI listing is also what the Pages generator reads back from
//! `code_kpis.txt`, so labels such as `RTL Files:` and `OVERALL SCORE:` are
//! kept free of color codes between label and value.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::{DetailedAnalysis, ProjectKpis};
use crate::quality::QualityReport;

const RULE_WIDTH: usize = 60;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Color for a 0-100 score
fn score_color(score: f64) -> &'static str {
    if score >= 80.0 {
        "green"
    } else if score >= 60.0 {
        "yellow"
    } else {
        "red"
    }
}

/// Text reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn check(&self, flag: bool) -> String {
        if flag {
            self.color("✓", "green")
        } else {
            self.color("✗", "red")
        }
    }

    fn heading(&self, lines: &mut Vec<String>, title: &str) {
        lines.push(String::new());
        lines.push(self.color(title, "bold"));
    }

    fn rule(&self) -> String {
        "=".repeat(RULE_WIDTH)
    }

    fn metadata_section(&self, lines: &mut Vec<String>, report: &QualityReport) {
        if !report.exists {
            lines.push(String::new());
            lines.push(format!(
                "VYGES METADATA: {} No vyges-metadata.json found",
                self.check(false)
            ));
            return;
        }

        self.heading(lines, "VYGES METADATA ANALYSIS:");
        lines.push(
            self.color(
                &format!("   Quality Score: {:.1}/100", report.overall_score),
                score_color(report.overall_score),
            ),
        );
        lines.push(format!(
            "   Catalog Readiness: {}",
            report.catalog_readiness.as_str().to_uppercase()
        ));
        lines.push(format!("   Validation Status: {}", report.validation_status));
        lines.push(format!(
            "   Field Completeness: {:.1}%",
            report.field_completeness
        ));
        lines.push(format!("   Interface Quality: {:.1}%", report.interface_quality));
        lines.push(format!(
            "   Test Coverage Metadata: {:.1}%",
            report.test_coverage_score
        ));
        lines.push(format!(
            "   Flow Configuration: {:.1}%",
            report.flow_configuration_score
        ));
        lines.push(format!(
            "   Documentation Metadata: {:.1}%",
            report.documentation_metadata_score
        ));
        lines.push(format!(
            "   AI Generation Ready: {}",
            self.check(report.ai_generation_ready)
        ));

        if !report.issues.is_empty() {
            self.heading(lines, "METADATA ISSUES:");
            for issue in &report.issues {
                lines.push(format!("   {} {issue}", self.color("!", "yellow")));
            }
        }
        if !report.recommendations.is_empty() {
            self.heading(lines, "METADATA RECOMMENDATIONS:");
            for rec in &report.recommendations {
                lines.push(format!("   {} {rec}", self.color("→", "cyan")));
            }
        }
    }

    fn detailed_section(&self, lines: &mut Vec<String>, detailed: &DetailedAnalysis) {
        self.heading(lines, "DETAILED ANALYSIS:");
        if !detailed.largest_files.is_empty() {
            lines.push("   Largest Files:".to_string());
            for file in &detailed.largest_files {
                lines.push(format!(
                    "      {} ({} lines, {} bytes)",
                    file.path, file.lines, file.size_bytes
                ));
            }
        }
        let complexity = &detailed.complexity_analysis;
        lines.push(format!("   SystemVerilog Files: {}", complexity.module_count));
        if complexity.module_count > 0 {
            lines.push(format!(
                "   Average Module Size: {:.1} lines",
                complexity.avg_module_size
            ));
            lines.push(format!("   Largest Module: {}", complexity.largest_module));
        }

        let deps = &detailed.dependencies;
        for (label, names) in [
            ("External Tools", &deps.external_tools),
            ("Libraries", &deps.libraries),
            ("Frameworks", &deps.frameworks),
        ] {
            if !names.is_empty() {
                lines.push(format!("   {label}: {}", names.join(", ")));
            }
        }
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_kpi_report(
        &self,
        kpis: &ProjectKpis,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        // Header
        let title = config.title.as_deref().unwrap_or("IP KPIs ANALYSIS REPORT");
        lines.push(self.rule());
        lines.push(self.color(title, "bold"));
        lines.push(self.rule());

        // Project info
        let info = &kpis.project_info;
        lines.push(String::new());
        lines.push(format!(
            "{} {}",
            self.color("PROJECT:", "cyan"),
            info.project_name
        ));
        lines.push(format!("Analysis Date: {}", info.analysis_date));
        lines.push(format!(
            "Git Status: {}",
            info.git_status
                .map_or_else(|| "Unknown".to_string(), |s| s.to_string())
        ));

        // Overall score, colored as a whole line
        let overall = kpis.summary.overall_score;
        lines.push(String::new());
        lines.push(self.color(
            &format!("OVERALL SCORE: {overall:.1}/100"),
            score_color(overall),
        ));

        let code = &kpis.code_metrics;
        self.heading(&mut lines, "CODE METRICS:");
        lines.push(format!("   RTL Files: {}", code.rtl_files));
        lines.push(format!("   RTL Lines: {}", code.rtl_lines));
        lines.push(format!("   RTL Modules: {}", code.rtl_modules));
        lines.push(format!("   Testbench Files: {}", code.testbench_files));
        lines.push(format!("   Testbench Lines: {}", code.testbench_lines));
        lines.push(format!("   Constraint Files: {}", code.constraint_files));
        lines.push(format!("   Script Files: {}", code.script_files));

        let docs = &kpis.documentation_metrics;
        self.heading(&mut lines, "DOCUMENTATION:");
        lines.push(format!("   Documentation Files: {}", docs.documentation_files));
        lines.push(format!("   Documentation Lines: {}", docs.documentation_lines));
        lines.push(format!("   README Exists: {}", self.check(docs.readme_exists)));
        lines.push(format!(
            "   Developer Guide: {}",
            self.check(docs.developer_guide_exists)
        ));

        let tests = &kpis.test_metrics;
        self.heading(&mut lines, "TEST COVERAGE:");
        lines.push(format!("   Test Files: {}", tests.test_files));
        lines.push(format!("   Test Lines: {}", tests.test_lines));
        lines.push(format!("   Coverage Files: {}", tests.coverage_files));
        lines.push(format!("   Test Vectors: {}", tests.test_vectors));

        let quality = &kpis.quality_metrics;
        self.heading(&mut lines, "QUALITY METRICS:");
        lines.push(format!(
            "   Metadata Complete: {}",
            self.check(quality.metadata_complete)
        ));
        lines.push(format!(
            "   Documentation Complete: {}",
            self.check(quality.documentation_complete)
        ));
        lines.push(format!("   Linting Clean: {}", self.check(quality.linting_clean)));
        lines.push(format!(
            "   Synthesis Clean: {}",
            self.check(quality.synthesis_clean)
        ));

        self.metadata_section(&mut lines, &kpis.metadata_analysis);

        if let Some(detailed) = &kpis.detailed_analysis {
            self.detailed_section(&mut lines, detailed);
        }

        let summary = &kpis.summary;
        if !summary.strengths.is_empty() {
            self.heading(&mut lines, "STRENGTHS:");
            for strength in &summary.strengths {
                lines.push(format!("   {} {strength}", self.check(true)));
            }
        }
        if !summary.areas_for_improvement.is_empty() {
            self.heading(&mut lines, "AREAS FOR IMPROVEMENT:");
            for area in &summary.areas_for_improvement {
                lines.push(format!("   {} {area}", self.color("!", "yellow")));
            }
        }
        if !summary.recommendations.is_empty() {
            self.heading(&mut lines, "RECOMMENDATIONS:");
            for rec in &summary.recommendations {
                lines.push(format!("   {} {rec}", self.color("→", "cyan")));
            }
        }

        lines.push(String::new());
        lines.push(self.rule());

        Ok(lines.join("\n"))
    }

    fn generate_metadata_report(
        &self,
        report: &QualityReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        let title = config.title.as_deref().unwrap_or("METADATA QUALITY REPORT");
        lines.push(self.rule());
        lines.push(self.color(title, "bold"));
        lines.push(self.rule());

        self.metadata_section(&mut lines, report);

        if report.exists && !report.required_fields.is_empty() {
            self.heading(&mut lines, "FIELDS:");
            for (name, present) in report
                .required_fields
                .iter()
                .chain(report.optional_fields.iter())
            {
                lines.push(format!("   {} {name}", self.check(*present)));
            }
        }

        lines.push(String::new());
        lines.push(self.rule());

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Text
    }
}
