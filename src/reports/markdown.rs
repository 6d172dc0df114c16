//! Markdown report generator.
//!
//! Produces the comprehensive analysis report: KPI summary, quality flags,
//! metadata analysis, a digest of the synthesis gate report and the key
//! recommendations.

use std::fmt::Write as _;
use std::sync::LazyLock;

use chrono::Local;
use regex::Regex;

use super::escape::{escape_markdown_inline, escape_markdown_list};
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::ProjectKpis;
use crate::quality::QualityReport;

/// Recommendations listed when the analysis produced none.
pub const FALLBACK_RECOMMENDATIONS: [&str; 4] = [
    "Implement comprehensive test coverage",
    "Add synthesis constraints for timing optimization",
    "Perform power analysis with realistic workloads",
    "Optimize memory interface for production use",
];

static TOTAL_CELLS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Reported Modules.*?~(\d+) cells").expect("static regex"));
static TOTAL_AREA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Total Estimated Area.*?~([\d.]+) mm²").expect("static regex"));

/// Key figures pulled from a gate analysis report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GateSummary {
    /// Total cell count across reported modules
    pub total_cells: Option<String>,
    /// Estimated die area in mm²
    pub die_area_mm2: Option<String>,
}

impl GateSummary {
    /// Scan gate report text. Each pattern must match within one line.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let capture = |re: &Regex| {
            re.captures(content)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().to_string())
        };
        Self {
            total_cells: capture(&TOTAL_CELLS),
            die_area_mm2: capture(&TOTAL_AREA),
        }
    }
}

/// Format an integer with `,` thousands separators.
fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn mark(flag: bool) -> &'static str {
    if flag {
        "✅"
    } else {
        "❌"
    }
}

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn metadata_summary(out: &mut String, report: &QualityReport) -> std::fmt::Result {
        writeln!(out, "### Vyges Metadata Analysis")?;
        writeln!(out, "- **Quality Score:** {:.1}/100", report.overall_score)?;
        writeln!(
            out,
            "- **Catalog Readiness:** {}",
            report.catalog_readiness.as_str().to_uppercase()
        )?;
        writeln!(
            out,
            "- **Field Completeness:** {:.1}%",
            report.field_completeness
        )?;
        writeln!(
            out,
            "- **AI Generation Ready:** {}",
            mark(report.ai_generation_ready)
        )?;
        writeln!(out)
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate_kpi_report(
        &self,
        kpis: &ProjectKpis,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut out = String::new();
        let title = config
            .title
            .as_deref()
            .unwrap_or("IP Comprehensive Analysis Report");

        writeln!(out, "# {}", escape_markdown_inline(title))?;
        writeln!(out)?;
        writeln!(
            out,
            "**Generated:** {}  ",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(
            out,
            "**Project:** {}",
            escape_markdown_inline(&kpis.project_info.project_name)
        )?;
        writeln!(out)?;

        // KPI summary
        writeln!(out, "## 📊 Code KPIs Summary")?;
        writeln!(out)?;
        writeln!(
            out,
            "**Overall Score:** {:.1}/100",
            kpis.summary.overall_score
        )?;
        writeln!(out)?;

        let code = &kpis.code_metrics;
        writeln!(out, "### Code Metrics")?;
        writeln!(out, "- **RTL Files:** {}", code.rtl_files)?;
        writeln!(out, "- **RTL Lines:** {}", thousands(code.rtl_lines))?;
        writeln!(out, "- **RTL Modules:** {}", code.rtl_modules)?;
        writeln!(out, "- **Testbench Files:** {}", code.testbench_files)?;
        writeln!(
            out,
            "- **Testbench Lines:** {}",
            thousands(code.testbench_lines)
        )?;
        writeln!(out)?;

        let quality = &kpis.quality_metrics;
        writeln!(out, "### Quality Metrics")?;
        writeln!(out, "- **Linting Clean:** {}", mark(quality.linting_clean))?;
        writeln!(out, "- **Synthesis Clean:** {}", mark(quality.synthesis_clean))?;
        writeln!(
            out,
            "- **Simulation Passing:** {}",
            mark(quality.simulation_passing)
        )?;
        writeln!(
            out,
            "- **Coverage Goals Met:** {}",
            mark(quality.coverage_goals_met)
        )?;
        writeln!(
            out,
            "- **Documentation Complete:** {}",
            mark(quality.documentation_complete)
        )?;
        writeln!(
            out,
            "- **Metadata Complete:** {}",
            mark(quality.metadata_complete)
        )?;
        writeln!(out)?;

        if kpis.metadata_analysis.exists {
            Self::metadata_summary(&mut out, &kpis.metadata_analysis)?;
        }

        // Gate analysis digest
        if let Some(gate) = &config.gate_report {
            writeln!(out, "## 🔧 Gate Analysis Summary")?;
            writeln!(out)?;
            writeln!(
                out,
                "Detailed gate analysis report: `{}`",
                gate.path.replace('`', "'")
            )?;
            writeln!(out)?;

            let summary = GateSummary::parse(&gate.content);
            if let Some(cells) = &summary.total_cells {
                writeln!(out, "**Total Gate Count:** ~{cells} cells")?;
                writeln!(out)?;
            }
            if let Some(area) = &summary.die_area_mm2 {
                writeln!(out, "**Estimated Die Area:** ~{area} mm² (45nm process)")?;
                writeln!(out)?;
            }
        }

        // Recommendations
        writeln!(out, "## 🎯 Key Recommendations")?;
        writeln!(out)?;
        if kpis.summary.recommendations.is_empty() {
            for rec in FALLBACK_RECOMMENDATIONS {
                writeln!(out, "- {rec}")?;
            }
        } else {
            for rec in &kpis.summary.recommendations {
                writeln!(out, "- {}", escape_markdown_list(rec))?;
            }
        }

        writeln!(out)?;
        writeln!(out, "## 📋 Generated Reports")?;
        writeln!(out)?;
        writeln!(out, "The following reports were generated:")?;
        writeln!(out, "- **Code KPIs:** Available in JSON format")?;
        if let Some(gate) = &config.gate_report {
            writeln!(out, "- **Gate Analysis:** {}", escape_markdown_list(&gate.path))?;
        }
        for path in &config.generated_reports {
            writeln!(out, "- {}", escape_markdown_list(path))?;
        }

        Ok(out)
    }

    fn generate_metadata_report(
        &self,
        report: &QualityReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut out = String::new();
        let title = config.title.as_deref().unwrap_or("Metadata Quality Report");
        writeln!(out, "# {}", escape_markdown_inline(title))?;
        writeln!(out)?;

        if !report.exists {
            writeln!(out, "No `vyges-metadata.json` found.")?;
            return Ok(out);
        }

        Self::metadata_summary(&mut out, report)?;

        writeln!(out, "| Sub-score | Value |")?;
        writeln!(out, "|---|---|")?;
        for (name, value) in [
            ("Field completeness", report.field_completeness),
            ("Interface quality", report.interface_quality),
            ("Test metadata", report.test_coverage_score),
            ("Flow configuration", report.flow_configuration_score),
            ("Documentation metadata", report.documentation_metadata_score),
        ] {
            writeln!(out, "| {name} | {value:.1} |")?;
        }
        writeln!(out)?;
        writeln!(out, "**Validation Status:** {}", report.validation_status)?;
        writeln!(out)?;

        if !report.required_fields.is_empty() {
            writeln!(out, "### Fields")?;
            for (name, present) in report
                .required_fields
                .iter()
                .chain(report.optional_fields.iter())
            {
                writeln!(out, "- {} `{name}`", mark(*present))?;
            }
            writeln!(out)?;
        }

        if !report.issues.is_empty() {
            writeln!(out, "### Issues")?;
            for issue in &report.issues {
                writeln!(out, "- {}", escape_markdown_list(issue))?;
            }
            writeln!(out)?;
        }

        if !report.recommendations.is_empty() {
            writeln!(out, "### Recommendations")?;
            for rec in &report.recommendations {
                writeln!(out, "- {}", escape_markdown_list(rec))?;
            }
        }

        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(12567), "12,567");
        assert_eq!(thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_gate_summary_parse() {
        let content = "\
## Summary
- Reported Modules: 4 (~1832 cells)
- Total Estimated Area: ~0.37 mm² at 45nm
";
        let summary = GateSummary::parse(content);
        assert_eq!(summary.total_cells.as_deref(), Some("1832"));
        assert_eq!(summary.die_area_mm2.as_deref(), Some("0.37"));
    }

    #[test]
    fn test_gate_summary_does_not_cross_lines() {
        let summary = GateSummary::parse("Reported Modules: 4\n~1832 cells");
        assert_eq!(summary, GateSummary::default());
    }

    #[test]
    fn test_missing_metadata_report() {
        let out = MarkdownReporter::new()
            .generate_metadata_report(&QualityReport::default(), &ReportConfig::default())
            .unwrap();
        assert!(out.contains("No `vyges-metadata.json` found."));
    }
}
