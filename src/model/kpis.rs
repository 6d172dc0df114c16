//! Project KPI data produced by the analyzer.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::quality::QualityReport;

/// Full KPI record for one project tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectKpis {
    pub project_info: ProjectInfo,
    pub file_structure: FileStructure,
    pub code_metrics: CodeMetrics,
    pub documentation_metrics: DocumentationMetrics,
    pub test_metrics: TestMetrics,
    pub quality_metrics: QualityMetrics,
    /// Quality report for the project's metadata file
    pub metadata_analysis: QualityReport,
    /// Only populated when detailed analysis was requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_analysis: Option<DetailedAnalysis>,
    pub summary: KpiSummary,
}

/// Working tree state reported by git
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GitStatus {
    Clean,
    Dirty,
}

impl std::fmt::Display for GitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clean => write!(f, "clean"),
            Self::Dirty => write!(f, "dirty"),
        }
    }
}

/// Marker stored in [`ProjectInfo::git_repo`] outside a repository.
pub const NOT_A_GIT_REPO: &str = "not_a_git_repo";

/// Basic project identification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectInfo {
    /// Name of the project root directory
    pub project_name: String,
    /// RFC 3339 local timestamp of the analysis
    pub analysis_date: String,
    /// Absolute project root
    pub project_root: String,
    /// Repository toplevel, or [`NOT_A_GIT_REPO`]
    pub git_repo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_status: Option<GitStatus>,
}

/// Files and subdirectories directly under one directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub files: Vec<String>,
    pub subdirectories: Vec<String>,
}

/// Shape of the project tree
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileStructure {
    pub total_files: usize,
    pub total_directories: usize,
    /// Extension (lowercase, leading dot) to file count
    pub file_types: BTreeMap<String, usize>,
    /// Relative directory path (`root` for the top level) to its listing
    pub directory_structure: IndexMap<String, DirectoryEntry>,
}

/// RTL, testbench, constraint and script volume
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeMetrics {
    pub rtl_files: usize,
    pub rtl_lines: usize,
    pub rtl_modules: usize,
    pub testbench_files: usize,
    pub testbench_lines: usize,
    pub constraint_files: usize,
    pub constraint_lines: usize,
    pub script_files: usize,
    pub script_lines: usize,
}

/// Documentation coverage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentationMetrics {
    pub documentation_files: usize,
    pub documentation_lines: usize,
    pub readme_exists: bool,
    pub developer_guide_exists: bool,
    pub architecture_docs: usize,
    pub api_docs: usize,
    pub tutorial_docs: usize,
}

/// Test file counts per verification style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestTypeCounts {
    pub systemverilog: usize,
    pub cocotb: usize,
    pub uvm: usize,
    pub formal: usize,
}

/// Verification assets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestMetrics {
    pub test_files: usize,
    pub test_lines: usize,
    pub test_types: TestTypeCounts,
    pub coverage_files: usize,
    pub test_vectors: usize,
}

/// Presence of flow artifacts and completeness markers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityMetrics {
    pub linting_clean: bool,
    pub synthesis_clean: bool,
    pub simulation_passing: bool,
    pub coverage_goals_met: bool,
    pub documentation_complete: bool,
    pub metadata_complete: bool,
}

/// A file ranked by line count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSize {
    pub path: String,
    pub size_bytes: u64,
    pub lines: usize,
}

/// SystemVerilog module size statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplexityAnalysis {
    pub avg_module_size: f64,
    pub largest_module: String,
    pub module_count: usize,
}

/// EDA tool and library keywords mentioned in scripts and docs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyMentions {
    pub external_tools: Vec<String>,
    pub libraries: Vec<String>,
    pub frameworks: Vec<String>,
}

/// Opt-in deep analysis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailedAnalysis {
    /// Ten largest files by line count, largest first
    pub largest_files: Vec<FileSize>,
    pub complexity_analysis: ComplexityAnalysis,
    pub dependencies: DependencyMentions,
}

/// Roll-up score and narrative
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    /// Project score in `[0, 100]`
    pub overall_score: f64,
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub recommendations: Vec<String>,
}
