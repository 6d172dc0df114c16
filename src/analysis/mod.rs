//! Project KPI analysis.
//!
//! [`ProjectAnalyzer`] walks an IP project once and derives code,
//! documentation, verification and flow-artifact metrics, scores the
//! project's metadata file, and rolls everything up into a summary.
//!
//! ```no_run
//! use ip_kpis::analysis::{AnalysisOptions, ProjectAnalyzer};
//!
//! let kpis = ProjectAnalyzer::new(".")
//!     .with_options(AnalysisOptions { detailed: true, ..Default::default() })
//!     .analyze()?;
//! println!("project score: {:.1}", kpis.summary.overall_score);
//! # Ok::<(), ip_kpis::KpiError>(())
//! ```

mod code;
mod detailed;
mod docs;
mod git;
mod patterns;
mod summary;
mod tree;
mod verification;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use code::{code_metrics, file_structure};
pub use detailed::{detailed_analysis, EXTERNAL_TOOLS, FRAMEWORKS, LARGEST_FILES_LIMIT, LIBRARIES};
pub use docs::{documentation_metrics, DEVELOPER_GUIDE, KEY_DOCS, README};
pub use git::{git_status, git_toplevel};
pub use patterns::glob_match;
pub use summary::{summarize, SummaryInputs};
pub use tree::{FileEntry, ProjectTree, ROOT_KEY};
pub use verification::{quality_metrics, test_metrics};

use crate::error::{KpiError, Result};
use crate::model::{ProjectInfo, ProjectKpis, METADATA_FILE_NAME, NOT_A_GIT_REPO};
use crate::pipeline::load_metadata;
use crate::quality::{QualityReport, QualityScorer, ScoringWeights};

/// Directory names skipped during the walk by default
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[".git"];

/// Knobs for a project analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Metadata file name, relative to the project root
    pub metadata_file: String,
    /// Directory names never descended into
    pub excluded_dirs: Vec<String>,
    /// Include largest files, module sizes and tool mentions
    pub detailed: bool,
    /// Weights for the metadata quality score
    pub weights: ScoringWeights,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            metadata_file: METADATA_FILE_NAME.to_string(),
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|d| (*d).to_string()).collect(),
            detailed: false,
            weights: ScoringWeights::default(),
        }
    }
}

/// Analyzer for one project root
#[derive(Debug, Clone)]
pub struct ProjectAnalyzer {
    root: PathBuf,
    options: AnalysisOptions,
}

impl ProjectAnalyzer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            options: AnalysisOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: AnalysisOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub const fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Run the full analysis.
    ///
    /// # Errors
    ///
    /// Fails only when the root is not an existing directory. Unreadable
    /// entries below it are skipped.
    pub fn analyze(&self) -> Result<ProjectKpis> {
        if !self.root.is_dir() {
            return Err(KpiError::root_not_found(&self.root));
        }
        let root = self
            .root
            .canonicalize()
            .map_err(|e| KpiError::io(&self.root, e))?;

        tracing::info!("Analyzing project at {}", root.display());
        let tree = ProjectTree::scan(&root, &self.options.excluded_dirs)?;

        let file_structure = file_structure(&tree);
        let code_metrics = code_metrics(&tree);
        let documentation_metrics = documentation_metrics(&tree);
        let test_metrics = test_metrics(&tree);
        let quality_metrics = quality_metrics(&tree, &self.options.metadata_file);
        let metadata_analysis = self.score_metadata(&root);
        let detailed_analysis = self.options.detailed.then(|| detailed_analysis(&tree));

        let summary = summarize(SummaryInputs {
            code: &code_metrics,
            docs: &documentation_metrics,
            tests: &test_metrics,
            quality: &quality_metrics,
            metadata: &metadata_analysis,
        });
        tracing::info!("Project score: {:.1}/100", summary.overall_score);

        Ok(ProjectKpis {
            project_info: project_info(&root),
            file_structure,
            code_metrics,
            documentation_metrics,
            test_metrics,
            quality_metrics,
            metadata_analysis,
            detailed_analysis,
            summary,
        })
    }

    fn score_metadata(&self, root: &Path) -> QualityReport {
        let path = root.join(&self.options.metadata_file);
        let input = load_metadata(&path);
        let report = QualityScorer::new().with_weights(self.options.weights).score(&input);
        tracing::debug!(
            "Metadata {}: score {:.1}, readiness {}",
            path.display(),
            report.overall_score,
            report.catalog_readiness
        );
        report
    }
}

fn project_info(root: &Path) -> ProjectInfo {
    let project_name = root
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let (git_repo, git_status) = match git_toplevel(root) {
        Some(toplevel) => (toplevel, git_status(root)),
        None => (NOT_A_GIT_REPO.to_string(), None),
    };

    ProjectInfo {
        project_name,
        analysis_date: chrono::Local::now().to_rfc3339(),
        project_root: root.display().to_string(),
        git_repo,
        git_status,
    }
}
