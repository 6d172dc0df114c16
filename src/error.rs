//! Unified error types for ip-kpis.
//!
//! Scoring itself never fails: a missing or malformed metadata document is
//! absorbed into the [`QualityReport`](crate::quality::QualityReport). The
//! errors here cover the surrounding I/O: scanning a project tree, reading
//! templates and writing reports.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for ip-kpis operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum KpiError {
    /// Errors while scanning a project tree
    #[error("Project analysis failed: {context}")]
    Analysis {
        context: String,
        #[source]
        source: AnalysisErrorKind,
    },

    /// Errors during report or page generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Reasons a decoded JSON value is not a metadata document
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MetadataErrorKind {
    #[error("expected a JSON object at document root, found {0}")]
    NotAnObject(&'static str),
}

/// Specific analysis error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AnalysisErrorKind {
    #[error("Project root is not a directory: {0}")]
    RootNotFound(PathBuf),

    #[error("Directory walk failed: {0}")]
    WalkFailed(String),
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("Template not found: {0}")]
    TemplateNotFound(PathBuf),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for ip-kpis operations
pub type Result<T> = std::result::Result<T, KpiError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl KpiError {
    /// Create an analysis error with context
    pub fn analysis(context: impl Into<String>, source: AnalysisErrorKind) -> Self {
        Self::Analysis {
            context: context.into(),
            source,
        }
    }

    /// Create an analysis error for a project root that does not exist
    pub fn root_not_found(path: impl Into<PathBuf>) -> Self {
        Self::analysis("scanning project", AnalysisErrorKind::RootNotFound(path.into()))
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create a report error for a missing page template
    pub fn template_not_found(path: impl Into<PathBuf>) -> Self {
        Self::report(
            "loading page template",
            ReportErrorKind::TemplateNotFound(path.into()),
        )
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<walkdir::Error> for KpiError {
    fn from(err: walkdir::Error) -> Self {
        Self::analysis("walking project tree", AnalysisErrorKind::WalkFailed(err.to_string()))
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings chain from the outside in, so an error raised while
/// reading a template inside page generation renders as
/// `"generating pages: loading page template"`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<KpiError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: KpiError, new_ctx: &str) -> KpiError {
    match err {
        KpiError::Analysis {
            context: existing,
            source,
        } => KpiError::Analysis {
            context: chain_context(new_ctx, &existing),
            source,
        },
        KpiError::Report {
            context: existing,
            source,
        } => KpiError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        KpiError::Io {
            path,
            message,
            source,
        } => KpiError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        KpiError::Config(msg) => KpiError::Config(chain_context(new_ctx, &msg)),
    }
}

/// Join two context strings as `"new: existing"`.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
