//! Project landing page generation.
//!
//! The page is an HTML template with `{{PLACEHOLDER}}` tokens, filled from
//! the metadata file, flow reports found in the tree and the CI
//! environment.

mod data;
mod render;

use std::path::{Path, PathBuf};

pub use data::{
    PageData, CODE_KPIS_REPORT, FPGA_NETLIST_DIR, GATE_REPORTS, SYNTHESIS_REPORT,
    TEST_HARNESS_REPORT,
};
pub use render::{render_template, PLACEHOLDERS};

use crate::error::{ErrorContext, KpiError, Result};
use crate::model::{MetadataInput, METADATA_FILE_NAME};
use crate::pipeline::load_metadata;

/// Template location, relative to the project root
pub const DEFAULT_TEMPLATE: &str = "public/index_template.html";
/// Generated page, relative to the project root
pub const DEFAULT_OUTPUT: &str = "public/index.html";

/// Render `template` for the project at `root` and write it to `output`.
///
/// Relative template and output paths are resolved against `root`.
///
/// # Errors
///
/// Returns a template-not-found report error when the template is missing,
/// and an IO error when the template cannot be read or the page written.
pub fn generate_pages(root: &Path, template: &Path, output: &Path) -> Result<PageData> {
    let template_path = resolve(root, template);
    if !template_path.is_file() {
        return Err(KpiError::template_not_found(template_path));
    }
    let template = std::fs::read_to_string(&template_path)
        .map_err(|e| KpiError::io(&template_path, e))
        .context("loading page template")?;

    let metadata = load_metadata(&root.join(METADATA_FILE_NAME));
    if let MetadataInput::Malformed(message) = &metadata {
        tracing::warn!("Could not parse {METADATA_FILE_NAME}, using defaults: {message}");
    }
    let data = PageData::collect(root, metadata.document());
    let page = render_template(&template, &data);

    let output_path = resolve(root, output);
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| KpiError::io(parent, e))
            .context("creating page directory")?;
    }
    std::fs::write(&output_path, page)
        .map_err(|e| KpiError::io(&output_path, e))
        .context("writing page")?;

    tracing::info!("Generated {}", output_path.display());
    tracing::debug!(
        "Page data: {} ({}), tests {}/{}, score {}",
        data.ip_name,
        data.ip_description,
        data.passed_tests,
        data.total_tests,
        data.overall_score
    );
    Ok(data)
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
