//! Documentation coverage.

use super::tree::ProjectTree;
use crate::model::DocumentationMetrics;

pub const README: &str = "README.md";
pub const DEVELOPER_GUIDE: &str = "Developer_Guide.md";

/// Key documents, relative to the project root
pub const KEY_DOCS: [&str; 6] = [
    README,
    "README_FIRST.md",
    DEVELOPER_GUIDE,
    "docs/architecture.md",
    "docs/api.md",
    "docs/tutorial.md",
];

const DOCS_DIR_PREFIX: &str = "docs/";

#[must_use]
pub fn documentation_metrics(tree: &ProjectTree) -> DocumentationMetrics {
    let mut docs = DocumentationMetrics::default();

    for key in KEY_DOCS {
        let Some(file) = tree.get(key) else {
            continue;
        };
        docs.documentation_files += 1;
        docs.documentation_lines += file.lines();

        match key {
            README => docs.readme_exists = true,
            DEVELOPER_GUIDE => docs.developer_guide_exists = true,
            k if k.contains("architecture") => docs.architecture_docs += 1,
            k if k.contains("api") => docs.api_docs += 1,
            k if k.contains("tutorial") => docs.tutorial_docs += 1,
            _ => {}
        }
    }

    // Everything else under docs/, without counting key documents twice
    for file in tree.files() {
        if file.rel_path.starts_with(DOCS_DIR_PREFIX)
            && file.matches("*.md")
            && file.name != README
            && file.name != DEVELOPER_GUIDE
            && !KEY_DOCS.contains(&file.rel_path.as_str())
        {
            docs.documentation_files += 1;
            docs.documentation_lines += file.lines();
        }
    }

    docs
}
