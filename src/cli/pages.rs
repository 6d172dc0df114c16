//! Pages command handler.
//!
//! Implements the `pages` subcommand: fill the landing page template.

use std::path::PathBuf;

use anyhow::Result;

use crate::config::AppConfig;
use crate::pages::generate_pages;
use crate::pipeline::exit_codes;

/// Run the pages command, returning the exit code.
pub fn run_pages(project_root: PathBuf, config: &AppConfig, quiet: bool) -> Result<i32> {
    let data = generate_pages(&project_root, &config.pages.template, &config.pages.output)?;

    if !quiet {
        eprintln!("Generated {}", project_root.join(&config.pages.output).display());
        eprintln!("  IP: {} - {}", data.ip_name, data.ip_description);
        eprintln!(
            "  Tests: {}/{} ({}%)",
            data.passed_tests, data.total_tests, data.success_rate
        );
        eprintln!(
            "  Code: {} files, {} lines, {}/100",
            data.rtl_files, data.rtl_lines, data.overall_score
        );
        eprintln!(
            "  Status: synthesis {}, FPGA {}",
            data.synthesis_status, data.fpga_status
        );
    }
    Ok(exit_codes::SUCCESS)
}
