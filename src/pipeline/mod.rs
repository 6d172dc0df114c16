//! Shared orchestration for CLI commands.
//!
//! Loads metadata, renders reports and writes them out, so command
//! handlers stay thin.

mod load;
mod output;
mod report_stage;

pub use load::{load_metadata, parse_metadata_str, NOT_AN_OBJECT_MESSAGE};
pub use output::{should_use_color, write_output, write_report_file, OutputTarget};
pub use report_stage::{
    output_kpi_report, output_metadata_report, write_comprehensive_report, write_kpis_json,
    COMPREHENSIVE_REPORT_NAME, FLOW_GATE_REPORT, GATE_REPORT_NAME, KPIS_JSON_NAME,
};

/// Exit codes for CI integration
pub mod exit_codes {
    /// Success, all gates passed
    pub const SUCCESS: i32 = 0;
    /// Metadata scored below the requested minimum
    pub const BELOW_MIN_SCORE: i32 = 1;
    /// Metadata is not catalog-ready while readiness was required
    pub const NOT_CATALOG_READY: i32 = 2;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
