//! Null-value quality metrics for generated datasets.
//!
//! Consumes generated tables and produces the per-table null profile
//! written as `QualityReport.csv`.

pub mod errors;
pub mod metrics;
pub mod report;

pub use errors::EvalError;
pub use metrics::{QualityReport, TableNullSummary, build_quality_report, collect_null_summary};
pub use report::write_quality_report_csv;
