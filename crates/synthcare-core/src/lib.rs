//! Core contracts for Synthcare.
//!
//! This crate defines the cell value type, the column-spec/table-spec
//! descriptors that drive generation, and the run configuration shared
//! across the engine, the evaluator, and the CLI.

pub mod config;
pub mod error;
pub mod schema;
pub mod value;

pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use schema::{ColumnSpec, GeneratedTable, Sampler, TableSpec};
pub use value::CellValue;
