use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde_json::{Map, Value};

use crate::errors::EvalError;
use crate::metrics::{QualityReport, TableNullSummary};

/// Write the quality report as CSV, one row per table.
///
/// The per-column map cells are rendered as JSON objects so the counts
/// stay machine-readable inside a flat file. Percentages are rounded to
/// two decimals.
pub fn write_quality_report_csv(path: &Path, report: &QualityReport) -> Result<(), EvalError> {
    let writer = BufWriter::new(File::create(path)?);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    writer.write_record(["TableName", "TotalRows", "NullValues", "PercentageNull"])?;
    for summary in &report.tables {
        writer.write_record([
            summary.table.clone(),
            summary.total_rows.to_string(),
            null_values_json(summary)?,
            percentage_null_json(summary)?,
        ])?;
    }

    writer.flush()?;
    Ok(())
}

fn null_values_json(summary: &TableNullSummary) -> Result<String, EvalError> {
    Ok(serde_json::to_string(&summary.null_values)?)
}

fn percentage_null_json(summary: &TableNullSummary) -> Result<String, EvalError> {
    let mut map = Map::new();
    for (column, percentage) in &summary.percentage_null {
        let rounded = (percentage * 100.0).round() / 100.0;
        map.insert(column.clone(), Value::from(rounded));
    }
    Ok(serde_json::to_string(&Value::Object(map))?)
}
