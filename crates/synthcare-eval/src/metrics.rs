use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use synthcare_core::GeneratedTable;

/// Null profile for one table: row count plus per-column absent-value
/// counts and percentages. Map keys are column names, ordered
/// alphabetically for deterministic output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableNullSummary {
    pub table: String,
    pub total_rows: u64,
    pub null_values: BTreeMap<String, u64>,
    pub percentage_null: BTreeMap<String, f64>,
}

/// One summary row per evaluated table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityReport {
    pub tables: Vec<TableNullSummary>,
}

/// Count absent values per column for one table.
pub fn collect_null_summary(table: &GeneratedTable) -> TableNullSummary {
    let total_rows = table.rows.len() as u64;
    let mut null_values = BTreeMap::new();
    let mut percentage_null = BTreeMap::new();

    for (index, column) in table.spec.columns.iter().enumerate() {
        let nulls = table
            .column_values(index)
            .filter(|cell| cell.is_null())
            .count() as u64;
        let percentage = if total_rows == 0 {
            0.0
        } else {
            nulls as f64 / total_rows as f64 * 100.0
        };
        null_values.insert(column.name.to_string(), nulls);
        percentage_null.insert(column.name.to_string(), percentage);
    }

    TableNullSummary {
        table: table.name().to_string(),
        total_rows,
        null_values,
        percentage_null,
    }
}

/// Build the report over a table set, one summary row per table, in the
/// given order.
pub fn build_quality_report(tables: &[GeneratedTable]) -> QualityReport {
    QualityReport {
        tables: tables.iter().map(collect_null_summary).collect(),
    }
}
