use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::value::CellValue;

/// How a column's values are drawn.
///
/// Samplers are pure descriptions; evaluation lives in the generation
/// engine. Category lists borrow `'static` slices so table catalogs can be
/// plain constants.
#[derive(Debug, Clone, PartialEq)]
pub enum Sampler {
    /// Dense key: row index + 1.
    RowNumber,
    /// Uniform integer in `min..=max`.
    IntRange { min: i64, max: i64 },
    /// Uniform pick from a category list.
    Choice(&'static [&'static str]),
    /// Uniform date in `[today - days_back, today]`.
    DateWithin { days_back: i64 },
    /// Draws a fresh anchor date in `[today - anchor_days_back, today]`,
    /// then a uniform date between that anchor and today. The anchor is
    /// re-drawn per cell and is not any other column's value.
    DateAfterAnchor { anchor_days_back: i64 },
    FirstName,
    LastName,
    FullName,
    CompanyName,
    City,
    State,
    ZipCode,
    StreetAddress,
    /// Fixed-length lowercase code token.
    Code { len: usize },
    /// 0..=max words joined with ", "; may be empty.
    WordList { max: usize },
}

/// One column of a table: name, sampler, and whether the noise injector
/// may null it out. Key columns are never nullable.
#[derive(Debug, Clone)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub sampler: Sampler,
    pub nullable: bool,
}

impl ColumnSpec {
    /// A nullable data column.
    pub fn new(name: &'static str, sampler: Sampler) -> Self {
        Self {
            name,
            sampler,
            nullable: true,
        }
    }

    /// A dense key column, exempt from noise injection.
    pub fn key(name: &'static str) -> Self {
        Self {
            name,
            sampler: Sampler::RowNumber,
            nullable: false,
        }
    }
}

/// An ordered column-spec list plus a row count. Column order is CSV
/// column order.
#[derive(Debug, Clone)]
pub struct TableSpec {
    pub name: &'static str,
    pub rows: u64,
    pub columns: Vec<ColumnSpec>,
}

impl TableSpec {
    pub fn new(name: &'static str, rows: u64, columns: Vec<ColumnSpec>) -> Self {
        Self {
            name,
            rows,
            columns,
        }
    }

    /// Check structural invariants: at least one column, no duplicates.
    pub fn validate(&self) -> Result<()> {
        if self.columns.is_empty() {
            return Err(Error::InvalidSpec(format!(
                "table '{}' has no columns",
                self.name
            )));
        }
        let mut seen = BTreeSet::new();
        for column in &self.columns {
            if !seen.insert(column.name) {
                return Err(Error::InvalidSpec(format!(
                    "duplicate column name: {}.{}",
                    self.name, column.name
                )));
            }
        }
        Ok(())
    }

    pub fn header(&self) -> Vec<&'static str> {
        self.columns.iter().map(|column| column.name).collect()
    }
}

/// A generated table: its spec plus rows of cells in column order.
#[derive(Debug, Clone)]
pub struct GeneratedTable {
    pub spec: TableSpec,
    pub rows: Vec<Vec<CellValue>>,
}

impl GeneratedTable {
    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.spec
            .columns
            .iter()
            .position(|column| column.name == name)
    }

    /// Iterate one column's cells, in row order.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &CellValue> {
        self.rows.iter().filter_map(move |row| row.get(index))
    }
}
