use std::path::PathBuf;
use std::time::Instant;

use chrono::{NaiveDate, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use synthcare_core::{GeneratedTable, GeneratorConfig, TableSpec};

use crate::catalog::{auxiliary_tables, core_tables};
use crate::errors::GenerationError;
use crate::noise::NoiseInjector;
use crate::output::csv::write_table_csv;
use crate::samplers::{SampleContext, sample};

/// Options for a generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory where the CSV files land; existing files are overwritten.
    pub out_dir: PathBuf,
    pub config: GeneratorConfig,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            config: GeneratorConfig::default(),
        }
    }
}

/// Summary of one written table.
#[derive(Debug, Clone)]
pub struct TableReport {
    pub table: &'static str,
    pub rows_generated: u64,
    pub bytes_written: u64,
}

/// Summary of a driver run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub tables: Vec<TableReport>,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

/// Entry point for the two dataset drivers.
///
/// `run_core` and `run_auxiliary` are independent: each validates the
/// configuration, builds its own RNG, generates its table set in order,
/// and writes one CSV per table. A failure aborts the run, leaving any
/// already-written files on disk.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn run_core(&self) -> Result<(Vec<GeneratedTable>, RunSummary), GenerationError> {
        self.run_set("core", core_tables(&self.options.config))
    }

    pub fn run_auxiliary(&self) -> Result<(Vec<GeneratedTable>, RunSummary), GenerationError> {
        self.run_set("auxiliary", auxiliary_tables(&self.options.config))
    }

    fn run_set(
        &self,
        driver: &'static str,
        specs: Vec<TableSpec>,
    ) -> Result<(Vec<GeneratedTable>, RunSummary), GenerationError> {
        let start = Instant::now();
        self.options.config.validate()?;
        for spec in &specs {
            spec.validate()?;
        }
        let noise = NoiseInjector::new(self.options.config.noise_probability)?;
        let mut rng = self.rng();
        let today = Utc::now().date_naive();
        std::fs::create_dir_all(&self.options.out_dir)?;

        info!(
            driver,
            tables = specs.len(),
            noise_probability = noise.probability(),
            seed = ?self.options.config.seed,
            "generation started"
        );

        let mut tables = Vec::with_capacity(specs.len());
        let mut summary = RunSummary::default();
        for spec in specs {
            let table_start = Instant::now();
            info!(table = spec.name, rows = spec.rows, "generating table");

            let table = generate_table(spec, &noise, today, &mut rng);
            let path = self.options.out_dir.join(format!("{}.csv", table.name()));
            let bytes_written = write_table_csv(&path, &table)?;

            info!(
                table = table.name(),
                rows_generated = table.rows.len() as u64,
                bytes_written,
                duration_ms = table_start.elapsed().as_millis() as u64,
                "table written"
            );
            summary.tables.push(TableReport {
                table: table.name(),
                rows_generated: table.rows.len() as u64,
                bytes_written,
            });
            summary.bytes_written += bytes_written;
            tables.push(table);
        }

        summary.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            driver,
            tables = summary.tables.len(),
            bytes_written = summary.bytes_written,
            duration_ms = summary.duration_ms,
            "generation completed"
        );
        Ok((tables, summary))
    }

    fn rng(&self) -> ChaCha8Rng {
        match self.options.config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        }
    }
}

/// Build one table from its spec.
///
/// Every cell is drawn by its column's sampler; nullable cells then pass
/// through the noise injector. Key columns skip injection, so keys stay a
/// dense 1..N sequence.
pub fn generate_table<R: Rng>(
    spec: TableSpec,
    noise: &NoiseInjector,
    today: NaiveDate,
    rng: &mut R,
) -> GeneratedTable {
    let mut rows = Vec::with_capacity(spec.rows as usize);
    for row_index in 0..spec.rows {
        let ctx = SampleContext { row_index, today };
        let mut row = Vec::with_capacity(spec.columns.len());
        for column in &spec.columns {
            let value = sample(&column.sampler, ctx, rng);
            let value = if column.nullable {
                noise.apply(value, rng)
            } else {
                value
            };
            row.push(value);
        }
        rows.push(row);
    }
    GeneratedTable { spec, rows }
}
