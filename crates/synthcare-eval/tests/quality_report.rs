use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use synthcare_core::{GeneratedTable, GeneratorConfig};
use synthcare_eval::{build_quality_report, collect_null_summary, write_quality_report_csv};
use synthcare_generate::{GenerateOptions, GenerationEngine};

fn generate_core_tables() -> Vec<GeneratedTable> {
    let config = GeneratorConfig {
        patients: 80,
        providers: 15,
        primary_care_visits: 90,
        emergency_visits: 40,
        hospitalizations: 30,
        referrals: 50,
        seed: Some(11),
        ..GeneratorConfig::default()
    };
    let engine = GenerationEngine::new(GenerateOptions {
        out_dir: temp_dir("tables"),
        config,
    });
    let (tables, _) = engine.run_core().expect("run core driver");
    tables
}

fn temp_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("synthcare_eval_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

#[test]
fn report_has_one_row_per_core_table_in_order() {
    let tables = generate_core_tables();
    let report = build_quality_report(&tables);

    let names: Vec<&str> = report
        .tables
        .iter()
        .map(|summary| summary.table.as_str())
        .collect();
    assert_eq!(
        names,
        [
            "Patients",
            "Providers",
            "PrimaryCareVisits",
            "EmergencyVisits",
            "Hospitalizations",
            "Referrals"
        ]
    );
}

#[test]
fn null_counts_match_an_independent_recount() {
    let tables = generate_core_tables();

    for generated in &tables {
        let summary = collect_null_summary(generated);
        assert_eq!(summary.total_rows, generated.rows.len() as u64);

        let recount: u64 = generated
            .rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.is_null())
            .count() as u64;
        let reported: u64 = summary.null_values.values().sum();
        assert_eq!(reported, recount, "{} null totals", generated.name());

        for (column, nulls) in &summary.null_values {
            let percentage = summary.percentage_null[column];
            let expected = *nulls as f64 / summary.total_rows as f64 * 100.0;
            assert!(
                (percentage - expected).abs() < 1e-9,
                "{}.{column}: percentage mismatch",
                generated.name()
            );
        }

        let key = generated.spec.columns[0].name;
        assert_eq!(summary.null_values[key], 0, "{} key nulled", generated.name());
    }
}

#[test]
fn report_csv_has_json_map_cells() {
    let tables = generate_core_tables();
    let report = build_quality_report(&tables);

    let path = temp_dir("report").join("QualityReport.csv");
    write_quality_report_csv(&path, &report).expect("write report");

    let mut reader = csv::Reader::from_path(&path).expect("open report");
    let headers = reader.headers().expect("headers").clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        ["TableName", "TotalRows", "NullValues", "PercentageNull"]
    );

    let records: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .expect("read records");
    assert_eq!(records.len(), 6);

    for (record, generated) in records.iter().zip(&tables) {
        assert_eq!(&record[0], generated.name());
        assert_eq!(record[1].parse::<u64>().expect("row count"), generated.rows.len() as u64);

        let null_values: serde_json::Value =
            serde_json::from_str(&record[2]).expect("NullValues cell is JSON");
        let columns: BTreeSet<&str> = generated.spec.header().into_iter().collect();
        let keys: BTreeSet<&str> = null_values
            .as_object()
            .expect("JSON object")
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, columns, "{} report columns", generated.name());

        let percentages: serde_json::Value =
            serde_json::from_str(&record[3]).expect("PercentageNull cell is JSON");
        assert!(percentages.is_object());
    }
}
