//! End-to-end: load a spreadsheet file, build the inventory table, and run
//! every query the presentation layer consumes.

use std::io::Write;

use medstock::{
    analyze_changes, current_count, load_file, select_column, ChangeReport, InventoryTable,
    LoadConfig, RowStats, SnapshotConfig, Trend,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn write_sample_csv() -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create temp file");

    // Title row above the headers, a non-date Notes column, a blank cell,
    // and a duplicate drug row.
    writeln!(file, "Chemo Med Inventory,,,,").unwrap();
    writeln!(
        file,
        "Drug,2024-01-01 00:00:00,2024-01-08 00:00:00,2024-01-15 00:00:00,Notes"
    )
    .unwrap();
    writeln!(file, "Cisplatin,10,12,15,reorder soon").unwrap();
    writeln!(file, "Paclitaxel,8,,6,").unwrap();
    writeln!(file, "Vinblastine,5,5,5,").unwrap();
    writeln!(file, "Cisplatin,11,12,15,corrected entry").unwrap();
    file.flush().unwrap();
    file
}

fn load_sample() -> InventoryTable {
    init_tracing();
    let file = write_sample_csv();
    let raw = load_file(file.path(), &LoadConfig::default()).expect("load csv");
    InventoryTable::build(&raw).expect("build table")
}

#[test]
fn columns_keep_only_parseable_date_headers() {
    let table = load_sample();

    let labels: Vec<String> = table.columns().iter().map(|d| d.to_string()).collect();
    assert_eq!(labels, vec!["2024-01-01", "2024-01-08", "2024-01-15"]);
}

#[test]
fn duplicate_drug_rows_last_write_wins() {
    let table = load_sample();

    assert_eq!(
        table.drugs(),
        &[
            "Cisplatin".to_string(),
            "Paclitaxel".to_string(),
            "Vinblastine".to_string()
        ]
    );
    assert_eq!(
        table.row("Cisplatin").unwrap(),
        &[Some(11.0), Some(12.0), Some(15.0)]
    );
}

#[test]
fn current_count_reads_the_configured_column() {
    let table = load_sample();

    let snap = current_count(&table, &SnapshotConfig::default()).expect("snapshot");
    assert_eq!(snap.date.to_string(), "2024-01-08");
    assert_eq!(
        snap.counts,
        vec![
            ("Cisplatin".to_string(), Some(12.0)),
            ("Paclitaxel".to_string(), None),
            ("Vinblastine".to_string(), Some(5.0)),
        ]
    );

    // Out-of-range selection is unavailable, not an error.
    assert!(select_column(&table, 3).is_none());
}

#[test]
fn statistics_panel_values() {
    let table = load_sample();

    let stats = RowStats::compute(table.row("Cisplatin").unwrap()).expect("stats");
    assert_eq!(stats.count, 3);
    assert_eq!(stats.mean, 12.67);
    assert_eq!(stats.max, 15.0);
    assert_eq!(stats.min, 11.0);

    // Missing cells are excluded, not counted as zero.
    let stats = RowStats::compute(table.row("Paclitaxel").unwrap()).expect("stats");
    assert_eq!(stats.count, 2);
    assert_eq!(stats.mean, 7.0);
}

#[test]
fn change_analysis_per_drug() {
    let table = load_sample();

    let report = analyze_changes(table.row("Cisplatin").unwrap());
    let stats = report.stats.as_ref().expect("defined changes");
    assert_eq!(report.changes, vec![Some(1.0), Some(3.0)]);
    assert_eq!(stats.mean, 2.0);
    assert_eq!(stats.trend, Trend::Increasing);

    let report = analyze_changes(table.row("Vinblastine").unwrap());
    assert_eq!(report.stats.as_ref().unwrap().trend, Trend::Stable);

    // Paclitaxel's gap leaves no consecutive pair defined around it.
    let report = analyze_changes(table.row("Paclitaxel").unwrap());
    assert_eq!(report.changes, vec![None, None]);
    assert!(report.is_insufficient());
}

#[test]
fn boundary_types_serialize_for_the_display_layer() {
    let table = load_sample();

    let report = analyze_changes(table.row("Cisplatin").unwrap());
    let json = serde_json::to_string(&report).expect("serialize report");
    let back: ChangeReport = serde_json::from_str(&json).expect("deserialize report");
    assert_eq!(back.changes, report.changes);
    assert_eq!(back.stats.unwrap().trend, Trend::Increasing);

    let json = serde_json::to_string(&table).expect("serialize table");
    let back: InventoryTable = serde_json::from_str(&json).expect("deserialize table");
    assert_eq!(back.drugs(), table.drugs());
    assert_eq!(back.columns(), table.columns());
}
