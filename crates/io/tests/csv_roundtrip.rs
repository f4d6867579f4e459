use chrono::{DateTime, TimeZone, Utc};

use naiad_fdc::{build_fdc, build_monthly_fdc, MonthlySfdc};
use naiad_io::{
    read_flow_table, read_monthly_sfdc, read_time_series, write_fdc, write_flow_table,
    write_monthly_fdc, write_monthly_sfdc, write_time_series,
};
use naiad_series::{FlowTable, TimeSeries};

fn ts(y: i32, mo: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, 12, 0, 0).unwrap()
}

// ---------------------------------------------------------------------------
// 1. time_series_round_trip
// ---------------------------------------------------------------------------
#[test]
fn time_series_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flows.csv");

    let series = TimeSeries::new(
        vec![ts(2020, 1, 1), ts(2020, 1, 2), ts(2020, 2, 1)],
        vec![1.5, f64::NAN, 3.25],
        "discharge",
    )
    .unwrap();

    write_time_series(&path, &series).expect("write should succeed");
    let back = read_time_series(&path).expect("read should succeed");

    assert_eq!(back.label(), "discharge");
    assert_eq!(back.timestamps(), series.timestamps());
    assert_eq!(back.values()[0], 1.5);
    assert!(back.values()[1].is_nan(), "NaN must round-trip as missing");
    assert_eq!(back.values()[2], 3.25);
}

// ---------------------------------------------------------------------------
// 2. flow_table_round_trip
// ---------------------------------------------------------------------------
#[test]
fn flow_table_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("forecast.csv");

    let table = FlowTable::new(
        vec![ts(2020, 6, 1), ts(2020, 6, 2)],
        vec!["ensemble_01".to_string(), "ensemble_02".to_string()],
        vec![vec![1.0, 2.0], vec![3.5, f64::NAN]],
    )
    .unwrap();

    write_flow_table(&path, &table).expect("write should succeed");
    let back = read_flow_table(&path).expect("read should succeed");

    assert_eq!(back.column_names(), table.column_names());
    assert_eq!(back.timestamps(), table.timestamps());
    assert_eq!(back.column("ensemble_01").unwrap(), &[1.0, 2.0]);
    let col = back.column("ensemble_02").unwrap();
    assert_eq!(col[0], 3.5);
    assert!(col[1].is_nan());
}

// ---------------------------------------------------------------------------
// 3. monthly_sfdc_round_trip
// ---------------------------------------------------------------------------
#[test]
fn monthly_sfdc_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sfdc.csv");

    let table = MonthlySfdc::from_rows(&[
        (1, 0.0, 1.1),
        (1, 50.0, 1.2),
        (1, 100.0, 1.3),
        (7, 0.0, 0.8),
        (7, 100.0, 0.7),
    ])
    .unwrap();

    write_monthly_sfdc(&path, &table).expect("write should succeed");
    let back = read_monthly_sfdc(&path).expect("read should succeed");

    assert_eq!(back.months(), vec![1, 7]);
    let jan: Vec<_> = back.curve(1).unwrap().iter().collect();
    assert_eq!(jan, vec![(0.0, 1.1), (50.0, 1.2), (100.0, 1.3)]);
}

// ---------------------------------------------------------------------------
// 4. fdc_files_written_with_expected_headers
// ---------------------------------------------------------------------------
#[test]
fn fdc_files_written_with_expected_headers() {
    let dir = tempfile::tempdir().unwrap();

    let sample: Vec<f64> = (1..=100).map(|i| i as f64).collect();
    let fdc = build_fdc(&sample, 11, "Q").unwrap();
    let fdc_path = dir.path().join("fdc.csv");
    write_fdc(&fdc_path, &fdc).expect("write should succeed");

    let content = std::fs::read_to_string(&fdc_path).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("exceedance_probability,Q"));
    assert_eq!(lines.count(), 11, "one row per curve step");

    let series = TimeSeries::new(
        vec![ts(2020, 1, 1), ts(2020, 1, 2), ts(2020, 2, 1)],
        vec![1.0, 2.0, 3.0],
        "Q",
    )
    .unwrap();
    let monthly = build_monthly_fdc(&series, 5, "Q").unwrap();
    let monthly_path = dir.path().join("monthly_fdc.csv");
    write_monthly_fdc(&monthly_path, &monthly).expect("write should succeed");

    let content = std::fs::read_to_string(&monthly_path).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("month,exceedance_probability,Q"));
    assert_eq!(lines.count(), 10, "five rows for each of two months");
}
