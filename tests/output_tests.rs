use gas_sweep::aggregator::series::MethodSeries;
use gas_sweep::output::{read_records, read_report, render_plot, write_records, write_report, PlotStyle};
use gas_sweep::parser::schema::{GasRecord, MethodStats, SweepReport};
use pretty_assertions::assert_eq;

fn record(method: &str, size: u64, avg_gas: u64) -> GasRecord {
    GasRecord {
        method: method.to_string(),
        size,
        avg_gas,
    }
}

fn sample_series() -> Vec<MethodSeries> {
    vec![
        MethodSeries {
            method: "commitBatch".to_string(),
            points: vec![(100, 41203), (200, 62044), (300, 98452)],
        },
        MethodSeries {
            method: "submitProof".to_string(),
            points: vec![(100, 9901), (200, 10458), (300, 12044)],
        },
    ]
}

#[test]
fn test_csv_round_trip_preserves_rows_and_types() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("gas_results.csv");

    let records = vec![
        record("commitBatch", 100, 41203),
        record("submitProof", 100, 9901),
        record("commitBatch", 200, 62044),
    ];

    write_records(&records, &path).unwrap();
    let loaded = read_records(&path).unwrap();

    assert_eq!(loaded, records);
}

#[test]
fn test_csv_has_fixed_header() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("gas_results.csv");

    write_records(&[record("mint", 100, 52000)], &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("method,size,avg_gas"));
    assert_eq!(lines.next(), Some("mint,100,52000"));
}

#[test]
fn test_report_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("sweep_report.json");

    let report = SweepReport {
        version: "1.0.0".to_string(),
        contract: "NMFT".to_string(),
        min_size: 100,
        max_size: 300,
        step: 100,
        record_count: 6,
        methods: vec![MethodStats {
            method: "commitBatch".to_string(),
            samples: 3,
            min_gas: 41203,
            max_gas: 98452,
            mean_gas: 67233,
            growth_factor: 2.389,
        }],
        generated_at: "2024-06-01T12:00:00+00:00".to_string(),
    };

    write_report(&report, &path).unwrap();
    let loaded = read_report(&path).unwrap();

    assert_eq!(loaded.version, "1.0.0");
    assert_eq!(loaded.min_size, 100);
    assert_eq!(loaded.max_size, 300);
    assert_eq!(loaded.methods[0].method, "commitBatch");
    assert_eq!(loaded.methods[0].growth_factor, 2.389);
}

#[test]
fn test_render_png_chart() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("gas_usage_plot.png");

    render_plot(&sample_series(), &path, PlotStyle::Png).unwrap();

    assert!(path.exists());
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}

#[test]
fn test_render_svg_chart() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("gas_usage_plot.svg");

    render_plot(&sample_series(), &path, PlotStyle::Svg).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("<svg"));
}

#[test]
fn test_render_single_point_sweep() {
    // A min == max sweep has one x value per method; must still render
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("single.png");

    let series = vec![MethodSeries {
        method: "mint".to_string(),
        points: vec![(500, 52000)],
    }];

    render_plot(&series, &path, PlotStyle::Png).unwrap();
    assert!(path.exists());
}

#[test]
fn test_writers_reject_directory_target() {
    let temp_dir = tempfile::tempdir().unwrap();

    assert!(write_records(&[record("mint", 100, 1)], temp_dir.path()).is_err());
    assert!(render_plot(&sample_series(), temp_dir.path(), PlotStyle::Png).is_err());
}
