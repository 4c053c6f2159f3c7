//! Integration test: chart files on disk.

use kislev_io::{Bar, BarChart, ChartConfig, IoError, write_svg};

fn chart() -> BarChart {
    BarChart::new(vec![
        Bar::new("Sunday", 2).with_tick("Sunday"),
        Bar::new("Monday", 4).with_tick("Monday"),
    ])
}

#[test]
fn writes_svg_into_new_directory() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("charts").join("hanukkah_dows.svg");

    write_svg(&path, &chart()).expect("write succeeds");

    let text = std::fs::read_to_string(&path).expect("read back");
    assert!(text.starts_with("<svg"));
    assert!(text.contains(">Monday</text>"));
}

#[test]
fn overwrites_existing_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("chart.svg");
    std::fs::write(&path, "old").expect("seed file");

    write_svg(&path, &chart()).expect("write succeeds");
    let text = std::fs::read_to_string(&path).expect("read back");
    assert_ne!(text, "old");
}

#[test]
fn invalid_layout_writes_nothing() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("chart.svg");
    let bad = chart().with_config(ChartConfig::default().with_size(10.0, 10.0));

    let err = write_svg(&path, &bad).unwrap_err();
    assert!(
        matches!(err, IoError::Validation { .. }),
        "expected Validation error, got {err:?}",
    );
    assert!(!path.exists());
}
