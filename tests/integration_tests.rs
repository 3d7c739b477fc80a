use clap::Parser;
use cyclone_heatmap::analyzers::{build_tracks, DatasetAnalyzer, PressureDistribution};
use cyclone_heatmap::cli::{load_records, run, Cli};
use cyclone_heatmap::models::Timestamp;
use cyclone_heatmap::processors::DensityGridBuilder;
use cyclone_heatmap::utils::constants::{EARTH_RADIUS_KM, MAP_BOTTOM, MAP_LEFT, MAP_RIGHT, MAP_TOP};
use cyclone_heatmap::writers::{HeatmapWriter, HistogramWriter};
use image::{Rgb, RgbImage};
use pretty_assertions::assert_eq;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const HEADER: &str = "NAME,DISTURBANCE_ID,TM,TYPE,LAT,LON,CENTRAL_PRES,RADIUS,SPEED";

/// Latitude/longitude that lands exactly on grid cell (x, y)
fn position_for_cell(x: usize, y: usize) -> (f64, f64) {
    let lat = MAP_BOTTOM + (y as f64 / 49.0) * (MAP_TOP - MAP_BOTTOM);
    let long = MAP_LEFT + (x as f64 / 49.0) * (MAP_RIGHT - MAP_LEFT);
    (lat, long)
}

fn write_observations(dir: &Path) -> PathBuf {
    let path = dir.join("Cyclones.csv");
    let mut file = std::fs::File::create(&path).unwrap();

    let (lat, long) = position_for_cell(25, 25);
    let (far_lat, far_long) = position_for_cell(10, 40);
    let spread_radius = 2.0 * EARTH_RADIUS_KM;

    writeln!(file, "{}", HEADER).unwrap();
    writeln!(file, "LARRY,AU200607,2006-03-15 18:00,T,{},{},990,,33.0", lat, long).unwrap();
    writeln!(file, "LARRY,AU200607,2006-03-16 00:00,T,{},{},990,,35.0", lat, long).unwrap();
    writeln!(file, "LARRY,AU200607,2006-03-16 06:00,T,{},{},,,35.0", lat, long).unwrap(); // No pressure
    writeln!(file, "MONICA,AU200614,2006-04-20 12:00,T,{},{},1000,{},40.0", far_lat, far_long, spread_radius).unwrap();
    writeln!(file, "MONICA,AU200614,2006-04-20 18:00,T,,,995,,40.0").unwrap(); // No position

    path
}

fn write_base_map(dir: &Path) -> PathBuf {
    let path = dir.join("map.png");
    RgbImage::from_fn(120, 90, |x, _| Rgb([(x * 2) as u8, 60, 30]))
        .save(&path)
        .unwrap();
    path
}

#[test]
fn test_pipeline_end_to_end() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let csv_path = write_observations(dir.path());

    let records = load_records(&csv_path, true).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].timestamp, Some(Timestamp::new(2006, 3, 15, 18)));

    // Pressure distribution
    let distribution = PressureDistribution::from_records(&records).unwrap();
    assert_eq!(distribution.sorted(), vec![(990, 2), (1000, 1)]);

    // Density grid: two single hits at (25, 25) and one r=2 spread at (10, 40)
    let grid = DensityGridBuilder::new().build(&records).unwrap();
    assert_eq!(grid.get(25, 25), 2.0);
    assert_eq!(grid.get(10, 40), 4.0);
    assert_eq!(grid.get(11, 41), 1.0);
    assert_eq!(grid.get(9, 39), 1.0);
    assert_eq!(grid.total(), 10.0);

    // Heat map composite keeps the base map resolution
    let map_path = write_base_map(dir.path());
    let output_path = dir.path().join("heatmap.png");
    let range = HeatmapWriter::new()
        .write_heatmap(&grid, &map_path, &output_path)
        .unwrap();
    assert_eq!((range.min, range.max), (0.0, 1.0));

    let composite = image::open(&output_path).unwrap().to_rgb8();
    assert_eq!(composite.dimensions(), (120, 90));
    // Blue carries only the halved base map value, max(200, 60, 30) / 2
    assert_eq!(composite.get_pixel(100, 10)[2], 100);

    // Tracks and summary
    let track = build_tracks(&records).unwrap();
    assert_eq!(track.first().map(|p| p.name.as_str()), Some("LARRY"));
    assert_eq!(track.last().map(|p| p.name.as_str()), Some("MONICA"));

    let summary = DatasetAnalyzer::new().analyze(&records);
    assert_eq!(summary.unique_cyclones, 2);
    assert_eq!(summary.records_with_radius, 1);
    assert_eq!(summary.pressure_range, Some((990, 1000)));
}

#[test]
fn test_empty_histogram_has_no_output() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let csv_path = dir.path().join("empty.csv");
    std::fs::write(&csv_path, format!("{}\n", HEADER)).unwrap();

    let records = load_records(&csv_path, true).unwrap();
    assert!(records.is_empty());

    let distribution = PressureDistribution::from_records(&records).unwrap();
    let output_path = dir.path().join("histogram.png");
    let drawn = HistogramWriter::new()
        .write_histogram(&distribution, &output_path)
        .unwrap();

    assert!(!drawn);
    assert!(!output_path.exists());
}

#[test]
fn test_all_zero_grid_renders() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let csv_path = dir.path().join("outside.csv");
    std::fs::write(
        &csv_path,
        format!("{}\nFAR,XX1,2000-01-01 00:00,T,40.0,-70.0,1000,,10.0\n", HEADER),
    )
    .unwrap();

    let records = load_records(&csv_path, true).unwrap();
    let grid = DensityGridBuilder::new().build(&records).unwrap();
    assert_eq!(grid.total(), 0.0);

    let map_path = write_base_map(dir.path());
    let output_path = dir.path().join("heatmap.png");
    let range = HeatmapWriter::new()
        .write_heatmap(&grid, &map_path, &output_path)
        .unwrap();

    assert_eq!((range.min, range.max), (0.0, 0.0));
    assert!(output_path.exists());
}

#[test]
fn test_malformed_record_aborts_load() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let csv_path = dir.path().join("bad.csv");
    std::fs::write(
        &csv_path,
        format!("{}\nBAD,XX1,2000-01-01 00:00,T,-20.0,140.0,low,,10.0\n", HEADER),
    )
    .unwrap();

    assert!(load_records(&csv_path, true).is_err());
}

#[test]
fn test_cli_heatmap_command() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let csv_path = write_observations(dir.path());
    let map_path = write_base_map(dir.path());
    let output_path = dir.path().join("nested").join("heatmap.png");

    let args: Vec<OsString> = vec![
        "cyclone-heatmap".into(),
        "--quiet".into(),
        "heatmap".into(),
        "--input".into(),
        csv_path.into_os_string(),
        "--map".into(),
        map_path.into_os_string(),
        "--output-file".into(),
        output_path.clone().into_os_string(),
    ];
    let cli = Cli::try_parse_from(args).unwrap();

    run(cli).unwrap();
    assert!(output_path.exists());
}

#[test]
fn test_cli_runs_repeatedly_in_one_process() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let csv_path = write_observations(dir.path());

    for name in ["first.csv", "second.csv"] {
        let output_path = dir.path().join(name);
        let args: Vec<OsString> = vec![
            "cyclone-heatmap".into(),
            "--quiet".into(),
            "tracks".into(),
            "--input".into(),
            csv_path.clone().into_os_string(),
            "--output-file".into(),
            output_path.clone().into_os_string(),
        ];

        run(Cli::try_parse_from(args).unwrap()).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        // Header plus three track points
        assert_eq!(content.lines().count(), 4);
    }
}
