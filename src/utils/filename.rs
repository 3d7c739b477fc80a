use crate::utils::constants::DEFAULT_OUTPUT_DIR;
use chrono::{Datelike, Local};
use std::path::PathBuf;

fn dated_output_path(stem: &str, extension: &str) -> PathBuf {
    let now = Local::now();
    let year = now.year() % 100; // Get last 2 digits of year
    let month = now.month();
    let day = now.day();

    let filename = format!("{}-{:02}{:02}{:02}.{}", stem, year, month, day, extension);
    PathBuf::from(DEFAULT_OUTPUT_DIR).join(filename)
}

/// Generate default heat map filename with format: cyclone-heatmap-{YYMMDD}.png
pub fn generate_default_heatmap_filename() -> PathBuf {
    dated_output_path("cyclone-heatmap", "png")
}

/// Generate default histogram filename with format: pressure-histogram-{YYMMDD}.png
pub fn generate_default_histogram_filename() -> PathBuf {
    dated_output_path("pressure-histogram", "png")
}

/// Generate default track filename with format: cyclone-tracks-{YYMMDD}.csv
pub fn generate_default_tracks_filename() -> PathBuf {
    dated_output_path("cyclone-tracks", "csv")
}
