use crate::analyzers::{build_tracks, DatasetAnalyzer, PressureDistribution};
use crate::cli::args::{Cli, Commands};
use crate::config::Settings;
use crate::error::Result;
use crate::models::ParsedRecord;
use crate::processors::DensityGridBuilder;
use crate::readers::{parse_records, CycloneReader};
use crate::utils::filename::{
    generate_default_heatmap_filename, generate_default_histogram_filename,
    generate_default_tracks_filename,
};
use crate::utils::progress::ProgressReporter;
use crate::writers::{HeatmapWriter, HistogramWriter, TrackWriter};
use std::path::Path;
use tracing::debug;

/// Read, filter and parse an observations file
pub fn load_records(input: &Path, silent: bool) -> Result<Vec<ParsedRecord>> {
    let progress = ProgressReporter::new_spinner("Reading cyclone observations...", silent);

    let raw_records = CycloneReader::new().read_records(input, Some(&progress))?;

    progress.set_message("Parsing records...");
    let records = parse_records(&raw_records)?;

    progress.finish_with_message(&format!("Loaded {} records", records.len()));
    Ok(records)
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Execute one subcommand. Logging is installed by the caller.
pub fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!(?settings, "Loaded settings");

    let silent = cli.quiet;

    match cli.command {
        Commands::Histogram { input, output_file } => {
            println!("Input file: {}", input.display());

            let records = load_records(&input, silent)?;
            let distribution = PressureDistribution::from_records(&records)?;

            if distribution.is_empty() {
                println!("No records to plot");
                return Ok(());
            }

            let output_file = output_file.unwrap_or_else(generate_default_histogram_filename);
            ensure_parent_dir(&output_file)?;

            let writer =
                HistogramWriter::with_size(settings.histogram.width, settings.histogram.height);
            writer.write_histogram(&distribution, &output_file)?;

            println!(
                "Histogram of {} distinct pressures ({} records) written to {}",
                distribution.len(),
                distribution.total(),
                output_file.display()
            );
        }

        Commands::Heatmap {
            input,
            map,
            output_file,
        } => {
            println!("Input file: {}", input.display());
            println!("Base map: {}", map.display());

            let records = load_records(&input, silent)?;

            let builder = DensityGridBuilder::with_bounding_box(settings.bounding_box);
            let grid = builder.build(&records)?;

            let output_file = output_file.unwrap_or_else(generate_default_heatmap_filename);
            ensure_parent_dir(&output_file)?;

            let range = HeatmapWriter::new().write_heatmap(&grid, &map, &output_file)?;

            println!(
                "Accumulated {} occurrences over {} cells",
                grid.total(),
                grid.non_zero_cells()
            );
            println!("Heat range: {:.3} to {:.3}", range.min, range.max);
            println!("Heat map written to {}", output_file.display());
        }

        Commands::Tracks { input, output_file } => {
            println!("Input file: {}", input.display());

            let records = load_records(&input, silent)?;
            let track = build_tracks(&records)?;

            let output_file = output_file.unwrap_or_else(generate_default_tracks_filename);
            ensure_parent_dir(&output_file)?;

            let written = TrackWriter::new().write_tracks(&track, &output_file)?;
            println!("{} track points written to {}", written, output_file.display());
        }

        Commands::Summary { input, json } => {
            let records = load_records(&input, silent || json)?;
            let summary = DatasetAnalyzer::new().analyze(&records);

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("Observations: {}", input.display());
                println!("\n{}", summary.summary());
            }
        }
    }

    Ok(())
}
