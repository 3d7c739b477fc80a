use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cyclone-heatmap")]
#[command(about = "Tropical cyclone pressure histograms and occurrence heat maps")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Hide progress output")]
    pub quiet: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(long, global = true, help = "Settings file (bounding box, chart size)")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Plot the frequency of each central pressure value
    Histogram {
        #[arg(short, long, help = "Cyclone observations CSV file")]
        input: PathBuf,

        #[arg(
            short,
            long,
            help = "Output PNG file path [default: output/pressure-histogram-{YYMMDD}.png]"
        )]
        output_file: Option<PathBuf>,
    },

    /// Overlay cyclone occurrence density on a base map image
    Heatmap {
        #[arg(short, long, help = "Cyclone observations CSV file")]
        input: PathBuf,

        #[arg(short, long, help = "Base map image covering the bounding box")]
        map: PathBuf,

        #[arg(
            short,
            long,
            help = "Output PNG file path [default: output/cyclone-heatmap-{YYMMDD}.png]"
        )]
        output_file: Option<PathBuf>,
    },

    /// Export time-ordered track points as CSV
    Tracks {
        #[arg(short, long, help = "Cyclone observations CSV file")]
        input: PathBuf,

        #[arg(
            short,
            long,
            help = "Output CSV file path [default: output/cyclone-tracks-{YYMMDD}.csv]"
        )]
        output_file: Option<PathBuf>,
    },

    /// Summarise an observations file
    Summary {
        #[arg(short, long, help = "Cyclone observations CSV file")]
        input: PathBuf,

        #[arg(long, default_value = "false", help = "Print the summary as JSON")]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_heatmap_command() {
        let cli = Cli::try_parse_from([
            "cyclone-heatmap",
            "--verbose",
            "heatmap",
            "--input",
            "Cyclones.csv",
            "--map",
            "Australia_Map.jpg",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Heatmap {
                input,
                map,
                output_file,
            } => {
                assert_eq!(input, PathBuf::from("Cyclones.csv"));
                assert_eq!(map, PathBuf::from("Australia_Map.jpg"));
                assert!(output_file.is_none());
            }
            _ => panic!("expected heatmap command"),
        }
    }
}
