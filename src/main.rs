use clap::Parser;
use cyclone_heatmap::cli::logging::init_logging;
use cyclone_heatmap::cli::{run, Cli};
use cyclone_heatmap::error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_file.as_deref())?;
    run(cli)
}
