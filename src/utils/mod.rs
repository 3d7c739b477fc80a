pub mod constants;
pub mod coordinates;
pub mod filename;
pub mod progress;

pub use constants::*;
pub use coordinates::{convert_lat_long, BoundingBox};
pub use filename::{
    generate_default_heatmap_filename, generate_default_histogram_filename,
    generate_default_tracks_filename,
};
pub use progress::ProgressReporter;
