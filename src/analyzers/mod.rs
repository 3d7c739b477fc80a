pub mod dataset_analyzer;
pub mod pressure_distribution;
pub mod tracks;

pub use dataset_analyzer::{DatasetAnalyzer, DatasetSummary, GeographicBounds};
pub use pressure_distribution::PressureDistribution;
pub use tracks::build_tracks;
