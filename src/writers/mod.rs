pub mod heatmap_writer;
pub mod histogram_writer;
pub mod track_writer;

pub use heatmap_writer::{compose_overlay, greymap_from_rgb, HeatRange, HeatmapWriter};
pub use histogram_writer::HistogramWriter;
pub use track_writer::TrackWriter;
