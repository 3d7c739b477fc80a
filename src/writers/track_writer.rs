use crate::error::Result;
use crate::models::TrackPoint;
use std::path::Path;
use tracing::info;

pub struct TrackWriter;

impl TrackWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write track points as CSV with a header row
    pub fn write_tracks(&self, track: &[TrackPoint], output_path: &Path) -> Result<usize> {
        let mut writer = csv::Writer::from_path(output_path)?;
        for point in track {
            writer.serialize(point)?;
        }
        writer.flush()?;

        info!(output = %output_path.display(), points = track.len(), "Wrote cyclone tracks");
        Ok(track.len())
    }
}

impl Default for TrackWriter {
    fn default() -> Self {
        Self::new()
    }
}
