use crate::error::Result;
use crate::models::{ParsedRecord, TrackPoint};

/// Shape records into track points ordered by time, then position, speed and name
pub fn build_tracks(records: &[ParsedRecord]) -> Result<Vec<TrackPoint>> {
    let mut track = records
        .iter()
        .map(TrackPoint::from_record)
        .collect::<Result<Vec<_>>>()?;

    track.sort_by(TrackPoint::track_order);
    Ok(track)
}
