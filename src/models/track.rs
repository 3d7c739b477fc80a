use crate::error::{ProcessingError, Result};
use crate::models::ParsedRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A single fix along a cyclone's track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub lat: f64,
    pub long: f64,
    pub speed: f64,
    pub name: String,
}

impl TrackPoint {
    pub fn from_record(record: &ParsedRecord) -> Result<Self> {
        let missing = |field: &str| {
            ProcessingError::MissingData(format!(
                "Record {} has no {} for its track point",
                record.label(),
                field
            ))
        };

        let timestamp = record.timestamp.ok_or_else(|| missing("timestamp"))?;
        let (lat, long) = record.position().ok_or_else(|| missing("lat/long"))?;
        let speed = record.speed.ok_or_else(|| missing("speed"))?;
        let name = record.name.clone().ok_or_else(|| missing("name"))?;

        Ok(Self {
            year: timestamp.year,
            month: timestamp.month,
            day: timestamp.day,
            hour: timestamp.hour,
            lat,
            long,
            speed,
            name,
        })
    }

    /// Field-by-field ordering: time first, then position, speed and name
    pub fn track_order(&self, other: &Self) -> Ordering {
        (self.year, self.month, self.day, self.hour)
            .cmp(&(other.year, other.month, other.day, other.hour))
            .then_with(|| self.lat.total_cmp(&other.lat))
            .then_with(|| self.long.total_cmp(&other.long))
            .then_with(|| self.speed.total_cmp(&other.speed))
            .then_with(|| self.name.cmp(&other.name))
    }
}
