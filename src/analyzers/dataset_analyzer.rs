use crate::models::{ParsedRecord, Timestamp};
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub total_records: usize,
    pub unique_cyclones: usize,
    pub records_with_radius: usize,
    pub pressure_range: Option<(i32, i32)>,
    pub time_range: Option<(Timestamp, Timestamp)>,
    pub geographic_bounds: Option<GeographicBounds>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeographicBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_long: f64,
    pub max_long: f64,
}

impl GeographicBounds {
    fn from_point(lat: f64, long: f64) -> Self {
        Self {
            min_lat: lat,
            max_lat: lat,
            min_long: long,
            max_long: long,
        }
    }

    fn include(&mut self, lat: f64, long: f64) {
        self.min_lat = self.min_lat.min(lat);
        self.max_lat = self.max_lat.max(lat);
        self.min_long = self.min_long.min(long);
        self.max_long = self.max_long.max(long);
    }
}

fn widen<T: Copy + Ord>(range: Option<(T, T)>, value: T) -> Option<(T, T)> {
    Some(match range {
        Some((low, high)) => (low.min(value), high.max(value)),
        None => (value, value),
    })
}

pub struct DatasetAnalyzer;

impl DatasetAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, records: &[ParsedRecord]) -> DatasetSummary {
        let mut unique_cyclones = HashSet::new();
        let mut records_with_radius = 0;
        let mut pressure_range = None;
        let mut time_range = None;
        let mut geographic_bounds: Option<GeographicBounds> = None;

        for record in records {
            if let Some(id) = record.id.as_deref() {
                unique_cyclones.insert(id);
            }
            if record.radius.is_some() {
                records_with_radius += 1;
            }
            if let Some(pressure) = record.central_pressure {
                pressure_range = widen(pressure_range, pressure);
            }
            if let Some(timestamp) = record.timestamp {
                time_range = widen(time_range, timestamp);
            }
            if let Some((lat, long)) = record.position() {
                match geographic_bounds.as_mut() {
                    Some(bounds) => bounds.include(lat, long),
                    None => geographic_bounds = Some(GeographicBounds::from_point(lat, long)),
                }
            }
        }

        DatasetSummary {
            total_records: records.len(),
            unique_cyclones: unique_cyclones.len(),
            records_with_radius,
            pressure_range,
            time_range,
            geographic_bounds,
        }
    }
}

impl Default for DatasetAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetSummary {
    pub fn summary(&self) -> String {
        let pressures = match self.pressure_range {
            Some((low, high)) => format!("{} to {}", low, high),
            None => "No measurements".to_string(),
        };

        let period = match self.time_range {
            Some((first, last)) => format!("{} to {}", first, last),
            None => "Unknown".to_string(),
        };

        let coverage = match self.geographic_bounds {
            Some(b) => format!(
                "{:.2}..{:.2} lat, {:.2}..{:.2} long",
                b.min_lat, b.max_lat, b.min_long, b.max_long
            ),
            None => "No positions".to_string(),
        };

        format!(
            "Records: {} total, {} with radius\n\
            Cyclones: {} distinct ids\n\
            Period: {}\n\
            Central Pressure: {}\n\
            Coverage: {}",
            self.total_records,
            self.records_with_radius,
            self.unique_cyclones,
            period,
            pressures,
            coverage
        )
    }
}
