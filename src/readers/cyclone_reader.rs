use crate::error::Result;
use crate::models::RawRecord;
use crate::utils::constants::{
    FIELD_CENTRAL_PRESSURE, FIELD_ID, FIELD_LAT, FIELD_LONG, FIELD_NAME, FIELD_RADIUS,
    FIELD_SPEED, FIELD_TIMESTAMP, RECORD_WIDTH,
};
use crate::utils::progress::ProgressReporter;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info};

/// Header names recognised for each canonical field, compared after
/// lower-casing and replacing underscores with spaces
const COLUMN_ALIASES: [(usize, &[&str]); 8] = [
    (FIELD_NAME, &["name", "cyclone name", "storm name"]),
    (FIELD_ID, &["id", "disturbance id", "storm id"]),
    (FIELD_TIMESTAMP, &["timestamp", "time", "datetime", "tm"]),
    (FIELD_LAT, &["lat", "latitude"]),
    (FIELD_LONG, &["long", "lon", "longitude"]),
    (
        FIELD_CENTRAL_PRESSURE,
        &["central pressure", "central pres", "pressure"],
    ),
    (FIELD_RADIUS, &["radius", "rmax"]),
    (
        FIELD_SPEED,
        &["speed", "wind speed", "max wind spd", "max wind speed"],
    ),
];

/// Where each canonical field is found in a source row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    slots: [Option<usize>; RECORD_WIDTH],
}

impl ColumnLayout {
    /// Fixed positional layout: name, id, timestamp, (unused), lat, long,
    /// central pressure, radius, speed
    pub fn positional() -> Self {
        let mut slots = [None; RECORD_WIDTH];
        for (index, slot) in slots.iter_mut().enumerate() {
            *slot = Some(index);
        }
        Self { slots }
    }

    /// Resolve every canonical field by header name.
    ///
    /// Returns `None` unless all of them are found.
    pub fn from_header(header: &StringRecord) -> Option<Self> {
        let normalized: Vec<String> = header
            .iter()
            .map(|h| h.trim().to_lowercase().replace('_', " "))
            .collect();

        let mut slots = [None; RECORD_WIDTH];
        for (field, aliases) in COLUMN_ALIASES {
            let column = normalized
                .iter()
                .position(|name| aliases.contains(&name.as_str()))?;
            slots[field] = Some(column);
        }

        Some(Self { slots })
    }

    /// Header-keyed layout when the header names every field, positional otherwise
    pub fn detect(header: &StringRecord) -> Self {
        match Self::from_header(header) {
            Some(layout) => {
                debug!(?layout, "Resolved columns from header");
                layout
            }
            None => {
                debug!("Header not recognised, using positional columns");
                Self::positional()
            }
        }
    }

    /// Reorder a source row into canonical field order
    pub fn project(&self, row: &StringRecord) -> RawRecord {
        self.slots
            .iter()
            .map(|slot| {
                slot.and_then(|column| row.get(column))
                    .unwrap_or("")
                    .to_string()
            })
            .collect::<Vec<_>>()
            .into()
    }
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::positional()
    }
}

pub struct CycloneReader {
    header_lookup: bool,
}

impl CycloneReader {
    pub fn new() -> Self {
        Self {
            header_lookup: true,
        }
    }

    pub fn with_header_lookup(header_lookup: bool) -> Self {
        Self { header_lookup }
    }

    /// Read observation rows, discarding the header and any row lacking an
    /// id, timestamp, position, central pressure or wind speed.
    pub fn read_records(
        &self,
        path: &Path,
        progress: Option<&ProgressReporter>,
    ) -> Result<Vec<RawRecord>> {
        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(BufReader::new(file));

        let layout = if self.header_lookup {
            ColumnLayout::detect(reader.headers()?)
        } else {
            ColumnLayout::positional()
        };

        let mut records = Vec::new();
        let mut total_rows = 0usize;

        for row_result in reader.records() {
            let row = row_result?;
            total_rows += 1;

            let record = layout.project(&row);
            if record.is_loadable() {
                records.push(record);
            }

            if let Some(progress) = progress {
                progress.increment(1);
            }
        }

        info!(
            path = %path.display(),
            total_rows,
            kept = records.len(),
            "Read cyclone observations"
        );

        Ok(records)
    }
}

impl Default for CycloneReader {
    fn default() -> Self {
        Self::new()
    }
}
