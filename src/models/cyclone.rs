use crate::error::{ProcessingError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Observation time split into its fixed-width components
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
}

impl Timestamp {
    pub fn new(year: i32, month: u32, day: u32, hour: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    /// Slice a `YYYY-MM-DD HH...` string by position.
    ///
    /// Only the character positions are significant: year 0..4, month 5..7,
    /// day 8..10 and hour 11..13. Separators are not checked.
    pub fn parse(value: &str) -> Result<Self> {
        Ok(Self {
            year: parse_slice(value, 0..4, "year")?,
            month: parse_slice(value, 5..7, "month")?,
            day: parse_slice(value, 8..10, "day")?,
            hour: parse_slice(value, 11..13, "hour")?,
        })
    }
}

fn parse_slice<T: std::str::FromStr>(
    value: &str,
    range: std::ops::Range<usize>,
    component: &str,
) -> Result<T> {
    let part = value.get(range).ok_or_else(|| {
        ProcessingError::InvalidFormat(format!(
            "Timestamp '{}' too short for {} component",
            value, component
        ))
    })?;

    part.trim().parse::<T>().map_err(|_| {
        ProcessingError::InvalidFormat(format!(
            "Invalid {} '{}' in timestamp '{}'",
            component, part, value
        ))
    })
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:00",
            self.year, self.month, self.day, self.hour
        )
    }
}

/// A parsed observation. A field is `Some` only when its source value was non-empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub timestamp: Option<Timestamp>,
    pub central_pressure: Option<i32>,
    /// Kilometres
    pub radius: Option<f64>,
    pub speed: Option<f64>,
    pub lat: Option<f64>,
    pub long: Option<f64>,
}

impl ParsedRecord {
    pub fn label(&self) -> &str {
        self.id
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("<unnamed>")
    }

    pub fn position(&self) -> Option<(f64, f64)> {
        Some((self.lat?, self.long?))
    }

    pub fn require_position(&self) -> Result<(f64, f64)> {
        self.position().ok_or_else(|| {
            ProcessingError::MissingData(format!("Record {} has no lat/long", self.label()))
        })
    }

    pub fn require_central_pressure(&self) -> Result<i32> {
        self.central_pressure.ok_or_else(|| {
            ProcessingError::MissingData(format!(
                "Record {} has no central pressure",
                self.label()
            ))
        })
    }
}
