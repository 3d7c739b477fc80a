use crate::utils::constants::{
    FIELD_CENTRAL_PRESSURE, FIELD_ID, FIELD_LAT, FIELD_LONG, FIELD_SPEED, FIELD_TIMESTAMP,
};

/// One observation row in canonical field order:
/// name, id, timestamp, (unused), lat, long, central pressure, radius, speed.
///
/// Fields beyond the end of a short row read as empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawRecord {
    fields: Vec<String>,
}

impl RawRecord {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    pub fn from_strs(fields: &[&str]) -> Self {
        Self::new(fields.iter().map(|s| s.to_string()).collect())
    }

    pub fn field(&self, index: usize) -> &str {
        self.fields.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Central pressure and wind speed are both present
    pub fn is_valid_record(&self) -> bool {
        !self.field(FIELD_CENTRAL_PRESSURE).is_empty() && !self.field(FIELD_SPEED).is_empty()
    }

    /// Id, timestamp and position are present and the record is valid
    pub fn is_loadable(&self) -> bool {
        !self.field(FIELD_ID).is_empty()
            && !self.field(FIELD_TIMESTAMP).is_empty()
            && !self.field(FIELD_LAT).is_empty()
            && !self.field(FIELD_LONG).is_empty()
            && self.is_valid_record()
    }
}

impl From<Vec<String>> for RawRecord {
    fn from(fields: Vec<String>) -> Self {
        Self::new(fields)
    }
}
