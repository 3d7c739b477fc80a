use crate::error::{ProcessingError, Result};
use crate::models::{ParsedRecord, RawRecord, Timestamp};
use crate::utils::constants::{
    FIELD_CENTRAL_PRESSURE, FIELD_ID, FIELD_LAT, FIELD_LONG, FIELD_NAME, FIELD_RADIUS,
    FIELD_SPEED, FIELD_TIMESTAMP,
};
use std::str::FromStr;
use tracing::debug;

/// Parse one row into typed fields, leaving out every field whose source is empty.
///
/// A malformed number or timestamp fails the whole record.
pub fn parse_record(record: &RawRecord) -> Result<ParsedRecord> {
    Ok(ParsedRecord {
        id: text_field(record, FIELD_ID),
        name: text_field(record, FIELD_NAME),
        timestamp: optional(record, FIELD_TIMESTAMP, Timestamp::parse)?,
        central_pressure: optional(record, FIELD_CENTRAL_PRESSURE, |v| {
            parse_number(v, "central pressure")
        })?,
        radius: optional(record, FIELD_RADIUS, |v| parse_number(v, "radius"))?,
        speed: optional(record, FIELD_SPEED, |v| parse_number(v, "speed"))?,
        lat: optional(record, FIELD_LAT, |v| parse_number(v, "latitude"))?,
        long: optional(record, FIELD_LONG, |v| parse_number(v, "longitude"))?,
    })
}

/// Parse every loaded row, stopping at the first malformed one
pub fn parse_records(records: &[RawRecord]) -> Result<Vec<ParsedRecord>> {
    let parsed = records
        .iter()
        .map(parse_record)
        .collect::<Result<Vec<_>>>()?;

    debug!(records = parsed.len(), "Parsed cyclone observations");
    Ok(parsed)
}

fn text_field(record: &RawRecord, index: usize) -> Option<String> {
    let value = record.field(index);
    (!value.is_empty()).then(|| value.to_string())
}

fn optional<T>(
    record: &RawRecord,
    index: usize,
    parse: impl FnOnce(&str) -> Result<T>,
) -> Result<Option<T>> {
    let value = record.field(index);
    if value.is_empty() {
        Ok(None)
    } else {
        parse(value).map(Some)
    }
}

fn parse_number<T: FromStr>(value: &str, field: &str) -> Result<T> {
    value.trim().parse::<T>().map_err(|_| {
        ProcessingError::InvalidFormat(format!("Invalid {}: '{}'", field, value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_full_record() {
        let raw = RawRecord::from_strs(&[
            "LARRY",
            "AU200607",
            "2006-03-15 18:00",
            "T",
            "-17.5",
            "147.2",
            "990",
            "120.5",
            "33.0",
        ]);

        let parsed = parse_record(&raw).unwrap();

        assert_eq!(
            parsed,
            ParsedRecord {
                id: Some("AU200607".to_string()),
                name: Some("LARRY".to_string()),
                timestamp: Some(Timestamp::new(2006, 3, 15, 18)),
                central_pressure: Some(990),
                radius: Some(120.5),
                speed: Some(33.0),
                lat: Some(-17.5),
                long: Some(147.2),
            }
        );
    }

    #[test]
    fn test_empty_fields_are_absent() {
        let raw = RawRecord::from_strs(&["", "AU1", "", "", "", "", "1002", "", "12.5"]);
        let parsed = parse_record(&raw).unwrap();

        assert_eq!(parsed.id.as_deref(), Some("AU1"));
        assert!(parsed.name.is_none());
        assert!(parsed.timestamp.is_none());
        assert!(parsed.radius.is_none());
        assert!(parsed.position().is_none());
        assert_eq!(parsed.central_pressure, Some(1002));
        assert_eq!(parsed.speed, Some(12.5));
    }

    #[test]
    fn test_integer_pressure_rejects_decimal() {
        let raw = RawRecord::from_strs(&["A", "AU1", "", "", "", "", "990.5", "", "12.5"]);
        assert!(matches!(
            parse_record(&raw),
            Err(ProcessingError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_malformed_values_fail() {
        let bad_lat = RawRecord::from_strs(&["A", "AU1", "", "", "north", "", "990", "", "12.5"]);
        assert!(parse_record(&bad_lat).is_err());

        let bad_time = RawRecord::from_strs(&["A", "AU1", "March", "", "", "", "990", "", "1"]);
        assert!(parse_record(&bad_time).is_err());
    }

    #[test]
    fn test_surrounding_whitespace_is_accepted() {
        let raw = RawRecord::from_strs(&["A", "AU1", "", "", " -12.5 ", "", " 990", "", "1 "]);
        let parsed = parse_record(&raw).unwrap();
        assert_eq!(parsed.lat, Some(-12.5));
        assert_eq!(parsed.central_pressure, Some(990));
        assert_eq!(parsed.speed, Some(1.0));
    }

    #[test]
    fn test_parse_records_stops_on_error() {
        let good = RawRecord::from_strs(&["A", "AU1", "", "", "", "", "990", "", "1"]);
        let bad = RawRecord::from_strs(&["A", "AU1", "", "", "", "", "x", "", "1"]);

        assert_eq!(parse_records(&[good.clone(), good.clone()]).unwrap().len(), 2);
        assert!(parse_records(&[good, bad]).is_err());
    }
}
