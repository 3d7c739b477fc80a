use crate::error::Result;
use crate::models::ParsedRecord;
use std::collections::HashMap;

/// Number of observations per distinct central pressure value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PressureDistribution {
    counts: HashMap<i32, usize>,
}

impl PressureDistribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count records by central pressure. Every record must carry one.
    pub fn from_records(records: &[ParsedRecord]) -> Result<Self> {
        let mut distribution = Self::new();
        for record in records {
            distribution.add(record.require_central_pressure()?);
        }
        Ok(distribution)
    }

    pub fn add(&mut self, central_pressure: i32) {
        *self.counts.entry(central_pressure).or_insert(0) += 1;
    }

    pub fn count(&self, central_pressure: i32) -> usize {
        self.counts.get(&central_pressure).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// (pressure, count) pairs ordered by pressure ascending
    pub fn sorted(&self) -> Vec<(i32, usize)> {
        let mut pairs: Vec<(i32, usize)> = self.counts.iter().map(|(&p, &c)| (p, c)).collect();
        pairs.sort_unstable_by_key(|&(pressure, _)| pressure);
        pairs
    }
}

impl FromIterator<i32> for PressureDistribution {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut distribution = Self::new();
        for pressure in iter {
            distribution.add(pressure);
        }
        distribution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProcessingError;
    use pretty_assertions::assert_eq;

    fn record(pressure: Option<i32>) -> ParsedRecord {
        ParsedRecord {
            central_pressure: pressure,
            speed: Some(10.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_counts_per_pressure() {
        let records = vec![record(Some(990)), record(Some(990)), record(Some(1000))];
        let distribution = PressureDistribution::from_records(&records).unwrap();

        assert_eq!(distribution.sorted(), vec![(990, 2), (1000, 1)]);
        assert_eq!(distribution.count(990), 2);
        assert_eq!(distribution.len(), 2);
        assert_eq!(distribution.total(), 3);
        assert_eq!(distribution.count(985), 0);
    }

    #[test]
    fn test_sorted_ascending() {
        let distribution: PressureDistribution = [1005, 960, 990, 960].into_iter().collect();
        assert_eq!(distribution.sorted(), vec![(960, 2), (990, 1), (1005, 1)]);
    }

    #[test]
    fn test_empty_input() {
        let distribution = PressureDistribution::from_records(&[]).unwrap();
        assert!(distribution.is_empty());
        assert!(distribution.sorted().is_empty());
    }

    #[test]
    fn test_missing_pressure_is_an_error() {
        let records = vec![record(Some(990)), record(None)];
        assert!(matches!(
            PressureDistribution::from_records(&records),
            Err(ProcessingError::MissingData(_))
        ));
    }
}
