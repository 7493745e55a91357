pub mod listing;
pub mod aggregate;
pub mod csv_file;
pub mod sample;

use serde::{Serialize, Deserialize};

use crate::config::Config;
use listing::{Source, VehicleRecord};

/// One day's aggregated dataset. Persisted as-is under its date key and
/// never mutated afterward; `previous`/`diff` on the records are filled
/// in by the history store at save time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub date: String,
    pub time: String,
    pub vehicles: Vec<VehicleRecord>,
    /// Which source produced the data ("csv file", "sample data").
    pub source: String,
    /// Raw listing rows that went into the aggregation.
    #[serde(default)]
    pub total_listings: usize,
}

impl Snapshot {
    pub fn total_units(&self) -> u64 {
        self.vehicles.iter().map(|v| u64::from(v.total_units)).sum()
    }
}

pub struct CollectResult {
    pub snapshot: Snapshot,
    pub diagnostics: Vec<String>,
    pub duration_ms: Option<u128>,
}

/// Run one collection: pick a source, fall back to the sample dataset on
/// any failure, aggregate, and stamp the snapshot. Collection itself
/// never fails; a broken source shows up as a diagnostic and a
/// `source = "sample data"` tag on the result.
pub fn run(config: &Config) -> CollectResult {
    let start = std::time::Instant::now();
    let mut diagnostics = Vec::new();

    let source: Box<dyn Source> = if config.use_sample || config.input.is_none() {
        Box::new(sample::SampleSource)
    } else {
        Box::new(csv_file::CsvSource)
    };

    let (listings, source_tag) = if !source.available(config) {
        diagnostics.push(format!("{}: not available, using sample data", source.name()));
        (sample::listings(), sample::SampleSource.name())
    } else {
        match source.collect(config) {
            Ok(result) => {
                diagnostics.extend(result.diagnostics);
                (result.listings, source.name())
            }
            Err(e) => {
                diagnostics.push(format!("{}: {e}, using sample data", source.name()));
                (sample::listings(), sample::SampleSource.name())
            }
        }
    };

    let total_listings = listings.len();
    let vehicles = aggregate::aggregate(&listings);

    let now = chrono::Local::now();
    let snapshot = Snapshot {
        date: config
            .date
            .clone()
            .unwrap_or_else(|| now.format("%Y-%m-%d").to_string()),
        time: now.format("%H:%M:%S").to_string(),
        vehicles,
        source: source_tag.to_string(),
        total_listings,
    };

    CollectResult {
        snapshot,
        diagnostics,
        duration_ms: Some(start.elapsed().as_millis()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_run_uses_sample_data() {
        let config = Config::base(None);
        let result = run(&config);

        assert_eq!(result.snapshot.source, "sample data");
        assert!(!result.snapshot.vehicles.is_empty());
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn broken_input_falls_back_to_sample() {
        let mut config = Config::base(None);
        config.input = Some(std::path::PathBuf::from("/nonexistent/listings.csv"));

        let result = run(&config);

        assert_eq!(result.snapshot.source, "sample data");
        assert_eq!(result.diagnostics.len(), 1);
        assert!(!result.snapshot.vehicles.is_empty());
    }

    #[test]
    fn date_override_is_honored() {
        let mut config = Config::base(None);
        config.date = Some("2026-08-01".to_string());

        let result = run(&config);
        assert_eq!(result.snapshot.date, "2026-08-01");
    }
}
