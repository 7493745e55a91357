//! Dated snapshot store.
//!
//! Layout under the history root:
//! - `index.json`: {dates, latest, total_records}
//! - `<date>/data_<HHMMSS>.json`: immutable copy of every save
//! - `<date>/latest.json`: newest save for that date
//!
//! Dates are `YYYY-MM-DD` keys kept sorted newest-first in the index.
//! Saving back-fills unit diffs against the nearest older date. All JSON
//! writes go through a temp file and rename, so a crash cannot leave a
//! torn `latest.json` or `index.json` behind.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Serialize, Deserialize};

use crate::collect::Snapshot;
use super::diff;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Index {
    /// All dates with at least one save, sorted descending.
    pub dates: Vec<String>,
    /// Most recently written date. Not necessarily the newest date: a
    /// backdated save takes this over, matching the historical behavior.
    pub latest: Option<String>,
    /// Count of saves ever made, across all dates.
    pub total_records: u64,
}

impl Index {
    fn empty() -> Self {
        Index {
            dates: Vec::new(),
            latest: None,
            total_records: 0,
        }
    }
}

/// Per-date line for the history listing.
#[derive(Debug, Clone, Serialize)]
pub struct DateSummary {
    pub date: String,
    pub time: String,
    pub total_vehicles: usize,
    pub total_units: u64,
}

/// Store handle. Open once per command, reuse across all operations.
pub struct HistoryStore {
    root: PathBuf,
    index: Index,
}

impl HistoryStore {
    /// Default root (~/.local/share/depwatch/history or platform equivalent)
    pub fn default_root() -> Result<PathBuf, Box<dyn std::error::Error>> {
        let data_dir = directories::ProjectDirs::from("", "", "depwatch")
            .ok_or("Could not determine data directory")?
            .data_dir()
            .to_path_buf();

        Ok(data_dir.join("history"))
    }

    pub fn open(root: impl Into<PathBuf>) -> Result<Self, Box<dyn std::error::Error>> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;

        let index_path = root.join("index.json");
        let index = if index_path.is_file() {
            serde_json::from_str(&std::fs::read_to_string(&index_path)?)?
        } else {
            let index = Index::empty();
            write_json(&index_path, &index)?;
            index
        };

        Ok(HistoryStore { root, index })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    /// Save a snapshot under its date key. Back-fills `previous`/`diff`
    /// against the nearest older date first, then writes the timestamped
    /// copy plus `latest.json` and updates the index. Returns the date.
    pub fn save(&mut self, snapshot: &mut Snapshot) -> Result<String, Box<dyn std::error::Error>> {
        let date = snapshot.date.clone();

        // a malformed key would corrupt the index ordering
        chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .map_err(|e| format!("invalid date key '{date}': {e}"))?;

        if let Some(prev_date) = self.nearest_older(&date) {
            if let Some(previous) = self.load(&prev_date)? {
                diff::backfill(snapshot, &previous);
            }
        }

        let date_dir = self.root.join(&date);
        std::fs::create_dir_all(&date_dir)?;

        let stamp = chrono::Local::now().format("%H%M%S").to_string();
        write_json(&date_dir.join(format!("data_{stamp}.json")), snapshot)?;
        write_json(&date_dir.join("latest.json"), snapshot)?;

        if !self.index.dates.iter().any(|d| d == &date) {
            self.index.dates.push(date.clone());
            self.index.dates.sort_by(|a, b| b.cmp(a));
        }
        self.index.latest = Some(date.clone());
        self.index.total_records += 1;
        self.save_index()?;

        Ok(date)
    }

    /// Load the snapshot for a date. Unknown dates are `None`.
    pub fn load(&self, date: &str) -> Result<Option<Snapshot>, Box<dyn std::error::Error>> {
        let path = self.root.join(date).join("latest.json");
        if !path.is_file() {
            return Ok(None);
        }

        Ok(Some(serde_json::from_str(&std::fs::read_to_string(path)?)?))
    }

    /// Load the most recently written snapshot.
    pub fn latest(&self) -> Result<Option<Snapshot>, Box<dyn std::error::Error>> {
        match &self.index.latest {
            Some(date) => self.load(date),
            None => Ok(None),
        }
    }

    /// All dates with data, newest first.
    pub fn dates(&self) -> &[String] {
        &self.index.dates
    }

    /// The date one step older than `date`, None at the end or for
    /// unknown dates.
    pub fn previous_date(&self, date: &str) -> Option<&str> {
        let idx = self.index.dates.iter().position(|d| d == date)?;
        self.index.dates.get(idx + 1).map(String::as_str)
    }

    /// The date one step newer than `date`, None at the end or for
    /// unknown dates.
    pub fn next_date(&self, date: &str) -> Option<&str> {
        let idx = self.index.dates.iter().position(|d| d == date)?;
        idx.checked_sub(1)
            .and_then(|i| self.index.dates.get(i))
            .map(String::as_str)
    }

    /// Per-date summaries for the newest `limit` dates. Dates whose
    /// folder has gone missing are skipped.
    pub fn summary(&self, limit: usize) -> Result<Vec<DateSummary>, Box<dyn std::error::Error>> {
        let mut summaries = Vec::new();

        for date in self.index.dates.iter().take(limit) {
            if let Some(snapshot) = self.load(date)? {
                summaries.push(DateSummary {
                    date: date.clone(),
                    time: snapshot.time.clone(),
                    total_vehicles: snapshot.vehicles.len(),
                    total_units: snapshot.total_units(),
                });
            }
        }

        Ok(summaries)
    }

    /// Delete date folders older than `now - retention` and drop them
    /// from the index. Returns the removed dates; with `dry_run` nothing
    /// is touched.
    pub fn prune(
        &mut self,
        retention: Duration,
        dry_run: bool,
    ) -> Result<Vec<String>, Box<dyn std::error::Error>> {
        let cutoff = (chrono::Local::now() - chrono::Duration::from_std(retention)?)
            .format("%Y-%m-%d")
            .to_string();

        let removed: Vec<String> = self
            .index
            .dates
            .iter()
            .filter(|d| d.as_str() < cutoff.as_str())
            .cloned()
            .collect();

        if dry_run || removed.is_empty() {
            return Ok(removed);
        }

        for date in &removed {
            let dir = self.root.join(date);
            if dir.is_dir() {
                std::fs::remove_dir_all(&dir)?;
            }
        }

        self.index.dates.retain(|d| d.as_str() >= cutoff.as_str());

        // latest may have been pruned away
        if let Some(latest) = &self.index.latest {
            if !self.index.dates.iter().any(|d| d == latest) {
                self.index.latest = self.index.dates.first().cloned();
            }
        }

        self.save_index()?;
        Ok(removed)
    }

    fn nearest_older(&self, date: &str) -> Option<String> {
        // dates are sorted descending, so the first strictly-older hit
        // is the immediate predecessor
        self.index
            .dates
            .iter()
            .find(|d| d.as_str() < date)
            .cloned()
    }

    fn save_index(&self) -> Result<(), Box<dyn std::error::Error>> {
        write_json(&self.root.join("index.json"), &self.index)
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), Box<dyn std::error::Error>> {
    let tmp = path.with_extension("tmp");
    std::fs::write(&tmp, serde_json::to_string_pretty(value)?)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}
