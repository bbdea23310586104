//! Where a day's task records come from.
//!
//! The partition builder never touches storage. It is handed the intervals
//! an `IntervalStore` returns for a day key.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DayPieError, DayPieResult};
use crate::interval::{DayKey, Interval, TaskRecord};

/// Supplies task records grouped by day key.
pub trait IntervalStore {
    /// Records for `day` in insertion order. Unknown days have no records.
    fn records_for(&self, day: &DayKey) -> DayPieResult<Vec<TaskRecord>>;

    /// Every day key with at least one record, in key order.
    fn day_keys(&self) -> DayPieResult<Vec<DayKey>>;

    /// Records for `day`, decoded to minute offsets.
    ///
    /// Fails on the first record whose time text does not decode.
    fn intervals_for(&self, day: &DayKey) -> DayPieResult<Vec<Interval>> {
        self.records_for(day)?
            .iter()
            .map(TaskRecord::to_interval)
            .collect()
    }
}

/// In-memory store, used directly as a fixture and as the body of
/// `ScheduleFile`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryStore {
    #[serde(default)]
    days: BTreeMap<DayKey, Vec<TaskRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert for fixtures.
    pub fn with_day(mut self, day: impl Into<DayKey>, records: Vec<TaskRecord>) -> Self {
        let day = day.into();
        for record in records {
            self.add(day.clone(), record);
        }
        self
    }

    pub fn add(&mut self, day: DayKey, record: TaskRecord) {
        self.days.entry(day).or_default().push(record);
    }

    /// Remove every record for `day`, returning how many there were.
    pub fn clear(&mut self, day: &DayKey) -> usize {
        self.days.remove(day).map_or(0, |records| records.len())
    }
}

impl IntervalStore for MemoryStore {
    fn records_for(&self, day: &DayKey) -> DayPieResult<Vec<TaskRecord>> {
        Ok(self.days.get(day).cloned().unwrap_or_default())
    }

    fn day_keys(&self) -> DayPieResult<Vec<DayKey>> {
        Ok(self
            .days
            .iter()
            .filter(|(_, records)| !records.is_empty())
            .map(|(day, _)| day.clone())
            .collect())
    }
}

/// Schedule persisted as a TOML file, one `[[days."<key>"]]` table per task.
#[derive(Debug, Clone)]
pub struct ScheduleFile {
    path: PathBuf,
    store: MemoryStore,
}

impl ScheduleFile {
    /// Load the schedule at `path`. A missing file is an empty schedule.
    pub fn load(path: impl Into<PathBuf>) -> DayPieResult<Self> {
        let path = path.into();

        let store: MemoryStore = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            toml::from_str(&content).map_err(|e| {
                DayPieError::Store(format!("Could not parse {}: {e}", path.display()))
            })?
        } else {
            log::info!("No schedule at {}, starting empty", path.display());
            MemoryStore::default()
        };

        log::debug!("Loaded schedule from {}", path.display());
        Ok(ScheduleFile { path, store })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn add(&mut self, day: DayKey, record: TaskRecord) {
        self.store.add(day, record);
    }

    pub fn clear(&mut self, day: &DayKey) -> usize {
        self.store.clear(day)
    }

    /// Write the schedule back, creating parent directories as needed.
    pub fn save(&self) -> DayPieResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(&self.store)
            .map_err(|e| DayPieError::Serialization(e.to_string()))?;

        // Write to a temp file, then rename into place
        let temp = self.path.with_extension("toml.tmp");
        std::fs::write(&temp, content)?;
        if let Err(e) = std::fs::rename(&temp, &self.path) {
            let _ = std::fs::remove_file(&temp);
            return Err(e.into());
        }

        log::info!("Saved schedule to {}", self.path.display());
        Ok(())
    }
}

impl IntervalStore for ScheduleFile {
    fn records_for(&self, day: &DayKey) -> DayPieResult<Vec<TaskRecord>> {
        self.store.records_for(day)
    }

    fn day_keys(&self) -> DayPieResult<Vec<DayKey>> {
        self.store.day_keys()
    }
}
