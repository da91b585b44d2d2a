use crate::errors::StorageError;
use crate::models::{Habit, Stats};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{collections::BTreeMap, env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, warn};

pub const HABITS_KEY: &str = "habits";
pub const STATS_KEY: &str = "stats";

/// Flat key-value document mirrored to a single JSON file.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(transparent)]
pub struct KeyValueStorage {
    entries: BTreeMap<String, Value>,
}

impl KeyValueStorage {
    pub fn get_item(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn set_item(&mut self, key: &str, value: Value) {
        self.entries.insert(key.to_string(), value);
    }
}

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/habits.json"))
}

pub async fn load_storage(path: &Path) -> KeyValueStorage {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(storage) => storage,
            Err(err) => {
                error!("failed to parse storage file: {err}");
                KeyValueStorage::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => KeyValueStorage::default(),
        Err(err) => {
            error!("failed to read storage file: {err}");
            KeyValueStorage::default()
        }
    }
}

pub async fn persist_storage(path: &Path, storage: &KeyValueStorage) -> Result<(), StorageError> {
    let payload = serde_json::to_vec_pretty(storage)?;
    fs::write(path, payload).await?;
    Ok(())
}

/// Decodes the habit list record by record; a malformed entry is skipped
/// without taking the rest of the list with it.
pub fn load_habits(storage: &KeyValueStorage) -> Vec<Habit> {
    let Some(value) = storage.get_item(HABITS_KEY) else {
        return Vec::new();
    };
    let Some(records) = value.as_array() else {
        warn!("discarding habits record: expected an array");
        return Vec::new();
    };

    records
        .iter()
        .filter_map(|record| match serde_json::from_value(record.clone()) {
            Ok(habit) => Some(habit),
            Err(err) => {
                warn!("skipping malformed habit: {err}");
                None
            }
        })
        .collect()
}

pub fn save_habits(storage: &mut KeyValueStorage, habits: &[Habit]) -> Result<(), StorageError> {
    let value = serde_json::to_value(habits).map_err(|source| StorageError::Encode {
        key: HABITS_KEY,
        source,
    })?;
    storage.set_item(HABITS_KEY, value);
    Ok(())
}

/// Reads the stats record, applying the daily rollover against `today`.
pub fn load_stats(storage: &KeyValueStorage, today: &str) -> Stats {
    let stored = storage
        .get_item(STATS_KEY)
        .and_then(|value| match serde_json::from_value::<Stats>(value.clone()) {
            Ok(stats) => Some(stats),
            Err(err) => {
                warn!("discarding malformed stats record: {err}");
                None
            }
        });

    match stored {
        Some(mut stats) => {
            roll_over(&mut stats, today);
            stats
        }
        None => Stats::fresh(today),
    }
}

pub fn save_stats(storage: &mut KeyValueStorage, stats: &Stats) -> Result<(), StorageError> {
    let value = serde_json::to_value(stats).map_err(|source| StorageError::Encode {
        key: STATS_KEY,
        source,
    })?;
    storage.set_item(STATS_KEY, value);
    Ok(())
}

/// Resets `completed_today` when the record belongs to another day.
/// Returns whether a reset happened.
pub fn roll_over(stats: &mut Stats, today: &str) -> bool {
    if stats.last_updated.as_deref() == Some(today) {
        return false;
    }
    stats.completed_today = 0;
    stats.last_updated = Some(today.to_string());
    true
}
