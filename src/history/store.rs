//! History storage backends
//!
//! - `MemoryStore`: in-process map (tests, ephemeral games)
//! - `JsonFileStore`: one JSON file holding every day
//!
//! A missing or unparseable file reads as an empty history, and a single
//! malformed record is skipped. Only I/O failures are returned as errors.

use super::DailySessionRecord;
use crate::calendar::DayKey;
use crate::game::Session;
use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Errors that can occur while reading or writing history
#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Serialization(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "history I/O error: {e}"),
            Self::Serialization(e) => write!(f, "failed to serialize history: {e}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Serialization(e) => Some(e),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}

/// Persistence collaborator for daily records
pub trait HistoryStore {
    /// Every readable record, in chronological order
    ///
    /// # Errors
    /// Returns `StoreError::Io` if the backing storage cannot be read.
    fn load_all(&self) -> Result<Vec<DailySessionRecord>, StoreError>;

    /// The record for one day, if any
    ///
    /// # Errors
    /// Returns `StoreError::Io` if the backing storage cannot be read.
    fn load(&self, day: DayKey) -> Result<Option<DailySessionRecord>, StoreError> {
        Ok(self.load_all()?.into_iter().find(|r| r.day == day))
    }

    /// Insert or replace the record for its day
    ///
    /// # Errors
    /// Returns `StoreError` if the record cannot be written.
    fn save(&mut self, record: &DailySessionRecord) -> Result<(), StoreError>;
}

/// History kept in memory only
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    days: BTreeMap<DayKey, Session>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl HistoryStore for MemoryStore {
    fn load_all(&self) -> Result<Vec<DailySessionRecord>, StoreError> {
        Ok(self
            .days
            .iter()
            .map(|(day, session)| DailySessionRecord::new(*day, session.clone()))
            .collect())
    }

    fn load(&self, day: DayKey) -> Result<Option<DailySessionRecord>, StoreError> {
        Ok(self
            .days
            .get(&day)
            .map(|session| DailySessionRecord::new(day, session.clone())))
    }

    fn save(&mut self, record: &DailySessionRecord) -> Result<(), StoreError> {
        self.days.insert(record.day, record.session.clone());
        Ok(())
    }
}

/// On-disk layout: `{"days": {"day_<year>_<ordinal>": <session>}}`
#[derive(Debug, Default, Serialize, Deserialize)]
struct HistoryFile {
    #[serde(default)]
    days: BTreeMap<String, serde_json::Value>,
}

/// History stored as a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    legacy_year: i32,
}

impl JsonFileStore {
    /// Store at `path`; legacy keys without a year count as this year
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_legacy_year(path, Local::now().year())
    }

    /// Store at `path` with an explicit year for legacy `day_<ordinal>` keys
    #[must_use]
    pub fn with_legacy_year(path: impl Into<PathBuf>, legacy_year: i32) -> Self {
        Self {
            path: path.into(),
            legacy_year,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn read_file(&self) -> Result<HistoryFile, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            // First run - no history yet
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(HistoryFile::default()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&content) {
            Ok(file) => Ok(file),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "unreadable history file, starting fresh");
                Ok(HistoryFile::default())
            }
        }
    }

    fn write_file(&self, file: &HistoryFile) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // Write to temp file first, then rename over the old one
        let tmp_path = self.temp_path();
        {
            let mut writer = BufWriter::new(File::create(&tmp_path)?);
            serde_json::to_writer_pretty(&mut writer, file)?;
            writer.flush()?;
            writer.get_ref().sync_all()?;
        }
        fs::rename(&tmp_path, &self.path)?;

        debug!(path = %self.path.display(), days = file.days.len(), "saved history");
        Ok(())
    }

    fn decode(&self, key: &str, value: serde_json::Value) -> Option<DailySessionRecord> {
        let Some(day) = DayKey::parse(key, self.legacy_year) else {
            warn!(key, "unrecognized history key, skipping");
            return None;
        };

        match serde_json::from_value::<Session>(value) {
            Ok(session) => Some(DailySessionRecord::new(day, session)),
            Err(e) => {
                warn!(key, error = %e, "malformed history record, skipping");
                None
            }
        }
    }
}

impl HistoryStore for JsonFileStore {
    fn load_all(&self) -> Result<Vec<DailySessionRecord>, StoreError> {
        let file = self.read_file()?;

        // Canonical and legacy keys can name the same day; the canonical one wins
        let mut records: BTreeMap<DayKey, (bool, Session)> = BTreeMap::new();
        for (key, value) in file.days {
            let canonical = key.parse::<DayKey>().is_ok();
            if let Some(record) = self.decode(&key, value) {
                let shadowed = !canonical && matches!(records.get(&record.day), Some((true, _)));
                if !shadowed {
                    records.insert(record.day, (canonical, record.session));
                }
            }
        }

        debug!(path = %self.path.display(), count = records.len(), "loaded history");
        Ok(records
            .into_iter()
            .map(|(day, (_, session))| DailySessionRecord::new(day, session))
            .collect())
    }

    fn save(&mut self, record: &DailySessionRecord) -> Result<(), StoreError> {
        let mut file = self.read_file()?;
        file.days
            .insert(record.day.to_string(), serde_json::to_value(&record.session)?);
        self.write_file(&file)
    }
}
