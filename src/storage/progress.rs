//! Progress history persisted as a JSON document.
//!
//! The file holds every planning run in `training_history` plus a copy of
//! the latest one in `current`. A missing or unreadable document is treated
//! as an empty history; an unreadable one is moved aside before the next
//! write so it is never overwritten.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

use crate::athlete::{AthleteProfile, ExperienceLevel, TrainingGoal};
use crate::metrics::zones::ZoneSet;

/// One planning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    /// When the plan was generated
    #[serde(deserialize_with = "deserialize_date")]
    pub date: DateTime<Utc>,
    /// Week of the training cycle
    pub week: u32,
    /// Recorded max hold in seconds
    pub max_hold: u32,
    pub experience_level: ExperienceLevel,
    #[serde(alias = "goals")]
    pub goal: TrainingGoal,
    /// Zones used for the plan
    pub training_zones: ZoneSet,
}

impl ProgressRecord {
    /// Snapshot a profile and its zones.
    pub fn new(
        profile: &AthleteProfile,
        zones: &ZoneSet,
        max_hold: u32,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            date,
            week: profile.current_week(),
            max_hold,
            experience_level: profile.experience_level(),
            goal: profile.goal(),
            training_zones: *zones,
        }
    }
}

/// Parse a stored timestamp.
///
/// Accepts RFC 3339 and offset-less ISO 8601 (`2024-03-01T08:30:00.123456`),
/// the latter read as UTC.
pub fn parse_date(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(date) => Ok(date.with_timezone(&Utc)),
        Err(_) => raw
            .parse::<NaiveDateTime>()
            .map(|naive| naive.and_utc()),
    }
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).map_err(serde::de::Error::custom)
}

/// Result of reading the progress file.
enum Stored {
    Missing,
    Parsed(ProgressLog),
    Corrupt(serde_json::Error),
}

/// The whole progress document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressLog {
    #[serde(default)]
    pub training_history: Vec<ProgressRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<ProgressRecord>,
}

/// Reads and writes the progress file.
#[derive(Debug, Clone)]
pub struct ProgressStore {
    path: PathBuf,
}

impl ProgressStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where an unreadable progress file is moved before it is replaced.
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".corrupt");
        PathBuf::from(name)
    }

    fn read(&self) -> Result<Stored, StorageError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Stored::Missing),
            Err(e) => {
                return Err(StorageError::IoError(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        Ok(match serde_json::from_str(&content) {
            Ok(log) => Stored::Parsed(log),
            Err(e) => Stored::Corrupt(e),
        })
    }

    /// Load the progress document.
    ///
    /// Missing files and malformed JSON both yield an empty log. Other read
    /// failures are returned.
    pub fn load(&self) -> Result<ProgressLog, StorageError> {
        match self.read()? {
            Stored::Missing => {
                tracing::debug!(path = %self.path.display(), "No progress file yet");
                Ok(ProgressLog::default())
            }
            Stored::Parsed(log) => Ok(log),
            Stored::Corrupt(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Progress file is corrupt, starting with empty history"
                );
                Ok(ProgressLog::default())
            }
        }
    }

    /// Load the log that is about to be rewritten.
    ///
    /// A corrupt file is renamed to [`ProgressStore::backup_path`] first.
    fn load_for_write(&self) -> Result<ProgressLog, StorageError> {
        match self.read()? {
            Stored::Missing => Ok(ProgressLog::default()),
            Stored::Parsed(log) => Ok(log),
            Stored::Corrupt(e) => {
                let backup = self.backup_path();
                std::fs::rename(&self.path, &backup)
                    .map_err(|io_err| StorageError::IoError(io_err.to_string()))?;
                tracing::warn!(
                    path = %self.path.display(),
                    backup = %backup.display(),
                    error = %e,
                    "Moved unreadable progress file aside"
                );
                Ok(ProgressLog::default())
            }
        }
    }

    /// Latest recorded run, if any.
    pub fn load_current(&self) -> Result<Option<ProgressRecord>, StorageError> {
        Ok(self.load()?.current)
    }

    /// Append a run for `profile` and make it current.
    ///
    /// `override_max` replaces the profile's current max in the record.
    pub fn save(
        &self,
        profile: &AthleteProfile,
        zones: &ZoneSet,
        override_max: Option<u32>,
    ) -> Result<PathBuf, StorageError> {
        let max_hold = override_max.unwrap_or(profile.current_max());
        let record = ProgressRecord::new(profile, zones, max_hold, Utc::now());
        self.append(record)
    }

    /// Append a record and make it current.
    pub fn append(&self, record: ProgressRecord) -> Result<PathBuf, StorageError> {
        let mut log = self.load_for_write()?;
        log.training_history.push(record.clone());
        log.current = Some(record);
        self.write(&log)?;

        tracing::info!(
            path = %self.path.display(),
            entries = log.training_history.len(),
            "Saved progress"
        );

        Ok(self.path.clone())
    }

    /// Replace the max hold of the current record.
    ///
    /// An unreadable file has no current record, so it is left untouched.
    pub fn update_max(&self, new_max: u32) -> Result<PathBuf, StorageError> {
        let mut log = self.load()?;
        let current = log.current.as_mut().ok_or(StorageError::NoCurrentRecord)?;
        let old_max = current.max_hold;
        current.max_hold = new_max;
        self.write(&log)?;

        tracing::info!(old_max, new_max, "Updated recorded max hold");

        Ok(self.path.clone())
    }

    /// Write the document through a sibling temp file so readers never see
    /// a half-written file.
    fn write(&self, log: &ProgressLog) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(log)
            .map_err(|e| StorageError::SerializeError(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::IoError(e.to_string()))?;
        }

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, content).map_err(|e| StorageError::IoError(e.to_string()))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| {
            let _ = std::fs::remove_file(&tmp);
            StorageError::IoError(e.to_string())
        })
    }
}

/// Progress storage errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),

    #[error("No current training record found")]
    NoCurrentRecord,
}
