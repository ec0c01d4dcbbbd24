//! Timestamped schedule snapshots stored as JSON.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::catalog::CATALOG_VERSION;
use crate::error::Result;
use crate::schedule::Schedule;

/// A schedule as persisted, stamped with when it was last written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSnapshot {
    pub schedule: Schedule,
    pub last_updated: DateTime<Utc>,
    #[serde(default)]
    pub catalog_version: u32,
}

impl ScheduleSnapshot {
    /// Copy `schedule` and stamp it with the current time.
    pub fn stamp(schedule: &Schedule) -> Self {
        Self {
            schedule: schedule.clone(),
            last_updated: Utc::now(),
            catalog_version: CATALOG_VERSION,
        }
    }

    /// `~/.config/studyplan/schedule.json`
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn default_path() -> Result<PathBuf> {
        Ok(data_dir()?.join("schedule.json"))
    }

    /// Write as pretty JSON, refreshing the timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_to(&mut self, path: &Path) -> Result<()> {
        self.last_updated = Utc::now();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        tracing::debug!(path = %path.display(), "schedule snapshot saved");
        Ok(())
    }

    /// Read a snapshot written by [`ScheduleSnapshot::save_to`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or not a valid snapshot.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let snapshot: ScheduleSnapshot = serde_json::from_str(&content)?;
        if snapshot.catalog_version != CATALOG_VERSION {
            tracing::warn!(
                stored = snapshot.catalog_version,
                current = CATALOG_VERSION,
                "snapshot was written with a different catalog version"
            );
        }
        Ok(snapshot)
    }
}
