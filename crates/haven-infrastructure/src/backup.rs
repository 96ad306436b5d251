//! Backup file writer for data export.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;

use haven_core::error::Result;

use crate::storage::AtomicFile;

/// `Haven_Backup_YYYY-MM-DD.json`
pub fn backup_file_name(date: NaiveDate) -> String {
    format!("Haven_Backup_{}.json", date.format("%Y-%m-%d"))
}

/// Writes pretty-printed backups into a target directory.
#[derive(Debug, Clone)]
pub struct BackupWriter {
    dir: PathBuf,
}

impl BackupWriter {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Writes `bundle` and returns the file path. Same-day exports overwrite.
    pub async fn write<T: Serialize + Sync>(&self, date: NaiveDate, bundle: &T) -> Result<PathBuf> {
        let path = self.dir.join(backup_file_name(date));
        let json = serde_json::to_string_pretty(bundle)?;
        AtomicFile::new(path.clone()).write(&json).await?;
        tracing::info!("exported backup to {}", path.display());
        Ok(path)
    }
}
