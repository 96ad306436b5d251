//! Atomic file operations.
//!
//! Writes go to a hidden temp file in the same directory, are fsynced, and
//! are renamed over the target while an exclusive lock file is held. A crash
//! mid-write leaves either the old or the new contents, never a mix.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use haven_core::HavenError;
use haven_core::error::Result;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Handle to a file that is only ever replaced as a whole.
#[derive(Debug, Clone)]
pub struct AtomicFile {
    path: PathBuf,
}

impl AtomicFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn exists(&self) -> bool {
        fs::try_exists(&self.path).await.unwrap_or(false)
    }

    /// Reads the whole file.
    ///
    /// Returns `None` when the file does not exist or is blank.
    pub async fn read(&self) -> Result<Option<String>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(HavenError::io(format!(
                    "Failed to read '{}': {}",
                    self.path.display(),
                    e
                )));
            }
        };

        if content.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(content))
    }

    /// Replaces the file contents atomically.
    pub async fn write(&self, contents: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                HavenError::io(format!(
                    "Failed to create directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let _lock = FileLock::acquire(&self.path).await?;

        let tmp_path = self.temp_path()?;
        let mut tmp_file = fs::File::create(&tmp_path).await?;
        tmp_file.write_all(contents.as_bytes()).await?;
        tmp_file.sync_all().await?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path).await.map_err(|e| {
            HavenError::io(format!(
                "Failed to replace '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        tracing::debug!("wrote {} bytes to {}", contents.len(), self.path.display());
        Ok(())
    }

    /// Deletes the file. Returns whether anything was removed.
    pub async fn remove(&self) -> Result<bool> {
        let _lock = match self.path.parent() {
            Some(parent) if fs::try_exists(parent).await.unwrap_or(false) => {
                Some(FileLock::acquire(&self.path).await?)
            }
            _ => None,
        };

        match fs::remove_file(&self.path).await {
            Ok(()) => {
                tracing::debug!("removed {}", self.path.display());
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(HavenError::io(format!(
                "Failed to remove '{}': {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn temp_path(&self) -> Result<PathBuf> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| HavenError::io("Path has no parent directory"))?;
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| HavenError::io("Path has no file name"))?;

        Ok(parent.join(format!(".{}.tmp", file_name.to_string_lossy())))
    }
}

/// Exclusive lock on `<file>.lock`, released and removed on drop.
struct FileLock {
    #[allow(dead_code)]
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    async fn acquire(path: &Path) -> Result<Self> {
        let lock_path = path.with_extension("lock");

        tokio::task::spawn_blocking(move || -> Result<FileLock> {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(false)
                .open(&lock_path)?;

            #[cfg(unix)]
            {
                use fs2::FileExt;
                file.lock_exclusive().map_err(|e| {
                    HavenError::io(format!("Failed to acquire lock: {}", e))
                })?;
            }

            Ok(FileLock { file, lock_path })
        })
        .await
        .map_err(|e| HavenError::internal(format!("Lock task failed: {}", e)))?
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // best effort; the lock itself is released with the handle
        let _ = std::fs::remove_file(&self.lock_path);
    }
}
