//! Versioned JSON document backed by an [`AtomicFile`].
//!
//! Documents are stored flat: the latest DTO's fields plus a top-level
//! `version` string. Loading walks older versions forward through the
//! entity's `version_migrate::Migrator`; saving always writes the latest.

use std::marker::PhantomData;
use std::path::PathBuf;

use haven_core::error::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;
use version_migrate::Migrator;

use super::atomic_file::AtomicFile;

/// Binds a domain model to its registered migration path.
pub trait DocumentSchema {
    type Domain: Serialize + DeserializeOwned;

    /// Entity name the migration path is registered under.
    const ENTITY: &'static str;

    fn migrator() -> Migrator;
}

pub struct VersionedDocument<S: DocumentSchema> {
    file: AtomicFile,
    migrator: Migrator,
    _schema: PhantomData<S>,
}

impl<S: DocumentSchema> VersionedDocument<S> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicFile::new(path),
            migrator: S::migrator(),
            _schema: PhantomData,
        }
    }

    pub fn file(&self) -> &AtomicFile {
        &self.file
    }

    /// Loads and migrates the document. `None` when nothing is stored.
    pub async fn load(&self) -> Result<Option<S::Domain>> {
        let Some(content) = self.file.read().await? else {
            return Ok(None);
        };

        let value: serde_json::Value = serde_json::from_str(&content)?;
        tracing::debug!("loading {} from {:?}", S::ENTITY, self.file.path());
        let domain = self.migrator.load_flat_from(S::ENTITY, value)?;
        Ok(Some(domain))
    }

    pub async fn save(&self, domain: &S::Domain) -> Result<()> {
        let flat = self.migrator.save_domain_flat(S::ENTITY, domain)?;
        let value: serde_json::Value = serde_json::from_str(&flat)?;
        self.file.write(&serde_json::to_string_pretty(&value)?).await
    }

    pub async fn remove(&self) -> Result<bool> {
        self.file.remove().await
    }
}
