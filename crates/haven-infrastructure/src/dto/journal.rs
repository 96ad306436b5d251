//! Journal draft DTOs.
//!
//! ## Version History
//! - **1.0.0**: Initial schema

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use version_migrate::{FromDomain, IntoDomain, Migrator, Versioned};

use haven_core::journal::JournalDraft;

use crate::storage::DocumentSchema;

/// Journal draft DTO V1.0.0
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
#[serde(rename_all = "camelCase")]
pub struct JournalDraftV1_0_0 {
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl IntoDomain<JournalDraft> for JournalDraftV1_0_0 {
    fn into_domain(self) -> JournalDraft {
        JournalDraft {
            text: self.text,
            updated_at: self.updated_at,
        }
    }
}

impl FromDomain<JournalDraft> for JournalDraftV1_0_0 {
    fn from_domain(draft: JournalDraft) -> Self {
        JournalDraftV1_0_0 {
            text: draft.text,
            updated_at: draft.updated_at,
        }
    }
}

/// Creates the Migrator for the journal draft document.
pub fn create_journal_draft_migrator() -> Migrator {
    let mut migrator = Migrator::builder().build();
    let path = Migrator::define(JournalDraftSchema::ENTITY)
        .from::<JournalDraftV1_0_0>()
        .into_with_save::<JournalDraft>();
    migrator
        .register(path)
        .expect("Failed to register journal_draft migration path");
    migrator
}

pub struct JournalDraftSchema;

impl DocumentSchema for JournalDraftSchema {
    type Domain = JournalDraft;
    const ENTITY: &'static str = "journal_draft";

    fn migrator() -> Migrator {
        create_journal_draft_migrator()
    }
}
