//! Storage primitives shared by the repositories.

mod atomic_file;
mod document;

pub use atomic_file::AtomicFile;
pub use document::{DocumentSchema, VersionedDocument};
