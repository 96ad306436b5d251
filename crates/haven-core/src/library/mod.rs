//! Static reference data: helplines, self-help resources, therapists,
//! affirmations and journal prompts. None of it has a lifecycle.

mod affirmations;
mod helplines;
mod resources;
mod therapists;

pub use affirmations::{AFFIRMATIONS, JOURNAL_PROMPTS, random_affirmation, random_journal_prompt};
pub use helplines::{Helpline, helplines_for};
pub use resources::{Resource, ResourceKind, SELF_HELP_RESOURCES, categories, resources_in};
pub use therapists::{THERAPISTS, Therapist, search_therapists};
