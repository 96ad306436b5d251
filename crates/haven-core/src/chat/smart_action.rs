//! Suggested follow-up actions for model replies.

use serde::Serialize;

use crate::view::AppView;

/// A shortcut offered under a reply that mentions one of the tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SmartAction {
    pub label: &'static str,
    pub view: AppView,
}

const BREATHING_WORDS: &[&str] = &["breath", "calm down", "panic"];
const JOURNAL_WORDS: &[&str] = &["journal", "write", "diary"];
const MOOD_WORDS: &[&str] = &["mood", "track", "log"];

/// Picks at most one action; breathing wins over journal, journal over mood.
pub fn smart_action_for(reply: &str) -> Option<SmartAction> {
    let lower = reply.to_lowercase();
    let mentions = |words: &[&str]| words.iter().any(|w| lower.contains(w));

    if mentions(BREATHING_WORDS) {
        Some(SmartAction {
            label: "Start Breathing Exercise",
            view: AppView::Tools,
        })
    } else if mentions(JOURNAL_WORDS) {
        Some(SmartAction {
            label: "Open Journal",
            view: AppView::Tools,
        })
    } else if mentions(MOOD_WORDS) {
        Some(SmartAction {
            label: "Log Mood",
            view: AppView::Mood,
        })
    } else {
        None
    }
}
