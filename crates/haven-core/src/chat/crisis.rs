//! Crisis language screening.
//!
//! Messages that match are answered locally with a safety reply and the
//! region's helplines; they never reach the model.

use once_cell::sync::Lazy;
use regex::Regex;

use super::locale::SAFETY_MESSAGE;
use crate::library::helplines_for;
use crate::settings::Region;

static CRISIS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(suicid|kill myself|end my life|want to die|hurt myself|no reason to live)")
        .expect("crisis pattern is a valid regex")
});

/// True when `text` contains self-harm or suicide language.
pub fn is_crisis_message(text: &str) -> bool {
    CRISIS_PATTERN.is_match(text)
}

/// Safety reply followed by the region's helplines.
pub fn safety_reply(region: Region) -> String {
    let mut reply = String::from(SAFETY_MESSAGE);
    reply.push_str("\n\n");
    for line in helplines_for(region) {
        reply.push_str(&format!("• {}: {} ({})\n", line.name, line.number, line.hours));
    }
    reply.trim_end().to_string()
}
