//! Crisis helplines by region.

use serde::Serialize;

use crate::settings::Region;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Helpline {
    pub name: &'static str,
    pub number: &'static str,
    pub hours: &'static str,
}

impl Helpline {
    /// True when `number` looks like something a phone can dial.
    pub fn is_dialable(&self) -> bool {
        self.number.chars().filter(|c| c.is_ascii_digit()).count() > 3
    }
}

const INDIA: &[Helpline] = &[
    Helpline { name: "iCall (TISS)", number: "9152987821", hours: "Mon-Sat, 8 AM - 10 PM" },
    Helpline { name: "Vandrevala Foundation", number: "18602662345", hours: "24x7" },
    Helpline { name: "Kiran (Govt of India)", number: "18005990019", hours: "24x7" },
    Helpline { name: "AASRA", number: "9820466726", hours: "24x7" },
];

const UNITED_STATES: &[Helpline] = &[
    Helpline { name: "988 Suicide & Crisis Lifeline", number: "988", hours: "24x7" },
    Helpline { name: "Crisis Text Line", number: "Text HOME to 741741", hours: "24x7" },
];

const UNITED_KINGDOM: &[Helpline] = &[
    Helpline { name: "Samaritans", number: "116 123", hours: "24x7" },
    Helpline { name: "Shout", number: "Text SHOUT to 85258", hours: "24x7" },
];

const CANADA: &[Helpline] = &[
    Helpline { name: "9-8-8 Suicide Crisis Helpline", number: "988", hours: "24x7" },
    Helpline { name: "Kids Help Phone", number: "1-800-668-6868", hours: "24x7" },
];

const AUSTRALIA: &[Helpline] = &[
    Helpline { name: "Lifeline", number: "13 11 14", hours: "24x7" },
    Helpline { name: "Beyond Blue", number: "1300 22 4636", hours: "24x7" },
];

const GLOBAL: &[Helpline] = &[
    Helpline { name: "Find A Helpline", number: "findahelpline.com", hours: "Directory" },
    Helpline { name: "Local emergency services", number: "112 / 911", hours: "24x7" },
];

/// Helplines for `region`. Regions without a list fall back to the global one.
pub fn helplines_for(region: Region) -> &'static [Helpline] {
    match region {
        Region::In => INDIA,
        Region::Us => UNITED_STATES,
        Region::Uk => UNITED_KINGDOM,
        Region::Ca => CANADA,
        Region::Au => AUSTRALIA,
        Region::Global => GLOBAL,
    }
}
