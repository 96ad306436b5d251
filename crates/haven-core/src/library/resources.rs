//! Self-help library reference data.

use serde::Serialize;
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ResourceKind {
    Breathing,
    Journal,
    Article,
    Audio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: ResourceKind,
    pub category: &'static str,
    pub duration: &'static str,
    pub content: &'static str,
    pub is_premium: bool,
}

impl Resource {
    /// Whether a user with the given tier may open this resource.
    pub fn is_locked_for(&self, is_premium_user: bool) -> bool {
        self.is_premium && !is_premium_user
    }
}

pub const SELF_HELP_RESOURCES: &[Resource] = &[
    Resource {
        id: "1",
        title: "Understanding Anxiety",
        kind: ResourceKind::Article,
        category: "Anxiety",
        duration: "5 min read",
        content: "Learn about the physiological and psychological aspects of anxiety and how to manage them.",
        is_premium: false,
    },
    Resource {
        id: "2",
        title: "Deep Sleep Meditation",
        kind: ResourceKind::Audio,
        category: "Sleep",
        duration: "15 min",
        content: "A guided meditation track designed to help you relax your muscles and drift into deep sleep.",
        is_premium: true,
    },
    Resource {
        id: "3",
        title: "5-Minute Mindfulness",
        kind: ResourceKind::Audio,
        category: "Mindfulness",
        duration: "5 min",
        content: "Quick grounding exercise for busy professionals to reset during the workday.",
        is_premium: false,
    },
    Resource {
        id: "4",
        title: "Coping with Depression",
        kind: ResourceKind::Article,
        category: "Depression",
        duration: "8 min read",
        content: "Practical strategies for managing daily life when dealing with depressive episodes.",
        is_premium: false,
    },
    Resource {
        id: "5",
        title: "Advanced CBT Techniques",
        kind: ResourceKind::Article,
        category: "Anxiety",
        duration: "12 min read",
        content: "In-depth look at cognitive restructuring and exposure therapy exercises.",
        is_premium: true,
    },
    Resource {
        id: "6",
        title: "Sleep Hygiene Checklist",
        kind: ResourceKind::Article,
        category: "Sleep",
        duration: "3 min read",
        content: "10 essential habits to improve your sleep quality starting tonight.",
        is_premium: false,
    },
    Resource {
        id: "7",
        title: "Combating Loneliness",
        kind: ResourceKind::Article,
        category: "Depression",
        duration: "6 min read",
        content: "Living alone in a big city? Here are ways to build meaningful connections.",
        is_premium: false,
    },
    Resource {
        id: "8",
        title: "The Power of Routine",
        kind: ResourceKind::Article,
        category: "Mindfulness",
        duration: "4 min read",
        content: "How small daily rituals can stabilize your mood and improve productivity.",
        is_premium: false,
    },
];

/// Distinct categories in library order, prefixed with `"All"`.
pub fn categories() -> Vec<&'static str> {
    let mut out = vec!["All"];
    for resource in SELF_HELP_RESOURCES {
        if !out.contains(&resource.category) {
            out.push(resource.category);
        }
    }
    out
}

/// Resources in `category`. `"All"` (any case) or `None` returns everything.
pub fn resources_in(category: Option<&str>) -> Vec<&'static Resource> {
    SELF_HELP_RESOURCES
        .iter()
        .filter(|r| match category {
            None => true,
            Some(c) if c.eq_ignore_ascii_case("all") => true,
            Some(c) => r.category.eq_ignore_ascii_case(c),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_are_unique_and_start_with_all() {
        let cats = categories();
        assert_eq!(cats, vec!["All", "Anxiety", "Sleep", "Mindfulness", "Depression"]);
    }

    #[test]
    fn test_filter_by_category() {
        let sleep = resources_in(Some("sleep"));
        assert_eq!(sleep.len(), 2);
        assert!(sleep.iter().all(|r| r.category == "Sleep"));
        assert_eq!(resources_in(Some("All")).len(), SELF_HELP_RESOURCES.len());
        assert!(resources_in(Some("Gardening")).is_empty());
    }

    #[test]
    fn test_premium_lock() {
        let meditation = SELF_HELP_RESOURCES.iter().find(|r| r.id == "2").unwrap();
        assert!(meditation.is_locked_for(false));
        assert!(!meditation.is_locked_for(true));
    }
}
