//! Therapist directory.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Therapist {
    pub id: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    /// Session fee in INR.
    pub fee: u32,
    pub experience: &'static str,
    pub languages: &'static [&'static str],
    pub specializations: &'static [&'static str],
    pub next_available: &'static str,
}

impl Therapist {
    /// Case-insensitive match on name, any language or any specialization.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle)
            || self.languages.iter().any(|l| l.to_lowercase().contains(&needle))
            || self
                .specializations
                .iter()
                .any(|s| s.to_lowercase().contains(&needle))
    }
}

pub const THERAPISTS: &[Therapist] = &[
    Therapist {
        id: "1",
        name: "Dr. Anjali Desai",
        title: "Clinical Psychologist",
        fee: 1500,
        experience: "8 years",
        languages: &["English", "Hindi", "Marathi"],
        specializations: &["Anxiety", "Depression", "CBT"],
        next_available: "Tomorrow, 4 PM",
    },
    Therapist {
        id: "2",
        name: "Mr. Rohan Mehta",
        title: "Licensed Therapist",
        fee: 1200,
        experience: "5 years",
        languages: &["English", "Hindi"],
        specializations: &["Stress Management", "Work-Life Balance"],
        next_available: "Today, 6 PM",
    },
    Therapist {
        id: "3",
        name: "Ms. Sneha Kapoor",
        title: "Counseling Psychologist",
        fee: 1000,
        experience: "4 years",
        languages: &["English", "Punjabi"],
        specializations: &["Relationship Issues", "Self-Esteem"],
        next_available: "Wed, 11 AM",
    },
];

/// Directory entries matching `query`; an empty query lists everyone.
pub fn search_therapists(query: &str) -> Vec<&'static Therapist> {
    THERAPISTS.iter().filter(|t| t.matches(query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_by_language() {
        let hits = search_therapists("hindi");
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_search_by_specialization_and_name() {
        assert_eq!(search_therapists("self-esteem")[0].id, "3");
        assert_eq!(search_therapists("Mehta")[0].id, "2");
        assert_eq!(search_therapists("  ").len(), THERAPISTS.len());
        assert!(search_therapists("astrology").is_empty());
    }
}
