//! 5-4-3-2-1 grounding walk-through.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroundingStep {
    pub count: u8,
    pub title: &'static str,
    pub prompt: &'static str,
}

pub const GROUNDING_STEPS: &[GroundingStep] = &[
    GroundingStep {
        count: 5,
        title: "Things you see",
        prompt: "Look around you. Notice 5 details you haven't noticed before.",
    },
    GroundingStep {
        count: 4,
        title: "Things you can touch",
        prompt: "Notice the sensation of your clothes, the chair, or the table.",
    },
    GroundingStep {
        count: 3,
        title: "Things you hear",
        prompt: "Listen carefully. Distant traffic? A bird? The hum of a fan?",
    },
    GroundingStep {
        count: 2,
        title: "Things you can smell",
        prompt: "Or 2 smells you like (coffee, rain). If not, recall a favorite scent.",
    },
    GroundingStep {
        count: 1,
        title: "Thing you can taste",
        prompt: "Or one good thing about yourself.",
    },
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroundingExercise {
    step: usize,
    completed: bool,
}

impl GroundingExercise {
    pub fn new() -> Self {
        Self::default()
    }

    /// The step being shown, `None` once completed.
    pub fn current(&self) -> Option<&'static GroundingStep> {
        if self.completed {
            None
        } else {
            GROUNDING_STEPS.get(self.step)
        }
    }

    /// Zero-based index of the current step.
    pub fn position(&self) -> usize {
        self.step
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Moves to the next step, completing after the last one.
    pub fn next(&mut self) -> Option<&'static GroundingStep> {
        if self.step + 1 < GROUNDING_STEPS.len() {
            self.step += 1;
        } else {
            self.completed = true;
        }
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walks_five_steps_then_completes() {
        let mut exercise = GroundingExercise::new();
        assert_eq!(exercise.current().unwrap().count, 5);

        let counts: Vec<u8> = std::iter::from_fn(|| exercise.next().map(|s| s.count)).collect();
        assert_eq!(counts, vec![4, 3, 2, 1]);
        assert!(exercise.is_completed());
        assert!(exercise.current().is_none());
    }
}
