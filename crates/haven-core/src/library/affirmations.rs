use rand::Rng;
use rand::seq::SliceRandom;

pub const AFFIRMATIONS: &[&str] = &[
    "You are stronger than you know.",
    "This feeling is temporary. You will get through this.",
    "You are allowed to take up space.",
    "One day at a time. One breath at a time.",
    "Your productivity does not define your worth.",
    "It is okay to rest.",
    "You are enough, just as you are.",
];

pub const JOURNAL_PROMPTS: &[&str] = &[
    "What is one thing that made you smile today?",
    "Write about a challenge you overcame recently.",
    "What are three things you are grateful for right now?",
    "How are you truly feeling in this moment?",
    "What is a worry you can let go of today?",
    "Describe your ideal relaxing day.",
];

pub fn random_affirmation<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    AFFIRMATIONS.choose(rng).copied().unwrap_or(AFFIRMATIONS[0])
}

pub fn random_journal_prompt<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    JOURNAL_PROMPTS.choose(rng).copied().unwrap_or(JOURNAL_PROMPTS[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_picks_come_from_lists() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert!(AFFIRMATIONS.contains(&random_affirmation(&mut rng)));
            assert!(JOURNAL_PROMPTS.contains(&random_journal_prompt(&mut rng)));
        }
    }
}
