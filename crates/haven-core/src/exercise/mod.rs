//! Guided exercises and stress-relief games.

mod balloons;
mod breathing;
mod bubbles;
mod grounding;
mod memory;

pub use balloons::{Balloon, BalloonColor, BalloonField, FRAME, MAX_BALLOONS, SPAWN_INTERVAL};
pub use breathing::{
    BreathPhase, BreathingSession, EXHALE_SECONDS, HOLD_SECONDS, INHALE_SECONDS,
};
pub use bubbles::{BUBBLE_COLUMNS, BUBBLE_COUNT, BubbleGrid, PopOutcome};
pub use grounding::{GROUNDING_STEPS, GroundingExercise, GroundingStep};
pub use memory::{Card, FlipOutcome, MEMORY_COLUMNS, MEMORY_ICONS, MemoryMatch};
