//! 4-7-8 paced breathing.

use serde::Serialize;
use strum::Display;

pub const INHALE_SECONDS: u32 = 4;
pub const HOLD_SECONDS: u32 = 7;
pub const EXHALE_SECONDS: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum BreathPhase {
    Ready,
    Inhale,
    Hold,
    Exhale,
}

impl BreathPhase {
    pub fn instruction(&self) -> &'static str {
        match self {
            Self::Ready => "Sit comfortably and relax your shoulders.",
            Self::Inhale => "Breathe in deeply through your nose...",
            Self::Hold => "Hold your breath gently...",
            Self::Exhale => "Exhale slowly through your mouth...",
        }
    }

    pub fn duration(&self) -> u32 {
        match self {
            Self::Ready => 0,
            Self::Inhale => INHALE_SECONDS,
            Self::Hold => HOLD_SECONDS,
            Self::Exhale => EXHALE_SECONDS,
        }
    }

    fn next(&self) -> Self {
        match self {
            Self::Ready | Self::Exhale => Self::Inhale,
            Self::Inhale => Self::Hold,
            Self::Hold => Self::Exhale,
        }
    }
}

/// Breathing session driven by one `tick` per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreathingSession {
    phase: BreathPhase,
    seconds_left: u32,
    cycles: u32,
}

impl Default for BreathingSession {
    fn default() -> Self {
        Self::new()
    }
}

impl BreathingSession {
    pub fn new() -> Self {
        Self {
            phase: BreathPhase::Ready,
            seconds_left: 0,
            cycles: 0,
        }
    }

    pub fn phase(&self) -> BreathPhase {
        self.phase
    }

    pub fn seconds_left(&self) -> u32 {
        self.seconds_left
    }

    /// Completed inhale-hold-exhale cycles.
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    pub fn is_active(&self) -> bool {
        self.phase != BreathPhase::Ready
    }

    /// Begins with an inhale. No effect while already running.
    pub fn start(&mut self) {
        if !self.is_active() {
            self.enter(BreathPhase::Inhale);
        }
    }

    /// Returns to `Ready` and forgets completed cycles.
    pub fn stop(&mut self) {
        *self = Self::new();
    }

    /// Advances one second. Returns the new phase when a transition happened.
    pub fn tick(&mut self) -> Option<BreathPhase> {
        if !self.is_active() {
            return None;
        }

        self.seconds_left = self.seconds_left.saturating_sub(1);
        if self.seconds_left > 0 {
            return None;
        }

        if self.phase == BreathPhase::Exhale {
            self.cycles += 1;
        }
        let next = self.phase.next();
        self.enter(next);
        Some(next)
    }

    fn enter(&mut self, phase: BreathPhase) {
        self.phase = phase;
        self.seconds_left = phase.duration();
    }
}
