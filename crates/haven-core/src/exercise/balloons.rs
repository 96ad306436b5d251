//! Balloons drift up the screen; popping one scores a point.
//!
//! Positions are percentages of the play area. Time is fed in through
//! [`BalloonField::elapse`], which runs whole animation frames and carries
//! the remainder over to the next call.

use std::time::Duration;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use strum::{Display, EnumIter, IntoEnumIterator};

/// Animation frame length (60 fps).
pub const FRAME: Duration = Duration::from_micros(16_667);
/// A spawn is attempted this often.
pub const SPAWN_INTERVAL: Duration = Duration::from_millis(800);
/// Chance that a spawn attempt releases a balloon.
pub const SPAWN_CHANCE: f64 = 0.4;
pub const MAX_BALLOONS: usize = 13;

const START_Y: f32 = 110.0;
const GONE_Y: f32 = -20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum BalloonColor {
    Red,
    Blue,
    Yellow,
    Purple,
    Green,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Balloon {
    pub id: u64,
    pub x: f32,
    pub y: f32,
    /// Rise per frame.
    pub speed: f32,
    pub color: BalloonColor,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalloonField {
    balloons: Vec<Balloon>,
    score: u32,
    next_id: u64,
    #[serde(skip)]
    frame_debt: Duration,
    #[serde(skip)]
    spawn_clock: Duration,
}

impl BalloonField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balloons(&self) -> &[Balloon] {
        &self.balloons
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// One spawn attempt. Returns the id of the released balloon.
    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<u64> {
        if !rng.gen_bool(SPAWN_CHANCE) || self.balloons.len() >= MAX_BALLOONS {
            return None;
        }

        let colors: Vec<BalloonColor> = BalloonColor::iter().collect();
        let color = *colors.choose(rng)?;
        let id = self.next_id;
        self.next_id += 1;
        self.balloons.push(Balloon {
            id,
            x: rng.gen_range(10.0..90.0),
            y: START_Y,
            speed: rng.gen_range(0.2..0.6),
            color,
        });
        Some(id)
    }

    /// Moves every balloon up one frame and drops those past the top.
    pub fn advance(&mut self) {
        for balloon in &mut self.balloons {
            balloon.y -= balloon.speed;
        }
        self.balloons.retain(|b| b.y > GONE_Y);
    }

    /// Runs the frames that fit into `elapsed`, attempting a spawn each
    /// time a spawn interval passes. Returns how many balloons were released.
    pub fn elapse<R: Rng + ?Sized>(&mut self, elapsed: Duration, rng: &mut R) -> usize {
        let mut released = 0;
        self.frame_debt += elapsed;
        while self.frame_debt >= FRAME {
            self.frame_debt -= FRAME;
            self.spawn_clock += FRAME;
            if self.spawn_clock >= SPAWN_INTERVAL {
                self.spawn_clock -= SPAWN_INTERVAL;
                released += usize::from(self.spawn(rng).is_some());
            }
            self.advance();
        }
        released
    }

    /// Pops a balloon that is still on screen. Scores only on a hit.
    pub fn pop(&mut self, id: u64) -> bool {
        let before = self.balloons.len();
        self.balloons.retain(|b| b.id != id);
        let hit = self.balloons.len() < before;
        if hit {
            self.score += 1;
        }
        hit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn field_with_balloon() -> (BalloonField, u64) {
        let mut rng = StdRng::seed_from_u64(3);
        let mut field = BalloonField::new();
        let id = loop {
            if let Some(id) = field.spawn(&mut rng) {
                break id;
            }
        };
        (field, id)
    }

    #[test]
    fn test_pop_scores_once() {
        let (mut field, id) = field_with_balloon();
        assert!(field.pop(id));
        assert!(!field.pop(id));
        assert_eq!(field.score(), 1);
        assert!(field.balloons().is_empty());
    }

    #[test]
    fn test_spawned_balloons_start_below_and_rise() {
        let (mut field, _) = field_with_balloon();
        let balloon = field.balloons()[0].clone();
        assert_eq!(balloon.y, START_Y);
        assert!((10.0..90.0).contains(&balloon.x));

        field.advance();
        assert!(field.balloons()[0].y < START_Y);
    }

    #[test]
    fn test_balloons_leave_the_top() {
        let (mut field, _) = field_with_balloon();
        // Slowest speed needs (110 + 20) / 0.2 = 650 frames.
        for _ in 0..700 {
            field.advance();
        }
        assert!(field.balloons().is_empty());
        assert_eq!(field.score(), 0);
    }

    #[test]
    fn test_spawns_are_capped() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut field = BalloonField::new();
        for _ in 0..500 {
            field.spawn(&mut rng);
        }
        assert_eq!(field.balloons().len(), MAX_BALLOONS);
    }

    #[test]
    fn test_elapse_carries_partial_intervals() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut field = BalloonField::new();
        assert_eq!(field.elapse(Duration::from_millis(500), &mut rng), 0);
        assert_eq!(field.elapse(FRAME / 2, &mut rng), 0);

        // 25 attempts at 40% with a fixed seed
        let released = field.elapse(SPAWN_INTERVAL * 25, &mut rng);
        assert!(released > 0);
    }
}
