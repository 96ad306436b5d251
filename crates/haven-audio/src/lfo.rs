//! Low-frequency sine modulator.

use std::f32::consts::TAU;

/// Sweeps between `center - depth` and `center + depth` at `rate` Hz.
#[derive(Debug, Clone)]
pub struct Lfo {
    center: f32,
    depth: f32,
    step: f32,
    phase: f32,
}

impl Lfo {
    pub fn new(sample_rate: u32, rate: f32, center: f32, depth: f32) -> Self {
        Self {
            center,
            depth,
            step: rate / sample_rate as f32,
            phase: 0.0,
        }
    }

    /// Starts the sweep at `phase` (fraction of a cycle).
    pub fn with_phase(mut self, phase: f32) -> Self {
        self.phase = phase.rem_euclid(1.0);
        self
    }

    /// Builds an LFO spanning `[low, high]`.
    pub fn between(sample_rate: u32, rate: f32, low: f32, high: f32) -> Self {
        Self::new(sample_rate, rate, (low + high) / 2.0, (high - low) / 2.0)
    }

    pub fn next_value(&mut self) -> f32 {
        let value = self.center + self.depth * (TAU * self.phase).sin();
        self.phase = (self.phase + self.step).rem_euclid(1.0);
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stays_within_range() {
        let mut lfo = Lfo::between(1000, 2.0, 300.0, 1200.0);
        let values: Vec<f32> = (0..1000).map(|_| lfo.next_value()).collect();
        let min = values.iter().copied().fold(f32::MAX, f32::min);
        let max = values.iter().copied().fold(f32::MIN, f32::max);
        assert!(min >= 299.9 && min < 310.0);
        assert!(max <= 1200.1 && max > 1190.0);
    }
}
