//! Phase-accumulating oscillator.

use std::f32::consts::TAU;

use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Waveform {
    Sine,
    Triangle,
    Square,
    Sawtooth,
}

impl Waveform {
    /// Value at `phase` in `[0, 1)`.
    pub fn sample(&self, phase: f32) -> f32 {
        match self {
            Waveform::Sine => (TAU * phase).sin(),
            Waveform::Triangle => 1.0 - 4.0 * (phase - 0.5).abs(),
            Waveform::Square => {
                if phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Sawtooth => 2.0 * phase - 1.0,
        }
    }
}

/// Frequency multiplier for a detune in cents.
pub fn cents_to_ratio(cents: f32) -> f32 {
    2f32.powf(cents / 1200.0)
}

#[derive(Debug, Clone)]
pub struct Oscillator {
    waveform: Waveform,
    sample_rate: f32,
    phase: f32,
    detune_ratio: f32,
}

impl Oscillator {
    pub fn new(waveform: Waveform, sample_rate: u32) -> Self {
        Self {
            waveform,
            sample_rate: sample_rate as f32,
            phase: 0.0,
            detune_ratio: 1.0,
        }
    }

    pub fn with_detune(mut self, cents: f32) -> Self {
        self.detune_ratio = cents_to_ratio(cents);
        self
    }

    /// Emits one sample at `frequency` Hz and advances the phase.
    pub fn next_sample(&mut self, frequency: f32) -> f32 {
        let value = self.waveform.sample(self.phase);
        let step = frequency * self.detune_ratio / self.sample_rate;
        self.phase = (self.phase + step).rem_euclid(1.0);
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waveform_shapes() {
        assert!(Waveform::Sine.sample(0.25) > 0.999);
        assert_eq!(Waveform::Triangle.sample(0.5), 1.0);
        assert_eq!(Waveform::Triangle.sample(0.0), -1.0);
        assert_eq!(Waveform::Square.sample(0.75), -1.0);
        assert_eq!(Waveform::Sawtooth.sample(0.0), -1.0);
    }

    #[test]
    fn test_octave_detune() {
        assert!((cents_to_ratio(1200.0) - 2.0).abs() < 1e-6);
        assert!((cents_to_ratio(-1200.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_sine_period() {
        // 100 Hz at 800 Hz sample rate: 8 samples per cycle
        let mut osc = Oscillator::new(Waveform::Sine, 800);
        let samples: Vec<f32> = (0..9).map(|_| osc.next_sample(100.0)).collect();
        assert!(samples[0].abs() < 1e-6);
        assert!((samples[2] - 1.0).abs() < 1e-5);
        assert!(samples[8].abs() < 1e-4);
    }
}
