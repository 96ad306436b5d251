//! RBJ biquad and one-pole filters.

use std::f32::consts::{PI, TAU};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    LowPass,
    HighPass,
    BandPass,
}

/// Direct form I biquad with coefficients from the RBJ audio EQ cookbook.
#[derive(Debug, Clone)]
pub struct Biquad {
    kind: FilterKind,
    sample_rate: f32,
    b0: f32,
    b1: f32,
    b2: f32,
    a1: f32,
    a2: f32,
    x1: f32,
    x2: f32,
    y1: f32,
    y2: f32,
}

impl Biquad {
    pub fn new(kind: FilterKind, sample_rate: u32, cutoff: f32, q: f32) -> Self {
        let mut filter = Self {
            kind,
            sample_rate: sample_rate as f32,
            b0: 1.0,
            b1: 0.0,
            b2: 0.0,
            a1: 0.0,
            a2: 0.0,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
        };
        filter.set_params(cutoff, q);
        filter
    }

    /// Recomputes coefficients. State is kept so sweeps stay click free.
    pub fn set_params(&mut self, cutoff: f32, q: f32) {
        let nyquist = self.sample_rate / 2.0;
        let cutoff = cutoff.clamp(10.0, nyquist * 0.99);
        let q = q.max(0.01);

        let w0 = TAU * cutoff / self.sample_rate;
        let (sin_w0, cos_w0) = w0.sin_cos();
        let alpha = sin_w0 / (2.0 * q);

        let (b0, b1, b2) = match self.kind {
            FilterKind::LowPass => {
                let b1 = 1.0 - cos_w0;
                (b1 / 2.0, b1, b1 / 2.0)
            }
            FilterKind::HighPass => {
                let b1 = -(1.0 + cos_w0);
                (-b1 / 2.0, b1, -b1 / 2.0)
            }
            FilterKind::BandPass => (alpha, 0.0, -alpha),
        };
        let a0 = 1.0 + alpha;

        self.b0 = b0 / a0;
        self.b1 = b1 / a0;
        self.b2 = b2 / a0;
        self.a1 = -2.0 * cos_w0 / a0;
        self.a2 = (1.0 - alpha) / a0;
    }

    pub fn process(&mut self, x: f32) -> f32 {
        let y = self.b0 * x + self.b1 * self.x1 + self.b2 * self.x2
            - self.a1 * self.y1
            - self.a2 * self.y2;
        self.x2 = self.x1;
        self.x1 = x;
        self.y2 = self.y1;
        self.y1 = y;
        y
    }
}

/// Single-pole lowpass, `y += a * (x - y)`.
#[derive(Debug, Clone)]
pub struct OnePole {
    a: f32,
    y: f32,
}

impl OnePole {
    pub fn new(sample_rate: u32, cutoff: f32) -> Self {
        let a = 1.0 - (-2.0 * PI * cutoff / sample_rate as f32).exp();
        Self { a, y: 0.0 }
    }

    pub fn process(&mut self, x: f32) -> f32 {
        self.y += self.a * (x - self.y);
        self.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oscillator::{Oscillator, Waveform};

    fn rms_through(filter: &mut Biquad, frequency: f32) -> f32 {
        let mut osc = Oscillator::new(Waveform::Sine, 44_100);
        // skip the transient
        for _ in 0..4410 {
            filter.process(osc.next_sample(frequency));
        }
        let n = 8820;
        let energy: f32 = (0..n)
            .map(|_| filter.process(osc.next_sample(frequency)).powi(2))
            .sum();
        (energy / n as f32).sqrt()
    }

    #[test]
    fn test_lowpass_passes_low_and_cuts_high() {
        let low = rms_through(&mut Biquad::new(FilterKind::LowPass, 44_100, 1000.0, 0.707), 100.0);
        let high = rms_through(&mut Biquad::new(FilterKind::LowPass, 44_100, 1000.0, 0.707), 10_000.0);
        assert!(low > 0.6);
        assert!(high < 0.05);
    }

    #[test]
    fn test_highpass_cuts_low() {
        let low = rms_through(&mut Biquad::new(FilterKind::HighPass, 44_100, 2000.0, 0.707), 50.0);
        assert!(low < 0.01);
    }

    #[test]
    fn test_bandpass_peaks_at_center() {
        let center = rms_through(&mut Biquad::new(FilterKind::BandPass, 44_100, 1000.0, 2.0), 1000.0);
        let off = rms_through(&mut Biquad::new(FilterKind::BandPass, 44_100, 1000.0, 2.0), 8000.0);
        assert!(center > off * 4.0);
    }

    #[test]
    fn test_one_pole_settles_on_dc() {
        let mut filter = OnePole::new(44_100, 100.0);
        let mut y = 0.0;
        for _ in 0..44_100 {
            y = filter.process(1.0);
        }
        assert!((y - 1.0).abs() < 1e-3);
    }
}
