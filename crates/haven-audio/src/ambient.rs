//! Procedural ambient soundscapes for the sleep sounds tool.
//!
//! Every preset is an endless mono stream built from seeded noise, filters
//! and slow modulators. Two streams with the same preset, sample rate and
//! seed produce identical samples.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::automation::ParamTimeline;
use crate::error::{AudioError, Result};
use crate::filter::{Biquad, FilterKind, OnePole};
use crate::lfo::Lfo;
use crate::noise::{NoiseColor, NoiseGenerator};
use crate::oscillator::{Oscillator, Waveform};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AmbientPreset {
    Rain,
    Waves,
    Wind,
    Forest,
    White,
}

impl AmbientPreset {
    pub fn label(&self) -> &'static str {
        match self {
            AmbientPreset::Rain => "Gentle Rain",
            AmbientPreset::Waves => "Ocean Waves",
            AmbientPreset::Wind => "Soft Wind",
            AmbientPreset::Forest => "Forest Birds",
            AmbientPreset::White => "White Noise",
        }
    }

    pub fn all() -> impl Iterator<Item = AmbientPreset> {
        AmbientPreset::iter()
    }
}

/// Longest buffer `AmbientStream::render` produces, one hour.
pub const MAX_RENDER_SECONDS: f32 = 3600.0;

/// Endless mono sample stream for one preset.
pub struct AmbientStream {
    preset: AmbientPreset,
    sample_rate: u32,
    volume: f32,
    voice: Voice,
}

impl AmbientStream {
    pub fn new(preset: AmbientPreset, sample_rate: u32, seed: u64) -> Result<Self> {
        validate_sample_rate(sample_rate)?;
        tracing::debug!("ambient stream {} at {} Hz (seed {})", preset, sample_rate, seed);
        Ok(Self {
            preset,
            sample_rate,
            volume: 1.0,
            voice: Voice::new(preset, sample_rate, seed),
        })
    }

    /// Output gain, clamped to `[0, 1]`.
    pub fn with_volume(mut self, volume: f32) -> Self {
        self.volume = volume.clamp(0.0, 1.0);
        self
    }

    pub fn preset(&self) -> AmbientPreset {
        self.preset
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Pulls the next `seconds` of audio into a buffer.
    ///
    /// `seconds` must be finite and within `(0, MAX_RENDER_SECONDS]`.
    pub fn render(&mut self, seconds: f32) -> Result<Vec<f32>> {
        if !seconds.is_finite() || seconds <= 0.0 || seconds > MAX_RENDER_SECONDS {
            return Err(AudioError::InvalidParameter(format!(
                "render length {seconds}s is outside (0, {MAX_RENDER_SECONDS}]"
            )));
        }
        let count = (f64::from(seconds) * f64::from(self.sample_rate)).round() as usize;
        Ok(self.by_ref().take(count).collect())
    }
}

impl Iterator for AmbientStream {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        Some((self.voice.next_sample() * self.volume).clamp(-1.0, 1.0))
    }
}

pub(crate) fn validate_sample_rate(sample_rate: u32) -> Result<()> {
    if !(8_000..=192_000).contains(&sample_rate) {
        return Err(AudioError::InvalidParameter(format!(
            "sample rate {sample_rate} Hz is outside 8000..=192000"
        )));
    }
    Ok(())
}

enum Voice {
    Rain(Rain),
    Waves(Waves),
    Wind(Wind),
    Forest(Forest),
    White(NoiseGenerator),
}

impl Voice {
    fn new(preset: AmbientPreset, sample_rate: u32, seed: u64) -> Self {
        match preset {
            AmbientPreset::Rain => Voice::Rain(Rain::new(sample_rate, seed)),
            AmbientPreset::Waves => Voice::Waves(Waves::new(sample_rate, seed)),
            AmbientPreset::Wind => Voice::Wind(Wind::new(sample_rate, seed)),
            AmbientPreset::Forest => Voice::Forest(Forest::new(sample_rate, seed)),
            AmbientPreset::White => Voice::White(NoiseGenerator::new(NoiseColor::White, seed)),
        }
    }

    fn next_sample(&mut self) -> f32 {
        match self {
            Voice::Rain(v) => v.next_sample(),
            Voice::Waves(v) => v.next_sample(),
            Voice::Wind(v) => v.next_sample(),
            Voice::Forest(v) => v.next_sample(),
            Voice::White(v) => v.next_sample() * 0.5,
        }
    }
}

/// Filtered pink bed with scattered droplets.
struct Rain {
    bed: NoiseGenerator,
    highpass: Biquad,
    lowpass: Biquad,
    rng: StdRng,
    drop_chance: f32,
    drop_level: f32,
    drop_decay: f32,
    drop_filter: Biquad,
}

impl Rain {
    const DROPS_PER_SECOND: f32 = 18.0;

    fn new(sample_rate: u32, seed: u64) -> Self {
        Self {
            bed: NoiseGenerator::new(NoiseColor::Pink, seed),
            highpass: Biquad::new(FilterKind::HighPass, sample_rate, 400.0, 0.7),
            lowpass: Biquad::new(FilterKind::LowPass, sample_rate, 6000.0, 0.7),
            rng: StdRng::seed_from_u64(seed.wrapping_add(1)),
            drop_chance: Self::DROPS_PER_SECOND / sample_rate as f32,
            drop_level: 0.0,
            drop_decay: (-1.0 / (0.012 * sample_rate as f32)).exp(),
            drop_filter: Biquad::new(FilterKind::BandPass, sample_rate, 2800.0, 3.0),
        }
    }

    fn next_sample(&mut self) -> f32 {
        let bed = self.lowpass.process(self.highpass.process(self.bed.next_sample()));

        if self.rng.gen_range(0.0f32..1.0) < self.drop_chance {
            self.drop_level = self.rng.gen_range(0.2f32..0.6);
        }
        self.drop_level *= self.drop_decay;
        let click = self.rng.gen_range(-1.0f32..1.0) * self.drop_level;
        let drop = self.drop_filter.process(click);

        bed * 0.6 + drop * 0.8
    }
}

/// Brown noise with a slow swell opening the filter and the level together.
struct Waves {
    noise: NoiseGenerator,
    filter: Biquad,
    swell: Lfo,
}

impl Waves {
    const LOW_CUTOFF: f32 = 250.0;
    const HIGH_CUTOFF: f32 = 1100.0;

    fn new(sample_rate: u32, seed: u64) -> Self {
        Self {
            noise: NoiseGenerator::new(NoiseColor::Brown, seed),
            filter: Biquad::new(FilterKind::LowPass, sample_rate, Self::LOW_CUTOFF, 0.8),
            // start at the trough so the stream fades in
            swell: Lfo::between(sample_rate, 0.08, Self::LOW_CUTOFF, Self::HIGH_CUTOFF)
                .with_phase(0.75),
        }
    }

    fn next_sample(&mut self) -> f32 {
        let cutoff = self.swell.next_value();
        self.filter.set_params(cutoff, 0.8);
        let depth = (cutoff - Self::LOW_CUTOFF) / (Self::HIGH_CUTOFF - Self::LOW_CUTOFF);
        let level = 0.35 + 0.65 * depth;
        self.filter.process(self.noise.next_sample()) * level * 1.4
    }
}

/// Pink noise through a wandering band-pass, with gusts.
struct Wind {
    noise: NoiseGenerator,
    filter: Biquad,
    sweep: Lfo,
    gust: Lfo,
    smoothing: OnePole,
}

impl Wind {
    fn new(sample_rate: u32, seed: u64) -> Self {
        Self {
            noise: NoiseGenerator::new(NoiseColor::Pink, seed),
            filter: Biquad::new(FilterKind::BandPass, sample_rate, 500.0, 2.0),
            sweep: Lfo::between(sample_rate, 0.05, 300.0, 900.0),
            gust: Lfo::between(sample_rate, 0.11, 0.3, 1.0).with_phase(0.25),
            smoothing: OnePole::new(sample_rate, 4000.0),
        }
    }

    fn next_sample(&mut self) -> f32 {
        self.filter.set_params(self.sweep.next_value(), 2.0);
        let gust = self.gust.next_value();
        let band = self.filter.process(self.noise.next_sample());
        self.smoothing.process(band) * gust * 1.8
    }
}

/// A single bird call: a short pitch sweep under an envelope.
struct Chirp {
    osc: Oscillator,
    frequency: ParamTimeline,
    gain: ParamTimeline,
    elapsed: u32,
    length: u32,
}

/// Leaf rustle bed with randomly timed bird chirps.
struct Forest {
    sample_rate: u32,
    rustle: NoiseGenerator,
    rustle_filter: Biquad,
    rng: StdRng,
    until_next_chirp: u32,
    chirp: Option<Chirp>,
}

impl Forest {
    const CHIRP_SECONDS: f32 = 0.13;

    fn new(sample_rate: u32, seed: u64) -> Self {
        let mut forest = Self {
            sample_rate,
            rustle: NoiseGenerator::new(NoiseColor::Brown, seed),
            rustle_filter: Biquad::new(FilterKind::LowPass, sample_rate, 700.0, 0.7),
            rng: StdRng::seed_from_u64(seed.wrapping_add(1)),
            until_next_chirp: 0,
            chirp: None,
        };
        let first = forest.rng.gen_range(0.3f32..1.5);
        forest.until_next_chirp = forest.seconds(first);
        forest
    }

    fn seconds(&self, seconds: f32) -> u32 {
        (seconds * self.sample_rate as f32) as u32
    }

    fn start_chirp(&mut self) -> Chirp {
        let base = self.rng.gen_range(2200.0f32..3800.0);
        Chirp {
            osc: Oscillator::new(Waveform::Sine, self.sample_rate),
            frequency: ParamTimeline::new(base)
                .set_value_at(base, 0.0)
                .exponential_ramp_to(base * 1.4, 0.06)
                .exponential_ramp_to(base * 0.9, Self::CHIRP_SECONDS - 0.01),
            gain: ParamTimeline::new(0.0)
                .set_value_at(0.0, 0.0)
                .linear_ramp_to(0.22, 0.01)
                .exponential_ramp_to(0.001, Self::CHIRP_SECONDS),
            elapsed: 0,
            length: self.seconds(Self::CHIRP_SECONDS),
        }
    }

    fn next_sample(&mut self) -> f32 {
        let rustle = self.rustle_filter.process(self.rustle.next_sample()) * 0.5;

        if self.chirp.is_none() {
            if self.until_next_chirp == 0 {
                self.chirp = Some(self.start_chirp());
                // birds often call twice in quick succession
                let gap = if self.rng.gen_bool(0.5) {
                    self.rng.gen_range(0.15f32..0.3)
                } else {
                    self.rng.gen_range(0.8f32..3.0)
                };
                self.until_next_chirp = self.seconds(gap);
            } else {
                self.until_next_chirp -= 1;
            }
        }

        let sample_rate = self.sample_rate as f32;
        let bird = match self.chirp.as_mut() {
            Some(chirp) => {
                let t = chirp.elapsed as f32 / sample_rate;
                let value = chirp.osc.next_sample(chirp.frequency.value_at(t)) * chirp.gain.value_at(t);
                chirp.elapsed += 1;
                if chirp.elapsed >= chirp.length {
                    self.chirp = None;
                }
                value
            }
            None => 0.0,
        };

        rustle + bird
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const RATE: u32 = 22_050;

    #[test]
    fn test_every_preset_stays_in_range() {
        for preset in AmbientPreset::all() {
            let samples = AmbientStream::new(preset, RATE, 11).unwrap().render(3.0).unwrap();
            assert_eq!(samples.len(), 3 * RATE as usize);
            assert!(samples.iter().all(|s| (-1.0..=1.0).contains(s)), "{preset} clipped");
            assert!(samples.iter().any(|s| s.abs() > 1e-3), "{preset} is silent");
        }
    }

    #[test]
    fn test_same_seed_same_stream() {
        for preset in AmbientPreset::all() {
            let a = AmbientStream::new(preset, RATE, 5).unwrap().render(0.5).unwrap();
            let b = AmbientStream::new(preset, RATE, 5).unwrap().render(0.5).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_volume_scales_output() {
        let loud = AmbientStream::new(AmbientPreset::White, RATE, 1)
            .unwrap()
            .render(0.1)
            .unwrap();
        let quiet = AmbientStream::new(AmbientPreset::White, RATE, 1)
            .unwrap()
            .with_volume(0.5)
            .render(0.1)
            .unwrap();
        for (l, q) in loud.iter().zip(&quiet) {
            assert!((l * 0.5 - q).abs() < 1e-6);
        }
    }

    #[test]
    fn test_render_length_is_bounded() {
        let mut stream = AmbientStream::new(AmbientPreset::Wind, RATE, 3).unwrap();
        for seconds in [0.0, -1.0, f32::NAN, f32::INFINITY, MAX_RENDER_SECONDS + 1.0, 50_000.0] {
            assert!(
                matches!(stream.render(seconds), Err(AudioError::InvalidParameter(_))),
                "{seconds}s accepted"
            );
        }
        assert_eq!(stream.render(0.5).unwrap().len(), RATE as usize / 2);
    }

    #[test]
    fn test_rejects_bad_sample_rate() {
        assert!(matches!(
            AmbientStream::new(AmbientPreset::Rain, 0, 1),
            Err(AudioError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_preset_names() {
        assert_eq!(AmbientPreset::from_str("Waves").unwrap(), AmbientPreset::Waves);
        assert_eq!(AmbientPreset::Forest.to_string(), "forest");
        assert_eq!(AmbientPreset::all().count(), 5);
    }
}
