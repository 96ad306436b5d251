//! Short feedback sounds for the stress relief games and chat.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::ambient::validate_sample_rate;
use crate::automation::ParamTimeline;
use crate::error::Result;
use crate::oscillator::{Oscillator, Waveform};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SoundEffect {
    /// Bubble pop.
    Pop,
    /// Balloon burst.
    Balloon,
    /// Memory card flip.
    Flip,
    /// Memory pair found.
    Match,
    /// Chat message sent.
    Send,
    /// Chat reply received.
    Receive,
}

impl SoundEffect {
    pub fn all() -> impl Iterator<Item = SoundEffect> {
        SoundEffect::iter()
    }

    /// Game sounds get a random pitch offset to reduce ear fatigue.
    pub fn is_detuned(&self) -> bool {
        matches!(
            self,
            SoundEffect::Pop | SoundEffect::Balloon | SoundEffect::Flip | SoundEffect::Match
        )
    }

    fn voices(&self) -> Vec<VoiceSpec> {
        match self {
            SoundEffect::Pop => vec![VoiceSpec {
                waveform: Waveform::Sine,
                frequency: ParamTimeline::new(800.0)
                    .set_value_at(800.0, 0.0)
                    .exponential_ramp_to(100.0, 0.1),
                gain: ParamTimeline::new(0.3)
                    .set_value_at(0.3, 0.0)
                    .exponential_ramp_to(0.01, 0.1),
                stop: 0.1,
            }],
            SoundEffect::Balloon => vec![VoiceSpec {
                waveform: Waveform::Triangle,
                frequency: ParamTimeline::new(200.0)
                    .set_value_at(200.0, 0.0)
                    .linear_ramp_to(50.0, 0.15),
                gain: ParamTimeline::new(0.2)
                    .set_value_at(0.2, 0.0)
                    .linear_ramp_to(0.01, 0.15),
                stop: 0.15,
            }],
            SoundEffect::Flip => vec![VoiceSpec {
                waveform: Waveform::Sine,
                frequency: ParamTimeline::new(400.0).set_value_at(400.0, 0.0),
                gain: ParamTimeline::new(0.1)
                    .set_value_at(0.1, 0.0)
                    .exponential_ramp_to(0.01, 0.05),
                stop: 0.05,
            }],
            SoundEffect::Match => vec![VoiceSpec {
                waveform: Waveform::Sine,
                frequency: ParamTimeline::new(400.0)
                    .set_value_at(400.0, 0.0)
                    .set_value_at(600.0, 0.1),
                gain: ParamTimeline::new(0.1)
                    .set_value_at(0.1, 0.0)
                    .linear_ramp_to(0.0, 0.3),
                stop: 0.3,
            }],
            SoundEffect::Send => vec![VoiceSpec {
                waveform: Waveform::Sine,
                frequency: ParamTimeline::new(600.0)
                    .set_value_at(600.0, 0.0)
                    .exponential_ramp_to(1200.0, 0.1),
                gain: ParamTimeline::new(0.05)
                    .set_value_at(0.05, 0.0)
                    .exponential_ramp_to(0.001, 0.1),
                stop: 0.1,
            }],
            SoundEffect::Receive => vec![
                // C5 with a C6 overtone
                VoiceSpec {
                    waveform: Waveform::Sine,
                    frequency: ParamTimeline::new(523.25),
                    gain: ParamTimeline::new(0.0)
                        .set_value_at(0.0, 0.0)
                        .linear_ramp_to(0.05, 0.02)
                        .exponential_ramp_to(0.001, 0.5),
                    stop: 0.5,
                },
                VoiceSpec {
                    waveform: Waveform::Sine,
                    frequency: ParamTimeline::new(1046.5),
                    gain: ParamTimeline::new(0.0)
                        .set_value_at(0.0, 0.0)
                        .linear_ramp_to(0.02, 0.02)
                        .exponential_ramp_to(0.001, 0.3),
                    stop: 0.5,
                },
            ],
        }
    }
}

struct VoiceSpec {
    waveform: Waveform,
    frequency: ParamTimeline,
    gain: ParamTimeline,
    /// Seconds after which the voice is silent.
    stop: f32,
}

/// Renders `effect` with a detune drawn from `rng` when the effect uses one.
pub fn render_effect<R: Rng + ?Sized>(
    effect: SoundEffect,
    sample_rate: u32,
    rng: &mut R,
) -> Result<Vec<f32>> {
    validate_sample_rate(sample_rate)?;

    let detune = if effect.is_detuned() {
        rng.gen_range(-100.0f32..100.0)
    } else {
        0.0
    };

    let voices = effect.voices();
    let duration = voices.iter().map(|v| v.stop).fold(0.0, f32::max);
    let rate = sample_rate as f32;
    let length = (duration * rate).round() as usize;

    let mut buffer = vec![0.0f32; length];
    for voice in voices {
        let mut osc = Oscillator::new(voice.waveform, sample_rate).with_detune(detune);
        let end = ((voice.stop * rate).round() as usize).min(length);
        for (i, sample) in buffer.iter_mut().enumerate().take(end) {
            let t = i as f32 / rate;
            *sample += osc.next_sample(voice.frequency.value_at(t)) * voice.gain.value_at(t);
        }
    }

    for sample in &mut buffer {
        *sample = sample.clamp(-1.0, 1.0);
    }
    Ok(buffer)
}

/// Deterministic variant of [`render_effect`].
pub fn render_effect_seeded(effect: SoundEffect, sample_rate: u32, seed: u64) -> Result<Vec<f32>> {
    render_effect(effect, sample_rate, &mut StdRng::seed_from_u64(seed))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATE: u32 = 44_100;

    fn peak(samples: &[f32]) -> f32 {
        samples.iter().fold(0.0, |m, s| m.max(s.abs()))
    }

    #[test]
    fn test_durations() {
        let expected = [
            (SoundEffect::Pop, 0.1),
            (SoundEffect::Balloon, 0.15),
            (SoundEffect::Flip, 0.05),
            (SoundEffect::Match, 0.3),
            (SoundEffect::Send, 0.1),
            (SoundEffect::Receive, 0.5),
        ];
        for (effect, seconds) in expected {
            let samples = render_effect_seeded(effect, RATE, 1).unwrap();
            assert_eq!(samples.len(), (seconds * RATE as f32).round() as usize, "{effect}");
        }
    }

    #[test]
    fn test_levels_follow_envelopes() {
        for effect in SoundEffect::all() {
            let samples = render_effect_seeded(effect, RATE, 9).unwrap();
            assert!(samples.iter().all(|s| (-1.0..=1.0).contains(s)));
            assert!(peak(&samples) > 0.01, "{effect} is silent");
        }
        assert!(peak(&render_effect_seeded(SoundEffect::Pop, RATE, 9).unwrap()) <= 0.3);
        assert!(peak(&render_effect_seeded(SoundEffect::Send, RATE, 9).unwrap()) <= 0.05);
    }

    #[test]
    fn test_game_sounds_are_detuned_per_seed() {
        let a = render_effect_seeded(SoundEffect::Pop, RATE, 1).unwrap();
        let b = render_effect_seeded(SoundEffect::Pop, RATE, 2).unwrap();
        assert_ne!(a, b);
        assert_eq!(a, render_effect_seeded(SoundEffect::Pop, RATE, 1).unwrap());

        let send_a = render_effect_seeded(SoundEffect::Send, RATE, 1).unwrap();
        let send_b = render_effect_seeded(SoundEffect::Send, RATE, 2).unwrap();
        assert_eq!(send_a, send_b);
    }
}
