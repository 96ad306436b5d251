//! Procedural audio: ambient soundscapes and short feedback effects.
//!
//! Everything renders to mono `f32` samples in `[-1, 1]`. Buffers can be
//! written as WAV files; with the `playback` feature they can also be played
//! through the default output device.

pub mod ambient;
pub mod automation;
pub mod effects;
pub mod error;
pub mod filter;
pub mod lfo;
pub mod noise;
pub mod oscillator;
#[cfg(feature = "playback")]
pub mod playback;
pub mod wav;

pub use ambient::{AmbientPreset, AmbientStream, MAX_RENDER_SECONDS};
pub use effects::{SoundEffect, render_effect, render_effect_seeded};
pub use error::{AudioError, Result};
pub use wav::{encode_wav, write_wav};
