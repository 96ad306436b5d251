use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Subcommand;
use haven_audio::{AmbientPreset, AmbientStream, SoundEffect, render_effect, write_wav};

use super::context::AppContext;

#[derive(Subcommand)]
pub enum SoundAction {
    /// Render an ambient soundscape to a WAV file
    Render {
        /// rain, waves, wind, forest or white
        preset: String,
        /// Length in seconds, at most one hour
        #[arg(long, default_value_t = 30.0)]
        seconds: f32,
        #[arg(long)]
        out: PathBuf,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Render a feedback sound to a WAV file
    Effect {
        /// pop, balloon, flip, match, send or receive
        name: String,
        #[arg(long)]
        out: PathBuf,
    },
    /// Play an ambient soundscape
    #[cfg(feature = "playback")]
    Play {
        preset: String,
        #[arg(long, default_value_t = 60)]
        seconds: u64,
    },
    /// List available sounds
    List,
}

pub async fn run(ctx: &AppContext, action: SoundAction) -> Result<()> {
    let sample_rate = ctx.config.audio.sample_rate;
    let volume = ctx.config.audio.volume;

    match action {
        SoundAction::Render {
            preset,
            seconds,
            out,
            seed,
        } => {
            let preset: AmbientPreset =
                preset.parse().with_context(|| format!("Unknown sound '{preset}'"))?;
            let seed = seed.unwrap_or_else(rand::random);
            let samples = tokio::task::spawn_blocking(move || -> Result<Vec<f32>> {
                let mut stream = AmbientStream::new(preset, sample_rate, seed)?.with_volume(volume);
                Ok(stream.render(seconds)?)
            })
            .await??;
            write_wav(&out, &samples, sample_rate)?;
            println!("{} ({seconds}s) written to {}", preset.label(), out.display());
        }
        SoundAction::Effect { name, out } => {
            let effect: SoundEffect =
                name.parse().with_context(|| format!("Unknown effect '{name}'"))?;
            let samples = render_effect(effect, sample_rate, &mut rand::thread_rng())?;
            write_wav(&out, &samples, sample_rate)?;
            println!("{effect} written to {}", out.display());
        }
        #[cfg(feature = "playback")]
        SoundAction::Play { preset, seconds } => {
            let preset: AmbientPreset =
                preset.parse().with_context(|| format!("Unknown sound '{preset}'"))?;
            let stream = AmbientStream::new(preset, sample_rate, rand::random())?.with_volume(volume);
            println!("Playing {} for {seconds}s...", preset.label());
            tokio::task::spawn_blocking(move || {
                haven_audio::playback::play_ambient(stream, std::time::Duration::from_secs(seconds))
            })
            .await??;
        }
        SoundAction::List => {
            println!("Ambient:");
            for preset in AmbientPreset::all() {
                println!("  {:<8} {}", preset.to_string(), preset.label());
            }
            println!("Effects:");
            let names: Vec<String> = SoundEffect::all().map(|e| e.to_string()).collect();
            println!("  {}", names.join(", "));
        }
    }

    Ok(())
}
