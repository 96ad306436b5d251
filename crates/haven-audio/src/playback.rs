//! Playback through the default output device.

use std::time::Duration;

use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, Sink, Source};

use crate::ambient::AmbientStream;
use crate::error::{AudioError, Result};

impl Source for AmbientStream {
    fn current_frame_len(&self) -> Option<usize> {
        None
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        AmbientStream::sample_rate(self)
    }

    fn total_duration(&self) -> Option<Duration> {
        None
    }
}

fn open_sink() -> Result<(OutputStream, Sink)> {
    let (stream, handle) = OutputStream::try_default()
        .map_err(|e| AudioError::Output(format!("failed to open output device: {e}")))?;
    let sink = Sink::try_new(&handle)
        .map_err(|e| AudioError::Output(format!("failed to create sink: {e}")))?;
    Ok((stream, sink))
}

/// Plays a rendered buffer and blocks until it finishes.
pub fn play_samples(samples: Vec<f32>, sample_rate: u32) -> Result<()> {
    let (_stream, sink) = open_sink()?;
    sink.append(SamplesBuffer::new(1, sample_rate, samples));
    sink.sleep_until_end();
    Ok(())
}

/// Plays an ambient stream for `duration` and blocks until it ends.
pub fn play_ambient(stream: AmbientStream, duration: Duration) -> Result<()> {
    tracing::info!("playing {} for {:?}", stream.preset().label(), duration);
    let (_stream, sink) = open_sink()?;
    sink.append(stream.take_duration(duration));
    sink.sleep_until_end();
    Ok(())
}
