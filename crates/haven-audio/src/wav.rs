//! 16-bit PCM mono WAV encoding.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{AudioError, Result};

const HEADER_LEN: usize = 44;

/// Encodes samples in `[-1, 1]` as a RIFF/WAVE file.
///
/// Fails when the data chunk would not fit the 32-bit RIFF size fields.
pub fn encode_wav(samples: &[f32], sample_rate: u32) -> Result<Vec<u8>> {
    let data_len = samples
        .len()
        .checked_mul(2)
        .and_then(|len| u32::try_from(len).ok())
        .filter(|len| len.checked_add(36).is_some())
        .ok_or_else(|| {
            AudioError::InvalidParameter(format!(
                "{} samples exceed the WAV size limit",
                samples.len()
            ))
        })?;
    let byte_rate = sample_rate.checked_mul(2).ok_or_else(|| {
        AudioError::InvalidParameter(format!("sample rate {sample_rate} Hz is too high"))
    })?;

    let mut bytes = Vec::with_capacity(HEADER_LEN + data_len as usize);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");

    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
    bytes.extend_from_slice(&1u16.to_le_bytes()); // mono
    bytes.extend_from_slice(&sample_rate.to_le_bytes());
    bytes.extend_from_slice(&byte_rate.to_le_bytes());
    bytes.extend_from_slice(&2u16.to_le_bytes()); // block align
    bytes.extend_from_slice(&16u16.to_le_bytes());

    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());
    for sample in samples {
        let pcm = (sample.clamp(-1.0, 1.0) * i16::MAX as f32).round() as i16;
        bytes.extend_from_slice(&pcm.to_le_bytes());
    }
    Ok(bytes)
}

/// Writes a WAV file through a temp file in the same directory.
///
/// The target is only replaced once the whole file is on disk.
pub fn write_wav(path: impl AsRef<Path>, samples: &[f32], sample_rate: u32) -> Result<()> {
    let path = path.as_ref();
    let bytes = encode_wav(samples, sample_rate)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let tmp_path = temp_path(path)?;
    let written = File::create(&tmp_path).and_then(|mut file| {
        file.write_all(&bytes)?;
        file.sync_all()
    });
    if let Err(e) = written.and_then(|()| std::fs::rename(&tmp_path, path)) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    tracing::info!(
        "wrote {} samples at {} Hz to {}",
        samples.len(),
        sample_rate,
        path.display()
    );
    Ok(())
}

fn temp_path(path: &Path) -> Result<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        AudioError::InvalidParameter(format!("'{}' is not a file path", path.display()))
    })?;
    let mut tmp_name = std::ffi::OsString::from(".");
    tmp_name.push(name);
    tmp_name.push(".tmp");
    Ok(path.with_file_name(tmp_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn u32_at(bytes: &[u8], at: usize) -> u32 {
        u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
    }

    #[test]
    fn test_header_fields() {
        let bytes = encode_wav(&[0.0; 100], 22_050).unwrap();
        assert_eq!(bytes.len(), 44 + 200);
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(u32_at(&bytes, 4), 236);
        assert_eq!(&bytes[8..16], b"WAVEfmt ");
        assert_eq!(u32_at(&bytes, 24), 22_050);
        assert_eq!(u32_at(&bytes, 28), 44_100);
        assert_eq!(&bytes[36..40], b"data");
        assert_eq!(u32_at(&bytes, 40), 200);
    }

    #[test]
    fn test_samples_are_clamped_to_full_scale() {
        let bytes = encode_wav(&[1.0, -1.0, 2.0, 0.5], 8_000).unwrap();
        let pcm: Vec<i16> = bytes[44..]
            .chunks(2)
            .map(|c| i16::from_le_bytes([c[0], c[1]]))
            .collect();
        assert_eq!(pcm, vec![i16::MAX, -i16::MAX, i16::MAX, 16_384]);
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sounds/rain.wav");
        write_wav(&path, &[0.1; 10], 8_000).unwrap();
        assert_eq!(std::fs::read(&path).unwrap().len(), 64);
        assert!(!temp_dir.path().join("sounds/.rain.wav.tmp").exists());
    }

    #[test]
    fn test_overwrite_replaces_whole_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pop.wav");
        write_wav(&path, &[0.1; 100], 8_000).unwrap();
        write_wav(&path, &[0.1; 10], 8_000).unwrap();
        assert_eq!(std::fs::read(&path).unwrap().len(), 64);
    }

    #[test]
    fn test_directory_target_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        assert!(write_wav(temp_dir.path().join(".."), &[0.0; 4], 8_000).is_err());
    }
}
