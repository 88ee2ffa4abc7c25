use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

use super::error::SpliceError;
use crate::{AudioClip, ClipFormat};

/// Read a 16-bit PCM WAV file.
///
/// Anything other than 16-bit integer samples is rejected with
/// [`SpliceError::UnsupportedFormat`]. Channel count and rate are passed
/// through untouched; callers decide whether they are acceptable.
pub fn read_clip(path: &Path) -> Result<AudioClip, SpliceError> {
    let reader = WavReader::open(path).map_err(|source| wav_error(path, source))?;
    let spec = reader.spec();

    if spec.bits_per_sample != 16 || spec.sample_format != SampleFormat::Int {
        return Err(SpliceError::UnsupportedFormat {
            path: path.to_path_buf(),
            bits: spec.bits_per_sample,
            float: spec.sample_format == SampleFormat::Float,
        });
    }

    let samples = reader
        .into_samples::<i16>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| wav_error(path, source))?;

    Ok(AudioClip::new(
        samples,
        ClipFormat {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            sample_width: spec.bits_per_sample / 8,
        },
    ))
}

/// Write a clip as 16-bit PCM using the clip's own format.
pub fn write_clip(path: &Path, clip: &AudioClip) -> Result<(), SpliceError> {
    if clip.format.sample_width != 2 {
        return Err(SpliceError::UnsupportedFormat {
            path: path.to_path_buf(),
            bits: clip.format.sample_width * 8,
            float: false,
        });
    }

    let spec = WavSpec {
        channels: clip.format.channels,
        sample_rate: clip.format.sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec).map_err(|source| wav_error(path, source))?;
    for &sample in &clip.samples {
        writer
            .write_sample(sample)
            .map_err(|source| wav_error(path, source))?;
    }
    writer.finalize().map_err(|source| wav_error(path, source))?;
    Ok(())
}

fn wav_error(path: &Path, source: hound::Error) -> SpliceError {
    match source {
        hound::Error::IoError(io) => SpliceError::Io(std::io::Error::new(
            io.kind(),
            format!("{}: {io}", path.display()),
        )),
        source => SpliceError::Wav {
            path: path.to_path_buf(),
            source,
        },
    }
}
