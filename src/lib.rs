//! # cvvc-rs
//!
//! A Rust library for building CVVC voicebank recordings out of consonant and
//! vowel clips.
//!
//! ## Features
//!
//! - **Syllable splicing**: consonant onset + vowel joined with an equal-power crossfade
//! - **Line synthesis**: syllables faded and chained into one recording per phrase-table line
//! - **Batch reporting**: failed lines collected into a timestamped error report
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! cvvc-rs = "2026.10"
//! ```
//!
//! ```ignore
//! use cvvc_rs::cvvc::{run, DirectoryClipSource, SpliceConfig};
//!
//! let config = SpliceConfig::builder()
//!     .consonant_dir("bank/consonants")
//!     .vowel_dir("bank/vowels")
//!     .output_dir("out")
//!     .build()?;
//!
//! let source = DirectoryClipSource::from_config(&config);
//! let summary = run(&config, &source)?;
//! println!("{} written, {} failed", summary.succeeded(), summary.failed());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cvvc;

use std::path::Path;

use serde::{Deserialize, Serialize};

use cvvc::SpliceError;

/// Sample layout of a clip.
///
/// Every clip combined in one operation must carry the same format; nothing
/// in the pipeline resamples or remixes channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipFormat {
    /// Channel count (1 for voicebank sources)
    pub channels: u16,
    /// Frames per second
    pub sample_rate: u32,
    /// Bytes per sample (2 for 16-bit PCM)
    pub sample_width: u16,
}

impl ClipFormat {
    /// 16-bit mono PCM at 44.1 kHz.
    pub const CD_MONO: ClipFormat = ClipFormat {
        channels: 1,
        sample_rate: 44_100,
        sample_width: 2,
    };

    /// Describe the first field that differs from `expected`, if any.
    pub fn mismatch(&self, expected: &ClipFormat) -> Option<String> {
        if self.sample_width != expected.sample_width {
            Some(format!(
                "sample width is {} bytes, expected {}",
                self.sample_width, expected.sample_width
            ))
        } else if self.channels != expected.channels {
            Some(format!(
                "{} channels, expected {}",
                self.channels, expected.channels
            ))
        } else if self.sample_rate != expected.sample_rate {
            Some(format!(
                "sample rate is {}Hz, expected {}Hz",
                self.sample_rate, expected.sample_rate
            ))
        } else {
            None
        }
    }
}

impl Default for ClipFormat {
    fn default() -> Self {
        Self::CD_MONO
    }
}

/// A 16-bit PCM clip together with its format parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioClip {
    /// Interleaved signed 16-bit samples
    pub samples: Vec<i16>,
    /// Layout of `samples`
    pub format: ClipFormat,
}

impl AudioClip {
    pub fn new(samples: Vec<i16>, format: ClipFormat) -> Self {
        Self { samples, format }
    }

    /// Number of frames (samples per channel).
    pub fn frame_count(&self) -> usize {
        self.samples.len() / usize::from(self.format.channels.max(1))
    }

    /// Duration of the audio in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.frame_count() as f64 / self.format.sample_rate as f64
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Write the clip to a 16-bit PCM WAV file.
    pub fn write_wav(&self, path: &Path) -> Result<(), SpliceError> {
        cvvc::wav::write_clip(path, self)
    }
}

/// Where syllable source clips come from.
///
/// The pipeline only asks for clips by token; the default implementation
/// ([`cvvc::DirectoryClipSource`]) resolves them to files in the configured
/// consonant and vowel directories.
pub trait ClipSource {
    /// Load the clip for a vowel token (e.g. `"a"`).
    fn load_vowel(&self, vowel: &str) -> Result<AudioClip, SpliceError>;

    /// Load the clip for a consonant onset (e.g. `"ky"`).
    fn load_consonant(&self, consonant: &str) -> Result<AudioClip, SpliceError>;
}
