use std::path::{Path, PathBuf};

use super::config::SpliceConfig;
use super::error::{ClipKind, SpliceError};
use super::fade::{crossfade, scaled_len};
use super::syllable::split_syllable;
use super::wav::read_clip;
use crate::{AudioClip, ClipFormat, ClipSource};

/// Loads bank clips from a consonant directory and a vowel directory.
///
/// Consonant `ky` resolves to `<consonant_dir>/ky-.wav` and vowel `a` to
/// `<vowel_dir>/a.wav`.
#[derive(Debug, Clone)]
pub struct DirectoryClipSource {
    consonant_dir: PathBuf,
    vowel_dir: PathBuf,
}

impl DirectoryClipSource {
    pub fn new(consonant_dir: impl Into<PathBuf>, vowel_dir: impl Into<PathBuf>) -> Self {
        Self {
            consonant_dir: consonant_dir.into(),
            vowel_dir: vowel_dir.into(),
        }
    }

    pub fn from_config(config: &SpliceConfig) -> Self {
        Self::new(&config.consonant_dir, &config.vowel_dir)
    }

    pub fn consonant_path(&self, consonant: &str) -> PathBuf {
        self.consonant_dir.join(format!("{consonant}-.wav"))
    }

    pub fn vowel_path(&self, vowel: &str) -> PathBuf {
        self.vowel_dir.join(format!("{vowel}.wav"))
    }
}

fn load_existing(kind: ClipKind, path: &Path) -> Result<AudioClip, SpliceError> {
    if !path.exists() {
        return Err(SpliceError::FileNotFound {
            kind,
            path: path.to_path_buf(),
        });
    }
    read_clip(path)
}

impl ClipSource for DirectoryClipSource {
    fn load_vowel(&self, vowel: &str) -> Result<AudioClip, SpliceError> {
        load_existing(ClipKind::Vowel, &self.vowel_path(vowel))
    }

    fn load_consonant(&self, consonant: &str) -> Result<AudioClip, SpliceError> {
        load_existing(ClipKind::Consonant, &self.consonant_path(consonant))
    }
}

/// Build the audio for one syllable token.
///
/// A bare vowel is returned exactly as loaded. A consonant + vowel pair keeps
/// the first `consonant_keep_fraction` of the consonant verbatim and
/// crossfades the rest of it into the whole vowel clip. Both clips of a pair
/// must match `config.format`.
///
/// No fade-out is applied here; [`super::line::synthesize_line`] does that.
pub fn synthesize_syllable(
    token: &str,
    config: &SpliceConfig,
    source: &dyn ClipSource,
) -> Result<AudioClip, SpliceError> {
    let syllable = split_syllable(token, &config.vowel_set)?;

    let Some(consonant) = syllable.consonant else {
        let clip = source.load_vowel(&syllable.vowel)?;
        log::info!("Loaded vowel: {token}");
        return Ok(clip);
    };

    let consonant_clip = source.load_consonant(&consonant)?;
    let vowel_clip = source.load_vowel(&syllable.vowel)?;
    check_format(token, ClipKind::Consonant, &consonant_clip.format, &config.format)?;
    check_format(token, ClipKind::Vowel, &vowel_clip.format, &config.format)?;

    let samples = splice(
        &consonant_clip.samples,
        &vowel_clip.samples,
        config.consonant_keep_fraction,
        config.consonant_vowel_crossfade,
    );
    log::info!("Processed: {token}");
    Ok(AudioClip::new(samples, consonant_clip.format))
}

fn check_format(
    token: &str,
    kind: ClipKind,
    actual: &ClipFormat,
    expected: &ClipFormat,
) -> Result<(), SpliceError> {
    match actual.mismatch(expected) {
        Some(reason) => Err(SpliceError::FormatMismatch {
            syllable: token.to_string(),
            reason: format!("{} clip {reason}", kind.to_string().to_lowercase()),
        }),
        None => Ok(()),
    }
}

/// `consonant[..keep] ++ crossfade(consonant[keep..], vowel)`.
pub fn splice(consonant: &[i16], vowel: &[i16], keep_fraction: f64, crossfade_fraction: f64) -> Vec<i16> {
    let keep = scaled_len(consonant.len(), keep_fraction).min(consonant.len());
    let (head, tail) = consonant.split_at(keep);

    let joined = crossfade(tail, vowel, crossfade_fraction);
    let mut out = Vec::with_capacity(head.len() + joined.len());
    out.extend_from_slice(head);
    out.extend_from_slice(&joined);
    out
}
