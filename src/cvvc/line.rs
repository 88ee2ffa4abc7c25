use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};

use super::config::SpliceConfig;
use super::error::{LineFailure, SpliceError};
use super::fade::{crossfade, fade_out};
use super::report::write_report;
use super::synth::synthesize_syllable;
use crate::{AudioClip, ClipSource};

/// Outcome of [`run`].
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Recordings written, in phrase-table order.
    pub written: Vec<PathBuf>,
    /// Lines that produced no output.
    pub failures: Vec<LineFailure>,
    /// Error report path, if one was written.
    pub report: Option<PathBuf>,
}

impl RunSummary {
    pub fn succeeded(&self) -> usize {
        self.written.len()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Build the recording for one phrase-table line.
///
/// Every syllable is synthesized, faded out over its last
/// `syllable_fadeout`, and the faded syllables are chained left to right with
/// a `line_crossfade` crossfade. The first failing syllable aborts the line.
pub fn synthesize_line(
    line: &str,
    config: &SpliceConfig,
    source: &dyn ClipSource,
) -> Result<AudioClip, SpliceError> {
    if line.trim().is_empty() {
        return Err(SpliceError::EmptyLine);
    }

    let mut syllables: Vec<AudioClip> = Vec::new();
    for token in line.split(config.delimiter) {
        let clip = synthesize_syllable(token, config, source).map_err(|e| e.in_syllable(token))?;

        if let Some(reason) = syllables.first().and_then(|first| clip.format.mismatch(&first.format)) {
            return Err(SpliceError::FormatMismatch {
                syllable: token.to_string(),
                reason: format!("differs from the first syllable of the line: {reason}"),
            });
        }

        let faded = fade_out(&clip.samples, config.syllable_fadeout);
        syllables.push(AudioClip::new(faded, clip.format));
    }

    let mut syllables = syllables.into_iter();
    let first = syllables.next().ok_or(SpliceError::EmptyLine)?;
    let format = first.format;
    let samples = syllables.fold(first.samples, |acc, next| {
        crossfade(&acc, &next.samples, config.line_crossfade)
    });

    Ok(AudioClip::new(samples, format))
}

/// Synthesize every phrase-table line into `config.output_dir`.
///
/// Failed lines are collected and written to an error report at the end; only
/// failing to create the output directory stops the run.
pub fn run(config: &SpliceConfig, source: &dyn ClipSource) -> Result<RunSummary, SpliceError> {
    run_with_clock(config, source, Local::now().naive_local())
}

/// [`run`] with an explicit timestamp for the error report name.
pub fn run_with_clock(
    config: &SpliceConfig,
    source: &dyn ClipSource,
    now: NaiveDateTime,
) -> Result<RunSummary, SpliceError> {
    std::fs::create_dir_all(&config.output_dir)?;
    log::info!(
        "Splicing {} lines into {}",
        config.phrase_table.len(),
        config.output_dir.display()
    );

    let mut summary = RunSummary::default();
    for line in &config.phrase_table {
        let written = synthesize_line(line, config, source).and_then(|clip| {
            let path = config.output_dir.join(format!("{line}.wav"));
            clip.write_wav(&path)?;
            Ok(path)
        });

        match written {
            Ok(path) => {
                log::info!("Generated: {}", path.display());
                summary.written.push(path);
            }
            Err(error) => {
                let failure = LineFailure {
                    line: line.clone(),
                    error,
                };
                log::warn!("{failure}");
                summary.failures.push(failure);
            }
        }
    }

    let messages: Vec<String> = summary.failures.iter().map(ToString::to_string).collect();
    summary.report = write_report(&config.output_dir, &messages, now);

    log::info!(
        "Processing complete! Successful: {}, Failed: {}",
        summary.succeeded(),
        summary.failed()
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cvvc::error::ClipKind;
    use crate::cvvc::fade::crossfade_len;
    use crate::ClipFormat;
    use std::collections::HashMap;

    struct Vowels(HashMap<String, AudioClip>);

    impl ClipSource for Vowels {
        fn load_vowel(&self, vowel: &str) -> Result<AudioClip, SpliceError> {
            self.0.get(vowel).cloned().ok_or_else(|| SpliceError::FileNotFound {
                kind: ClipKind::Vowel,
                path: PathBuf::from(format!("{vowel}.wav")),
            })
        }

        fn load_consonant(&self, consonant: &str) -> Result<AudioClip, SpliceError> {
            Err(SpliceError::FileNotFound {
                kind: ClipKind::Consonant,
                path: PathBuf::from(format!("{consonant}-.wav")),
            })
        }
    }

    fn vowels() -> Vowels {
        let mut map = HashMap::new();
        for (i, v) in ["a", "i", "u", "e", "o", "n"].iter().enumerate() {
            map.insert(
                v.to_string(),
                AudioClip::new(vec![1000 * (i as i16 + 1); 400 + 100 * i], ClipFormat::CD_MONO),
            );
        }
        Vowels(map)
    }

    #[test]
    fn single_syllable_line_is_just_faded() {
        let config = SpliceConfig::default();
        let out = synthesize_line("a", &config, &vowels()).unwrap();
        let expected = fade_out(&[1000i16; 400], 0.30);
        assert_eq!(out.samples, expected);
    }

    #[test]
    fn line_length_follows_the_crossfade_chain() {
        let config = SpliceConfig::default();
        let out = synthesize_line("a_i_u", &config, &vowels()).unwrap();

        let ab = 400 + 500 - crossfade_len(400, 500, 0.05);
        let abc = ab + 600 - crossfade_len(ab, 600, 0.05);
        assert_eq!(out.samples.len(), abc);
        assert_eq!(out.format, ClipFormat::CD_MONO);
    }

    #[test]
    fn failing_syllable_aborts_the_line() {
        let config = SpliceConfig::default();
        let err = synthesize_line("a_ka_i", &config, &vowels()).unwrap_err();
        match err {
            SpliceError::Syllable { syllable, source } => {
                assert_eq!(syllable, "ka");
                assert!(matches!(*source, SpliceError::FileNotFound { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_line_fails() {
        let config = SpliceConfig::default();
        assert!(matches!(
            synthesize_line("", &config, &vowels()),
            Err(SpliceError::EmptyLine)
        ));
    }

    #[test]
    fn custom_delimiter() {
        let config = SpliceConfig::builder().delimiter('-').build().unwrap();
        assert!(synthesize_line("a-i", &config, &vowels()).is_ok());
        assert!(synthesize_line("a_i", &config, &vowels()).is_err());
    }

    #[test]
    fn mixed_rates_within_a_line_fail() {
        let mut source = vowels();
        source.0.insert(
            "o".to_string(),
            AudioClip::new(
                vec![0; 400],
                ClipFormat {
                    sample_rate: 22_050,
                    ..ClipFormat::CD_MONO
                },
            ),
        );
        let err = synthesize_line("a_o", &SpliceConfig::default(), &source).unwrap_err();
        assert!(matches!(err, SpliceError::FormatMismatch { ref syllable, .. } if syllable == "o"));
    }
}
