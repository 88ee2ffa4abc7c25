use std::fmt;
use std::path::PathBuf;

/// Which half of the bank a clip belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipKind {
    Consonant,
    Vowel,
}

impl fmt::Display for ClipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipKind::Consonant => f.write_str("Consonant"),
            ClipKind::Vowel => f.write_str("Vowel"),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SpliceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cannot access WAV file {}: {source}", path.display())]
    Wav {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },
    #[error("{kind} file not found: {}", path.display())]
    FileNotFound { kind: ClipKind, path: PathBuf },
    #[error(
        "Unsupported sample format in {}: {bits}-bit {}, only 16-bit PCM is supported",
        path.display(),
        if *float { "float" } else { "integer" }
    )]
    UnsupportedFormat {
        path: PathBuf,
        bits: u16,
        float: bool,
    },
    #[error("Format mismatch for '{syllable}': {reason}")]
    FormatMismatch { syllable: String, reason: String },
    #[error("Cannot parse syllable: {0}")]
    Parse(String),
    #[error("Failed to process syllable '{syllable}': {source}")]
    Syllable {
        syllable: String,
        #[source]
        source: Box<SpliceError>,
    },
    #[error("No valid syllables processed")]
    EmptyLine,
    #[error("Invalid config: {0}")]
    Config(String),
}

impl SpliceError {
    /// Attach the syllable token that was being built when `self` occurred.
    pub fn in_syllable(self, syllable: &str) -> Self {
        SpliceError::Syllable {
            syllable: syllable.to_string(),
            source: Box::new(self),
        }
    }
}

/// A phrase-table line that produced no output.
#[derive(thiserror::Error, Debug)]
#[error("line {line}: {error}")]
pub struct LineFailure {
    pub line: String,
    #[source]
    pub error: SpliceError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syllable_context_is_part_of_the_message() {
        let err = SpliceError::FileNotFound {
            kind: ClipKind::Consonant,
            path: PathBuf::from("bank/ky-.wav"),
        }
        .in_syllable("kya");

        let failure = LineFailure {
            line: "ka_kya".to_string(),
            error: err,
        };
        assert_eq!(
            failure.to_string(),
            "line ka_kya: Failed to process syllable 'kya': Consonant file not found: bank/ky-.wav"
        );
    }

    #[test]
    fn unsupported_format_names_the_encoding() {
        let err = SpliceError::UnsupportedFormat {
            path: PathBuf::from("a.wav"),
            bits: 24,
            float: false,
        };
        assert!(err.to_string().contains("24-bit integer"));
    }
}
