use super::error::SpliceError;

/// Longest consonant onset tried when splitting a token.
const MAX_ONSET_CHARS: usize = 4;

/// A romaji token resolved against the vowel set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syllable {
    /// Onset, e.g. `"ky"` in `"kya"`. `None` for a bare vowel.
    pub consonant: Option<String>,
    pub vowel: String,
}

/// Split `token` into consonant onset and vowel.
///
/// A token that is itself in `vowels` is a bare vowel. Otherwise onsets of
/// four characters down to one are tried and the first one whose remainder
/// is in `vowels` wins, so the longest onset (shortest vowel) is preferred:
/// with the default vowel set `"kya"` splits as `ky` + `a`.
pub fn split_syllable<S: AsRef<str>>(token: &str, vowels: &[S]) -> Result<Syllable, SpliceError> {
    let is_vowel = |s: &str| !s.is_empty() && vowels.iter().any(|v| v.as_ref() == s);

    if is_vowel(token) {
        return Ok(Syllable {
            consonant: None,
            vowel: token.to_string(),
        });
    }

    let boundaries: Vec<usize> = token.char_indices().map(|(i, _)| i).skip(1).collect();
    let char_count = boundaries.len() + 1;

    for onset_chars in (1..=MAX_ONSET_CHARS.min(char_count)).rev() {
        let split_at = boundaries
            .get(onset_chars - 1)
            .copied()
            .unwrap_or(token.len());
        let (onset, rest) = token.split_at(split_at);
        if is_vowel(rest) {
            return Ok(Syllable {
                consonant: Some(onset.to_string()),
                vowel: rest.to_string(),
            });
        }
    }

    Err(SpliceError::Parse(token.to_string()))
}
