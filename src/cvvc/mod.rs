//! CVVC recording splicer.
//!
//! This module turns a bank of isolated consonant onsets and sustained vowels
//! into full reclist recordings. Each phrase-table line (e.g.
//! `"ka_ki_ku_ke_ko"`) becomes one WAV file whose syllables are built from
//! the bank and chained together with equal-power crossfades.
//!
//! # Bank Directory Layout
//!
//! ```text
//! bank/
//! ├── consonants/
//! │   ├── k-.wav        # consonant onset, named `<consonant>-.wav`
//! │   ├── ky-.wav
//! │   └── ...
//! └── vowels/
//!     ├── a.wav         # sustained vowel, named `<vowel>.wav`
//!     ├── n.wav
//!     └── ...
//! ```
//!
//! All sources must be 16-bit PCM, mono, 44100 Hz.
//!
//! # Pipeline
//!
//! | Stage | Function | Default |
//! |---|---|---|
//! | Split token into onset + vowel | [`split_syllable`] | longest onset wins |
//! | Splice onset and vowel | [`synthesize_syllable`] | keep 55% of onset, 10% crossfade |
//! | Fade each syllable tail | [`fade_out`] | last 30% |
//! | Chain syllables | [`crossfade`] | 5% crossfade |
//! | Collect failures | [`write_report`] | one entry per failed line |
//!
//! # Examples
//!
//! ```rust,no_run
//! use cvvc_rs::cvvc::{run, DirectoryClipSource, SpliceConfig};
//!
//! let config = SpliceConfig::builder()
//!     .consonant_dir("bank/consonants")
//!     .vowel_dir("bank/vowels")
//!     .output_dir("out")
//!     .phrase_table(vec!["ka_ki_ku".to_string()])
//!     .build()?;
//!
//! let summary = run(&config, &DirectoryClipSource::from_config(&config))?;
//! for failure in &summary.failures {
//!     eprintln!("{failure}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod error;
pub mod fade;
pub mod line;
pub mod report;
pub mod syllable;
pub mod synth;
pub mod wav;

pub use config::{SpliceConfig, SpliceConfigBuilder};
pub use error::{ClipKind, LineFailure, SpliceError};
pub use fade::{crossfade, crossfade_len, fade_out};
pub use line::{run, run_with_clock, synthesize_line, RunSummary};
pub use report::write_report;
pub use syllable::{split_syllable, Syllable};
pub use synth::{synthesize_syllable, DirectoryClipSource};
