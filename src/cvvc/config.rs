use std::path::{Path, PathBuf};

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use super::error::SpliceError;
use crate::ClipFormat;

/// Vowels a syllable token may end in.
pub const DEFAULT_VOWELS: &[&str] = &["a", "e", "u", "i", "o", "n"];

/// The standard CVVC reclist, one recording per line.
pub const DEFAULT_PHRASE_TABLE: &[&str] = &[
    "a_i_u_e_o_a",
    "a_u_o_i_e_a",
    "a_e_i_o_u_a",
    "a_o_e_u_i_a",
    "a_i_u_e_o_n",
    "ka_ki_ku_ke_ko_kya_kyu_kye_kyo",
    "ga_gi_gu_ge_go_gya_gyu_gye_gyo",
    "nga_ngi_ngu_nge_ngo_ngya_ngyu_ngye_ngyo",
    "sa_si_su_se_so",
    "za_zi_zu_ze_zo",
    "sha_shi_shu_she_sho",
    "ja_ji_ju_je_jo",
    "tsa_tsi_tsu_tse_tso",
    "dza_dzi_dzu_dze_dzo",
    "cha_chi_chu_che_cho",
    "dja_dji_dju_dje_djo",
    "ta_ti_tu_te_to_tya_tyu_tye_tyo",
    "da_di_du_de_do_dya_dyu_dye_dyo",
    "pa_pi_pu_pe_po_pya_pyu_pye_pyo",
    "ba_bi_bu_be_bo_bya_byu_bye_byo",
    "fa_fi_fu_fe_fo_fya_fyu_fye_fyo",
    "ma_mi_mu_me_mo_mya_myu_mye_myo",
    "ra_ri_ru_re_ro_rya_ryu_rye_ryo",
    "ya_yi_yu_ye_yo",
    "wa_wi_wu_we_wo",
    "va_vi_vu_ve_vo",
    "ha_hi_hu_he_ho",
    "hya_hyi_hyu_hye_hyo",
    "na_ni_nu_ne_no",
    "nya_nyi_nyu_nye_nyo",
    "jya_jyu_jye_jyo",
    "sya_syi_syu_sye_syo",
    "kwa_kwi_kwu_kwe_kwo_ka",
    "gwa_gwi_gwu_gwe_gwo_ga",
    "rwa_rwi_rwu_rwe_rwo_ra",
];

/// Settings for one splicing run.
///
/// Every field has a default, so a config can be built from just the three
/// directories:
///
/// ```rust
/// use cvvc_rs::cvvc::SpliceConfig;
///
/// let config = SpliceConfig::builder()
///     .consonant_dir("bank/consonants")
///     .vowel_dir("bank/vowels")
///     .output_dir("out")
///     .build()
///     .unwrap();
/// assert_eq!(config.line_crossfade, 0.05);
/// ```
///
/// The same fields can be read from JSON with [`SpliceConfig::from_json_file`];
/// missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into))]
#[serde(default)]
pub struct SpliceConfig {
    /// Directory holding `<consonant>-.wav` onsets.
    pub consonant_dir: PathBuf,
    /// Directory holding `<vowel>.wav` clips.
    pub vowel_dir: PathBuf,
    /// Where recordings and the error report are written. Created if absent.
    pub output_dir: PathBuf,
    /// Lines to synthesize; each is also the output file stem.
    pub phrase_table: Vec<String>,
    pub vowel_set: Vec<String>,
    /// Separator between syllable tokens within a line.
    pub delimiter: char,
    /// Share of the consonant clip copied verbatim before the vowel joins.
    pub consonant_keep_fraction: f64,
    pub consonant_vowel_crossfade: f64,
    /// Tail share of each syllable faded to silence before chaining.
    pub syllable_fadeout: f64,
    pub line_crossfade: f64,
    /// Format every consonant/vowel pair must have.
    pub format: ClipFormat,
}

impl Default for SpliceConfig {
    fn default() -> Self {
        Self {
            consonant_dir: PathBuf::from("consonants"),
            vowel_dir: PathBuf::from("vowels"),
            output_dir: PathBuf::from("output"),
            phrase_table: DEFAULT_PHRASE_TABLE.iter().map(|s| s.to_string()).collect(),
            vowel_set: DEFAULT_VOWELS.iter().map(|s| s.to_string()).collect(),
            delimiter: '_',
            consonant_keep_fraction: 0.55,
            consonant_vowel_crossfade: 0.10,
            syllable_fadeout: 0.30,
            line_crossfade: 0.05,
            format: ClipFormat::CD_MONO,
        }
    }
}

impl SpliceConfig {
    pub fn builder() -> SpliceConfigBuilder {
        SpliceConfigBuilder::default()
    }

    /// Load a config from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, SpliceError> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| SpliceError::Config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Check the fractions and vowel set before a run.
    pub fn validate(&self) -> Result<(), SpliceError> {
        if self.vowel_set.is_empty() {
            return Err(SpliceError::Config("vowel_set must not be empty".to_string()));
        }
        if self.vowel_set.iter().any(|v| v.is_empty()) {
            return Err(SpliceError::Config(
                "vowel_set must not contain empty tokens".to_string(),
            ));
        }

        let unit = [
            ("consonant_vowel_crossfade", self.consonant_vowel_crossfade),
            ("syllable_fadeout", self.syllable_fadeout),
            ("line_crossfade", self.line_crossfade),
        ];
        for (name, value) in unit {
            if !(0.0..=1.0).contains(&value) {
                return Err(SpliceError::Config(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }

        let keep = self.consonant_keep_fraction;
        if !(keep > 0.0 && keep < 1.0) {
            return Err(SpliceError::Config(format!(
                "consonant_keep_fraction must be within (0, 1), got {keep}"
            )));
        }
        Ok(())
    }

    /// Whether `token` is a member of the vowel set.
    pub fn is_vowel(&self, token: &str) -> bool {
        self.vowel_set.iter().any(|v| v == token)
    }
}
