//! Norwegian stemming pipeline.
//!
//! Three steps over R1 (clamped to leave at least three characters before
//! it): the main suffix table with the s-ending rule and `erte`/`ert` → `er`,
//! `dt`/`vt` trimming, and a residual `lig`/`els`/`lov` family table. The
//! s-ending set admits `k` only when it is not preceded by a vowel.

use super::Stemmer;
use crate::char_class::CharClass;
use crate::region::{Regions, RvStyle};
use crate::word::{Word, fold};

const VOWELS: CharClass = CharClass::new("aeiouyæåøAEIOUYÆÅØ");
const S_ENDINGS: CharClass = CharClass::new("bcdfghjlmnoprtvyzBCDFGHJLMNOPRTVYZ");

/// Step 1 suffixes, longest first. `erte`/`ert` are rewritten to `er`, the
/// rest are deleted.
const STEP_1_SUFFIXES: &[&str] = &[
    "hetenes", "hetene", "hetens", "heten", "heter", "endes", "ande", "ende", "edes", "enes",
    "erte", "ede", "ane", "ene", "ens", "ers", "ets", "het", "ast", "ert", "en", "ar", "er", "as",
    "es", "et", "a", "e",
];

const STEP_3_SUFFIXES: &[&str] = &[
    "hetslov", "slov", "elov", "elig", "eleg", "lov", "lig", "leg", "eig", "els", "ig",
];

/// Norwegian stemming algorithm.
#[derive(Debug, Clone, Default)]
pub struct NorwegianStemmer;

impl NorwegianStemmer {
    /// Create a new Norwegian stemmer.
    pub fn new() -> Self {
        NorwegianStemmer
    }

    fn r1(&self, word: &Word) -> usize {
        let mut regions = Regions::compute(word, &VOWELS, RvStyle::None);
        regions.clamp_r1(3, word.len());
        regions.r1
    }

    /// `s` may only be dropped after a valid s-ending: one of the fixed
    /// consonants, or `k` not preceded by a vowel.
    fn valid_s_ending(&self, word: &Word) -> bool {
        let n = word.len();
        if n < 2 {
            return false;
        }
        let before = word.char_at(n - 2);
        if S_ENDINGS.contains(before) {
            return true;
        }
        fold(before) == 'k' && (n < 3 || VOWELS.excludes(word.char_at(n - 3)))
    }

    fn step_1(&self, word: &mut Word) {
        let r1 = self.r1(word);
        for suffix in STEP_1_SUFFIXES {
            if !word.ends_with_in(suffix, r1) {
                continue;
            }
            match *suffix {
                "erte" | "ert" => {
                    word.replace_suffix(suffix, "er");
                }
                _ => {
                    word.truncate_by(suffix.chars().count());
                }
            }
            return;
        }
        if word.ends_with_in("s", r1) && self.valid_s_ending(word) {
            word.truncate_by(1);
        }
    }

    /// Trim the `t` of a final `dt` or `vt` in R1.
    fn step_2(&self, word: &mut Word) {
        let r1 = self.r1(word);
        if word.ends_with_in("dt", r1) || word.ends_with_in("vt", r1) {
            word.truncate_by(1);
        }
    }

    fn step_3(&self, word: &mut Word) {
        let r1 = self.r1(word);
        word.delete_longest_in(STEP_3_SUFFIXES, r1);
    }
}

impl Stemmer for NorwegianStemmer {
    fn stem(&self, word: &str) -> String {
        let mut w = Word::new(word);
        w.trim_punctuation();
        if w.len() < 3 {
            return word.to_string();
        }

        self.step_1(&mut w);
        self.step_2(&mut w);
        self.step_3(&mut w);

        w.to_string()
    }

    fn name(&self) -> &'static str {
        "norwegian"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definite_and_plural_forms() {
        let stemmer = NorwegianStemmer::new();

        assert_eq!(stemmer.stem("huset"), "hus");
        assert_eq!(stemmer.stem("hesten"), "hest");
        assert_eq!(stemmer.stem("billene"), "bill");
    }

    #[test]
    fn test_participle_endes() {
        let stemmer = NorwegianStemmer::new();

        // "endes" outranks the bare "es" in the table
        assert_eq!(stemmer.stem("levendes"), "lev");
    }

    #[test]
    fn test_s_ending_k_rule() {
        let stemmer = NorwegianStemmer::new();

        // k counts as a valid s-ending only when not preceded by a vowel
        assert_eq!(stemmer.stem("fisks"), "fisk");
        assert_eq!(stemmer.stem("boks"), "boks");
    }

    #[test]
    fn test_step_2_trims_dt() {
        let stemmer = NorwegianStemmer::new();

        assert_eq!(stemmer.stem("sendt"), "send");
    }

    #[test]
    fn test_step_3_lig() {
        let stemmer = NorwegianStemmer::new();

        assert_eq!(stemmer.stem("vennlig"), "venn");
    }

    #[test]
    fn test_min_length_guard() {
        let stemmer = NorwegianStemmer::new();

        assert_eq!(stemmer.stem("år"), "år");
    }
}
