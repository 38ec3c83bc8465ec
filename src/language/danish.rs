//! Danish stemming pipeline.
//!
//! Four steps over R1, with R1 clamped so at least three characters precede
//! it: a large suffix table plus an s-ending rule, consonant-cluster
//! trimming (`gd` `dt` `gt` `kt`), the `ig`/`lig`/`elig`/`els` group (which
//! re-runs step 2 on success) together with `løst` → `løs`, and final
//! double-consonant undoubling.
//!
//! # Examples
//!
//! ```
//! use falcata::language::Stemmer;
//! use falcata::language::danish::DanishStemmer;
//!
//! let stemmer = DanishStemmer::new();
//! assert_eq!(stemmer.stem("huset"), "hus");
//! assert_eq!(stemmer.stem("kirkerne"), "kirk");
//! ```

use super::Stemmer;
use crate::char_class::CharClass;
use crate::region::{Regions, RvStyle};
use crate::word::{Word, fold};

const VOWELS: CharClass = CharClass::new("aeiouyæåøAEIOUYÆÅØ");
const S_ENDINGS: CharClass = CharClass::new("abcdfghjklmnoprtvyzåABCDFGHJKLMNOPRTVYZÅ");

/// Step 1 suffixes, longest first.
const STEP_1_SUFFIXES: &[&str] = &[
    "erendes", "erende", "hedens", "ethed", "erede", "heden", "heder", "endes", "ernes", "erens",
    "erets", "ered", "ende", "erne", "eren", "erer", "heds", "enes", "eres", "eret", "hed", "ene",
    "ere", "ens", "ers", "ets", "en", "er", "es", "et", "e",
];

const STEP_2_ENDINGS: &[&str] = &["gd", "dt", "gt", "kt"];

const STEP_3_SUFFIXES: &[&str] = &["elig", "lig", "els", "ig"];

/// Danish stemming algorithm.
#[derive(Debug, Clone, Default)]
pub struct DanishStemmer;

impl DanishStemmer {
    /// Create a new Danish stemmer.
    pub fn new() -> Self {
        DanishStemmer
    }

    fn r1(&self, word: &Word) -> usize {
        let mut regions = Regions::compute(word, &VOWELS, RvStyle::None);
        regions.clamp_r1(3, word.len());
        regions.r1
    }

    /// Suffix table plus the s-ending rule.
    fn step_1(&self, word: &mut Word) {
        let r1 = self.r1(word);
        if word.delete_longest_in(STEP_1_SUFFIXES, r1) {
            return;
        }
        if word.ends_with_in("s", r1)
            && word.len() >= 2
            && S_ENDINGS.contains(word.char_at(word.len() - 2))
        {
            word.truncate_by(1);
        }
    }

    /// Trim the final letter of a `gd`/`dt`/`gt`/`kt` cluster in R1.
    fn step_2(&self, word: &mut Word) {
        let r1 = self.r1(word);
        for ending in STEP_2_ENDINGS {
            if word.ends_with_in(ending, r1) {
                word.truncate_by(1);
                return;
            }
        }
    }

    /// `igst`, the `ig`-group (which re-runs step 2) and `løst` → `løs`.
    fn step_3(&self, word: &mut Word) {
        if word.ends_with("igst") {
            word.truncate_by(2);
        }
        let r1 = self.r1(word);
        for suffix in STEP_3_SUFFIXES {
            if word.delete_suffix_in(suffix, r1) {
                self.step_2(word);
                return;
            }
        }
        if word.ends_with_in("løst", r1) {
            word.truncate_by(1);
        }
    }

    /// Undouble a final double consonant in R1.
    fn step_4(&self, word: &mut Word) {
        let r1 = self.r1(word);
        let n = word.len();
        if n >= 2
            && n - 1 >= r1
            && VOWELS.excludes(word.char_at(n - 1))
            && fold(word.char_at(n - 1)) == fold(word.char_at(n - 2))
        {
            word.truncate_by(1);
        }
    }
}

impl Stemmer for DanishStemmer {
    fn stem(&self, word: &str) -> String {
        let mut w = Word::new(word);
        w.trim_punctuation();
        if w.len() < 3 {
            return word.to_string();
        }

        self.step_1(&mut w);
        self.step_2(&mut w);
        self.step_3(&mut w);
        self.step_4(&mut w);

        w.to_string()
    }

    fn name(&self) -> &'static str {
        "danish"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_and_definite_forms() {
        let stemmer = DanishStemmer::new();

        assert_eq!(stemmer.stem("huset"), "hus");
        assert_eq!(stemmer.stem("husene"), "hus");
        assert_eq!(stemmer.stem("bilen"), "bil");
        assert_eq!(stemmer.stem("kirkerne"), "kirk");
    }

    #[test]
    fn test_s_ending() {
        let stemmer = DanishStemmer::new();

        // "s" is removed only after a valid s-ending consonant.
        assert_eq!(stemmer.stem("hans"), "han");
        // final "s" after "e" is handled by the "es" suffix instead
        assert_eq!(stemmer.stem("pigernes"), "pig");
    }

    #[test]
    fn test_step_4_undouble() {
        let stemmer = DanishStemmer::new();

        assert_eq!(stemmer.stem("ligge"), "lig");
    }

    #[test]
    fn test_region_guard_keeps_short_stems() {
        let stemmer = DanishStemmer::new();

        // "løst" starts at offset 0, before R1, so nothing fires.
        assert_eq!(stemmer.stem("løst"), "løst");
    }

    #[test]
    fn test_min_length_guard() {
        let stemmer = DanishStemmer::new();

        assert_eq!(stemmer.stem("by"), "by");
        assert_eq!(stemmer.stem(""), "");
    }
}
