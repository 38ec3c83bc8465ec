//! Swedish stemming pipeline.
//!
//! Three steps over R1 (clamped to leave at least three characters before
//! it): the main suffix table plus the s-ending rule, undoubling of the
//! fixed consonant clusters (`dd` `gd` `nn` `dt` `gt` `kt` `tt`), and the
//! residual `lig`/`ig`/`els` table with `löst` → `lös` and `fullt` → `full`.

use super::Stemmer;
use crate::char_class::CharClass;
use crate::region::{Regions, RvStyle};
use crate::word::Word;

const VOWELS: CharClass = CharClass::new("aeiouyäåöAEIOUYÄÅÖ");
const S_ENDINGS: CharClass = CharClass::new("bcdfgjklmnoprtvyBCDFGJKLMNOPRTVY");

/// Step 1 suffixes, longest first.
const STEP_1_SUFFIXES: &[&str] = &[
    "heterna", "hetens", "anden", "heten", "heter", "arnas", "ernas", "ornas", "arens", "andes",
    "andet", "arna", "erna", "orna", "ande", "arne", "aste", "aren", "ades", "erns", "ade", "are",
    "ens", "het", "ast", "ad", "en", "es", "at", "a", "e",
];

const STEP_2_ENDINGS: &[&str] = &["dd", "gd", "nn", "dt", "gt", "kt", "tt"];

/// Swedish stemming algorithm.
#[derive(Debug, Clone, Default)]
pub struct SwedishStemmer;

impl SwedishStemmer {
    /// Create a new Swedish stemmer.
    pub fn new() -> Self {
        SwedishStemmer
    }

    fn r1(&self, word: &Word) -> usize {
        let mut regions = Regions::compute(word, &VOWELS, RvStyle::None);
        regions.clamp_r1(3, word.len());
        regions.r1
    }

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

    /// Trim the last letter of one of the fixed clusters in R1.
    fn step_2(&self, word: &mut Word) {
        let r1 = self.r1(word);
        for ending in STEP_2_ENDINGS {
            if word.ends_with_in(ending, r1) {
                word.truncate_by(1);
                return;
            }
        }
    }

    fn step_3(&self, word: &mut Word) {
        let r1 = self.r1(word);
        if word.ends_with_in("fullt", r1) {
            word.truncate_by(1);
            return;
        }
        if word.ends_with_in("löst", r1) {
            word.truncate_by(1);
            return;
        }
        word.delete_longest_in(&["lig", "els", "ig"], r1);
    }
}

impl Stemmer for SwedishStemmer {
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
        "swedish"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_and_definite_forms() {
        let stemmer = SwedishStemmer::new();

        assert_eq!(stemmer.stem("flickorna"), "flick");
        assert_eq!(stemmer.stem("jakten"), "jakt");
        assert_eq!(stemmer.stem("dagens"), "dag");
        // the table carries no bare "et"; the neuter definite stays put
        assert_eq!(stemmer.stem("huset"), "huset");
    }

    #[test]
    fn test_comparative_are() {
        let stemmer = SwedishStemmer::new();

        assert_eq!(stemmer.stem("starkare"), "stark");
    }

    #[test]
    fn test_step_2_clusters() {
        let stemmer = SwedishStemmer::new();

        assert_eq!(stemmer.stem("friskt"), "frisk");
    }

    #[test]
    fn test_step_3_lig() {
        let stemmer = SwedishStemmer::new();

        // step 2 trims "gt" to "g", step 3 removes "lig"
        assert_eq!(stemmer.stem("möjligt"), "möj");
        assert_eq!(stemmer.stem("vänlig"), "vän");
    }

    #[test]
    fn test_min_length_guard() {
        let stemmer = SwedishStemmer::new();

        assert_eq!(stemmer.stem("ö"), "ö");
        assert_eq!(stemmer.stem("på"), "på");
    }
}
