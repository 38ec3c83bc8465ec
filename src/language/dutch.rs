//! Dutch stemming pipeline.
//!
//! Before the steps run, umlauts and acute accents are stripped and the
//! ambiguous letters are hashed: an initial `y`, a `y` after a vowel, and an
//! `i` between vowels are replaced with sentinels so the vowel tests treat
//! them as consonants. The steps then work over R1/R2 (R1 clamped to leave
//! three characters before it): suffix removal with `en`/`s` ending
//! conditions, final `e` removal, `heid` and the d-suffixes (`end` `ing`
//! `ig` `lijk` `baar` `bar`), and undoubling of `aa`/`ee`/`oo`/`uu` between
//! consonants. The sentinels are restored on exit.

use super::Stemmer;
use crate::char_class::CharClass;
use crate::hash;
use crate::region::{Regions, RvStyle};
use crate::word::{Word, fold};

const VOWELS: CharClass = CharClass::new("aeiouyèAEIOUYÈ");

/// Accented letters folded away at pipeline entry.
const ACCENT_MAP: &[(char, char)] = &[
    ('ä', 'a'),
    ('ë', 'e'),
    ('ï', 'i'),
    ('ö', 'o'),
    ('ü', 'u'),
    ('á', 'a'),
    ('é', 'e'),
    ('í', 'i'),
    ('ó', 'o'),
    ('ú', 'u'),
    ('Ä', 'A'),
    ('Ë', 'E'),
    ('Ï', 'I'),
    ('Ö', 'O'),
    ('Ü', 'U'),
    ('Á', 'A'),
    ('É', 'E'),
    ('Í', 'I'),
    ('Ó', 'O'),
    ('Ú', 'U'),
];

/// Dutch stemming algorithm.
#[derive(Debug, Clone, Default)]
pub struct DutchStemmer;

impl DutchStemmer {
    /// Create a new Dutch stemmer.
    pub fn new() -> Self {
        DutchStemmer
    }

    fn regions(&self, word: &Word) -> Regions {
        let mut regions = Regions::compute(word, &VOWELS, RvStyle::None);
        regions.clamp_r1(3, word.len());
        regions
    }

    fn strip_accents(&self, word: &mut Word) {
        for i in 0..word.len() {
            let c = word.char_at(i);
            if let Some(&(_, plain)) = ACCENT_MAP.iter().find(|(acc, _)| *acc == c) {
                word.set(i, plain);
            }
        }
    }

    /// Hash an initial `y`, a `y` after a vowel, and an `i` between vowels.
    fn hash_letters(&self, word: &mut Word) {
        for i in 0..word.len() {
            let c = word.char_at(i);
            match fold(c) {
                'y' if i == 0 || VOWELS.contains(word.char_at(i - 1)) => {
                    if let Some(h) = hash::hashed(c) {
                        word.set(i, h);
                    }
                }
                'i' if i > 0
                    && i + 1 < word.len()
                    && VOWELS.contains(word.char_at(i - 1))
                    && VOWELS.contains(word.char_at(i + 1)) =>
                {
                    if let Some(h) = hash::hashed(c) {
                        word.set(i, h);
                    }
                }
                _ => {}
            }
        }
    }

    fn unhash_letters(&self, word: &mut Word) {
        for i in 0..word.len() {
            if let Some(original) = hash::unhashed(word.char_at(i)) {
                word.set(i, original);
            }
        }
    }

    /// `kk`, `dd` and `tt` lose their final letter.
    fn undouble(&self, word: &mut Word) {
        if word.ends_with("kk") || word.ends_with("dd") || word.ends_with("tt") {
            word.truncate_by(1);
        }
    }

    /// An `en` suffix may only come off after a non-vowel, and not after
    /// `gem`.
    fn valid_en_ending(&self, word: &Word, suffix_len: usize) -> bool {
        let end = word.len() - suffix_len;
        if end == 0 || VOWELS.contains(word.char_at(end - 1)) {
            return false;
        }
        !(end >= 3
            && fold(word.char_at(end - 3)) == 'g'
            && fold(word.char_at(end - 2)) == 'e'
            && fold(word.char_at(end - 1)) == 'm')
    }

    /// Delete a trailing `ene`/`en` under the en-ending condition, then
    /// undouble. Shared between step 1 and step 3a.
    fn drop_en_suffix(&self, word: &mut Word) -> bool {
        let r1 = self.regions(word).r1;
        for suffix in ["ene", "en"] {
            let slen = suffix.chars().count();
            if word.ends_with_in(suffix, r1) && self.valid_en_ending(word, slen) {
                word.truncate_by(slen);
                self.undouble(word);
                return true;
            }
        }
        false
    }

    fn step_1(&self, word: &mut Word) {
        let r1 = self.regions(word).r1;
        if word.replace_suffix_in("heden", "heid", r1) {
            return;
        }
        if self.drop_en_suffix(word) {
            return;
        }
        for suffix in ["se", "s"] {
            let slen = suffix.chars().count();
            if word.ends_with_in(suffix, r1) {
                let end = word.len() - slen;
                if end > 0 {
                    let before = word.char_at(end - 1);
                    if VOWELS.excludes(before) && fold(before) != 'j' {
                        word.truncate_by(slen);
                        return;
                    }
                }
            }
        }
    }

    /// Delete a final `e` after a non-vowel in R1. Returns true when it
    /// fired; step 3b's `bar` rule consults this.
    fn step_2(&self, word: &mut Word) -> bool {
        let r1 = self.regions(word).r1;
        let n = word.len();
        if word.ends_with_in("e", r1) && n >= 2 && VOWELS.excludes(word.char_at(n - 2)) {
            word.truncate_by(1);
            self.undouble(word);
            return true;
        }
        false
    }

    /// `heid` removal, with the trailing `en` treated as in step 1.
    fn step_3a(&self, word: &mut Word) {
        let r2 = self.regions(word).r2;
        let n = word.len();
        if word.ends_with_in("heid", r2) && (n < 5 || fold(word.char_at(n - 5)) != 'c') {
            word.truncate_by(4);
            self.drop_en_suffix(word);
        }
    }

    /// The d-suffixes, longest first.
    fn step_3b(&self, word: &mut Word, e_found: bool) {
        let r2 = self.regions(word).r2;

        if word.delete_suffix_in("lijk", r2) {
            self.step_2(word);
            return;
        }
        if word.delete_suffix_in("baar", r2) {
            return;
        }
        for suffix in ["end", "ing"] {
            if word.delete_suffix_in(suffix, r2) {
                let r2 = self.regions(word).r2;
                let n = word.len();
                if word.ends_with_in("ig", r2) && (n < 3 || fold(word.char_at(n - 3)) != 'e') {
                    word.truncate_by(2);
                } else {
                    self.undouble(word);
                }
                return;
            }
        }
        if word.ends_with_in("bar", r2) && e_found {
            word.truncate_by(3);
            return;
        }
        let n = word.len();
        if word.ends_with_in("ig", r2) && (n < 3 || fold(word.char_at(n - 3)) != 'e') {
            word.truncate_by(2);
        }
    }

    /// Undouble `aa`/`ee`/`oo`/`uu` between consonants; a hashed `i` does
    /// not count as the closing consonant.
    fn step_4(&self, word: &mut Word) {
        let n = word.len();
        if n < 4 {
            return;
        }
        let (c, v1, v2, d) = (
            word.char_at(n - 4),
            word.char_at(n - 3),
            word.char_at(n - 2),
            word.char_at(n - 1),
        );
        if VOWELS.excludes(c)
            && VOWELS.excludes(d)
            && fold(d) != hash::HASH_I
            && fold(v1) == fold(v2)
            && matches!(fold(v1), 'a' | 'e' | 'o' | 'u')
        {
            word.remove(n - 2);
        }
    }
}

impl Stemmer for DutchStemmer {
    fn stem(&self, word: &str) -> String {
        let mut w = Word::new(word);
        w.trim_punctuation();
        if w.len() < 3 {
            return word.to_string();
        }

        self.strip_accents(&mut w);
        self.hash_letters(&mut w);

        self.step_1(&mut w);
        let e_found = self.step_2(&mut w);
        self.step_3a(&mut w);
        self.step_3b(&mut w, e_found);
        self.step_4(&mut w);

        self.unhash_letters(&mut w);
        w.to_string()
    }

    fn name(&self) -> &'static str {
        "dutch"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_en() {
        let stemmer = DutchStemmer::new();

        assert_eq!(stemmer.stem("bomen"), "bom");
        assert_eq!(stemmer.stem("gekken"), "gek");
    }

    #[test]
    fn test_gem_exception() {
        let stemmer = DutchStemmer::new();

        assert_eq!(stemmer.stem("gemen"), "gemen");
    }

    #[test]
    fn test_vowel_undoubling() {
        let stemmer = DutchStemmer::new();

        assert_eq!(stemmer.stem("maan"), "man");
        assert_eq!(stemmer.stem("boom"), "bom");
    }

    #[test]
    fn test_hashed_i_blocks_undoubling() {
        let stemmer = DutchStemmer::new();

        // the i in "draaien" is hashed to a consonant, drops the "en", and
        // then blocks step 4
        assert_eq!(stemmer.stem("draaien"), "draai");
    }

    #[test]
    fn test_heden_and_lijk() {
        let stemmer = DutchStemmer::new();

        assert_eq!(stemmer.stem("waarheden"), "waarheid");
        assert_eq!(stemmer.stem("lichamelijk"), "licham");
    }

    #[test]
    fn test_accent_stripping() {
        let stemmer = DutchStemmer::new();

        assert_eq!(stemmer.stem("café"), "caf");
    }

    #[test]
    fn test_hash_round_trip() {
        let stemmer = DutchStemmer::new();

        for input in ["draaien", "Yoga", "ijs", "papegaaien", "yyy"] {
            let mut w = Word::new(input);
            stemmer.hash_letters(&mut w);
            stemmer.unhash_letters(&mut w);
            assert_eq!(w.to_string(), input);
        }
    }
}
