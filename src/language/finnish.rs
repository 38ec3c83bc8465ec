//! Finnish stemming pipeline.
//!
//! Six steps over R1/R2: particles, possessives, case endings (with vowel
//! harmony and long-vowel side conditions), comparative/derivational endings
//! in R2, plural cleanup gated on whether step 3 removed a case ending, and
//! a final tidying pass (long-vowel shortening, residual final vowels,
//! `oj`/`uj`/`jo` endings, consonant undoubling).

use super::Stemmer;
use crate::char_class::CharClass;
use crate::region::{Regions, RvStyle};
use crate::word::{Word, fold};

const VOWELS: CharClass = CharClass::new("aeiouyäöAEIOUYÄÖ");

/// Vowels that can form a long (doubled) vowel.
const LONG_VOWELS: CharClass = CharClass::new("aeiouäöAEIOUÄÖ");

/// Particle suffixes of step 1, longest first (`sti` is handled against R2).
const STEP_1_SUFFIXES: &[&str] = &[
    "kaan", "kään", "kin", "han", "hän", "sti", "ko", "kö", "pa", "pä",
];

/// Possessive suffixes of step 2 that are deleted without a side condition.
const STEP_2_PLAIN: &[&str] = &["nsa", "nsä", "mme", "nne"];

/// `an` is a possessive only after one of these case endings.
const STEP_2_AN: &[&str] = &["taan", "ssaan", "staan", "llaan", "ltaan", "naan"];
const STEP_2_AEN: &[&str] = &["tään", "ssään", "stään", "llään", "ltään", "nään"];
const STEP_2_EN: &[&str] = &["lleen", "ineen"];

/// Unconditional case endings of step 3, longest first.
const STEP_3_PLAIN: &[&str] = &[
    "ssa", "ssä", "sta", "stä", "lla", "llä", "lta", "ltä", "lle", "ksi", "ine", "ta", "tä", "na",
    "nä",
];

/// Vowel-harmony `hVn` endings: the vowel before the suffix must echo its
/// own vowel (ahan, ehen, ihin, ...).
const STEP_3_HVN: &[(&str, char)] = &[
    ("han", 'a'),
    ("hen", 'e'),
    ("hin", 'i'),
    ("hon", 'o'),
    ("hun", 'u'),
    ("hyn", 'y'),
    ("hän", 'ä'),
    ("hön", 'ö'),
];

/// Step 4 endings in R2: the `i`-prefixed forms and `eja`/`ejä` are deleted
/// outright, the bare forms only when not preceded by `po`.
const STEP_4_PLAIN: &[&str] = &["impi", "impa", "impä", "immi", "imma", "immä", "eja", "ejä"];
const STEP_4_PO_GUARDED: &[&str] = &["mpi", "mpa", "mpä", "mmi", "mma", "mmä"];

/// Finnish stemming algorithm.
#[derive(Debug, Clone, Default)]
pub struct FinnishStemmer;

impl FinnishStemmer {
    /// Create a new Finnish stemmer.
    pub fn new() -> Self {
        FinnishStemmer
    }

    fn regions(&self, word: &Word) -> Regions {
        Regions::compute(word, &VOWELS, RvStyle::None)
    }

    /// True if the characters at `i - 1` and `i` form a long vowel.
    fn long_vowel_at(&self, word: &Word, i: usize) -> bool {
        i >= 1
            && i < word.len()
            && LONG_VOWELS.contains(word.char_at(i))
            && fold(word.char_at(i)) == fold(word.char_at(i - 1))
    }

    /// Step 1: particles. `sti` needs R2; the rest need R1 and a preceding
    /// `n`, `t` or vowel.
    fn step_1(&self, word: &mut Word) {
        let Regions { r1, r2, .. } = self.regions(word);
        for suffix in STEP_1_SUFFIXES {
            if *suffix == "sti" {
                if word.delete_suffix_in("sti", r2) {
                    return;
                }
                continue;
            }
            if !word.ends_with_in(suffix, r1) {
                continue;
            }
            let slen = suffix.chars().count();
            if word.len() > slen {
                let prev = fold(word.char_at(word.len() - slen - 1));
                if prev == 'n' || prev == 't' || VOWELS.contains(prev) {
                    word.truncate_by(slen);
                    return;
                }
            }
        }
    }

    /// Step 2: possessives in R1.
    fn step_2(&self, word: &mut Word) {
        let r1 = self.regions(word).r1;

        for suffix in STEP_2_PLAIN {
            if word.delete_suffix_in(suffix, r1) {
                return;
            }
        }
        if word.ends_with_in("si", r1)
            && word.len() >= 3
            && fold(word.char_at(word.len() - 3)) != 'k'
        {
            word.truncate_by(2);
            return;
        }
        if word.ends_with_in("ni", r1) {
            word.truncate_by(2);
            word.replace_suffix("kse", "ksi");
            return;
        }
        if word.ends_with_in("an", r1) && STEP_2_AN.iter().any(|p| word.ends_with(p)) {
            word.truncate_by(2);
            return;
        }
        if word.ends_with_in("än", r1) && STEP_2_AEN.iter().any(|p| word.ends_with(p)) {
            word.truncate_by(2);
            return;
        }
        if word.ends_with_in("en", r1) && STEP_2_EN.iter().any(|p| word.ends_with(p)) {
            word.truncate_by(2);
        }
    }

    /// Step 3: case endings in R1. Returns true if an ending was removed,
    /// which step 5 consults.
    fn step_3(&self, word: &mut Word) -> bool {
        let r1 = self.regions(word).r1;
        let n = word.len();

        // seen after a long vowel
        if word.ends_with_in("seen", r1) && n >= 6 && self.long_vowel_at(word, n - 5) {
            word.truncate_by(4);
            return true;
        }
        // siin / tten / den after vowel + i
        for suffix in ["siin", "tten", "den"] {
            let slen = suffix.chars().count();
            if word.ends_with_in(suffix, r1)
                && n >= slen + 2
                && fold(word.char_at(n - slen - 1)) == 'i'
                && VOWELS.contains(word.char_at(n - slen - 2))
            {
                word.truncate_by(slen);
                return true;
            }
        }
        // vowel-harmony hVn endings
        for (suffix, harmony) in STEP_3_HVN {
            if word.ends_with_in(suffix, r1)
                && n >= 4
                && fold(word.char_at(n - 4)) == *harmony
            {
                word.truncate_by(3);
                return true;
            }
        }
        // tta/ttä after e
        for suffix in ["tta", "ttä"] {
            if word.ends_with_in(suffix, r1) && n >= 4 && fold(word.char_at(n - 4)) == 'e' {
                word.truncate_by(3);
                return true;
            }
        }
        if word.delete_longest_in(STEP_3_PLAIN, r1) {
            return true;
        }
        // a/ä preceded by consonant + vowel
        for suffix in ["a", "ä"] {
            if word.ends_with_in(suffix, r1)
                && n >= 3
                && VOWELS.contains(word.char_at(n - 2))
                && VOWELS.excludes(word.char_at(n - 3))
            {
                word.truncate_by(1);
                return true;
            }
        }
        if word.ends_with_in("n", r1) {
            word.truncate_by(1);
            let m = word.len();
            if (m >= 2 && self.long_vowel_at(word, m - 1)) || word.ends_with("ie") {
                word.truncate_by(1);
            }
            return true;
        }
        false
    }

    /// Step 4: comparative and derivational endings in R2.
    fn step_4(&self, word: &mut Word) {
        let r2 = self.regions(word).r2;
        if word.delete_longest_in(STEP_4_PLAIN, r2) {
            return;
        }
        for suffix in STEP_4_PO_GUARDED {
            if word.ends_with_in(suffix, r2) {
                let n = word.len();
                let keep = n >= 5
                    && fold(word.char_at(n - 5)) == 'p'
                    && fold(word.char_at(n - 4)) == 'o';
                if !keep {
                    word.truncate_by(3);
                }
                return;
            }
        }
    }

    /// Step 5: plural cleanup, gated on the step 3 flag.
    fn step_5(&self, word: &mut Word, case_ending_removed: bool) {
        let r1 = self.regions(word).r1;
        let n = word.len();
        if case_ending_removed {
            if n >= 1 && n - 1 >= r1 && matches!(fold(word.char_at(n - 1)), 'i' | 'j') {
                word.truncate_by(1);
            }
            return;
        }
        if n >= 2
            && n - 1 >= r1
            && fold(word.char_at(n - 1)) == 't'
            && VOWELS.contains(word.char_at(n - 2))
        {
            word.truncate_by(1);
            let r2 = self.regions(word).r2;
            if word.delete_suffix_in("imma", r2) {
                return;
            }
            if word.ends_with_in("mma", r2) {
                let m = word.len();
                let keep = m >= 5
                    && fold(word.char_at(m - 5)) == 'p'
                    && fold(word.char_at(m - 4)) == 'o';
                if !keep {
                    word.truncate_by(3);
                }
            }
        }
    }

    /// Step 6: tidying up. Substeps (a)-(d) are checked against the R1
    /// substring; (e) undoubles a final consonant pair that is followed only
    /// by vowels.
    fn step_6(&self, word: &mut Word) {
        // a) shorten a final long vowel
        let r1 = self.regions(word).r1;
        let n = word.len();
        if n >= 2 && n - 2 >= r1 && self.long_vowel_at(word, n - 1) {
            word.truncate_by(1);
        }

        // b) consonant + a/ä/e/i
        let r1 = self.regions(word).r1;
        let n = word.len();
        if n >= 2
            && n - 2 >= r1
            && VOWELS.excludes(word.char_at(n - 2))
            && matches!(fold(word.char_at(n - 1)), 'a' | 'ä' | 'e' | 'i')
        {
            word.truncate_by(1);
        }

        // c) oj / uj
        let r1 = self.regions(word).r1;
        let n = word.len();
        if (word.ends_with("oj") || word.ends_with("uj")) && n >= 2 && n - 2 >= r1 {
            word.truncate_by(1);
        }

        // d) jo
        let r1 = self.regions(word).r1;
        let n = word.len();
        if word.ends_with("jo") && n >= 2 && n - 2 >= r1 {
            word.truncate_by(1);
        }

        // e) undouble a consonant pair followed only by vowels
        let n = word.len();
        let mut i = n;
        while i > 0 && VOWELS.contains(word.char_at(i - 1)) {
            i -= 1;
        }
        if i >= 2
            && VOWELS.excludes(word.char_at(i - 1))
            && fold(word.char_at(i - 1)) == fold(word.char_at(i - 2))
        {
            word.remove(i - 1);
        }
    }
}

impl Stemmer for FinnishStemmer {
    fn stem(&self, word: &str) -> String {
        let mut w = Word::new(word);
        w.trim_punctuation();
        if w.len() < 3 {
            return word.to_string();
        }

        self.step_1(&mut w);
        self.step_2(&mut w);
        let case_ending_removed = self.step_3(&mut w);
        self.step_4(&mut w);
        self.step_5(&mut w, case_ending_removed);
        self.step_6(&mut w);

        w.to_string()
    }

    fn name(&self) -> &'static str {
        "finnish"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_endings() {
        let stemmer = FinnishStemmer::new();

        assert_eq!(stemmer.stem("taloissa"), "talo");
        assert_eq!(stemmer.stem("koirien"), "koir");
        assert_eq!(stemmer.stem("tyttöjen"), "tyttöj");
    }

    #[test]
    fn test_particles() {
        let stemmer = FinnishStemmer::new();

        assert_eq!(stemmer.stem("taloko"), "talo");
    }

    #[test]
    fn test_possessives() {
        let stemmer = FinnishStemmer::new();

        assert_eq!(stemmer.stem("kirjansa"), "kirj");
        assert_eq!(stemmer.stem("ystävänsä"), "ystäv");
    }

    #[test]
    fn test_tidy_final_vowel() {
        let stemmer = FinnishStemmer::new();

        assert_eq!(stemmer.stem("helsinki"), "helsink");
        assert_eq!(stemmer.stem("talo"), "talo");
    }

    #[test]
    fn test_min_length_guard() {
        let stemmer = FinnishStemmer::new();

        assert_eq!(stemmer.stem("on"), "on");
    }
}
