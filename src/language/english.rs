//! English stemming pipeline (Porter2).
//!
//! Exceptional word forms are handled up front, then an initial apostrophe
//! is dropped and `y` is hashed to a consonant at the start of the word or
//! after a vowel. R1 starts after `gener`/`commun`/`arsen` when the word
//! begins with one of them. The steps then run in order: apostrophe
//! suffixes, plural forms, `ed`/`ing` with undoubling and e-restoration,
//! `y` → `i`, the two derivational tables over R1, residual suffixes over
//! R2, and the final `e`/`l` cleanup.

use super::Stemmer;
use crate::char_class::CharClass;
use crate::hash;
use crate::region::{Regions, RvStyle};
use crate::word::{Word, fold};

const VOWELS: CharClass = CharClass::new("aeiouyAEIOUY");

/// Consonants that a final double reduces from.
const DOUBLES: &[&str] = &["bb", "dd", "ff", "gg", "mm", "nn", "pp", "rr", "tt"];

/// Letters that allow an `li` suffix to come off.
const LI_ENDINGS: CharClass = CharClass::new("cdeghkmnrtCDEGHKMNRT");

/// Irregular forms stemmed directly.
const EXCEPTIONAL_FORMS: &[(&str, &str)] = &[
    ("skis", "ski"),
    ("skies", "sky"),
    ("dying", "die"),
    ("lying", "lie"),
    ("tying", "tie"),
    ("idly", "idl"),
    ("gently", "gentl"),
    ("ugly", "ugli"),
    ("early", "earli"),
    ("only", "onli"),
    ("singly", "singl"),
];

/// Forms left untouched entirely.
const INVARIANT_FORMS: &[&str] = &["sky", "news", "howe", "atlas", "cosmos", "bias", "andes"];

/// Forms frozen after step 1a.
const POST_1A_INVARIANTS: &[&str] = &[
    "inning", "outing", "canning", "herring", "earring", "proceed", "exceed", "succeed",
];

/// Prefixes that fix where R1 starts.
const R1_PREFIXES: &[&str] = &["gener", "commun", "arsen"];

/// Step 2 rewrites over R1, longest first.
const STEP_2_RULES: &[(&str, &str)] = &[
    ("ization", "ize"),
    ("ational", "ate"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("iveness", "ive"),
    ("tional", "tion"),
    ("biliti", "ble"),
    ("lessli", "less"),
    ("entli", "ent"),
    ("ation", "ate"),
    ("alism", "al"),
    ("aliti", "al"),
    ("ousli", "ous"),
    ("iviti", "ive"),
    ("fulli", "ful"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("abli", "able"),
    ("izer", "ize"),
    ("ator", "ate"),
    ("alli", "al"),
    ("bli", "ble"),
];

/// Step 3 rewrites over R1, longest first (`ative` additionally needs R2).
const STEP_3_RULES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("alize", "al"),
    ("icate", "ic"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ness", ""),
    ("ful", ""),
];

/// Step 4 deletions over R2, longest first (`ion` needs a preceding `s`/`t`).
const STEP_4_SUFFIXES: &[&str] = &[
    "ement", "ance", "ence", "able", "ible", "ment", "ent", "ism", "ate", "iti", "ous", "ive",
    "ize", "al", "er", "ic",
];

/// English stemming algorithm (Porter2).
#[derive(Debug, Clone, Default)]
pub struct EnglishStemmer;

impl EnglishStemmer {
    /// Create a new English stemmer.
    pub fn new() -> Self {
        EnglishStemmer
    }

    /// R1/R2, with R1 pinned after a `gener`/`commun`/`arsen` prefix.
    fn regions(&self, word: &Word) -> Regions {
        let mut regions = Regions::compute(word, &VOWELS, RvStyle::None);
        for prefix in R1_PREFIXES {
            let plen = prefix.len();
            if word.len() >= plen
                && prefix
                    .bytes()
                    .enumerate()
                    .all(|(k, b)| fold(word.char_at(k)) == b as char)
            {
                regions.pin_r1(plen, word, &VOWELS);
                break;
            }
        }
        regions
    }

    /// Hash a `y` at the start of the word or after a vowel.
    fn hash_letters(&self, word: &mut Word) {
        for i in 0..word.len() {
            let c = word.char_at(i);
            if fold(c) == 'y'
                && (i == 0 || VOWELS.contains(word.char_at(i - 1)))
                && let Some(h) = hash::hashed(c)
            {
                word.set(i, h);
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

    /// True if the word ends in a short syllable: non-vowel, vowel,
    /// non-vowel other than `w`/`x`/hashed `y`; or a vowel-initial word of
    /// the shape vowel + non-vowel.
    fn ends_in_short_syllable(&self, word: &Word) -> bool {
        let n = word.len();
        if n >= 3 {
            let a = word.char_at(n - 3);
            let b = word.char_at(n - 2);
            let c = word.char_at(n - 1);
            if VOWELS.excludes(a)
                && VOWELS.contains(b)
                && VOWELS.excludes(c)
                && !matches!(fold(c), 'w' | 'x')
                && fold(c) != hash::HASH_Y
            {
                return true;
            }
        }
        n == 2 && VOWELS.contains(word.char_at(0)) && VOWELS.excludes(word.char_at(1))
    }

    /// A word is short when it ends in a short syllable and R1 is empty.
    fn is_short_word(&self, word: &Word) -> bool {
        self.ends_in_short_syllable(word) && self.regions(word).r1 >= word.len()
    }

    /// True if any character before `limit` is a vowel.
    fn has_vowel_before(&self, word: &Word, limit: usize) -> bool {
        (0..limit.min(word.len())).any(|i| VOWELS.contains(word.char_at(i)))
    }

    /// Step 0: possessive apostrophes.
    fn step_0(&self, word: &mut Word) {
        for suffix in ["'s'", "'s", "'"] {
            if word.ends_with(suffix) {
                word.truncate_by(suffix.chars().count());
                return;
            }
        }
    }

    /// Step 1a: plural forms.
    fn step_1a(&self, word: &mut Word) {
        if word.ends_with("sses") {
            word.truncate_by(2);
            return;
        }
        for suffix in ["ied", "ies"] {
            if word.ends_with(suffix) {
                if word.len() > 4 {
                    word.truncate_by(2);
                } else {
                    word.truncate_by(1);
                }
                return;
            }
        }
        if word.ends_with("ss") || word.ends_with("us") {
            return;
        }
        let n = word.len();
        if n >= 2 && fold(word.char_at(n - 1)) == 's' && self.has_vowel_before(word, n - 2) {
            word.truncate_by(1);
        }
    }

    /// Step 1b: `ed`/`ing` endings.
    fn step_1b(&self, word: &mut Word) {
        let r1 = self.regions(word).r1;
        for suffix in ["eedly", "eed"] {
            if word.ends_with(suffix) {
                if word.ends_with_in(suffix, r1) {
                    word.replace_suffix(suffix, "ee");
                }
                return;
            }
        }
        for suffix in ["ingly", "edly", "ing", "ed"] {
            let slen = suffix.chars().count();
            if word.ends_with(suffix) && self.has_vowel_before(word, word.len() - slen) {
                word.truncate_by(slen);
                if word.ends_with("at") || word.ends_with("bl") || word.ends_with("iz") {
                    word.push('e');
                } else if DOUBLES.iter().any(|d| word.ends_with(d)) {
                    word.truncate_by(1);
                } else if self.is_short_word(word) {
                    word.push('e');
                }
                return;
            }
        }
    }

    /// Step 1c: `y` → `i` after a non-vowel that is not the first letter.
    fn step_1c(&self, word: &mut Word) {
        let n = word.len();
        if n >= 3 {
            let last = fold(word.char_at(n - 1));
            if (last == 'y' || last == hash::HASH_Y) && VOWELS.excludes(word.char_at(n - 2)) {
                word.set(n - 1, 'i');
            }
        }
    }

    /// The longest literally-matching suffix commits the step: a failed
    /// region test removes nothing, but shorter nested suffixes (`ment`
    /// inside `ement`, `ent` inside `ment`) are no longer candidates.
    fn step_2(&self, word: &mut Word) {
        let r1 = self.regions(word).r1;
        for (suffix, replacement) in STEP_2_RULES {
            if word.ends_with(suffix) {
                word.replace_suffix_in(suffix, replacement, r1);
                return;
            }
        }
        if word.ends_with("ogi") {
            let n = word.len();
            if word.ends_with_in("ogi", r1) && n >= 4 && fold(word.char_at(n - 4)) == 'l' {
                word.truncate_by(1);
            }
            return;
        }
        if word.ends_with("li") {
            let n = word.len();
            if word.ends_with_in("li", r1) && n >= 3 && LI_ENDINGS.contains(word.char_at(n - 3)) {
                word.truncate_by(2);
            }
        }
    }

    fn step_3(&self, word: &mut Word) {
        let Regions { r1, r2, .. } = self.regions(word);
        for (suffix, replacement) in STEP_3_RULES {
            if word.ends_with(suffix) {
                word.replace_suffix_in(suffix, replacement, r1);
                return;
            }
        }
        word.delete_suffix_in("ative", r2);
    }

    fn step_4(&self, word: &mut Word) {
        let r2 = self.regions(word).r2;
        for suffix in STEP_4_SUFFIXES {
            if word.ends_with(suffix) {
                word.delete_suffix_in(suffix, r2);
                return;
            }
        }
        if word.ends_with("ion") {
            let n = word.len();
            if word.ends_with_in("ion", r2)
                && n >= 4
                && matches!(fold(word.char_at(n - 4)), 's' | 't')
            {
                word.truncate_by(3);
            }
        }
    }

    /// Step 5: final `e`/`l` cleanup.
    fn step_5(&self, word: &mut Word) {
        let Regions { r1, r2, .. } = self.regions(word);
        let n = word.len();
        if n >= 1 && fold(word.char_at(n - 1)) == 'e' {
            if n - 1 >= r2 {
                word.truncate_by(1);
                return;
            }
            if n - 1 >= r1 {
                let mut stem = word.clone();
                stem.truncate_by(1);
                if !self.ends_in_short_syllable(&stem) {
                    word.truncate_by(1);
                }
            }
            return;
        }
        if n >= 2
            && n - 1 >= r2
            && fold(word.char_at(n - 1)) == 'l'
            && fold(word.char_at(n - 2)) == 'l'
        {
            word.truncate_by(1);
        }
    }
}

impl Stemmer for EnglishStemmer {
    fn stem(&self, word: &str) -> String {
        let mut w = Word::new(word);
        w.trim_punctuation();
        if w.len() < 3 {
            return word.to_string();
        }

        let folded: String = w.chars().iter().map(|&c| fold(c)).collect();
        if let Some(&(_, replacement)) = EXCEPTIONAL_FORMS.iter().find(|(f, _)| *f == folded) {
            return replacement.to_string();
        }
        if INVARIANT_FORMS.contains(&folded.as_str()) {
            return w.to_string();
        }

        self.hash_letters(&mut w);

        self.step_0(&mut w);
        self.step_1a(&mut w);

        let folded: String = w.chars().iter().map(|&c| fold(c)).collect();
        if POST_1A_INVARIANTS.contains(&folded.as_str()) {
            self.unhash_letters(&mut w);
            return w.to_string();
        }

        self.step_1b(&mut w);
        self.step_1c(&mut w);
        self.step_2(&mut w);
        self.step_3(&mut w);
        self.step_4(&mut w);
        self.step_5(&mut w);

        self.unhash_letters(&mut w);
        w.to_string()
    }

    fn name(&self) -> &'static str {
        "english"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivational_suffixes() {
        let stemmer = EnglishStemmer::new();

        assert_eq!(stemmer.stem("documentation"), "document");
        assert_eq!(stemmer.stem("documenting"), "document");
        assert_eq!(stemmer.stem("national"), "nation");
        assert_eq!(stemmer.stem("conditional"), "condit");
        assert_eq!(stemmer.stem("beautiful"), "beauti");
    }

    #[test]
    fn test_ed_ing_undoubling() {
        let stemmer = EnglishStemmer::new();

        assert_eq!(stemmer.stem("running"), "run");
        assert_eq!(stemmer.stem("hoping"), "hope");
        assert_eq!(stemmer.stem("agreed"), "agre");
    }

    #[test]
    fn test_plurals() {
        let stemmer = EnglishStemmer::new();

        assert_eq!(stemmer.stem("flies"), "fli");
    }

    #[test]
    fn test_exceptional_forms() {
        let stemmer = EnglishStemmer::new();

        assert_eq!(stemmer.stem("dying"), "die");
        assert_eq!(stemmer.stem("sky"), "sky");
    }

    #[test]
    fn test_hashed_y() {
        let stemmer = EnglishStemmer::new();

        assert_eq!(stemmer.stem("saying"), "say");
    }

    #[test]
    fn test_r1_prefix_exception() {
        let stemmer = EnglishStemmer::new();

        assert_eq!(stemmer.stem("generate"), "generat");
        // R2 starts after the pinned R1, so the step 4 suffixes stay put.
        assert_eq!(stemmer.stem("generic"), "generic");
        assert_eq!(stemmer.stem("arsenic"), "arsenic");
    }

    #[test]
    fn test_final_e() {
        let stemmer = EnglishStemmer::new();

        assert_eq!(stemmer.stem("hopeful"), "hope");
    }

    #[test]
    fn test_min_length_guard() {
        let stemmer = EnglishStemmer::new();

        assert_eq!(stemmer.stem("is"), "is");
        assert_eq!(stemmer.stem("by"), "by");
    }
}
