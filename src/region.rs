//! Region boundaries (R1, R2, RV) over a word buffer.
//!
//! The suffix-stripping rules are only allowed to fire when the matched
//! suffix lies inside a region of the word. R1 is the region after the first
//! non-vowel following a vowel; R2 is R1 applied again to the tail starting
//! at R1; RV follows a language-family-specific rule. Regions are derived
//! from the current buffer contents and must be recomputed in full after
//! every mutation — a single deletion can shift every later boundary.
//!
//! For `"beautiful"` with the English vowels, R1 is `"iful"` and R2 is
//! `"ul"`; for `"beauty"` R2 is empty.

use crate::char_class::CharClass;
use crate::word::Word;

/// How RV is derived for a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RvStyle {
    /// The language does not use RV; it is pinned to the end of the word.
    None,
    /// The shared Italian/Portuguese/Spanish rule.
    Romance,
    /// The French rule, with the `par`/`col`/`tap` prefix exception.
    French,
}

/// The three cut points partitioning a word for suffix stripping.
///
/// Invariant: `r1 <= r2 <= len` and `rv <= len` hold after [`Regions::compute`]
/// and after [`Regions::clamp_r1`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub r1: usize,
    pub r2: usize,
    pub rv: usize,
}

impl Regions {
    /// Derive all three boundaries from the current buffer contents.
    pub fn compute(word: &Word, vowels: &CharClass, style: RvStyle) -> Self {
        let r1 = after_vowel_non_vowel(word, vowels, 0);
        let r2 = after_vowel_non_vowel(word, vowels, r1);
        let rv = match style {
            RvStyle::None => word.len(),
            RvStyle::Romance => rv_romance(word, vowels),
            RvStyle::French => rv_french(word, vowels),
        };
        Regions { r1, r2, rv }
    }

    /// Impose a minimum number of characters before R1 (several languages
    /// require at least 3). Applied once, right after computation.
    pub fn clamp_r1(&mut self, min: usize, len: usize) {
        self.r1 = self.r1.max(min).min(len);
        self.r2 = self.r2.max(self.r1).min(len);
    }

    /// Pin R1 at a fixed offset (the English prefix exceptions) and
    /// re-derive R2 from the new R1, since R2 is defined as the R1 rule
    /// applied to the tail starting at R1.
    pub fn pin_r1(&mut self, r1: usize, word: &Word, vowels: &CharClass) {
        self.r1 = r1.min(word.len());
        self.r2 = after_vowel_non_vowel(word, vowels, self.r1);
    }
}

/// Index just past the first non-vowel that follows a vowel, scanning from
/// `from`; the word length if there is none.
fn after_vowel_non_vowel(word: &Word, vowels: &CharClass, from: usize) -> usize {
    let chars = word.chars();
    let mut i = from;
    while i < chars.len() && !vowels.contains(chars[i]) {
        i += 1;
    }
    while i < chars.len() && vowels.contains(chars[i]) {
        i += 1;
    }
    if i < chars.len() { i + 1 } else { chars.len() }
}

/// The Italian/Portuguese/Spanish RV rule: if the second letter is a
/// consonant, RV starts after the next vowel; if the first two letters are
/// vowels, RV starts after the next consonant; otherwise (consonant-vowel)
/// RV starts after the third letter. End of word when not found.
fn rv_romance(word: &Word, vowels: &CharClass) -> usize {
    let chars = word.chars();
    let len = chars.len();
    if len < 2 {
        return len;
    }
    if !vowels.contains(chars[1]) {
        for i in 2..len {
            if vowels.contains(chars[i]) {
                return i + 1;
            }
        }
        len
    } else if vowels.contains(chars[0]) {
        for i in 2..len {
            if !vowels.contains(chars[i]) {
                return i + 1;
            }
        }
        len
    } else {
        3.min(len)
    }
}

/// The French RV rule: after the third letter when the word begins with two
/// vowels or with `par`/`col`/`tap`; otherwise after the first vowel not at
/// the start of the word. End of word when not found.
fn rv_french(word: &Word, vowels: &CharClass) -> usize {
    let chars = word.chars();
    let len = chars.len();
    if len >= 2 && vowels.contains(chars[0]) && vowels.contains(chars[1]) {
        return 3.min(len);
    }
    if word.starts_with("par") || word.starts_with("col") || word.starts_with("tap") {
        return 3;
    }
    for i in 1..len {
        if vowels.contains(chars[i]) {
            return i + 1;
        }
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;

    const EN_VOWELS: CharClass = CharClass::new("aeiouyAEIOUY");
    const FR_VOWELS: CharClass = CharClass::new("aeiouyâàëéêèïîôûùAEIOUYÂÀËÉÊÈÏÎÔÛÙ");
    const ES_VOWELS: CharClass = CharClass::new("aeiouáéíóúüAEIOUÁÉÍÓÚÜ");

    fn regions(word: &str, vowels: &CharClass, style: RvStyle) -> Regions {
        Regions::compute(&Word::new(word), vowels, style)
    }

    #[test]
    fn test_r1_r2() {
        // beautiful: R1 = "iful", R2 = "ul"
        let r = regions("beautiful", &EN_VOWELS, RvStyle::None);
        assert_eq!((r.r1, r.r2), (5, 7));

        // beauty: R1 = "y", R2 empty
        let r = regions("beauty", &EN_VOWELS, RvStyle::None);
        assert_eq!((r.r1, r.r2), (5, 6));

        // beau: both empty
        let r = regions("beau", &EN_VOWELS, RvStyle::None);
        assert_eq!((r.r1, r.r2), (4, 4));
    }

    #[test]
    fn test_monotonicity() {
        for word in ["", "a", "xyzzy", "aaaa", "bcdf", "animadversion"] {
            let r = regions(word, &EN_VOWELS, RvStyle::None);
            let len = word.chars().count();
            assert!(r.r1 <= r.r2 && r.r2 <= len);
            assert!(r.rv <= len);
        }
    }

    #[test]
    fn test_rv_romance() {
        // macho -> "ho", oliva -> "va", trabajo -> "bajo", áureo -> "eo"
        assert_eq!(regions("macho", &ES_VOWELS, RvStyle::Romance).rv, 3);
        assert_eq!(regions("oliva", &ES_VOWELS, RvStyle::Romance).rv, 3);
        assert_eq!(regions("trabajo", &ES_VOWELS, RvStyle::Romance).rv, 3);
        assert_eq!(regions("áureo", &ES_VOWELS, RvStyle::Romance).rv, 3);
    }

    #[test]
    fn test_rv_french() {
        // aimer -> "er", adorer -> "rer", voler -> "ler", tapis -> "is"
        assert_eq!(regions("aimer", &FR_VOWELS, RvStyle::French).rv, 3);
        assert_eq!(regions("adorer", &FR_VOWELS, RvStyle::French).rv, 3);
        assert_eq!(regions("voler", &FR_VOWELS, RvStyle::French).rv, 2);
        assert_eq!(regions("tapis", &FR_VOWELS, RvStyle::French).rv, 3);
    }

    #[test]
    fn test_pin_r1_rederives_r2() {
        let word = Word::new("generate");
        let mut r = Regions::compute(&word, &EN_VOWELS, RvStyle::None);
        assert_eq!((r.r1, r.r2), (3, 5));
        r.pin_r1(5, &word, &EN_VOWELS);
        // R2 is the R1 rule applied from the pinned R1, not the stale value.
        assert_eq!((r.r1, r.r2), (5, 7));
    }

    #[test]
    fn test_clamp_r1() {
        let mut r = regions("øre", &CharClass::new("aeiouyæåøAEIOUYÆÅØ"), RvStyle::None);
        assert_eq!(r.r1, 2);
        r.clamp_r1(3, 3);
        assert_eq!(r.r1, 3);
        assert!(r.r1 <= r.r2);
    }
}
