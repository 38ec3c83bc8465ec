//! French stemming pipeline.
//!
//! Hashing marks `u`/`i` between vowels, `y` next to a vowel, and `u` after
//! `q` as consonants before the steps run. The steps work over R1, R2 and
//! the French RV (with the `par`/`col`/`tap` exception): standard suffix
//! removal, the `i`-verb and general verb suffix passes gated on the step 1
//! outcome, residual cleanup, undoubling of `enn`/`onn`/`ett`/`ell`/`eill`,
//! and un-accenting a final `é`/`è` syllable. Hashed letters appear inside a
//! few patterns (spelled with their sentinel escapes, see `crate::hash`).

use super::Stemmer;
use crate::char_class::CharClass;
use crate::hash;
use crate::region::{Regions, RvStyle};
use crate::word::{Word, fold};

const VOWELS: CharClass = CharClass::new("aeiouyâàëéêèïîôûùAEIOUYÂÀËÉÊÈÏÎÔÛÙ");

/// Verb suffixes beginning with `i` (step 2a), longest first. `\u{E001}` is
/// the hashed `i`.
const STEP_2A_SUFFIXES: &[&str] = &[
    "issa\u{E001}ent",
    "issantes",
    "ira\u{E001}ent",
    "issante",
    "issants",
    "issions",
    "irions",
    "issais",
    "issait",
    "issant",
    "issent",
    "issiez",
    "issons",
    "irais",
    "irait",
    "irent",
    "iriez",
    "irons",
    "iront",
    "isses",
    "issez",
    "îmes",
    "îtes",
    "irai",
    "iras",
    "irez",
    "isse",
    "ies",
    "ira",
    "ît",
    "ie",
    "ir",
    "is",
    "it",
    "i",
];

/// What step 2b does with a matched verb suffix: the `é`-family is deleted
/// in RV, the `a`-family additionally takes a preceding `e`, and `ions`
/// needs R2.
#[derive(Debug, Clone, Copy)]
enum VerbSuffixAction {
    Delete,
    DeleteWithPrecedingE,
    DeleteInR2,
}

/// Verb suffixes of step 2b, longest first across both families so a
/// shorter tail (`ions` inside `erions`/`assions`) never pre-empts the
/// longer form.
const STEP_2B_SUFFIXES: &[(&str, VerbSuffixAction)] = &[
    ("era\u{E001}ent", VerbSuffixAction::Delete),
    ("assions", VerbSuffixAction::DeleteWithPrecedingE),
    ("erions", VerbSuffixAction::Delete),
    ("assiez", VerbSuffixAction::DeleteWithPrecedingE),
    ("assent", VerbSuffixAction::DeleteWithPrecedingE),
    ("èrent", VerbSuffixAction::Delete),
    ("erais", VerbSuffixAction::Delete),
    ("erait", VerbSuffixAction::Delete),
    ("eriez", VerbSuffixAction::Delete),
    ("erons", VerbSuffixAction::Delete),
    ("eront", VerbSuffixAction::Delete),
    ("a\u{E001}ent", VerbSuffixAction::DeleteWithPrecedingE),
    ("asses", VerbSuffixAction::DeleteWithPrecedingE),
    ("antes", VerbSuffixAction::DeleteWithPrecedingE),
    ("erai", VerbSuffixAction::Delete),
    ("eras", VerbSuffixAction::Delete),
    ("erez", VerbSuffixAction::Delete),
    ("ions", VerbSuffixAction::DeleteInR2),
    ("âmes", VerbSuffixAction::DeleteWithPrecedingE),
    ("âtes", VerbSuffixAction::DeleteWithPrecedingE),
    ("asse", VerbSuffixAction::DeleteWithPrecedingE),
    ("ante", VerbSuffixAction::DeleteWithPrecedingE),
    ("ants", VerbSuffixAction::DeleteWithPrecedingE),
    ("ées", VerbSuffixAction::Delete),
    ("era", VerbSuffixAction::Delete),
    ("iez", VerbSuffixAction::Delete),
    ("ais", VerbSuffixAction::DeleteWithPrecedingE),
    ("ait", VerbSuffixAction::DeleteWithPrecedingE),
    ("ant", VerbSuffixAction::DeleteWithPrecedingE),
    ("ée", VerbSuffixAction::Delete),
    ("és", VerbSuffixAction::Delete),
    ("er", VerbSuffixAction::Delete),
    ("ez", VerbSuffixAction::Delete),
    ("as", VerbSuffixAction::DeleteWithPrecedingE),
    ("ât", VerbSuffixAction::DeleteWithPrecedingE),
    ("ai", VerbSuffixAction::DeleteWithPrecedingE),
    ("é", VerbSuffixAction::Delete),
    ("a", VerbSuffixAction::DeleteWithPrecedingE),
];

/// French stemming algorithm.
#[derive(Debug, Clone, Default)]
pub struct FrenchStemmer;

/// Outcome of step 1, consulted when deciding whether the verb-suffix steps
/// run and which of step 3/step 4 follows.
struct Step1Outcome {
    altered: bool,
    found_ment: bool,
}

impl FrenchStemmer {
    /// Create a new French stemmer.
    pub fn new() -> Self {
        FrenchStemmer
    }

    fn regions(&self, word: &Word) -> Regions {
        Regions::compute(word, &VOWELS, RvStyle::French)
    }

    /// Hash `u`/`i` between vowels, `y` next to a vowel, and `u` after `q`.
    fn hash_letters(&self, word: &mut Word) {
        for i in 0..word.len() {
            let c = word.char_at(i);
            let between_vowels = i > 0
                && i + 1 < word.len()
                && VOWELS.contains(word.char_at(i - 1))
                && VOWELS.contains(word.char_at(i + 1));
            let hash_it = match fold(c) {
                'u' => between_vowels || (i > 0 && fold(word.char_at(i - 1)) == 'q'),
                'i' => between_vowels,
                'y' => {
                    (i > 0 && VOWELS.contains(word.char_at(i - 1)))
                        || (i + 1 < word.len() && VOWELS.contains(word.char_at(i + 1)))
                }
                _ => false,
            };
            if hash_it
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

    /// After deleting an `atrice`/`ateur`/`ation` suffix, a preceding `ic`
    /// is deleted in R2 or rewritten to `iqU`.
    fn trim_ic(&self, word: &mut Word) {
        let r2 = self.regions(word).r2;
        if word.ends_with("ic") {
            if !word.delete_suffix_in("ic", r2) {
                word.replace_suffix("ic", "iq\u{E003}");
            }
        }
    }

    /// Step 1: standard suffix removal.
    fn step_1(&self, word: &mut Word) -> Step1Outcome {
        let Regions { r1, r2, rv } = self.regions(word);
        let mut outcome = Step1Outcome {
            altered: false,
            found_ment: false,
        };

        // issement(s): R1, preceded by a non-vowel
        for suffix in ["issements", "issement"] {
            let slen = suffix.chars().count();
            if word.ends_with_in(suffix, r1)
                && word.len() > slen
                && VOWELS.excludes(word.char_at(word.len() - slen - 1))
            {
                word.truncate_by(slen);
                outcome.altered = true;
                return outcome;
            }
        }

        // atrice/ateur/ation family: R2, with the ic after-rule
        for suffix in ["atrices", "atrice", "ateurs", "ations", "ateur", "ation"] {
            if word.delete_suffix_in(suffix, r2) {
                self.trim_ic(word);
                outcome.altered = true;
                return outcome;
            }
        }

        if word.ends_with("amment") {
            outcome.found_ment = true;
            if word.replace_suffix_in("amment", "ant", rv) {
                outcome.altered = true;
                return outcome;
            }
        }
        if word.ends_with("emment") {
            outcome.found_ment = true;
            if word.replace_suffix_in("emment", "ent", rv) {
                outcome.altered = true;
                return outcome;
            }
        }

        if word.replace_suffix_in("logies", "log", r2) || word.replace_suffix_in("logie", "log", r2)
        {
            outcome.altered = true;
            return outcome;
        }
        for suffix in ["usions", "utions", "usion", "ution"] {
            if word.replace_suffix_in(suffix, "u", r2) {
                outcome.altered = true;
                return outcome;
            }
        }
        if word.replace_suffix_in("ences", "ent", r2) || word.replace_suffix_in("ence", "ent", r2) {
            outcome.altered = true;
            return outcome;
        }

        // ement(s): RV, with its cluster of after-rules
        for suffix in ["ements", "ement"] {
            if word.delete_suffix_in(suffix, rv) {
                let Regions { r1, r2, rv } = self.regions(word);
                if word.delete_suffix_in("iv", r2) {
                    let r2 = self.regions(word).r2;
                    word.delete_suffix_in("at", r2);
                } else if word.ends_with("eus") {
                    if !word.delete_suffix_in("eus", r2) {
                        word.replace_suffix_in("eus", "eux", r1);
                    }
                } else if word.delete_suffix_in("abl", r2)
                    || word.delete_suffix_in("iq\u{E003}", r2)
                {
                    // deleted
                } else {
                    let _ = word.replace_suffix_in("ièr", "i", rv)
                        || word.replace_suffix_in("\u{E001}èr", "i", rv);
                }
                outcome.altered = true;
                return outcome;
            }
        }

        // ité(s): R2, with abil/ic/iv after-rules
        for suffix in ["ités", "ité"] {
            if word.delete_suffix_in(suffix, r2) {
                let r2 = self.regions(word).r2;
                if word.ends_with("abil") {
                    if !word.delete_suffix_in("abil", r2) {
                        word.replace_suffix("abil", "abl");
                    }
                } else if word.ends_with("ic") {
                    if !word.delete_suffix_in("ic", r2) {
                        word.replace_suffix("ic", "iq\u{E003}");
                    }
                } else {
                    word.delete_suffix_in("iv", r2);
                }
                outcome.altered = true;
                return outcome;
            }
        }

        // if/ive family: R2, with at/ic after-rules
        for suffix in ["ives", "ive", "ifs", "if"] {
            if word.delete_suffix_in(suffix, r2) {
                let r2 = self.regions(word).r2;
                if word.delete_suffix_in("at", r2) {
                    self.trim_ic(word);
                }
                outcome.altered = true;
                return outcome;
            }
        }

        // euse(s): R2 delete, else R1 -> eux
        for suffix in ["euses", "euse"] {
            if word.ends_with(suffix) {
                if word.delete_suffix_in(suffix, r2) {
                    outcome.altered = true;
                    return outcome;
                }
                if word.replace_suffix_in(suffix, "eux", r1) {
                    outcome.altered = true;
                    return outcome;
                }
            }
        }

        // the plain R2 deletions
        const PLAIN_R2: &[&str] = &[
            "ances", "iq\u{E003}es", "ismes", "ables", "istes", "ance", "iq\u{E003}e", "isme",
            "able", "iste", "eux",
        ];
        if word.delete_longest_in(PLAIN_R2, r2) {
            outcome.altered = true;
            return outcome;
        }

        if word.replace_suffix("eaux", "eau") {
            outcome.altered = true;
            return outcome;
        }
        if word.replace_suffix_in("aux", "al", r1) {
            outcome.altered = true;
            return outcome;
        }

        // ment(s): deleted when preceded by a vowel in RV
        for suffix in ["ments", "ment"] {
            if word.ends_with(suffix) {
                outcome.found_ment = true;
                let slen = suffix.chars().count();
                let start = word.len() - slen;
                if start >= 1 && start - 1 >= rv && VOWELS.contains(word.char_at(start - 1)) {
                    word.truncate_by(slen);
                    outcome.altered = true;
                    return outcome;
                }
            }
        }

        outcome
    }

    /// Step 2a: verb suffixes beginning with `i`, deleted in RV after a
    /// non-vowel that is itself in RV.
    fn step_2a(&self, word: &mut Word) -> bool {
        let rv = self.regions(word).rv;
        for suffix in STEP_2A_SUFFIXES {
            let slen = suffix.chars().count();
            if word.ends_with_in(suffix, rv) {
                let start = word.len() - slen;
                if start >= 1 && start - 1 >= rv && VOWELS.excludes(word.char_at(start - 1)) {
                    word.truncate_by(slen);
                    return true;
                }
            }
        }
        false
    }

    /// Step 2b: other verb suffixes.
    fn step_2b(&self, word: &mut Word) -> bool {
        let Regions { r2, rv, .. } = self.regions(word);

        for (suffix, action) in STEP_2B_SUFFIXES {
            match action {
                VerbSuffixAction::Delete => {
                    if word.delete_suffix_in(suffix, rv) {
                        return true;
                    }
                }
                VerbSuffixAction::DeleteWithPrecedingE => {
                    if word.delete_suffix_in(suffix, rv) {
                        let rv = self.regions(word).rv;
                        let n = word.len();
                        if n >= 1 && n - 1 >= rv && fold(word.char_at(n - 1)) == 'e' {
                            word.truncate_by(1);
                        }
                        return true;
                    }
                }
                VerbSuffixAction::DeleteInR2 => {
                    if word.ends_with_in(suffix, rv) && word.delete_suffix_in(suffix, r2) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Step 3: final hashed `Y` becomes `i`, final `ç` becomes `c`.
    fn step_3(&self, word: &mut Word) {
        let n = word.len();
        if n == 0 {
            return;
        }
        let last = fold(word.char_at(n - 1));
        if last == hash::HASH_Y {
            word.set(n - 1, 'i');
        } else if last == 'ç' {
            word.set(n - 1, 'c');
        }
    }

    /// Step 4: residual suffixes.
    fn step_4(&self, word: &mut Word) {
        let n = word.len();
        if n >= 2 && fold(word.char_at(n - 1)) == 's' {
            let before = fold(word.char_at(n - 2));
            if !matches!(before, 'a' | 'i' | 'o' | 'u' | 'è' | 's') {
                word.truncate_by(1);
            }
        }

        let Regions { r2, rv, .. } = self.regions(word);
        if word.ends_with_in("ion", rv) && word.ends_with_in("ion", r2) {
            let start = word.len() - 3;
            if start >= 1 && start - 1 >= rv && matches!(fold(word.char_at(start - 1)), 's' | 't') {
                word.truncate_by(3);
                return;
            }
        }
        for suffix in ["ière", "\u{E001}ère", "ier", "\u{E001}er"] {
            if word.replace_suffix_in(suffix, "i", rv) {
                return;
            }
        }
        if word.delete_suffix_in("e", rv) {
            return;
        }
        if word.ends_with_in("ë", rv) && word.ends_with("guë") {
            word.truncate_by(1);
        }
    }

    /// Step 5: undouble `enn`/`onn`/`ett`/`ell`/`eill`.
    fn step_5(&self, word: &mut Word) {
        for ending in ["enn", "onn", "ett", "ell", "eill"] {
            if word.ends_with(ending) {
                word.truncate_by(1);
                return;
            }
        }
    }

    /// Step 6: un-accent `é`/`è` followed only by non-vowels.
    fn step_6(&self, word: &mut Word) {
        let n = word.len();
        let mut i = n;
        while i > 0 && VOWELS.excludes(word.char_at(i - 1)) {
            i -= 1;
        }
        if i < n && i > 0 {
            match word.char_at(i - 1) {
                'é' | 'è' => word.set(i - 1, 'e'),
                'É' | 'È' => word.set(i - 1, 'E'),
                _ => {}
            }
        }
    }
}

impl Stemmer for FrenchStemmer {
    fn stem(&self, word: &str) -> String {
        let mut w = Word::new(word);
        w.trim_punctuation();
        if w.len() < 3 {
            return word.to_string();
        }

        self.hash_letters(&mut w);

        let outcome = self.step_1(&mut w);
        let mut last_altered = outcome.altered;
        if !outcome.altered || outcome.found_ment {
            last_altered = self.step_2a(&mut w);
            if !last_altered {
                last_altered = self.step_2b(&mut w);
            }
        }
        if last_altered {
            self.step_3(&mut w);
        } else {
            self.step_4(&mut w);
        }
        self.step_5(&mut w);
        self.step_6(&mut w);

        self.unhash_letters(&mut w);
        w.to_string()
    }

    fn name(&self) -> &'static str {
        "french"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_suffixes() {
        let stemmer = FrenchStemmer::new();

        assert_eq!(stemmer.stem("intégralement"), "intégral");
        assert_eq!(stemmer.stem("amusement"), "amus");
        assert_eq!(stemmer.stem("majestueux"), "majestu");
        assert_eq!(stemmer.stem("chevaux"), "cheval");
    }

    #[test]
    fn test_verb_suffixes() {
        let stemmer = FrenchStemmer::new();

        assert_eq!(stemmer.stem("finissait"), "fin");
        assert_eq!(stemmer.stem("donnera"), "don");
    }

    #[test]
    fn test_verb_suffix_ordering() {
        let stemmer = FrenchStemmer::new();

        // "erions"/"assions" must win over their "ions" tail
        assert_eq!(stemmer.stem("aimerions"), "aim");
        assert_eq!(stemmer.stem("donnassions"), "don");
    }

    #[test]
    fn test_hashed_y_to_i() {
        let stemmer = FrenchStemmer::new();

        assert_eq!(stemmer.stem("payer"), "pai");
    }

    #[test]
    fn test_final_accent() {
        let stemmer = FrenchStemmer::new();

        assert_eq!(stemmer.stem("complètement"), "complet");
        assert_eq!(stemmer.stem("vêtements"), "vêt");
    }

    #[test]
    fn test_min_length_guard() {
        let stemmer = FrenchStemmer::new();

        assert_eq!(stemmer.stem("où"), "où");
    }

    #[test]
    fn test_hash_round_trip() {
        let stemmer = FrenchStemmer::new();

        for input in ["payer", "oui", "aiguë", "Yeux", "quoi", "joyeux"] {
            let mut w = Word::new(input);
            stemmer.hash_letters(&mut w);
            stemmer.unhash_letters(&mut w);
            assert_eq!(w.to_string(), input);
        }
    }
}
