//! Italian stemming pipeline.
//!
//! Acute accents are normalized to grave before hashing marks `u` after `q`
//! and `u`/`i` between vowels as consonants. The steps work over R1/R2 and
//! the Romance RV: attached-pronoun removal after `ando`/`endo` or
//! `ar`/`er`/`ir`, standard suffix removal, verb suffixes in RV when step 1
//! removed nothing, and a final-vowel cleanup with `ch`/`gh` reduction.

use super::Stemmer;
use crate::char_class::CharClass;
use crate::hash;
use crate::region::{Regions, RvStyle};
use crate::word::{Word, fold};

const VOWELS: CharClass = CharClass::new("aeiouàèìòùAEIOUÀÈÌÒÙ");

/// Acute accents rewritten to grave at pipeline entry.
const ACCENT_MAP: &[(char, char)] = &[
    ('á', 'à'),
    ('é', 'è'),
    ('í', 'ì'),
    ('ó', 'ò'),
    ('ú', 'ù'),
    ('Á', 'À'),
    ('É', 'È'),
    ('Í', 'Ì'),
    ('Ó', 'Ò'),
    ('Ú', 'Ù'),
];

/// Attached pronouns of step 0, longest first.
const PRONOUNS: &[&str] = &[
    "gliela", "gliele", "glieli", "glielo", "gliene", "sene", "mela", "mele", "meli", "melo",
    "mene", "tela", "tele", "teli", "telo", "tene", "cela", "cele", "celi", "celo", "cene", "vela",
    "vele", "veli", "velo", "vene", "gli", "ci", "la", "le", "li", "lo", "mi", "ne", "si", "ti",
    "vi",
];

/// Verb suffixes of step 2, longest first. `\u{E001}` is a hashed
/// intervocalic `i`, as in `abbaIamo`.
const STEP_2_SUFFIXES: &[&str] = &[
    "erebbero",
    "irebbero",
    "assero",
    "assimo",
    "eranno",
    "erebbe",
    "eremmo",
    "ereste",
    "eresti",
    "essero",
    "iranno",
    "irebbe",
    "iremmo",
    "ireste",
    "iresti",
    "iscano",
    "iscono",
    "issero",
    "arono",
    "avamo",
    "avano",
    "avate",
    "eremo",
    "erete",
    "erono",
    "evamo",
    "evano",
    "evate",
    "ivamo",
    "ivano",
    "ivate",
    "ammo",
    "ando",
    "asse",
    "assi",
    "emmo",
    "enda",
    "ende",
    "endi",
    "endo",
    "erai",
    "\u{E001}amo",
    "iamo",
    "iate",
    "irai",
    "isca",
    "isce",
    "isci",
    "isco",
    "ano",
    "are",
    "ata",
    "ate",
    "ati",
    "ato",
    "ava",
    "avi",
    "avo",
    "erà",
    "ere",
    "erò",
    "ete",
    "eva",
    "evi",
    "evo",
    "irà",
    "ire",
    "irò",
    "ita",
    "ite",
    "iti",
    "ito",
    "iva",
    "ivi",
    "ivo",
    "ono",
    "uta",
    "ute",
    "uti",
    "uto",
    "ia",
    "ar",
    "ir",
];

/// Italian stemming algorithm.
#[derive(Debug, Clone, Default)]
pub struct ItalianStemmer;

impl ItalianStemmer {
    /// Create a new Italian stemmer.
    pub fn new() -> Self {
        ItalianStemmer
    }

    fn regions(&self, word: &Word) -> Regions {
        Regions::compute(word, &VOWELS, RvStyle::Romance)
    }

    fn normalize_accents(&self, word: &mut Word) {
        for i in 0..word.len() {
            let c = word.char_at(i);
            if let Some(&(_, grave)) = ACCENT_MAP.iter().find(|(acute, _)| *acute == c) {
                word.set(i, grave);
            }
        }
    }

    /// Hash `u` after `q` and `u`/`i` between vowels.
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

    /// Step 0: attached pronouns after a gerund or infinitive ending in RV.
    fn step_0(&self, word: &mut Word) {
        let rv = self.regions(word).rv;
        for pronoun in PRONOUNS {
            let plen = pronoun.chars().count();
            if !word.ends_with_in(pronoun, rv) {
                continue;
            }
            let stem_end = word.len() - plen;
            let gerund = ["ando", "endo"].iter().any(|g| {
                stem_end >= 4
                    && stem_end - 4 >= rv
                    && g.bytes()
                        .enumerate()
                        .all(|(k, b)| fold(word.char_at(stem_end - 4 + k)) == b as char)
            });
            if gerund {
                word.truncate_by(plen);
                return;
            }
            let infinitive = ["ar", "er", "ir"].iter().any(|g| {
                stem_end >= 2
                    && stem_end - 2 >= rv
                    && g.bytes()
                        .enumerate()
                        .all(|(k, b)| fold(word.char_at(stem_end - 2 + k)) == b as char)
            });
            if infinitive {
                word.truncate_by(plen);
                word.push('e');
            }
            return;
        }
    }

    /// Step 1: standard suffix removal. Returns true when a suffix came off.
    fn step_1(&self, word: &mut Word) -> bool {
        let Regions { r1, r2, rv } = self.regions(word);

        for suffix in ["azione", "azioni", "atore", "atori"] {
            if word.delete_suffix_in(suffix, r2) {
                let r2 = self.regions(word).r2;
                word.delete_suffix_in("ic", r2);
                return true;
            }
        }
        for suffix in ["uzione", "uzioni", "usione", "usioni"] {
            if word.replace_suffix_in(suffix, "u", r2) {
                return true;
            }
        }
        for suffix in ["amento", "amenti", "imento", "imenti"] {
            if word.delete_suffix_in(suffix, rv) {
                return true;
            }
        }
        if word.ends_with("amente") && word.delete_suffix_in("amente", r1) {
            let r2 = self.regions(word).r2;
            if word.delete_suffix_in("iv", r2) {
                let r2 = self.regions(word).r2;
                word.delete_suffix_in("at", r2);
            } else {
                let _ = word.delete_suffix_in("os", r2)
                    || word.delete_suffix_in("ic", r2)
                    || word.delete_suffix_in("abil", r2);
            }
            return true;
        }
        if word.replace_suffix_in("logia", "log", r2) || word.replace_suffix_in("logie", "log", r2)
        {
            return true;
        }
        if word.replace_suffix_in("enza", "ente", r2) || word.replace_suffix_in("enze", "ente", r2)
        {
            return true;
        }
        for suffix in ["abile", "abili", "ibile", "ibili", "mente"] {
            if word.delete_suffix_in(suffix, r2) {
                return true;
            }
        }
        const PLAIN_R2: &[&str] = &[
            "anza", "anze", "iche", "ichi", "ismo", "ismi", "ista", "iste", "isti", "istà", "istè",
            "istì", "oso", "osi", "osa", "ose",
        ];
        if word.delete_longest_in(PLAIN_R2, r2) {
            return true;
        }
        if word.delete_suffix_in("ità", r2) {
            let r2 = self.regions(word).r2;
            let _ = word.delete_suffix_in("abil", r2)
                || word.delete_suffix_in("ic", r2)
                || word.delete_suffix_in("iv", r2);
            return true;
        }
        for suffix in ["ivo", "ivi", "iva", "ive"] {
            if word.delete_suffix_in(suffix, r2) {
                let r2 = self.regions(word).r2;
                if word.delete_suffix_in("at", r2) {
                    let r2 = self.regions(word).r2;
                    word.delete_suffix_in("ic", r2);
                }
                return true;
            }
        }
        word.delete_longest_in(&["ico", "ici", "ica", "ice"], r2)
    }

    /// Step 2: verb suffixes in RV.
    fn step_2(&self, word: &mut Word) {
        let rv = self.regions(word).rv;
        word.delete_longest_in(STEP_2_SUFFIXES, rv);
    }

    /// Step 3a: a final vowel in RV, together with a preceding `i` in RV.
    fn step_3a(&self, word: &mut Word) {
        let rv = self.regions(word).rv;
        let n = word.len();
        if n >= 1
            && n - 1 >= rv
            && matches!(fold(word.char_at(n - 1)), 'a' | 'e' | 'i' | 'o' | 'à' | 'è' | 'ì' | 'ò')
        {
            word.truncate_by(1);
            let m = word.len();
            if m >= 1 && m - 1 >= rv && fold(word.char_at(m - 1)) == 'i' {
                word.truncate_by(1);
            }
        }
    }

    /// Step 3b: reduce a final `ch`/`gh` in RV.
    fn step_3b(&self, word: &mut Word) {
        let rv = self.regions(word).rv;
        if word.ends_with_in("ch", rv) || word.ends_with_in("gh", rv) {
            word.truncate_by(1);
        }
    }
}

impl Stemmer for ItalianStemmer {
    fn stem(&self, word: &str) -> String {
        let mut w = Word::new(word);
        w.trim_punctuation();
        if w.len() < 3 {
            return word.to_string();
        }

        self.normalize_accents(&mut w);
        self.hash_letters(&mut w);

        self.step_0(&mut w);
        let removed = self.step_1(&mut w);
        if !removed {
            self.step_2(&mut w);
        }
        self.step_3a(&mut w);
        self.step_3b(&mut w);

        self.unhash_letters(&mut w);
        w.to_string()
    }

    fn name(&self) -> &'static str {
        "italian"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attached_pronouns() {
        let stemmer = ItalianStemmer::new();

        assert_eq!(stemmer.stem("guardandoli"), "guard");
        assert_eq!(stemmer.stem("portargliela"), "port");
    }

    #[test]
    fn test_standard_suffixes() {
        let stemmer = ItalianStemmer::new();

        assert_eq!(stemmer.stem("abilità"), "abil");
    }

    #[test]
    fn test_verb_suffixes() {
        let stemmer = ItalianStemmer::new();

        assert_eq!(stemmer.stem("mangiare"), "mang");
        // the intervocalic i is hashed before the table runs
        assert_eq!(stemmer.stem("abbaiamo"), "abba");
    }

    #[test]
    fn test_final_vowel_and_ch() {
        let stemmer = ItalianStemmer::new();

        assert_eq!(stemmer.stem("crocchio"), "crocc");
        assert_eq!(stemmer.stem("quadro"), "quadr");
    }

    #[test]
    fn test_min_length_guard() {
        let stemmer = ItalianStemmer::new();

        assert_eq!(stemmer.stem("di"), "di");
    }

    #[test]
    fn test_hash_round_trip() {
        let stemmer = ItalianStemmer::new();

        for input in ["quadro", "acquaio", "Quindi", "paura"] {
            let mut w = Word::new(input);
            stemmer.hash_letters(&mut w);
            stemmer.unhash_letters(&mut w);
            assert_eq!(w.to_string(), input);
        }
    }
}
