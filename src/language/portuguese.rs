//! Portuguese stemming pipeline.
//!
//! The nasal vowels `ã` and `õ` are split into `a`/`o` plus a private-use
//! nasal mark before the steps run, so they count as vowel + consonant for
//! region and suffix purposes (suffix patterns containing them embed the
//! mark, see `crate::hash::NASAL_MARK`). The steps work over R1/R2 and the
//! Romance RV: standard suffix removal, verb suffixes in RV when step 1
//! removed nothing, a final `ci` cleanup when either fired, residual vowels
//! when neither did, and the final `e`/`ç` pass. The mark is recombined on
//! exit.

use super::Stemmer;
use crate::char_class::CharClass;
use crate::hash::NASAL_MARK;
use crate::region::{Regions, RvStyle};
use crate::word::{Word, fold};

const VOWELS: CharClass = CharClass::new("aeiouáéíóúâêôAEIOUÁÉÍÓÚÂÊÔ");

/// Plain R2 deletions of step 1, longest first. `\u{E007}` is the nasal
/// mark, so `"aça\u{E007}o"` spells the `ação` ending.
const STEP_1_PLAIN: &[&str] = &[
    "amentos",
    "imentos",
    "amento",
    "imento",
    "adoras",
    "adores",
    "aço\u{E007}es",
    "ismos",
    "istas",
    "adora",
    "aça\u{E007}o",
    "antes",
    "ância",
    "ezas",
    "icos",
    "icas",
    "ismo",
    "ável",
    "ível",
    "ista",
    "osos",
    "osas",
    "ador",
    "ante",
    "eza",
    "ico",
    "ica",
    "oso",
    "osa",
];

/// Verb suffixes of step 2, longest first.
const STEP_2_SUFFIXES: &[&str] = &[
    "aríamos",
    "eríamos",
    "iríamos",
    "ássemos",
    "êssemos",
    "íssemos",
    "aríeis",
    "eríeis",
    "iríeis",
    "ásseis",
    "ésseis",
    "ísseis",
    "áramos",
    "éramos",
    "íramos",
    "ávamos",
    "aremos",
    "eremos",
    "iremos",
    "ariam",
    "eriam",
    "iriam",
    "assem",
    "essem",
    "issem",
    "ara\u{E007}o",
    "era\u{E007}o",
    "ira\u{E007}o",
    "arias",
    "erias",
    "irias",
    "ardes",
    "erdes",
    "irdes",
    "asses",
    "esses",
    "isses",
    "astes",
    "estes",
    "istes",
    "áreis",
    "areis",
    "éreis",
    "ereis",
    "íreis",
    "ireis",
    "áveis",
    "íamos",
    "armos",
    "ermos",
    "irmos",
    "aria",
    "eria",
    "iria",
    "asse",
    "esse",
    "isse",
    "aste",
    "este",
    "iste",
    "arei",
    "erei",
    "irei",
    "aram",
    "eram",
    "iram",
    "avam",
    "arem",
    "erem",
    "irem",
    "ando",
    "endo",
    "indo",
    "adas",
    "idas",
    "arás",
    "aras",
    "erás",
    "eras",
    "irás",
    "avas",
    "ares",
    "eres",
    "ires",
    "íeis",
    "ados",
    "idos",
    "ámos",
    "amos",
    "emos",
    "imos",
    "iras",
    "iais",
    "ada",
    "ida",
    "ará",
    "ara",
    "erá",
    "era",
    "irá",
    "ava",
    "iam",
    "ado",
    "ido",
    "ias",
    "ais",
    "ira",
    "ia",
    "ei",
    "am",
    "em",
    "ar",
    "er",
    "ir",
    "as",
    "es",
    "is",
    "eu",
    "iu",
    "ou",
];

/// Residual suffixes of step 4, longest first.
const STEP_4_SUFFIXES: &[&str] = &["os", "a", "i", "o", "á", "í", "ó"];

/// Portuguese stemming algorithm.
#[derive(Debug, Clone, Default)]
pub struct PortugueseStemmer;

impl PortugueseStemmer {
    /// Create a new Portuguese stemmer.
    pub fn new() -> Self {
        PortugueseStemmer
    }

    fn regions(&self, word: &Word) -> Regions {
        Regions::compute(word, &VOWELS, RvStyle::Romance)
    }

    /// Split `ã`/`õ` into the plain vowel plus the nasal mark.
    fn hash_nasals(&self, word: &mut Word) {
        let mut i = 0;
        while i < word.len() {
            let plain = match word.char_at(i) {
                'ã' => Some('a'),
                'õ' => Some('o'),
                'Ã' => Some('A'),
                'Õ' => Some('O'),
                _ => None,
            };
            if let Some(p) = plain {
                word.set(i, p);
                word.insert(i + 1, NASAL_MARK);
                i += 1;
            }
            i += 1;
        }
    }

    /// Recombine the nasal mark with its vowel.
    fn unhash_nasals(&self, word: &mut Word) {
        let mut i = 0;
        while i < word.len() {
            if word.char_at(i) == NASAL_MARK {
                if i > 0 {
                    let nasal = match word.char_at(i - 1) {
                        'a' => 'ã',
                        'o' => 'õ',
                        'A' => 'Ã',
                        'O' => 'Õ',
                        other => other,
                    };
                    word.set(i - 1, nasal);
                }
                word.remove(i);
            } else {
                i += 1;
            }
        }
    }

    /// Step 1: standard suffix removal. Returns true when a suffix came off.
    fn step_1(&self, word: &mut Word) -> bool {
        let Regions { r1, r2, rv } = self.regions(word);

        if word.ends_with("amente") {
            if word.delete_suffix_in("amente", r1) {
                let r2 = self.regions(word).r2;
                if word.delete_suffix_in("iv", r2) {
                    let r2 = self.regions(word).r2;
                    word.delete_suffix_in("at", r2);
                } else {
                    let _ = word.delete_suffix_in("os", r2)
                        || word.delete_suffix_in("ic", r2)
                        || word.delete_suffix_in("ad", r2);
                }
                return true;
            }
        }
        if word.replace_suffix_in("logias", "log", r2) || word.replace_suffix_in("logia", "log", r2)
        {
            return true;
        }
        if word.replace_suffix_in("uço\u{E007}es", "u", r2)
            || word.replace_suffix_in("uça\u{E007}o", "u", r2)
        {
            return true;
        }
        if word.replace_suffix_in("ências", "ente", r2)
            || word.replace_suffix_in("ência", "ente", r2)
        {
            return true;
        }
        for suffix in ["idades", "idade"] {
            if word.delete_suffix_in(suffix, r2) {
                let r2 = self.regions(word).r2;
                let _ = word.delete_suffix_in("abil", r2)
                    || word.delete_suffix_in("ic", r2)
                    || word.delete_suffix_in("iv", r2);
                return true;
            }
        }
        if word.delete_suffix_in("mente", r2) {
            let r2 = self.regions(word).r2;
            let _ = word.delete_suffix_in("ante", r2)
                || word.delete_suffix_in("avel", r2)
                || word.delete_suffix_in("ível", r2);
            return true;
        }
        for suffix in ["ivas", "ivos", "iva", "ivo"] {
            if word.delete_suffix_in(suffix, r2) {
                let r2 = self.regions(word).r2;
                word.delete_suffix_in("at", r2);
                return true;
            }
        }
        if word.delete_longest_in(STEP_1_PLAIN, r2) {
            return true;
        }
        // ira(s) after e rewrites to ir
        for suffix in ["iras", "ira"] {
            let slen = suffix.chars().count();
            if word.ends_with_in(suffix, rv)
                && word.len() > slen
                && fold(word.char_at(word.len() - slen - 1)) == 'e'
            {
                word.truncate_by(slen);
                word.push('i');
                word.push('r');
                return true;
            }
        }
        false
    }

    /// Step 2: verb suffixes in RV.
    fn step_2(&self, word: &mut Word) -> bool {
        let rv = self.regions(word).rv;
        word.delete_longest_in(STEP_2_SUFFIXES, rv)
    }

    /// Step 3: a final `i` after `c`, when step 1 or 2 fired.
    fn step_3(&self, word: &mut Word) {
        let rv = self.regions(word).rv;
        let n = word.len();
        if n >= 2
            && n - 1 >= rv
            && fold(word.char_at(n - 1)) == 'i'
            && fold(word.char_at(n - 2)) == 'c'
        {
            word.truncate_by(1);
        }
    }

    /// Step 4: residual vowel suffixes, when neither step 1 nor 2 fired.
    fn step_4(&self, word: &mut Word) {
        let rv = self.regions(word).rv;
        word.delete_longest_in(STEP_4_SUFFIXES, rv);
    }

    /// Step 5: final `e`/`é`/`ê` with the `gu`/`ci` cleanup, or `ç` → `c`.
    fn step_5(&self, word: &mut Word) {
        let rv = self.regions(word).rv;
        for suffix in ["e", "é", "ê"] {
            if word.delete_suffix_in(suffix, rv) {
                let rv = self.regions(word).rv;
                let n = word.len();
                let drops_letter = (word.ends_with("gu") || word.ends_with("ci"))
                    && n >= 1
                    && n - 1 >= rv;
                if drops_letter {
                    word.truncate_by(1);
                }
                return;
            }
        }
        let n = word.len();
        if n >= 1 && fold(word.char_at(n - 1)) == 'ç' {
            word.set(n - 1, if word.char_at(n - 1) == 'Ç' { 'C' } else { 'c' });
        }
    }
}

impl Stemmer for PortugueseStemmer {
    fn stem(&self, word: &str) -> String {
        let mut w = Word::new(word);
        w.trim_punctuation();
        if w.len() < 3 {
            return word.to_string();
        }

        self.hash_nasals(&mut w);

        let mut removed = self.step_1(&mut w);
        if !removed {
            removed = self.step_2(&mut w);
        }
        if removed {
            self.step_3(&mut w);
        } else {
            self.step_4(&mut w);
        }
        self.step_5(&mut w);

        self.unhash_nasals(&mut w);
        w.to_string()
    }

    fn name(&self) -> &'static str {
        "portuguese"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_suffixes() {
        let stemmer = PortugueseStemmer::new();

        assert_eq!(stemmer.stem("rapidamente"), "rapid");
        assert_eq!(stemmer.stem("felizmente"), "feliz");
        assert_eq!(stemmer.stem("felicidade"), "felic");
    }

    #[test]
    fn test_nasal_suffixes() {
        let stemmer = PortugueseStemmer::new();

        assert_eq!(stemmer.stem("administração"), "administr");
    }

    #[test]
    fn test_verb_and_ci_cleanup() {
        let stemmer = PortugueseStemmer::new();

        assert_eq!(stemmer.stem("parecia"), "parec");
    }

    #[test]
    fn test_residual_vowels() {
        let stemmer = PortugueseStemmer::new();

        assert_eq!(stemmer.stem("bonita"), "bonit");
    }

    #[test]
    fn test_final_e() {
        let stemmer = PortugueseStemmer::new();

        assert_eq!(stemmer.stem("quente"), "quent");
        assert_eq!(stemmer.stem("chegue"), "cheg");
    }

    #[test]
    fn test_min_length_guard() {
        let stemmer = PortugueseStemmer::new();

        assert_eq!(stemmer.stem("um"), "um");
    }

    #[test]
    fn test_nasal_round_trip() {
        let stemmer = PortugueseStemmer::new();

        for input in ["coração", "São", "pão", "limões"] {
            let mut w = Word::new(input);
            stemmer.hash_nasals(&mut w);
            stemmer.unhash_nasals(&mut w);
            assert_eq!(w.to_string(), input);
        }
    }
}
