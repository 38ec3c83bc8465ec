//! Per-language stemming pipelines and the selection surface.
//!
//! Each language is an ordered sequence of numbered steps over a shared
//! region model; the [`Stemmer`] trait is the narrow interface the
//! surrounding analysis layer consumes. Pipelines are stateless values —
//! every call owns its word buffer and per-call flags, so independent calls
//! may run concurrently without locking.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FalcataError;

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

pub mod danish;
pub mod dutch;
pub mod english;
pub mod finnish;
pub mod french;
pub mod italian;
pub mod norwegian;
pub mod portuguese;
pub mod swedish;

pub use danish::DanishStemmer;
pub use dutch::DutchStemmer;
pub use english::EnglishStemmer;
pub use finnish::FinnishStemmer;
pub use french::FrenchStemmer;
pub use italian::ItalianStemmer;
pub use norwegian::NorwegianStemmer;
pub use portuguese::PortugueseStemmer;
pub use swedish::SwedishStemmer;

/// The languages a pipeline exists for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "da")]
    Danish,
    #[serde(rename = "nl")]
    Dutch,
    #[serde(rename = "en")]
    English,
    #[serde(rename = "fi")]
    Finnish,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "no")]
    Norwegian,
    #[serde(rename = "pt")]
    Portuguese,
    #[serde(rename = "sv")]
    Swedish,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Language; 9] = [
        Language::Danish,
        Language::Dutch,
        Language::English,
        Language::Finnish,
        Language::French,
        Language::Italian,
        Language::Norwegian,
        Language::Portuguese,
        Language::Swedish,
    ];

    /// The ISO 639-1 code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Danish => "da",
            Language::Dutch => "nl",
            Language::English => "en",
            Language::Finnish => "fi",
            Language::French => "fr",
            Language::Italian => "it",
            Language::Norwegian => "no",
            Language::Portuguese => "pt",
            Language::Swedish => "sv",
        }
    }

    /// Construct the stemming pipeline for this language.
    pub fn stemmer(&self) -> Box<dyn Stemmer> {
        match self {
            Language::Danish => Box::new(DanishStemmer::new()),
            Language::Dutch => Box::new(DutchStemmer::new()),
            Language::English => Box::new(EnglishStemmer::new()),
            Language::Finnish => Box::new(FinnishStemmer::new()),
            Language::French => Box::new(FrenchStemmer::new()),
            Language::Italian => Box::new(ItalianStemmer::new()),
            Language::Norwegian => Box::new(NorwegianStemmer::new()),
            Language::Portuguese => Box::new(PortugueseStemmer::new()),
            Language::Swedish => Box::new(SwedishStemmer::new()),
        }
    }
}

impl FromStr for Language {
    type Err = FalcataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .iter()
            .find(|l| l.code() == s)
            .copied()
            .ok_or_else(|| FalcataError::unsupported_language(s))
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Look up a stemming pipeline by language code.
///
/// Returns `None` for identifiers no pipeline is registered for.
///
/// # Examples
///
/// ```
/// use falcata::language::stemmer_for;
///
/// let stemmer = stemmer_for("en").unwrap();
/// assert_eq!(stemmer.stem("documenting"), "document");
/// assert!(stemmer_for("tlh").is_none());
/// ```
pub fn stemmer_for(code: &str) -> Option<Box<dyn Stemmer>> {
    code.parse::<Language>().ok().map(|l| l.stemmer())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes_round_trip() {
        for language in Language::ALL {
            assert_eq!(language.code().parse::<Language>().unwrap(), language);
        }
    }

    #[test]
    fn test_unknown_language() {
        assert!("xx".parse::<Language>().is_err());
        assert!(stemmer_for("xx").is_none());
        assert!(stemmer_for("").is_none());
    }

    #[test]
    fn test_serde_codes() {
        let json = serde_json::to_string(&Language::Danish).unwrap();
        assert_eq!(json, "\"da\"");
        let back: Language = serde_json::from_str("\"pt\"").unwrap();
        assert_eq!(back, Language::Portuguese);
    }

    #[test]
    fn test_stemmer_names() {
        for language in Language::ALL {
            let stemmer = language.stemmer();
            assert!(!stemmer.name().is_empty());
        }
    }
}
