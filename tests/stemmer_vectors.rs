//! End-to-end stemming vectors across all nine languages, plus the
//! cross-language invariants every pipeline honors.

use falcata::language::{Language, Stemmer, stemmer_for};

#[test]
fn test_golden_vectors() {
    let vectors: &[(Language, &str, &str)] = &[
        (Language::Danish, "huset", "hus"),
        (Language::Danish, "kirkerne", "kirk"),
        (Language::Dutch, "bomen", "bom"),
        (Language::Dutch, "waarheden", "waarheid"),
        (Language::English, "documentation", "document"),
        (Language::English, "documenting", "document"),
        (Language::English, "running", "run"),
        (Language::Finnish, "taloissa", "talo"),
        (Language::Finnish, "kirjansa", "kirj"),
        (Language::French, "intégralement", "intégral"),
        (Language::French, "payer", "pai"),
        (Language::Italian, "guardandoli", "guard"),
        (Language::Italian, "portargliela", "port"),
        (Language::Norwegian, "hesten", "hest"),
        (Language::Norwegian, "vennlig", "venn"),
        (Language::Portuguese, "rapidamente", "rapid"),
        (Language::Portuguese, "administração", "administr"),
        (Language::Swedish, "flickorna", "flick"),
        (Language::Swedish, "dagens", "dag"),
    ];

    for (language, word, expected) in vectors {
        let stemmer = language.stemmer();
        assert_eq!(
            stemmer.stem(word),
            *expected,
            "{}: {word}",
            stemmer.name()
        );
    }
}

#[test]
fn test_short_words_unchanged() {
    for language in Language::ALL {
        let stemmer = language.stemmer();
        for word in ["a", "ab", "Ø", ""] {
            assert_eq!(stemmer.stem(word), word, "{}: {word:?}", stemmer.name());
        }
    }
}

#[test]
fn test_length_invariant() {
    let samples = [
        "documentation",
        "intégralement",
        "administração",
        "ystävänsä",
        "lichamelijk",
        "guardandoli",
        "flickornas",
        "hetenes",
        "løst",
    ];
    for language in Language::ALL {
        let stemmer = language.stemmer();
        for word in samples {
            let stem = stemmer.stem(word);
            assert!(
                stem.chars().count() <= word.chars().count() + 3,
                "{}: {word} -> {stem}",
                stemmer.name()
            );
        }
    }
}

#[test]
fn test_no_sentinels_escape() {
    let samples = ["draaien", "payer", "quadro", "coração", "saying"];
    for language in Language::ALL {
        let stemmer = language.stemmer();
        for word in samples {
            let stem = stemmer.stem(word);
            assert!(
                stem.chars().all(|c| !('\u{E000}'..='\u{F8FF}').contains(&c)),
                "{}: {word} -> {stem:?}",
                stemmer.name()
            );
        }
    }
}

#[test]
fn test_lookup_by_code() {
    let stemmer = stemmer_for("da").expect("danish pipeline");
    assert_eq!(stemmer.stem("bilen"), "bil");
    assert!(stemmer_for("de").is_none());
}

#[test]
fn test_stemmers_are_shareable() {
    let stemmer = std::sync::Arc::new(Language::English.stemmer());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let stemmer = stemmer.clone();
            std::thread::spawn(move || stemmer.stem("documentation"))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "document");
    }
}
