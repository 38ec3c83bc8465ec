//! Criterion benchmarks for the stemming pipelines.

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use falcata::language::Language;

/// A small mixed-morphology sample per language.
fn sample_words(language: Language) -> Vec<&'static str> {
    match language {
        Language::Danish => vec!["huset", "kirkerne", "pigernes", "erindringerne", "hans"],
        Language::Dutch => vec!["bomen", "waarheden", "lichamelijk", "draaien", "gekken"],
        Language::English => vec![
            "documentation",
            "conditional",
            "running",
            "hopefulness",
            "nationalities",
        ],
        Language::Finnish => vec!["taloissa", "ystävänsä", "kirjansa", "tyttöjen", "taloko"],
        Language::French => vec![
            "intégralement",
            "complètement",
            "finissait",
            "majestueux",
            "chevaux",
        ],
        Language::Italian => vec![
            "guardandoli",
            "portargliela",
            "abilità",
            "mangiare",
            "crocchio",
        ],
        Language::Norwegian => vec!["hesten", "billene", "vennlig", "hetenes", "sendt"],
        Language::Portuguese => vec![
            "administração",
            "rapidamente",
            "felicidade",
            "parecia",
            "limões",
        ],
        Language::Swedish => vec!["flickorna", "heterna", "möjligt", "dagens", "friskt"],
    }
}

fn bench_stemming(c: &mut Criterion) {
    let mut group = c.benchmark_group("stemming");
    for language in Language::ALL {
        let stemmer = language.stemmer();
        let words = sample_words(language);
        group.throughput(Throughput::Elements(words.len() as u64));
        group.bench_function(stemmer.name(), |b| {
            b.iter(|| {
                for word in &words {
                    black_box(stemmer.stem(black_box(word)));
                }
            })
        });
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    c.bench_function("stemmer_for", |b| {
        b.iter(|| {
            for language in Language::ALL {
                black_box(falcata::language::stemmer_for(black_box(language.code())));
            }
        })
    });
}

criterion_group!(benches, bench_stemming, bench_lookup);
criterion_main!(benches);
