// Criterion benchmarks for wolig-he.
//
// Run:
//   cargo bench -p wolig-he

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use wolig_he::finalize::finalize;
use wolig_he::inflection::{ParadigmGenerator, generator_for};
use wolig_he::prepare::prepare;
use wolig_he::{LexiconEntry, RunConfig, generate_forms, run};

const LEXICON: &[(&str, &str)] = &[
    ("ספר", "noun"),
    ("ילדה", "noun"),
    ("מצווה", "noun"),
    ("חיה", "noun"),
    ("קו", "noun"),
    ("שולחן", "noun,-ot"),
    ("עיר", "noun,feminine,plural=ערים"),
    ("אב", "noun,extra-yod-smichut,-ot"),
    ("שדה", "noun,defective-he,masculine"),
    ("גדול", "adjective"),
    ("מקומי", "adjective"),
    ("צרפתי", "adjective,country-adjective"),
];

/// The sample lexicon repeated until it has roughly `records` lines.
fn lexicon_text(records: usize) -> String {
    LEXICON
        .iter()
        .cycle()
        .take(records)
        .map(|(word, flags)| format!("{word} {flags}\n"))
        .collect()
}

fn bench_generate_forms(c: &mut Criterion) {
    let entries: Vec<LexiconEntry> = LEXICON
        .iter()
        .map(|(word, flags)| LexiconEntry::parse(word, flags).unwrap())
        .collect();

    c.bench_function("generate_forms", |b| {
        b.iter(|| {
            for entry in &entries {
                black_box(generate_forms(black_box(entry)));
            }
        })
    });
}

fn bench_parse_entry(c: &mut Criterion) {
    c.bench_function("parse_entry", |b| {
        b.iter(|| {
            for (word, flags) in LEXICON {
                black_box(LexiconEntry::parse(black_box(word), black_box(flags)).ok());
            }
        })
    });
}

fn bench_finalize(c: &mut Criterion) {
    let entry = LexiconEntry::parse("מצווה", "noun").unwrap();
    let word = prepare(&entry.head_word);
    let raw = generator_for(entry.pos).generate(&entry, &word);

    c.bench_function("finalize", |b| {
        b.iter(|| {
            for form in &raw {
                black_box(finalize(black_box(form.clone()), false));
            }
        })
    });
}

fn bench_run(c: &mut Criterion) {
    let text = lexicon_text(1200);
    let mut group = c.benchmark_group("run");
    for detailed in [false, true] {
        let config = RunConfig { detailed };
        group.bench_function(if detailed { "detailed" } else { "plain" }, |b| {
            b.iter(|| {
                let mut out = Vec::with_capacity(256 * 1024);
                run(black_box(text.as_bytes()), &mut out, &config).unwrap();
                black_box(out)
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_generate_forms,
    bench_parse_entry,
    bench_finalize,
    bench_run
);
criterion_main!(benches);
