//! Golden tests: full paradigms of representative lexicon entries.
//!
//! Each case in `tests/golden/paradigms.json` lists a head word, its flag
//! string and every form the generator must emit, in order.
//!
//! Run: cargo test -p wolig-he --test golden

use std::path::PathBuf;

use serde::Deserialize;
use wolig_he::{LexiconEntry, RunConfig, generate_forms, run};

#[derive(Debug, Deserialize)]
struct GoldenCase {
    word: String,
    flags: String,
    note: String,
    forms: Vec<String>,
}

fn load_golden(filename: &str) -> Vec<GoldenCase> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/golden")
        .join(filename);
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

#[test]
fn golden_paradigms() {
    let cases = load_golden("paradigms.json");
    assert!(!cases.is_empty());

    let mut failures = Vec::new();
    for case in &cases {
        let entry = LexiconEntry::parse(&case.word, &case.flags)
            .unwrap_or_else(|e| panic!("{} {}: {}", case.word, case.flags, e));
        let got: Vec<String> = generate_forms(&entry).into_iter().map(|f| f.text).collect();
        if got != case.forms {
            failures.push(format!(
                "{} [{}] ({}):\n  expected {:?}\n  got      {:?}",
                case.word, case.flags, case.note, case.forms, got
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn golden_lexicon_run() {
    let cases = load_golden("paradigms.json");
    let lexicon: String = cases
        .iter()
        .map(|c| format!("{} {}\n", c.word, c.flags))
        .collect();

    let mut out = Vec::new();
    let stats = run(lexicon.as_bytes(), &mut out, &RunConfig::default()).unwrap();
    let out = String::from_utf8(out).unwrap();

    let expected: String = cases
        .iter()
        .map(|c| {
            let mut block = c.forms.join("\n");
            block.push_str("\n-------\n");
            block
        })
        .collect();
    assert_eq!(out, expected);
    assert_eq!(stats.records, cases.len());
    assert_eq!(stats.forms, cases.iter().map(|c| c.forms.len()).sum::<usize>());
}
