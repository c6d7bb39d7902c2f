//! Runs the `horus` binary end to end.

use std::io::Write;
use std::process::{Command, Output};

use horus::Lexicon;
use horus_cli::config::parse_lexicon;
use tempfile::NamedTempFile;

fn horus(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_horus"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

// =============================================================================
// Codec Commands
// =============================================================================

#[test]
fn test_decode_transliteration() {
    let out = stdout(&horus(&["decode", "ḥtp dj nswt", "--layer", "core"]));
    assert_eq!(
        out,
        "symbols: H t p d i n s w t\n\
         core: EXPRESS → READ → STORE → DO → BESTOW → INTEGRATE → EMERGE → RADIATE → READ\n"
    );
}

#[test]
fn test_decode_labels() {
    let out = stdout(&horus(&["decode", "--symbols", "r n"]));
    assert!(out.contains("  f1: SHADE → WEAVE\n"));
    assert!(out.contains("  m2: BLAZE → INTEGRATE\n"));
}

#[test]
fn test_decode_unknown_label_fails() {
    let output = horus(&["decode", "--symbols", "r q"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown symbol label"));
}

#[test]
fn test_decode_fixed_axes() {
    let out = stdout(&horus(&["decode", "ꜥnḫ", "--mode", "secondary", "--pole", "max"]));
    assert_eq!(out, "symbols: a n kh\nF/max: PERMIT → INTERLOCK → DEFT\n");

    let by_vowel = stdout(&horus(&["decode", "ꜥnḫ", "--vowel", "e", "--pole", "max"]));
    assert_eq!(by_vowel, out);

    let pole_only = stdout(&horus(&["decode", "--symbols", "r n", "--pole", "min"]));
    assert_eq!(pole_only, "symbols: r n\nM/min: DIM → FRAGMENT\n");

    assert!(!horus(&["decode", "rn", "--vowel", "n"]).status.success());
    assert!(!horus(&["decode", "rn", "--layer", "f1", "--pole", "max"]).status.success());
}

#[test]
fn test_rhythm() {
    let out = stdout(&horus(&["rhythm", "ḏd-mdw jn gbb"]));
    assert!(out.starts_with("symbols: dj d m d w i n g b b (10)\n"));
    assert!(out.contains("phi: dj d m d w i | n g | b b\n"));
    assert!(out.ends_with("   kali: b\n"));
}

#[test]
fn test_address() {
    let out = stdout(&horus(&["address", "dj", "secondary", "min"]));
    assert!(out.contains("meaning: HESITATE"));
}

#[test]
fn test_relation_forms_agree() {
    let by_pair = stdout(&horus(&["relation", "t", "n"]));
    let by_index = stdout(&horus(&["relation", "--index", "15"]));
    assert_eq!(by_pair, by_index);
    assert!(horus(&["relation", "n", "k"]).status.code() != Some(0));
    assert!(!horus(&["relation", "--index", "136"]).status.success());
}

#[test]
fn test_grammar_forms_agree() {
    let by_parts = stdout(&horus(&["grammar", "--scale", "x", "--relation", "1"]));
    let by_index = stdout(&horus(&["grammar", "--index", "273"]));
    assert_eq!(by_parts, by_index);
    assert!(!horus(&["grammar", "--index", "408"]).status.success());
}

// =============================================================================
// Lexicon and Corpus
// =============================================================================

#[test]
fn test_lexicon_dump() {
    let text = stdout(&horus(&["lexicon"]));
    assert_eq!(parse_lexicon(&text).unwrap(), Lexicon::standard());
}

#[test]
fn test_alternate_lexicon() {
    let text = stdout(&horus(&["lexicon"])).replace("\"SHINE\"", "\"GLOW\"");
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    let path = file.path().to_str().unwrap();

    let out = stdout(&horus(&["--lexicon", path, "decode", "--symbols", "r", "--layer", "core"]));
    assert!(out.ends_with("core: GLOW\n"));

    let dumped = stdout(&horus(&["--lexicon", path, "lexicon"]));
    assert!(dumped.contains("\"GLOW\""));
}

#[test]
fn test_corpus_search() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        concat!(
            r#"{{"transliteration":"ḥtp dj nswt","#,
            r#""translation":"An offering which the king gives","#,
            r#""dateNotBefore":"-2375","dateNotAfter":"-2345"}}"#,
        )
    )
    .unwrap();
    writeln!(
        file,
        concat!(
            r#"{{"transliteration":"ꜥnḫ","translation":"life","#,
            r#""dateNotBefore":"-2000","dateNotAfter":"-1900"}}"#,
        )
    )
    .unwrap();
    let path = file.path().to_str().unwrap();

    let out = stdout(&horus(&[
        "corpus", path, "search", "--period", "old kingdom", "--prefix", "H t",
    ]));
    assert!(out.starts_with("ḥtp dj nswt\n"));
    assert!(!out.contains("ꜥnḫ"));

    let stats = stdout(&horus(&["corpus", path, "stats", "--top", "3"]));
    assert!(stats.starts_with("sentences: 2\n"));
}
