//! Lexicon files.
//!
//! A lexicon file lists one `[[record]]` per symbol, all 22 required:
//!
//! ```toml
//! [[record]]
//! symbol = "n"
//! meanings = ["INTEGRATE", "FRAGMENT", "FUSE", "WEAVE", "UNRAVEL", "INTERLOCK"]
//! ```
//!
//! Meanings run primary eq/min/max, then secondary eq/min/max.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use horus::{Lexicon, MeaningRecord};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct LexiconFile {
    #[serde(default, rename = "record")]
    records: Vec<MeaningRecord>,
}

/// Parses and validates lexicon TOML.
///
/// # Errors
///
/// Fails if the TOML is malformed, a label is unknown, a record does not
/// have exactly six meanings, or the records do not cover every symbol
/// exactly once.
pub fn parse_lexicon(text: &str) -> Result<Lexicon> {
    let file: LexiconFile = toml::from_str(text).context("Invalid lexicon TOML")?;
    Lexicon::from_records(file.records).context("Incomplete lexicon")
}

/// Reads a lexicon file.
///
/// # Errors
///
/// As [`parse_lexicon`], or if the file cannot be read.
pub fn load_lexicon(path: &Path) -> Result<Lexicon> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read lexicon: {}", path.display()))?;
    let lexicon =
        parse_lexicon(&text).with_context(|| format!("Failed to load {}", path.display()))?;
    tracing::debug!(path = %path.display(), "lexicon loaded");
    Ok(lexicon)
}

/// Renders a lexicon in the file format [`parse_lexicon`] reads.
///
/// # Errors
///
/// Only if TOML serialization fails.
pub fn render_lexicon(lexicon: &Lexicon) -> Result<String> {
    let file = LexiconFile {
        records: lexicon.iter().cloned().collect(),
    };
    toml::to_string(&file).context("Failed to render lexicon TOML")
}
