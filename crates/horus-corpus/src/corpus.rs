//! JSON-lines sentence corpus and queries over it.
//!
//! One sentence per line:
//!
//! ```text
//! {"hieroglyphs": "...", "transliteration": "ḥtp dj nswt", "lemmatization": "...",
//!  "UPOS": "...", "glossing": "...", "translation": "An offering which the king gives",
//!  "dateNotBefore": "-2375", "dateNotAfter": "-2345"}
//! ```
//!
//! Dates may be numbers, numeric strings, empty strings, `null` or absent.
//! Missing dates fall back to [`DEFAULT_NOT_BEFORE`] and
//! [`DEFAULT_NOT_AFTER`].

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use horus::{trajectory, Symbol, VerbTable};
use serde::{Deserialize, Deserializer};

use crate::error::{CorpusError, Result};
use crate::rhythm::LineRhythm;
use crate::transliteration::to_symbols;

/// Fallback for a missing `dateNotBefore`.
pub const DEFAULT_NOT_BEFORE: i32 = -3000;

/// Fallback for a missing `dateNotAfter`.
pub const DEFAULT_NOT_AFTER: i32 = -1500;

/// Results returned by a [`Query`] unless told otherwise.
pub const DEFAULT_LIMIT: usize = 20;

// ============================================================================
// Period
// ============================================================================

/// Historical period, classified by a sentence's earliest date.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum Period {
    /// Up to 2686 BCE.
    EarlyDynastic,
    /// 2685 to 2181 BCE.
    OldKingdom,
    /// 2180 to 2055 BCE.
    FirstIntermediate,
    /// 2054 to 1650 BCE.
    MiddleKingdom,
    /// After 1650 BCE.
    Late,
}

impl Period {
    /// All periods in chronological order.
    pub const ALL: [Self; 5] = [
        Self::EarlyDynastic,
        Self::OldKingdom,
        Self::FirstIntermediate,
        Self::MiddleKingdom,
        Self::Late,
    ];

    /// Period containing a `dateNotBefore` value (negative years are BCE).
    #[must_use]
    pub const fn classify(date_not_before: i32) -> Self {
        if date_not_before <= -2686 {
            Self::EarlyDynastic
        } else if date_not_before <= -2181 {
            Self::OldKingdom
        } else if date_not_before <= -2055 {
            Self::FirstIntermediate
        } else if date_not_before <= -1650 {
            Self::MiddleKingdom
        } else {
            Self::Late
        }
    }

    /// Display name, e.g. `"Old Kingdom"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::EarlyDynastic => "Early Dynastic",
            Self::OldKingdom => "Old Kingdom",
            Self::FirstIntermediate => "First Intermediate",
            Self::MiddleKingdom => "Middle Kingdom",
            Self::Late => "Late",
        }
    }

    /// Position in [`Period::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Accepts the display name in any case, with spaces, `-` or `_` between
/// words.
impl FromStr for Period {
    type Err = horus::Error;

    fn from_str(s: &str) -> horus::Result<Self> {
        let wanted: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        Self::ALL
            .into_iter()
            .find(|p| p.name().replace(' ', "").to_lowercase() == wanted)
            .ok_or_else(|| horus::Error::UnknownName {
                kind: "period",
                name: s.to_owned(),
            })
    }
}

// ============================================================================
// Sentence
// ============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDate {
    Int(i64),
    Float(f64),
    Text(String),
}

const YEAR_RANGE: std::ops::RangeInclusive<f64> = i32::MIN as f64..=i32::MAX as f64;

fn date_field<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<Option<i32>, D::Error> {
    use serde::de::Error;

    let year = match Option::<RawDate>::deserialize(d)? {
        None => return Ok(None),
        Some(RawDate::Int(v)) => v,
        // NaN and infinities have a NaN fraction, never zero.
        Some(RawDate::Float(v)) if v.fract() != 0.0 => {
            return Err(D::Error::custom(format!("date {v} is not a whole year")));
        }
        Some(RawDate::Float(v)) if YEAR_RANGE.contains(&v) => v as i64,
        Some(RawDate::Float(v)) => {
            return Err(D::Error::custom(format!("date {v} out of range")));
        }
        Some(RawDate::Text(s)) if s.trim().is_empty() => return Ok(None),
        Some(RawDate::Text(s)) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("invalid date {s:?}")))?,
    };
    i32::try_from(year)
        .map(Some)
        .map_err(|_| D::Error::custom(format!("date {year} out of range")))
}

#[derive(Deserialize)]
struct RawSentence {
    #[serde(default)]
    hieroglyphs: String,
    transliteration: String,
    #[serde(default)]
    lemmatization: String,
    #[serde(default, rename = "UPOS")]
    upos: String,
    #[serde(default)]
    glossing: String,
    translation: String,
    #[serde(default, rename = "dateNotBefore", deserialize_with = "date_field")]
    date_not_before: Option<i32>,
    #[serde(default, rename = "dateNotAfter", deserialize_with = "date_field")]
    date_not_after: Option<i32>,
}

/// One corpus sentence with its symbol sequence.
///
/// The symbol sequence is derived from the transliteration when the
/// sentence is built and never goes stale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sentence {
    hieroglyphs: String,
    transliteration: String,
    lemmatization: String,
    upos: String,
    glossing: String,
    translation: String,
    date_not_before: i32,
    date_not_after: i32,
    symbols: Vec<Symbol>,
}

impl From<RawSentence> for Sentence {
    fn from(raw: RawSentence) -> Self {
        let mut s = Self::new(
            raw.transliteration,
            raw.translation,
            raw.date_not_before.unwrap_or(DEFAULT_NOT_BEFORE),
            raw.date_not_after.unwrap_or(DEFAULT_NOT_AFTER),
        );
        s.hieroglyphs = raw.hieroglyphs;
        s.lemmatization = raw.lemmatization;
        s.upos = raw.upos;
        s.glossing = raw.glossing;
        s
    }
}

impl Sentence {
    /// Builds a sentence from its transliteration, translation and dates.
    /// Annotation fields start empty.
    pub fn new(
        transliteration: impl Into<String>,
        translation: impl Into<String>,
        date_not_before: i32,
        date_not_after: i32,
    ) -> Self {
        let transliteration = transliteration.into();
        let symbols = to_symbols(&transliteration);
        Self {
            hieroglyphs: String::new(),
            transliteration,
            lemmatization: String::new(),
            upos: String::new(),
            glossing: String::new(),
            translation: translation.into(),
            date_not_before,
            date_not_after,
            symbols,
        }
    }

    /// Parses one JSON record.
    ///
    /// # Errors
    ///
    /// The JSON decoder's error if the record is malformed or a date is
    /// not an integer.
    pub fn from_json(line: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<RawSentence>(line).map(Self::from)
    }

    /// Hieroglyphic rendering.
    pub fn hieroglyphs(&self) -> &str {
        &self.hieroglyphs
    }

    /// Leiden transliteration as stored.
    pub fn transliteration(&self) -> &str {
        &self.transliteration
    }

    /// Lemma ids.
    pub fn lemmatization(&self) -> &str {
        &self.lemmatization
    }

    /// Universal part-of-speech tags.
    pub fn upos(&self) -> &str {
        &self.upos
    }

    /// Interlinear glosses.
    pub fn glossing(&self) -> &str {
        &self.glossing
    }

    /// Translation text.
    pub fn translation(&self) -> &str {
        &self.translation
    }

    /// Earliest date, negative for BCE.
    pub fn date_not_before(&self) -> i32 {
        self.date_not_before
    }

    /// Latest date, negative for BCE.
    pub fn date_not_after(&self) -> i32 {
        self.date_not_after
    }

    /// Symbol sequence of the transliteration.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Core meaning of each symbol, in reading order.
    pub fn verbs<'t>(&self, table: &'t VerbTable) -> Vec<&'t str> {
        self.symbols.iter().map(|&s| table.core_meaning(s)).collect()
    }

    /// Core meanings read right to left.
    pub fn reverse_verbs<'t>(&self, table: &'t VerbTable) -> Vec<&'t str> {
        self.symbols
            .iter()
            .rev()
            .map(|&s| table.core_meaning(s))
            .collect()
    }

    /// `A → B → C` reading of [`Sentence::verbs`].
    pub fn trajectory(&self, table: &VerbTable) -> String {
        trajectory(&self.verbs(table))
    }

    /// `"{not_before} to {not_after} BCE"`.
    pub fn date_range(&self) -> String {
        format!("{} to {} BCE", self.date_not_before, self.date_not_after)
    }

    /// Period of the earliest date.
    pub fn period(&self) -> Period {
        Period::classify(self.date_not_before)
    }

    /// Phi and yuga structure of the symbol sequence.
    pub fn rhythm(&self) -> LineRhythm<'_, Symbol> {
        LineRhythm::analyze(&self.symbols)
    }
}

// ============================================================================
// Query
// ============================================================================

/// Filter over a [`Corpus`]. Unset criteria match everything.
///
/// ```
/// use horus::Symbol;
/// use horus_corpus::{Period, Query};
///
/// let q = Query::new()
///     .text("offering")
///     .symbol_prefix([Symbol::H, Symbol::T, Symbol::P])
///     .period(Period::OldKingdom)
///     .limit(5);
/// assert_eq!(q.max_results(), 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    text: Option<String>,
    symbol_prefix: Vec<Symbol>,
    period: Option<Period>,
    limit: usize,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            text: None,
            symbol_prefix: Vec::new(),
            period: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Query {
    /// Matches everything, up to [`DEFAULT_LIMIT`] results.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive substring of the transliteration or translation.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into().to_lowercase());
        self
    }

    /// Leading symbols the sentence must start with.
    #[must_use]
    pub fn symbol_prefix(mut self, prefix: impl IntoIterator<Item = Symbol>) -> Self {
        self.symbol_prefix = prefix.into_iter().collect();
        self
    }

    /// Restricts to one period.
    #[must_use]
    pub fn period(mut self, period: Period) -> Self {
        self.period = Some(period);
        self
    }

    /// Maximum number of results.
    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// The configured limit.
    #[must_use]
    pub fn max_results(&self) -> usize {
        self.limit
    }

    /// True if `sentence` passes every criterion.
    #[must_use]
    pub fn matches(&self, sentence: &Sentence) -> bool {
        if let Some(text) = &self.text {
            if !sentence.transliteration.to_lowercase().contains(text)
                && !sentence.translation.to_lowercase().contains(text)
            {
                return false;
            }
        }
        if !sentence.symbols.starts_with(&self.symbol_prefix) {
            return false;
        }
        self.period.map_or(true, |p| sentence.period() == p)
    }
}

// ============================================================================
// Corpus
// ============================================================================

/// An in-memory sentence corpus, in file order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Corpus {
    sentences: Vec<Sentence>,
}

impl Corpus {
    /// Wraps already-built sentences.
    #[must_use]
    pub fn from_sentences(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }

    /// Reads JSON lines from `reader`. Blank lines are skipped.
    ///
    /// # Errors
    ///
    /// [`CorpusError::Read`] on an I/O failure and [`CorpusError::Parse`]
    /// for the first malformed line. No partial corpus is returned.
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut sentences = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let line_no = i + 1;
            let line = line.map_err(|source| CorpusError::Read {
                line: line_no,
                source,
            })?;
            if line.trim().is_empty() {
                continue;
            }
            let sentence = Sentence::from_json(&line).map_err(|source| CorpusError::Parse {
                line: line_no,
                source,
            })?;
            sentences.push(sentence);
        }
        tracing::debug!(sentences = sentences.len(), "corpus parsed");
        Ok(Self { sentences })
    }

    /// Opens and reads a JSON-lines file.
    ///
    /// # Errors
    ///
    /// [`CorpusError::Open`] if the file cannot be opened, otherwise as
    /// [`Corpus::from_reader`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CorpusError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let corpus = Self::from_reader(BufReader::new(file))?;
        tracing::info!(path = %path.display(), sentences = corpus.len(), "corpus loaded");
        Ok(corpus)
    }

    /// Number of sentences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// True when no sentences were loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Sentence at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Sentence> {
        self.sentences.get(index)
    }

    /// Sentences in file order.
    pub fn iter(&self) -> std::slice::Iter<'_, Sentence> {
        self.sentences.iter()
    }

    /// Sentences matching `query`, in corpus order, at most `query.limit`.
    pub fn search<'c>(&'c self, query: &'c Query) -> impl Iterator<Item = &'c Sentence> + 'c {
        self.sentences
            .iter()
            .filter(move |s| query.matches(s))
            .take(query.limit)
    }

    /// Sentences whose core-meaning sequence starts with `verbs`.
    pub fn find_by_verb_sequence<'c>(
        &'c self,
        table: &'c VerbTable,
        verbs: &'c [&'c str],
        limit: usize,
    ) -> impl Iterator<Item = &'c Sentence> + 'c {
        self.sentences
            .iter()
            .filter(move |s| {
                s.symbols.len() >= verbs.len()
                    && s.symbols
                        .iter()
                        .zip(verbs)
                        .all(|(&sym, &v)| table.core_meaning(sym) == v)
            })
            .take(limit)
    }

    /// Sentences dated exactly `not_before..=not_after`.
    pub fn in_date_range(
        &self,
        not_before: i32,
        not_after: i32,
    ) -> impl Iterator<Item = &Sentence> + '_ {
        self.sentences
            .iter()
            .filter(move |s| s.date_not_before == not_before && s.date_not_after == not_after)
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Sentence;
    type IntoIter = std::slice::Iter<'a, Sentence>;

    fn into_iter(self) -> Self::IntoIter {
        self.sentences.iter()
    }
}

impl FromIterator<Sentence> for Corpus {
    fn from_iter<I: IntoIterator<Item = Sentence>>(iter: I) -> Self {
        Self {
            sentences: iter.into_iter().collect(),
        }
    }
}
