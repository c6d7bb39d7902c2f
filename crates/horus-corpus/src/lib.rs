//! Sentence corpora for horus.
//!
//! Loads Earlier Egyptian sentences from JSON lines, turns their Leiden
//! transliteration into [`horus::Symbol`] sequences and answers the usual
//! questions about them: text and prefix search, verb-sequence lookup,
//! dating, frequency tables and line rhythm.
//!
//! # Example
//!
//! ```
//! use horus::VerbTable;
//! use horus_corpus::{Corpus, Period, Query};
//!
//! let data = concat!(
//!     r#"{"transliteration":"ḥtp dj nswt","#,
//!     r#""translation":"An offering which the king gives","#,
//!     r#""dateNotBefore":"-2375","dateNotAfter":"-2345"}"#,
//! );
//! let corpus = Corpus::from_reader(data.as_bytes()).unwrap();
//! let table = VerbTable::standard();
//!
//! let query = Query::new().text("king").period(Period::OldKingdom);
//! let hit = corpus.search(&query).next().unwrap();
//! assert!(hit.trajectory(&table).starts_with("EXPRESS → READ → STORE"));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod corpus;
pub mod error;
pub mod rhythm;
pub mod stats;
pub mod transliteration;

pub use corpus::{Corpus, Period, Query, Sentence, DEFAULT_LIMIT};
pub use error::{CorpusError, Result};
pub use rhythm::{BreathPhase, LineRhythm, ScriptHealth, Yuga};
pub use stats::{PeriodStats, RelationStats, SymbolStats};
