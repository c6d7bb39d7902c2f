//! `horus`: decodes transliterations through the symbol lexicon and
//! inspects addresses, relations and sentence corpora.
//!
//! **Usage:**
//! ```text
//! horus decode "ḥtp dj nswt" [--layer f1]
//! horus decode --symbols "r n"
//! horus decode "ꜥnḫ" --mode secondary --pole max | horus decode "ꜥnḫ" --vowel e
//! horus address x secondary max
//! horus relation n t | horus relation --index 15
//! horus grammar --scale cosmogenic --relation 1 | horus grammar --index 273
//! horus corpus tla.jsonl stats
//! horus corpus tla.jsonl search --text king --period "old kingdom"
//! horus rhythm "ḏd-mdw jn gbb"
//! horus lexicon > lexicon.toml
//! ```
//!
//! `--lexicon <FILE>` swaps in an alternate lexicon for any command.
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use horus::{Layer, Lexicon, Mode, Pole, Relation, Scale, Symbol, TriangularRelation, VerbTable};
use horus_cli::{config, report};
use horus_corpus::{transliteration, Corpus, Period, Query, DEFAULT_LIMIT};
use tracing_subscriber::EnvFilter;

/// Symbolic decoding of transliterated Egyptian.
#[derive(Parser)]
#[command(name = "horus", version, about = "Symbolic decoding of transliterated Egyptian")]
struct Args {
    /// TOML lexicon to use instead of the built-in one.
    #[arg(long, global = true)]
    lexicon: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a transliteration through the five layers, or at one
    /// explicit mode and pole.
    Decode {
        /// Leiden transliteration, or symbol labels with `--symbols`.
        text: String,

        /// Print only this layer (core, f1, f2, m1, m2).
        #[arg(long, conflicts_with_all = ["mode", "pole", "vowel"])]
        layer: Option<Layer>,

        /// Read every position in this mode (`primary` or `secondary`).
        #[arg(long)]
        mode: Option<Mode>,

        /// Read every position at this pole (`eq`, `min` or `max`).
        #[arg(long)]
        pole: Option<Pole>,

        /// Pick the mode from a vowel sound (a/o/u primary, e/i/y secondary).
        #[arg(long, conflicts_with = "mode")]
        vowel: Option<char>,

        /// Treat TEXT as space-separated symbol labels.
        #[arg(long)]
        symbols: bool,
    },

    /// Show the address and meaning of one (symbol, mode, pole).
    Address {
        /// Symbol label, e.g. `sh` or `A`.
        symbol: Symbol,
        /// `primary` or `secondary`.
        mode: Mode,
        /// `eq`, `min` or `max`.
        pole: Pole,
    },

    /// Show a wheel relation by its two symbols or by index.
    Relation {
        /// First wheel symbol.
        #[arg(requires = "b", conflicts_with = "index")]
        a: Option<Symbol>,
        /// Second wheel symbol.
        b: Option<Symbol>,
        /// Relation index 0..=135.
        #[arg(long)]
        index: Option<u8>,
    },

    /// Show a grammar relation by scale and relation, or by index.
    Grammar {
        /// Scale name, index or spine label.
        #[arg(long, requires = "relation", conflicts_with = "index")]
        scale: Option<Scale>,
        /// Relation index 0..=135.
        #[arg(long, requires = "scale")]
        relation: Option<u8>,
        /// Grammar index 0..=407.
        #[arg(long)]
        index: Option<u16>,
    },

    /// Show the phi segments and yuga spans of a transliteration.
    Rhythm {
        /// Leiden transliteration, or symbol labels with `--symbols`.
        text: String,

        /// Treat TEXT as space-separated symbol labels.
        #[arg(long)]
        symbols: bool,
    },

    /// Print the active lexicon as a TOML lexicon file.
    Lexicon,

    /// Query a JSON-lines sentence corpus.
    Corpus {
        /// Corpus file, one JSON sentence per line.
        path: PathBuf,

        #[command(subcommand)]
        action: CorpusAction,
    },
}

#[derive(Subcommand)]
enum CorpusAction {
    /// Period, symbol and relation frequencies.
    Stats {
        /// Rows in each frequency table.
        #[arg(long, default_value_t = 10)]
        top: usize,
    },

    /// List matching sentences.
    Search {
        /// Substring of the transliteration or translation.
        #[arg(long)]
        text: Option<String>,
        /// Historical period, e.g. "old kingdom".
        #[arg(long)]
        period: Option<Period>,
        /// Space-separated symbol labels the sentence must start with.
        #[arg(long)]
        prefix: Option<String>,
        /// Maximum number of results.
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
    },
}

fn parse_labels(text: &str) -> Result<Vec<Symbol>> {
    text.split_whitespace()
        .map(|l| Symbol::from_label(l).map_err(anyhow::Error::from))
        .collect()
}

fn read_symbols(text: &str, labels: bool) -> Result<Vec<Symbol>> {
    if labels {
        parse_labels(text)
    } else {
        Ok(transliteration::to_symbols(text))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let lexicon = match &args.lexicon {
        Some(path) => config::load_lexicon(path)?,
        None => Lexicon::standard(),
    };
    let table = VerbTable::build(&lexicon);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Decode {
            text,
            layer,
            mode,
            pole,
            vowel,
            symbols,
        } => {
            let seq = read_symbols(&text, symbols)?;
            let mode = match vowel {
                Some(v) => Some(Mode::from_vowel(v).with_context(|| {
                    format!("{v:?} does not mark a mode; use a, o, u, e, i or y")
                })?),
                None => mode,
            };
            if mode.is_some() || pole.is_some() {
                let (mode, pole) = (mode.unwrap_or_default(), pole.unwrap_or_default());
                report::decode_with(&mut out, &table, &seq, mode, pole)?;
            } else {
                report::decode(&mut out, &table, &seq, layer)?;
            }
        }
        Command::Address { symbol, mode, pole } => {
            report::address(&mut out, &table, symbol, mode, pole)?;
        }
        Command::Relation { a, b, index } => {
            let relation = match (a, b, index) {
                (Some(a), Some(b), None) => Relation::new(a, b)?,
                (None, None, Some(i)) => Relation::from_index(i)?,
                _ => bail!("give two wheel symbols or --index"),
            };
            report::relation(&mut out, &table, relation)?;
        }
        Command::Grammar {
            scale,
            relation,
            index,
        } => {
            let tri = match (scale, relation, index) {
                (Some(s), Some(r), None) => TriangularRelation::new(Relation::from_index(r)?, s),
                (None, None, Some(i)) => TriangularRelation::from_index(i)?,
                _ => bail!("give --scale with --relation, or --index"),
            };
            report::grammar(&mut out, &table, tri)?;
        }
        Command::Rhythm { text, symbols } => {
            let seq = read_symbols(&text, symbols)?;
            report::rhythm(&mut out, &seq)?;
        }
        Command::Lexicon => {
            out.write_all(config::render_lexicon(&lexicon)?.as_bytes())?;
        }
        Command::Corpus { path, action } => {
            let corpus = Corpus::load(&path)
                .with_context(|| format!("Failed to load corpus: {}", path.display()))?;
            match action {
                CorpusAction::Stats { top } => {
                    report::corpus_stats(&mut out, &table, &corpus, top)?;
                }
                CorpusAction::Search {
                    text,
                    period,
                    prefix,
                    limit,
                } => {
                    let mut query = Query::new().limit(limit);
                    if let Some(text) = text {
                        query = query.text(text);
                    }
                    if let Some(period) = period {
                        query = query.period(period);
                    }
                    if let Some(prefix) = prefix {
                        query = query.symbol_prefix(parse_labels(&prefix)?);
                    }
                    report::search(&mut out, &table, &corpus, &query)?;
                }
            }
        }
    }

    out.flush()?;
    Ok(())
}
