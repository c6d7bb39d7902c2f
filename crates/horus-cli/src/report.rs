//! Plain-text output for each subcommand.
//!
//! Every function writes to any [`Write`] so the binary can target stdout
//! and tests can target a buffer.

use std::io::Write;

use anyhow::Result;
use horus::{
    decode_all_symbols, decode_symbols_with, trajectory, Address, Layer, Mode, Pole, Relation,
    Symbol, TriangularRelation, VerbTable,
};
use horus_corpus::{Corpus, LineRhythm, PeriodStats, Query, RelationStats, SymbolStats};

fn labels(symbols: &[Symbol]) -> String {
    symbols
        .iter()
        .map(|s| s.label())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Layer readings of a symbol sequence; all five unless `only` is set.
///
/// # Errors
///
/// Only if writing fails.
pub fn decode(
    out: &mut impl Write,
    table: &VerbTable,
    symbols: &[Symbol],
    only: Option<Layer>,
) -> Result<()> {
    writeln!(out, "symbols: {}", labels(symbols))?;
    let layers = decode_all_symbols(table, symbols);
    for (layer, reading) in layers.iter() {
        if only.map_or(true, |l| l == layer) {
            writeln!(out, "{layer:>4}: {}", trajectory(reading))?;
        }
    }
    Ok(())
}

/// Reading of a symbol sequence at one fixed mode and pole, labelled
/// like an address slot (`F/max`).
///
/// # Errors
///
/// Only if writing fails.
pub fn decode_with(
    out: &mut impl Write,
    table: &VerbTable,
    symbols: &[Symbol],
    mode: Mode,
    pole: Pole,
) -> Result<()> {
    writeln!(out, "symbols: {}", labels(symbols))?;
    let reading = decode_symbols_with(table, symbols, mode, pole);
    writeln!(out, "{}/{pole}: {}", mode.tag(), trajectory(&reading))?;
    Ok(())
}

/// Phi segments and yuga spans of a symbol sequence.
///
/// # Errors
///
/// Only if writing fails.
pub fn rhythm(out: &mut impl Write, symbols: &[Symbol]) -> Result<()> {
    let rhythm = LineRhythm::analyze(symbols);
    let segments: Vec<String> = rhythm.segments.iter().map(|s| labels(s)).collect();
    writeln!(out, "symbols: {} ({})", labels(symbols), rhythm.len())?;
    writeln!(out, "phi: {}", segments.join(" | "))?;
    for (yuga, span) in &rhythm.yugas {
        writeln!(out, "{yuga:>7}: {}", labels(&symbols[span.clone()]))?;
    }
    Ok(())
}

/// Value, layout and meaning of one address.
///
/// # Errors
///
/// Only if writing fails.
pub fn address(
    out: &mut impl Write,
    table: &VerbTable,
    symbol: Symbol,
    mode: Mode,
    pole: Pole,
) -> Result<()> {
    let addr = Address::new(symbol, mode, pole);
    writeln!(out, "address: {} ({addr:#010b})", addr.value())?;
    writeln!(out, "   slot: {addr}")?;
    writeln!(out, "meaning: {}", table.meaning(addr))?;
    Ok(())
}

/// Index and readings of a wheel relation.
///
/// # Errors
///
/// Only if writing fails.
pub fn relation(out: &mut impl Write, table: &VerbTable, relation: Relation) -> Result<()> {
    writeln!(out, "relation {}: {relation}", relation.index())?;
    writeln!(out, "forward: {}", relation.forward(table))?;
    if !relation.is_self() {
        writeln!(out, "reverse: {}", relation.reverse(table))?;
    }
    Ok(())
}

/// Index, scale and reading of a grammar relation.
///
/// # Errors
///
/// Only if writing fails.
pub fn grammar(out: &mut impl Write, table: &VerbTable, tri: TriangularRelation) -> Result<()> {
    writeln!(
        out,
        "grammar {}: relation {} ({}) through {} [spine {} {}]",
        tri.index(),
        tri.relation.index(),
        tri.relation,
        tri.scale,
        tri.spine(),
        tri.spine_verb(table)
    )?;
    writeln!(out, "{}", tri.description(table))?;
    Ok(())
}

/// Size, dating and frequency summary of a corpus.
///
/// # Errors
///
/// Only if writing fails.
pub fn corpus_stats(
    out: &mut impl Write,
    table: &VerbTable,
    corpus: &Corpus,
    top: usize,
) -> Result<()> {
    writeln!(out, "sentences: {}", corpus.len())?;

    writeln!(out, "\nperiods:")?;
    for (period, count) in PeriodStats::collect(corpus).iter() {
        writeln!(out, "  {period:<20} {count}")?;
    }

    let symbols = SymbolStats::collect(corpus);
    writeln!(
        out,
        "\nsymbols: {} ({} wheel, {} spine)",
        symbols.total(),
        symbols.wheel_total(),
        symbols.spine_total()
    )?;
    for (symbol, count) in symbols.top(top) {
        writeln!(
            out,
            "  {:<3} {:<12} {count:>8} {:>6.2}%",
            symbol.label(),
            table.core_meaning(symbol),
            symbols.frequency(symbol) * 100.0
        )?;
    }

    let relations = RelationStats::collect(corpus);
    writeln!(out, "\nadjacent wheel pairs: {}", relations.total())?;
    for (relation, count) in relations.top(top) {
        writeln!(
            out,
            "  {:<7} {:<24} {count:>8}",
            relation.to_string(),
            relation.forward(table)
        )?;
    }
    Ok(())
}

/// Matching sentences, one block each.
///
/// # Errors
///
/// Only if writing fails.
pub fn search(
    out: &mut impl Write,
    table: &VerbTable,
    corpus: &Corpus,
    query: &Query,
) -> Result<()> {
    let mut hits = 0usize;
    for sentence in corpus.search(query) {
        hits += 1;
        writeln!(out, "{}", sentence.transliteration())?;
        writeln!(out, "  {}", sentence.translation())?;
        writeln!(out, "  {} ({})", sentence.date_range(), sentence.period())?;
        writeln!(out, "  {}", sentence.trajectory(table))?;
    }
    tracing::debug!(hits, "search finished");
    if hits == 0 {
        writeln!(out, "no matches")?;
    }
    Ok(())
}
