//! Frequency tables over a corpus.

use horus::constants::{RELATION_COUNT, SYMBOL_COUNT};
use horus::{relation_index, Relation, Symbol};

use crate::corpus::{Corpus, Period};

/// Occurrences of each symbol across all sentences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolStats {
    counts: [u64; SYMBOL_COUNT],
    total: u64,
}

impl SymbolStats {
    /// Counts every symbol of every sentence.
    #[must_use]
    pub fn collect(corpus: &Corpus) -> Self {
        let mut counts = [0u64; SYMBOL_COUNT];
        for sentence in corpus {
            for &s in sentence.symbols() {
                counts[s.id() as usize] += 1;
            }
        }
        Self {
            counts,
            total: counts.iter().sum(),
        }
    }

    /// Occurrences of `symbol`.
    #[must_use]
    pub fn count(&self, symbol: Symbol) -> u64 {
        self.counts[symbol.id() as usize]
    }

    /// All symbol occurrences.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Occurrences of wheel symbols.
    #[must_use]
    pub fn wheel_total(&self) -> u64 {
        Symbol::WHEEL.iter().map(|&s| self.count(s)).sum()
    }

    /// Occurrences of spine symbols.
    #[must_use]
    pub fn spine_total(&self) -> u64 {
        Symbol::SPINE.iter().map(|&s| self.count(s)).sum()
    }

    /// Share of all occurrences, 0.0 for an empty corpus.
    #[must_use]
    pub fn frequency(&self, symbol: Symbol) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.count(symbol) as f64 / self.total as f64
        }
    }

    /// The `n` most frequent symbols that occur at all, most frequent
    /// first; ties keep id order.
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<(Symbol, u64)> {
        let mut ranked: Vec<(Symbol, u64)> = Symbol::ALL
            .iter()
            .map(|&s| (s, self.count(s)))
            .filter(|&(_, c)| c > 0)
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

/// Adjacent wheel-symbol pairs, counted by relation.
///
/// Within each sentence every neighbouring pair of wheel symbols is
/// counted once under its unordered relation. Pairs touching a spine
/// symbol are skipped, and pairs never span two sentences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelationStats {
    counts: [u64; RELATION_COUNT],
    total: u64,
}

impl RelationStats {
    /// Counts adjacent wheel pairs across the corpus.
    #[must_use]
    pub fn collect(corpus: &Corpus) -> Self {
        let mut counts = [0u64; RELATION_COUNT];
        for sentence in corpus {
            for pair in sentence.symbols().windows(2) {
                if let Ok(r) = relation_index(pair[0].id(), pair[1].id()) {
                    counts[r as usize] += 1;
                }
            }
        }
        Self {
            counts,
            total: counts.iter().sum(),
        }
    }

    /// Occurrences of `relation`.
    #[must_use]
    pub fn count(&self, relation: Relation) -> u64 {
        self.counts[relation.index() as usize]
    }

    /// All counted pairs.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// The `n` most frequent relations that occur at all; ties keep index
    /// order.
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<(Relation, u64)> {
        let mut ranked: Vec<(Relation, u64)> = horus::relations()
            .map(|r| (r, self.count(r)))
            .filter(|&(_, c)| c > 0)
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

/// Sentence counts per period.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PeriodStats {
    counts: [usize; Period::ALL.len()],
}

impl PeriodStats {
    /// Classifies every sentence.
    #[must_use]
    pub fn collect(corpus: &Corpus) -> Self {
        let mut counts = [0usize; Period::ALL.len()];
        for sentence in corpus {
            counts[sentence.period().index()] += 1;
        }
        Self { counts }
    }

    /// Sentences in `period`.
    #[must_use]
    pub fn count(&self, period: Period) -> usize {
        self.counts[period.index()]
    }

    /// `(period, count)` in chronological order, empty periods included.
    pub fn iter(&self) -> impl Iterator<Item = (Period, usize)> + '_ {
        Period::ALL.into_iter().map(|p| (p, self.count(p)))
    }
}
