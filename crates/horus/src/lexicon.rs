//! Source-of-truth meaning records.
//!
//! A lexicon holds exactly one [`MeaningRecord`] per symbol. Each record
//! lists six meanings in canonical order:
//!
//! | Slot | Mode | Pole |
//! |------|------|------|
//! | 0 | primary | equilibrium |
//! | 1 | primary | minimum |
//! | 2 | primary | maximum |
//! | 3 | secondary | equilibrium |
//! | 4 | secondary | minimum |
//! | 5 | secondary | maximum |
//!
//! The [`VerbTable`](crate::VerbTable) is derived from a lexicon once and
//! never edited afterwards.

use crate::address::{Mode, Pole};
use crate::constants::{MEANINGS_PER_SYMBOL, POLE_COUNT, SYMBOL_COUNT};
use crate::error::{Error, Result};
use crate::Symbol;

/// The six meanings of one symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeaningRecord {
    /// Symbol the record describes.
    pub symbol: Symbol,
    /// Meanings in canonical slot order.
    pub meanings: [String; MEANINGS_PER_SYMBOL],
}

impl MeaningRecord {
    /// Builds a record from borrowed strings.
    #[must_use]
    pub fn new(symbol: Symbol, meanings: [&str; MEANINGS_PER_SYMBOL]) -> Self {
        Self {
            symbol,
            meanings: meanings.map(str::to_owned),
        }
    }

    /// Slot index of a (mode, pole) pair.
    #[inline]
    #[must_use]
    pub const fn slot(mode: Mode, pole: Pole) -> usize {
        mode as usize * POLE_COUNT + pole as usize
    }

    /// Meaning at the given mode and pole.
    #[must_use]
    pub fn meaning(&self, mode: Mode, pole: Pole) -> &str {
        &self.meanings[Self::slot(mode, pole)]
    }

    /// The primary-mode equilibrium meaning.
    #[must_use]
    pub fn core(&self) -> &str {
        &self.meanings[0]
    }
}

/// A complete set of 22 meaning records, indexed by symbol id.
///
/// # Example
///
/// ```
/// use horus::{Lexicon, Mode, Pole, Symbol};
///
/// let lex = Lexicon::standard();
/// let n = lex.record(Symbol::N);
/// assert_eq!(n.core(), "INTEGRATE");
/// assert_eq!(n.meaning(Mode::Secondary, Pole::Maximum), "INTERLOCK");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lexicon {
    records: Vec<MeaningRecord>,
}

impl Lexicon {
    /// Assembles a lexicon from records in any order.
    ///
    /// # Errors
    ///
    /// - [`Error::DuplicateRecord`] if a symbol appears twice
    /// - [`Error::EmptyMeaning`] if any meaning string is empty
    /// - [`Error::MissingRecord`] if a symbol has no record
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = MeaningRecord>,
    {
        let mut slots: [Option<MeaningRecord>; SYMBOL_COUNT] = std::array::from_fn(|_| None);

        for record in records {
            if let Some(slot) = record.meanings.iter().position(String::is_empty) {
                return Err(Error::EmptyMeaning {
                    symbol: record.symbol,
                    slot,
                });
            }
            let entry = &mut slots[record.symbol.id() as usize];
            if entry.is_some() {
                return Err(Error::DuplicateRecord(record.symbol));
            }
            *entry = Some(record);
        }

        let mut out = Vec::with_capacity(SYMBOL_COUNT);
        for (symbol, slot) in Symbol::ALL.into_iter().zip(slots) {
            out.push(slot.ok_or(Error::MissingRecord(symbol))?);
        }
        Ok(Self { records: out })
    }

    /// The built-in lexicon (wheel lexicon v63 plus spine records).
    #[must_use]
    pub fn standard() -> Self {
        Self {
            records: STANDARD
                .iter()
                .map(|&(symbol, meanings)| MeaningRecord::new(symbol, meanings))
                .collect(),
        }
    }

    /// Record for one symbol.
    #[must_use]
    pub fn record(&self, symbol: Symbol) -> &MeaningRecord {
        &self.records[symbol.id() as usize]
    }

    /// Records in id order.
    pub fn iter(&self) -> impl Iterator<Item = &MeaningRecord> {
        self.records.iter()
    }

    /// Consumes the lexicon, returning the records in id order.
    #[must_use]
    pub fn into_records(self) -> Vec<MeaningRecord> {
        self.records
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> IntoIterator for &'a Lexicon {
    type Item = &'a MeaningRecord;
    type IntoIter = core::slice::Iter<'a, MeaningRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[rustfmt::skip]
const STANDARD: [(Symbol, [&str; MEANINGS_PER_SYMBOL]); SYMBOL_COUNT] = [
    (Symbol::N,     ["INTEGRATE", "FRAGMENT", "FUSE", "WEAVE", "UNRAVEL", "INTERLOCK"]),
    (Symbol::W,     ["RADIATE", "CONTAIN", "FLOOD", "FLOW", "STAGNATE", "CIRCULATE"]),
    (Symbol::S,     ["EMERGE", "REGRESS", "BURST", "CRYSTALLISE", "EXPOSE", "ENCASE"]),
    (Symbol::Sh,    ["DIRECT", "SCATTER", "COMMAND", "ALIGN", "DRIFT", "ORIENT"]),
    (Symbol::Aleph, ["LEAD", "ABANDON", "DRIVE", "TEND", "NEGLECT", "NURTURE"]),
    (Symbol::T,     ["READ", "MISREAD", "DECODE", "ETCH", "ERASE", "INSCRIBE"]),
    (Symbol::H,     ["EXPRESS", "SUPPRESS", "PROCLAIM", "INTERPRET", "MISREAD", "COMPREHEND"]),
    (Symbol::R,     ["SHINE", "DIM", "BLAZE", "BASK", "SHADE", "ABSORB"]),
    (Symbol::M,     ["TRUE", "FALSIFY", "VERIFY", "TRUST", "DOUBT", "BELIEVE"]),
    (Symbol::Ayin,  ["HONOUR", "DISHONOUR", "REVERE", "ALLOW", "BLOCK", "PERMIT"]),
    (Symbol::Y,     ["DEVOTE", "BETRAY", "CONSECRATE", "RESTORE", "NEGLECT", "HEAL"]),
    (Symbol::B,     ["RECEIVE", "REFUSE", "ENGULF", "CULTIVATE", "DEPLETE", "NOURISH"]),
    (Symbol::P,     ["STORE", "SCATTER", "HOARD", "GATHER", "DISPERSE", "COLLECT"]),
    (Symbol::I,     ["BESTOW", "WITHHOLD", "GIFT", "PROTECT", "EXPOSE", "GUARD"]),
    (Symbol::Kh,    ["EMBODY", "FUMBLE", "MASTER", "CAPACITY", "NUMB", "DEFT"]),
    (Symbol::Dj,    ["DISCERN", "CONFUSE", "PERCEIVE", "ACT", "HESITATE", "EXECUTE"]),
    (Symbol::D,     ["DO", "STALL", "FORCE", "MIDWIFE", "WAIT", "COMPLETE"]),
    (Symbol::K,     ["CYCLE", "HALT", "ACCELERATE", "RETURN", "REST", "REUNITE"]),
    (Symbol::X,     ["FUNDAMENT", "DISSOLVE", "PETRIFY", "FOUNDATION", "RELEASE", "ANCHOR"]),
    (Symbol::G,     ["GROUND", "FLOAT", "SINK", "STABILIZE", "UNROOT", "ANCHOR"]),
    (Symbol::F,     ["BREATHE", "CHOKE", "FLOOD", "FLOW", "STILL", "SURGE"]),
    (Symbol::Hh,    ["SEE", "BLIND", "PIERCE", "WITNESS", "IGNORE", "BEHOLD"]),
];
