//! Error type shared by every operation in the crate.

use crate::core::symbol::Symbol;

/// Result alias for fallible symbol, address and relation operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Failures reported by the symbol table, address codec, verb table and
/// relation/grammar indexers.
///
/// All errors are local and synchronous. No operation produces a partial
/// result alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Label is not one of the 22 canonical symbol strings.
    #[error("unknown symbol label {0:?}")]
    UnknownSymbol(String),

    /// Name of a layer or scale that does not exist.
    #[error("unknown {kind} {name:?}")]
    UnknownName {
        /// What was being named, e.g. `"layer"` or `"pole"`.
        kind: &'static str,
        /// The rejected name.
        name: String,
    },

    /// Integer id or index lies outside its documented domain.
    #[error("{what} {value} out of range (expected 0..={max})")]
    OutOfRange {
        /// What kind of value was rejected.
        what: &'static str,
        /// The rejected value.
        value: u32,
        /// Largest legal value.
        max: u32,
    },

    /// Raw `encode` input outside its field: symbol id above 21, mode
    /// above 1, or pole above 2.
    #[error("invalid {component} value {value}")]
    InvalidAddressComponent {
        /// `"symbol id"`, `"mode"` or `"pole"`.
        component: &'static str,
        /// The rejected bits.
        value: u8,
    },

    /// Structurally valid address with no meaning assigned.
    #[error("address {0:#010b} has no assigned meaning")]
    UnpopulatedAddress(u8),

    /// A lexicon was assembled without a record for this symbol.
    #[error("lexicon has no record for symbol {0}")]
    MissingRecord(Symbol),

    /// A lexicon was given two records for the same symbol.
    #[error("lexicon has more than one record for symbol {0}")]
    DuplicateRecord(Symbol),

    /// A lexicon record contains an empty meaning string.
    #[error("lexicon record for {symbol} has an empty meaning in slot {slot}")]
    EmptyMeaning {
        /// Symbol whose record is incomplete.
        symbol: Symbol,
        /// Position 0..6 of the empty meaning.
        slot: usize,
    },
}

impl Error {
    pub(crate) fn out_of_range(what: &'static str, value: impl Into<u32>, max: usize) -> Self {
        Self::OutOfRange {
            what,
            value: value.into(),
            max: max as u32,
        }
    }
}
