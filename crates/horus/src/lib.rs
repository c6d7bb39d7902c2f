//! Horus - symbolic address encoding for transliterated Egyptian.
//!
//! Every phonemic symbol of the transliteration maps to a fixed set of six
//! meanings. This crate packs each (symbol, mode, pole) triple into one byte
//! so that meanings resolve through a flat 256-slot table, and indexes
//! unordered pairs of wheel symbols on a triangular grid.
//!
//! # Symbol Space
//!
//! | Class | Ids | Count | Bit 4 |
//! |-------|-----|-------|-------|
//! | Wheel (primary) | 0..16 | 16 | 0 |
//! | Spine (secondary) | 16..22 | 6 | 1 |
//!
//! # Address Layout
//!
//! ```text
//! [7:3] symbol id   [2] mode   [1:0] pole
//!        0..=21        0/1       0=eq 1=min 2=max
//! ```
//!
//! 22 symbols × 2 modes × 3 poles = 132 of the 256 slots carry a meaning.
//!
//! # Counting
//!
//! | Quantity | Value | Derivation |
//! |----------|-------|------------|
//! | Relations | 136 | T(16) = 16·17/2 |
//! | Self-relations | 16 | one per wheel symbol |
//! | Grammar | 408 | 3 scales × 136 |
//!
//! # Example: Layered Decode
//!
//! ```
//! use horus::{decode_all_layers, Layer, VerbTable};
//!
//! let table = VerbTable::standard();
//! let layers = decode_all_layers(&table, &[0, 1, 2]).unwrap();
//! assert_eq!(layers.core, ["INTEGRATE", "RADIATE", "EMERGE"]);
//! assert_eq!(layers.layer(Layer::M2), ["FUSE", "RADIATE", "BURST"]);
//! ```
//!
//! # Example: Relations
//!
//! ```
//! use horus::{grammar_index, relation_index, relation_to_pair};
//!
//! let r = relation_index(9, 4).unwrap();
//! assert_eq!(relation_to_pair(r).unwrap(), (4, 9));
//! assert_eq!(grammar_index(2, r).unwrap(), 2 * 136 + r as u16);
//! ```
//!
//! # Design Principles
//!
//! - **Build once**: the [`VerbTable`] is derived from a [`Lexicon`] in a
//!   single explicit step and passed by reference afterwards
//! - **No placeholder strings**: unknown labels and ids are errors, never
//!   `?`-prefixed fallbacks
//! - **Integer only**: relation inversion never touches floating point

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

// Core data types (symbol, constants)
mod core;

// Crate-wide error type
mod error;

// Semantic addressing (mode, pole, address codec)
pub mod address;

// Source-of-truth meaning records
pub mod lexicon;

// Dense 256-slot and 22-slot meaning tables
pub mod table;

// Five-layer alternating decode
pub mod layer;

// Triangular pair indexing over the wheel
pub mod relation;

// Scales and the 408 grammar
pub mod grammar;

pub use crate::core::constants;
pub use crate::core::symbol;

pub use crate::core::constants::{
    GRAMMAR_COUNT, POPULATED_SLOTS, RELATION_COUNT, SCALE_COUNT, SPINE_BIT, SPINE_COUNT,
    SYMBOL_COUNT, TABLE_SIZE, WHEEL_COUNT,
};
pub use crate::core::symbol::{
    id_to_symbol, is_primary, is_secondary, symbol_to_id, Symbol, SymbolClass,
};
pub use address::{decode, encode, Address, Mode, Pole};
pub use error::{Error, Result};
pub use grammar::{
    grammar_index, grammar_to_components, triangular_relations, Scale, SpineAxis,
    TriangularRelation, SPINE_AXES,
};
pub use layer::{
    decode_all_layers, decode_all_symbols, decode_layer, decode_symbols, decode_symbols_with,
    decode_with, phonemes_to_verbs, trajectory, Layer, LayeredDecode,
};
pub use lexicon::{Lexicon, MeaningRecord};
pub use relation::{relation_index, relation_to_pair, relations, triangular, Relation};
pub use table::VerbTable;

/// Prelude module for convenient imports.
///
/// ```
/// use horus::prelude::*;
///
/// let table = VerbTable::standard();
/// assert_eq!(table.core_meaning(Symbol::Dj), "DISCERN");
/// ```
pub mod prelude {
    pub use crate::address::{decode, encode, Address, Mode, Pole};
    pub use crate::core::symbol::{Symbol, SymbolClass};
    pub use crate::error::{Error, Result};
    pub use crate::grammar::{grammar_index, grammar_to_components, Scale, TriangularRelation};
    pub use crate::layer::{decode_all_layers, decode_layer, decode_with, Layer, LayeredDecode};
    pub use crate::lexicon::{Lexicon, MeaningRecord};
    pub use crate::relation::{relation_index, relation_to_pair, Relation};
    pub use crate::table::VerbTable;
}
