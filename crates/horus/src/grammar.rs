//! The 408 grammar: three scales over 136 wheel relations.
//!
//! Each scale is carried by one spine symbol. Every wheel relation can be
//! read through each scale, giving `3 × 136 = 408` grammatical relations,
//! indexed scale-major:
//!
//! ```text
//! grammar_index = scale * 136 + relation_index
//! ```

use crate::constants::{GRAMMAR_COUNT, RELATION_COUNT, SCALE_COUNT};
use crate::error::{Error, Result};
use crate::relation::{relation_to_pair, Relation};
use crate::table::VerbTable;
use crate::Symbol;
use core::fmt;

/// Reading scope, carried by a spine symbol.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[repr(u8)]
pub enum Scale {
    /// Individual cycle, spine `k`.
    Ontogenic = 0,
    /// Species action, spine `d`.
    Phylogenic = 1,
    /// Universal fundament, spine `x`.
    Cosmogenic = 2,
}

/// Descriptive record of the spine symbol behind a scale.
///
/// `decan_count` is how often the symbol occurs across the 37 decan names.
/// Nothing in the codec or tables consumes it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SpineAxis {
    /// The scale this axis carries.
    pub scale: Scale,
    /// The spine symbol.
    pub symbol: Symbol,
    /// Occurrences in the decan names.
    pub decan_count: u8,
}

/// Spine axes in scale order.
pub static SPINE_AXES: [SpineAxis; SCALE_COUNT] = [
    SpineAxis {
        scale: Scale::Ontogenic,
        symbol: Symbol::K,
        decan_count: 5,
    },
    SpineAxis {
        scale: Scale::Phylogenic,
        symbol: Symbol::D,
        decan_count: 10,
    },
    SpineAxis {
        scale: Scale::Cosmogenic,
        symbol: Symbol::X,
        decan_count: 17,
    },
];

impl Scale {
    /// All scales in index order.
    pub const ALL: [Self; SCALE_COUNT] = [Self::Ontogenic, Self::Phylogenic, Self::Cosmogenic];

    /// Scale with the given index.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] unless `index` is 0, 1 or 2.
    pub fn from_index(index: u8) -> Result<Self> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or_else(|| Error::out_of_range("scale", index, SCALE_COUNT - 1))
    }

    /// Scale carried by a spine symbol, if it carries one.
    #[must_use]
    pub fn for_symbol(symbol: Symbol) -> Option<Self> {
        SPINE_AXES.iter().find(|a| a.symbol == symbol).map(|a| a.scale)
    }

    /// Index 0..3.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The spine record for this scale.
    #[inline]
    #[must_use]
    pub fn axis(self) -> &'static SpineAxis {
        &SPINE_AXES[self as usize]
    }

    /// The spine symbol carrying this scale.
    #[inline]
    #[must_use]
    pub fn symbol(self) -> Symbol {
        self.axis().symbol
    }

    /// Core meaning of the spine symbol, as the table reads it.
    #[must_use]
    pub fn verb(self, table: &VerbTable) -> &str {
        table.core_meaning(self.symbol())
    }

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ontogenic => "ontogenic",
            Self::Phylogenic => "phylogenic",
            Self::Cosmogenic => "cosmogenic",
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl core::str::FromStr for Scale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if let Ok(i) = s.parse::<u8>() {
            return Self::from_index(i);
        }
        Self::ALL
            .into_iter()
            .find(|sc| sc.name().eq_ignore_ascii_case(s) || sc.symbol().label() == s)
            .ok_or_else(|| Error::UnknownName {
                kind: "scale",
                name: s.to_owned(),
            })
    }
}

/// Combines a scale and a relation index into `0..408`.
///
/// # Errors
///
/// [`Error::OutOfRange`] if `scale > 2` or `relation > 135`.
///
/// # Example
///
/// ```
/// use horus::{grammar_index, grammar_to_components};
///
/// assert_eq!(grammar_index(0, 0).unwrap(), 0);
/// assert_eq!(grammar_index(1, 0).unwrap(), 136);
/// assert_eq!(grammar_index(2, 135).unwrap(), 407);
/// assert_eq!(grammar_to_components(300).unwrap(), (2, 28));
/// ```
pub fn grammar_index(scale: u8, relation: u8) -> Result<u16> {
    Scale::from_index(scale)?;
    relation_to_pair(relation)?;
    Ok(u16::from(scale) * RELATION_COUNT as u16 + u16::from(relation))
}

/// Splits a grammar index into `(scale, relation_index)`.
///
/// # Errors
///
/// [`Error::OutOfRange`] if `index > 407`.
pub fn grammar_to_components(index: u16) -> Result<(u8, u8)> {
    if index as usize >= GRAMMAR_COUNT {
        return Err(Error::out_of_range("grammar index", index, GRAMMAR_COUNT - 1));
    }
    let n = RELATION_COUNT as u16;
    Ok(((index / n) as u8, (index % n) as u8))
}

/// A wheel relation read through one scale.
///
/// ```text
///         A (wheel)
///        /|\
///       x d k     ← spine picks the scale
///        \|/
///         B (wheel)
/// ```
///
/// # Example
///
/// ```
/// use horus::{Relation, Scale, Symbol, TriangularRelation, VerbTable};
///
/// let table = VerbTable::standard();
/// let r = Relation::new(Symbol::N, Symbol::W).unwrap();
/// let tri = TriangularRelation::new(r, Scale::Cosmogenic);
/// assert_eq!(tri.index(), 2 * 136 + 1);
/// assert_eq!(tri.description(&table), "INTEGRATE↔RADIATE (cosmogenic)");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TriangularRelation {
    /// The wheel pair.
    pub relation: Relation,
    /// The scale it is read through.
    pub scale: Scale,
}

impl TriangularRelation {
    /// Pairs a relation with a scale.
    #[must_use]
    pub const fn new(relation: Relation, scale: Scale) -> Self {
        Self { relation, scale }
    }

    /// The triangular relation at a grammar index.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `index > 407`.
    pub fn from_index(index: u16) -> Result<Self> {
        let (scale, relation) = grammar_to_components(index)?;
        Ok(Self {
            relation: Relation::from_index(relation)?,
            scale: Scale::from_index(scale)?,
        })
    }

    /// Position in `0..408`.
    #[must_use]
    pub fn index(self) -> u16 {
        u16::from(self.scale.index()) * RELATION_COUNT as u16 + u16::from(self.relation.index())
    }

    /// The spine symbol of the scale.
    #[must_use]
    pub fn spine(self) -> Symbol {
        self.scale.symbol()
    }

    /// Core meaning of the spine symbol.
    #[must_use]
    pub fn spine_verb(self, table: &VerbTable) -> &str {
        self.scale.verb(table)
    }

    /// True when both wheel sides are the same symbol.
    #[must_use]
    pub fn is_self(self) -> bool {
        self.relation.is_self()
    }

    /// `A↔B (scale)`, or `A (scale)` for a self-relation.
    #[must_use]
    pub fn description(self, table: &VerbTable) -> String {
        let a = table.core_meaning(self.relation.a());
        if self.is_self() {
            format!("{a} ({})", self.scale)
        } else {
            let b = table.core_meaning(self.relation.b());
            format!("{a}↔{b} ({})", self.scale)
        }
    }
}

/// All 408 triangular relations in grammar-index order.
pub fn triangular_relations() -> impl Iterator<Item = TriangularRelation> {
    Scale::ALL.into_iter().flat_map(|scale| {
        crate::relation::relations().map(move |relation| TriangularRelation { relation, scale })
    })
}
