//! The 22-symbol vocabulary.
//!
//! Each symbol stands for one phonemic sound of transliterated Egyptian and
//! carries a stable id in `0..22`. Ids `0..16` are the wheel, ids `16..22`
//! the spine; bit 4 of the id tells them apart.
//!
//! | Id | Label | Deity | Id | Label | Deity |
//! |----|-------|-------|----|-------|-------|
//! | 0 | n | Neith | 11 | b | Bes |
//! | 1 | w | Wadjet | 12 | p | Ptah |
//! | 2 | s | Sekhmet | 13 | i | Ihy |
//! | 3 | sh | Shu | 14 | kh | Khnum |
//! | 4 | A | Atum | 15 | dj | Thoth |
//! | 5 | t | Seshat | 16 | d | Duat |
//! | 6 | H | Horus | 17 | k | Ka/Khonsu |
//! | 7 | r | Ra | 18 | x | |
//! | 8 | m | Ma'at | 19 | g | Geb |
//! | 9 | a | Anubis | 20 | f | |
//! | 10 | y | Isis | 21 | h | Horus |
//!
//! Labels are case-sensitive: `A` (aleph) and `a` (ayin) are different
//! symbols, as are `H` (pharyngeal) and `h` (glottal).

use super::constants::{SPINE_BIT, SYMBOL_COUNT, WHEEL_COUNT};
use crate::error::{Error, Result};
use core::fmt;
use core::str::FromStr;

/// One of the 22 phonemic symbols.
///
/// # Example
///
/// ```
/// use horus::{Symbol, SymbolClass};
///
/// let s: Symbol = "sh".parse().unwrap();
/// assert_eq!(s, Symbol::Sh);
/// assert_eq!(s.id(), 3);
/// assert_eq!(s.class(), SymbolClass::Primary);
/// assert_eq!(Symbol::Hh.label(), "h");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[repr(u8)]
pub enum Symbol {
    /// `n` (Neith)
    N = 0,
    /// `w` (Wadjet)
    W = 1,
    /// `s` (Sekhmet)
    S = 2,
    /// `sh` (Shu)
    Sh = 3,
    /// `A`, aleph (Atum)
    Aleph = 4,
    /// `t` (Seshat)
    T = 5,
    /// `H`, pharyngeal h (Horus)
    H = 6,
    /// `r` (Ra)
    R = 7,
    /// `m` (Ma'at)
    M = 8,
    /// `a`, ayin (Anubis)
    Ayin = 9,
    /// `y` (Isis)
    Y = 10,
    /// `b` (Bes)
    B = 11,
    /// `p` (Ptah)
    P = 12,
    /// `i`, yod (Ihy)
    I = 13,
    /// `kh` (Khnum)
    Kh = 14,
    /// `dj` (Thoth)
    Dj = 15,
    /// `d`, phylogenic spine
    D = 16,
    /// `k`, ontogenic spine
    K = 17,
    /// `x`, cosmogenic spine
    X = 18,
    /// `g`
    G = 19,
    /// `f`
    F = 20,
    /// `h`, glottal h
    Hh = 21,
}

/// Which half of the vocabulary a symbol belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SymbolClass {
    /// Wheel symbol, id `0..16`.
    Primary,
    /// Spine symbol, id `16..22`.
    Secondary,
}

const LABELS: [&str; SYMBOL_COUNT] = [
    "n", "w", "s", "sh", "A", "t", "H", "r", "m", "a", "y", "b", "p", "i", "kh", "dj", "d", "k",
    "x", "g", "f", "h",
];

const DEITIES: [Option<&str>; SYMBOL_COUNT] = [
    Some("Neith"),
    Some("Wadjet"),
    Some("Sekhmet"),
    Some("Shu"),
    Some("Atum"),
    Some("Seshat"),
    Some("Horus"),
    Some("Ra"),
    Some("Ma'at"),
    Some("Anubis"),
    Some("Isis"),
    Some("Bes"),
    Some("Ptah"),
    Some("Ihy"),
    Some("Khnum"),
    Some("Thoth"),
    Some("Duat"),
    Some("Ka/Khonsu"),
    None,
    Some("Geb"),
    None,
    Some("Horus"),
];

impl Symbol {
    /// All symbols in id order.
    pub const ALL: [Self; SYMBOL_COUNT] = [
        Self::N,
        Self::W,
        Self::S,
        Self::Sh,
        Self::Aleph,
        Self::T,
        Self::H,
        Self::R,
        Self::M,
        Self::Ayin,
        Self::Y,
        Self::B,
        Self::P,
        Self::I,
        Self::Kh,
        Self::Dj,
        Self::D,
        Self::K,
        Self::X,
        Self::G,
        Self::F,
        Self::Hh,
    ];

    /// The 16 wheel symbols in id order.
    pub const WHEEL: [Self; WHEEL_COUNT] = [
        Self::N,
        Self::W,
        Self::S,
        Self::Sh,
        Self::Aleph,
        Self::T,
        Self::H,
        Self::R,
        Self::M,
        Self::Ayin,
        Self::Y,
        Self::B,
        Self::P,
        Self::I,
        Self::Kh,
        Self::Dj,
    ];

    /// The 6 spine symbols in id order.
    pub const SPINE: [Self; SYMBOL_COUNT - WHEEL_COUNT] =
        [Self::D, Self::K, Self::X, Self::G, Self::F, Self::Hh];

    /// Returns the symbol with the given id, or `None` if `id >= 22`.
    #[inline]
    #[must_use]
    pub const fn new(id: u8) -> Option<Self> {
        if (id as usize) < SYMBOL_COUNT {
            Some(Self::ALL[id as usize])
        } else {
            None
        }
    }

    /// Returns the symbol with the given id.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `id` is not in `0..=21`.
    pub fn from_id(id: u8) -> Result<Self> {
        Self::new(id).ok_or_else(|| Error::out_of_range("symbol id", id, SYMBOL_COUNT - 1))
    }

    /// Looks a symbol up by its canonical label. Matching is case-sensitive.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownSymbol`] if `label` is not one of the 22 labels.
    pub fn from_label(label: &str) -> Result<Self> {
        LABELS
            .iter()
            .position(|&l| l == label)
            .map(|i| Self::ALL[i])
            .ok_or_else(|| Error::UnknownSymbol(label.to_owned()))
    }

    /// Stable id in `0..22`.
    #[inline]
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Canonical transliteration label.
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        LABELS[self as usize]
    }

    /// Deity traditionally associated with the sound, if any.
    #[inline]
    #[must_use]
    pub const fn deity(self) -> Option<&'static str> {
        DEITIES[self as usize]
    }

    /// Wheel or spine.
    #[inline]
    #[must_use]
    pub const fn class(self) -> SymbolClass {
        SymbolClass::of(self as u8)
    }

    /// True for the 16 wheel symbols.
    #[inline]
    #[must_use]
    pub const fn is_wheel(self) -> bool {
        is_primary(self as u8)
    }

    /// True for the 6 spine symbols.
    #[inline]
    #[must_use]
    pub const fn is_spine(self) -> bool {
        is_secondary(self as u8)
    }
}

impl SymbolClass {
    /// Classifies a raw id by its spine bit.
    #[inline]
    #[must_use]
    pub const fn of(id: u8) -> Self {
        if is_primary(id) {
            Self::Primary
        } else {
            Self::Secondary
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Symbol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_label(s)
    }
}

impl TryFrom<u8> for Symbol {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self> {
        Self::from_id(id)
    }
}

impl From<Symbol> for u8 {
    #[inline]
    fn from(s: Symbol) -> u8 {
        s as u8
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Symbol {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Symbol {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> core::result::Result<Self, D::Error> {
        let label = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Self::from_label(&label).map_err(serde::de::Error::custom)
    }
}

/// Maps a canonical label to its id.
///
/// # Errors
///
/// [`Error::UnknownSymbol`] if `label` is not recognised.
pub fn symbol_to_id(label: &str) -> Result<u8> {
    Symbol::from_label(label).map(Symbol::id)
}

/// Maps an id to its canonical label.
///
/// # Errors
///
/// [`Error::OutOfRange`] if `id` is not in `0..=21`.
pub fn id_to_symbol(id: u8) -> Result<&'static str> {
    Symbol::from_id(id).map(Symbol::label)
}

/// True when bit 4 of `id` is clear.
#[inline]
#[must_use]
pub const fn is_primary(id: u8) -> bool {
    id & SPINE_BIT == 0
}

/// True when bit 4 of `id` is set.
#[inline]
#[must_use]
pub const fn is_secondary(id: u8) -> bool {
    !is_primary(id)
}
