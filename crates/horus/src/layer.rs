//! Layered decoding of symbol sequences.
//!
//! A layer fixes a (mode, pole) pair. Decoding walks the sequence and
//! alternates the layer's pole with equilibrium:
//!
//! ```text
//! position:  0     1     2     3     4   ...
//! pole:      P     eq    P     eq    P   ...
//! ```
//!
//! so index 0 (not index 1) carries the layer's distinctive meaning. The
//! [`Layer::Core`] layer reads primary-mode equilibrium at every position.
//!
//! | Layer | Mode | Pole at even positions |
//! |-------|------|------------------------|
//! | Core | primary | equilibrium (all positions) |
//! | F1 | secondary | minimum |
//! | F2 | secondary | maximum |
//! | M1 | primary | minimum |
//! | M2 | primary | maximum |

use crate::address::{encode, Address, Mode, Pole};
use crate::error::{Error, Result};
use crate::table::VerbTable;
use crate::Symbol;
use core::fmt;
use core::str::FromStr;

/// One of the five decode layers.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum Layer {
    /// Primary-mode equilibrium everywhere.
    Core = 0,
    /// Secondary-mode minima.
    F1 = 1,
    /// Secondary-mode maxima.
    F2 = 2,
    /// Primary-mode minima.
    M1 = 3,
    /// Primary-mode maxima.
    M2 = 4,
}

impl Layer {
    /// All layers in decode order.
    pub const ALL: [Self; 5] = [Self::Core, Self::F1, Self::F2, Self::M1, Self::M2];

    /// The layer's fixed mode.
    #[inline]
    #[must_use]
    pub const fn mode(self) -> Mode {
        match self {
            Self::Core | Self::M1 | Self::M2 => Mode::Primary,
            Self::F1 | Self::F2 => Mode::Secondary,
        }
    }

    /// The layer's distinctive pole.
    #[inline]
    #[must_use]
    pub const fn pole(self) -> Pole {
        match self {
            Self::Core => Pole::Equilibrium,
            Self::F1 | Self::M1 => Pole::Minimum,
            Self::F2 | Self::M2 => Pole::Maximum,
        }
    }

    /// Pole used at `position` of a sequence.
    #[inline]
    #[must_use]
    pub const fn pole_at(self, position: usize) -> Pole {
        match self {
            Self::Core => Pole::Equilibrium,
            _ if position & 1 == 0 => self.pole(),
            _ => Pole::Equilibrium,
        }
    }

    /// Lowercase name: `core`, `f1`, `f2`, `m1`, `m2`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::F1 => "f1",
            Self::F2 => "f2",
            Self::M1 => "m1",
            Self::M2 => "m2",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Layer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|l| l.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownName {
                kind: "layer",
                name: s.to_owned(),
            })
    }
}

/// Decodes a sequence of raw symbol ids through one layer.
///
/// Either every position resolves or the first failure is returned; no
/// partial output is produced. An empty input yields an empty output.
///
/// # Errors
///
/// [`Error::OutOfRange`] for an id above 21, or
/// [`Error::UnpopulatedAddress`] if the table has no meaning for a slot.
///
/// # Example
///
/// ```
/// use horus::{decode_layer, Layer, VerbTable};
///
/// let table = VerbTable::standard();
/// let f1 = decode_layer(&table, &[0, 0, 0, 0], Layer::F1).unwrap();
/// assert_eq!(f1, ["UNRAVEL", "WEAVE", "UNRAVEL", "WEAVE"]);
/// ```
pub fn decode_layer<'t>(table: &'t VerbTable, ids: &[u8], layer: Layer) -> Result<Vec<&'t str>> {
    let mode = layer.mode().bits();
    ids.iter()
        .enumerate()
        .map(|(i, &id)| {
            Symbol::from_id(id)?;
            table.lookup(encode(id, mode, layer.pole_at(i).bits())?)
        })
        .collect()
}

/// Decodes typed symbols through one layer. Infallible, since every
/// (symbol, mode, pole) address is populated.
#[must_use]
pub fn decode_symbols<'t>(table: &'t VerbTable, symbols: &[Symbol], layer: Layer) -> Vec<&'t str> {
    let mode = layer.mode();
    symbols
        .iter()
        .enumerate()
        .map(|(i, &s)| table.meaning(Address::new(s, mode, layer.pole_at(i))))
        .collect()
}

/// Decodes raw symbol ids at one explicit (mode, pole) for every position,
/// with no alternation.
///
/// # Errors
///
/// As [`decode_layer`].
///
/// # Example
///
/// ```
/// use horus::{decode_with, Mode, Pole, VerbTable};
///
/// let table = VerbTable::standard();
/// let verbs = decode_with(&table, &[0, 1, 2], Mode::Secondary, Pole::Equilibrium).unwrap();
/// assert_eq!(verbs, ["WEAVE", "FLOW", "CRYSTALLISE"]);
/// ```
pub fn decode_with<'t>(
    table: &'t VerbTable,
    ids: &[u8],
    mode: Mode,
    pole: Pole,
) -> Result<Vec<&'t str>> {
    ids.iter()
        .map(|&id| {
            Symbol::from_id(id)?;
            table.lookup(encode(id, mode.bits(), pole.bits())?)
        })
        .collect()
}

/// Decodes typed symbols at one explicit (mode, pole).
#[must_use]
pub fn decode_symbols_with<'t>(
    table: &'t VerbTable,
    symbols: &[Symbol],
    mode: Mode,
    pole: Pole,
) -> Vec<&'t str> {
    symbols
        .iter()
        .map(|&s| table.meaning(Address::new(s, mode, pole)))
        .collect()
}

/// The five layer readings of one sequence.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct LayeredDecode<'t> {
    /// [`Layer::Core`] reading.
    pub core: Vec<&'t str>,
    /// [`Layer::F1`] reading.
    pub f1: Vec<&'t str>,
    /// [`Layer::F2`] reading.
    pub f2: Vec<&'t str>,
    /// [`Layer::M1`] reading.
    pub m1: Vec<&'t str>,
    /// [`Layer::M2`] reading.
    pub m2: Vec<&'t str>,
}

impl<'t> LayeredDecode<'t> {
    /// Reading for one layer.
    #[must_use]
    pub fn layer(&self, layer: Layer) -> &[&'t str] {
        match layer {
            Layer::Core => &self.core,
            Layer::F1 => &self.f1,
            Layer::F2 => &self.f2,
            Layer::M1 => &self.m1,
            Layer::M2 => &self.m2,
        }
    }

    /// `(layer, reading)` pairs in decode order.
    pub fn iter(&self) -> impl Iterator<Item = (Layer, &[&'t str])> + '_ {
        Layer::ALL.into_iter().map(move |l| (l, self.layer(l)))
    }
}

/// Decodes a sequence of raw ids through all five layers.
///
/// # Errors
///
/// As [`decode_layer`]; the ids are checked once up front.
pub fn decode_all_layers<'t>(table: &'t VerbTable, ids: &[u8]) -> Result<LayeredDecode<'t>> {
    let symbols = ids
        .iter()
        .map(|&id| Symbol::from_id(id))
        .collect::<Result<Vec<_>>>()?;
    Ok(decode_all_symbols(table, &symbols))
}

/// Decodes typed symbols through all five layers.
#[must_use]
pub fn decode_all_symbols<'t>(table: &'t VerbTable, symbols: &[Symbol]) -> LayeredDecode<'t> {
    LayeredDecode {
        core: decode_symbols(table, symbols, Layer::Core),
        f1: decode_symbols(table, symbols, Layer::F1),
        f2: decode_symbols(table, symbols, Layer::F2),
        m1: decode_symbols(table, symbols, Layer::M1),
        m2: decode_symbols(table, symbols, Layer::M2),
    }
}

/// Maps canonical labels straight to core meanings.
///
/// # Errors
///
/// [`Error::UnknownSymbol`] for the first unrecognised label.
///
/// # Example
///
/// ```
/// use horus::{phonemes_to_verbs, VerbTable};
///
/// let table = VerbTable::standard();
/// let verbs = phonemes_to_verbs(&table, &["n", "t", "r"]).unwrap();
/// assert_eq!(verbs, ["INTEGRATE", "READ", "SHINE"]);
/// ```
pub fn phonemes_to_verbs<'t, S: AsRef<str>>(
    table: &'t VerbTable,
    labels: &[S],
) -> Result<Vec<&'t str>> {
    labels
        .iter()
        .map(|l| Symbol::from_label(l.as_ref()).map(|s| table.core_meaning(s)))
        .collect()
}

/// Joins meanings into a readable trajectory, `A → B → C`.
#[must_use]
pub fn trajectory<S: AsRef<str>>(meanings: &[S]) -> String {
    let parts: Vec<&str> = meanings.iter().map(|m| m.as_ref()).collect();
    parts.join(" → ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::Address;

    fn meaning(table: &VerbTable, s: Symbol, m: Mode, p: Pole) -> &str {
        table.meaning(Address::new(s, m, p))
    }

    #[test]
    fn test_decode_with_fixed_axes() {
        let table = VerbTable::standard();
        let ids = [0, 1, 2, 0];
        assert_eq!(
            decode_with(&table, &ids, Mode::Primary, Pole::Equilibrium).unwrap(),
            decode_layer(&table, &ids, Layer::Core).unwrap()
        );
        assert_eq!(
            decode_with(&table, &ids, Mode::Secondary, Pole::Minimum).unwrap(),
            ["UNRAVEL", "STAGNATE", "EXPOSE", "UNRAVEL"]
        );
        // No alternation: every position keeps the requested pole.
        assert_eq!(
            decode_with(&table, &ids, Mode::Primary, Pole::Maximum).unwrap(),
            ["FUSE", "FLOOD", "BURST", "FUSE"]
        );
        assert!(decode_with(&table, &[], Mode::Secondary, Pole::Maximum)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_decode_with_rejects_unpopulated() {
        let table = VerbTable::standard();
        // Id 22 and above address empty slots; the whole decode fails.
        assert!(matches!(
            decode_with(&table, &[0, 22], Mode::Secondary, Pole::Maximum),
            Err(Error::OutOfRange { value: 22, .. })
        ));
        // Pole bits 3 are never produced by a typed pole.
        assert!(matches!(
            table.lookup(0b0000_0111),
            Err(Error::UnpopulatedAddress(7))
        ));
        for mode in Mode::ALL {
            for pole in Pole::ALL {
                let ids: Vec<u8> = (0..22).collect();
                assert_eq!(decode_with(&table, &ids, mode, pole).unwrap().len(), 22);
            }
        }
    }

    #[test]
    fn test_decode_symbols_with_matches_raw() {
        let table = VerbTable::standard();
        let symbols = [Symbol::R, Symbol::N, Symbol::X];
        let ids: Vec<u8> = symbols.iter().map(|s| s.id()).collect();
        for mode in Mode::ALL {
            for pole in Pole::ALL {
                assert_eq!(
                    decode_symbols_with(&table, &symbols, mode, pole),
                    decode_with(&table, &ids, mode, pole).unwrap()
                );
            }
        }
        let vowel = Mode::from_vowel('i').unwrap();
        assert_eq!(
            decode_symbols_with(&table, &[Symbol::N], vowel, Pole::Maximum),
            ["INTERLOCK"]
        );
    }

    #[test]
    fn test_layer_axes() {
        assert_eq!((Layer::F1.mode(), Layer::F1.pole()), (Mode::Secondary, Pole::Minimum));
        assert_eq!((Layer::F2.mode(), Layer::F2.pole()), (Mode::Secondary, Pole::Maximum));
        assert_eq!((Layer::M1.mode(), Layer::M1.pole()), (Mode::Primary, Pole::Minimum));
        assert_eq!((Layer::M2.mode(), Layer::M2.pole()), (Mode::Primary, Pole::Maximum));
        assert_eq!((Layer::Core.mode(), Layer::Core.pole()), (Mode::Primary, Pole::Equilibrium));
    }

    #[test]
    fn test_f1_alternation() {
        let table = VerbTable::standard();
        let s = Symbol::R;
        let out = decode_layer(&table, &[s.id(); 4], Layer::F1).unwrap();
        let min = meaning(&table, s, Mode::Secondary, Pole::Minimum);
        let eq = meaning(&table, s, Mode::Secondary, Pole::Equilibrium);
        assert_eq!(out, [min, eq, min, eq]);
        assert_eq!(out, ["SHADE", "BASK", "SHADE", "BASK"]);
    }

    #[test]
    fn test_every_layer_alternates_from_index_zero() {
        let table = VerbTable::standard();
        let ids = [Symbol::M.id(); 5];
        for layer in [Layer::F1, Layer::F2, Layer::M1, Layer::M2] {
            let out = decode_layer(&table, &ids, layer).unwrap();
            let pole = meaning(&table, Symbol::M, layer.mode(), layer.pole());
            let eq = meaning(&table, Symbol::M, layer.mode(), Pole::Equilibrium);
            assert_eq!(out, [pole, eq, pole, eq, pole], "layer {layer}");
        }
    }

    #[test]
    fn test_core_ignores_parity() {
        let table = VerbTable::standard();
        let ids: Vec<u8> = (0..22).collect();
        let out = decode_layer(&table, &ids, Layer::Core).unwrap();
        for (i, &id) in ids.iter().enumerate() {
            assert_eq!(out[i], table.core_lookup(id).unwrap());
        }
    }

    #[test]
    fn test_empty_input() {
        let table = VerbTable::standard();
        for layer in Layer::ALL {
            assert!(decode_layer(&table, &[], layer).unwrap().is_empty());
        }
        assert_eq!(decode_all_layers(&table, &[]).unwrap(), LayeredDecode::default());
    }

    #[test]
    fn test_unknown_id_propagates() {
        let table = VerbTable::standard();
        assert!(matches!(
            decode_layer(&table, &[0, 1, 22], Layer::M2),
            Err(Error::OutOfRange { value: 22, .. })
        ));
        assert!(decode_all_layers(&table, &[30]).is_err());
    }

    #[test]
    fn test_all_layers_match_single_layer() {
        let table = VerbTable::standard();
        let ids = [0, 5, 16, 9, 21, 14];
        let all = decode_all_layers(&table, &ids).unwrap();
        for (layer, reading) in all.iter() {
            assert_eq!(reading, decode_layer(&table, &ids, layer).unwrap().as_slice());
        }
    }

    #[test]
    fn test_typed_and_raw_agree() {
        let table = VerbTable::standard();
        let symbols = [Symbol::Aleph, Symbol::Hh, Symbol::Kh];
        let ids: Vec<u8> = symbols.iter().map(|s| s.id()).collect();
        for layer in Layer::ALL {
            assert_eq!(
                decode_symbols(&table, &symbols, layer),
                decode_layer(&table, &ids, layer).unwrap()
            );
        }
    }

    #[test]
    fn test_layer_parse() {
        assert_eq!("core".parse::<Layer>(), Ok(Layer::Core));
        assert_eq!("F2".parse::<Layer>(), Ok(Layer::F2));
        assert_eq!("m1".parse::<Layer>(), Ok(Layer::M1));
        assert!("m3".parse::<Layer>().is_err());
    }

    #[test]
    fn test_phonemes_to_verbs() {
        let table = VerbTable::standard();
        assert_eq!(
            phonemes_to_verbs(&table, &["A", "a", "H", "h"]).unwrap(),
            ["LEAD", "HONOUR", "EXPRESS", "SEE"]
        );
        assert_eq!(
            phonemes_to_verbs(&table, &["n", "zz"]),
            Err(Error::UnknownSymbol("zz".to_owned()))
        );
    }

    #[test]
    fn test_trajectory() {
        assert_eq!(trajectory(&["A", "B", "C"]), "A → B → C");
        assert_eq!(trajectory::<&str>(&[]), "");
    }
}
