//! 8-bit semantic address.

use super::{Mode, Pole};
use crate::constants::{MODE_MASK, POLE_MASK, SYMBOL_COUNT, SYMBOL_SHIFT};
use crate::error::{Error, Result};
use crate::Symbol;
use core::fmt;

/// A validated (symbol, mode, pole) triple packed into one byte.
///
/// ```text
///  7   6   5   4   3 │  2  │ 1   0
/// ┌───────────────────┬─────┬───────┐
/// │     symbol id     │mode │ pole  │
/// └───────────────────┴─────┴───────┘
/// ```
///
/// Symbol ids 22..=31 and pole value 3 never appear in an `Address`.
///
/// # Example
///
/// ```
/// use horus::{Address, Mode, Pole, Symbol};
///
/// let addr = Address::new(Symbol::W, Mode::Secondary, Pole::Minimum);
/// assert_eq!(addr.value(), 0b00001_1_01);
/// assert_eq!(addr.components(), (Symbol::W, Mode::Secondary, Pole::Minimum));
/// assert_eq!(addr.to_string(), "w/F/min");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[repr(transparent)]
pub struct Address(u8);

impl Address {
    /// Packs a triple. Total, since every argument is already in range.
    #[inline]
    #[must_use]
    pub const fn new(symbol: Symbol, mode: Mode, pole: Pole) -> Self {
        Self(((symbol as u8) << SYMBOL_SHIFT) | ((mode as u8) << 2) | pole as u8)
    }

    /// Accepts a raw byte only if it decodes to a legal triple.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] for symbol ids above 21,
    /// [`Error::InvalidAddressComponent`] for pole value 3.
    pub fn from_raw(value: u8) -> Result<Self> {
        let (symbol_id, mode, pole) = decode(value);
        let symbol = Symbol::from_id(symbol_id)?;
        Ok(Self::new(
            symbol,
            Mode::from_bits(mode)?,
            Pole::from_bits(pole)?,
        ))
    }

    /// The packed byte.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Bits `[7:3]`.
    #[inline]
    #[must_use]
    pub const fn symbol_id(self) -> u8 {
        self.0 >> SYMBOL_SHIFT
    }

    /// Bit `[2]`.
    #[inline]
    #[must_use]
    pub const fn mode_bit(self) -> u8 {
        (self.0 & MODE_MASK) >> 2
    }

    /// Bits `[1:0]`.
    #[inline]
    #[must_use]
    pub const fn pole_bits(self) -> u8 {
        self.0 & POLE_MASK
    }

    /// The symbol half of the address.
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> Symbol {
        Symbol::ALL[self.symbol_id() as usize]
    }

    /// The mode bit as a [`Mode`].
    #[inline]
    #[must_use]
    pub const fn mode(self) -> Mode {
        Mode::ALL[self.mode_bit() as usize]
    }

    /// The pole bits as a [`Pole`].
    #[inline]
    #[must_use]
    pub const fn pole(self) -> Pole {
        Pole::ALL[self.pole_bits() as usize]
    }

    /// Unpacks into typed components.
    #[inline]
    #[must_use]
    pub const fn components(self) -> (Symbol, Mode, Pole) {
        (self.symbol(), self.mode(), self.pole())
    }
}

impl From<Address> for u8 {
    #[inline]
    fn from(a: Address) -> u8 {
        a.0
    }
}

impl TryFrom<u8> for Address {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::from_raw(value)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.symbol(),
            self.mode().tag(),
            self.pole().name()
        )
    }
}

impl fmt::Binary for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

/// Packs raw components into an address byte.
///
/// Inputs are validated rather than masked: a symbol id above 21, a mode
/// above 1 or a pole above 2 is rejected.
///
/// # Errors
///
/// [`Error::InvalidAddressComponent`] naming the first bad component.
///
/// # Example
///
/// ```
/// use horus::{decode, encode};
///
/// let a = encode(21, 1, 2).unwrap();
/// assert_eq!(a, 0b10101_1_10);
/// assert_eq!(decode(a), (21, 1, 2));
/// assert!(encode(22, 0, 0).is_err());
/// assert!(encode(0, 0, 3).is_err());
/// ```
pub fn encode(symbol_id: u8, mode: u8, pole: u8) -> Result<u8> {
    if symbol_id as usize >= SYMBOL_COUNT {
        return Err(Error::InvalidAddressComponent {
            component: "symbol id",
            value: symbol_id,
        });
    }
    let mode = Mode::from_bits(mode)?;
    let pole = Pole::from_bits(pole)?;
    Ok(((symbol_id) << SYMBOL_SHIFT) | (mode.bits() << 2) | pole.bits())
}

/// Splits any byte into `(symbol_id, mode, pole)` bit fields.
///
/// Never fails. A decoded pole of 3 or symbol id above 21 marks a byte that
/// no legal [`encode`] call produces; use [`Address::from_raw`] to reject
/// those.
#[inline]
#[must_use]
pub const fn decode(address: u8) -> (u8, u8, u8) {
    (
        address >> SYMBOL_SHIFT,
        (address & MODE_MASK) >> 2,
        address & POLE_MASK,
    )
}
