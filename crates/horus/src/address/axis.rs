//! Mode and pole, the two axes inside a symbol's meaning set.

use crate::constants::{MODE_COUNT, POLE_COUNT};
use crate::error::{Error, Result};
use core::fmt;
use core::str::FromStr;

/// Which of the two meaning tracks of a symbol is selected.
///
/// Historically the masculine (`Primary`) and feminine (`Secondary`)
/// readings.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
#[repr(u8)]
pub enum Mode {
    /// Bit value 0, the masculine track.
    #[default]
    Primary = 0,
    /// Bit value 1, the feminine track.
    Secondary = 1,
}

/// Position within one mode's triangle of meanings.
///
/// ```text
///        Maximum
///           △
///          / \
///     Equilibrium
///          \ /
///           ▽
///        Minimum
/// ```
///
/// Bit value 3 is never a legal pole.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
#[repr(u8)]
pub enum Pole {
    /// Bit value 0, the neutral core meaning.
    #[default]
    Equilibrium = 0,
    /// Bit value 1.
    Minimum = 1,
    /// Bit value 2.
    Maximum = 2,
}

impl Mode {
    /// Both modes in bit order.
    pub const ALL: [Self; MODE_COUNT] = [Self::Primary, Self::Secondary];

    /// Parses the mode bit.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidAddressComponent`] unless `bits` is 0 or 1.
    pub fn from_bits(bits: u8) -> Result<Self> {
        match bits {
            0 => Ok(Self::Primary),
            1 => Ok(Self::Secondary),
            _ => Err(Error::InvalidAddressComponent {
                component: "mode",
                value: bits,
            }),
        }
    }

    /// The mode bit.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Mode marked by a vowel sound: `a`, `o`, `u` mark the primary
    /// track and `e`, `i`, `y` the secondary one. Case is ignored; any
    /// other character marks nothing.
    ///
    /// ```
    /// use horus::Mode;
    ///
    /// assert_eq!(Mode::from_vowel('o'), Some(Mode::Primary));
    /// assert_eq!(Mode::from_vowel('E'), Some(Mode::Secondary));
    /// assert_eq!(Mode::from_vowel('n'), None);
    /// ```
    #[must_use]
    pub const fn from_vowel(vowel: char) -> Option<Self> {
        match vowel.to_ascii_lowercase() {
            'a' | 'o' | 'u' => Some(Self::Primary),
            'e' | 'i' | 'y' => Some(Self::Secondary),
            _ => None,
        }
    }

    /// One-letter tag used in layer names (`M` or `F`).
    #[inline]
    #[must_use]
    pub const fn tag(self) -> char {
        match self {
            Self::Primary => 'M',
            Self::Secondary => 'F',
        }
    }
}

impl Pole {
    /// The three legal poles in bit order.
    pub const ALL: [Self; POLE_COUNT] = [Self::Equilibrium, Self::Minimum, Self::Maximum];

    /// Parses the pole bits.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidAddressComponent`] unless `bits` is 0, 1 or 2.
    pub fn from_bits(bits: u8) -> Result<Self> {
        match bits {
            0 => Ok(Self::Equilibrium),
            1 => Ok(Self::Minimum),
            2 => Ok(Self::Maximum),
            _ => Err(Error::InvalidAddressComponent {
                component: "pole",
                value: bits,
            }),
        }
    }

    /// The pole bits.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Short name: `eq`, `min` or `max`.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Equilibrium => "eq",
            Self::Minimum => "min",
            Self::Maximum => "max",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => f.pad("primary"),
            Self::Secondary => f.pad("secondary"),
        }
    }
}

impl fmt::Display for Pole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Accepts `primary`/`secondary`, the tags `M`/`F`, or the bit `0`/`1`.
impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "primary" | "m" | "0" => Ok(Self::Primary),
            "secondary" | "f" | "1" => Ok(Self::Secondary),
            _ => Err(Error::UnknownName {
                kind: "mode",
                name: s.to_owned(),
            }),
        }
    }
}

/// Accepts the short names, the full names, or the bits `0`..`2`.
impl FromStr for Pole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "eq" | "equilibrium" | "0" => Ok(Self::Equilibrium),
            "min" | "minimum" | "1" => Ok(Self::Minimum),
            "max" | "maximum" | "2" => Ok(Self::Maximum),
            _ => Err(Error::UnknownName {
                kind: "pole",
                name: s.to_owned(),
            }),
        }
    }
}
