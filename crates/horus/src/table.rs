//! Dense verb lookup tables.
//!
//! Two tables are derived from a [`Lexicon`] in one construction step:
//!
//! - **Address table (256)**: `slots[address]` holds the meaning of that
//!   (symbol, mode, pole). 132 slots are populated, the other 124 hold the
//!   empty-string sentinel.
//! - **Core table (22)**: `core[symbol_id]` holds the primary-mode
//!   equilibrium meaning, skipping the encode step.
//!
//! The tables are immutable once built and can be shared across threads
//! by reference.
//!
//! # Example
//!
//! ```
//! use horus::{encode, VerbTable};
//!
//! let table = VerbTable::standard();
//! assert_eq!(table.populated(), 132);
//! assert_eq!(table.lookup(encode(0, 1, 1).unwrap()).unwrap(), "UNRAVEL");
//! assert_eq!(table.core_lookup(7).unwrap(), "SHINE");
//! assert!(table.lookup(0b0000_0011).is_err());
//! ```

use crate::address::{Address, Mode, Pole};
use crate::constants::{SYMBOL_COUNT, TABLE_SIZE};
use crate::error::{Error, Result};
use crate::lexicon::Lexicon;
use crate::Symbol;

/// Address-indexed meaning table plus the reduced core table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerbTable {
    slots: Box<[String]>,
    core: Box<[String]>,
}

impl VerbTable {
    /// Derives both tables from a lexicon.
    #[must_use]
    pub fn build(lexicon: &Lexicon) -> Self {
        let mut slots = vec![String::new(); TABLE_SIZE];
        let mut core = Vec::with_capacity(SYMBOL_COUNT);

        for record in lexicon {
            for mode in Mode::ALL {
                for pole in Pole::ALL {
                    let addr = Address::new(record.symbol, mode, pole);
                    slots[addr.value() as usize] = record.meaning(mode, pole).to_owned();
                }
            }
            core.push(record.core().to_owned());
        }

        let table = Self {
            slots: slots.into_boxed_slice(),
            core: core.into_boxed_slice(),
        };
        tracing::debug!(populated = table.populated(), "verb table built");
        table
    }

    /// Table built from [`Lexicon::standard`].
    #[must_use]
    pub fn standard() -> Self {
        Self::build(&Lexicon::standard())
    }

    /// Meaning stored at a raw address byte.
    ///
    /// # Errors
    ///
    /// [`Error::UnpopulatedAddress`] if the slot holds the empty sentinel.
    pub fn lookup(&self, address: u8) -> Result<&str> {
        let meaning = &self.slots[address as usize];
        if meaning.is_empty() {
            Err(Error::UnpopulatedAddress(address))
        } else {
            Ok(meaning.as_str())
        }
    }

    /// Meaning stored at a validated address.
    ///
    /// Every legal address is populated by construction, so this cannot fail.
    #[must_use]
    pub fn meaning(&self, address: Address) -> &str {
        &self.slots[address.value() as usize]
    }

    /// Primary-mode equilibrium meaning of a symbol id.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `symbol_id` is not in `0..=21`.
    pub fn core_lookup(&self, symbol_id: u8) -> Result<&str> {
        self.core
            .get(symbol_id as usize)
            .map(String::as_str)
            .ok_or_else(|| Error::out_of_range("symbol id", symbol_id, SYMBOL_COUNT - 1))
    }

    /// Primary-mode equilibrium meaning of a symbol.
    #[must_use]
    pub fn core_meaning(&self, symbol: Symbol) -> &str {
        &self.core[symbol.id() as usize]
    }

    /// Number of non-empty address slots.
    #[must_use]
    pub fn populated(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_empty()).count()
    }

    /// Populated slots as `(address, meaning)` in address order.
    pub fn entries(&self) -> impl Iterator<Item = (u8, &str)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.is_empty())
            .map(|(i, s)| (i as u8, s.as_str()))
    }
}

impl Default for VerbTable {
    fn default() -> Self {
        Self::standard()
    }
}
