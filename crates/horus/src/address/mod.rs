//! Semantic addressing: one byte per (symbol, mode, pole).
//!
//! Every symbol has two modes of three poles each. Packing the symbol id
//! into the top five bits and the mode/pole into the low three gives every
//! meaning a unique byte, so the verb table becomes a plain 256-slot array.
//!
//! # Example
//!
//! ```
//! use horus::address::{decode, encode, Address, Mode, Pole};
//! use horus::Symbol;
//!
//! let raw = encode(Symbol::Sh.id(), 1, 1).unwrap();
//! assert_eq!(decode(raw), (3, 1, 1));
//!
//! let addr = Address::from_raw(raw).unwrap();
//! assert_eq!(addr.components(), (Symbol::Sh, Mode::Secondary, Pole::Minimum));
//! ```

mod axis;
mod codec;

pub use axis::{Mode, Pole};
pub use codec::{decode, encode, Address};
