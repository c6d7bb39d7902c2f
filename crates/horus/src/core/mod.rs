//! Core data types and constants.
//!
//! - [`symbol::Symbol`]: the 22-symbol vocabulary (16 wheel + 6 spine)
//! - [`constants`]: table sizes and counts, tied together at compile time

pub mod constants;
pub mod symbol;
