//! Cardinalities of the symbol space.
//!
//! Every count used by the address codec, the verb table and the relation
//! indexer is defined here once and tied to the others by compile-time
//! assertions.

/// Number of wheel (primary) symbols.
pub const WHEEL_COUNT: usize = 16;

/// Number of spine (secondary) symbols.
pub const SPINE_COUNT: usize = 6;

/// Total number of symbols (16 wheel + 6 spine).
pub const SYMBOL_COUNT: usize = WHEEL_COUNT + SPINE_COUNT;

/// Bit 4 of a symbol id. Set for spine symbols, clear for wheel symbols.
pub const SPINE_BIT: u8 = 0b1_0000;

/// Modes per symbol (primary, secondary).
pub const MODE_COUNT: usize = 2;

/// Legal poles per mode (equilibrium, minimum, maximum).
pub const POLE_COUNT: usize = 3;

/// Meanings carried by each lexicon record.
pub const MEANINGS_PER_SYMBOL: usize = MODE_COUNT * POLE_COUNT;

/// Width of the symbol field in an address.
pub const SYMBOL_SHIFT: u32 = 3;

/// Mode bit in an address.
pub const MODE_MASK: u8 = 0b100;

/// Pole bits in an address.
pub const POLE_MASK: u8 = 0b011;

/// Slots in the dense verb table (every 8-bit address).
pub const TABLE_SIZE: usize = 1 << 8;

/// Slots that carry a meaning once the table is built (22 × 6 = 132).
pub const POPULATED_SLOTS: usize = SYMBOL_COUNT * MEANINGS_PER_SYMBOL;

/// Unordered wheel pairs with repetition, T(16) = 136.
pub const RELATION_COUNT: usize = WHEEL_COUNT * (WHEEL_COUNT + 1) / 2;

/// Number of scales (ontogenic, phylogenic, cosmogenic).
pub const SCALE_COUNT: usize = 3;

/// Size of the grammar index space, 3 × 136 = 408.
pub const GRAMMAR_COUNT: usize = SCALE_COUNT * RELATION_COUNT;

const _: () = assert!(SYMBOL_COUNT == 22);
const _: () = assert!(SYMBOL_COUNT <= 1 << (8 - SYMBOL_SHIFT));
const _: () = assert!(POPULATED_SLOTS == 132);
const _: () = assert!(TABLE_SIZE - POPULATED_SLOTS == 124);
const _: () = assert!(RELATION_COUNT == 136);
const _: () = assert!(RELATION_COUNT <= u8::MAX as usize + 1);
const _: () = assert!(GRAMMAR_COUNT == 408);
const _: () = assert!(WHEEL_COUNT == SPINE_BIT as usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spine_bit_splits_ids() {
        for id in 0..SYMBOL_COUNT as u8 {
            let spine = id & SPINE_BIT != 0;
            assert_eq!(spine, id as usize >= WHEEL_COUNT, "id {id}");
        }
    }

    #[test]
    fn test_masks_are_disjoint() {
        assert_eq!(MODE_MASK & POLE_MASK, 0);
        assert_eq!((MODE_MASK | POLE_MASK) as u32, (1 << SYMBOL_SHIFT) - 1);
    }
}
