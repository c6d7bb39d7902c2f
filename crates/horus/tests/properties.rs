//! Property-based tests for the address codec and the relation indexers.
//!
//! Every law here is also checked exhaustively in the unit tests; the
//! proptest versions exercise the public API from outside the crate and
//! shrink to a minimal counterexample when something breaks.

use horus::{
    decode, encode, grammar_index, grammar_to_components, relation_index, relation_to_pair,
    Address, Mode, Pole, Symbol, VerbTable, SYMBOL_COUNT,
};
use proptest::prelude::*;

fn symbol() -> impl Strategy<Value = Symbol> {
    (0..SYMBOL_COUNT).prop_map(|i| Symbol::ALL[i])
}

// =============================================================================
// Address Codec
// =============================================================================

proptest! {
    /// decode(encode(s, m, p)) = (s, m, p)
    #[test]
    fn prop_encode_decode_roundtrip(id in 0u8..22, mode in 0u8..2, pole in 0u8..3) {
        let address = encode(id, mode, pole).unwrap();
        prop_assert_eq!(decode(address), (id, mode, pole));
    }

    /// encode rejects every out-of-domain component
    #[test]
    fn prop_encode_rejects_bad_components(id in 22u8..=255, mode in 2u8..=255, pole in 3u8..=255) {
        prop_assert!(encode(id, 0, 0).is_err());
        prop_assert!(encode(0, mode, 0).is_err());
        prop_assert!(encode(0, 0, pole).is_err());
    }

    /// decode never fails, and re-encoding succeeds exactly when the pole is legal
    #[test]
    fn prop_decode_total(byte: u8) {
        let (id, mode, pole) = decode(byte);
        prop_assert!(id < 32 && mode < 2 && pole < 4);
        let legal = id < 22 && pole < 3;
        prop_assert_eq!(encode(id, mode, pole).is_ok(), legal);
        prop_assert_eq!(Address::from_raw(byte).is_ok(), legal);
    }

    /// typed and raw constructors agree
    #[test]
    fn prop_typed_matches_raw(s in symbol(), mode in 0u8..2, pole in 0u8..3) {
        let m = Mode::from_bits(mode).unwrap();
        let p = Pole::from_bits(pole).unwrap();
        let typed = Address::new(s, m, p);
        prop_assert_eq!(typed.value(), encode(s.id(), mode, pole).unwrap());
        prop_assert_eq!(typed.components(), (s, m, p));
    }

    /// every legal address resolves to a non-empty meaning
    #[test]
    fn prop_legal_addresses_populated(s in symbol(), mode in 0u8..2, pole in 0u8..3) {
        let table = VerbTable::standard();
        let address = encode(s.id(), mode, pole).unwrap();
        let meaning = table.lookup(address).unwrap();
        prop_assert!(!meaning.is_empty());
    }
}

// =============================================================================
// Relation Index
// =============================================================================

proptest! {
    /// relation_index is symmetric
    #[test]
    fn prop_relation_symmetric(a in 0u8..16, b in 0u8..16) {
        prop_assert_eq!(relation_index(a, b).unwrap(), relation_index(b, a).unwrap());
    }

    /// relation_to_pair(relation_index(a, b)) = (min, max)
    #[test]
    fn prop_relation_roundtrip(a in 0u8..16, b in 0u8..16) {
        let i = relation_index(a, b).unwrap();
        prop_assert!(i < 136);
        prop_assert_eq!(relation_to_pair(i).unwrap(), (a.min(b), a.max(b)));
    }

    /// relation_index(relation_to_pair(i)) = i
    #[test]
    fn prop_relation_inverse_roundtrip(i in 0u8..136) {
        let (a, b) = relation_to_pair(i).unwrap();
        prop_assert!(a <= b && b < 16);
        prop_assert_eq!(relation_index(a, b).unwrap(), i);
    }

    /// spine ids never take part in a relation
    #[test]
    fn prop_relation_rejects_spine(a in 0u8..16, spine in 16u8..=255) {
        prop_assert!(relation_index(a, spine).is_err());
        prop_assert!(relation_index(spine, a).is_err());
    }
}

// =============================================================================
// Grammar Index
// =============================================================================

proptest! {
    /// grammar_to_components(grammar_index(s, r)) = (s, r)
    #[test]
    fn prop_grammar_roundtrip(scale in 0u8..3, relation in 0u8..136) {
        let g = grammar_index(scale, relation).unwrap();
        prop_assert!(g < 408);
        prop_assert_eq!(grammar_to_components(g).unwrap(), (scale, relation));
    }

    /// indices past 407 are rejected
    #[test]
    fn prop_grammar_rejects_overflow(g in 408u16..) {
        prop_assert!(grammar_to_components(g).is_err());
    }
}
