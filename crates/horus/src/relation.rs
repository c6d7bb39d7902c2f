//! Triangular indexing of unordered wheel-symbol pairs.
//!
//! The 16 wheel symbols form T(16) = 136 unordered pairs when a symbol may
//! pair with itself: 16 self-relations and 120 distinct pairs. A pair
//! `(a, b)` is canonicalised to `a <= b` and indexed as `T(b) + a`:
//!
//! ```text
//!          a=0  a=1  a=2  a=3 ...
//!   b=0     0
//!   b=1     1    2
//!   b=2     3    4    5
//!   b=3     6    7    8    9
//!   ...
//!   b=15  120  121  ...       135
//! ```
//!
//! The inverse is read from a table computed at compile time by integer
//! search, so no floating-point square root is involved.

use crate::constants::{RELATION_COUNT, WHEEL_COUNT};
use crate::error::{Error, Result};
use crate::table::VerbTable;
use crate::Symbol;
use core::fmt;

/// Triangular number T(n) = n(n+1)/2.
///
/// Total over `u8`: T(255) = 32640.
#[inline]
#[must_use]
pub const fn triangular(n: u8) -> u16 {
    let n = n as u16;
    n * (n + 1) / 2
}

/// `RELATION_PAIRS[i]` = canonical `(a, b)` with `T(b) + a == i`.
pub static RELATION_PAIRS: [(u8, u8); RELATION_COUNT] = {
    let mut table = [(0u8, 0u8); RELATION_COUNT];
    let mut i = 0usize;
    let mut b = 0u8;
    while i < RELATION_COUNT {
        // Largest b with T(b) <= i.
        while triangular(b + 1) <= i as u16 {
            b += 1;
        }
        table[i] = ((i as u16 - triangular(b)) as u8, b);
        i += 1;
    }
    table
};

fn check_wheel(id: u8) -> Result<()> {
    if (id as usize) < WHEEL_COUNT {
        Ok(())
    } else {
        Err(Error::out_of_range("wheel symbol id", id, WHEEL_COUNT - 1))
    }
}

/// Index of the unordered pair `{a, b}` of wheel ids.
///
/// Symmetric: `relation_index(a, b) == relation_index(b, a)`.
///
/// # Errors
///
/// [`Error::OutOfRange`] if either id is not in `0..=15`. Spine ids have no
/// relations.
///
/// # Example
///
/// ```
/// use horus::{relation_index, relation_to_pair};
///
/// assert_eq!(relation_index(0, 0).unwrap(), 0);
/// assert_eq!(relation_index(3, 1).unwrap(), 7);
/// assert_eq!(relation_index(15, 15).unwrap(), 135);
/// assert_eq!(relation_to_pair(7).unwrap(), (1, 3));
/// ```
pub fn relation_index(a: u8, b: u8) -> Result<u8> {
    check_wheel(a)?;
    check_wheel(b)?;
    let (a, b) = if a > b { (b, a) } else { (a, b) };
    Ok((triangular(b) + u16::from(a)) as u8)
}

/// Canonical pair `(a, b)` with `a <= b` for a relation index.
///
/// # Errors
///
/// [`Error::OutOfRange`] if `index` is not in `0..=135`.
pub fn relation_to_pair(index: u8) -> Result<(u8, u8)> {
    RELATION_PAIRS
        .get(index as usize)
        .copied()
        .ok_or_else(|| Error::out_of_range("relation index", index, RELATION_COUNT - 1))
}

/// A canonical unordered pair of wheel symbols.
///
/// # Example
///
/// ```
/// use horus::{Relation, Symbol, VerbTable};
///
/// let table = VerbTable::standard();
/// let r = Relation::new(Symbol::T, Symbol::N).unwrap();
/// assert_eq!((r.a(), r.b()), (Symbol::N, Symbol::T));
/// assert_eq!(r.index(), 15);
/// assert_eq!(r.forward(&table), "INTEGRATE→READ");
/// assert_eq!(r.reverse(&table), "READ→INTEGRATE");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Relation {
    a: Symbol,
    b: Symbol,
}

impl Relation {
    /// Canonicalises a pair of wheel symbols.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if either symbol is a spine symbol.
    pub fn new(a: Symbol, b: Symbol) -> Result<Self> {
        let index = relation_index(a.id(), b.id())?;
        Ok(Self::from_index_unchecked(index))
    }

    /// The relation at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `index` is not in `0..=135`.
    pub fn from_index(index: u8) -> Result<Self> {
        relation_to_pair(index)?;
        Ok(Self::from_index_unchecked(index))
    }

    fn from_index_unchecked(index: u8) -> Self {
        let (a, b) = RELATION_PAIRS[index as usize];
        Self {
            a: Symbol::WHEEL[a as usize],
            b: Symbol::WHEEL[b as usize],
        }
    }

    /// Lower symbol of the pair.
    #[inline]
    #[must_use]
    pub const fn a(self) -> Symbol {
        self.a
    }

    /// Upper symbol of the pair.
    #[inline]
    #[must_use]
    pub const fn b(self) -> Symbol {
        self.b
    }

    /// Position in `0..136`.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        (triangular(self.b as u8) + self.a as u16) as u8
    }

    /// True when both sides are the same symbol.
    #[inline]
    #[must_use]
    pub fn is_self(self) -> bool {
        self.a == self.b
    }

    /// `A→B` reading of the core meanings.
    #[must_use]
    pub fn forward(self, table: &VerbTable) -> String {
        format!("{}→{}", table.core_meaning(self.a), table.core_meaning(self.b))
    }

    /// `B→A` reading of the core meanings.
    #[must_use]
    pub fn reverse(self, table: &VerbTable) -> String {
        format!("{}→{}", table.core_meaning(self.b), table.core_meaning(self.a))
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.a, self.b)
    }
}

/// All 136 relations in index order.
pub fn relations() -> impl Iterator<Item = Relation> {
    (0..RELATION_COUNT as u8).map(Relation::from_index_unchecked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Closed-form inverse via the quadratic formula; reference only.
    fn float_inverse(index: u8) -> (u8, u8) {
        let b = ((f64::from(8 * u32::from(index) + 1)).sqrt() - 1.0) / 2.0;
        let b = b.floor() as u8;
        ((u16::from(index) - triangular(b)) as u8, b)
    }

    #[test]
    fn test_triangular() {
        assert_eq!(triangular(0), 0);
        assert_eq!(triangular(1), 1);
        assert_eq!(triangular(15), 120);
        assert_eq!(triangular(16), 136);
        assert_eq!(triangular(u8::MAX), 32_640);
    }

    #[test]
    fn test_bijection_exhaustive() {
        for a in 0..16u8 {
            for b in 0..16u8 {
                let i = relation_index(a, b).unwrap();
                assert_eq!(relation_to_pair(i).unwrap(), (a.min(b), a.max(b)));
            }
        }
        for i in 0..RELATION_COUNT as u8 {
            let (a, b) = relation_to_pair(i).unwrap();
            assert!(a <= b);
            assert_eq!(relation_index(a, b).unwrap(), i);
        }
    }

    #[test]
    fn test_canonical_indices_distinct() {
        let mut seen = HashSet::new();
        for b in 0..16u8 {
            for a in 0..=b {
                assert!(seen.insert(relation_index(a, b).unwrap()));
            }
        }
        assert_eq!(seen.len(), RELATION_COUNT);
        assert_eq!(seen.iter().copied().max(), Some(135));
    }

    #[test]
    fn test_symmetry() {
        for a in 0..16u8 {
            for b in 0..16u8 {
                assert_eq!(relation_index(a, b), relation_index(b, a));
            }
        }
    }

    #[test]
    fn test_self_relation_count() {
        let selfs = RELATION_PAIRS.iter().filter(|(a, b)| a == b).count();
        assert_eq!(selfs, 16);
        assert_eq!(RELATION_COUNT - selfs, 120);
        assert_eq!(relations().filter(|r| r.is_self()).count(), 16);
    }

    #[test]
    fn test_self_relations_sit_on_boundaries() {
        // (b, b) lands on T(b+1) - 1, the last slot before each boundary.
        for b in 0..16u8 {
            assert_eq!(
                u16::from(relation_index(b, b).unwrap()),
                triangular(b + 1) - 1
            );
        }
    }

    #[test]
    fn test_float_reference_agrees() {
        for i in 0..RELATION_COUNT as u8 {
            assert_eq!(float_inverse(i), relation_to_pair(i).unwrap(), "index {i}");
        }
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(
            relation_index(16, 0),
            Err(Error::OutOfRange { value: 16, .. })
        ));
        assert!(relation_index(0, 21).is_err());
        assert!(matches!(
            relation_to_pair(136),
            Err(Error::OutOfRange { value: 136, max: 135, .. })
        ));
        assert!(Relation::new(Symbol::N, Symbol::K).is_err());
        assert!(Relation::from_index(200).is_err());
    }

    #[test]
    fn test_relations_iter() {
        let all: Vec<Relation> = relations().collect();
        assert_eq!(all.len(), RELATION_COUNT);
        for (i, r) in all.iter().enumerate() {
            assert_eq!(r.index() as usize, i);
            assert!(r.a() <= r.b());
            assert!(r.a().is_wheel() && r.b().is_wheel());
        }
    }

    #[test]
    fn test_readings() {
        let table = VerbTable::standard();
        let r = Relation::new(Symbol::M, Symbol::M).unwrap();
        assert!(r.is_self());
        assert_eq!(r.forward(&table), "TRUE→TRUE");
        assert_eq!(r.to_string(), "m-m");
    }
}
