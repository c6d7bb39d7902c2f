//! Rhythm of a symbol line: golden-ratio clause boundaries, the 4:3:2:1
//! yuga split, and the breath phases of a nine-line block.
//!
//! Everything here works on lengths and positions, so it applies to any
//! sequence; [`Sentence::rhythm`](crate::Sentence::rhythm) applies it to a
//! sentence's symbols.
//!
//! ```
//! use horus_corpus::rhythm::{phi_boundaries, segment_by_phi, DEFAULT_MAX_SEGMENTS};
//!
//! assert_eq!(phi_boundaries(23), [14, 19, 21]);
//! let items: Vec<u32> = (0..23).collect();
//! let sizes: Vec<usize> = segment_by_phi(&items, DEFAULT_MAX_SEGMENTS)
//!     .iter()
//!     .map(|s| s.len())
//!     .collect();
//! assert_eq!(sizes, [14, 5, 2, 2]);
//! ```

use std::fmt;
use std::ops::{Range, RangeInclusive};

/// The golden ratio.
pub const PHI: f64 = 1.618_033_988_749_895;

/// `1 / PHI`, equal to `PHI - 1`.
pub const PHI_INV: f64 = 0.618_033_988_749_895;

/// Leading Fibonacci numbers, indexed from 0 with `F(0) = F(1) = 1`.
pub const FIBONACCI: [u64; 12] = [1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144];

/// Segment cap used by [`LineRhythm::analyze`].
pub const DEFAULT_MAX_SEGMENTS: usize = 5;

/// Lines in a full breath block.
pub const BREATH_BLOCK_LINES: usize = 9;

/// The `n`th Fibonacci number, with `F(0) = F(1) = 1`.
///
/// `None` once the value no longer fits in a `u64` (from `n = 93`).
#[must_use]
pub fn fibonacci(n: usize) -> Option<u64> {
    if let Some(&f) = FIBONACCI.get(n) {
        return Some(f);
    }
    let (mut a, mut b) = (FIBONACCI[10], FIBONACCI[11]);
    for _ in FIBONACCI.len()..=n {
        (a, b) = (b, a.checked_add(b)?);
    }
    Some(b)
}

/// Clause boundaries of a line of `len` items.
///
/// The remaining tail is cut at `floor(remaining / PHI)` repeatedly until
/// two or fewer items remain. Boundaries are exclusive end positions,
/// strictly increasing and strictly inside `0..len`. Lines of 0 or 1
/// items have none.
#[must_use]
pub fn phi_boundaries(len: usize) -> Vec<usize> {
    let mut boundaries = Vec::new();
    let mut remaining = len;
    let mut position = 0;
    while remaining > 2 {
        let segment = (remaining as f64 * PHI_INV) as usize;
        if segment == 0 {
            break;
        }
        position += segment;
        boundaries.push(position);
        remaining -= segment;
    }
    boundaries
}

/// True if `position` lies within `tolerance` of a boundary of a line of
/// `total` items.
#[must_use]
pub fn is_at_phi_boundary(position: usize, total: usize, tolerance: usize) -> bool {
    phi_boundaries(total)
        .into_iter()
        .any(|b| b.abs_diff(position) <= tolerance)
}

/// Splits `items` at its first `max_segments - 1` phi boundaries.
///
/// The segments are non-empty and concatenate back to `items`. An empty
/// input gives no segments; a cap of 0 behaves as 1.
#[must_use]
pub fn segment_by_phi<T>(items: &[T], max_segments: usize) -> Vec<&[T]> {
    if items.is_empty() {
        return Vec::new();
    }
    let mut segments = Vec::new();
    let mut start = 0;
    for end in phi_boundaries(items.len())
        .into_iter()
        .take(max_segments.saturating_sub(1))
    {
        segments.push(&items[start..end]);
        start = end;
    }
    segments.push(&items[start..]);
    segments
}

// ============================================================================
// Yugas
// ============================================================================

/// The four ages, split 4:3:2:1.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum Yuga {
    /// First four tenths.
    Satya = 0,
    /// Next three tenths.
    Treta = 1,
    /// Next two tenths.
    Dvapara = 2,
    /// Last tenth.
    Kali = 3,
}

impl Yuga {
    /// All yugas in order.
    pub const ALL: [Self; 4] = [Self::Satya, Self::Treta, Self::Dvapara, Self::Kali];

    /// Tenths of the line covered once this yuga ends.
    const fn end_tenths(self) -> usize {
        match self {
            Self::Satya => 4,
            Self::Treta => 7,
            Self::Dvapara => 9,
            Self::Kali => 10,
        }
    }

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Satya => "satya",
            Self::Treta => "treta",
            Self::Dvapara => "dvapara",
            Self::Kali => "kali",
        }
    }
}

impl fmt::Display for Yuga {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Position ranges of the four yugas over a line of `len` items.
///
/// Ends are `floor(len * k / 10)` for `k = 4, 7, 9`, and the last range
/// ends at `len`, so the ranges are contiguous and cover the line.
#[must_use]
pub fn yuga_spans(len: usize) -> [(Yuga, Range<usize>); 4] {
    let mut start = 0;
    Yuga::ALL.map(|yuga| {
        let end = len * yuga.end_tenths() / 10;
        let span = start..end;
        start = end;
        (yuga, span)
    })
}

// ============================================================================
// Breath
// ============================================================================

/// Phase of a line within a breath block.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BreathPhase {
    /// Opening line.
    Seed,
    /// Expansion.
    Exhale,
    /// Turning point.
    Pivot,
    /// Contraction.
    Inhale,
    /// Closing line.
    Return,
}

impl BreathPhase {
    /// All phases in order.
    pub const ALL: [Self; 5] = [
        Self::Seed,
        Self::Exhale,
        Self::Pivot,
        Self::Inhale,
        Self::Return,
    ];

    /// 1-based lines of this phase in a nine-line block (1+2+3+2+1).
    #[must_use]
    pub const fn lines(self) -> RangeInclusive<usize> {
        match self {
            Self::Seed => 1..=1,
            Self::Exhale => 2..=3,
            Self::Pivot => 4..=6,
            Self::Inhale => 7..=8,
            Self::Return => 9..=9,
        }
    }

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Seed => "seed",
            Self::Exhale => "exhale",
            Self::Pivot => "pivot",
            Self::Inhale => "inhale",
            Self::Return => "return",
        }
    }
}

impl fmt::Display for BreathPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Phase of the 1-based `line` in a block of `total` lines.
///
/// Nine-line blocks follow [`BreathPhase::lines`]. Other sizes pivot on
/// the single line `total / 2 + 1`, with one seed and one return line.
/// `None` for line 0 or a line past the block.
#[must_use]
pub fn breath_phase(line: usize, total: usize) -> Option<BreathPhase> {
    if line == 0 || line > total {
        return None;
    }
    if total == BREATH_BLOCK_LINES {
        return BreathPhase::ALL
            .into_iter()
            .find(|p| p.lines().contains(&line));
    }
    let pivot = total / 2 + 1;
    let phase = if line == 1 {
        BreathPhase::Seed
    } else if line < pivot {
        BreathPhase::Exhale
    } else if line == pivot {
        BreathPhase::Pivot
    } else if line < total {
        BreathPhase::Inhale
    } else {
        BreathPhase::Return
    };
    Some(phase)
}

// ============================================================================
// Script health
// ============================================================================

/// Scripts a word is attested in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct Attestation {
    /// Found in hieroglyphic texts.
    pub hieroglyphic: bool,
    /// Found in hieratic texts.
    pub hieratic: bool,
    /// Found in Coptic texts.
    pub coptic: bool,
}

/// How far a word can be traced back towards its pictographic source.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(u8)]
pub enum ScriptHealth {
    /// No attestation.
    Unknown = 0,
    /// Coptic only.
    CopticOnly = 1,
    /// Hieratic, the cursive chain.
    HieraticAttested = 2,
    /// Hieroglyphic, the full chain.
    HieroglyphAttested = 3,
}

impl ScriptHealth {
    /// Scores an attestation by its oldest script.
    #[must_use]
    pub const fn score(attestation: Attestation) -> Self {
        if attestation.hieroglyphic {
            Self::HieroglyphAttested
        } else if attestation.hieratic {
            Self::HieraticAttested
        } else if attestation.coptic {
            Self::CopticOnly
        } else {
            Self::Unknown
        }
    }

    /// Numeric score 0..=3.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

// ============================================================================
// Line analysis
// ============================================================================

/// Phi and yuga structure of one line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineRhythm<'a, T> {
    /// Phi boundaries of the whole line.
    pub phi_boundaries: Vec<usize>,
    /// Yuga ranges.
    pub yugas: [(Yuga, Range<usize>); 4],
    /// Phi segments, capped at [`DEFAULT_MAX_SEGMENTS`].
    pub segments: Vec<&'a [T]>,
}

impl<'a, T> LineRhythm<'a, T> {
    /// Analyses `items`.
    #[must_use]
    pub fn analyze(items: &'a [T]) -> Self {
        Self {
            phi_boundaries: phi_boundaries(items.len()),
            yugas: yuga_spans(items.len()),
            segments: segment_by_phi(items, DEFAULT_MAX_SEGMENTS),
        }
    }

    /// Items in the line.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.iter().map(|s| s.len()).sum()
    }

    /// True for an empty line.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Length of each segment.
    #[must_use]
    pub fn segment_sizes(&self) -> Vec<usize> {
        self.segments.iter().map(|s| s.len()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_golden_ratio() {
        assert!((PHI * PHI_INV - 1.0).abs() < 1e-12);
        assert!((PHI - (1.0 + PHI_INV)).abs() < 1e-12);
        assert!((PHI - (1.0 + 5f64.sqrt()) / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_fibonacci() {
        assert_eq!(&FIBONACCI[..7], [1, 1, 2, 3, 5, 8, 13]);
        let first: Vec<u64> = (0..6).filter_map(fibonacci).collect();
        assert_eq!(first, [1, 1, 2, 3, 5, 8]);
        assert_eq!(fibonacci(10), Some(89));
        assert_eq!(fibonacci(11), Some(144));
        assert_eq!(fibonacci(12), Some(233));
        for n in 2..60 {
            assert_eq!(fibonacci(n), Some(fibonacci(n - 1).unwrap() + fibonacci(n - 2).unwrap()));
        }
        assert_eq!(fibonacci(92), Some(12_200_160_415_121_876_738));
        assert_eq!(fibonacci(93), None);
    }

    #[test]
    fn test_phi_boundaries_short() {
        assert!(phi_boundaries(0).is_empty());
        assert!(phi_boundaries(1).is_empty());
        assert!(phi_boundaries(2).is_empty());
        assert_eq!(phi_boundaries(3), [1]);
    }

    #[test]
    fn test_phi_boundaries_line() {
        let bounds = phi_boundaries(23);
        assert_eq!(bounds, [14, 19, 21]);
        // 23 / PHI ≈ 14.2
        assert!(bounds.iter().any(|&b| b.abs_diff(14) <= 2));
    }

    #[test]
    fn test_phi_boundaries_ordered_and_inside() {
        for len in 0..200 {
            let bounds = phi_boundaries(len);
            assert!(bounds.windows(2).all(|w| w[0] < w[1]), "len {len}");
            assert!(bounds.iter().all(|&b| 0 < b && b < len), "len {len}");
        }
    }

    #[test]
    fn test_at_boundary() {
        for b in phi_boundaries(23) {
            assert!(is_at_phi_boundary(b, 23, 0));
        }
        assert!(!is_at_phi_boundary(1, 23, 0));
        assert!(is_at_phi_boundary(15, 23, 1));
        assert!(!is_at_phi_boundary(17, 23, 0));
        assert!(!is_at_phi_boundary(0, 0, 5));
    }

    #[test]
    fn test_yuga_ratios() {
        let spans = yuga_spans(100);
        let sizes: Vec<usize> = spans.iter().map(|(_, r)| r.len()).collect();
        assert_eq!(sizes, [40, 30, 20, 10]);
        let names: Vec<&str> = spans.iter().map(|(y, _)| y.name()).collect();
        assert_eq!(names, ["satya", "treta", "dvapara", "kali"]);
    }

    #[test]
    fn test_yugas_cover_line() {
        for len in 0..60 {
            let spans = yuga_spans(len);
            assert_eq!(spans[0].1.start, 0);
            assert_eq!(spans[3].1.end, len);
            for w in spans.windows(2) {
                assert_eq!(w[0].1.end, w[1].1.start, "len {len}");
            }
        }
        let spans = yuga_spans(23);
        assert_eq!(spans[0].1, 0..9);
        assert_eq!(spans[3].1, 20..23);
    }

    #[test]
    fn test_nine_line_breath() {
        use BreathPhase::*;
        let phases: Vec<BreathPhase> = (1..=9).filter_map(|l| breath_phase(l, 9)).collect();
        assert_eq!(
            phases,
            [Seed, Exhale, Exhale, Pivot, Pivot, Pivot, Inhale, Inhale, Return]
        );
        let counts: Vec<usize> = BreathPhase::ALL.iter().map(|p| p.lines().count()).collect();
        assert_eq!(counts, [1, 2, 3, 2, 1]);
        assert_eq!(counts.iter().sum::<usize>(), BREATH_BLOCK_LINES);
    }

    #[test]
    fn test_other_block_sizes() {
        use BreathPhase::*;
        let seven: Vec<BreathPhase> = (1..=7).filter_map(|l| breath_phase(l, 7)).collect();
        assert_eq!(seven, [Seed, Exhale, Exhale, Pivot, Inhale, Inhale, Return]);
        assert_eq!(breath_phase(1, 1), Some(Seed));
        assert_eq!(breath_phase(0, 9), None);
        assert_eq!(breath_phase(10, 9), None);
    }

    #[test]
    fn test_breath_names() {
        let names: Vec<String> = BreathPhase::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["seed", "exhale", "pivot", "inhale", "return"]);
    }

    #[test]
    fn test_script_health() {
        let score = |hieroglyphic, hieratic, coptic| {
            ScriptHealth::score(Attestation {
                hieroglyphic,
                hieratic,
                coptic,
            })
        };
        assert_eq!(score(true, false, false), ScriptHealth::HieroglyphAttested);
        assert_eq!(score(false, true, false).value(), 2);
        assert_eq!(score(false, false, true), ScriptHealth::CopticOnly);
        assert_eq!(ScriptHealth::score(Attestation::default()).value(), 0);
        assert_eq!(score(true, true, true), ScriptHealth::HieroglyphAttested);
        assert!(ScriptHealth::HieroglyphAttested > ScriptHealth::HieraticAttested);
        assert!(ScriptHealth::HieraticAttested > ScriptHealth::CopticOnly);
        assert!(ScriptHealth::CopticOnly > ScriptHealth::Unknown);
    }

    #[test]
    fn test_segments() {
        assert!(segment_by_phi::<u8>(&[], 5).is_empty());

        let items: Vec<usize> = (0..23).collect();
        let segments = segment_by_phi(&items, DEFAULT_MAX_SEGMENTS);
        assert!(segments.iter().all(|s| !s.is_empty()));
        assert_eq!(segments.concat(), items);

        let items: Vec<usize> = (0..50).collect();
        assert!(segment_by_phi(&items, 3).len() <= 3);
        assert_eq!(segment_by_phi(&items, 1), [items.as_slice()]);
        assert_eq!(segment_by_phi(&items, 0), [items.as_slice()]);
    }

    #[test]
    fn test_line_analysis() {
        let line = [
            's', 'a', 'r', 'w', 'n', 'a', 's', 'm', 'n', 'a', 'r', 't', 'h', 'r', 'w', 'a', 'a',
            'b', 'n', 's', 'a', 'r', 'r',
        ];
        let rhythm = LineRhythm::analyze(&line);
        assert_eq!(rhythm.len(), 23);
        assert_eq!(rhythm.phi_boundaries, [14, 19, 21]);
        assert_eq!(rhythm.yugas[0], (Yuga::Satya, 0..9));
        assert_eq!(rhythm.segment_sizes().iter().sum::<usize>(), 23);

        let empty = LineRhythm::<char>::analyze(&[]);
        assert!(empty.is_empty());
        assert!(empty.phi_boundaries.is_empty());
        assert_eq!(empty.yugas[3], (Yuga::Kali, 0..0));
    }
}
