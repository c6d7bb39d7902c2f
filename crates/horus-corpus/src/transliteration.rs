//! Leiden Unified Transliteration to symbol sequences.
//!
//! Editorial apparatus is stripped first ([`clean`]), then each remaining
//! character is mapped through the Leiden table ([`char_to_symbol`]).
//! Characters with no mapping, including vowels other than `i`/`u`/`y`,
//! contribute nothing.
//!
//! ```
//! use horus::Symbol;
//! use horus_corpus::transliteration::to_symbols;
//!
//! assert_eq!(to_symbols("ꜥnḫ"), [Symbol::Ayin, Symbol::N, Symbol::Kh]);
//! ```

use std::sync::LazyLock;

use horus::Symbol;
use regex::Regex;

/// Cleanup passes, applied in order.
///
/// 1. parenthesised restorations `(...)`
/// 2. suffix pronouns and clitics `=sn`, `=f`
/// 3. number markers `.PL`, `.DU`, `.SG`
/// 4. punctuation and digits
#[allow(clippy::expect_used)] // literal patterns
static CLEANUP: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        r"\([^)]*\)",
        r"=[a-zꞽꜣꜥ]+",
        r"\.(PL|DU|SG)",
        r"[.:\-+~0-9/!𓍹𓍺]",
    ]
    .map(|p| Regex::new(p).expect("cleanup pattern"))
});

/// Combining diacritics that ride on a base letter already mapped.
const COMBINING: [char; 2] = ['\u{032F}', '\u{0331}'];

/// Strips editorial markup, lowercases and trims.
///
/// ```
/// use horus_corpus::transliteration::clean;
///
/// assert_eq!(clean("ḏd-mdw.PL (j)n=f 1"), "ḏdmdw n");
/// ```
#[must_use]
pub fn clean(text: &str) -> String {
    let mut out = text.to_owned();
    for re in CLEANUP.iter() {
        out = re.replace_all(&out, "").into_owned();
    }
    out.to_lowercase().trim().to_owned()
}

/// Maps one (lowercased) transliteration character to its symbol.
///
/// Returns `None` for characters outside the table, including combining
/// diacritics and whitespace.
#[must_use]
pub const fn char_to_symbol(c: char) -> Option<Symbol> {
    let s = match c {
        'n' => Symbol::N,
        'w' | 'u' => Symbol::W,
        's' | 'z' | 'ś' => Symbol::S,
        'š' => Symbol::Sh,
        // aleph
        'ꜣ' | 'Ꜣ' | 'ʾ' | 'ʼ' | 'ˀ' => Symbol::Aleph,
        't' | 'ṯ' | 'ṭ' => Symbol::T,
        // pharyngeal, distinct from glottal h
        'ḥ' => Symbol::H,
        'r' | 'l' => Symbol::R,
        'm' => Symbol::M,
        // ayin
        'ꜥ' | 'Ꜥ' | 'ʿ' => Symbol::Ayin,
        'y' => Symbol::Y,
        'b' => Symbol::B,
        'p' => Symbol::P,
        // yod
        'ꞽ' | 'i' | 'j' | 'ı' | 'ỉ' => Symbol::I,
        'ḫ' | 'ẖ' | 'x' => Symbol::Kh,
        'ḏ' | 'ḍ' => Symbol::Dj,
        'd' => Symbol::D,
        'k' | 'q' => Symbol::K,
        'g' => Symbol::G,
        'f' => Symbol::F,
        'h' => Symbol::Hh,
        _ => return None,
    };
    Some(s)
}

fn word_symbols(word: &str) -> Vec<Symbol> {
    word.chars()
        .filter(|c| !COMBINING.contains(c))
        .filter_map(char_to_symbol)
        .collect()
}

/// Flat symbol sequence of a transliteration, wheel and spine alike.
#[must_use]
pub fn to_symbols(text: &str) -> Vec<Symbol> {
    word_symbols(&clean(text))
}

/// Per-word symbol sequences. Words that yield no symbols are dropped.
///
/// ```
/// use horus::Symbol;
/// use horus_corpus::transliteration::to_words;
///
/// let words = to_words("ḥtp dj nswt");
/// assert_eq!(words.len(), 3);
/// assert_eq!(words[0].0, "ḥtp");
/// assert_eq!(words[0].1, [Symbol::H, Symbol::T, Symbol::P]);
/// ```
#[must_use]
pub fn to_words(text: &str) -> Vec<(String, Vec<Symbol>)> {
    clean(text)
        .split_whitespace()
        .filter_map(|w| {
            let symbols = word_symbols(w);
            (!symbols.is_empty()).then(|| (w.to_owned(), symbols))
        })
        .collect()
}
