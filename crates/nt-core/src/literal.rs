//! Fixed-length string values usable in constant evaluation.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// An immutable UTF-8 string of exactly `N` bytes.
///
/// Every operation is a `const fn`, so literals can be built, compared,
/// searched and joined while the program is compiled:
///
/// ```
/// use nt_core::{literal, literal_concat, Literal};
///
/// const TRADE: Literal<5> = literal!("Trade");
/// const SUFFIX: Literal<1> = literal!("s");
/// const TRADES: Literal<6> = literal_concat!(TRADE, SUFFIX);
///
/// const _: () = assert!(TRADES.contains(&TRADE));
/// assert_eq!(TRADES.as_str(), "Trades");
/// ```
#[derive(Clone, Copy)]
pub struct Literal<const N: usize> {
    buf: [u8; N],
}

impl<const N: usize> Literal<N> {
    /// Copies `text` into a literal. Fails const evaluation (or panics at run
    /// time) when `text` is not exactly `N` bytes long.
    pub const fn new(text: &str) -> Self {
        let bytes = text.as_bytes();
        assert!(bytes.len() == N, "literal length does not match its type");
        let mut buf = [0u8; N];
        let mut i = 0;
        while i < N {
            buf[i] = bytes[i];
            i += 1;
        }
        Self { buf }
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub const fn as_bytes(&self) -> &[u8; N] {
        &self.buf
    }

    pub const fn byte(&self, index: usize) -> u8 {
        self.buf[index]
    }

    pub const fn as_str(&self) -> &str {
        // only built from whole `str`s, so the buffer is always valid UTF-8
        match std::str::from_utf8(&self.buf) {
            Ok(text) => text,
            Err(_) => panic!("literal holds invalid UTF-8"),
        }
    }

    /// Lexicographic byte order; a proper prefix orders first.
    pub const fn compare<const M: usize>(&self, other: &Literal<M>) -> Ordering {
        let mut i = 0;
        while i < N && i < M {
            if self.buf[i] < other.buf[i] {
                return Ordering::Less;
            }
            if self.buf[i] > other.buf[i] {
                return Ordering::Greater;
            }
            i += 1;
        }
        if N < M {
            Ordering::Less
        } else if N > M {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    pub const fn equals<const M: usize>(&self, other: &Literal<M>) -> bool {
        matches!(self.compare(other), Ordering::Equal)
    }

    /// Whether `needle` occurs as a contiguous run inside `self`.
    pub const fn contains<const M: usize>(&self, needle: &Literal<M>) -> bool {
        find(&self.buf, &needle.buf)
    }

    pub const fn contains_str(&self, needle: &str) -> bool {
        find(&self.buf, needle.as_bytes())
    }

    /// Joins two literals. `R` has to be `N + M`.
    pub const fn concat<const M: usize, const R: usize>(&self, other: &Literal<M>) -> Literal<R> {
        join(&self.buf, &other.buf)
    }

    /// Joins a literal and a string. `R` has to be `N + text.len()`.
    pub const fn concat_str<const R: usize>(&self, text: &str) -> Literal<R> {
        join(&self.buf, text.as_bytes())
    }
}

const fn find(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.len() > haystack.len() {
        return false;
    }
    let mut start = 0;
    while start + needle.len() <= haystack.len() {
        let mut j = 0;
        while j < needle.len() && haystack[start + j] == needle[j] {
            j += 1;
        }
        if j == needle.len() {
            return true;
        }
        start += 1;
    }
    false
}

const fn join<const R: usize>(lhs: &[u8], rhs: &[u8]) -> Literal<R> {
    assert!(
        lhs.len() + rhs.len() == R,
        "concatenated length does not match its type"
    );
    let mut buf = [0u8; R];
    let mut i = 0;
    while i < lhs.len() {
        buf[i] = lhs[i];
        i += 1;
    }
    let mut j = 0;
    while j < rhs.len() {
        buf[i + j] = rhs[j];
        j += 1;
    }
    Literal { buf }
}

impl<const N: usize, const M: usize> PartialEq<Literal<M>> for Literal<N> {
    fn eq(&self, other: &Literal<M>) -> bool {
        self.equals(other)
    }
}

impl<const N: usize> Eq for Literal<N> {}

impl<const N: usize, const M: usize> PartialOrd<Literal<M>> for Literal<N> {
    fn partial_cmp(&self, other: &Literal<M>) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl<const N: usize> Ord for Literal<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl<const N: usize> Hash for Literal<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.buf.hash(state);
    }
}

impl<const N: usize> PartialEq<str> for Literal<N> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<const N: usize> fmt::Display for Literal<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<const N: usize> fmt::Debug for Literal<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Literal({:?})", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const EMPTY: Literal<0> = literal!("");
    const NAME: Literal<4> = literal!("name");
    const PRICE: Literal<5> = literal!("price");

    const _: () = assert!(EMPTY.equals(&literal!("")));
    const _: () = assert!(!EMPTY.equals(&NAME));
    const _: () = assert!(PRICE.contains(&literal!("ric")));
    const _: () = assert!(!PRICE.contains(&NAME));

    #[test]
    fn empty_literal_equals_only_empty() {
        assert!(EMPTY.is_empty());
        assert_eq!(EMPTY, literal!(""));
        assert_ne!(EMPTY, literal!(" "));
        assert_eq!(EMPTY.as_str(), "");
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(literal!("abc") < literal!("abd"));
        assert!(literal!("ab") < literal!("abc"));
        assert!(literal!("b") > literal!("abc"));
        assert_eq!(NAME.cmp(&literal!("name")), Ordering::Equal);
        assert!(EMPTY < NAME);
    }

    #[test]
    fn contains_finds_substrings() {
        assert!(PRICE.contains(&EMPTY));
        assert!(EMPTY.contains(&EMPTY));
        assert!(PRICE.contains_str("price"));
        assert!(PRICE.contains_str("ce"));
        assert!(!PRICE.contains_str("prices"));
        assert!(!EMPTY.contains_str("a"));
    }

    #[test]
    fn concat_sums_lengths() {
        const JOINED: Literal<9> = literal_concat!(NAME, PRICE);
        assert_eq!(JOINED.as_str(), "nameprice");
        assert_eq!(JOINED.len(), NAME.len() + PRICE.len());

        let spaced: Literal<8> = NAME.concat_str(" tag");
        assert_eq!(spaced.as_str(), "name tag");
        let empty: Literal<4> = NAME.concat(&EMPTY);
        assert_eq!(empty, NAME);
    }

    #[test]
    fn compares_with_str() {
        assert!(NAME == *"name");
        assert_eq!(PRICE.to_string(), "price");
        assert_eq!(format!("{PRICE:?}"), "Literal(\"price\")");
    }
}
