//! Byte character sets.
//!
//! The scanner classifies input one byte at a time. A [`CharSet`] is a
//! 256-entry membership table, so every classification is a single bit test
//! regardless of how many characters the set holds.
//!
//! Sets are written as strings of ASCII or Latin-1 characters, where each
//! character stands for the byte with the same value:
//!
//! ```
//! use lexa_scan::CharSet;
//!
//! let skip: CharSet = " \t\n".parse().unwrap();
//! assert!(skip.contains(b'\t'));
//! assert!(!skip.contains(b'x'));
//! ```

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Characters that cannot be expressed as a single byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("character {0:?} is outside the Latin-1 range and cannot be a set member")]
pub struct NotLatin1(pub char);

/// A set of byte values.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CharSet {
    bits: [u64; 4],
}

impl CharSet {
    /// The empty set.
    pub const EMPTY: CharSet = CharSet { bits: [0; 4] };

    /// Creates an empty set.
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set holding exactly `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut set = Self::new();
        for &b in bytes {
            set.insert(b);
        }
        set
    }

    /// Creates a set holding every byte of `range`.
    pub fn from_range(range: RangeInclusive<u8>) -> Self {
        let mut set = Self::new();
        set.insert_range(range);
        set
    }

    /// `a-z` and `A-Z`.
    pub fn ascii_letters() -> Self {
        Self::from_range(b'a'..=b'z').union(&Self::from_range(b'A'..=b'Z'))
    }

    /// `0-9`.
    pub fn ascii_digits() -> Self {
        Self::from_range(b'0'..=b'9')
    }

    /// Printable ASCII punctuation, `!` through `~` minus letters and digits.
    pub fn ascii_punctuation() -> Self {
        let mut set = Self::new();
        for b in b'!'..=b'~' {
            if b.is_ascii_punctuation() {
                set.insert(b);
            }
        }
        set
    }

    /// Every byte with the high bit set, i.e. the bytes of a non-ASCII UTF-8
    /// sequence.
    pub fn high_bytes() -> Self {
        Self::from_range(0x80..=0xFF)
    }

    /// Returns `true` if `byte` is a member.
    #[inline]
    pub const fn contains(&self, byte: u8) -> bool {
        self.bits[(byte >> 6) as usize] & (1u64 << (byte & 63)) != 0
    }

    /// Adds `byte`.
    #[inline]
    pub fn insert(&mut self, byte: u8) {
        self.bits[(byte >> 6) as usize] |= 1u64 << (byte & 63);
    }

    /// Removes `byte`.
    #[inline]
    pub fn remove(&mut self, byte: u8) {
        self.bits[(byte >> 6) as usize] &= !(1u64 << (byte & 63));
    }

    /// Adds every byte in `range`.
    pub fn insert_range(&mut self, range: RangeInclusive<u8>) {
        for b in range {
            self.insert(b);
        }
    }

    /// Returns the union of two sets.
    pub fn union(&self, other: &CharSet) -> CharSet {
        let mut bits = self.bits;
        for (word, o) in bits.iter_mut().zip(other.bits.iter()) {
            *word |= *o;
        }
        CharSet { bits }
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns `true` if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.bits == [0; 4]
    }

    /// Iterates over the members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0u8..=255).filter(move |&b| self.contains(b))
    }

    /// Renders the set as a Latin-1 string, the inverse of [`FromStr`].
    pub fn to_latin1_string(&self) -> String {
        self.iter().map(char::from).collect()
    }
}

/// Converts a string of Latin-1 characters into the bytes they denote.
pub(crate) fn latin1_bytes(s: &str) -> Result<Vec<u8>, NotLatin1> {
    s.chars()
        .map(|c| u8::try_from(c).map_err(|_| NotLatin1(c)))
        .collect()
}

impl FromStr for CharSet {
    type Err = NotLatin1;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_bytes(&latin1_bytes(s)?))
    }
}

impl fmt::Debug for CharSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CharSet({:?})", self.to_latin1_string())
    }
}

impl Serialize for CharSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_latin1_string())
    }
}

impl<'de> Deserialize<'de> for CharSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
