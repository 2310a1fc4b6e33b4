//! Dense ordinals for the characters of a string.
//!
//! Alphanumeric code points are not contiguous: `'Z' as u32 + 1` is `'['`,
//! not `'a'`. Picking characters from a table with `code % len` therefore
//! leaves whole ranges of the table unreachable. `FakeOrd` closes those gaps
//! by numbering the distinct characters of a string consecutively, starting
//! from the code point of the smallest one.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::Index;

use crate::error::{DispassError, Result};

/// Consecutive ordinals for the distinct characters of one string.
///
/// Build a new mapping for every string you remap; a mapping only knows the
/// characters it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeOrd {
    mapping: BTreeMap<char, u32>,
}

impl FakeOrd {
    /// Build the mapping for `original`.
    ///
    /// The smallest character keeps its own code point; every following
    /// distinct character (in code point order) gets the next integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use dispass_core::FakeOrd;
    ///
    /// let ord = FakeOrd::new("aZ9");
    /// assert_eq!(ord.get('9'), Some(57));
    /// assert_eq!(ord.get('Z'), Some(58));
    /// assert_eq!(ord.get('a'), Some(59));
    /// ```
    pub fn new(original: &str) -> Self {
        let distinct: BTreeSet<char> = original.chars().collect();
        let start = distinct.first().map(|&c| u32::from(c)).unwrap_or(0);
        let mapping = distinct.into_iter().zip(start..).collect();
        Self { mapping }
    }

    /// Ordinal of `character`, or `None` if it was not in the original string.
    pub fn get(&self, character: char) -> Option<u32> {
        self.mapping.get(&character).copied()
    }

    /// Ordinal of `character`, failing with `UnknownCharacter` if it was not
    /// in the original string.
    pub fn try_ord(&self, character: char) -> Result<u32> {
        self.get(character)
            .ok_or(DispassError::UnknownCharacter(character))
    }

    /// Number of distinct characters in the mapping.
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}

impl Index<char> for FakeOrd {
    type Output = u32;

    /// # Panics
    ///
    /// Panics if `character` was not part of the string the mapping was built
    /// from. That is a caller bug, not a recoverable condition.
    fn index(&self, character: char) -> &u32 {
        match self.mapping.get(&character) {
            Some(ord) => ord,
            None => panic!("{}", DispassError::UnknownCharacter(character)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consecutive_from_smallest() {
        let ord = FakeOrd::new("cab");
        assert_eq!(ord['a'], 97);
        assert_eq!(ord['b'], 98);
        assert_eq!(ord['c'], 99);
    }

    #[test]
    fn test_gaps_are_closed() {
        // '0' (48) .. 'Z' (90) .. 'a' (97) collapse to 48, 49, 50
        let ord = FakeOrd::new("a0Za");
        assert_eq!(ord.len(), 3);
        assert_eq!(ord['0'], 48);
        assert_eq!(ord['Z'], 49);
        assert_eq!(ord['a'], 50);
    }

    #[test]
    fn test_single_distinct_character() {
        let ord = FakeOrd::new("zzzz");
        assert_eq!(ord.len(), 1);
        assert_eq!(ord.get('z'), Some(u32::from('z')));
    }

    #[test]
    fn test_empty_input() {
        let ord = FakeOrd::new("");
        assert!(ord.is_empty());
        assert_eq!(ord.get('a'), None);
    }

    #[test]
    fn test_unknown_character() {
        let ord = FakeOrd::new("abc");
        assert_eq!(ord.get('x'), None);
        assert_eq!(ord.try_ord('x'), Err(DispassError::UnknownCharacter('x')));
        assert_eq!(ord.try_ord('b'), Ok(98));
    }

    #[test]
    #[should_panic(expected = "not part of the remapped string")]
    fn test_index_unknown_character_panics() {
        let ord = FakeOrd::new("abc");
        let _ = ord['x'];
    }

    #[test]
    fn test_rebuild_is_stable() {
        let input = "Y2Y4Y2Y0Yzg5Nzc1Yzc2MmI4OTU0ND";
        assert_eq!(FakeOrd::new(input), FakeOrd::new(input));
    }
}
