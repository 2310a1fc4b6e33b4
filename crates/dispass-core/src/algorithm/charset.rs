//! Output character tables for `dispass3`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::fake_ord::FakeOrd;
use crate::error::DispassError;

/// Names of the known charsets, in the order they are listed to users.
pub const CHARSETS: [&str; 2] = ["light", "full"];

/// `[a-z] ++ [A-Z] ++ [0-9] ++ "_"`
const LIGHT: &[u8; 63] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_";

/// `[a-z] ++ [A-Z] ++ [0-9]` followed by punctuation. The underscore sits
/// inside the punctuation run, not after the digits as in `LIGHT`.
const FULL: &[u8; 90] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789@#$%^*()_-=+/?.,~[]{}|;:!\\&`";

/// A named table of permitted output characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Charset {
    /// Letters, digits and underscore (63 characters)
    Light,
    /// Letters, digits and punctuation (90 characters)
    Full,
}

impl Charset {
    /// Look up a charset by name. Unknown names yield `None`; callers skip
    /// the remap step in that case.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Charset::Light),
            "full" => Some(Charset::Full),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Charset::Light => "light",
            Charset::Full => "full",
        }
    }

    /// The characters of this table, in table order.
    pub fn table(self) -> &'static [u8] {
        match self {
            Charset::Light => LIGHT,
            Charset::Full => FULL,
        }
    }

    pub fn contains(self, character: char) -> bool {
        character.is_ascii() && self.table().contains(&(character as u8))
    }

    /// Fold `digest` onto this table.
    ///
    /// Every character `c` becomes `table[ord(c) % table.len()]`, where `ord`
    /// is a [`FakeOrd`] built over `digest` itself. The output has as many
    /// characters as the input.
    pub fn remap(self, digest: &str) -> String {
        let ord = FakeOrd::new(digest);
        let table = self.table();
        let len = table.len() as u32;

        digest
            .chars()
            .map(|c| char::from(table[(ord[c] % len) as usize]))
            .collect()
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Charset {
    type Err = DispassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Charset::from_name(s).ok_or_else(|| DispassError::InvalidCharset(s.to_string()))
    }
}
