//! Registered digest algorithms.
//!
//! The set of algorithms is closed: a name either maps to one of the
//! [`Algorithm`] variants or to nothing. Callers that take algorithm names
//! from users should use [`Algorithm::from_name`] and fall back to a default
//! when it returns `None`.

mod charset;
mod digest;
mod fake_ord;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DispassError;

pub use charset::{Charset, CHARSETS};
pub use digest::{dispass1, dispass2, dispass3};
pub use fake_ord::FakeOrd;

/// Names of the registered algorithms, usable for validation without
/// touching the digest implementations.
pub const ALGORITHMS: [&str; 3] = ["dispass1", "dispass2", "dispass3"];

/// Algorithm used when neither the label nor the caller names one.
pub const DEFAULT_ALGORITHM: Algorithm = Algorithm::Dispass1;

/// A registered digest algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// `label ++ secret`; ignores the sequence number
    Dispass1,
    /// `label ++ seqno ++ secret`
    Dispass2,
    /// `label ++ seqno ++ secret`, with an optional charset remap
    Dispass3,
}

impl Algorithm {
    /// Every registered algorithm, in registry order.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Dispass1,
        Algorithm::Dispass2,
        Algorithm::Dispass3,
    ];

    /// Look up a registered algorithm. Returns `None` for anything else.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dispass1" => Some(Algorithm::Dispass1),
            "dispass2" => Some(Algorithm::Dispass2),
            "dispass3" => Some(Algorithm::Dispass3),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Dispass1 => "dispass1",
            Algorithm::Dispass2 => "dispass2",
            Algorithm::Dispass3 => "dispass3",
        }
    }

    /// Whether the sequence number changes the output.
    pub fn uses_seqno(self) -> bool {
        !matches!(self, Algorithm::Dispass1)
    }

    /// Whether a charset remap is honoured.
    pub fn supports_charset(self) -> bool {
        matches!(self, Algorithm::Dispass3)
    }

    /// Derive a passphrase.
    ///
    /// `seqno` is ignored by `dispass1`. `charset` is only honoured by
    /// `dispass3`, and an unknown charset name leaves the digest unmapped.
    /// The result has `min(length, 171)` characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use dispass_core::Algorithm;
    ///
    /// let passphrase = Algorithm::Dispass2.digest("test", "qqqqqqqq", 30, 1, None);
    /// assert_eq!(passphrase, "ZTdiNGNkYmQ2ZjFmNzc3NGFjZWEwMz");
    /// ```
    pub fn digest(
        self,
        label: &str,
        secret: &str,
        length: usize,
        seqno: u32,
        charset: Option<&str>,
    ) -> String {
        let table = charset.and_then(|name| {
            let table = Charset::from_name(name);
            if table.is_none() {
                tracing::debug!(charset = name, "unknown charset, output left unmapped");
            }
            table
        });

        tracing::debug!(
            algorithm = self.name(),
            length,
            seqno,
            charset = table.map(Charset::name),
            "deriving passphrase"
        );

        match self {
            Algorithm::Dispass1 => dispass1(label, secret, length),
            Algorithm::Dispass2 => dispass2(label, secret, length, seqno),
            Algorithm::Dispass3 => dispass3(label, secret, length, seqno, table),
        }
    }
}

impl Default for Algorithm {
    fn default() -> Self {
        DEFAULT_ALGORITHM
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = DispassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::from_name(s).ok_or_else(|| DispassError::InvalidAlgorithm(s.to_string()))
    }
}
