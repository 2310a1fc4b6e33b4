//! Label specifications.
//!
//! A label spec names one passphrase and the parameters used to derive it:
//!
//! ```text
//! label[:length[:algorithm[:seqno]]]
//! ```
//!
//! Missing fields take the caller's defaults. The lenient parser never rejects
//! a spec with a usable label: a malformed or zero number counts as missing,
//! and an unregistered algorithm falls back to the default one. Use
//! [`LabelSpec::parse_strict`] when bad input should be reported instead.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::algorithm::{Algorithm, DEFAULT_ALGORITHM};
use crate::error::{DispassError, Result};

/// Passphrase length used when nothing else is specified.
pub const DEFAULT_LENGTH: usize = 30;

/// Sequence number used when nothing else is specified.
pub const DEFAULT_SEQNO: u32 = 1;

const FIELD_SEPARATOR: char = ':';
const MAX_FIELDS: usize = 4;

/// Fallback values for fields a label spec leaves out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelDefaults {
    pub length: usize,
    pub algorithm: Algorithm,
    pub seqno: u32,
}

impl Default for LabelDefaults {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            algorithm: DEFAULT_ALGORITHM,
            seqno: DEFAULT_SEQNO,
        }
    }
}

/// One passphrase derivation unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSpec {
    /// Public identifier for the passphrase
    pub label: String,

    /// Desired passphrase length
    pub length: usize,

    /// Digest algorithm
    pub algorithm: Algorithm,

    /// Generation counter; has no effect for `dispass1`
    pub seqno: u32,
}

impl LabelSpec {
    /// Create a spec for `label` with every other field taken from `defaults`.
    pub fn new(label: impl Into<String>, defaults: &LabelDefaults) -> Self {
        Self {
            label: label.into(),
            length: defaults.length,
            algorithm: defaults.algorithm,
            seqno: defaults.seqno,
        }
    }

    /// Parse a label spec, falling back to `defaults` for anything missing or
    /// unusable.
    ///
    /// Only an empty label is an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use dispass_core::{Algorithm, LabelDefaults, LabelSpec};
    ///
    /// let defaults = LabelDefaults::default();
    /// let spec = LabelSpec::parse("mail:abc:dispass9:2", &defaults).unwrap();
    /// assert_eq!(spec.length, 30);
    /// assert_eq!(spec.algorithm, Algorithm::Dispass1);
    /// ```
    pub fn parse(spec: &str, defaults: &LabelDefaults) -> Result<Self> {
        parse_fields(spec, defaults, false)
    }

    /// Parse a label spec, rejecting malformed fields.
    ///
    /// Empty fields still fall back to `defaults` (so `mail::dispass2` is
    /// valid). Non-numeric or zero lengths and sequence numbers, unregistered
    /// algorithm names and extra fields are errors.
    pub fn parse_strict(spec: &str, defaults: &LabelDefaults) -> Result<Self> {
        parse_fields(spec, defaults, true)
    }

    /// Derive this label's passphrase from `secret`.
    ///
    /// `charset` names a table to fold the output onto; only `dispass3`
    /// honours it.
    pub fn derive(&self, secret: &str, charset: Option<&str>) -> String {
        self.algorithm
            .digest(&self.label, secret, self.length, self.seqno, charset)
    }

    /// Apply an update, returning whether any field changed.
    pub fn apply(&mut self, update: &LabelUpdate) -> bool {
        let before = self.clone();

        if let Some(length) = update.length {
            self.length = length;
        }
        if let Some(algorithm) = update.algorithm {
            self.algorithm = algorithm;
        }
        if let Some(seqno) = update.seqno {
            self.seqno = seqno;
        }

        *self != before
    }
}

impl fmt::Display for LabelSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.label, self.length, self.algorithm, self.seqno
        )
    }
}

/// Changes to an existing label, in `[length]:[algorithm]:[seqno]` form.
///
/// Every field is optional; `None` leaves the label's value unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelUpdate {
    pub length: Option<usize>,
    pub algorithm: Option<Algorithm>,
    pub seqno: Option<u32>,
}

impl LabelUpdate {
    /// Parse update parameters such as `50::2` or `:dispass3:`.
    ///
    /// Empty, malformed or zero fields and unregistered algorithms are left
    /// unset. A sequence number is dropped when the update selects
    /// `dispass1`, which has no use for one.
    pub fn parse(params: &str) -> Self {
        let fields: Vec<&str> = params.split(FIELD_SEPARATOR).collect();

        let length = fields.first().and_then(|value| parse_positive(value));
        let algorithm = fields
            .get(1)
            .filter(|value| !value.is_empty())
            .and_then(|value| Algorithm::from_name(value));
        let seqno = match algorithm {
            Some(Algorithm::Dispass1) => None,
            _ => fields.get(2).and_then(|value| parse_positive(value)),
        };

        Self {
            length,
            algorithm,
            seqno,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.length.is_none() && self.algorithm.is_none() && self.seqno.is_none()
    }
}

/// A positive integer, or `None` for anything else (including zero).
fn parse_positive<T>(value: &str) -> Option<T>
where
    T: std::str::FromStr + PartialEq + Default,
{
    value.parse::<T>().ok().filter(|parsed| *parsed != T::default())
}

fn numeric_field<T>(
    field: &'static str,
    value: Option<&str>,
    fallback: T,
    strict: bool,
) -> Result<T>
where
    T: std::str::FromStr + PartialEq + Default,
{
    let Some(value) = value.filter(|value| !value.is_empty()) else {
        return Ok(fallback);
    };

    match parse_positive(value) {
        Some(parsed) => Ok(parsed),
        None if strict => Err(DispassError::MalformedNumber {
            field,
            value: value.to_string(),
        }),
        None => {
            tracing::debug!(field, value, "ignoring malformed numeric field");
            Ok(fallback)
        }
    }
}

fn parse_fields(spec: &str, defaults: &LabelDefaults, strict: bool) -> Result<LabelSpec> {
    let fields: Vec<&str> = spec.split(FIELD_SEPARATOR).collect();

    let label = fields[0];
    if label.trim().is_empty() {
        return Err(DispassError::InvalidLabel(format!(
            "label spec {:?} has an empty label",
            spec
        )));
    }
    if strict && fields.len() > MAX_FIELDS {
        return Err(DispassError::InvalidLabel(format!(
            "label spec {:?} has {} fields (at most {} allowed)",
            spec,
            fields.len(),
            MAX_FIELDS
        )));
    }

    let length = numeric_field("length", fields.get(1).copied(), defaults.length, strict)?;

    let algorithm = match fields.get(2).copied().filter(|name| !name.is_empty()) {
        None => defaults.algorithm,
        Some(name) => match Algorithm::from_name(name) {
            Some(algorithm) => algorithm,
            None if strict => return Err(DispassError::InvalidAlgorithm(name.to_string())),
            None => {
                tracing::debug!(
                    algorithm = name,
                    fallback = defaults.algorithm.name(),
                    "unregistered algorithm, using default"
                );
                defaults.algorithm
            }
        },
    };

    let seqno = numeric_field("seqno", fields.get(3).copied(), defaults.seqno, strict)?;
    let seqno = if algorithm.uses_seqno() {
        seqno
    } else {
        defaults.seqno
    };

    Ok(LabelSpec {
        label: label.to_string(),
        length,
        algorithm,
        seqno,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> LabelDefaults {
        LabelDefaults::default()
    }

    #[test]
    fn test_label_only() {
        let spec = LabelSpec::parse("mail", &defaults()).expect("parse should succeed");
        assert_eq!(spec, LabelSpec::new("mail", &defaults()));
        assert_eq!(spec.length, 30);
        assert_eq!(spec.algorithm, Algorithm::Dispass1);
        assert_eq!(spec.seqno, 1);
    }

    #[test]
    fn test_all_fields() {
        let spec = LabelSpec::parse("mail:18:dispass2:4", &defaults()).expect("parse");
        assert_eq!(spec.label, "mail");
        assert_eq!(spec.length, 18);
        assert_eq!(spec.algorithm, Algorithm::Dispass2);
        assert_eq!(spec.seqno, 4);
    }

    #[test]
    fn test_caller_defaults_apply() {
        let custom = LabelDefaults {
            length: 12,
            algorithm: Algorithm::Dispass3,
            seqno: 7,
        };
        let spec = LabelSpec::parse("mail", &custom).expect("parse");
        assert_eq!(spec.length, 12);
        assert_eq!(spec.algorithm, Algorithm::Dispass3);
        assert_eq!(spec.seqno, 7);
    }

    #[test]
    fn test_malformed_numbers_fall_back() {
        let spec = LabelSpec::parse("mail:long:dispass2:x", &defaults()).expect("parse");
        assert_eq!(spec.length, 30);
        assert_eq!(spec.seqno, 1);

        let spec = LabelSpec::parse("mail:-5:dispass2:-1", &defaults()).expect("parse");
        assert_eq!(spec.length, 30);
        assert_eq!(spec.seqno, 1);
    }

    #[test]
    fn test_zero_counts_as_missing() {
        let spec = LabelSpec::parse("mail:0:dispass2:0", &defaults()).expect("parse");
        assert_eq!(spec.length, 30);
        assert_eq!(spec.seqno, 1);
    }

    #[test]
    fn test_unknown_algorithm_falls_back() {
        let spec = LabelSpec::parse("mail:20:md5:3", &defaults()).expect("parse");
        assert_eq!(spec.length, 20);
        assert_eq!(spec.algorithm, Algorithm::Dispass1);
        // Fallback algorithm is dispass1, so the seqno is not taken
        assert_eq!(spec.seqno, 1);
    }

    #[test]
    fn test_dispass1_takes_default_seqno() {
        let spec = LabelSpec::parse("mail:20:dispass1:9", &defaults()).expect("parse");
        assert_eq!(spec.seqno, 1);
    }

    #[test]
    fn test_empty_fields_fall_back() {
        let spec = LabelSpec::parse("mail::dispass3:", &defaults()).expect("parse");
        assert_eq!(spec.length, 30);
        assert_eq!(spec.algorithm, Algorithm::Dispass3);
        assert_eq!(spec.seqno, 1);
    }

    #[test]
    fn test_empty_label_is_rejected() {
        assert!(matches!(
            LabelSpec::parse("", &defaults()),
            Err(DispassError::InvalidLabel(_))
        ));
        assert!(matches!(
            LabelSpec::parse(":30:dispass2", &defaults()),
            Err(DispassError::InvalidLabel(_))
        ));
    }

    #[test]
    fn test_lenient_ignores_extra_fields() {
        let spec = LabelSpec::parse("mail:20:dispass2:3:extra", &defaults()).expect("parse");
        assert_eq!(spec.seqno, 3);
    }

    #[test]
    fn test_strict_accepts_valid_specs() {
        let spec = LabelSpec::parse_strict("mail:18:dispass3:2", &defaults()).expect("parse");
        assert_eq!(spec.algorithm, Algorithm::Dispass3);
        assert_eq!(spec.seqno, 2);
        assert!(LabelSpec::parse_strict("mail::dispass2", &defaults()).is_ok());
    }

    #[test]
    fn test_strict_rejects_malformed_fields() {
        assert_eq!(
            LabelSpec::parse_strict("mail:abc", &defaults()),
            Err(DispassError::MalformedNumber {
                field: "length",
                value: "abc".to_string()
            })
        );
        assert_eq!(
            LabelSpec::parse_strict("mail:30:dispass2:0", &defaults()),
            Err(DispassError::MalformedNumber {
                field: "seqno",
                value: "0".to_string()
            })
        );
        assert_eq!(
            LabelSpec::parse_strict("mail:30:md5", &defaults()),
            Err(DispassError::InvalidAlgorithm("md5".to_string()))
        );
        assert!(matches!(
            LabelSpec::parse_strict("mail:30:dispass2:1:x", &defaults()),
            Err(DispassError::InvalidLabel(_))
        ));
    }

    #[test]
    fn test_display_round_trip() {
        let spec = LabelSpec::parse("mail:18:dispass2:4", &defaults()).expect("parse");
        assert_eq!(spec.to_string(), "mail:18:dispass2:4");
        let reparsed = LabelSpec::parse_strict(&spec.to_string(), &defaults()).expect("parse");
        assert_eq!(reparsed, spec);
    }

    #[test]
    fn test_derive_uses_spec_fields() {
        let spec = LabelSpec::parse("test2:50:dispass2:10", &defaults()).expect("parse");
        assert_eq!(
            spec.derive("qqqqqqqq", None),
            "NGEwNjMxMzZiMzljODVmODk4OWQ1ZmE4YTRlY2E4ODZkZjZlZW"
        );
    }

    #[test]
    fn test_update_parse() {
        assert_eq!(
            LabelUpdate::parse("50:dispass3:2"),
            LabelUpdate {
                length: Some(50),
                algorithm: Some(Algorithm::Dispass3),
                seqno: Some(2),
            }
        );
        assert_eq!(
            LabelUpdate::parse("::5"),
            LabelUpdate {
                length: None,
                algorithm: None,
                seqno: Some(5),
            }
        );
        assert!(LabelUpdate::parse("x:md5:").is_empty());
        assert!(LabelUpdate::parse("").is_empty());
    }

    #[test]
    fn test_update_drops_seqno_for_dispass1() {
        let update = LabelUpdate::parse(":dispass1:4");
        assert_eq!(update.algorithm, Some(Algorithm::Dispass1));
        assert_eq!(update.seqno, None);
    }

    #[test]
    fn test_apply_update() {
        let mut spec = LabelSpec::new("mail", &defaults());
        assert!(spec.apply(&LabelUpdate::parse("40:dispass2:3")));
        assert_eq!(spec.to_string(), "mail:40:dispass2:3");

        assert!(!spec.apply(&LabelUpdate::parse("40::")));
        assert!(!spec.apply(&LabelUpdate::default()));
    }

    #[test]
    fn test_serde_shape() {
        let spec = LabelSpec::parse("mail:18:dispass2:4", &defaults()).expect("parse");
        let json = serde_json::to_value(&spec).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "label": "mail",
                "length": 18,
                "algorithm": "dispass2",
                "seqno": 4,
            })
        );
    }
}
