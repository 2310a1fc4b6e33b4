//! # DisPass Core
//!
//! Core library for DisPass - deterministic passphrase derivation from a
//! master password and a public label.
//!
//! This crate provides the derivation engine and the label parameter contract,
//! independent of the CLI interface. Nothing here stores, caches or logs a
//! secret; every derivation is a pure function of its inputs.
//!
//! ## Architecture
//!
//! - **algorithm**: The versioned digest algorithms (`dispass1`..`dispass3`),
//!   the charset tables and the character remapper they use
//! - **label**: Label specifications (`label[:length[:algorithm[:seqno]]]`)
//!   and their fallback rules
//! - **error**: Error types for strict validation
//!
//! ## Example
//!
//! ```
//! use dispass_core::{Algorithm, LabelDefaults, LabelSpec};
//!
//! let spec = LabelSpec::parse("test:30:dispass1", &LabelDefaults::default()).unwrap();
//! assert_eq!(spec.algorithm, Algorithm::Dispass1);
//! assert_eq!(
//!     spec.derive("qqqqqqqq", None),
//!     "Y2Y4Y2Y0Yzg5Nzc1Yzc2MmI4OTU0ND"
//! );
//! ```

pub mod algorithm;
pub mod error;
pub mod label;

pub use algorithm::{Algorithm, Charset, FakeOrd, ALGORITHMS, CHARSETS, DEFAULT_ALGORITHM};
pub use error::{DispassError, Result};
pub use label::{LabelDefaults, LabelSpec, LabelUpdate, DEFAULT_LENGTH, DEFAULT_SEQNO};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
