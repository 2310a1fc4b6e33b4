//! Application-level utilities for the DisPass CLI.
//!
//! This module provides:
//! - Config path resolution and loading
//! - Label spec resolution against layered defaults
//! - Master password acquisition

mod context;
mod resolver;
mod secret;

// Re-export public API
pub use context::AppContext;
pub use resolver::resolve_config_path;
pub use secret::{read_secret, SecretSource};
