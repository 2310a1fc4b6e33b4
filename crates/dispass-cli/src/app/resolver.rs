//! Config path resolution and label spec resolution.

use std::path::PathBuf;

use dispass_core::{Algorithm, Charset, LabelDefaults, LabelSpec};

use crate::cli::{Cli, ParamArgs};
use crate::config::{default_config_path, read_config, DispassConfig};
use crate::errors::CliError;

/// Resolve the config file path: `--config` / `DISPASS_CONFIG`, then XDG.
pub fn resolve_config_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(value) = cli.config.as_deref() {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Load the config file, or built-in defaults if the default path has none.
///
/// A config path given explicitly must exist.
pub fn load_config(cli: &Cli) -> anyhow::Result<DispassConfig> {
    let path = resolve_config_path(cli)?;
    if !path.exists() {
        if cli.config.is_some() {
            return Err(CliError::not_found(
                format!("Config not found at {}", path.display()),
                "Hint: Run `dispass config init` to create it, or drop --config.",
            )
            .into());
        }
        tracing::debug!(path = %path.display(), "no config file, using built-in defaults");
        return Ok(DispassConfig::default());
    }
    tracing::debug!(path = %path.display(), "loading config");
    read_config(&path)
}

/// Layer command-line overrides on top of the configured defaults.
///
/// An unregistered `--algo` is reported and ignored, matching how label specs
/// treat unknown algorithm names.
pub fn merge_defaults(config: &LabelDefaults, params: &ParamArgs) -> LabelDefaults {
    let mut defaults = *config;

    if let Some(length) = params.length.filter(|length| *length > 0) {
        defaults.length = length;
    }
    if let Some(name) = params.algo.as_deref() {
        match Algorithm::from_name(name) {
            Some(algorithm) => defaults.algorithm = algorithm,
            None => tracing::warn!(
                algorithm = name,
                fallback = defaults.algorithm.name(),
                "unregistered algorithm, using default"
            ),
        }
    }
    if let Some(seqno) = params.seqno.filter(|seqno| *seqno > 0) {
        defaults.seqno = seqno;
    }

    defaults
}

/// Pick the charset: `--charset` first, then the config file.
pub fn resolve_charset(config: Option<Charset>, params: &ParamArgs) -> Option<Charset> {
    match params.charset.as_deref() {
        Some(name) => {
            let charset = Charset::from_name(name);
            if charset.is_none() {
                tracing::warn!(charset = name, "unknown charset, output will not be remapped");
            }
            charset
        }
        None => config,
    }
}

/// Parse every label spec against `defaults`.
pub fn resolve_specs(
    labels: &[String],
    defaults: &LabelDefaults,
    strict: bool,
) -> Result<Vec<LabelSpec>, CliError> {
    labels
        .iter()
        .map(|text| {
            let parsed = if strict {
                LabelSpec::parse_strict(text, defaults)
            } else {
                LabelSpec::parse(text, defaults)
            };
            parsed.map_err(CliError::from)
        })
        .collect()
}
