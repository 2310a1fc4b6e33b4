//! Application context for the DisPass CLI.
//!
//! Combines CLI arguments with the lazily-loaded config file.

use once_cell::unsync::OnceCell;

use dispass_core::{Charset, LabelDefaults, LabelSpec};

use crate::cli::{Cli, ParamArgs};
use crate::config::DispassConfig;

use super::resolver::{load_config, merge_defaults, resolve_charset, resolve_specs};

/// Label specs resolved for one command, plus the charset to apply.
pub struct Resolved {
    pub specs: Vec<LabelSpec>,
    pub charset: Option<Charset>,
}

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<DispassConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&DispassConfig> {
        self.config.get_or_try_init(|| load_config(self.cli))
    }

    /// Defaults after applying config and command-line overrides.
    pub fn label_defaults(&self, params: &ParamArgs) -> anyhow::Result<LabelDefaults> {
        Ok(merge_defaults(&self.config()?.label_defaults(), params))
    }

    /// Resolve label specs and charset for a command.
    pub fn resolve(&self, labels: &[String], params: &ParamArgs) -> anyhow::Result<Resolved> {
        let defaults = self.label_defaults(params)?;
        let specs = resolve_specs(labels, &defaults, params.strict)?;
        let charset = resolve_charset(self.config()?.charset(), params);

        for spec in &specs {
            if charset.is_some() && !spec.algorithm.supports_charset() {
                tracing::debug!(
                    label = %spec.label,
                    algorithm = spec.algorithm.name(),
                    "charset ignored, only dispass3 remaps output"
                );
            }
        }

        Ok(Resolved { specs, charset })
    }
}
