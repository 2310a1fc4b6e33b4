use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use dispass_core::{Algorithm, Charset, LabelDefaults, DEFAULT_ALGORITHM, DEFAULT_LENGTH, DEFAULT_SEQNO};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DispassConfig {
    #[serde(default)]
    pub defaults: DefaultsSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DefaultsSection {
    /// Kept as text so an unknown name degrades to the built-in default
    #[serde(default = "default_algorithm_name")]
    pub algorithm: String,
    #[serde(default = "default_length")]
    pub length: usize,
    #[serde(default = "default_seqno")]
    pub seqno: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,
}

impl Default for DefaultsSection {
    fn default() -> Self {
        Self {
            algorithm: default_algorithm_name(),
            length: default_length(),
            seqno: default_seqno(),
            charset: None,
        }
    }
}

fn default_algorithm_name() -> String {
    DEFAULT_ALGORITHM.name().to_string()
}

fn default_length() -> usize {
    DEFAULT_LENGTH
}

fn default_seqno() -> u32 {
    DEFAULT_SEQNO
}

impl DispassConfig {
    /// Label defaults from the `[defaults]` section.
    ///
    /// Unregistered algorithm names and zero values fall back to the built-in
    /// defaults.
    pub fn label_defaults(&self) -> LabelDefaults {
        let section = &self.defaults;
        let algorithm = Algorithm::from_name(&section.algorithm).unwrap_or_else(|| {
            tracing::warn!(
                algorithm = %section.algorithm,
                fallback = DEFAULT_ALGORITHM.name(),
                "config names an unregistered algorithm, using default"
            );
            DEFAULT_ALGORITHM
        });

        LabelDefaults {
            length: if section.length > 0 {
                section.length
            } else {
                DEFAULT_LENGTH
            },
            algorithm,
            seqno: if section.seqno > 0 {
                section.seqno
            } else {
                DEFAULT_SEQNO
            },
        }
    }

    /// Charset from the `[defaults]` section, if it names a known one.
    pub fn charset(&self) -> Option<Charset> {
        let name = self.defaults.charset.as_deref()?;
        let charset = Charset::from_name(name);
        if charset.is_none() {
            tracing::warn!(charset = name, "config names an unknown charset, ignoring it");
        }
        charset
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<DispassConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &DispassConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("dispass"));
        }
    }
    Ok(home_dir()?.join(".config").join("dispass"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_builtin_defaults() {
        let config: DispassConfig = toml::from_str("").expect("parse");
        assert_eq!(config.label_defaults(), LabelDefaults::default());
        assert_eq!(config.charset(), None);
    }

    #[test]
    fn test_partial_defaults_section() {
        let config: DispassConfig =
            toml::from_str("[defaults]\nalgorithm = \"dispass3\"\ncharset = \"full\"\n")
                .expect("parse");
        let defaults = config.label_defaults();
        assert_eq!(defaults.algorithm, Algorithm::Dispass3);
        assert_eq!(defaults.length, DEFAULT_LENGTH);
        assert_eq!(config.charset(), Some(Charset::Full));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config: DispassConfig = toml::from_str(
            "[defaults]\nalgorithm = \"rot13\"\nlength = 0\nseqno = 0\ncharset = \"emoji\"\n",
        )
        .expect("parse");
        assert_eq!(config.label_defaults(), LabelDefaults::default());
        assert_eq!(config.charset(), None);
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");
        let mut config = DispassConfig::default();
        config.defaults.length = 18;
        config.defaults.algorithm = "dispass2".to_string();

        write_config(&path, &config).expect("write");
        let loaded = read_config(&path).expect("read");
        assert_eq!(loaded.defaults.length, 18);
        assert_eq!(loaded.label_defaults().algorithm, Algorithm::Dispass2);
        assert_eq!(loaded.defaults.charset, None);
    }
}
