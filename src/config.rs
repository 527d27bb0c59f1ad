use std::path::Path;
use derive_more::*;
use serde::Deserialize;

/// Load-time settings shared by the tileset loaders and the behavior registry.
#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// What to do with a tile whose `type` names no known behavior.
    pub unknown_behavior: UnknownBehaviorPolicy,
    /// Decode and type tiles on the rayon thread pool.
    pub parallel: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            unknown_behavior: UnknownBehaviorPolicy::Reject,
            parallel: true,
        }
    }
}

impl LoaderConfig {

    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_yaml(&source)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Default, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownBehaviorPolicy {
    /// Fail the whole build.
    #[default]
    Reject,
    /// Treat the tile as solid and log a warning.
    Degrade,
}

#[derive(Error, Display, From, Debug)]
pub enum ConfigError {
    #[display(fmt="{_0}")]
    IoError(std::io::Error),
    #[display(fmt="{_0}")]
    YamlError(serde_yaml::Error),
}

#[cfg(test)]
mod test {
    use super::{LoaderConfig, UnknownBehaviorPolicy};

    #[test]
    fn defaults() {
        let config = LoaderConfig::from_yaml("{}").unwrap();
        assert_eq!(LoaderConfig::default(), config);
        assert_eq!(UnknownBehaviorPolicy::Reject, config.unknown_behavior);
        assert!(config.parallel);
    }

    #[test]
    fn degrade() {
        let config = LoaderConfig::from_yaml("unknown_behavior: degrade\nparallel: false").unwrap();
        assert_eq!(UnknownBehaviorPolicy::Degrade, config.unknown_behavior);
        assert!(!config.parallel);
    }

    #[test]
    fn bad_policy() {
        assert!(LoaderConfig::from_yaml("unknown_behavior: maybe").is_err());
    }

    #[test]
    fn bundled_config() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/config/loader.yaml");
        let config = LoaderConfig::load(path).unwrap();
        assert_eq!(LoaderConfig::default(), config);
    }
}
