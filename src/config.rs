use crate::error::{Error, Result};
use crate::output::DEFAULT_EXTENSION;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "enum-gen.toml";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub sources: Vec<SourceConfig>,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Extension of generated files, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
        }
    }
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SourceConfig {
    /// Every enum asset below `path`
    Directory { path: PathBuf },
    File { path: PathBuf },
    Glob { pattern: String },
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| Error::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_basic() {
        let toml_str = r#"
[output]
extension = "g.cs"

[[sources]]
type = "directory"
path = "Assets/Enums"

[[sources]]
type = "file"
path = "Assets/Misc/Layers.enum.toml"

[[sources]]
type = "glob"
pattern = "Assets/**/Audio*.enum.toml"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.extension, "g.cs");
        assert_eq!(config.sources.len(), 3);
        assert!(matches!(
            &config.sources[0],
            SourceConfig::Directory { path } if path == Path::new("Assets/Enums")
        ));
        assert!(matches!(&config.sources[1], SourceConfig::File { .. }));
        assert!(matches!(
            &config.sources[2],
            SourceConfig::Glob { pattern } if pattern == "Assets/**/Audio*.enum.toml"
        ));
    }

    #[test]
    fn test_default_extension() {
        let toml_str = r#"
[[sources]]
type = "directory"
path = "Assets"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.extension, "cs");
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.sources.is_empty());
        assert_eq!(config.output.extension, "cs");
    }

    #[test]
    fn test_unknown_source_type() {
        let toml_str = r#"
[[sources]]
type = "registration"
path = "x"
"#;
        assert!(toml::from_str::<Config>(toml_str).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/enum-gen.toml")).unwrap_err();
        assert!(matches!(err, Error::ReadConfig { .. }));
    }
}
