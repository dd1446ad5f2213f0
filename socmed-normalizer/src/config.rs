use config::{Config, File};
use serde::{Deserialize, Serialize};
use socmed_types::{ExtractionError, Platform};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::normalizer::OutputFormat;
use crate::registry::ExtractorRegistry;

const DEFAULT_HEADER: &str = "# socmed-normalize configuration\n\
# `platforms` sets the batch order; [input.files] maps a platform to its raw response file.\n\n";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Platforms to parse in batch mode, in order
    pub platforms: Vec<String>,
    pub input: InputConfig,
    pub output: OutputConfig,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            platforms: Platform::ALL.iter().map(|p| p.to_string()).collect(),
            input: InputConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    pub dir: PathBuf,
    /// Platform name to file name inside `dir`. Missing entries use `{platform}.json`.
    pub files: BTreeMap<String, String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("example_results"),
            files: Platform::ALL
                .iter()
                .map(|p| (p.to_string(), format!("{}.json", p)))
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub pretty: bool,
    /// Wrap each saved document as a search-index hit
    pub envelope: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("parsed_results"),
            pretty: true,
            envelope: false,
        }
    }
}

impl OutputConfig {
    pub fn format(&self) -> OutputFormat {
        OutputFormat {
            pretty: self.pretty,
            envelope: self.envelope,
        }
    }
}

impl NormalizerConfig {
    /// Load from the user config directory, writing a default file on first run
    pub fn load() -> Result<(Self, PathBuf), ExtractionError> {
        let config_path = get_config_path();
        write_default_if_missing(&config_path)?;
        let config = Self::from_file(&config_path)?;
        Ok((config, config_path))
    }

    pub fn from_file(path: &Path) -> Result<Self, ExtractionError> {
        if !path.exists() {
            return Err(ExtractionError::ConfigError(format!(
                "Config file not found at {:?}",
                path
            )));
        }

        let builder = Config::builder()
            .add_source(File::from(path.to_path_buf()))
            .build()
            .map_err(|e| ExtractionError::ConfigError(e.to_string()))?;

        builder
            .try_deserialize()
            .map_err(|e| ExtractionError::ConfigError(e.to_string()))
    }

    /// Resolve `platforms` into (platform, file name) pairs.
    ///
    /// Every listed platform must have a registered extractor; anything else is a
    /// configuration error raised before any parsing starts.
    pub fn batch_plan(
        &self,
        registry: &ExtractorRegistry,
    ) -> Result<Vec<(Platform, String)>, ExtractionError> {
        self.platforms
            .iter()
            .map(|name| {
                let platform = registry
                    .lookup(name)
                    .map_err(|e| ExtractionError::ConfigError(e.to_string()))?
                    .platform();
                let file = self
                    .input
                    .files
                    .get(platform.as_str())
                    .cloned()
                    .unwrap_or_else(|| format!("{}.json", platform));
                Ok((platform, file))
            })
            .collect()
    }
}

/// Write the default config to `path` unless a file is already there.
/// Returns whether a file was written.
pub fn write_default_if_missing(path: &Path) -> Result<bool, ExtractionError> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ExtractionError::ConfigError(format!("Failed to create config directory: {e}"))
        })?;
    }

    let body = toml::to_string_pretty(&NormalizerConfig::default())
        .map_err(|e| ExtractionError::ConfigError(format!("Failed to render default config: {e}")))?;

    std::fs::write(path, format!("{DEFAULT_HEADER}{body}")).map_err(|e| {
        ExtractionError::ConfigError(format!("Failed to write default config: {e}"))
    })?;

    Ok(true)
}

pub fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("socmed").join("normalizer.toml")
    } else {
        PathBuf::from("normalizer.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("normalizer.toml");

        assert!(write_default_if_missing(&path).unwrap());
        assert!(!write_default_if_missing(&path).unwrap());

        let config = NormalizerConfig::from_file(&path).unwrap();
        assert_eq!(config, NormalizerConfig::default());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("normalizer.toml");
        std::fs::write(
            &path,
            r#"
platforms = ["youtube", "twitter"]

[input]
dir = "/data/raw"

[input.files]
twitter = "tweets_2024.json"

[output]
envelope = true
"#,
        )
        .unwrap();

        let config = NormalizerConfig::from_file(&path).unwrap();
        assert_eq!(config.input.dir, PathBuf::from("/data/raw"));
        assert_eq!(config.output.dir, PathBuf::from("parsed_results"));
        assert_eq!(
            config.output.format(),
            OutputFormat {
                pretty: true,
                envelope: true
            }
        );

        let plan = config.batch_plan(&ExtractorRegistry::with_defaults()).unwrap();
        assert_eq!(
            plan,
            vec![
                (Platform::Youtube, "youtube.json".to_string()),
                (Platform::Twitter, "tweets_2024.json".to_string()),
            ]
        );
    }

    #[test]
    fn test_unknown_platform_is_config_error() {
        let config = NormalizerConfig {
            platforms: vec!["twitter".to_string(), "friendster".to_string()],
            ..Default::default()
        };

        match config.batch_plan(&ExtractorRegistry::with_defaults()) {
            Err(ExtractionError::ConfigError(msg)) => assert!(msg.contains("friendster")),
            other => panic!("Expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = NormalizerConfig::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ExtractionError::ConfigError(_))));
    }
}
