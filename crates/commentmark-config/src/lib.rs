use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid sources pattern {pattern:?}: {source}")]
    SourcesPatternError {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("Failed to list source file: {0}")]
    SourcesGlobError(#[from] glob::GlobError),
}

/// Where batch conversion reads comments from and writes fragments to.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Glob selecting the comment source files, e.g. `~/blog/comments/*.md`.
    pub sources: String,
    /// Receives one `<stem>.html` per source file.
    pub output_dir: PathBuf,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded paths
        config.sources = Self::expand(&config.sources).unwrap_or(config.sources);
        config.output_dir = Self::expand_path(&config.output_dir).unwrap_or(config.output_dir);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/commentmark");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Files matched by `sources`, sorted.
    pub fn source_files(&self) -> Result<Vec<PathBuf>, ConfigError> {
        let entries =
            glob::glob(&self.sources).map_err(|source| ConfigError::SourcesPatternError {
                pattern: self.sources.clone(),
                source,
            })?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry?;
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    /// Output path for a source file: `<output_dir>/<stem>.html`.
    pub fn output_path(&self, source: &Path) -> PathBuf {
        let mut name = source
            .file_stem()
            .unwrap_or(source.as_os_str())
            .to_os_string();
        name.push(".html");
        self.output_dir.join(name)
    }

    fn expand(s: &str) -> Option<String> {
        shellexpand::full(s).ok().map(|expanded| expanded.into_owned())
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        Self::expand(&path_str).map(PathBuf::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> Config {
        Config {
            sources: format!("{}/*.md", dir.path().display()),
            output_dir: dir.path().join("html"),
        }
    }

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/commentmark/config.toml"));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            sources: "/tmp/comments/*.md".to_string(),
            output_dir: PathBuf::from("/tmp/out"),
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original.sources, deserialized.sources);
        assert_eq!(original.output_dir, deserialized.output_dir);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let expanded = Config::expand_path(Path::new("~/test/path")).unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_absolute_path() {
        let path = PathBuf::from("/absolute/path");
        assert_eq!(Config::expand_path(&path).unwrap(), path);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested/config.toml");
        let test_config = config_in(&temp_dir);

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config.sources, test_config.sources);
        assert_eq!(loaded_config.output_dir, test_config.output_dir);
    }

    #[test]
    fn test_load_malformed_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "sources = [").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
    }

    #[test]
    fn test_env_vars_expanded_on_load() {
        unsafe {
            env::set_var("COMMENTMARK_TEST_ROOT", "/srv/blog");
        }

        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_file,
            "sources = \"$COMMENTMARK_TEST_ROOT/comments/*.md\"\noutput_dir = \"$COMMENTMARK_TEST_ROOT/html\"\n",
        )
        .unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(config.sources, "/srv/blog/comments/*.md");
        assert_eq!(config.output_dir, PathBuf::from("/srv/blog/html"));

        unsafe {
            env::remove_var("COMMENTMARK_TEST_ROOT");
        }
    }

    #[test]
    fn test_source_files_sorted_and_filtered() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["2.md", "10.md", "1.md", "notes.txt"] {
            std::fs::write(temp_dir.path().join(name), "text").unwrap();
        }
        std::fs::create_dir(temp_dir.path().join("dir.md")).unwrap();

        let files = config_in(&temp_dir).source_files().unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|f| f.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["1.md", "10.md", "2.md"]);
    }

    #[test]
    fn test_invalid_sources_pattern() {
        let config = Config {
            sources: "[".to_string(),
            output_dir: PathBuf::from("/tmp"),
        };
        assert!(matches!(
            config.source_files(),
            Err(ConfigError::SourcesPatternError { .. })
        ));
    }

    #[test]
    fn test_output_path_uses_stem() {
        let config = Config {
            sources: String::new(),
            output_dir: PathBuf::from("/out"),
        };
        assert_eq!(
            config.output_path(Path::new("/in/1234.md")),
            PathBuf::from("/out/1234.html")
        );
        assert_eq!(
            config.output_path(Path::new("/in/v1.2.md")),
            PathBuf::from("/out/v1.2.html")
        );
    }
}
