use ::config::{Config, ConfigBuilder, ConfigError, Environment, File as ConfigFile};
use crate::error::Error;
use serde::Deserialize;
use std::path::Path;

const ENV_PREFIX: &str = "MEDIA_SHELF";
pub const DEFAULT_PER_PAGE: usize = 50;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Root of the media library. Every query re-scans below it.
    pub library_path: String,
    /// TMDB v3 API key; `None` disables metadata lookups.
    #[serde(default)]
    pub tmdb_api_key: Option<String>,
    pub per_page: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            library_path: ".".to_string(),
            tmdb_api_key: None,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Load `Config.{toml,json,yaml,...}` from the working directory when present,
/// then overlay `MEDIA_SHELF_*` environment variables.
pub fn load_configuration() -> Result<AppConfig, Error> {
    let config = with_defaults()?
        .add_source(ConfigFile::with_name("Config").required(false))
        .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
        .build()?
        .try_deserialize::<AppConfig>()?;
    Ok(config)
}

/// Load configuration from an explicit file. Environment variables still win.
pub fn load_configuration_from(path: &Path) -> Result<AppConfig, Error> {
    let config = with_defaults()?
        .add_source(ConfigFile::from(path).required(true))
        .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
        .build()?
        .try_deserialize::<AppConfig>()?;
    Ok(config)
}

fn with_defaults() -> Result<ConfigBuilder<::config::builder::DefaultState>, ConfigError> {
    Config::builder()
        .set_default("library_path", ".")?
        .set_default("per_page", DEFAULT_PER_PAGE as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults_fill_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Config.toml");
        fs::write(&path, "library_path = \"/srv/media\"\n").unwrap();

        let config = load_configuration_from(&path).unwrap();
        assert_eq!(config.library_path, "/srv/media");
        assert_eq!(config.per_page, DEFAULT_PER_PAGE);
        assert!(config.tmdb_api_key.is_none());
    }

    #[test]
    fn test_file_values_are_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Config.toml");
        fs::write(
            &path,
            "library_path = \"/mnt/movies\"\ntmdb_api_key = \"abc123\"\nper_page = 20\n",
        )
        .unwrap();

        let config = load_configuration_from(&path).unwrap();
        assert_eq!(config.library_path, "/mnt/movies");
        assert_eq!(config.tmdb_api_key.as_deref(), Some("abc123"));
        assert_eq!(config.per_page, 20);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_configuration_from(&dir.path().join("nope.toml"));
        assert!(result.is_err());
    }
}
