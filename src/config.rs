//! User defaults loaded from `config.yaml`.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

const CONFIG_FILE: &str = "config.yaml";

/// Defaults applied when the matching command-line flag is absent.
///
/// ```yaml
/// spinner: helix
/// color: cyan
/// scale: 2
/// duration: 1.5
/// ```
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Spinner to preview when no name is given
    pub spinner: Option<String>,
    /// Colour name; unknown names are ignored
    pub color: Option<String>,
    /// Scale factor (1-3)
    pub scale: Option<u8>,
    /// Preview duration in seconds
    pub duration: Option<f64>,
}

impl Config {
    /// Load from the user config directory. A missing file yields defaults.
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(?path, "config:not found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()));
            }
        };
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        config.validate()?;
        debug!(?path, ?config, "config:loaded");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if let Some(scale) = self.scale
            && !(1..=3).contains(&scale)
        {
            bail!("Invalid scale {} in config: must be 1, 2 or 3", scale);
        }
        if let Some(secs) = self.duration
            && Duration::try_from_secs_f64(secs).is_err()
        {
            bail!("Invalid duration {} in config: must be a non-negative number of seconds", secs);
        }
        Ok(())
    }

    /// The configured preview duration, if it fits in a `Duration`.
    pub fn duration(&self) -> Option<Duration> {
        self.duration
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
    }
}

/// `$XDG_CONFIG_HOME/dotspin/config.yaml`, falling back to `~/.config`.
fn config_path() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .filter(|p| p.is_absolute())
        .or_else(|| home::home_dir().map(|h| h.join(".config")))?;
    Some(base.join("dotspin").join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(content: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_missing_file_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_empty_file_returns_defaults() {
        let (_dir, path) = write_config("\n");
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_full_config() {
        let (_dir, path) = write_config("spinner: helix\ncolor: cyan\nscale: 2\nduration: 1.5\n");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.spinner.as_deref(), Some("helix"));
        assert_eq!(config.color.as_deref(), Some("cyan"));
        assert_eq!(config.scale, Some(2));
        assert_eq!(config.duration, Some(1.5));
    }

    #[test]
    fn test_partial_config() {
        let (_dir, path) = write_config("color: nope\n");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.color.as_deref(), Some("nope"));
        assert!(config.spinner.is_none());
    }

    #[test]
    fn test_invalid_scale_rejected() {
        let (_dir, path) = write_config("scale: 4\n");
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid scale"));
    }

    #[test]
    fn test_negative_duration_rejected() {
        let (_dir, path) = write_config("duration: -1\n");
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_oversized_duration_rejected() {
        let (_dir, path) = write_config("duration: 1e20\n");
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid duration"));
    }

    #[test]
    fn test_duration_converts_to_std() {
        let (_dir, path) = write_config("duration: 1.5\n");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.duration(), Some(Duration::from_millis(1500)));
    }

    #[test]
    fn test_malformed_yaml_is_error() {
        let (_dir, path) = write_config("spinner: [unterminated\n");
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_unknown_field_is_error() {
        let (_dir, path) = write_config("spinnner: helix\n");
        assert!(Config::load_from(&path).is_err());
    }
}
