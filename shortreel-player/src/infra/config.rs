//! Player configuration.
//!
//! Evaluation order:
//! 1) `$SHORTREEL_CONFIG_PATH` (TOML or JSON file),
//! 2) `$SHORTREEL_CONFIG_JSON` (inline JSON),
//! 3) `shortreel.toml` / `config/shortreel.toml` / `shortreel.json`,
//! 4) defaults.
//!
//! A `.env` file in the working directory is applied first.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};

use crate::infra::constants::{gesture, polling, seeking};
use crate::infra::embed_api::SimulatedEmbedConfig;
use crate::infra::native_player::NativePlayerConfig;

pub const CONFIG_PATH_ENV: &str = "SHORTREEL_CONFIG_PATH";
pub const CONFIG_JSON_ENV: &str = "SHORTREEL_CONFIG_JSON";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Dataset JSON to load instead of the bundled one
    pub dataset_path: Option<PathBuf>,
    pub poll_interval_ms: u64,
    pub drag_threshold_px: f32,
    pub max_drag_px: f32,
    pub skip_seconds: f64,
    pub snap_back_ms: u64,
    /// Remote hosts thumbnails and icons may be loaded from
    pub allowed_asset_hosts: Vec<String>,
    pub embed: SimulatedEmbedConfig,
    /// Player process for DIRECT media
    pub native: NativePlayerConfig,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            dataset_path: None,
            poll_interval_ms: polling::POLL_INTERVAL_MS,
            drag_threshold_px: gesture::DRAG_THRESHOLD_PX,
            max_drag_px: gesture::MAX_DRAG_PX,
            skip_seconds: seeking::SKIP_SECONDS,
            snap_back_ms: gesture::SNAP_BACK_MS,
            allowed_asset_hosts: vec![
                "media.samajsaathi.com".to_string(),
                "v3b.fal.media".to_string(),
            ],
            embed: SimulatedEmbedConfig::default(),
            native: NativePlayerConfig::default(),
        }
    }
}

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
    Default,
}

impl PlayerConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn snap_back(&self) -> Duration {
        Duration::from_millis(self.snap_back_ms)
    }

    /// Load `.env`, then resolve the configuration from the environment.
    pub fn load() -> anyhow::Result<(Self, ConfigSource)> {
        match dotenvy::dotenv() {
            Ok(path) => log::debug!("[Config] Loaded {}", path.display()),
            Err(dotenvy::Error::Io(_)) => {}
            Err(err) => return Err(err).context("failed to read .env"),
        }
        Self::load_from_env()
    }

    pub fn load_from_env() -> anyhow::Result<(Self, ConfigSource)> {
        if let Ok(path_str) = env::var(CONFIG_PATH_ENV)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Ok(raw) = env::var(CONFIG_JSON_ENV)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_ENV}"))?;
            return Ok((parsed, ConfigSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file() {
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((Self::default(), ConfigSource::Default))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read player config from {}", path.display())
        })?;

        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid player config {}", path.display())
            })?,
            Some("toml") => toml::from_str(&contents).map_err(|err| {
                anyhow!("invalid player config {}: {}", path.display(), err)
            })?,
            _ => Self::parse_from_str(&contents, &path.display().to_string())?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn parse_from_str(contents: &str, origin: &str) -> anyhow::Result<Self> {
        // Try TOML first, then JSON for convenience.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse player config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|err| anyhow!("invalid player config json: {err}"))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the player unusable.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.poll_interval_ms == 0 {
            return Err(anyhow!("poll_interval_ms must be greater than zero"));
        }
        if !(self.drag_threshold_px > 0.0) {
            return Err(anyhow!("drag_threshold_px must be positive"));
        }
        if self.max_drag_px < self.drag_threshold_px {
            return Err(anyhow!(
                "max_drag_px ({}) must not be below drag_threshold_px ({})",
                self.max_drag_px,
                self.drag_threshold_px
            ));
        }
        if !(self.skip_seconds > 0.0) {
            return Err(anyhow!("skip_seconds must be positive"));
        }
        if self.native.command.trim().is_empty() {
            return Err(anyhow!("native.command must not be empty"));
        }
        Ok(())
    }

    fn find_default_file() -> Option<PathBuf> {
        const CANDIDATES: &[&str] = &[
            "shortreel.toml",
            "shortreel.json",
            "config/shortreel.toml",
            "config/shortreel.json",
        ];

        CANDIDATES
            .iter()
            .map(Path::new)
            .find(|path| path.exists())
            .map(|path| path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::native_player::NativeBackendKind;
    use std::io::Write;

    #[test]
    fn defaults_match_player_constants() {
        let config = PlayerConfig::default();
        assert_eq!(config.poll_interval(), Duration::from_millis(500));
        assert_eq!(config.drag_threshold_px, 120.0);
        assert_eq!(config.skip_seconds, 10.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = PlayerConfig::parse_from_str(
            "drag_threshold_px = 80.0\n[embed]\napi_preloaded = true\n",
            "inline",
        )
        .unwrap();
        assert_eq!(config.drag_threshold_px, 80.0);
        assert!(config.embed.api_preloaded);
        assert_eq!(config.poll_interval_ms, 500);
        assert_eq!(config.embed.default_duration_secs, 300.0);
    }

    #[test]
    fn json_file_is_loaded_by_extension() {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .unwrap();
        write!(file, r#"{{"skip_seconds": 5.0, "poll_interval_ms": 250}}"#)
            .unwrap();

        let config = PlayerConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.skip_seconds, 5.0);
        assert_eq!(config.poll_interval(), Duration::from_millis(250));
    }

    #[test]
    fn rejects_threshold_above_max_drag() {
        let err = PlayerConfig::parse_json(
            r#"{"drag_threshold_px": 400.0, "max_drag_px": 300.0}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("max_drag_px"));
    }

    #[test]
    fn native_table_selects_backend() {
        let config = PlayerConfig::parse_from_str(
            "[native]\nbackend = \"simulated\"\nextra_args = [\"--mute=yes\"]\n",
            "inline",
        )
        .unwrap();
        assert_eq!(config.native.backend, NativeBackendKind::Simulated);
        assert_eq!(config.native.command, "mpv");
        assert_eq!(config.native.extra_args, vec!["--mute=yes".to_string()]);

        let err = PlayerConfig::parse_json(r#"{"native": {"command": " "}}"#)
            .unwrap_err();
        assert!(err.to_string().contains("native.command"));
    }

    #[test]
    fn garbage_reports_both_parsers() {
        let err = PlayerConfig::parse_from_str("{{ nope", "test").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("toml error"));
        assert!(message.contains("json error"));
    }
}
