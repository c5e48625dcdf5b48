// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_VERSION: i64 = 1;
const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
const APP_DIR_NAME: &str = "repboard";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub api: Api,
    #[serde(default)]
    pub ui: Ui,
    #[serde(default)]
    pub assistant: Assistant,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            api: Api::default(),
            ui: Ui::default(),
            assistant: Assistant::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Api {
    pub base_url: Option<String>,
    pub timeout: Option<String>,
}

impl Default for Api {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Some("30s".to_owned()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ui {
    pub show_summary: Option<bool>,
}

impl Default for Ui {
    fn default() -> Self {
        Self {
            show_summary: Some(true),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Assistant {
    pub enabled: Option<bool>,
    pub clear_input_on_submit: Option<bool>,
}

impl Default for Assistant {
    fn default() -> Self {
        Self {
            enabled: Some(true),
            clear_input_on_submit: Some(false),
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("REPBOARD_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set REPBOARD_CONFIG_PATH to the config file")
        })?;

        let app_dir = config_root.join(APP_DIR_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` and keep values under [api], [ui], and [assistant]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if let Some(base_url) = &self.api.base_url
            && base_url.trim().is_empty()
        {
            bail!("api.base_url in {} must not be empty", path.display());
        }

        if let Some(timeout) = &self.api.timeout {
            let parsed = parse_duration(timeout)?;
            if parsed <= Duration::ZERO {
                bail!(
                    "api.timeout in {} must be positive, got {}",
                    path.display(),
                    timeout
                );
            }
        }

        Ok(())
    }

    /// Config wins over the environment; the environment wins over the
    /// built-in default.
    pub fn api_base_url(&self) -> String {
        if let Some(base_url) = &self.api.base_url {
            return base_url.trim_end_matches('/').to_owned();
        }
        if let Ok(from_env) = env::var("REPBOARD_API_URL") {
            return from_env.trim_end_matches('/').to_owned();
        }
        DEFAULT_API_BASE_URL.to_owned()
    }

    pub fn api_timeout(&self) -> Result<Duration> {
        parse_duration(self.api.timeout.as_deref().unwrap_or("30s"))
    }

    pub fn show_summary(&self) -> bool {
        self.ui.show_summary.unwrap_or(true)
    }

    pub fn assistant_enabled(&self) -> bool {
        self.assistant.enabled.unwrap_or(true)
    }

    pub fn clear_input_on_submit(&self) -> bool {
        self.assistant.clear_input_on_submit.unwrap_or(false)
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# repboard config\n# Place this file at: {}\n\nversion = 1\n\n[api]\n# Dashboard API serving /api/sales-reps and /api/ai\nbase_url = \"{}\"\ntimeout = \"30s\"\n\n[ui]\nshow_summary = true\n\n[assistant]\nenabled = true\nclear_input_on_submit = false\n",
            path.display(),
            DEFAULT_API_BASE_URL,
        )
    }
}

fn parse_duration(raw: &str) -> Result<Duration> {
    if let Some(value) = raw.strip_suffix("ms") {
        let millis: u64 = value
            .parse()
            .with_context(|| format!("invalid timeout duration {raw:?}"))?;
        return Ok(Duration::from_millis(millis));
    }
    if let Some(value) = raw.strip_suffix('s') {
        let secs: u64 = value
            .parse()
            .with_context(|| format!("invalid timeout duration {raw:?}"))?;
        return Ok(Duration::from_secs(secs));
    }
    if let Some(value) = raw.strip_suffix('m') {
        let mins: u64 = value
            .parse()
            .with_context(|| format!("invalid timeout duration {raw:?}"))?;
        return Ok(Duration::from_secs(mins * 60));
    }

    bail!("invalid duration {raw:?}; use one of: <N>ms, <N>s, <N>m (for example 500ms or 30s)")
}
