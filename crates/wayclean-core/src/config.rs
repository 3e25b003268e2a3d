use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::MirrorError;

/// Global configuration loaded from `~/.config/wayclean/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MirrorConfig {
    /// Host of the original (archived) documentation site, e.g. `help.yuibot.app`.
    pub site_host: String,
    /// Host serving archive replays, e.g. `web.archive.org`.
    pub archive_host: String,
    /// Extension (without dot) identifying pages. Matched case-insensitively.
    pub page_extension: String,
    /// Extension (without dot) identifying stylesheets scanned for `url(...)`.
    pub stylesheet_extension: String,
    /// Directory-name suffix marking asset-bundle directories (prune candidates).
    pub asset_dir_suffix: String,
    /// How many prune candidates a dry run lists.
    #[serde(default = "default_dry_run_sample")]
    pub dry_run_sample: usize,
}

fn default_dry_run_sample() -> usize {
    20
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            site_host: "help.yuibot.app".to_string(),
            archive_host: "web.archive.org".to_string(),
            page_extension: "html".to_string(),
            stylesheet_extension: "css".to_string(),
            asset_dir_suffix: "_files".to_string(),
            dry_run_sample: default_dry_run_sample(),
        }
    }
}

impl MirrorConfig {
    /// Rejects values that would make every pattern match nothing (or everything).
    pub fn validate(&self) -> Result<(), MirrorError> {
        let required = [
            ("site_host", &self.site_host),
            ("archive_host", &self.archive_host),
            ("page_extension", &self.page_extension),
            ("stylesheet_extension", &self.stylesheet_extension),
            ("asset_dir_suffix", &self.asset_dir_suffix),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(MirrorError::InvalidConfig(format!("{name} is empty")));
            }
        }
        if self.site_host.contains('/') || self.archive_host.contains('/') {
            return Err(MirrorError::InvalidConfig(
                "hosts must not contain a scheme or path".to_string(),
            ));
        }
        Ok(())
    }

    /// True if `path` has the configured page extension.
    pub fn is_page(&self, path: &Path) -> bool {
        has_extension(path, &self.page_extension)
    }

    /// True if `path` has the configured stylesheet extension.
    pub fn is_stylesheet(&self, path: &Path) -> bool {
        has_extension(path, &self.stylesheet_extension)
    }
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("wayclean")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<MirrorConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = MirrorConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

/// Load configuration from an explicit file (`--config`).
pub fn load_from_path(path: &Path) -> Result<MirrorConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: MirrorConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
