use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    budget::BudgetThresholds,
    currency::{CurrencyCode, LocaleConfig},
    errors::{LedgerError, Result},
    utils::{app_data_dir, config_file_in, ensure_dir},
};

const TMP_SUFFIX: &str = "tmp";
const DEFAULT_BUDGET_LIMIT: u64 = 5_000_000;

/// Colour scheme selected by the user.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub locale: LocaleConfig,
    #[serde(default)]
    pub currency: CurrencyCode,
    #[serde(default)]
    pub theme: Theme,
    /// Monthly spending limit in whole currency units.
    #[serde(default = "default_budget_limit")]
    pub budget_limit: u64,
    #[serde(default)]
    pub thresholds: BudgetThresholds,
}

fn default_budget_limit() -> u64 {
    DEFAULT_BUDGET_LIMIT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: LocaleConfig::default(),
            currency: CurrencyCode::default(),
            theme: Theme::default(),
            budget_limit: DEFAULT_BUDGET_LIMIT,
            thresholds: BudgetThresholds::default(),
        }
    }
}

impl Config {
    /// Checks values that would otherwise surface later as query errors.
    pub fn validate(&self) -> Result<()> {
        if self.budget_limit == 0 {
            return Err(LedgerError::InvalidInput(
                "budget_limit must be greater than zero".into(),
            ));
        }
        let BudgetThresholds {
            caution_percent,
            critical_percent,
        } = self.thresholds;
        if !(caution_percent.is_finite() && critical_percent.is_finite())
            || caution_percent < 0.0
            || caution_percent > critical_percent
        {
            return Err(LedgerError::InvalidInput(format!(
                "invalid budget thresholds: caution {caution_percent}, critical {critical_percent}"
            )));
        }
        Ok(())
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        Ok(Self {
            path: config_file_in(&base),
        })
    }

    /// Reads the stored configuration, falling back to defaults when none exists.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file; using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&data)?;
        config.validate()?;
        tracing::info!(path = %self.path.display(), theme = ?config.theme, "configuration loaded");
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        config.validate()?;
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    /// Flips the stored theme and persists it, returning the new value.
    pub fn toggle_theme(&self) -> Result<Theme> {
        let mut config = self.load()?;
        config.theme = config.theme.toggle();
        self.save(&config)?;
        Ok(config.theme)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
