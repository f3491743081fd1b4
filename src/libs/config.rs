//! Configuration management for srrview.
//!
//! Settings live in `config.json` inside the per-OS data directory (see
//! [`DataStorage`]). A missing file is not an error: every setting has a
//! default except the data source, which `srrview init` asks for.
//!
//! ## Configuration Structure
//!
//! - **sheets**: published spreadsheet CSV endpoint
//! - **file**: local CSV export, takes precedence over `sheets`
//! - **report**: worksheet name, cache TTL, refresh interval, mean policy and
//!   export directory
//!
//! ## Environment Overrides
//!
//! `SRRVIEW_SOURCE_URL` and `SRRVIEW_CSV_PATH` replace the configured source.
//! They are read after `.env` has been loaded by `main`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use srrview::libs::config::Config;
//!
//! let config = Config::read()?;
//! let report = config.report_settings();
//! println!("cache ttl: {}s", report.cache_ttl_secs);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::api::{FileConfig, SheetsConfig};
use crate::libs::aggregate::MeanPolicy;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::PathBuf;
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_WORKSHEET: &str = "Response and Survey Form";
pub const ENV_SOURCE_URL: &str = "SRRVIEW_SOURCE_URL";
pub const ENV_CSV_PATH: &str = "SRRVIEW_CSV_PATH";

#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Report pipeline settings. Keys missing from the file take their defaults.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    /// Worksheet holding the response records.
    pub worksheet: String,
    /// How long a loaded worksheet is reused before fetching again.
    pub cache_ttl_secs: u64,
    /// Period of the automatic refresh in `watch` mode.
    pub refresh_interval_secs: u64,
    /// How missing durations count toward averages.
    pub mean_policy: MeanPolicy,
    /// Where exports go when no output directory is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            worksheet: DEFAULT_WORKSHEET.to_string(),
            cache_ttl_secs: 120,
            refresh_interval_secs: 120,
            mean_policy: MeanPolicy::default(),
            export_dir: None,
        }
    }
}

impl ReportConfig {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheets: Option<SheetsConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<FileConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ReportConfig>,
}

impl Config {
    /// Loads the configuration file, falling back to defaults, and applies
    /// environment overrides.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config = if config_file_path.exists() {
            let config_str = fs::read_to_string(config_file_path)?;
            serde_json::from_str(&config_str)?
        } else {
            Config::default()
        };

        Ok(config.with_env_overrides())
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` when there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Report settings, or their defaults when the section is absent.
    pub fn report_settings(&self) -> ReportConfig {
        self.report.clone().unwrap_or_default()
    }

    fn with_env_overrides(mut self) -> Self {
        if let Some(url) = env::var(ENV_SOURCE_URL).ok().filter(|url| !url.is_empty()) {
            self.sheets = Some(SheetsConfig { url });
            self.file = None;
        }
        if let Some(path) = env::var(ENV_CSV_PATH).ok().filter(|path| !path.is_empty()) {
            self.file = Some(FileConfig { path: PathBuf::from(path) });
        }
        self
    }

    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let node_descriptions = vec![
            SheetsConfig::module(),
            FileConfig::module(),
            ConfigModule {
                key: "report".to_string(),
                name: "Report".to_string(),
            },
        ];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "sheets" => config.sheets = Some(SheetsConfig::init(&config.sheets)?),
                "file" => config.file = Some(FileConfig::init(&config.file)?),
                "report" => {
                    let default = config.report_settings();
                    msg_print!(Message::ConfigModuleReport);

                    let policies = [MeanPolicy::ZeroFill, MeanPolicy::ExcludeMissing];
                    let default_policy = policies.iter().position(|policy| *policy == default.mean_policy).unwrap_or(0);

                    config.report = Some(ReportConfig {
                        worksheet: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptWorksheet.to_string())
                            .default(default.worksheet)
                            .interact_text()?,
                        cache_ttl_secs: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptCacheTtl.to_string())
                            .default(default.cache_ttl_secs)
                            .interact_text()?,
                        refresh_interval_secs: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptRefreshInterval.to_string())
                            .default(default.refresh_interval_secs)
                            .interact_text()?,
                        mean_policy: policies[Select::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptMeanPolicy.to_string())
                            .items(&policies.iter().map(|policy| policy.to_string()).collect::<Vec<_>>())
                            .default(default_policy)
                            .interact()?],
                        export_dir: default.export_dir,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
