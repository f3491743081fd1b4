//! Local CSV export of the response worksheet.
//!
//! Useful offline and in tests. The file holds a single worksheet, so the
//! worksheet name is ignored.

use super::{parse_csv, SourceError, WorksheetSource};
use crate::libs::config::ConfigModule;
use crate::libs::messages::Message;
use crate::libs::record::RawRow;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::PathBuf;

#[derive(Debug)]
pub struct CsvFile {
    path: PathBuf,
}

impl CsvFile {
    pub fn new(config: &FileConfig) -> Self {
        Self { path: config.path.clone() }
    }
}

impl WorksheetSource for CsvFile {
    async fn fetch_rows(&self, _worksheet: &str) -> Result<Vec<RawRow>, SourceError> {
        tracing::info!(path = %self.path.display(), "reading worksheet file");

        let file = File::open(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        parse_csv(file)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FileConfig {
    pub path: PathBuf,
}

impl FileConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "file".to_string(),
            name: "Local CSV file".to_string(),
        }
    }

    pub fn init(config: &Option<FileConfig>) -> Result<Self> {
        let default = config
            .as_ref()
            .map(|config| config.path.display().to_string())
            .unwrap_or_default();

        msg_print!(Message::ConfigModuleFile);

        let path: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptCsvPath.to_string())
            .default(default)
            .interact_text()?;

        Ok(Self { path: PathBuf::from(path) })
    }
}
