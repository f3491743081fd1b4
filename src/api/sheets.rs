//! Published spreadsheet client.
//!
//! Fetches a worksheet as CSV from a spreadsheet export URL, for example
//! `https://docs.google.com/spreadsheets/d/<id>/gviz/tq?tqx=out:csv`. The
//! worksheet name is passed as the `sheet` query parameter; endpoints that
//! publish a single sheet ignore it.

use super::{parse_csv, SourceError, WorksheetSource};
use crate::libs::config::ConfigModule;
use crate::libs::messages::Message;
use crate::libs::record::RawRow;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// HTTP client for a published spreadsheet.
#[derive(Debug)]
pub struct Sheets {
    client: Client,
    config: SheetsConfig,
}

impl Sheets {
    pub fn new(config: &SheetsConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }
}

impl WorksheetSource for Sheets {
    async fn fetch_rows(&self, worksheet: &str) -> Result<Vec<RawRow>, SourceError> {
        let url = self.config.url.clone();
        tracing::info!(%url, worksheet, "fetching worksheet");

        let response = self
            .client
            .get(&url)
            .query(&[("sheet", worksheet)])
            .send()
            .await
            .map_err(|source| SourceError::Http { url: url.clone(), source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status { url, status });
        }

        let body = response.bytes().await.map_err(|source| SourceError::Http { url, source })?;
        parse_csv(body.as_ref())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SheetsConfig {
    /// CSV export URL of the spreadsheet.
    pub url: String,
}

impl SheetsConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "sheets".to_string(),
            name: "Spreadsheet (HTTP)".to_string(),
        }
    }

    pub fn init(config: &Option<SheetsConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or(Self { url: "".to_string() });

        msg_print!(Message::ConfigModuleSheets);

        Ok(Self {
            url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptSheetsUrl.to_string())
                .default(config.url)
                .interact_text()?,
        })
    }
}
