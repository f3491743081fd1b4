//! # srrview - Off-hours Service Request Response Viewer
//!
//! A command-line dashboard over the "Response and Survey Form" worksheet
//! that support teams fill in for every off-hours service request.
//!
//! ## Features
//!
//! - **Loading**: published-spreadsheet CSV or a local CSV export, cached
//!   with a time-to-live
//! - **Filtering**: by service, month, working-hours flag and status
//! - **Reports**: queue listings, response-time averages, cross-tabs and a
//!   ranked SME summary
//! - **Watch Mode**: periodic and manual refresh in the terminal
//! - **Data Export**: any view to CSV, JSON or Excel
//! - **Data Profile**: shape, completeness and numeric summaries
//!
//! ## Usage
//!
//! ```rust,no_run
//! use srrview::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
