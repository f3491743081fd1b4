//! Core library modules for srrview.
//!
//! The report pipeline runs, per render, through:
//!
//! - [`loader`]: fetch a worksheet (through the TTL [`cache`]) and clean rows
//!   into [`record::ResponseRecord`]s
//! - [`filter`]: equality predicates with the "All" sentinel
//! - [`aggregate`]: group counts, means, cross-tabs and the ranked summary
//! - [`metrics`]: headline cards and display formatting
//! - [`dashboard`]: every view of one render pass as a [`table::Table`]
//!
//! Around it sit [`config`], [`data_storage`], [`messages`], [`view`],
//! [`export`], [`profile`] and the `watch` mode [`scheduler`].

pub mod aggregate;
pub mod cache;
pub mod config;
pub mod dashboard;
pub mod data_storage;
pub mod duration;
pub mod export;
pub mod filter;
pub mod loader;
pub mod messages;
pub mod metrics;
pub mod profile;
pub mod record;
pub mod scheduler;
pub mod table;
pub mod view;
