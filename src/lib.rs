pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::cli::LocalStorage;

pub use crate::core::engine::SyncEngine;
pub use crate::core::format::{export_file_name, format_as_text};
pub use crate::core::parser::{classify, parse};
pub use crate::core::pipeline::SheetSyncPipeline;
pub use crate::core::selection::Selection;
pub use crate::core::summary::{summarize, AggregatorConfig};
pub use crate::domain::model::{Member, Restriction, Roster, Severity, Summary};
pub use crate::utils::error::{Result, SyncError};
