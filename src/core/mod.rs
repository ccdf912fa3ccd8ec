pub mod engine;
pub mod format;
pub mod parser;
pub mod pipeline;
pub mod selection;
pub mod summary;

pub use crate::domain::model::{Member, Restriction, Roster, Severity, Summary};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
