pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{BulkFixArgs, MigrateExcelArgs};

pub use adapters::LocalFs;
pub use config::{MigrateConfig, ScanConfig};
pub use crate::core::{bulk_fix::BulkFixer, migrate::ExcelMigrator};
pub use domain::model::{FileOutcome, RunReport};
pub use utils::error::{CodemodError, Result};
