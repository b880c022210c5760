pub mod bulk_fix;
pub mod excel_migration;
pub mod literal_fixes;
pub mod migrate;
pub mod rules;

pub use crate::domain::model::{FileOutcome, RunReport};
pub use crate::domain::ports::{MigrationSettings, ScanSettings, SourceStore};
pub use crate::utils::error::Result;
