use crate::utils::error::Result;
use std::path::Path;

/// Text file access used by the codemods. Reads and writes whole files.
pub trait SourceStore {
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn write(&self, path: &Path, contents: &str) -> Result<()>;
}

/// Where the bulk literal replacer looks for files.
pub trait ScanSettings {
    fn root(&self) -> &Path;
    fn extension(&self) -> &str;
    fn exclude(&self) -> &str;
    fn dry_run(&self) -> bool;
}

/// Which file the spreadsheet migration rewrites.
pub trait MigrationSettings {
    fn target_file(&self) -> &Path;
    fn dry_run(&self) -> bool;
}
