use super::{load_config_file, MigrateConfig, ScanConfig};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "bulk-fix")]
#[command(about = "Replace string literals with enum references across the backend sources")]
pub struct BulkFixArgs {
    /// Directory to scan (default: src)
    #[arg(long)]
    pub root: Option<String>,

    /// File name suffix to process (default: .ts)
    #[arg(long)]
    pub extension: Option<String>,

    /// Skip files whose path contains this (default: .spec.ts)
    #[arg(long)]
    pub exclude: Option<String>,

    /// Path to TOML configuration file (default: codemods.toml if present)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Report what would change without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Print the run report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl BulkFixArgs {
    /// Flags override the config file, which overrides the defaults.
    pub fn scan_config(&self) -> Result<ScanConfig> {
        let mut config = ScanConfig::default();
        if let Some(file) = load_config_file(self.config.as_deref())? {
            config = config.with_file(&file);
        }

        if let Some(root) = &self.root {
            config.root = root.into();
        }
        if let Some(extension) = &self.extension {
            config.extension = extension.clone();
        }
        if let Some(exclude) = &self.exclude {
            config.exclude = exclude.clone();
        }
        config.dry_run = self.dry_run;

        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "migrate-excel")]
#[command(about = "Convert the excel export service from xlsx to exceljs")]
pub struct MigrateExcelArgs {
    /// File to migrate (default: src/modules/reports/services/excel-export.service.ts)
    #[arg(long)]
    pub file: Option<String>,

    /// Path to TOML configuration file (default: codemods.toml if present)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Report whether the file would change without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl MigrateExcelArgs {
    pub fn migrate_config(&self) -> Result<MigrateConfig> {
        let mut config = MigrateConfig::default();
        if let Some(file) = load_config_file(self.config.as_deref())? {
            config = config.with_file(&file);
        }

        if let Some(target) = &self.file {
            config.file = target.into();
        }
        config.dry_run = self.dry_run;

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    #[test]
    fn test_bulk_fix_flags_override_config_file() {
        let mut config_file = NamedTempFile::new().unwrap();
        config_file
            .write_all(b"[bulk_fix]\nroot = \"from-file\"\nexclude = \".test.ts\"\n")
            .unwrap();
        let config_path = config_file.path().to_str().unwrap().to_string();

        let args = BulkFixArgs::parse_from([
            "bulk-fix",
            "--config",
            config_path.as_str(),
            "--root",
            "from-flag",
            "--dry-run",
        ]);
        let config = args.scan_config().unwrap();

        assert_eq!(config.root, PathBuf::from("from-flag"));
        assert_eq!(config.exclude, ".test.ts");
        assert_eq!(config.extension, ".ts");
        assert!(config.dry_run);
    }

    #[test]
    fn test_bulk_fix_rejects_bad_extension_flag() {
        let args = BulkFixArgs::parse_from([
            "bulk-fix",
            "--config",
            "/dev/null",
            "--extension",
            "ts",
        ]);
        assert!(args.scan_config().is_err());
    }

    #[test]
    fn test_migrate_excel_file_flag() {
        let mut config_file = NamedTempFile::new().unwrap();
        config_file
            .write_all(b"[migrate_excel]\nfile = \"from-file.ts\"\n")
            .unwrap();
        let config_path = config_file.path().to_str().unwrap().to_string();

        let args = MigrateExcelArgs::parse_from(["migrate-excel", "-c", config_path.as_str()]);
        assert_eq!(
            args.migrate_config().unwrap().file,
            PathBuf::from("from-file.ts")
        );

        let args = MigrateExcelArgs::parse_from([
            "migrate-excel",
            "-c",
            config_path.as_str(),
            "--file",
            "flag.ts",
        ]);
        assert_eq!(args.migrate_config().unwrap().file, PathBuf::from("flag.ts"));
    }
}
