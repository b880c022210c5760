#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::excel_migration::DEFAULT_TARGET;
use crate::core::{MigrationSettings, ScanSettings};
use crate::utils::error::Result;
use crate::utils::validation::{validate_extension, validate_path, Validate};
use serde::Serialize;
use std::path::{Path, PathBuf};
use toml_config::CodemodsConfig;

pub const DEFAULT_CONFIG_FILE: &str = "codemods.toml";
pub const DEFAULT_ROOT: &str = "src";
pub const DEFAULT_EXTENSION: &str = ".ts";
pub const DEFAULT_EXCLUDE: &str = ".spec.ts";

/// Loads `explicit` if given, otherwise `codemods.toml` in the working
/// directory when it exists.
pub fn load_config_file(explicit: Option<&str>) -> Result<Option<CodemodsConfig>> {
    match explicit {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            CodemodsConfig::from_file(path).map(Some)
        }
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            tracing::info!("📁 Loading configuration from: {}", DEFAULT_CONFIG_FILE);
            CodemodsConfig::from_file(DEFAULT_CONFIG_FILE).map(Some)
        }
        None => Ok(None),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanConfig {
    pub root: PathBuf,
    pub extension: String,
    pub exclude: String,
    pub dry_run: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            extension: DEFAULT_EXTENSION.to_string(),
            exclude: DEFAULT_EXCLUDE.to_string(),
            dry_run: false,
        }
    }
}

impl ScanConfig {
    pub fn with_file(mut self, file: &CodemodsConfig) -> Self {
        if let Some(section) = &file.bulk_fix {
            if let Some(root) = &section.root {
                self.root = PathBuf::from(root);
            }
            if let Some(extension) = &section.extension {
                self.extension = extension.clone();
            }
            if let Some(exclude) = &section.exclude {
                self.exclude = exclude.clone();
            }
        }
        self
    }
}

impl Validate for ScanConfig {
    fn validate(&self) -> Result<()> {
        validate_path("root", &self.root.to_string_lossy())?;
        validate_extension("extension", &self.extension)?;
        Ok(())
    }
}

impl ScanSettings for ScanConfig {
    fn root(&self) -> &Path {
        &self.root
    }

    fn extension(&self) -> &str {
        &self.extension
    }

    fn exclude(&self) -> &str {
        &self.exclude
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrateConfig {
    pub file: PathBuf,
    pub dry_run: bool,
}

impl Default for MigrateConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_TARGET),
            dry_run: false,
        }
    }
}

impl MigrateConfig {
    pub fn with_file(mut self, file: &CodemodsConfig) -> Self {
        if let Some(target) = file.migrate_excel.as_ref().and_then(|s| s.file.as_ref()) {
            self.file = PathBuf::from(target);
        }
        self
    }
}

impl Validate for MigrateConfig {
    fn validate(&self) -> Result<()> {
        validate_path("file", &self.file.to_string_lossy())
    }
}

impl MigrationSettings for MigrateConfig {
    fn target_file(&self) -> &Path {
        &self.file
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml_config::{BulkFixSection, MigrateExcelSection};

    #[test]
    fn test_defaults_match_backend_layout() {
        let scan = ScanConfig::default();
        assert_eq!(scan.root, PathBuf::from("src"));
        assert_eq!(scan.extension, ".ts");
        assert_eq!(scan.exclude, ".spec.ts");
        assert!(!scan.dry_run);

        assert_eq!(
            MigrateConfig::default().file,
            PathBuf::from("src/modules/reports/services/excel-export.service.ts")
        );
    }

    #[test]
    fn test_file_overrides_only_given_fields() {
        let file = CodemodsConfig {
            bulk_fix: Some(BulkFixSection {
                root: Some("api/src".to_string()),
                ..Default::default()
            }),
            migrate_excel: Some(MigrateExcelSection {
                file: Some("api/src/excel.ts".to_string()),
            }),
        };

        let scan = ScanConfig::default().with_file(&file);
        assert_eq!(scan.root, PathBuf::from("api/src"));
        assert_eq!(scan.extension, ".ts");

        let migrate = MigrateConfig::default().with_file(&file);
        assert_eq!(migrate.file, PathBuf::from("api/src/excel.ts"));
    }

    #[test]
    fn test_scan_config_validation() {
        assert!(ScanConfig::default().validate().is_ok());

        let bad = ScanConfig {
            extension: "ts".to_string(),
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        assert!(load_config_file(Some("no/such/codemods.toml")).is_err());
    }
}
