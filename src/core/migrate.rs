use crate::core::excel_migration::migration_rules;
use crate::core::rules::RuleSet;
use crate::core::{FileOutcome, MigrationSettings, SourceStore};
use crate::utils::error::Result;

pub struct ExcelMigrator<S: SourceStore, C: MigrationSettings> {
    store: S,
    settings: C,
    rules: RuleSet,
}

impl<S: SourceStore, C: MigrationSettings> ExcelMigrator<S, C> {
    pub fn new(store: S, settings: C) -> Result<Self> {
        Ok(Self {
            store,
            settings,
            rules: migration_rules()?,
        })
    }

    /// Rewrites the target file. The result is written back even when no rule
    /// matched; only a dry run skips the write.
    pub fn run(&self) -> Result<FileOutcome> {
        let path = self.settings.target_file();
        tracing::info!("Migrating {}", path.display());

        let original = self.store.read_to_string(path)?;
        let migrated = self.rules.apply(&original);
        let changed = migrated != original;

        if !changed {
            tracing::warn!("No xlsx patterns found in {}", path.display());
        }

        let written = !self.settings.dry_run();
        if written {
            self.store.write(path, &migrated)?;
            tracing::debug!("Wrote {} bytes to {}", migrated.len(), path.display());
        } else {
            tracing::info!("Dry run, {} left untouched", path.display());
        }

        Ok(FileOutcome {
            path: path.to_path_buf(),
            changed,
            written,
        })
    }
}
