use crate::core::literal_fixes::literal_rules;
use crate::core::rules::RuleSet;
use crate::core::{FileOutcome, RunReport, ScanSettings, SourceStore};
use crate::utils::error::{CodemodError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Files under `root` whose name ends with `extension` and whose path does not
/// contain `exclude`. Symlinked directories are not descended into.
pub fn discover_files(root: &Path, extension: &str, exclude: &str) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(CodemodError::InvalidConfigValueError {
            field: "root".to_string(),
            value: root.display().to_string(),
            reason: "Directory does not exist".to_string(),
        });
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();

        // is_file follows symlinks, so linked files are still picked up
        if !path.is_file() {
            continue;
        }

        if !entry.file_name().to_string_lossy().ends_with(extension) {
            continue;
        }

        if !exclude.is_empty() && path.to_string_lossy().contains(exclude) {
            tracing::debug!("Skipping excluded file: {}", path.display());
            continue;
        }

        files.push(path.to_path_buf());
    }

    Ok(files)
}

/// Reads `path`, applies `rules` and writes the result back if it differs.
pub fn fix_file<S: SourceStore>(
    store: &S,
    rules: &RuleSet,
    path: &Path,
    dry_run: bool,
) -> Result<FileOutcome> {
    let original = store.read_to_string(path)?;
    let fixed = rules.apply(&original);
    let changed = fixed != original;

    let written = changed && !dry_run;
    if written {
        store.write(path, &fixed)?;
    }

    Ok(FileOutcome {
        path: path.to_path_buf(),
        changed,
        written,
    })
}

pub struct BulkFixer<S: SourceStore, C: ScanSettings> {
    store: S,
    settings: C,
    rules: RuleSet,
}

impl<S: SourceStore, C: ScanSettings> BulkFixer<S, C> {
    pub fn new(store: S, settings: C) -> Result<Self> {
        Ok(Self {
            store,
            settings,
            rules: literal_rules()?,
        })
    }

    pub fn run(&self) -> Result<RunReport> {
        self.run_with(|_| {})
    }

    /// Calls `on_outcome` for every file as soon as it is processed.
    /// Stops at the first error. Files fixed before it stay fixed.
    pub fn run_with<F>(&self, mut on_outcome: F) -> Result<RunReport>
    where
        F: FnMut(&FileOutcome),
    {
        let root = self.settings.root();
        let dry_run = self.settings.dry_run();

        tracing::info!(
            "Scanning {} for *{} files (excluding '{}')",
            root.display(),
            self.settings.extension(),
            self.settings.exclude()
        );

        let files = discover_files(root, self.settings.extension(), self.settings.exclude())?;
        tracing::debug!("Discovered {} candidate files", files.len());

        let mut report = RunReport::new(root, dry_run);

        for path in files {
            tracing::debug!("Processing {}", path.display());
            let outcome = fix_file(&self.store, &self.rules, &path, dry_run)?;

            if outcome.changed {
                tracing::debug!(written = outcome.written, "Changed: {}", outcome.path.display());
            }

            on_outcome(&outcome);
            report.record(outcome);
        }

        tracing::info!(
            "Scanned {} files, {} changed",
            report.scanned,
            report.changed_count()
        );

        Ok(report)
    }
}
