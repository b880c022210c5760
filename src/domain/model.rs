use serde::Serialize;
use std::path::PathBuf;

/// Result of running a rule set over one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub changed: bool,
    pub written: bool,
}

impl FileOutcome {
    /// `Fixed: <path>`, or `Would fix: <path>` in a dry run. None when unchanged.
    pub fn progress_line(&self, dry_run: bool) -> Option<String> {
        if !self.changed {
            return None;
        }
        let verb = if dry_run { "Would fix" } else { "Fixed" };
        Some(format!("{}: {}", verb, self.path.display()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub root: PathBuf,
    pub scanned: usize,
    pub changed: Vec<PathBuf>,
    pub dry_run: bool,
}

impl RunReport {
    pub fn new(root: impl Into<PathBuf>, dry_run: bool) -> Self {
        Self {
            root: root.into(),
            dry_run,
            ..Default::default()
        }
    }

    pub fn record(&mut self, outcome: FileOutcome) {
        self.scanned += 1;
        if outcome.changed {
            self.changed.push(outcome.path);
        }
    }

    pub fn changed_count(&self) -> usize {
        self.changed.len()
    }

    pub fn summary_line(&self) -> String {
        format!("\nTotal files fixed: {}", self.changed_count())
    }
}
