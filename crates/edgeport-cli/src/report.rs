//! Run outcome reporting

use edgeport_core::artifact::{self, FoundArtifact};
use std::fmt;
use std::path::Path;

/// What a finished run left on disk
#[derive(Debug, Clone)]
pub struct ExportReport {
    /// Candidates that exist, in declaration order
    pub found: Vec<FoundArtifact>,

    /// The artifact the user should ship, if any
    pub selected: Option<FoundArtifact>,
}

impl ExportReport {
    /// Scan the candidate locations under `root` and apply the
    /// shipping preference
    pub fn scan(root: &Path) -> Self {
        let found = artifact::scan_candidates(root);
        let selected = artifact::select_artifact(&found).cloned();
        Self { found, selected }
    }
}

impl fmt::Display for ExportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.found.is_empty() {
            writeln!(f, "✗ No export artifact found")?;
            write!(f, "Check that the export step completed successfully")?;
            return Ok(());
        }

        for found in &self.found {
            writeln!(
                f,
                "✓ Found: {} ({:.2} MB)",
                found.path.display(),
                found.size_mb()
            )?;
        }

        if let Some(selected) = &self.selected {
            writeln!(f)?;
            writeln!(f, "Recommended artifact: {}", selected.path.display())?;
            writeln!(f)?;
            writeln!(f, "Copy it into the app assets:")?;
            writeln!(f, "  {}", artifact::ASSET_DESTINATION)?;
            writeln!(f)?;
            writeln!(f, "Suggested command:")?;
            write!(
                f,
                "  cp {} {}",
                selected.path.display(),
                artifact::ASSET_DESTINATION
            )?;
        }

        Ok(())
    }
}
