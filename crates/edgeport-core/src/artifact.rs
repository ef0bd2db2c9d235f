//! Export artifact discovery and selection
//!
//! The exporter and older tool versions leave their output in a handful of
//! known locations. This module scans those locations and picks the file the
//! user should ship to the mobile app.

use crate::precision::Precision;
use std::path::{Path, PathBuf};

/// Model stem shared by all artifact names
pub const MODEL_STEM: &str = "yolov8n";

/// Directory the export engine writes into, relative to the output root
pub const EXPORT_SUBDIR: &str = "yolov8n_export";

/// Filename substring marking a full-precision artifact
pub const FULL_PRECISION_MARKER: &str = "float32";

/// Where the mobile app expects the exported model
pub const ASSET_DESTINATION: &str = "app/src/main/assets/yolov8n.gguf";

/// Candidate artifact locations, in declaration order.
///
/// The first entry is the legacy flat location; the others are where the
/// current export engine writes its float32 and float16 variants.
pub const CANDIDATE_PATHS: [&str; 3] = [
    "yolov8n.gguf",
    "yolov8n_export/yolov8n_float32.gguf",
    "yolov8n_export/yolov8n_float16.gguf",
];

/// Candidate locations as paths, in declaration order
pub fn candidate_paths() -> impl Iterator<Item = &'static Path> {
    CANDIDATE_PATHS.iter().map(Path::new)
}

/// Relative path the export engine produces for a given precision
pub fn export_artifact_path(precision: Precision) -> PathBuf {
    PathBuf::from(EXPORT_SUBDIR).join(format!("{}_{}.gguf", MODEL_STEM, precision.marker()))
}

/// A candidate that exists on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundArtifact {
    /// Candidate path, relative to the scan root
    pub path: PathBuf,

    /// File size in bytes
    pub size_bytes: u64,
}

impl FoundArtifact {
    /// File size in mebibytes, for reporting
    pub fn size_mb(&self) -> f64 {
        self.size_bytes as f64 / (1024.0 * 1024.0)
    }
}

/// Scan the fixed candidate locations under `root`.
///
/// Returns the candidates that exist as regular files, in declaration order,
/// with their on-disk sizes.
pub fn scan_candidates(root: &Path) -> Vec<FoundArtifact> {
    let mut found = Vec::new();

    for candidate in candidate_paths() {
        let full = root.join(candidate);
        match std::fs::metadata(&full) {
            Ok(meta) if meta.is_file() => {
                tracing::debug!("found artifact candidate: {}", full.display());
                found.push(FoundArtifact {
                    path: candidate.to_path_buf(),
                    size_bytes: meta.len(),
                });
            }
            _ => {}
        }
    }

    found
}

/// Pick the artifact to ship.
///
/// A full-precision artifact wins regardless of its position in the scan;
/// otherwise the first found candidate, in declaration order, is taken.
pub fn select_artifact(found: &[FoundArtifact]) -> Option<&FoundArtifact> {
    found
        .iter()
        .find(|artifact| {
            artifact
                .path
                .to_string_lossy()
                .contains(FULL_PRECISION_MARKER)
        })
        .or_else(|| found.first())
}
