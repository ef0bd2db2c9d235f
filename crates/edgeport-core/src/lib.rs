//! Edgeport Core
//!
//! Shared types for the edgeport export pipeline.
//!
//! This crate provides:
//! - Error types and result handling
//! - Export precision selection
//! - Artifact discovery and the shipping preference policy

pub mod artifact;
pub mod error;
pub mod precision;

pub use artifact::{
    candidate_paths, export_artifact_path, scan_candidates, select_artifact, FoundArtifact,
    ASSET_DESTINATION, CANDIDATE_PATHS, EXPORT_SUBDIR, FULL_PRECISION_MARKER, MODEL_STEM,
};
pub use error::{Error, Result};
pub use precision::Precision;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::artifact::{scan_candidates, select_artifact, FoundArtifact};
    pub use crate::error::{Error, Result};
    pub use crate::precision::Precision;
}
