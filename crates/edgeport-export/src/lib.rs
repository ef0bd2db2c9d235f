//! Edgeport Export
//!
//! Weights acquisition and GGUF export for on-device object detection.
//!
//! The pipeline is three sequential, blocking steps: resolve the weights
//! (downloading from the Hugging Face Hub when they are not already local),
//! convert them to a single GGUF artifact, and let the caller scan for the
//! produced files with `edgeport-core`.
//!
//! GGUF writing requires the `gguf-export` feature (enabled by default);
//! without it the engine reports the capability as unavailable instead of
//! exporting.

pub mod export;
pub mod fetch;
pub mod model_config;

pub use export::{ExportRequest, Exporter};
pub use fetch::WeightsFetcher;
pub use model_config::{ModelConfig, WeightsSource, DEFAULT_REPO, DEFAULT_WEIGHTS};
