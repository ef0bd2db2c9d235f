//! GGUF export engine
//!
//! Converts a safetensors weights file into a single GGUF artifact that
//! on-device runtimes load directly. The artifact records the input
//! resolution and static-shape contract in its metadata.

use edgeport_core::{export_artifact_path, Error, Precision, Result};
use std::path::{Path, PathBuf};

#[cfg(feature = "gguf-export")]
use candle_core::quantized::{gguf_file, GgmlDType, QTensor};
#[cfg(feature = "gguf-export")]
use candle_core::Device;
#[cfg(feature = "gguf-export")]
use edgeport_core::MODEL_STEM;

/// Configuration for a single export run
#[derive(Debug, Clone)]
pub struct ExportRequest {
    /// Square input resolution the artifact is built for
    pub image_size: u32,

    /// Weight precision of the artifact
    pub precision: Precision,

    /// Fixed input tensor size; on-device runtimes do not resize graphs
    pub static_shape: bool,

    /// Directory the artifact tree is written under
    pub output_root: PathBuf,
}

impl Default for ExportRequest {
    fn default() -> Self {
        Self {
            image_size: 640,
            precision: Precision::Float32,
            static_shape: true,
            output_root: PathBuf::from("."),
        }
    }
}

impl ExportRequest {
    /// Set the output root directory
    pub fn with_output_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.output_root = root.into();
        self
    }

    /// Set the artifact precision
    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    /// Set the input resolution
    pub fn with_image_size(mut self, image_size: u32) -> Self {
        self.image_size = image_size;
        self
    }

    /// Path of the artifact this request produces
    pub fn artifact_path(&self) -> PathBuf {
        self.output_root.join(export_artifact_path(self.precision))
    }
}

/// Converts safetensors weights into GGUF artifacts
pub struct Exporter;

impl Exporter {
    /// Create a new exporter
    pub fn new() -> Self {
        Self
    }

    /// Export `weights` according to `request`, returning the artifact path
    pub fn export(&self, weights: &Path, request: &ExportRequest) -> Result<PathBuf> {
        #[cfg(feature = "gguf-export")]
        {
            tracing::info!("Loading weights from {}", weights.display());

            let tensors = candle_core::safetensors::load(weights, &Device::Cpu)
                .map_err(|e| Error::export(format!("failed to load weights: {}", e)))?;

            if tensors.is_empty() {
                return Err(Error::export("weights file contains no tensors"));
            }

            let ggml_dtype = match request.precision {
                Precision::Float32 => GgmlDType::F32,
                Precision::Float16 => GgmlDType::F16,
            };

            // Deterministic tensor order
            let mut names: Vec<&String> = tensors.keys().collect();
            names.sort();

            let mut converted: Vec<(String, QTensor)> = Vec::with_capacity(names.len());
            for name in names {
                let qtensor = QTensor::quantize(&tensors[name], ggml_dtype).map_err(|e| {
                    Error::export(format!("failed to convert tensor '{}': {}", name, e))
                })?;
                converted.push((name.clone(), qtensor));
            }

            let artifact = request.artifact_path();
            if let Some(parent) = artifact.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let metadata = self.metadata(request);
            let metadata_refs: Vec<(&str, &gguf_file::Value)> =
                metadata.iter().map(|(key, value)| (*key, value)).collect();
            let tensor_refs: Vec<(&str, &QTensor)> = converted
                .iter()
                .map(|(name, qtensor)| (name.as_str(), qtensor))
                .collect();

            let mut file = std::fs::File::create(&artifact)?;
            gguf_file::write(&mut file, metadata_refs.as_slice(), &tensor_refs)
                .map_err(|e| Error::export(format!("failed to write GGUF: {}", e)))?;

            tracing::info!(
                "Wrote {} tensors to {}",
                tensor_refs.len(),
                artifact.display()
            );
            Ok(artifact)
        }

        #[cfg(not(feature = "gguf-export"))]
        {
            let _ = (weights, request);
            Err(Error::unsupported(
                "GGUF export requires the 'gguf-export' feature; \
                 rebuild with --features gguf-export",
            ))
        }
    }

    /// Artifact metadata recording the export contract
    #[cfg(feature = "gguf-export")]
    fn metadata(&self, request: &ExportRequest) -> Vec<(&'static str, gguf_file::Value)> {
        vec![
            (
                "general.name",
                gguf_file::Value::String(MODEL_STEM.to_string()),
            ),
            (
                "general.architecture",
                gguf_file::Value::String("yolov8".to_string()),
            ),
            (
                "general.file_type",
                gguf_file::Value::U32(request.precision.file_type()),
            ),
            (
                "yolov8.input_size",
                gguf_file::Value::U32(request.image_size),
            ),
            (
                "yolov8.static_shape",
                gguf_file::Value::Bool(request.static_shape),
            ),
        ]
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new()
    }
}
