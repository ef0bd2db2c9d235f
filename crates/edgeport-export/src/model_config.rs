//! Model source configuration

use edgeport_core::{Error, Result, MODEL_STEM};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default Hub repository carrying candle-format YOLOv8 weights
pub const DEFAULT_REPO: &str = "lmz/candle-yolo-v8";

/// Default weights filename inside the repository
pub const DEFAULT_WEIGHTS: &str = "yolov8n.safetensors";

/// Description of the model to export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model name
    #[serde(default = "default_name")]
    pub name: String,

    /// Where the weights come from
    pub source: WeightsSource,
}

/// Weights source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WeightsSource {
    /// Load from local filesystem
    Local {
        path: PathBuf,
    },

    /// Download from the Hugging Face Hub
    HuggingFace {
        repo: String,
        #[serde(default = "default_revision")]
        revision: String,
        filename: String,
    },
}

fn default_revision() -> String {
    "main".to_string()
}

fn default_name() -> String {
    MODEL_STEM.to_string()
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            source: WeightsSource::HuggingFace {
                repo: DEFAULT_REPO.to_string(),
                revision: default_revision(),
                filename: DEFAULT_WEIGHTS.to_string(),
            },
        }
    }
}

impl ModelConfig {
    /// Config for weights already present on the local filesystem
    pub fn from_local(path: impl Into<PathBuf>) -> Self {
        Self {
            name: default_name(),
            source: WeightsSource::Local { path: path.into() },
        }
    }

    /// Load a config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        serde_yaml::from_str(&raw)
            .map_err(|e| Error::config(format!("failed to parse model config: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_names_the_fixed_weights() {
        let config = ModelConfig::default();
        assert_eq!(config.name, "yolov8n");
        match config.source {
            WeightsSource::HuggingFace {
                repo,
                revision,
                filename,
            } => {
                assert_eq!(repo, DEFAULT_REPO);
                assert_eq!(revision, "main");
                assert_eq!(filename, DEFAULT_WEIGHTS);
            }
            other => panic!("expected a Hub source, got {:?}", other),
        }
    }

    #[test]
    fn parses_hub_source_yaml() {
        let yaml = r#"
name: "yolov8n"
source:
  type: huggingface
  repo: "lmz/candle-yolo-v8"
  filename: "yolov8n.safetensors"
"#;
        let config: ModelConfig = serde_yaml::from_str(yaml).unwrap();
        match config.source {
            WeightsSource::HuggingFace { revision, .. } => assert_eq!(revision, "main"),
            other => panic!("expected a Hub source, got {:?}", other),
        }
    }

    #[test]
    fn parses_local_source_yaml() {
        let yaml = r#"
source:
  type: local
  path: "./weights/yolov8n.safetensors"
"#;
        let config: ModelConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.name, "yolov8n");
        assert!(matches!(config.source, WeightsSource::Local { .. }));
    }

    #[test]
    fn from_file_reports_parse_failures_as_config_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.yaml");
        std::fs::write(&path, "source: [not, a, mapping]").unwrap();

        let err = ModelConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
