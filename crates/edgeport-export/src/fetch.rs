//! Weights acquisition
//!
//! Resolves a weights source to a local file, downloading from the Hugging
//! Face Hub when the weights are not already on disk. Downloads are mirrored
//! into edgeport's own cache so repeated runs never touch the network.

use crate::model_config::{ModelConfig, WeightsSource};
use edgeport_core::{Error, Result};
use std::path::PathBuf;

/// Resolves model weights to a local path
pub struct WeightsFetcher {
    cache_dir: PathBuf,
}

impl WeightsFetcher {
    /// Create a fetcher caching under `~/.cache/edgeport/models`
    pub fn new() -> Self {
        let cache_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".cache/edgeport/models");

        std::fs::create_dir_all(&cache_dir).ok();

        Self { cache_dir }
    }

    /// Create a fetcher with an explicit cache directory
    pub fn with_cache_dir(cache_dir: impl Into<PathBuf>) -> Self {
        let cache_dir = cache_dir.into();
        std::fs::create_dir_all(&cache_dir).ok();
        Self { cache_dir }
    }

    /// Resolve the weights described by `config` to a local path
    pub fn resolve(&self, config: &ModelConfig) -> Result<PathBuf> {
        match &config.source {
            WeightsSource::Local { path } => {
                if !path.exists() {
                    return Err(Error::fetch(format!(
                        "weights file not found: {}",
                        path.display()
                    )));
                }
                tracing::debug!("using local weights at {}", path.display());
                Ok(path.clone())
            }
            WeightsSource::HuggingFace {
                repo,
                revision,
                filename,
            } => self.download_from_hub(repo, revision, filename),
        }
    }

    /// Download weights from the Hugging Face Hub
    fn download_from_hub(&self, repo: &str, revision: &str, filename: &str) -> Result<PathBuf> {
        #[cfg(feature = "gguf-export")]
        {
            let local = self.cache_dir.join(repo.replace('/', "--")).join(filename);
            if local.exists() {
                tracing::debug!("using cached weights at {}", local.display());
                return Ok(local);
            }

            tracing::info!("Downloading {} from {} @ {}", filename, repo, revision);

            let api = hf_hub::api::sync::Api::new()
                .map_err(|e| Error::fetch(format!("failed to initialize Hub API: {}", e)))?;

            let repo_obj = api.repo(hf_hub::Repo::with_revision(
                repo.to_string(),
                hf_hub::RepoType::Model,
                revision.to_string(),
            ));

            let hub_path = repo_obj
                .get(filename)
                .map_err(|e| Error::fetch(format!("failed to download {}: {}", filename, e)))?;

            // Mirror from the hf cache into our cache
            if let Some(parent) = local.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::copy(&hub_path, &local)?;

            tracing::info!("Weights cached at {}", local.display());
            Ok(local)
        }

        #[cfg(not(feature = "gguf-export"))]
        {
            let _ = (repo, revision, filename);
            Err(Error::unsupported(
                "Hub download requires the 'gguf-export' feature",
            ))
        }
    }
}

impl Default for WeightsFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model_config::ModelConfig;

    #[test]
    fn missing_local_weights_are_a_fetch_error() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = WeightsFetcher::with_cache_dir(dir.path().join("cache"));
        let config = ModelConfig::from_local(dir.path().join("nope.safetensors"));

        let err = fetcher.resolve(&config).unwrap_err();
        assert!(matches!(err, Error::Fetch(_)));
    }

    #[test]
    fn existing_local_weights_resolve_to_their_path() {
        let dir = tempfile::tempdir().unwrap();
        let weights = dir.path().join("yolov8n.safetensors");
        std::fs::write(&weights, b"stub").unwrap();

        let fetcher = WeightsFetcher::with_cache_dir(dir.path().join("cache"));
        let config = ModelConfig::from_local(&weights);

        assert_eq!(fetcher.resolve(&config).unwrap(), weights);
    }

    #[cfg(feature = "gguf-export")]
    #[test]
    fn hub_source_prefers_the_mirror_cache() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("cache");
        let fetcher = WeightsFetcher::with_cache_dir(&cache);

        // Pre-seed the mirror: resolution must not hit the network.
        let mirrored = cache
            .join(crate::model_config::DEFAULT_REPO.replace('/', "--"))
            .join(crate::model_config::DEFAULT_WEIGHTS);
        std::fs::create_dir_all(mirrored.parent().unwrap()).unwrap();
        std::fs::write(&mirrored, b"stub").unwrap();

        let resolved = fetcher.resolve(&ModelConfig::default()).unwrap();
        assert_eq!(resolved, mirrored);
    }
}
