//! Edgeport CLI
//!
//! Drives the three-step export: acquire the YOLOv8n weights, convert them
//! to a GGUF artifact, and scan for the file to ship to the mobile app.

pub mod cli;
pub mod report;

use crate::cli::Cli;
use crate::report::ExportReport;
use edgeport_core::{Precision, Result};
use edgeport_export::{ExportRequest, Exporter, ModelConfig, WeightsFetcher};
use tracing::info;

/// Run the full export and scan for the produced artifacts
pub fn run(cli: &Cli) -> Result<ExportReport> {
    let config = model_config(cli)?;

    info!("Loading {} weights", config.name);
    let fetcher = WeightsFetcher::new();
    let weights = fetcher.resolve(&config)?;

    info!("Exporting to GGUF");
    let request = ExportRequest::default()
        .with_output_root(&cli.output_dir)
        .with_image_size(cli.image_size)
        .with_precision(if cli.half {
            Precision::Float16
        } else {
            Precision::Float32
        });

    let artifact = Exporter::new().export(&weights, &request)?;
    info!("Export finished: {}", artifact.display());

    Ok(ExportReport::scan(&cli.output_dir))
}

fn model_config(cli: &Cli) -> Result<ModelConfig> {
    if let Some(weights) = &cli.weights {
        Ok(ModelConfig::from_local(weights))
    } else if let Some(path) = &cli.model_config {
        ModelConfig::from_file(path)
    } else {
        Ok(ModelConfig::default())
    }
}
