//! Export the default YOLOv8n weights and report the artifact to ship.
//!
//! Run with: cargo run --example export_yolov8n

use edgeport_core::{scan_candidates, select_artifact, ASSET_DESTINATION};
use edgeport_export::{ExportRequest, Exporter, ModelConfig, WeightsFetcher};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("Edgeport Export Example");
    println!("=======================\n");

    let config = ModelConfig::default();
    println!("Fetching weights for '{}'...", config.name);
    let fetcher = WeightsFetcher::new();
    let weights = fetcher.resolve(&config)?;
    println!("✓ Weights at {}\n", weights.display());

    println!("Exporting to GGUF (640x640, float32, static shape)...");
    let artifact = Exporter::new().export(&weights, &ExportRequest::default())?;
    println!("✓ Wrote {}\n", artifact.display());

    let found = scan_candidates(Path::new("."));
    match select_artifact(&found) {
        Some(selected) => {
            println!(
                "Recommended artifact: {} ({:.2} MB)",
                selected.path.display(),
                selected.size_mb()
            );
            println!("Copy it to: {}", ASSET_DESTINATION);
        }
        None => println!("❌ No artifact found after export"),
    }

    Ok(())
}
