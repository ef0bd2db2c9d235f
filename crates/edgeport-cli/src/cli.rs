use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "edgeport")]
#[command(
    author,
    version,
    about = "Export YOLOv8n weights to GGUF for on-device inference"
)]
pub struct Cli {
    /// Local safetensors weights (skips the Hub download)
    #[arg(short, long)]
    pub weights: Option<PathBuf>,

    /// YAML model config overriding the built-in YOLOv8n source
    #[arg(long)]
    pub model_config: Option<PathBuf>,

    /// Directory the artifact tree is written under
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Square input resolution baked into the artifact
    #[arg(long, default_value = "640")]
    pub image_size: u32,

    /// Write half-precision (float16) weights instead of float32
    #[arg(long)]
    pub half: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
