use clap::Parser;
use edgeport_cli::cli::Cli;
use edgeport_cli::run;
use edgeport_core::Error;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    info!("Starting edgeport");

    match run(&cli) {
        Ok(report) => println!("{}", report),
        Err(Error::Unsupported(_)) => {
            eprintln!("Error: GGUF export support is not compiled into this build");
            eprintln!("Rebuild with: cargo build -p edgeport-cli --features gguf-export");
        }
        Err(e) => eprintln!("Export failed: {}", e),
    }

    Ok(())
}

/// Initialize tracing/logging
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("edgeport_cli=debug,edgeport_export=debug,edgeport_core=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
