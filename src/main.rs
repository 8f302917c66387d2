use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use logosplit::models::{AppConfig, WritePolicy};
use logosplit::services::LayerPipeline;

#[derive(Parser)]
#[command(name = "logosplit")]
#[command(about = "Quantize a logo to its brand colors and split it into one layer per color")]
#[command(version)]
struct Cli {
    /// Input image
    #[arg(default_value = "logo.png")]
    input: PathBuf,

    /// YAML configuration file (falls back to $CONFIG_FILE)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for all output files (default: next to the input)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Circle radius of each mark in the SVG layers
    #[arg(short, long)]
    radius: Option<f32>,

    /// Keep going when an output file cannot be written
    #[arg(long)]
    skip_failed_writes: bool,

    /// Re-compress PNG outputs with oxipng
    #[arg(long)]
    optimize: bool,

    /// Log each pipeline stage
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "logosplit=info"
    } else {
        "logosplit=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config_file = cli
        .config
        .clone()
        .or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from));
    let mut config = AppConfig::load(config_file.as_deref())?;

    // Command line wins over the config file
    if let Some(dir) = cli.out_dir {
        config.output.directory = Some(dir);
    }
    if let Some(radius) = cli.radius {
        config.mark_radius = radius;
    }
    if cli.skip_failed_writes {
        config.on_write_error = WritePolicy::Skip;
    }
    if cli.optimize {
        config.optimize_png = true;
    }

    let pipeline = LayerPipeline::new(config)?;
    let report = pipeline.run(&cli.input)?;

    for layer in &report.layers {
        if layer.svg.is_written() && layer.png.is_written() {
            println!(
                "Files created for color {} ({}): {} and {}",
                layer.name,
                layer.color,
                layer.svg.path.display(),
                layer.png.path.display()
            );
        }
    }

    let failures = report.failures();
    if !failures.is_empty() {
        for failed in &failures {
            eprintln!("Not written: {}", failed.path.display());
        }
        anyhow::bail!("{} output file(s) could not be written", failures.len());
    }

    Ok(())
}
