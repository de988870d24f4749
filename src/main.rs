use std::{
    fs::File,
    io::{self, BufWriter},
    path::PathBuf,
};

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use trisphere::config::{Config, ConfigError, OutputFormat};
use trisphere::raytracer::{Renderer, Scene};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config toml file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Output file, overrides the config one. Defaults to stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Output image format, overrides the config one
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
}

fn main() -> anyhow::Result<()> {
    // Load command line arguments.
    let args = Args::try_parse()?;

    // Initialize logger. Stdout may carry the image, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trisphere=info")),
        )
        .with_writer(io::stderr)
        .init();

    // Load config file if specified, otherwise use default.
    let mut config = match &args.config {
        Some(path) => {
            let config = Config::from_file(path)?;
            info!("Loaded config from '{}'", path.display());
            config
        }
        None => {
            info!("Using default config");
            Config::default()
        }
    };
    if let Some(output) = args.output {
        config.output = Some(output);
    }
    if let Some(format) = args.format {
        config.format = format;
    }
    config.validate()?;

    let camera = config.camera();
    if camera.is_distorted() {
        warn!(
            "Image aspect ratio {:.3} differs from viewport aspect ratio {:.3}, pixels will be stretched",
            camera.image_aspect_ratio(),
            camera.viewport_aspect_ratio()
        );
    }
    let renderer = Renderer::new(Scene::default(), camera);

    match (config.format, &config.output) {
        (OutputFormat::Ppm, Some(path)) => {
            renderer.render(BufWriter::new(File::create(path)?))?;
            info!("Saved render to '{}'", path.display());
        }
        (OutputFormat::Ppm, None) => {
            renderer.render(BufWriter::new(io::stdout().lock()))?;
        }
        (OutputFormat::Png, Some(path)) => {
            renderer.render_image().save_png(path)?;
            info!("Saved render to '{}'", path.display());
        }
        (OutputFormat::Png, None) => return Err(ConfigError::MissingOutput.into()),
    }

    Ok(())
}
