use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use stripe_canvas::{App, Config};

#[derive(Parser, Debug)]
#[command(version, about = "Invert alternating horizontal bands of an image")]
struct Args {
    /// Image to load
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Where to write the banded image
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Height in rows of each band
    #[arg(short, long)]
    band_height: Option<u32>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Split rows across threads
    #[arg(short, long)]
    parallel: bool,
}

impl Args {
    fn into_config(self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(input) = self.input {
            config.image_path = input;
        }
        if let Some(output) = self.output {
            config.output_path = output;
        }
        if let Some(band_height) = self.band_height {
            config.band_height = band_height;
        }
        config.parallel |= self.parallel;

        Ok(config)
    }
}

fn main() -> Result<()> {
    stripe_canvas::init_logger();

    let config = Args::parse().into_config()?;
    log::debug!("{config:?}");

    App::new(config).run()?;
    Ok(())
}
