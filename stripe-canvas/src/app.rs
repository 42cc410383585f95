use crate::{config::Config, controller::ImageController};
use anyhow::{Context, Result};
use image::ImageReader;
use log::info;
use std::path::PathBuf;

pub struct App {
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Load the configured image, draw it, invert its bands and write the
    /// result. Returns the path written.
    pub fn run(&self) -> Result<PathBuf> {
        self.config.validate()?;

        let Config {
            image_path,
            output_path,
            band_height,
            parallel,
        } = &self.config;

        let image = ImageReader::open(image_path)
            .with_context(|| format!("open image {}", image_path.display()))?
            .decode()
            .with_context(|| format!("decode image {}", image_path.display()))?
            .to_rgba8();

        info!(
            "loaded {} ({}x{})",
            image_path.display(),
            image.width(),
            image.height()
        );

        let mut controller = ImageController::new(image)?;
        controller.set_parallel(*parallel);
        controller.draw_original_image();
        controller.draw_modified_image(*band_height)?;

        if let Some(dir) = output_path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("create output directory {}", dir.display()))?;
        }

        controller.canvas().save(output_path)?;
        info!("saved {}", output_path.display());

        Ok(output_path.clone())
    }
}
