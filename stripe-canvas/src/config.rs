use anyhow::{Context, Result, ensure};
use log::debug;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct Config {
    #[derivative(Default(
        value = "PathBuf::from(\"assets/media/images/learn-all-the-canvases.jpg\")"
    ))]
    pub image_path: PathBuf,

    #[derivative(Default(value = "PathBuf::from(\"inverted-bands.png\")"))]
    pub output_path: PathBuf,

    #[derivative(Default(value = "10"))]
    pub band_height: u32,

    pub parallel: bool,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("parse config {}", path.display()))?;

        debug!("config loaded from {}: {config:?}", path.display());
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = toml::to_string_pretty(self)?;
        fs::write(path, text).with_context(|| format!("write config {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.band_height > 0, "band_height must be positive");
        Ok(())
    }
}
