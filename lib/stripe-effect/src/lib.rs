//! Striped color inversion for RGBA images.
//!
//! The core is [`bands::invert_bands`], which walks a raw RGBA buffer and
//! inverts the color channels of every row that falls in the second half of
//! a `2 * band_height` period. [`ImageEffect`] wraps it for `RgbaImage`.

pub mod bands;
pub mod base_effect;

pub use bands::{invert_bands, invert_bands_par, is_inverted_row};
pub use base_effect::{InvertBandsConfig, invert};

use image::RgbaImage;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(
        "Invalid dimensions: width={width}, height={height}, band_height={band_height}, buffer length={len}"
    )]
    InvalidDimensions {
        width: u32,
        height: u32,
        band_height: u32,
        len: usize,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub trait Effect {
    fn apply(&self, image: &mut RgbaImage) -> Result<()>;
}

#[derive(Debug, Clone)]
pub enum ImageEffect {
    Invert,
    InvertBands(InvertBandsConfig),
}

impl Effect for ImageEffect {
    fn apply(&self, image: &mut RgbaImage) -> Result<()> {
        match self {
            ImageEffect::Invert => invert(image),
            ImageEffect::InvertBands(config) => config.apply(image),
        }
    }
}
