use crate::{
    Effect, Result,
    bands::{BLUE, GREEN, RED, invert_bands, invert_bands_par},
};
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbaImage;

/// Invert the colors of an image
pub fn invert(image: &mut RgbaImage) -> Result<()> {
    for pixel in image.pixels_mut() {
        pixel[RED] = 255 - pixel[RED];
        pixel[GREEN] = 255 - pixel[GREEN];
        pixel[BLUE] = 255 - pixel[BLUE];
    }

    Ok(())
}

/// Striped inversion configuration
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct InvertBandsConfig {
    #[derivative(Default(value = "4"))]
    pub band_height: u32,

    #[derivative(Default(value = "false"))]
    pub parallel: bool,
}

impl InvertBandsConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Effect for InvertBandsConfig {
    fn apply(&self, image: &mut RgbaImage) -> Result<()> {
        let (width, height) = image.dimensions();

        log::debug!(
            "Inverting bands: {width}x{height}, band_height={}, parallel={}",
            self.band_height,
            self.parallel
        );

        let buffer: &mut [u8] = image;
        if self.parallel {
            invert_bands_par(buffer, width, height, self.band_height)?;
        } else {
            invert_bands(buffer, width, height, self.band_height)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use image::Rgba;

    #[test]
    fn test_invert_keeps_alpha() {
        let mut img = RgbaImage::from_pixel(2, 2, Rgba([0, 100, 255, 7]));
        invert(&mut img).unwrap();
        assert!(img.pixels().all(|p| *p == Rgba([255, 155, 0, 7])));
    }

    #[test]
    fn test_invert_bands_config() {
        let config = InvertBandsConfig::new();
        assert_eq!(config.band_height, 4);
        assert!(!config.parallel);

        let config = config.with_band_height(10).with_parallel(true);
        assert_eq!(config.band_height, 10);
        assert!(config.parallel);
    }

    #[test]
    fn test_invert_bands_default_height() {
        let mut img = RgbaImage::from_pixel(2, 16, Rgba([10, 20, 30, 255]));
        InvertBandsConfig::new().apply(&mut img).unwrap();

        for y in 0..16 {
            let expected = if (4..8).contains(&y) || (12..16).contains(&y) {
                Rgba([245, 235, 225, 255])
            } else {
                Rgba([10, 20, 30, 255])
            };
            assert_eq!(img.get_pixel(1, y), &expected, "row {y}");
        }
    }

    #[test]
    fn test_invert_bands_parallel_image() {
        let mut seq = RgbaImage::from_fn(5, 600, |x, y| Rgba([x as u8, y as u8, 3, 200]));
        let mut par = seq.clone();

        InvertBandsConfig::new().with_band_height(7).apply(&mut seq).unwrap();
        InvertBandsConfig::new()
            .with_band_height(7)
            .with_parallel(true)
            .apply(&mut par)
            .unwrap();

        assert_eq!(seq, par);
    }

    #[test]
    fn test_zero_band_height_rejected() {
        let mut img = RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 4]));
        let err = InvertBandsConfig::new()
            .with_band_height(0)
            .apply(&mut img)
            .unwrap_err();

        assert!(matches!(err, Error::InvalidDimensions { band_height: 0, .. }));
        assert!(img.pixels().all(|p| *p == Rgba([1, 2, 3, 4])));
    }
}
