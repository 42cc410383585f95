//! Draws a source image onto a canvas and applies striped inversion to the
//! rendered pixels.

use crate::canvas::Canvas;
use anyhow::Result;
use image::RgbaImage;
use log::{debug, info};

pub struct ImageController {
    image: RgbaImage,
    canvas: Canvas,
    width: u32,
    height: u32,
    parallel: bool,
}

impl ImageController {
    /// Create a controller with a canvas sized to `image`.
    pub fn new(image: RgbaImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        let canvas = Canvas::new(width, height)?;

        Ok(Self {
            image,
            canvas,
            width,
            height,
            parallel: false,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn into_canvas(self) -> Canvas {
        self.canvas
    }

    /// Split rows across the rayon pool for large images.
    pub fn set_parallel(&mut self, parallel: bool) {
        self.parallel = parallel;
    }

    pub fn draw_original_image(&mut self) {
        debug!("draw original {}x{}", self.width, self.height);
        self.canvas.draw_image(&self.image, 0, 0);
    }

    /// Read back the canvas, invert every other band of `band_height` rows
    /// and put the pixels back.
    pub fn draw_modified_image(&mut self, band_height: u32) -> Result<()> {
        let mut image_data = self.canvas.get_image_data(0, 0, self.width, self.height)?;

        let data = &mut image_data.data;
        if self.parallel {
            stripe_effect::invert_bands_par(data, self.width, self.height, band_height)?;
        } else {
            stripe_effect::invert_bands(data, self.width, self.height, band_height)?;
        }

        self.canvas.put_image_data(&image_data, 0, 0)?;
        info!(
            "draw modified {}x{}, band_height={band_height}",
            self.width, self.height
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_draw_original() {
        let img = RgbaImage::from_fn(3, 2, |x, y| Rgba([x as u8, y as u8, 50, 255]));
        let mut controller = ImageController::new(img.clone()).unwrap();
        assert_eq!((controller.width(), controller.height()), (3, 2));

        controller.draw_original_image();
        assert_eq!(controller.canvas().surface(), &img);
    }

    #[test]
    fn test_draw_modified() {
        let img = RgbaImage::from_pixel(2, 4, Rgba([10, 20, 30, 255]));
        let mut controller = ImageController::new(img).unwrap();
        controller.draw_original_image();
        controller.draw_modified_image(1).unwrap();

        let surface = controller.into_canvas().into_surface();
        for y in 0..4 {
            let expected = if y % 2 == 1 {
                Rgba([245, 235, 225, 255])
            } else {
                Rgba([10, 20, 30, 255])
            };
            assert_eq!(surface.get_pixel(0, y), &expected);
            assert_eq!(surface.get_pixel(1, y), &expected);
        }
    }

    #[test]
    fn test_source_image_untouched() {
        let img = RgbaImage::from_pixel(1, 8, Rgba([1, 2, 3, 255]));
        let mut controller = ImageController::new(img.clone()).unwrap();
        controller.draw_original_image();
        controller.draw_modified_image(2).unwrap();

        assert_eq!(controller.image(), &img);
        assert_ne!(controller.canvas().surface(), &img);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let img = RgbaImage::from_fn(4, 700, |x, y| Rgba([x as u8, (y % 256) as u8, 9, 255]));

        let mut seq = ImageController::new(img.clone()).unwrap();
        seq.draw_original_image();
        seq.draw_modified_image(5).unwrap();

        let mut par = ImageController::new(img).unwrap();
        par.set_parallel(true);
        par.draw_original_image();
        par.draw_modified_image(5).unwrap();

        assert_eq!(seq.canvas().surface(), par.canvas().surface());
    }

    #[test]
    fn test_invalid_band_height() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 255]));
        let mut controller = ImageController::new(img.clone()).unwrap();
        controller.draw_original_image();

        let err = controller.draw_modified_image(0).unwrap_err();
        assert!(err.downcast_ref::<stripe_effect::Error>().is_some());
        assert_eq!(controller.canvas().surface(), &img);
    }

    #[test]
    fn test_empty_image() {
        assert!(ImageController::new(RgbaImage::new(0, 0)).is_err());
    }
}
