//! In-memory drawing surface
//!
//! Mirrors the small part of a 2D canvas context the controller needs:
//! drawing an image and reading/writing raw RGBA image data.

use anyhow::{Context, Result, bail, ensure};
use image::{RgbaImage, imageops};
use std::path::Path;

/// A rectangular block of RGBA pixels, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct Canvas {
    surface: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        ensure!(
            width > 0 && height > 0,
            "canvas size must be positive, got {width}x{height}"
        );

        Ok(Self {
            surface: RgbaImage::new(width, height),
        })
    }

    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    pub fn surface(&self) -> &RgbaImage {
        &self.surface
    }

    pub fn into_surface(self) -> RgbaImage {
        self.surface
    }

    /// Composite `image` onto the canvas with its top-left corner at `(x, y)`.
    /// Parts falling outside the canvas are clipped.
    pub fn draw_image(&mut self, image: &RgbaImage, x: i64, y: i64) {
        imageops::overlay(&mut self.surface, image, x, y);
    }

    /// Copy a region of the canvas out as raw RGBA data.
    pub fn get_image_data(&self, x: u32, y: u32, width: u32, height: u32) -> Result<ImageData> {
        self.check_region(x, y, width, height)?;

        let row_len = width as usize * 4;
        let mut data = Vec::with_capacity(row_len * height as usize);
        for row in y..y + height {
            let start = self.offset(x, row);
            data.extend_from_slice(&self.surface.as_raw()[start..start + row_len]);
        }

        Ok(ImageData {
            width,
            height,
            data,
        })
    }

    /// Write raw RGBA data back onto the canvas verbatim, no blending.
    pub fn put_image_data(&mut self, image_data: &ImageData, x: u32, y: u32) -> Result<()> {
        let ImageData {
            width,
            height,
            data,
        } = image_data;

        self.check_region(x, y, *width, *height)?;

        let row_len = *width as usize * 4;
        if data.len() != row_len * *height as usize {
            bail!(
                "image data length {} does not match {}x{}",
                data.len(),
                width,
                height
            );
        }

        for (i, src) in data.chunks_exact(row_len).enumerate() {
            let start = self.offset(x, y + i as u32);
            let dst: &mut [u8] = &mut self.surface;
            dst[start..start + row_len].copy_from_slice(src);
        }

        Ok(())
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.surface
            .save(path)
            .with_context(|| format!("save canvas to {}", path.display()))
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.surface.width() as usize + x as usize) * 4
    }

    fn check_region(&self, x: u32, y: u32, width: u32, height: u32) -> Result<()> {
        let fits_x = x.checked_add(width).is_some_and(|r| r <= self.width());
        let fits_y = y.checked_add(height).is_some_and(|b| b <= self.height());

        ensure!(
            width > 0 && height > 0 && fits_x && fits_y,
            "region {width}x{height}+{x}+{y} is outside the {}x{} canvas",
            self.width(),
            self.height()
        );

        Ok(())
    }
}
