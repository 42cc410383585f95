//! Band inversion over raw RGBA buffers
//!
//! Rows alternate between untouched and inverted bands of `band_height`
//! rows each, starting with an untouched band at row 0.

use crate::{Error, Result};
use rayon::prelude::*;

pub const RED: usize = 0;
pub const GREEN: usize = 1;
pub const BLUE: usize = 2;
pub const ALPHA: usize = 3;
pub const COMPONENTS: usize = 4;

/// Minimum row count before `invert_bands_par` hands rows to rayon.
pub const PARALLEL_THRESHOLD: u32 = 256;

/// Whether row `y` lies in an inverted band.
#[inline]
pub fn is_inverted_row(y: u32, band_height: u32) -> bool {
    let period = band_height as u64 * 2;
    y as u64 % period >= band_height as u64
}

/// Invert the R, G and B channels of every pixel in alternating bands of
/// `band_height` rows. Alpha is left alone.
///
/// The buffer is mutated in place and handed back. On invalid dimensions the
/// buffer is not touched.
///
/// # Example
/// ```
/// let mut buf = vec![10, 20, 30, 255, 10, 20, 30, 255];
/// stripe_effect::invert_bands(&mut buf, 1, 2, 1).unwrap();
/// assert_eq!(buf, [10, 20, 30, 255, 245, 235, 225, 255]);
/// ```
pub fn invert_bands(
    buffer: &mut [u8],
    width: u32,
    height: u32,
    band_height: u32,
) -> Result<&mut [u8]> {
    let row_len = check_dimensions(buffer.len(), width, height, band_height)?;

    log::trace!("invert_bands: {width}x{height}, band_height={band_height}");

    for (y, row) in buffer.chunks_exact_mut(row_len).enumerate() {
        if is_inverted_row(y as u32, band_height) {
            invert_row(row);
        }
    }

    Ok(buffer)
}

/// Same contract and output as [`invert_bands`], with rows split across the
/// rayon pool once the image reaches [`PARALLEL_THRESHOLD`] rows.
pub fn invert_bands_par(
    buffer: &mut [u8],
    width: u32,
    height: u32,
    band_height: u32,
) -> Result<&mut [u8]> {
    if height < PARALLEL_THRESHOLD {
        return invert_bands(buffer, width, height, band_height);
    }

    let row_len = check_dimensions(buffer.len(), width, height, band_height)?;

    log::trace!("invert_bands_par: {width}x{height}, band_height={band_height}");

    buffer
        .par_chunks_exact_mut(row_len)
        .enumerate()
        .filter(|(y, _)| is_inverted_row(*y as u32, band_height))
        .for_each(|(_, row)| invert_row(row));

    Ok(buffer)
}

fn invert_row(row: &mut [u8]) {
    for pixel in row.chunks_exact_mut(COMPONENTS) {
        pixel[RED] = 255 - pixel[RED];
        pixel[GREEN] = 255 - pixel[GREEN];
        pixel[BLUE] = 255 - pixel[BLUE];
    }
}

// Returns the row length in bytes.
fn check_dimensions(len: usize, width: u32, height: u32, band_height: u32) -> Result<usize> {
    let invalid = || Error::InvalidDimensions {
        width,
        height,
        band_height,
        len,
    };

    if width == 0 || height == 0 || band_height == 0 {
        return Err(invalid());
    }

    let row_len = (width as usize)
        .checked_mul(COMPONENTS)
        .ok_or_else(invalid)?;
    let expected = row_len.checked_mul(height as usize).ok_or_else(invalid)?;

    if expected != len {
        return Err(invalid());
    }

    Ok(row_len)
}
