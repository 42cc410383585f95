use image::{Rgba, RgbaImage};
use std::path::Path;
use stripe_effect::{Effect, ImageEffect, InvertBandsConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    let mut img = RgbaImage::from_fn(320, 240, |x, y| {
        Rgba([(x * 255 / 319) as u8, (y * 255 / 239) as u8, 128, 255])
    });

    let effect = ImageEffect::InvertBands(InvertBandsConfig::new().with_band_height(10));
    effect.apply(&mut img)?;

    img.save(output_dir.join("invert_bands_effect.png"))?;

    println!("✓ Invert bands effect applied successfully!");
    println!("  Effect: tmp/invert_bands_effect.png");

    Ok(())
}
