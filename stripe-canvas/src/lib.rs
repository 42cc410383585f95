//! Stripe Canvas
//!
//! Loads an image, draws it onto an in-memory canvas and inverts the colors
//! of alternating horizontal bands of the rendered pixels.
//!
//! # Architecture
//! - `config`: TOML configuration with defaults
//! - `canvas`: RGBA drawing surface with image-data access
//! - `controller`: draws the original and the banded image onto a canvas
//! - `app`: load -> draw -> transform -> save

#[macro_use]
extern crate derivative;

pub mod app;
pub mod canvas;
pub mod config;
pub mod controller;

pub use app::App;
pub use canvas::{Canvas, ImageData};
pub use config::Config;
pub use controller::ImageController;

/// Initializes the logger.
///
/// Sets up a custom logger format with timestamp, log level, file name, line number,
/// and log message. Defaults to `info` unless `RUST_LOG` says otherwise.
pub fn init_logger() {
    use std::io::Write;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = chrono::Local::now().format("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
