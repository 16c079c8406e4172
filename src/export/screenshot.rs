//! Backdrop screenshot capture.

use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;

/// Save a backdrop capture to the screenshots directory.
///
/// Creates the screenshots directory if it doesn't exist.
/// Filename is auto-generated with timestamp: `backdrop_YYYYMMDD_HHMMSS.png`
///
/// Returns the path to the saved screenshot.
pub fn save_screenshot(pixels: &[u8], width: u32, height: u32) -> Result<PathBuf> {
    let dir = PathBuf::from("screenshots");
    std::fs::create_dir_all(&dir)?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let filename = format!("backdrop_{}.png", timestamp);
    let path = dir.join(&filename);

    // Pixels are expected in RGBA format
    image::save_buffer(&path, pixels, width, height, image::ColorType::Rgba8)?;

    log::info!("Screenshot saved: {}", path.display());
    Ok(path)
}
