//! Rasterizing recorded frames and saving them as PNG files.

use crate::draw::{CairoCanvas, Frame};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default file name template for exported frames (chrono format specifiers).
pub const DEFAULT_FILENAME_TEMPLATE: &str = "labels_%Y-%m-%d_%H%M%S";

/// Errors that can occur while exporting a frame.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Failed to encode PNG: {0}")]
    Png(#[from] cairo::IoError),

    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid surface size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
/// * `format` - File extension (e.g., "png")
pub fn generate_filename(template: &str, format: &str) -> String {
    let now = Local::now();
    let filename = now.format(template).to_string();
    format!("{}.{}", filename, format)
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<(), RenderError> {
    if !directory.as_os_str().is_empty() && !directory.exists() {
        log::info!("Creating output directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }
    Ok(())
}

/// Replays `frame` onto a fresh ARGB surface of the given size.
pub fn render_surface(
    frame: &Frame,
    width: u32,
    height: u32,
) -> Result<cairo::ImageSurface, RenderError> {
    let (w, h) = match (i32::try_from(width), i32::try_from(height)) {
        (Ok(w), Ok(h)) if w > 0 && h > 0 => (w, h),
        _ => return Err(RenderError::InvalidSize { width, height }),
    };

    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, w, h)?;
    {
        let ctx = cairo::Context::new(&surface)?;
        frame.replay(&mut CairoCanvas::new(&ctx));
    }
    surface.flush();

    Ok(surface)
}

/// Rasterizes `frame` and writes it to `path` as a PNG image.
///
/// Parent directories are created as needed.
pub fn save_png(
    frame: &Frame,
    width: u32,
    height: u32,
    path: &Path,
) -> Result<PathBuf, RenderError> {
    let surface = render_surface(frame, width, height)?;

    if let Some(parent) = path.parent() {
        ensure_directory_exists(parent)?;
    }

    let mut file = fs::File::create(path)?;
    surface.write_to_png(&mut file)?;

    log::info!("Saved frame to {}", path.display());
    Ok(path.to_path_buf())
}
