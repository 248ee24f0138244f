//! Bundle icon sourcing: configured asset file or generated placeholder.

use std::io::Cursor;
use std::path::PathBuf;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::BundleError;

/// Icon size declared in the manifest.
pub const ICON_SIZE: u32 = 192;

// Placeholder gradient endpoints, theme green to slate.
const GRADIENT_TOP: [u8; 3] = [39, 174, 96];
const GRADIENT_BOTTOM: [u8; 3] = [44, 62, 80];

/// Where the bundle icon comes from.
#[derive(Debug, Clone, Default)]
pub enum IconSource {
    /// Pre-built branded icon on disk.
    File(PathBuf),
    /// Generated gradient placeholder.
    #[default]
    Generated,
}

/// Produce the icon PNG bytes.
///
/// A missing or unreadable configured file falls back to the generated
/// placeholder rather than failing the bundle.
pub fn resolve(source: &IconSource) -> Result<Vec<u8>, BundleError> {
    if let IconSource::File(path) = source {
        match std::fs::read(path) {
            Ok(bytes) => return Ok(bytes),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Icon asset unreadable, using placeholder"
                );
            }
        }
    }
    generated_placeholder()
}

/// 192x192 vertical gradient placeholder, PNG-encoded.
fn generated_placeholder() -> Result<Vec<u8>, BundleError> {
    let mut img = RgbaImage::new(ICON_SIZE, ICON_SIZE);
    for y in 0..ICON_SIZE {
        let t = y as f32 / ICON_SIZE as f32;
        let row = Rgba([
            lerp(GRADIENT_TOP[0], GRADIENT_BOTTOM[0], t),
            lerp(GRADIENT_TOP[1], GRADIENT_BOTTOM[1], t),
            lerp(GRADIENT_TOP[2], GRADIENT_BOTTOM[2], t),
            255,
        ]);
        for x in 0..ICON_SIZE {
            img.put_pixel(x, y, row);
        }
    }

    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round() as u8
}
