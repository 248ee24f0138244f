//! Payload-to-raster composition: QR symbol, optional centered logo,
//! optional caption band.

use ab_glyph::PxScale;
use image::imageops::FilterType;
use image::{DynamicImage, Rgba, RgbaImage};

use crate::LOGO_RATIO;
use crate::colors::background_rgba;
use crate::font;
use crate::qr::{self, QrError};
use crate::text;

/// Vertical padding between the QR raster and the caption text.
const CAPTION_PADDING: u32 = 10;

/// Margin below the caption text.
const CAPTION_BOTTOM_MARGIN: u32 = 10;

/// Styling inputs for a composed badge image.
#[derive(Debug, Clone)]
pub struct StyleOptions {
    /// Background color form value; unknown values coerce to white.
    pub bg_color: String,
    pub show_logo: bool,
    /// Caption drawn in a band below the QR raster, when non-empty.
    pub caption: Option<String>,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            bg_color: "white".to_string(),
            show_logo: true,
            caption: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    #[error(transparent)]
    Qr(#[from] QrError),
}

/// Compose the badge raster for `payload`.
///
/// The logo and caption are optional enhancements: an unreadable logo or
/// a missing font is logged and skipped, never an error. Output is fully
/// deterministic for fixed inputs.
pub fn compose(
    payload: &str,
    style: &StyleOptions,
    logo: Option<&[u8]>,
) -> Result<RgbaImage, ComposeError> {
    let background = background_rgba(&style.bg_color);
    let mut img = qr::render_qr(payload, background)?;

    if style.show_logo {
        if let Some(bytes) = logo {
            stamp_logo(&mut img, bytes);
        }
    }

    match style.caption.as_deref() {
        Some(caption) if !caption.is_empty() => Ok(add_caption_band(img, caption, background)),
        _ => Ok(img),
    }
}

/// Downscale the logo to at most `LOGO_RATIO` of the raster width and
/// alpha-composite it at the center.
fn stamp_logo(img: &mut RgbaImage, bytes: &[u8]) {
    let logo = match image::load_from_memory(bytes) {
        Ok(logo) => logo,
        Err(e) => {
            tracing::warn!(error = %e, "Logo unreadable, composing without it");
            return;
        }
    };

    let max_side = ((img.width() as f32) * LOGO_RATIO) as u32;
    let scaled = logo.resize(max_side, max_side, FilterType::Lanczos3);
    let x = (img.width() - scaled.width()) / 2;
    let y = (img.height() - scaled.height()) / 2;
    overlay(img, &scaled, x, y);
}

/// Alpha-composite `top` onto `base` at the given position.
fn overlay(base: &mut RgbaImage, top: &DynamicImage, x: u32, y: u32) {
    let top_rgba = top.to_rgba8();
    for (dx, dy, pixel) in top_rgba.enumerate_pixels() {
        let target_x = x + dx;
        let target_y = y + dy;
        if target_x >= base.width() || target_y >= base.height() {
            continue;
        }
        let alpha = pixel[3] as f32 / 255.0;
        if alpha > 0.99 {
            base.put_pixel(target_x, target_y, *pixel);
        } else if alpha > 0.01 {
            let bg = base.get_pixel(target_x, target_y);
            base.put_pixel(target_x, target_y, blend_pixel(bg, pixel, alpha));
        }
    }
}

fn blend_pixel(bg: &Rgba<u8>, fg: &Rgba<u8>, alpha: f32) -> Rgba<u8> {
    let inv = 1.0 - alpha;
    Rgba([
        (fg[0] as f32 * alpha + bg[0] as f32 * inv) as u8,
        (fg[1] as f32 * alpha + bg[1] as f32 * inv) as u8,
        (fg[2] as f32 * alpha + bg[2] as f32 * inv) as u8,
        255,
    ])
}

/// Extend the raster with a background-colored band and draw the caption
/// centered below the QR. Returns the raster unchanged when no font is
/// available.
fn add_caption_band(qr_img: RgbaImage, caption: &str, background: Rgba<u8>) -> RgbaImage {
    let Some(font) = font::caption_font() else {
        return qr_img;
    };

    let (w, h) = qr_img.dimensions();
    let scale = PxScale::from((w / 15).max(14) as f32);
    let text_h = text::line_height(font, scale);

    let mut banded =
        RgbaImage::from_pixel(w, h + text_h + CAPTION_PADDING + CAPTION_BOTTOM_MARGIN, background);
    image::imageops::replace(&mut banded, &qr_img, 0, 0);

    let text_y = (h + CAPTION_PADDING / 2) as i32;
    text::draw_centered_text(&mut banded, font, scale, text_y, caption, Rgba([0, 0, 0, 255]));
    banded
}
