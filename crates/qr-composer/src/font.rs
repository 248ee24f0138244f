//! Caption font discovery.
//!
//! Tries a fixed list of common system font locations. Failure is never
//! fatal: callers degrade by skipping the caption band.

use std::sync::OnceLock;

use ab_glyph::FontVec;

const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

static CAPTION_FONT: OnceLock<Option<FontVec>> = OnceLock::new();

/// The process-wide caption font, loaded on first use.
///
/// Returns `None` when no candidate is present or parsable.
pub fn caption_font() -> Option<&'static FontVec> {
    CAPTION_FONT.get_or_init(load_first_available).as_ref()
}

fn load_first_available() -> Option<FontVec> {
    for path in FONT_CANDIDATES.iter().copied() {
        let Ok(bytes) = std::fs::read(path) else {
            continue;
        };
        match FontVec::try_from_vec(bytes) {
            Ok(font) => {
                tracing::debug!(path, "Caption font loaded");
                return Some(font);
            }
            Err(e) => tracing::debug!(path, error = %e, "Font file unparsable"),
        }
    }
    tracing::warn!("No caption font available; captions will be skipped");
    None
}
