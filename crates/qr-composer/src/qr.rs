//! QR symbol rendering.

use image::{Rgba, RgbaImage};
use qrcode::{EcLevel, QrCode};

use crate::{MODULE_PIXELS, QUIET_ZONE_MODULES};

#[derive(Debug, thiserror::Error)]
pub enum QrError {
    #[error("QR encode error: {0}")]
    Encode(#[from] qrcode::types::QrError),
}

/// Render `payload` as a QR raster at the highest error-correction level.
///
/// Level H keeps the symbol scannable with a centered logo occluding part
/// of it. Modules are `MODULE_PIXELS` wide with a `QUIET_ZONE_MODULES`
/// border on every side; dark modules are black, light modules take the
/// background color.
pub fn render_qr(payload: &str, background: Rgba<u8>) -> Result<RgbaImage, QrError> {
    let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::H)?;
    let modules = code.to_colors();
    let module_count = code.width() as u32;

    let size = (module_count + 2 * QUIET_ZONE_MODULES) * MODULE_PIXELS;
    let mut img = RgbaImage::from_pixel(size, size, background);
    let offset = QUIET_ZONE_MODULES * MODULE_PIXELS;
    let dark = Rgba([0u8, 0, 0, 255]);

    for (i, color) in modules.iter().enumerate() {
        let x = (i as u32) % module_count;
        let y = (i as u32) / module_count;

        if *color == qrcode::Color::Dark {
            for dx in 0..MODULE_PIXELS {
                for dy in 0..MODULE_PIXELS {
                    img.put_pixel(
                        offset + x * MODULE_PIXELS + dx,
                        offset + y * MODULE_PIXELS + dy,
                        dark,
                    );
                }
            }
        }
    }

    Ok(img)
}
