//! Badge image composition: name normalization, QR symbol rendering,
//! centered logo overlay, and caption band.

pub mod colors;
pub mod compose;
pub mod font;
pub mod normalize;
pub mod qr;
pub mod text;

// Re-exports for convenience
pub use colors::{BACKGROUND_COLORS, background_rgba, is_allowed_color};
pub use compose::{ComposeError, StyleOptions, compose};
pub use normalize::normalize;

/// Pixel size of one QR module.
pub const MODULE_PIXELS: u32 = 15;

/// Quiet-zone width around the symbol, in modules.
pub const QUIET_ZONE_MODULES: u32 = 5;

/// Maximum logo side as a fraction of the QR raster width.
pub const LOGO_RATIO: f32 = 0.25;
