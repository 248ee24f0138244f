//! Installable offline bundle packaging.
//!
//! Builds the four-entry PWA zip (index.html, manifest.json, sw.js,
//! icon.png) entirely in memory, so concurrent requests never share
//! staging paths.

pub mod assets;
pub mod icon;

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

pub use icon::IconSource;

/// Fixed entry names of the bundle.
pub const BUNDLE_ENTRIES: [&str; 4] = ["index.html", "manifest.json", "sw.js", "icon.png"];

#[derive(Debug, thiserror::Error)]
pub enum BundleError {
    #[error("zip write error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("icon encode error: {0}")]
    IconEncode(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Package a composed QR PNG into an installable offline bundle.
///
/// `name` personalizes the page title and the manifest. The PNG is
/// embedded into index.html as a data URI, keeping the archive at its
/// four fixed entries. The archive timestamp is fixed so identical
/// inputs yield identical bytes.
pub fn package(name: &str, png_bytes: &[u8], icon: &IconSource) -> Result<Vec<u8>, BundleError> {
    let icon_png = icon::resolve(icon)?;
    let index_html = assets::render_index(name, png_bytes);
    let manifest = assets::render_manifest(name);

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(zip::DateTime::default());

    writer.start_file("index.html", options)?;
    writer.write_all(index_html.as_bytes())?;
    writer.start_file("manifest.json", options)?;
    writer.write_all(manifest.as_bytes())?;
    writer.start_file("sw.js", options)?;
    writer.write_all(assets::SW_JS.as_bytes())?;
    writer.start_file("icon.png", options)?;
    writer.write_all(&icon_png)?;

    let cursor = writer.finish()?;
    let bytes = cursor.into_inner();
    tracing::debug!(name, bytes = bytes.len(), "Bundle packaged");
    Ok(bytes)
}
