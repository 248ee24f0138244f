//! QR badge web service.
//!
//! Takes a first and family name, composes a QR badge image, and serves
//! it as a downloadable PNG or an installable offline PWA bundle.

pub mod config;
pub mod handlers;
pub mod pages;
pub mod router;
pub mod state;
