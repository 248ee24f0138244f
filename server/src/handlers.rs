//! Form and badge generation handlers.

use axum::Form;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use qr_composer::{StyleOptions, compose, normalize};

use crate::pages;
use crate::state::SharedState;

/// Form fields for POST /.
#[derive(Debug, Deserialize)]
pub struct BadgeRequest {
    #[serde(default)]
    pub first: String,
    #[serde(default)]
    pub family: String,
    pub bg_color: Option<String>,
    pub show_logo: Option<String>,
    pub action: Option<String>,
}

/// GET / - the badge request form.
pub async fn form_page() -> Html<String> {
    Html(pages::render_form(None))
}

/// GET /healthz
pub async fn healthz() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}

/// POST / - compose the badge and stream it as a PNG or PWA bundle.
pub async fn generate(
    State(state): State<SharedState>,
    Form(req): Form<BadgeRequest>,
) -> Response {
    let first = req.first.trim();
    let family = req.family.trim();
    if first.is_empty() || family.is_empty() {
        return Html(pages::render_form(Some("Both name fields are required."))).into_response();
    }

    let first = normalize(first);
    let family = normalize(family);
    let name = format!("{family}.{first}");

    let style = StyleOptions {
        bg_color: req.bg_color.unwrap_or_else(|| "white".to_string()),
        show_logo: req.show_logo.as_deref().map(|v| v == "true").unwrap_or(true),
        caption: Some(format!("{first} {family}")),
    };

    let img = match compose(&name, &style, state.logo()) {
        Ok(img) => img,
        Err(e) => {
            tracing::error!(error = %e, name, "Badge composition failed");
            return generation_failed();
        }
    };

    let png = match encode_png(&img) {
        Ok(png) => png,
        Err(e) => {
            tracing::error!(error = %e, name, "PNG encoding failed");
            return generation_failed();
        }
    };

    match req.action.as_deref() {
        Some("pwa") => match pwa_bundle::package(&name, &png, &state.icon_source()) {
            Ok(archive) => attachment(archive, "application/zip", &format!("PWA_{name}.zip")),
            Err(e) => {
                tracing::error!(error = %e, name, "Bundle packaging failed");
                generation_failed()
            }
        },
        _ => attachment(png, "image/png", &format!("{name}.png")),
    }
}

fn generation_failed() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "Badge generation failed").into_response()
}

fn encode_png(img: &image::RgbaImage) -> Result<Vec<u8>, image::ImageError> {
    let mut buf = std::io::Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png)?;
    Ok(buf.into_inner())
}

fn attachment(data: Vec<u8>, content_type: &str, filename: &str) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        data,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    use axum::body::to_bytes;
    use zip::ZipArchive;

    use crate::config::AppConfig;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    fn test_state() -> SharedState {
        SharedState::new(AppConfig {
            server_port: 0,
            logo_path: None,
            icon_path: None,
        })
    }

    fn request(first: &str, family: &str, action: &str) -> BadgeRequest {
        BadgeRequest {
            first: first.to_string(),
            family: family.to_string(),
            bg_color: None,
            show_logo: None,
            action: Some(action.to_string()),
        }
    }

    async fn body_bytes(resp: Response) -> Vec<u8> {
        to_bytes(resp.into_body(), usize::MAX).await.unwrap().to_vec()
    }

    fn manifest_of(archive_bytes: Vec<u8>) -> String {
        let mut archive = ZipArchive::new(Cursor::new(archive_bytes)).unwrap();
        let mut entry = archive.by_name("manifest.json").unwrap();
        let mut manifest = String::new();
        entry.read_to_string(&mut manifest).unwrap();
        manifest
    }

    #[tokio::test]
    async fn png_action_returns_named_attachment() {
        let resp = generate(
            State(test_state()),
            Form(request("jean-paul", "o'brien", "png")),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "image/png"
        );
        assert_eq!(
            resp.headers().get(header::CONTENT_DISPOSITION).unwrap(),
            "attachment; filename=\"O'brien.Jean-Paul.png\""
        );
        let body = body_bytes(resp).await;
        assert_eq!(&body[..8], &PNG_MAGIC);
    }

    #[tokio::test]
    async fn empty_family_rerenders_form_with_error() {
        let resp = generate(State(test_state()), Form(request("jean", "   ", "png"))).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().get(header::CONTENT_DISPOSITION).is_none());
        let body = String::from_utf8(body_bytes(resp).await).unwrap();
        assert!(body.contains("<form"));
        assert!(body.contains("Both name fields are required."));
    }

    #[tokio::test]
    async fn pwa_action_returns_zip_bundle() {
        let resp = generate(
            State(test_state()),
            Form(request("jean", "dupont", "pwa")),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/zip"
        );
        assert_eq!(
            resp.headers().get(header::CONTENT_DISPOSITION).unwrap(),
            "attachment; filename=\"PWA_Dupont.Jean.zip\""
        );
        let manifest = manifest_of(body_bytes(resp).await);
        assert!(manifest.contains("Dupont.Jean"));
    }

    #[tokio::test]
    async fn concurrent_bundles_keep_their_own_names() {
        let state = test_state();
        let (a, b) = tokio::join!(
            generate(State(state.clone()), Form(request("anna", "first", "pwa"))),
            generate(State(state.clone()), Form(request("bob", "second", "pwa"))),
        );

        let manifest_a = manifest_of(body_bytes(a).await);
        let manifest_b = manifest_of(body_bytes(b).await);
        assert!(manifest_a.contains("First.Anna"));
        assert!(!manifest_a.contains("Second.Bob"));
        assert!(manifest_b.contains("Second.Bob"));
        assert!(!manifest_b.contains("First.Anna"));
    }

    #[tokio::test]
    async fn unknown_action_defaults_to_png() {
        let resp = generate(
            State(test_state()),
            Form(BadgeRequest {
                first: "jean".to_string(),
                family: "dupont".to_string(),
                bg_color: None,
                show_logo: None,
                action: None,
            }),
        )
        .await;

        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "image/png"
        );
    }

    #[tokio::test]
    async fn unknown_bg_color_is_coerced_not_rejected() {
        let resp = generate(
            State(test_state()),
            Form(BadgeRequest {
                first: "jean".to_string(),
                family: "dupont".to_string(),
                bg_color: Some("#123456".to_string()),
                show_logo: Some("false".to_string()),
                action: Some("png".to_string()),
            }),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_bytes(resp).await;
        assert_eq!(&body[..8], &PNG_MAGIC);
    }
}
