//! Static asset templates for the offline bundle.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="fr">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>QR Badge - {{name}}</title>
<link rel="manifest" href="manifest.json">
<meta name="theme-color" content="#27ae60">
<style>
  body { margin: 0; min-height: 100vh; display: flex; align-items: center; justify-content: center; background: #ffffff; }
  img { max-width: 100vw; max-height: 100vh; }
</style>
</head>
<body>
<img src="{{qr}}" alt="QR code {{name}}">
<script>
  if ('serviceWorker' in navigator) {
    navigator.serviceWorker.register('sw.js');
  }
</script>
</body>
</html>
"##;

/// Offline cache worker: pre-cache on install, cache-first with network
/// fallback on fetch, drop stale caches on activate.
pub const SW_JS: &str = r#"const CACHE_NAME = 'qr-badge-v1';
const PRECACHE = ['index.html', 'manifest.json', 'icon.png'];

self.addEventListener('install', event => {
  event.waitUntil(
    caches.open(CACHE_NAME)
      .then(cache => cache.addAll(PRECACHE))
      .then(() => self.skipWaiting())
  );
});

self.addEventListener('activate', event => {
  event.waitUntil(
    caches.keys()
      .then(names => Promise.all(
        names.filter(n => n !== CACHE_NAME).map(n => caches.delete(n))
      ))
      .then(() => self.clients.claim())
  );
});

self.addEventListener('fetch', event => {
  event.respondWith(
    caches.match(event.request).then(hit => hit || fetch(event.request))
  );
});
"#;

/// Render the personalized page with the QR PNG embedded as a data URI.
pub fn render_index(name: &str, png_bytes: &[u8]) -> String {
    let data_uri = format!("data:image/png;base64,{}", STANDARD.encode(png_bytes));
    INDEX_HTML
        .replace("{{name}}", &escape_html(name))
        .replace("{{qr}}", &data_uri)
}

/// Render the web-app manifest for `name`.
pub fn render_manifest(name: &str) -> String {
    serde_json::json!({
        "name": format!("QR Badge - {name}"),
        "short_name": name,
        "start_url": "index.html",
        "display": "standalone",
        "background_color": "#ffffff",
        "theme_color": "#27ae60",
        "icons": [{
            "src": "icon.png",
            "sizes": "192x192",
            "type": "image/png"
        }]
    })
    .to_string()
}

fn escape_html(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#39;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_escapes_name_markup() {
        let html = render_index("<script>.Jean", b"png");
        assert!(!html.contains("<script>.Jean"));
        assert!(html.contains("&lt;script&gt;.Jean"));
    }

    #[test]
    fn manifest_is_valid_json_with_fixed_fields() {
        let manifest: serde_json::Value = serde_json::from_str(&render_manifest("X.Y")).unwrap();
        assert_eq!(manifest["short_name"], "X.Y");
        assert_eq!(manifest["start_url"], "index.html");
        assert_eq!(manifest["icons"][0]["src"], "icon.png");
    }

    #[test]
    fn worker_precaches_the_static_entries() {
        for entry in ["index.html", "manifest.json", "icon.png"] {
            assert!(SW_JS.contains(entry), "sw.js should pre-cache {entry}");
        }
    }
}
