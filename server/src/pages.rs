//! Inline HTML for the badge request form.

use qr_composer::BACKGROUND_COLORS;

const FORM_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="fr">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>QR Badge Generator</title>
<style>
  body { font-family: sans-serif; max-width: 28rem; margin: 3rem auto; padding: 0 1rem; }
  label { display: block; margin-top: 1rem; }
  input, select { width: 100%; padding: 0.4rem; margin-top: 0.2rem; box-sizing: border-box; }
  .actions { margin-top: 1.5rem; display: flex; gap: 0.5rem; }
  button { flex: 1; padding: 0.6rem; }
  .error { color: #c0392b; border: 1px solid #c0392b; padding: 0.6rem; }
</style>
</head>
<body>
<h1>QR Badge Generator</h1>
{{error}}
<form method="post" action="/">
  <label>First name
    <input type="text" name="first" required>
  </label>
  <label>Family name
    <input type="text" name="family" required>
  </label>
  <label>Background color
    <select name="bg_color">{{colors}}</select>
  </label>
  <label>Logo
    <select name="show_logo">
      <option value="true">With logo</option>
      <option value="false">Without logo</option>
    </select>
  </label>
  <div class="actions">
    <button type="submit" name="action" value="png">Download PNG</button>
    <button type="submit" name="action" value="pwa">Download PWA</button>
  </div>
</form>
</body>
</html>
"#;

/// Render the form, optionally with an inline error banner.
pub fn render_form(error: Option<&str>) -> String {
    let banner = match error {
        Some(msg) => format!(r#"<p class="error">{}</p>"#, escape_html(msg)),
        None => String::new(),
    };
    let options: String = BACKGROUND_COLORS
        .iter()
        .map(|(value, label)| format!(r#"<option value="{value}">{label}</option>"#))
        .collect();

    FORM_TEMPLATE
        .replace("{{error}}", &banner)
        .replace("{{colors}}", &options)
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
