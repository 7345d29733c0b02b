//! Document shell shared by every page

use super::html::{escape, link};
use crate::content::SiteContent;

/// Stylesheet served from the assets directory
pub const STYLESHEET_PATH: &str = "/assets/site.css";

/// wasm-bindgen glue emitted by `wasm-pack build --target web`
pub const SCRIPT_PATH: &str = "/pkg/site_web.js";

/// Wrap `body` in a complete HTML document
pub fn document(title: &str, body_class: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <link rel="stylesheet" href="{css}">
</head>
<body class="{body_class}">
{body}
<script type="module">
  import init, {{ start }} from "{script}";
  init().then(() => {{ window.__site = start(); }});
</script>
</body>
</html>
"#,
        title = escape(title),
        css = STYLESHEET_PATH,
        body_class = body_class,
        body = body,
        script = SCRIPT_PATH,
    )
}

/// Fixed solid header used on every page except home
pub fn simple_header(content: &SiteContent) -> String {
    format!(
        r#"<nav class="nav nav--solid nav--static">
  <div class="container nav__inner">
    <a href="/" class="nav__logo"><img src="{logo}" alt="{alt}"></a>
    <a href="/" class="btn btn--ghost btn--sm"><span aria-hidden="true">&larr;</span> Back to Home</a>
  </div>
</nav>"#,
        logo = escape(&content.firm.logo_path),
        alt = escape(&content.firm.legal_name),
    )
}

/// Copyright footer used on every page except home
pub fn simple_footer(content: &SiteContent) -> String {
    format!(
        r#"<footer class="footer footer--simple">
  <div class="container">
    <p>&copy; {year} {name}. All Rights Reserved.</p>
    <p class="footer__links">{links}</p>
  </div>
</footer>"#,
        year = content.firm.copyright_year,
        name = escape(&content.firm.legal_name),
        links = footer_links(content),
    )
}

pub(crate) fn footer_links(content: &SiteContent) -> String {
    content
        .footer
        .links
        .iter()
        .map(|l| link(&l.href, &l.label, "footer__link"))
        .collect::<Vec<_>>()
        .join(" ")
}
