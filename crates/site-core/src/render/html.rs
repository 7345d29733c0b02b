//! Small HTML building helpers

use crate::content::Icon;
use crate::reveal::Reveal;
use crate::scroll::SectionId;

/// Escape text for use in HTML element content and quoted attributes
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Attributes that mark an element for an entrance animation
pub fn reveal_attrs(key: &str, reveal: Reveal) -> String {
    format!(
        r#" data-reveal="{}" data-reveal-key="{}" style="--reveal-delay: {}ms""#,
        reveal.direction.as_str(),
        escape(key),
        reveal.delay_ms
    )
}

/// Decorative icon placeholder, styled by `site.css`
pub fn icon(icon: Icon) -> String {
    format!(
        r#"<span class="icon icon--{}" aria-hidden="true"></span>"#,
        icon.name()
    )
}

/// Anchor that the browser module upgrades to a smooth scroll
pub fn scroll_link(target: &SectionId, label: &str, class: &str) -> String {
    format!(
        r##"<a href="#{id}" class="{class}" data-scroll-target="{id}">{label}</a>"##,
        id = escape(target.as_str()),
        class = class,
        label = escape(label)
    )
}

/// Button that smooth-scrolls to `target`
pub fn scroll_button(target: &SectionId, label: &str, class: &str, extra_attrs: &str) -> String {
    format!(
        r#"<button type="button" class="{class}" data-scroll-target="{id}"{extra}>{label}</button>"#,
        class = class,
        id = escape(target.as_str()),
        extra = extra_attrs,
        label = escape(label)
    )
}

/// Plain or external hyperlink
pub fn link(href: &str, label: &str, class: &str) -> String {
    let external = href.starts_with("http://") || href.starts_with("https://");
    let rel = if external {
        r#" target="_blank" rel="noopener noreferrer""#
    } else {
        ""
    };
    format!(
        r#"<a href="{}" class="{}"{}>{}</a>"#,
        escape(href),
        class,
        rel,
        escape(label)
    )
}
