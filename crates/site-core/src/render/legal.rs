//! Legal pages and the not-found page

use super::html::{escape, link};
use super::layout::{simple_footer, simple_header};
use crate::content::SiteContent;
use crate::legal::{Block, Inline, LegalDocument};

fn inline(runs: &[Inline]) -> String {
    runs.iter()
        .map(|run| match run {
            Inline::Text(t) => escape(t),
            Inline::Link { href, label } => link(href, label, "text-link"),
        })
        .collect()
}

fn block(block: &Block) -> String {
    match block {
        Block::Heading(h) => format!(r#"<h2 class="prose__heading">{}</h2>"#, escape(h)),
        Block::Paragraph(runs) => format!("<p>{}</p>", inline(runs)),
        Block::List(items) => {
            let items = items
                .iter()
                .map(|i| format!("<li>{}</li>", escape(i)))
                .collect::<String>();
            format!(r#"<ul class="prose__list">{}</ul>"#, items)
        }
    }
}

/// Header, document body and footer for a legal page
pub fn body(doc: &LegalDocument, content: &SiteContent) -> String {
    let lead = doc
        .lead
        .as_ref()
        .map(|l| format!(r#"<p class="prose__lead">{}</p>"#, escape(l)))
        .unwrap_or_default();
    let blocks = doc
        .blocks
        .iter()
        .map(block)
        .collect::<Vec<_>>()
        .join("\n    ");

    format!(
        r#"{header}
<main class="container container--narrow legal">
  <h1 class="legal__title">{title}</h1>
  <div class="prose">
    {lead}
    {blocks}
  </div>
</main>
{footer}"#,
        header = simple_header(content),
        title = escape(&doc.title),
        lead = lead,
        blocks = blocks,
        footer = simple_footer(content),
    )
}

/// Body of the page served for unknown paths
pub fn not_found_body(content: &SiteContent) -> String {
    format!(
        r#"{header}
<main class="container container--narrow not-found">
  <h1 class="legal__title">404 Page Not Found</h1>
  <p>The page you are looking for does not exist or has been moved.</p>
  <p><a href="/" class="text-link">Return to the home page</a></p>
</main>
{footer}"#,
        header = simple_header(content),
        footer = simple_footer(content),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_page_body() {
        let content = SiteContent::default();
        let html = body(&LegalDocument::terms(&content.firm), &content);
        assert!(html.contains(r#"<h1 class="legal__title">Terms of Use</h1>"#));
        assert!(html.contains(r#"<a href="/disclaimer" class="text-link">Disclaimer</a>"#));
        assert!(html.contains("Back to Home"));
    }

    #[test]
    fn test_privacy_lists_render() {
        let content = SiteContent::default();
        let html = body(&LegalDocument::privacy(&content.firm), &content);
        assert_eq!(html.matches("<ul").count(), 3);
        assert!(html.contains("<li>Service providers who perform services on our behalf</li>"));
    }

    #[test]
    fn test_lead_is_optional() {
        let content = SiteContent::default();
        let html = body(&LegalDocument::disclaimer(&content.firm), &content);
        assert!(!html.contains("prose__lead"));
    }

    #[test]
    fn test_not_found_links_home() {
        let html = not_found_body(&SiteContent::default());
        assert!(html.contains("404 Page Not Found"));
        assert!(html.contains(r#"href="/""#));
    }
}
