//! Home page sections
//!
//! One function per section, each a pure rendering of its content record.

use super::html::{escape, icon, link, reveal_attrs, scroll_button, scroll_link};
use super::layout::footer_links;
use crate::content::{
    About, Contact, Firm, Hero, Icon, Jurisdictions, Navigation, Services, SiteContent, WhyUs,
};
use crate::nav::NavState;
use crate::reveal::{Reveal, RevealDirection};

/// Id of the scroll-aware nav element
pub const NAV_ELEMENT_ID: &str = "site-nav";

/// Assemble the home page body in section order
pub fn body(content: &SiteContent) -> String {
    [
        navigation(&content.nav, &content.firm),
        hero(&content.hero),
        about(&content.about),
        services(&content.services),
        jurisdictions(&content.jurisdictions),
        why_us(&content.why_us),
        contact(&content.contact, &content.firm),
        footer(content),
    ]
    .join("\n")
}

/// Navigation bar, rendered in its initial transparent state
pub fn navigation(nav: &Navigation, firm: &Firm) -> String {
    let style = NavState::default().style();
    let links = nav
        .links
        .iter()
        .map(|l| scroll_link(&l.target, &l.label, &format!("nav__link {}", style.link)))
        .collect::<Vec<_>>()
        .join("\n      ");

    format!(
        r#"<nav id="{id}" class="nav {container}" data-nav-state="{state}">
  <div class="container nav__inner">
    <a href="/" class="nav__brand {brand}">{name}</a>
    <div class="nav__links">
      {links}
    </div>
    {cta}
  </div>
</nav>"#,
        id = NAV_ELEMENT_ID,
        container = style.container,
        state = NavState::default(),
        brand = style.brand,
        name = escape(&firm.short_name),
        links = links,
        cta = scroll_button(
            &nav.cta.target,
            &nav.cta.label,
            &format!("btn {}", style.button.class()),
            " data-nav-cta",
        ),
    )
}

pub fn hero(hero: &Hero) -> String {
    let headline = hero
        .headline
        .iter()
        .map(|line| format!("{}<br>", escape(line)))
        .collect::<String>();

    format!(
        r#"<section class="hero">
  <div class="hero__backdrop">
    <img src="{src}" alt="{alt}" class="hero__image">
    <div class="hero__overlay"></div>
  </div>
  <div class="container hero__content"{reveal}>
    <h2 class="hero__eyebrow">{eyebrow}</h2>
    <h1 class="hero__headline">{headline}<span class="hero__headline--muted">{muted}</span></h1>
    <p class="hero__summary">{summary}</p>
    <div class="hero__actions">
      {primary}
      {secondary}
    </div>
  </div>
</section>"#,
        src = escape(&hero.image.src),
        alt = escape(&hero.image.alt),
        reveal = reveal_attrs("hero", Reveal::new(RevealDirection::Up)),
        eyebrow = escape(&hero.eyebrow),
        headline = headline,
        muted = escape(&hero.headline_muted),
        summary = escape(&hero.summary),
        primary = scroll_button(
            &hero.primary_cta.target,
            &hero.primary_cta.label,
            "btn btn--default btn--lg",
            ""
        ),
        secondary = scroll_button(
            &hero.secondary_cta.target,
            &hero.secondary_cta.label,
            "btn btn--outline btn--lg btn--on-dark",
            ""
        ),
    )
}

pub fn about(about: &About) -> String {
    let paragraphs = about
        .paragraphs
        .iter()
        .map(|p| format!("<p>{}</p>", escape(p)))
        .collect::<Vec<_>>()
        .join("\n        ");
    let backdrop = about
        .backdrop
        .as_ref()
        .map(|url| {
            format!(
                r#"<div class="pillars__backdrop" style="background-image: url('{}')" aria-hidden="true"></div>"#,
                escape(url)
            )
        })
        .unwrap_or_default();
    let pillars = about
        .pillars
        .iter()
        .map(|p| {
            format!(
                r#"<div class="pillar">{}<span class="pillar__label">{}</span></div>"#,
                icon(p.icon),
                escape(&p.label)
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ");

    format!(
        r#"<section id="{id}" class="section section--about">
  <div class="container grid grid--2">
    <div>
      <h2 class="section__heading"{heading_reveal}>{heading}</h2>
      <div class="section__body"{body_reveal}>
        {paragraphs}
      </div>
    </div>
    <div class="pillars">
        {backdrop}
        {pillars}
    </div>
  </div>
</section>"#,
        id = escape(about.id.as_str()),
        heading_reveal = reveal_attrs("about-heading", Reveal::new(RevealDirection::Left)),
        heading = escape(&about.heading),
        body_reveal = reveal_attrs(
            "about-body",
            Reveal::new(RevealDirection::Up).with_delay(200)
        ),
        paragraphs = paragraphs,
        backdrop = backdrop,
        pillars = pillars,
    )
}

pub fn services(services: &Services) -> String {
    let cards = services
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            format!(
                r#"<div class="card"{reveal}>{icon}<p class="card__title">{item}</p></div>"#,
                reveal = reveal_attrs(
                    &format!("services-{}", i),
                    Reveal::staggered(RevealDirection::Up, i)
                ),
                icon = icon(Icon::FileText),
                item = escape(item),
            )
        })
        .collect::<Vec<_>>()
        .join("\n    ");

    format!(
        r#"<section id="{id}" class="section section--services">
  <div class="container">
    <div class="section__intro">
      <h2 class="section__heading">{heading}</h2>
      <p>{intro}</p>
    </div>
    <div class="grid grid--3">
    {cards}
    </div>
  </div>
</section>"#,
        id = escape(services.id.as_str()),
        heading = escape(&services.heading),
        intro = escape(&services.intro),
        cards = cards,
    )
}

pub fn jurisdictions(jurisdictions: &Jurisdictions) -> String {
    let items = jurisdictions
        .items
        .iter()
        .map(|j| {
            format!(
                r#"<div class="jurisdiction"><span class="jurisdiction__code">{}</span><h3 class="jurisdiction__name">{}</h3></div>"#,
                escape(&j.code),
                escape(&j.name)
            )
        })
        .collect::<Vec<_>>()
        .join("\n      <div class=\"jurisdiction__divider\"></div>\n      ");
    let note = jurisdictions
        .note
        .as_ref()
        .map(|n| format!(r#"<p class="section__note">{}</p>"#, escape(n)))
        .unwrap_or_default();

    format!(
        r#"<section id="{id}" class="section section--jurisdictions">
  <div class="container">
    <h2 class="section__heading">{heading}</h2>
    <div class="jurisdictions">
      {items}
    </div>
    {note}
  </div>
</section>"#,
        id = escape(jurisdictions.id.as_str()),
        heading = escape(&jurisdictions.heading),
        items = items,
        note = note,
    )
}

pub fn why_us(why_us: &WhyUs) -> String {
    let features = why_us
        .features
        .iter()
        .enumerate()
        .map(|(i, f)| {
            format!(
                r#"<div class="feature"{reveal}>
        <div class="feature__icon">{icon}</div>
        <div><h3 class="feature__title">{title}</h3><p>{description}</p></div>
      </div>"#,
                reveal = reveal_attrs(
                    &format!("why-{}", i),
                    Reveal::staggered(RevealDirection::alternating(i), i)
                ),
                icon = icon(f.icon),
                title = escape(&f.title),
                description = escape(&f.description),
            )
        })
        .collect::<Vec<_>>()
        .join("\n      ");

    format!(
        r#"<section id="{id}" class="section section--why">
  <div class="container">
    <h2 class="section__heading">{heading}</h2>
    <div class="grid grid--2">
      {features}
    </div>
  </div>
</section>"#,
        id = escape(why_us.id.as_str()),
        heading = escape(&why_us.heading),
        features = features,
    )
}

pub fn contact(contact: &Contact, firm: &Firm) -> String {
    let fields = contact
        .fields
        .iter()
        .map(|f| {
            let value = match &f.href {
                Some(href) => link(href, &f.value, "contact__value"),
                None => format!(r#"<span class="contact__value">{}</span>"#, escape(&f.value)),
            };
            format!(
                r#"<div class="contact__field"><div class="contact__icon">{}</div><div><p class="contact__label">{}</p>{}</div></div>"#,
                icon(f.icon),
                escape(&f.label),
                value
            )
        })
        .collect::<Vec<_>>()
        .join("\n          ");

    format!(
        r#"<section id="{id}" class="section section--contact">
  <div class="container">
    <div class="contact">
      <div class="contact__details">
        <h2 class="section__heading">{heading}</h2>
        <p>{intro}</p>
        <div class="contact__fields">
          {fields}
        </div>
      </div>
      <div class="contact__card">
        <h3>{firm}</h3>
        <p class="contact__attorney">{attorney}</p>
        <p class="contact__credentials">{credentials}</p>
        <hr>
        <blockquote>&ldquo;{quote}&rdquo;</blockquote>
      </div>
    </div>
  </div>
</section>"#,
        id = escape(contact.id.as_str()),
        heading = escape(&contact.heading),
        intro = escape(&contact.intro),
        fields = fields,
        firm = escape(&firm.short_name),
        attorney = escape(&contact.attorney.name),
        credentials = escape(&contact.attorney.credentials),
        quote = escape(&contact.quote),
    )
}

pub fn footer(content: &SiteContent) -> String {
    format!(
        r#"<footer class="footer">
  <div class="container footer__inner">
    <div class="footer__brand">{name}</div>
    <div class="footer__meta">
      <p>&copy; {year} {name}. All Rights Reserved.</p>
      <p class="footer__notice">{notice}</p>
      <p class="footer__links">{links}</p>
    </div>
  </div>
</footer>"#,
        name = escape(&content.firm.short_name),
        year = content.firm.copyright_year,
        notice = escape(&content.footer.notice),
        links = footer_links(content),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content() -> SiteContent {
        SiteContent::default()
    }

    #[test]
    fn test_sections_render_in_order() {
        let html = body(&content());
        let order = [
            r#"id="site-nav""#,
            r#"class="hero""#,
            r#"id="who-we-are""#,
            r#"id="services""#,
            r#"id="jurisdictions""#,
            r#"id="why-mblaw""#,
            r#"id="contact""#,
            r#"class="footer""#,
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|needle| html.find(needle).unwrap_or_else(|| panic!("missing {}", needle)))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{:?}", positions);
    }

    #[test]
    fn test_nav_starts_transparent() {
        let c = content();
        let html = navigation(&c.nav, &c.firm);
        assert!(html.contains(r#"data-nav-state="transparent""#));
        assert!(html.contains("nav--transparent"));
        assert!(html.contains("btn--secondary"));
        assert!(html.contains(r#"data-scroll-target="why-mblaw""#));
    }

    #[test]
    fn test_every_service_rendered_with_stagger() {
        let c = content();
        let html = services(&c.services);
        for (i, item) in c.services.items.iter().enumerate() {
            assert!(html.contains(&escape(item)), "missing {}", item);
            assert!(html.contains(&format!("--reveal-delay: {}ms", i * 100)));
        }
    }

    #[test]
    fn test_why_us_alternates_direction() {
        let c = content();
        let html = why_us(&c.why_us);
        let left = html.matches(r#"data-reveal="left""#).count();
        let right = html.matches(r#"data-reveal="right""#).count();
        assert_eq!(left, 2);
        assert_eq!(right, 2);
    }

    #[test]
    fn test_contact_links_mailto() {
        let c = content();
        let html = contact(&c.contact, &c.firm);
        assert!(html.contains(r#"href="mailto:service@mblawpartners.com""#));
        assert!(html.contains("Manes Blumenfrucht, Esq."));
    }

    #[test]
    fn test_jurisdictions_note_optional() {
        let mut j = content().jurisdictions;
        j.note = None;
        let html = jurisdictions(&j);
        assert!(!html.contains("section__note"));
        assert!(html.contains("New Jersey"));
    }

    #[test]
    fn test_hero_uses_local_image() {
        let html = hero(&content().hero);
        assert!(html.contains(r#"src="/assets/images/hero-architecture.svg""#));
        assert!(!html.contains("unsplash"));
    }

    #[test]
    fn test_about_backdrop_optional() {
        let mut about = content().about;
        let html = super::about(&about);
        assert!(html.contains("pillars__backdrop"));
        assert!(html.contains("images.unsplash.com/photo-1497366216548-37526070297c"));

        about.backdrop = None;
        assert!(!super::about(&about).contains("pillars__backdrop"));
    }
}
