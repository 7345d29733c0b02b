//! Site content configuration
//!
//! Everything the home page shows is data: one [`SiteContent`] record fed to
//! the generic section renderers. The embedded default is the canonical
//! MBLAW opinion-letter copy. A TOML file can replace any top-level section.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::SiteError;
use crate::scroll::SectionId;

/// Complete content record for the site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub firm: Firm,
    pub nav: Navigation,
    pub hero: Hero,
    pub about: About,
    pub services: Services,
    pub jurisdictions: Jurisdictions,
    pub why_us: WhyUs,
    pub contact: Contact,
    pub footer: Footer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Firm {
    /// Wordmark shown in the nav bar and footer
    pub short_name: String,
    /// Name used in legal copy
    pub legal_name: String,
    pub email: String,
    pub logo_path: String,
    pub copyright_year: u16,
}

impl Firm {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Navigation {
    pub links: Vec<NavLink>,
    pub cta: CallToAction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub target: SectionId,
}

impl NavLink {
    /// Link whose target is derived from its label
    pub fn from_label(label: &str) -> Self {
        Self {
            label: label.to_string(),
            target: SectionId::from_label(label),
        }
    }
}

/// A button that scrolls to a section of the current page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallToAction {
    pub label: String,
    pub target: SectionId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub eyebrow: String,
    pub headline: Vec<String>,
    /// Last headline line, rendered de-emphasized
    pub headline_muted: String,
    pub summary: String,
    pub image: Image,
    pub primary_cta: CallToAction,
    pub secondary_cta: CallToAction,
}

/// Icons available to content records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Shield,
    Check,
    Clock,
    Scale,
    FileText,
    DollarSign,
    Users,
    Phone,
    Mail,
    MapPin,
}

impl Icon {
    pub fn name(self) -> &'static str {
        match self {
            Icon::Shield => "shield",
            Icon::Check => "check",
            Icon::Clock => "clock",
            Icon::Scale => "scale",
            Icon::FileText => "file-text",
            Icon::DollarSign => "dollar-sign",
            Icon::Users => "users",
            Icon::Phone => "phone",
            Icon::Mail => "mail",
            Icon::MapPin => "map-pin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pillar {
    pub icon: Icon,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub id: SectionId,
    pub heading: String,
    pub paragraphs: Vec<String>,
    pub pillars: Vec<Pillar>,
    /// Decorative background behind the pillars
    #[serde(default)]
    pub backdrop: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Services {
    pub id: SectionId,
    pub heading: String,
    pub intro: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Jurisdiction {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Jurisdictions {
    pub id: SectionId,
    pub heading: String,
    pub items: Vec<Jurisdiction>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhyUs {
    pub id: SectionId,
    pub heading: String,
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactField {
    pub icon: Icon,
    pub label: String,
    pub value: String,
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attorney {
    pub name: String,
    pub credentials: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: SectionId,
    pub heading: String,
    pub intro: String,
    pub fields: Vec<ContactField>,
    pub attorney: Attorney,
    pub quote: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footer {
    pub notice: String,
    pub links: Vec<FooterLink>,
}

impl SiteContent {
    /// Load content from a TOML file
    ///
    /// Top-level sections missing from the file keep their embedded default.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML is malformed, or
    /// the resulting content fails [`SiteContent::validate`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read content file: {}", path.display()))?;
        let content = Self::from_toml(&raw)
            .with_context(|| format!("Invalid content file: {}", path.display()))?;
        Ok(content)
    }

    /// Parse and validate content from a TOML string
    pub fn from_toml(raw: &str) -> Result<Self, SiteError> {
        let content: SiteContent = toml::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    /// Section ids on the home page, in render order
    pub fn section_ids(&self) -> [&SectionId; 5] {
        [
            &self.about.id,
            &self.services.id,
            &self.jurisdictions.id,
            &self.why_us.id,
            &self.contact.id,
        ]
    }

    /// Check structural rules the renderers rely on
    ///
    /// Nav targets that match no section are allowed (clicking them does
    /// nothing) but are logged.
    pub fn validate(&self) -> Result<(), SiteError> {
        if self.firm.short_name.trim().is_empty() {
            return Err(SiteError::InvalidContent(
                "firm.short_name must not be empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for id in self.section_ids() {
            if id.as_str().is_empty() {
                return Err(SiteError::InvalidContent(
                    "section ids must not be empty".to_string(),
                ));
            }
            if !seen.insert(id.as_str()) {
                return Err(SiteError::InvalidContent(format!(
                    "duplicate section id: {}",
                    id
                )));
            }
        }

        let targets = self
            .nav
            .links
            .iter()
            .map(|link| &link.target)
            .chain([
                &self.nav.cta.target,
                &self.hero.primary_cta.target,
                &self.hero.secondary_cta.target,
            ]);
        for target in targets {
            if !seen.contains(target.as_str()) {
                tracing::warn!(%target, "navigation target has no matching section");
            }
        }

        Ok(())
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for SiteContent {
    fn default() -> Self {
        let email = "service@mblawpartners.com";
        let contact_cta = CallToAction {
            label: "Get a Quote".to_string(),
            target: SectionId::new("contact"),
        };

        Self {
            firm: Firm {
                short_name: "MBLAW".to_string(),
                legal_name: "MB Law".to_string(),
                email: email.to_string(),
                logo_path: "/assets/logos/MBLaw-Logo-Color.svg".to_string(),
                copyright_year: 2025,
            },
            nav: Navigation {
                links: ["Who We Are", "Services", "Jurisdictions", "Why MBLAW", "Contact"]
                    .iter()
                    .map(|label| NavLink::from_label(label))
                    .collect(),
                cta: contact_cta,
            },
            hero: Hero {
                eyebrow: "Real Estate Legal Opinion Letters".to_string(),
                headline: strings(&["Reliable service.", "Clear guidance."]),
                headline_muted: "Efficient execution.".to_string(),
                summary: "MBLAW is a boutique legal practice focused exclusively on delivering real estate legal opinion letters for commercial loan transactions.".to_string(),
                image: Image {
                    src: "/assets/images/hero-architecture.svg".to_string(),
                    alt: "Modern Architecture".to_string(),
                },
                primary_cta: CallToAction {
                    label: "Request an Opinion".to_string(),
                    target: SectionId::new("contact"),
                },
                secondary_cta: CallToAction {
                    label: "View Services".to_string(),
                    target: SectionId::new("services"),
                },
            },
            about: About {
                id: SectionId::new("who-we-are"),
                heading: "Who We Are".to_string(),
                paragraphs: strings(&[
                    "MBLAW is a boutique legal practice focused exclusively on delivering real estate legal opinion letters for commercial loan transactions.",
                    "With extensive experience across complex financing structures, MBLAW provides borrowers and lenders with accurate, timely, and meticulously prepared opinion letters that support smooth closings and reduce friction in the deal process.",
                    "We prioritize clarity, responsiveness, and professional precision\u{2014}enabling clients to proceed with confidence at every stage of their transaction.",
                ]),
                pillars: vec![
                    Pillar { icon: Icon::Shield, label: "Reliable".to_string() },
                    Pillar { icon: Icon::Check, label: "Accurate".to_string() },
                    Pillar { icon: Icon::Clock, label: "Timely".to_string() },
                    Pillar { icon: Icon::Scale, label: "Precise".to_string() },
                ],
                backdrop: Some(
                    "https://images.unsplash.com/photo-1497366216548-37526070297c?auto=format&fit=crop&q=80"
                        .to_string(),
                ),
            },
            services: Services {
                id: SectionId::new("services"),
                heading: "Opinion Services".to_string(),
                intro: "MBLAW prepares a range of commonly required real estate opinion letters with a focus on consistency, accuracy, and closing-ready language tailored to the needs of each deal.".to_string(),
                items: strings(&[
                    "Enforceability Opinions",
                    "Entity & Authority Opinions",
                    "Single-Purpose Entity (SPE) / Non-Dissolution Opinions",
                    "Substantive Non-Consolidation Opinions",
                    "UCC-Related Opinions",
                    "Additional opinion matters upon request",
                ]),
            },
            jurisdictions: Jurisdictions {
                id: SectionId::new("jurisdictions"),
                heading: "Jurisdictions".to_string(),
                items: vec![
                    Jurisdiction { code: "NY".to_string(), name: "New York".to_string() },
                    Jurisdiction { code: "NJ".to_string(), name: "New Jersey".to_string() },
                ],
                note: Some("(Additional jurisdictions may be available upon request.)".to_string()),
            },
            why_us: WhyUs {
                id: SectionId::new("why-mblaw"),
                heading: "Why Clients Choose MBLAW".to_string(),
                features: vec![
                    Feature {
                        icon: Icon::Clock,
                        title: "Responsive Service".to_string(),
                        description: "Transactions move quickly, and so do we. MBLAW is committed to delivering prompt communication and reliable turnaround times.".to_string(),
                    },
                    Feature {
                        icon: Icon::DollarSign,
                        title: "Competitive, Predictable Fees".to_string(),
                        description: "As a specialized opinion practice, we offer flat-fee opinion services with transparent pricing allowing clients to plan ahead.".to_string(),
                    },
                    Feature {
                        icon: Icon::Scale,
                        title: "Focused Expertise".to_string(),
                        description: "Our practice is dedicated solely to real estate legal opinion work, allowing us to provide precise, well-crafted opinions.".to_string(),
                    },
                    Feature {
                        icon: Icon::Users,
                        title: "Seamless Collaboration".to_string(),
                        description: "We work directly with borrower\u{2019}s counsel, lender\u{2019}s counsel, and deal teams to streamline the closing process.".to_string(),
                    },
                ],
            },
            contact: Contact {
                id: SectionId::new("contact"),
                heading: "Get in Touch".to_string(),
                intro: "Contact us for fee quotes, availability, or to request an opinion letter.".to_string(),
                fields: vec![
                    ContactField {
                        icon: Icon::Phone,
                        label: "Phone".to_string(),
                        value: "(555) 123-4567".to_string(),
                        href: Some("tel:+15551234567".to_string()),
                    },
                    ContactField {
                        icon: Icon::Mail,
                        label: "Email".to_string(),
                        value: email.to_string(),
                        href: Some(format!("mailto:{}", email)),
                    },
                    ContactField {
                        icon: Icon::MapPin,
                        label: "Licensed In".to_string(),
                        value: "New York & New Jersey".to_string(),
                        href: None,
                    },
                ],
                attorney: Attorney {
                    name: "Manes Blumenfrucht, Esq.".to_string(),
                    credentials: "Licensed in New York & New Jersey".to_string(),
                },
                quote: "We prioritize clarity, responsiveness, and professional precision\u{2014}enabling clients to proceed with confidence.".to_string(),
            },
            footer: Footer {
                notice: "Attorney Advertising".to_string(),
                links: vec![
                    FooterLink { label: "Privacy Policy".to_string(), href: "/privacy".to_string() },
                    FooterLink { label: "Terms of Use".to_string(), href: "/terms".to_string() },
                    FooterLink { label: "Disclaimer".to_string(), href: "/disclaimer".to_string() },
                    FooterLink { label: "Accessibility".to_string(), href: "/accessibility".to_string() },
                ],
            },
        }
    }
}
