//! Legal disclosure pages
//!
//! Each page is a title, an optional lead paragraph and a list of blocks.

use crate::content::Firm;
use crate::routes::Page;

/// Inline run inside a paragraph
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Link { href: String, label: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(String),
    Paragraph(Vec<Inline>),
    List(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegalDocument {
    pub title: String,
    pub lead: Option<String>,
    pub blocks: Vec<Block>,
}

fn text(s: &str) -> Inline {
    Inline::Text(s.to_string())
}

fn link(href: &str, label: &str) -> Inline {
    Inline::Link {
        href: href.to_string(),
        label: label.to_string(),
    }
}

fn heading(s: &str) -> Block {
    Block::Heading(s.to_string())
}

fn para(s: &str) -> Block {
    Block::Paragraph(vec![text(s)])
}

fn list(items: &[&str]) -> Block {
    Block::List(items.iter().map(|s| s.to_string()).collect())
}

impl LegalDocument {
    /// The legal document shown for `page`, if it is a legal page
    pub fn for_page(page: Page, firm: &Firm) -> Option<Self> {
        match page {
            Page::Privacy => Some(Self::privacy(firm)),
            Page::Terms => Some(Self::terms(firm)),
            Page::Disclaimer => Some(Self::disclaimer(firm)),
            Page::Accessibility => Some(Self::accessibility(firm)),
            Page::Home | Page::NotFound => None,
        }
    }

    /// Every link target appearing in the document body
    pub fn links(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().flat_map(|block| match block {
            Block::Paragraph(runs) => runs
                .iter()
                .filter_map(|run| match run {
                    Inline::Link { href, .. } => Some(href.as_str()),
                    Inline::Text(_) => None,
                })
                .collect::<Vec<_>>(),
            _ => Vec::new(),
        })
    }

    pub fn privacy(firm: &Firm) -> Self {
        let name = &firm.legal_name;
        Self {
            title: "Privacy Policy".to_string(),
            lead: Some(format!(
                "{} (\"we,\" \"us,\" or \"our\") respects your privacy and is committed to protecting it through our compliance with this policy.",
                name
            )),
            blocks: vec![
                heading("Information We Collect"),
                para("We may collect information from you when you visit our website, subscribe to our newsletter, fill out a form, or otherwise communicate with us. The types of information we may collect include:"),
                list(&[
                    "Contact information (such as name, email address, phone number)",
                    "Usage data (such as IP address, browser type, pages visited)",
                    "Any other information you choose to provide to us",
                ]),
                heading("How We Use Your Information"),
                para("We use the information we collect to:"),
                list(&[
                    "Provide, maintain, and improve our website and services",
                    "Respond to your comments, questions, and requests",
                    "Send you technical notices, updates, and support messages",
                    "Monitor and analyze trends, usage, and activities in connection with our website",
                ]),
                heading("Sharing of Information"),
                para("We do not share your personal information with third parties except as described in this policy or with your consent. We may share information with:"),
                list(&[
                    "Service providers who perform services on our behalf",
                    "Professional advisors, such as lawyers, auditors, and insurers",
                    "Legal and regulatory authorities, as required by applicable law",
                ]),
                heading("Security"),
                para("We take reasonable measures to help protect information about you from loss, theft, misuse and unauthorized access, disclosure, alteration and destruction."),
                heading("Contact Us"),
                Block::Paragraph(vec![
                    text("If you have any questions about this Privacy Policy, please contact us at "),
                    link(&firm.mailto(), &firm.email),
                    text("."),
                ]),
            ],
        }
    }

    pub fn terms(firm: &Firm) -> Self {
        let name = &firm.legal_name;
        Self {
            title: "Terms of Use".to_string(),
            lead: Some(format!(
                "The term \"the Firm\" on this website refers to {}, a limited liability partnership. Your use of this website is subject to the following terms and conditions. By accessing this website, you acknowledge that you have read and accept these terms and conditions.",
                name
            )),
            blocks: vec![
                heading("Copyright Notice"),
                Block::Paragraph(vec![Inline::Text(format!(
                    "All website content including design, text, and graphics is the property of {}. You may view, copy, download, and print materials for personal, non-commercial use only, provided that copyright and permission notices remain intact and no modifications are made.",
                    name
                ))]),
                heading("No Legal Services"),
                Block::Paragraph(vec![
                    text("The information on this website is provided solely for informational purposes and does not constitute legal advice. Please refer to our "),
                    link("/disclaimer", "Disclaimer"),
                    text(" for more information."),
                ]),
            ],
        }
    }

    pub fn disclaimer(firm: &Firm) -> Self {
        Self {
            title: "Disclaimer".to_string(),
            lead: None,
            blocks: vec![
                heading("No Legal Services or Attorney-Client Relationship"),
                para("The information on this website is provided solely for informational purposes and does not constitute legal advice. This information is not intended to create, and receipt of it does not constitute, an attorney-client relationship. Do not send confidential information until you have spoken with one of our attorneys and received authorization to send such information."),
                para("Providing information to the Firm, whether through email links on this website or otherwise, does not create an attorney-client relationship without an express agreement from the Firm and does not prevent the Firm from representing other parties in related matters. The Firm expressly disclaims all liability with respect to actions taken or not taken based on any content on this website."),
                heading("No Warranties"),
                para("This website and all information provided are offered \"as is.\" The Firm makes no warranties or representations of any kind regarding the accuracy or completeness of the information."),
                heading("Limitation of Liability"),
                para("Your use of this website is at your own risk. Materials may not reflect the most current legal developments and may be updated without notice. The Firm is not responsible for any errors or omissions or for any damages arising from the use or performance of this website."),
                heading("Email Disclaimer"),
                para("Any email sent from the Firm and all attachments are intended only for the named recipient and may contain privileged and confidential information. Unauthorized use, copying, or distribution is prohibited. If you received an email in error, please notify the sender immediately and delete the message."),
                heading("Contact Information"),
                Block::Paragraph(vec![
                    text("For questions about this website, contact "),
                    link(&firm.mailto(), &firm.email),
                    text("."),
                ]),
            ],
        }
    }

    pub fn accessibility(firm: &Firm) -> Self {
        Self {
            title: "Accessibility".to_string(),
            lead: None,
            blocks: vec![
                Block::Paragraph(vec![Inline::Text(format!(
                    "{} is committed to providing a website that is accessible to all users. We follow Web Content Accessibility Guidelines (WCAG 2.0) and ARIA specifications to ensure a positive experience for all visitors, including those using assistive technologies.",
                    firm.legal_name
                ))]),
                Block::Paragraph(vec![
                    text("If you experience difficulty accessing any part of this website, please contact us at "),
                    link(&firm.mailto(), &firm.email),
                    text(" and we will gladly assist you."),
                ]),
            ],
        }
    }
}
