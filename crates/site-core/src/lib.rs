//! Core of the MB Law marketing site
//!
//! Everything here is platform independent so the server and the browser
//! module share one implementation:
//!
//! - `routes`: the fixed route table and path resolution
//! - `content` / `legal`: static content records
//! - `render`: HTML for every page
//! - `nav` / `subscription`: the scroll-aware navigation bar and its
//!   scroll listener lifecycle
//! - `scroll` / `reveal`: smooth scrolling to sections and one-shot
//!   entrance animations

pub mod content;
pub mod error;
pub mod legal;
pub mod nav;
pub mod render;
pub mod reveal;
pub mod routes;
pub mod scroll;
pub mod subscription;

pub use content::SiteContent;
pub use error::SiteError;
pub use nav::{MountedNavBar, NavBar, NavState, Transition, SCROLL_THRESHOLD};
pub use render::{render_page, render_path};
pub use routes::{resolve, Page};
pub use scroll::{scroll_to_section, SectionId, SectionLookup};
pub use subscription::{ScrollBus, ScrollHandler, ScrollSource, Subscription, SubscriptionId};
