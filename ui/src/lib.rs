//! Shared UI crate for the agency site. Content, view state and every
//! component live here; platform crates only launch `Landing`.

pub mod content;
pub mod core;
pub mod i18n;
pub mod site;
pub mod views;

pub mod components {
    // Localized navbar with mobile menu and language selector (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;

    // One-shot fade-in wrapper for page sections
    pub mod reveal_section;
    pub use reveal_section::RevealSection;

    pub mod scroll_top;
    pub use scroll_top::ScrollTopButton;

    pub mod scroll_tracker;
    pub use scroll_tracker::use_scroll_tracker;
}

pub use site::{Site, SiteError, SiteHandle};
pub use views::Landing;
