//! Fixed page sections and their anchor ids.

use std::fmt;

/// A top-level page section. Variant order is document order, which is also
/// the scan order used to pick the active section.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionId {
    #[default]
    Home,
    Services,
    Pricing,
    Works,
    How,
    Faq,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::Services,
        SectionId::Pricing,
        SectionId::Works,
        SectionId::How,
        SectionId::Faq,
        SectionId::Contact,
    ];

    /// DOM id of the section element (also the `#fragment` of nav links).
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Services => "services",
            SectionId::Pricing => "pricing",
            SectionId::Works => "works",
            SectionId::How => "how",
            SectionId::Faq => "faq",
            SectionId::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}
