//! Page views. `Landing` composes the single page; every other module is one
//! of its sections.

mod contact;
mod faq;
mod hero;
mod landing;
mod pricing;
mod process;
mod services;
mod works;

pub use contact::ContactSection;
pub use faq::FaqSection;
pub use hero::HeroSection;
pub use landing::Landing;
pub use pricing::PricingSection;
pub use process::ProcessSection;
pub use services::ServicesSection;
pub use works::WorksSection;

use dioxus::prelude::*;

use crate::content::Heading;

/// Title + subtitle block shared by the content sections.
#[component]
fn SectionHeading(heading: Heading) -> Element {
    rsx! {
        header { class: "section__heading",
            h2 { class: "section__title", "{heading.title}" }
            p { class: "section__subtitle", "{heading.subtitle}" }
        }
    }
}
