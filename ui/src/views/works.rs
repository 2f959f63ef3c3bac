use dioxus::prelude::*;

use crate::components::RevealSection;
use crate::core::sections::SectionId;
use crate::core::view_state::ViewState;
use crate::i18n::Locale;
use crate::site::SiteHandle;

use super::SectionHeading;

/// Client testimonials.
#[component]
pub fn WorksSection(state: Signal<ViewState>, site: SiteHandle, locale: Locale) -> Element {
    let works = &site.bundle(locale).works;

    rsx! {
        RevealSection { state, id: SectionId::Works, class: "section works",
            SectionHeading { heading: works.heading.clone() }
            div { class: "works__grid",
                for (i, testimonial) in works.items.iter().enumerate() {
                    figure { key: "{i}", class: "testimonial",
                        blockquote { class: "testimonial__quote", "“{testimonial.quote}”" }
                        figcaption { class: "testimonial__author",
                            strong { "{testimonial.author}" }
                            span { class: "testimonial__role", "{testimonial.role}" }
                        }
                    }
                }
            }
        }
    }
}
