use dioxus::prelude::*;

use crate::components::RevealSection;
use crate::core::sections::SectionId;
use crate::core::view_state::ViewState;
use crate::i18n::Locale;
use crate::site::SiteHandle;

use super::SectionHeading;

#[component]
pub fn ProcessSection(state: Signal<ViewState>, site: SiteHandle, locale: Locale) -> Element {
    let process = &site.bundle(locale).process;

    rsx! {
        RevealSection { state, id: SectionId::How, class: "section process",
            SectionHeading { heading: process.heading.clone() }
            ol { class: "process__steps",
                for (i, step) in process.items.iter().enumerate() {
                    li { key: "{i}", class: "process-step",
                        span { class: "process-step__number", {(i + 1).to_string()} }
                        h3 { class: "process-step__title", "{step.title}" }
                        p { class: "process-step__body", "{step.body}" }
                    }
                }
            }
        }
    }
}
