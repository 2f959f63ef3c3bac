use dioxus::prelude::*;

use crate::components::RevealSection;
use crate::core::sections::SectionId;
use crate::core::view_state::ViewState;
use crate::i18n::Locale;
use crate::site::SiteHandle;

use super::SectionHeading;

#[component]
pub fn ServicesSection(state: Signal<ViewState>, site: SiteHandle, locale: Locale) -> Element {
    let services = &site.bundle(locale).services;

    rsx! {
        RevealSection { state, id: SectionId::Services, class: "section services",
            SectionHeading { heading: services.heading.clone() }
            div { class: "services__grid",
                { services.items.iter().enumerate().map(|(i, service)| {
                    let index = format!("{:02}", i + 1);
                    rsx! {
                        article { key: "{i}", class: "service-card",
                            span { class: "service-card__index", "{index}" }
                            h3 { class: "service-card__title", "{service.title}" }
                            p { class: "service-card__body", "{service.body}" }
                        }
                    }
                })}
            }
        }
    }
}
