use dioxus::prelude::*;

use crate::components::RevealSection;
use crate::core::sections::SectionId;
use crate::core::view_state::ViewState;
use crate::i18n::Locale;
use crate::site::SiteHandle;

#[component]
pub fn HeroSection(state: Signal<ViewState>, site: SiteHandle, locale: Locale) -> Element {
    let hero = &site.bundle(locale).hero;

    rsx! {
        RevealSection { state, id: SectionId::Home, class: "section hero",
            div { class: "hero__content",
                p { class: "hero__eyebrow", "{hero.eyebrow}" }
                h1 { class: "hero__title", "{hero.title}" }
                p { class: "hero__subtitle", "{hero.subtitle}" }
                div { class: "hero__actions",
                    a {
                        class: "button button--primary",
                        href: SectionId::Pricing.href(),
                        "{hero.cta_primary}"
                    }
                    a {
                        class: "button button--ghost",
                        href: SectionId::Contact.href(),
                        "{hero.cta_secondary}"
                    }
                }
            }
        }
    }
}
