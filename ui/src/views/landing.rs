use dioxus::prelude::*;

use crate::components::{use_scroll_tracker, AppNavbar, ScrollTopButton};
use crate::core::view_state::ViewState;
use crate::site::SiteHandle;

use super::{
    ContactSection, FaqSection, HeroSection, PricingSection, ProcessSection, ServicesSection,
    WorksSection,
};

const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// The whole page. Owns the `ViewState` signal and hands it to every child
/// that reads or changes it.
#[component]
pub fn Landing(site: SiteHandle) -> Element {
    let state = use_signal(|| ViewState::new(site.get().config.default_locale));
    use_scroll_tracker(state);

    // Only a language change re-renders the page body; scroll ticks update the
    // navbar and button through their own subscriptions.
    let locale = use_memo(move || state.read().language)();
    let footer = &site.bundle(locale).footer;
    let agency = site.get().config.agency_name.clone();

    #[cfg(debug_assertions)]
    tracing::trace!(%locale, "landing render");

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }

        AppNavbar { state, site }

        main { class: "landing", lang: "{locale.tag()}",
            HeroSection { state, site, locale }
            ServicesSection { state, site, locale }
            PricingSection { state, site, locale }
            WorksSection { state, site, locale }
            ProcessSection { state, site, locale }
            FaqSection { state, site, locale }
            ContactSection { state, site, locale }
        }

        footer { class: "footer",
            p { class: "footer__brand", "{agency}" }
            p { class: "footer__rights", "© {agency}. {footer.rights}" }
        }

        ScrollTopButton { state, label: footer.scroll_top_label.clone() }
    }
}
