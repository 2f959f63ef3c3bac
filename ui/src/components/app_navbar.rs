use dioxus::prelude::*;

use crate::core::sections::SectionId;
use crate::core::view_state::ViewState;
use crate::i18n::Locale;
use crate::site::SiteHandle;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Fixed page header: brand, section links, mobile menu toggle and the
/// language selector.
///
/// The navbar owns no state of its own. Everything it shows comes from the
/// `ViewState` signal handed down by `Landing`, and every interaction writes
/// back through `ViewState` methods:
/// - following a link calls `activate_nav_link` (closes the mobile menu);
/// - the toggle button flips `mobile_menu_open`;
/// - the selector calls `select_language` for codes the site supports and
///   ignores anything else.
#[component]
pub fn AppNavbar(state: Signal<ViewState>, site: SiteHandle) -> Element {
    let mut state = state;
    let (language, menu_open, active) = {
        let view = state.read();
        (view.language, view.mobile_menu_open, view.active_section)
    };
    let nav = &site.bundle(language).nav;
    let locales = site.get().config.supported_locales.clone();
    let agency = site.get().config.agency_name.clone();

    let on_language = move |evt: FormEvent| {
        let value = evt.value();
        match Locale::from_code(&value).filter(|l| site.get().config.supports(*l)) {
            Some(locale) => state.write().select_language(locale),
            None => tracing::warn!(%value, "ignoring unsupported language selection"),
        }
    };

    let links_class = if menu_open {
        "navbar__links navbar__links--open"
    } else {
        "navbar__links"
    };
    let toggle_class = if menu_open {
        "navbar__toggle navbar__toggle--open"
    } else {
        "navbar__toggle"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                // Brand
                a {
                    class: "navbar__brand",
                    href: SectionId::Home.href(),
                    onclick: move |_| state.write().activate_nav_link(SectionId::Home),
                    span { class: "navbar__brand-spark", aria_hidden: "true" }
                    span { class: "navbar__brand-mark", "{agency}" }
                }

                button {
                    r#type: "button",
                    class: "{toggle_class}",
                    aria_label: "{nav.menu_toggle}",
                    aria_controls: "navbar-links",
                    aria_expanded: "{menu_open}",
                    onclick: move |_| state.write().toggle_mobile_menu(),
                    span { class: "navbar__toggle-bar" }
                    span { class: "navbar__toggle-bar" }
                    span { class: "navbar__toggle-bar" }
                }

                nav { id: "navbar-links", class: "{links_class}",
                    for id in SectionId::ALL {
                        NavLink {
                            key: "{id}",
                            state,
                            target: id,
                            label: nav.label(id).to_string(),
                            active: id == active,
                        }
                    }
                    a {
                        class: "navbar__cta button button--primary",
                        href: SectionId::Contact.href(),
                        onclick: move |_| state.write().activate_nav_link(SectionId::Contact),
                        "{nav.cta}"
                    }
                }

                // Locale switcher
                if locales.len() > 1 {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            "{nav.language_label}"
                        }
                        select {
                            id: "locale-select",
                            value: "{language.code()}",
                            oninput: on_language,
                            for locale in locales {
                                option {
                                    key: "{locale}",
                                    value: "{locale.code()}",
                                    selected: locale == language,
                                    "{locale.short_label()}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NavLink(state: Signal<ViewState>, target: SectionId, label: String, active: bool) -> Element {
    let mut state = state;
    let class = if active {
        "navbar__link navbar__link--active"
    } else {
        "navbar__link"
    };
    let current = if active { "location" } else { "false" };

    rsx! {
        a {
            class: "{class}",
            href: target.href(),
            aria_current: current,
            onclick: move |_| state.write().activate_nav_link(target),
            "{label}"
        }
    }
}
