use dioxus::prelude::*;

use crate::components::RevealSection;
use crate::core::sections::SectionId;
use crate::core::view_state::ViewState;
use crate::i18n::Locale;
use crate::site::SiteHandle;

use super::SectionHeading;

/// Contact form and agency details.
///
/// The form is presentational: submitting is intercepted and logged, and no
/// request leaves the page.
#[component]
pub fn ContactSection(state: Signal<ViewState>, site: SiteHandle, locale: Locale) -> Element {
    let copy = &site.bundle(locale).contact;
    let details = &site.get().config.contact;

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        tracing::info!(%locale, "contact form submitted; no delivery backend configured");
    };

    rsx! {
        RevealSection { state, id: SectionId::Contact, class: "section contact",
            SectionHeading { heading: copy.heading.clone() }
            div { class: "contact__layout",
                form { class: "contact-form", onsubmit: on_submit,
                    input {
                        class: "contact-form__field",
                        r#type: "text",
                        name: "name",
                        autocomplete: "name",
                        placeholder: "{copy.name_placeholder}",
                        aria_label: "{copy.name_placeholder}",
                        required: true,
                    }
                    input {
                        class: "contact-form__field",
                        r#type: "email",
                        name: "email",
                        autocomplete: "email",
                        placeholder: "{copy.email_placeholder}",
                        aria_label: "{copy.email_placeholder}",
                        required: true,
                    }
                    select {
                        class: "contact-form__field",
                        name: "business",
                        aria_label: "{copy.business_placeholder}",
                        option { value: "", disabled: true, selected: true, "{copy.business_placeholder}" }
                        for (i, choice) in copy.business_options.iter().enumerate() {
                            option { key: "{i}", value: "{choice}", "{choice}" }
                        }
                    }
                    textarea {
                        class: "contact-form__field contact-form__field--message",
                        name: "message",
                        rows: "5",
                        placeholder: "{copy.message_placeholder}",
                        aria_label: "{copy.message_placeholder}",
                    }
                    button { r#type: "submit", class: "button button--primary", "{copy.submit}" }
                }

                aside { class: "contact-details",
                    h3 { class: "contact-details__title", "{copy.details_title}" }
                    dl {
                        dt { "{copy.email_label}" }
                        dd {
                            a { href: "mailto:{details.email}", "{details.email}" }
                        }
                        dt { "{copy.phone_label}" }
                        dd {
                            a { href: "tel:{details.phone}", "{details.phone}" }
                        }
                        if let Some(address) = details.address.as_deref() {
                            dt { "{copy.address_label}" }
                            dd { "{address}" }
                        }
                    }
                }
            }
        }
    }
}
