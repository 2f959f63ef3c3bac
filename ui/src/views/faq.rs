use dioxus::prelude::*;

use crate::components::RevealSection;
use crate::content::FaqEntry;
use crate::core::sections::SectionId;
use crate::core::view_state::ViewState;
use crate::i18n::Locale;
use crate::site::SiteHandle;

use super::SectionHeading;

/// FAQ accordion. At most one answer is open; clicking the open question
/// closes it. The open index is local to this section and not part of
/// `ViewState`.
#[component]
pub fn FaqSection(state: Signal<ViewState>, site: SiteHandle, locale: Locale) -> Element {
    let faq = &site.bundle(locale).faq;
    let open = use_signal(|| None::<usize>);

    rsx! {
        RevealSection { state, id: SectionId::Faq, class: "section faq",
            SectionHeading { heading: faq.heading.clone() }
            div { class: "faq__list",
                for (i, entry) in faq.items.iter().enumerate() {
                    FaqItem { key: "{i}", index: i, entry: entry.clone(), open }
                }
            }
        }
    }
}

#[component]
fn FaqItem(index: usize, entry: FaqEntry, open: Signal<Option<usize>>) -> Element {
    let mut open = open;
    let is_open = open() == Some(index);
    let class = if is_open {
        "faq-item faq-item--open"
    } else {
        "faq-item"
    };
    let answer_id = format!("faq-answer-{index}");

    rsx! {
        div { class: "{class}",
            button {
                r#type: "button",
                class: "faq-item__question",
                aria_expanded: "{is_open}",
                aria_controls: "{answer_id}",
                onclick: move |_| {
                    let next = if open() == Some(index) { None } else { Some(index) };
                    open.set(next);
                },
                span { class: "faq-item__text", "{entry.question}" }
                span { class: "faq-item__icon", aria_hidden: "true",
                    if is_open { "−" } else { "+" }
                }
            }
            div {
                id: "{answer_id}",
                class: "faq-item__answer",
                hidden: !is_open,
                p { "{entry.answer}" }
            }
        }
    }
}
