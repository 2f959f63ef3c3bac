use dioxus::prelude::*;

use crate::core::platform;
use crate::core::view_state::ViewState;

/// Floating "back to top" button, shown once the page is scrolled past the
/// scroll-top threshold.
#[component]
pub fn ScrollTopButton(state: Signal<ViewState>, #[props(into)] label: String) -> Element {
    let visible = use_memo(move || state.read().scroll_top_visible);

    let class = if visible() {
        "scroll-top scroll-top--visible"
    } else {
        "scroll-top"
    };
    let hidden = !visible();
    let tabindex = if hidden { "-1" } else { "0" };

    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            title: "{label}",
            aria_label: "{label}",
            aria_hidden: "{hidden}",
            tabindex: "{tabindex}",
            onclick: move |_| platform::scroll_to_top(),
            "↑"
        }
    }
}
