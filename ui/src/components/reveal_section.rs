use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::platform::{self, RevealObserver};
use crate::core::sections::SectionId;
use crate::core::view_state::ViewState;

/// A page `section` that fades in the first time it becomes visible.
///
/// Observation starts once the element is mounted (so a section already on
/// screen reveals without waiting for a scroll). Every report goes through
/// `ViewState::observe_intersection`, and observation ends as soon as its
/// outcome says to disconnect. The observer handle lives in a hook and is dropped, disconnecting
/// it, if the section unmounts first.
#[component]
pub fn RevealSection(
    state: Signal<ViewState>,
    id: SectionId,
    #[props(into)] class: String,
    children: Element,
) -> Element {
    let revealed = use_memo(move || state.read().is_revealed(id));
    let observer = use_hook(|| Rc::new(RefCell::new(None::<RevealObserver>)));

    let on_mounted = move |_: MountedEvent| {
        if state.peek().is_revealed(id) {
            return;
        }
        let mut state = state;
        let handle = platform::observe_reveal(id, move |ratio, is_intersecting| {
            state.write().observe_intersection(id, ratio, is_intersecting)
        });
        *observer.borrow_mut() = handle;
    };

    let reveal_class = if revealed() {
        "reveal reveal--visible"
    } else {
        "reveal"
    };

    rsx! {
        section {
            id: id.anchor(),
            class: "{class} {reveal_class}",
            onmounted: on_mounted,
            {children}
        }
    }
}
