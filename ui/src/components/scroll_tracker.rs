use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::platform::ScrollListener;
use crate::core::view_state::ViewState;

/// Keep `scroll_top_visible` and `active_section` in step with the window.
///
/// The listener is attached after the first render (sections must be in the
/// DOM to be measured) and removed when the owning component unmounts.
/// Samples that would not change the state skip the signal write.
pub fn use_scroll_tracker(state: Signal<ViewState>) {
    let listener = use_hook(|| Rc::new(RefCell::new(None::<ScrollListener>)));

    use_effect(move || {
        if listener.borrow().is_some() {
            return;
        }
        let mut state = state;
        let handle = ScrollListener::attach(move |sample| {
            if state.peek().scroll_changes(&sample) {
                state.write().apply_scroll(&sample);
            }
        });
        *listener.borrow_mut() = handle;
    });
}
