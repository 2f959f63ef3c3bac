//! Browser glue for scroll tracking, section reveal and smooth scrolling.
//!
//! On `wasm32` these talk to `web-sys`. Native builds (tests, tooling) get
//! inert versions with the same signatures: no scroll events ever arrive and
//! reveal latches fire as soon as a section mounts, so content is never left
//! hidden.

use super::reveal::RevealOutcome;
use super::scroll::ScrollSample;
use super::sections::SectionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Native,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Native
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use js_sys::{Array, Function};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{
        IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
        ScrollBehavior, ScrollToOptions, Window,
    };

    use crate::core::reveal::{RevealOutcome, REVEAL_THRESHOLD};
    use crate::core::scroll::{ScrollSample, SectionBounds};
    use crate::core::sections::SectionId;

    /// Measure the window offset and every section present in the DOM.
    pub fn sample_scroll() -> Option<ScrollSample> {
        let window = web_sys::window()?;
        let scroll_y = window.scroll_y().ok()?;
        let document = window.document()?;
        let sections = SectionId::ALL
            .into_iter()
            .filter_map(|id| {
                let element = document.get_element_by_id(id.anchor())?;
                let rect = element.get_bounding_client_rect();
                Some(SectionBounds::new(id, rect.top(), rect.bottom()))
            })
            .collect();
        Some(ScrollSample::new(scroll_y, sections))
    }

    pub fn scroll_to_top() {
        let Some(window) = web_sys::window() else {
            return;
        };
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }

    /// Window `scroll` listener. Removed when dropped.
    pub struct ScrollListener {
        window: Window,
        callback: Closure<dyn FnMut()>,
    }

    impl ScrollListener {
        pub fn attach(mut on_sample: impl FnMut(ScrollSample) + 'static) -> Option<Self> {
            let window = web_sys::window()?;
            let callback = Closure::<dyn FnMut()>::new(move || {
                if let Some(sample) = sample_scroll() {
                    on_sample(sample);
                }
            });
            if let Err(err) =
                window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            {
                tracing::warn!(?err, "could not attach scroll listener");
                return None;
            }

            // Initial measurement so a reload mid-page is reflected without scrolling.
            let _ = callback
                .as_ref()
                .unchecked_ref::<Function>()
                .call0(&JsValue::NULL);

            Some(Self { window, callback })
        }
    }

    impl Drop for ScrollListener {
        fn drop(&mut self) {
            let _ = self.window.remove_event_listener_with_callback(
                "scroll",
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }

    /// `IntersectionObserver` feeding one section's reports to `on_report`
    /// until the answer says to stop. Also disconnects when dropped.
    pub struct RevealObserver {
        observer: IntersectionObserver,
        _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
    }

    impl RevealObserver {
        pub fn observe(
            id: SectionId,
            mut on_report: impl FnMut(f64, bool) -> RevealOutcome + 'static,
        ) -> Option<Self> {
            let document = web_sys::window()?.document()?;
            let Some(target) = document.get_element_by_id(id.anchor()) else {
                tracing::warn!(section = %id, "reveal target missing from DOM");
                return None;
            };

            let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                move |entries: Array, observer: IntersectionObserver| {
                    let entries = entries
                        .iter()
                        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok());
                    for entry in entries {
                        let outcome = on_report(entry.intersection_ratio(), entry.is_intersecting());
                        if outcome.should_disconnect() {
                            observer.disconnect();
                            break;
                        }
                    }
                },
            );

            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
            let observer = match IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &options,
            ) {
                Ok(observer) => observer,
                Err(err) => {
                    tracing::warn!(section = %id, ?err, "IntersectionObserver unavailable");
                    return None;
                }
            };
            // The browser delivers an initial report right after `observe`, so a
            // section already in view fires without any scroll.
            observer.observe(&target);

            Some(Self {
                observer,
                _callback: callback,
            })
        }
    }

    impl Drop for RevealObserver {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use crate::core::reveal::RevealOutcome;
    use crate::core::scroll::ScrollSample;
    use crate::core::sections::SectionId;

    pub fn sample_scroll() -> Option<ScrollSample> {
        None
    }

    pub fn scroll_to_top() {
        tracing::debug!("scroll_to_top has no effect outside the browser");
    }

    pub struct ScrollListener;

    impl ScrollListener {
        pub fn attach(_on_sample: impl FnMut(ScrollSample) + 'static) -> Option<Self> {
            None
        }
    }

    pub struct RevealObserver;

    impl RevealObserver {
        /// Nothing to observe natively: report the section fully visible once.
        pub fn observe(
            _id: SectionId,
            mut on_report: impl FnMut(f64, bool) -> RevealOutcome + 'static,
        ) -> Option<Self> {
            on_report(1.0, true);
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::{RevealObserver, ScrollListener};
#[cfg(target_arch = "wasm32")]
pub use web::{RevealObserver, ScrollListener};

/// Current layout measurement, if running in a browser.
pub fn sample_scroll() -> Option<ScrollSample> {
    #[cfg(target_arch = "wasm32")]
    {
        web::sample_scroll()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        native::sample_scroll()
    }
}

/// Smoothly scroll the window back to offset zero.
pub fn scroll_to_top() {
    #[cfg(target_arch = "wasm32")]
    web::scroll_to_top();
    #[cfg(not(target_arch = "wasm32"))]
    native::scroll_to_top();
}

/// Start watching `id`. Each intersection report (ratio, is_intersecting) is
/// handed to `on_report`; observation stops once its outcome says to disconnect.
pub fn observe_reveal(
    id: SectionId,
    on_report: impl FnMut(f64, bool) -> RevealOutcome + 'static,
) -> Option<RevealObserver> {
    RevealObserver::observe(id, on_report)
}
