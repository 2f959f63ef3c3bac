use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::{Landing, SiteError, SiteHandle};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    // Single-page site: any other path still serves the landing page.
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }

        Router::<Route> {}
    }
}

/// Validated site, or the reason it failed. Computed once per app.
fn use_site() -> Result<SiteHandle, String> {
    use_hook(|| {
        ui::site::load().map_err(|err: SiteError| {
            tracing::error!(%err, "site content failed validation");
            err.to_string()
        })
    })
}

#[component]
fn Home() -> Element {
    match use_site() {
        Ok(site) => rsx! { Landing { site } },
        Err(message) => rsx! {
            p { class: "boot-error", "{message}" }
        },
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "unknown path, serving landing page");
    rsx! { Home {} }
}
