#![cfg(test)]
/*!
Theme selector lint for the web build.

Purpose:
- Ensure that the CSS classes the shared components toggle at runtime stay
  defined in the stylesheets bundled from `ui/assets/`.
- A missing state class (for example `.reveal--visible`) would not fail any
  Rust test: the section would just stay invisible. This catches that early.

How it works:
- Both stylesheets are embedded with `include_str!` from the shared `ui/`
  location (the same files `asset!` bundles).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the Dioxus component markup.
    2. Adjust the lists below accordingly.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

/// Selectors the page components rely on.
const THEME_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".landing {",
    ".section {",
    ".section__title",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--ghost",
    // Reveal latch
    ".reveal {",
    ".reveal--visible",
    // Sections
    ".hero__title",
    ".services__grid",
    ".service-card",
    ".pricing__grid",
    ".plan-card {",
    ".plan-card--highlighted",
    ".plan-card__badge",
    ".works__grid",
    ".testimonial {",
    ".process__steps",
    ".process-step__number",
    ".faq-item {",
    ".faq-item--open",
    ".faq-item__answer",
    ".contact__layout",
    ".contact-form__field",
    ".contact-details",
    ".footer {",
    // Scroll-to-top
    ".scroll-top {",
    ".scroll-top--visible",
    // Startup failure
    ".boot-error",
];

const NAVBAR_SELECTORS: &[&str] = &[
    ".navbar {",
    ".navbar__brand",
    ".navbar__link {",
    ".navbar__link--active",
    ".navbar__links {",
    ".navbar__links--open",
    ".navbar__toggle {",
    ".navbar__toggle--open",
    ".navbar__locale",
    ".visually-hidden",
];

fn missing<'a>(css: &str, selectors: &[&'a str]) -> Vec<&'a str> {
    selectors
        .iter()
        .copied()
        .filter(|sel| !css.contains(sel))
        .collect()
}

#[test]
fn theme_contains_required_selectors() {
    let missing = missing(THEME_CSS, THEME_SELECTORS);
    assert!(
        missing.is_empty(),
        "Missing required selectors in ui/assets/theme/main.css: {missing:?}"
    );
}

#[test]
fn navbar_contains_required_selectors() {
    let missing = missing(NAVBAR_CSS, NAVBAR_SELECTORS);
    assert!(
        missing.is_empty(),
        "Missing required selectors in ui/assets/styling/navbar.css: {missing:?}"
    );
}

#[test]
fn mobile_breakpoint_collapses_the_menu() {
    // The open-menu class only matters inside the small-screen media query.
    let Some(start) = NAVBAR_CSS.find("@media (max-width: 720px)") else {
        panic!("navbar.css lost its mobile breakpoint");
    };
    let mobile = &NAVBAR_CSS[start..];
    assert!(mobile.contains(".navbar__links--open"));
    assert!(mobile.contains(".navbar__toggle {"));
}

#[test]
fn smooth_scrolling_is_enabled() {
    assert!(THEME_CSS.contains("scroll-behavior: smooth"));
    assert!(THEME_CSS.contains("scroll-margin-top"));
}
