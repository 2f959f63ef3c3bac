use std::collections::{BTreeMap, BTreeSet};

/// Translation completeness test.
/// Every locale must define exactly the keys of the fallback (en-US)
/// `agency-ui.ftl`: a missing key would leave a hole in the page, and the
/// per-locale loaders never fall back to English to cover it.
///
/// This reads the files directly (not through the embedded loader) so it
/// still reports every problem at once when the library refuses to start.
///
/// If you add a new locale:
/// 1. Create `ui/i18n/<tag>/agency-ui.ftl`
/// 2. Copy all keys from `en-US/agency-ui.ftl`
/// 3. Register it in `LOCALES` below and run `cargo test -p agency-ui`.
const EN_US: &str = include_str!("../i18n/en-US/agency-ui.ftl");
const TH_TH: &str = include_str!("../i18n/th-TH/agency-ui.ftl");
const ZH_CN: &str = include_str!("../i18n/zh-CN/agency-ui.ftl");

const LOCALES: &[(&str, &str)] = &[("th-TH", TH_TH), ("zh-CN", ZH_CN)];

#[test]
fn all_locales_have_exactly_the_fallback_keys() {
    let fallback = entries(EN_US, "en-US");
    assert!(!fallback.is_empty(), "Fallback (en-US) contains no keys.");
    let fallback_keys: BTreeSet<&str> = fallback.keys().map(String::as_str).collect();

    let mut failures = Vec::new();
    for (locale, src) in LOCALES {
        let keys: BTreeSet<String> = entries(src, locale).into_keys().collect();
        let keys: BTreeSet<&str> = keys.iter().map(String::as_str).collect();

        let missing: Vec<_> = fallback_keys.difference(&keys).collect();
        let extra: Vec<_> = keys.difference(&fallback_keys).collect();
        if !missing.is_empty() {
            failures.push(format!("{locale} is missing: {missing:?}"));
        }
        if !extra.is_empty() {
            failures.push(format!("{locale} has keys en-US lacks: {extra:?}"));
        }
    }

    assert!(
        failures.is_empty(),
        "Translation completeness check failed:\n  {}\n\nHint: copy the missing keys from en-US, then translate.",
        failures.join("\n  ")
    );
}

#[test]
fn no_value_is_blank() {
    for (locale, src) in [("en-US", EN_US)].iter().chain(LOCALES) {
        let blank: Vec<_> = entries(src, locale)
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(key, _)| key)
            .collect();
        assert!(blank.is_empty(), "{locale} has empty values: {blank:?}");
    }
}

#[test]
fn navigation_is_actually_translated() {
    // Prices, names and addresses may legitimately match English; menu labels may not.
    let fallback = entries(EN_US, "en-US");
    for (locale, src) in LOCALES {
        let values = entries(src, locale);
        let untranslated: Vec<_> = values
            .iter()
            .filter(|(key, _)| key.starts_with("nav-"))
            .filter(|(key, value)| fallback.get(*key) == Some(*value))
            .map(|(key, _)| key.as_str())
            .collect();
        assert!(
            untranslated.is_empty(),
            "{locale} copies English navigation labels: {untranslated:?}"
        );
    }
}

#[test]
fn numbered_lists_are_contiguous() {
    // `service-1`, `service-2`, ... must not skip a number, or the page
    // silently stops listing at the gap.
    let keys: BTreeSet<String> = entries(EN_US, "en-US").into_keys().collect();
    for (prefix, field) in [
        ("service", "title"),
        ("pricing-plan", "name"),
        ("testimonial", "quote"),
        ("step", "title"),
        ("faq", "question"),
        ("contact-business", "option"),
    ] {
        let count = (1..)
            .take_while(|n| keys.contains(&format!("{prefix}-{n}-{field}")))
            .count();
        assert!(count > 0, "list `{prefix}` is empty");
        let stray = keys
            .iter()
            .filter(|k| k.starts_with(&format!("{prefix}-")) && k.ends_with(&format!("-{field}")))
            .count();
        assert_eq!(count, stray, "list `{prefix}` has a gap after item {count}");
    }
}

/// Message key to value, panicking on duplicate definitions.
/// One message per line, so attributes and continuation lines are skipped.
fn entries(src: &str, locale: &str) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    let mut dups = BTreeSet::new();

    for raw in src.lines() {
        if raw.starts_with(char::is_whitespace) {
            continue;
        }
        let line = raw.trim_end();
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() || key.contains(char::is_whitespace) {
            continue;
        }
        if out
            .insert(key.to_string(), value.trim().to_string())
            .is_some()
        {
            dups.insert(format!("{key}  (line: \"{raw}\")"));
        }
    }

    assert!(
        dups.is_empty(),
        "Duplicate key definitions in {locale}:\n  {}",
        dups.into_iter().collect::<Vec<_>>().join("\n  ")
    );
    out
}
