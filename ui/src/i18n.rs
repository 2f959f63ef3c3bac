//! Internationalization (i18n) support for `agency-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (asset loading into a `FluentLanguageLoader`)
//! - `fluent` (syntax validation of each locale file)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/agency-ui.ftl   (fallback/reference)
//!   th-TH/agency-ui.ftl
//!   zh-CN/agency-ui.ftl
//! ```
//!
//! Unlike a typical app loader, every locale gets its own loader whose
//! fallback is itself: a Thai page never shows an English string. Missing keys
//! are caught before that can matter, by `verify_parity` at startup and by the
//! completeness tests.
//!
//! Usage (the `t!` macro takes the loader to read from):
//! ```ignore
//! let loader = ui::i18n::loader(Locale::Th)?;
//! let home = ui::t!(&loader, "nav-home");
//! ```
//!
//! To add a new locale:
//! 1. Add a `Locale` variant and its tag.
//! 2. Copy `en-US/agency-ui.ftl` to `i18n/<tag>/agency-ui.ftl` and translate values.
//! 3. Run tests to ensure completeness.
use std::collections::BTreeSet;
use std::fmt;

use fluent::FluentResource;
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::I18nEmbedError;
use rust_embed::Embed;
use serde::Deserialize;
use thiserror::Error;
use unic_langid::{LanguageIdentifier, LanguageIdentifierError};

pub use i18n_embed_fl::fl; // Re-export for the `t!` macro.

/// Checked translation lookup against an explicit loader.
/// Examples:
///     t!(&loader, "nav-home")
///     t!(&loader, "some-message", name = value)
///
/// Expands to `fl!(...)`, so keys are verified against the fallback file at
/// compile time.
#[macro_export]
macro_rules! t {
    ($loader:expr, $key:literal) => {
        $crate::i18n::fl!($loader, $key)
    };
    ($loader:expr, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!($loader, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the FTL filename).
pub const DOMAIN: &str = "agency-ui";

/// Locale every other file is compared against.
pub const FALLBACK: Locale = Locale::En;

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// A supported page language.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Th,
    Zh,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Th, Locale::Zh];

    /// Short code used in configuration and the selector's option values.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Th => "th",
            Locale::Zh => "zh",
        }
    }

    /// Fluent language tag; also the asset folder name.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en-US",
            Locale::Th => "th-TH",
            Locale::Zh => "zh-CN",
        }
    }

    /// Label shown in the language selector.
    pub fn short_label(self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Th => "ไทย",
            Locale::Zh => "中文",
        }
    }

    /// Accepts a short code (`th`) or a full tag (`th-TH`).
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(code) || l.tag().eq_ignore_ascii_case(code))
    }

    pub fn language_id(self) -> Result<LanguageIdentifier, LanguageIdentifierError> {
        self.tag().parse()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no translation file for `{locale}` (expected {path})")]
    MissingFile { locale: Locale, path: String },
    #[error("translation file for `{0}` is not valid UTF-8")]
    InvalidUtf8(Locale),
    #[error("translation file for `{locale}` has {count} syntax error(s)")]
    Syntax { locale: Locale, count: usize },
    #[error("translation file for `{locale}` defines `{key}` more than once")]
    DuplicateKey { locale: Locale, key: String },
    #[error(
        "`{locale}` keys differ from `{}`: missing [{}], extra [{}]",
        FALLBACK,
        .missing.join(", "),
        .extra.join(", ")
    )]
    KeyMismatch {
        locale: Locale,
        missing: Vec<String>,
        extra: Vec<String>,
    },
    #[error("`{0}` bundle lists differ in length from the fallback bundle")]
    ShapeMismatch(Locale),
    #[error("invalid language tag: {0}")]
    LanguageTag(#[from] LanguageIdentifierError),
    #[error("could not load translations: {0}")]
    Loader(#[from] I18nEmbedError),
}

fn ftl_path(locale: Locale) -> String {
    format!("{}/{DOMAIN}.ftl", locale.tag())
}

/// Raw FTL source embedded for `locale`.
pub fn source(locale: Locale) -> Result<String, CatalogError> {
    let path = ftl_path(locale);
    let file = Localizations::get(&path).ok_or_else(|| CatalogError::MissingFile {
        locale,
        path: path.clone(),
    })?;
    String::from_utf8(file.data.into_owned()).map_err(|_| CatalogError::InvalidUtf8(locale))
}

/// List embedded language folders (e.g. `en-US`).
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Extract message ids from an FTL source.
///
/// One message per line is the house style for these files, so a line of the
/// form `id = value` at column zero is a message. Comments, terms (`-term`),
/// attributes (`.attr`) and indented continuation lines are skipped.
pub fn message_ids(src: &str) -> BTreeSet<String> {
    message_id_lines(src).collect()
}

fn message_id_lines(src: &str) -> impl Iterator<Item = String> + '_ {
    src.lines().filter_map(|line| {
        if line.starts_with(char::is_whitespace) {
            return None;
        }
        let line = line.trim_end();
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') || line.starts_with('.') {
            return None;
        }
        let (id, _) = line.split_once('=')?;
        let id = id.trim();
        let valid = id.starts_with(|c: char| c.is_ascii_lowercase()) && id.chars().all(valid_key_char);
        valid.then(|| id.to_string())
    })
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Validate one locale file and return its message ids.
fn checked_ids(locale: Locale) -> Result<BTreeSet<String>, CatalogError> {
    let src = source(locale)?;
    if let Err((_, errors)) = FluentResource::try_new(src.clone()) {
        return Err(CatalogError::Syntax {
            locale,
            count: errors.len(),
        });
    }

    let mut ids = BTreeSet::new();
    for id in message_id_lines(&src) {
        if ids.contains(&id) {
            return Err(CatalogError::DuplicateKey { locale, key: id });
        }
        ids.insert(id);
    }
    Ok(ids)
}

/// Check that every locale defines exactly the fallback's key set.
pub fn verify_parity() -> Result<BTreeSet<String>, CatalogError> {
    let reference = checked_ids(FALLBACK)?;
    for locale in Locale::ALL.into_iter().filter(|l| *l != FALLBACK) {
        let ids = checked_ids(locale)?;
        let missing: Vec<String> = reference.difference(&ids).cloned().collect();
        let extra: Vec<String> = ids.difference(&reference).cloned().collect();
        if !missing.is_empty() || !extra.is_empty() {
            return Err(CatalogError::KeyMismatch {
                locale,
                missing,
                extra,
            });
        }
    }
    tracing::debug!(keys = reference.len(), "translation key sets match");
    Ok(reference)
}

/// Loader holding `locale` only (its fallback is itself).
pub fn loader(locale: Locale) -> Result<FluentLanguageLoader, CatalogError> {
    let lang = locale.language_id()?;
    let loader = FluentLanguageLoader::new(DOMAIN, lang.clone());
    i18n_embed::select(&loader, &Localizations, &[lang])?;
    Ok(loader)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_locale_has_an_embedded_folder() {
        let langs = available_languages();
        for locale in Locale::ALL {
            assert!(
                langs.iter().any(|l| l == locale.tag()),
                "missing folder for {}",
                locale.tag()
            );
        }
        assert_eq!(langs.len(), Locale::ALL.len(), "stray locale folder: {langs:?}");
    }

    #[test]
    fn codes_and_tags_parse_back() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
            assert_eq!(Locale::from_code(locale.tag()), Some(locale));
            assert!(locale.language_id().is_ok());
        }
        assert_eq!(Locale::from_code("fr"), None);
        assert_eq!(Locale::from_code(" TH "), Some(Locale::Th));
    }

    #[test]
    fn embedded_files_have_matching_keys() {
        let keys = verify_parity().expect("locale files should be in step");
        assert!(keys.contains("nav-home"));
    }

    #[test]
    fn basic_lookup_works() {
        let loader = loader(Locale::En).unwrap();
        assert_eq!(crate::t!(&loader, "nav-home"), "Home");
    }

    #[test]
    fn locale_loader_does_not_fall_back_to_english() {
        let th = loader(Locale::Th).unwrap();
        assert_eq!(crate::t!(&th, "nav-pricing"), "ราคา");
        let zh = loader(Locale::Zh).unwrap();
        assert_eq!(crate::t!(&zh, "nav-pricing"), "价格");
    }

    #[test]
    fn message_ids_skip_non_messages() {
        let src = "# comment\n-brand = Harbor\nnav-home = Home\n    .title = attr\n  continued = text\nbad id = x\nfaq-1-answer = a = b\n";
        let ids = message_ids(src);
        assert_eq!(
            ids.into_iter().collect::<Vec<_>>(),
            vec!["faq-1-answer".to_string(), "nav-home".to_string()]
        );
    }
}
