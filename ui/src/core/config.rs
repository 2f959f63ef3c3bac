//! Site configuration: locale declaration and agency contact details.
//!
//! Read from the embedded `site.toml` once at startup and validated before any
//! view renders. Nothing here is editable at runtime; the language selector
//! only chooses among `supported_locales`.

use serde::Deserialize;
use thiserror::Error;

use crate::i18n::Locale;

const SITE_TOML: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/site.toml"));

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteConfig {
    pub agency_name: String,
    #[serde(default)]
    pub default_locale: Locale,
    pub supported_locales: Vec<Locale>,
    pub contact: ContactDetails,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactDetails {
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site.toml is not valid: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("site.toml declares no supported locales")]
    NoLocales,
    #[error("default locale `{0}` is not in supported_locales")]
    DefaultNotSupported(Locale),
    #[error("locale `{0}` is listed twice in supported_locales")]
    DuplicateLocale(Locale),
}

impl SiteConfig {
    /// Parse and validate the embedded `site.toml`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_toml(SITE_TOML)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.supported_locales.is_empty() {
            return Err(ConfigError::NoLocales);
        }
        for (i, locale) in self.supported_locales.iter().enumerate() {
            if self.supported_locales[..i].contains(locale) {
                return Err(ConfigError::DuplicateLocale(*locale));
            }
        }
        if !self.supported_locales.contains(&self.default_locale) {
            return Err(ConfigError::DefaultNotSupported(self.default_locale));
        }
        Ok(())
    }

    pub fn supports(&self, locale: Locale) -> bool {
        self.supported_locales.contains(&locale)
    }
}
