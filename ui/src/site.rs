//! Validated site content: configuration plus every translation bundle.

use std::ops::Deref;

use once_cell::sync::OnceCell;
use thiserror::Error;

use crate::content::{Catalog, TranslationBundle};
use crate::core::config::{ConfigError, SiteConfig};
use crate::core::platform::Platform;
use crate::i18n::{CatalogError, Locale};

#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    pub config: SiteConfig,
    pub catalog: Catalog,
}

#[derive(Debug, Error)]
pub enum SiteError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

static SITE: OnceCell<Site> = OnceCell::new();

impl Site {
    pub fn build() -> Result<Self, SiteError> {
        let config = SiteConfig::load()?;
        let catalog = Catalog::load()?;
        Ok(Self { config, catalog })
    }

    pub fn bundle(&self, locale: Locale) -> &TranslationBundle {
        self.catalog.bundle(locale)
    }
}

/// Handle to the validated site for component props. Compares by identity.
#[derive(Debug, Clone, Copy)]
pub struct SiteHandle(&'static Site);

impl SiteHandle {
    pub fn get(self) -> &'static Site {
        self.0
    }

    pub fn bundle(self, locale: Locale) -> &'static TranslationBundle {
        self.0.bundle(locale)
    }
}

impl PartialEq for SiteHandle {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.0, other.0)
    }
}

impl Deref for SiteHandle {
    type Target = Site;

    fn deref(&self) -> &Site {
        self.0
    }
}

/// Validate the site once and keep it for the life of the page.
/// A failed validation is not cached, so the error is reported on every call.
pub fn load() -> Result<SiteHandle, SiteError> {
    SITE.get_or_try_init(|| {
        let site = Site::build()?;
        tracing::info!(
            agency = %site.config.agency_name,
            default_locale = %site.config.default_locale,
            locales = ?site.config.supported_locales,
            platform = ?Platform::current(),
            "site content validated"
        );
        Ok(site)
    })
    .map(SiteHandle)
}
