//! Typed page content per language.
//!
//! A `TranslationBundle` is resolved once per locale from that locale's Fluent
//! loader. Scalar strings go through `t!` (compile-time checked keys); ordered
//! lists use numbered keys, `<list>-<n>-<field>` starting at 1, and end at the
//! first missing index. `Catalog::load` builds all bundles after the key sets
//! have been checked, so lists line up across languages.

use i18n_embed::fluent::FluentLanguageLoader;

use crate::core::sections::SectionId;
use crate::i18n::{self, CatalogError, Locale};
use crate::t;

#[derive(Debug, Clone, PartialEq)]
pub struct NavLabels {
    pub home: String,
    pub services: String,
    pub pricing: String,
    pub works: String,
    pub how: String,
    pub faq: String,
    pub contact: String,
    pub cta: String,
    pub language_label: String,
    pub menu_toggle: String,
}

impl NavLabels {
    pub fn label(&self, section: SectionId) -> &str {
        match section {
            SectionId::Home => &self.home,
            SectionId::Services => &self.services,
            SectionId::Pricing => &self.pricing,
            SectionId::Works => &self.works,
            SectionId::How => &self.how,
            SectionId::Faq => &self.faq,
            SectionId::Contact => &self.contact,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroCopy {
    pub eyebrow: String,
    pub title: String,
    pub subtitle: String,
    pub cta_primary: String,
    pub cta_secondary: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    pub title: String,
    pub subtitle: String,
}

/// A section heading followed by an ordered list of items.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<T> {
    pub heading: Heading,
    pub items: Vec<T>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PricingPlan {
    pub name: String,
    pub setup_price: String,
    pub monthly_price: String,
    pub description: String,
    pub features: Vec<String>,
    /// Badge text of the highlighted plan.
    pub badge: Option<String>,
}

impl PricingPlan {
    pub fn is_highlighted(&self) -> bool {
        self.badge.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PricingCopy {
    pub heading: Heading,
    pub setup_label: String,
    pub monthly_label: String,
    pub cta: String,
    pub plans: Vec<PricingPlan>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessStep {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactCopy {
    pub heading: Heading,
    pub name_placeholder: String,
    pub email_placeholder: String,
    pub business_placeholder: String,
    pub business_options: Vec<String>,
    pub message_placeholder: String,
    pub submit: String,
    pub details_title: String,
    pub email_label: String,
    pub phone_label: String,
    pub address_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FooterCopy {
    pub rights: String,
    pub scroll_top_label: String,
}

/// Every display string of the page in one language.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationBundle {
    pub locale: Locale,
    pub nav: NavLabels,
    pub hero: HeroCopy,
    pub services: Listing<Service>,
    pub pricing: PricingCopy,
    pub works: Listing<Testimonial>,
    pub process: Listing<ProcessStep>,
    pub faq: Listing<FaqEntry>,
    pub contact: ContactCopy,
    pub footer: FooterCopy,
}

/// List lengths of a bundle; equal across languages when the files agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleShape {
    pub services: usize,
    pub plan_features: Vec<usize>,
    pub highlighted_plans: Vec<bool>,
    pub testimonials: usize,
    pub steps: usize,
    pub faq: usize,
    pub business_options: usize,
}

/// One numbered entry of a list (`<list>-<n>`).
struct Entry<'a> {
    loader: &'a FluentLanguageLoader,
    prefix: String,
}

impl Entry<'_> {
    fn key(&self, field: &str) -> String {
        format!("{}-{field}", self.prefix)
    }

    fn has(&self, field: &str) -> bool {
        self.loader.has(&self.key(field))
    }

    fn get(&self, field: &str) -> String {
        self.loader.get(&self.key(field))
    }

    fn optional(&self, field: &str) -> Option<String> {
        self.has(field).then(|| self.get(field))
    }
}

/// Collect `<list>-1-…`, `<list>-2-…` until `<list>-<n>-<probe>` is missing.
fn numbered<T>(
    loader: &FluentLanguageLoader,
    list: &str,
    probe: &str,
    build: impl Fn(&Entry<'_>) -> T,
) -> Vec<T> {
    (1..)
        .map(|n| Entry {
            loader,
            prefix: format!("{list}-{n}"),
        })
        .take_while(|entry| entry.has(probe))
        .map(|entry| build(&entry))
        .collect()
}

/// Collect plain values `<list>-1`, `<list>-2`, … until one is missing.
fn numbered_values(loader: &FluentLanguageLoader, list: &str) -> Vec<String> {
    (1..)
        .map(|n| format!("{list}-{n}"))
        .take_while(|key| loader.has(key))
        .map(|key| loader.get(&key))
        .collect()
}

impl TranslationBundle {
    /// Load and resolve the bundle of one locale.
    pub fn load(locale: Locale) -> Result<Self, CatalogError> {
        let loader = i18n::loader(locale)?;
        Ok(Self::resolve(locale, &loader))
    }

    pub fn resolve(locale: Locale, loader: &FluentLanguageLoader) -> Self {
        let nav = NavLabels {
            home: t!(loader, "nav-home"),
            services: t!(loader, "nav-services"),
            pricing: t!(loader, "nav-pricing"),
            works: t!(loader, "nav-works"),
            how: t!(loader, "nav-how"),
            faq: t!(loader, "nav-faq"),
            contact: t!(loader, "nav-contact"),
            cta: t!(loader, "nav-cta"),
            language_label: t!(loader, "nav-language-label"),
            menu_toggle: t!(loader, "nav-menu-toggle"),
        };

        let hero = HeroCopy {
            eyebrow: t!(loader, "hero-eyebrow"),
            title: t!(loader, "hero-title"),
            subtitle: t!(loader, "hero-subtitle"),
            cta_primary: t!(loader, "hero-cta-primary"),
            cta_secondary: t!(loader, "hero-cta-secondary"),
        };

        let services = Listing {
            heading: Heading {
                title: t!(loader, "services-title"),
                subtitle: t!(loader, "services-subtitle"),
            },
            items: numbered(loader, "service", "title", |e| Service {
                title: e.get("title"),
                body: e.get("body"),
            }),
        };

        let pricing = PricingCopy {
            heading: Heading {
                title: t!(loader, "pricing-title"),
                subtitle: t!(loader, "pricing-subtitle"),
            },
            setup_label: t!(loader, "pricing-setup-label"),
            monthly_label: t!(loader, "pricing-monthly-label"),
            cta: t!(loader, "pricing-cta"),
            plans: numbered(loader, "pricing-plan", "name", |e| PricingPlan {
                name: e.get("name"),
                setup_price: e.get("setup"),
                monthly_price: e.get("monthly"),
                description: e.get("description"),
                features: numbered_values(loader, &e.key("feature")),
                badge: e.optional("badge"),
            }),
        };

        let works = Listing {
            heading: Heading {
                title: t!(loader, "works-title"),
                subtitle: t!(loader, "works-subtitle"),
            },
            items: numbered(loader, "testimonial", "quote", |e| Testimonial {
                quote: e.get("quote"),
                author: e.get("author"),
                role: e.get("role"),
            }),
        };

        let process = Listing {
            heading: Heading {
                title: t!(loader, "how-title"),
                subtitle: t!(loader, "how-subtitle"),
            },
            items: numbered(loader, "step", "title", |e| ProcessStep {
                title: e.get("title"),
                body: e.get("body"),
            }),
        };

        let faq = Listing {
            heading: Heading {
                title: t!(loader, "faq-title"),
                subtitle: t!(loader, "faq-subtitle"),
            },
            items: numbered(loader, "faq", "question", |e| FaqEntry {
                question: e.get("question"),
                answer: e.get("answer"),
            }),
        };

        let contact = ContactCopy {
            heading: Heading {
                title: t!(loader, "contact-title"),
                subtitle: t!(loader, "contact-subtitle"),
            },
            name_placeholder: t!(loader, "contact-name-placeholder"),
            email_placeholder: t!(loader, "contact-email-placeholder"),
            business_placeholder: t!(loader, "contact-business-placeholder"),
            business_options: numbered(loader, "contact-business", "option", |e| e.get("option")),
            message_placeholder: t!(loader, "contact-message-placeholder"),
            submit: t!(loader, "contact-submit"),
            details_title: t!(loader, "contact-details-title"),
            email_label: t!(loader, "contact-email-label"),
            phone_label: t!(loader, "contact-phone-label"),
            address_label: t!(loader, "contact-address-label"),
        };

        let footer = FooterCopy {
            rights: t!(loader, "footer-rights"),
            scroll_top_label: t!(loader, "scroll-top-label"),
        };

        Self {
            locale,
            nav,
            hero,
            services,
            pricing,
            works,
            process,
            faq,
            contact,
            footer,
        }
    }

    pub fn shape(&self) -> BundleShape {
        BundleShape {
            services: self.services.items.len(),
            plan_features: self.pricing.plans.iter().map(|p| p.features.len()).collect(),
            highlighted_plans: self.pricing.plans.iter().map(PricingPlan::is_highlighted).collect(),
            testimonials: self.works.items.len(),
            steps: self.process.items.len(),
            faq: self.faq.items.len(),
            business_options: self.contact.business_options.len(),
        }
    }
}

/// Bundles for every `Locale`, verified against each other.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    en: TranslationBundle,
    th: TranslationBundle,
    zh: TranslationBundle,
}

impl Catalog {
    pub fn load() -> Result<Self, CatalogError> {
        i18n::verify_parity()?;

        let catalog = Self {
            en: TranslationBundle::load(Locale::En)?,
            th: TranslationBundle::load(Locale::Th)?,
            zh: TranslationBundle::load(Locale::Zh)?,
        };

        let reference = catalog.bundle(i18n::FALLBACK).shape();
        for locale in Locale::ALL {
            if catalog.bundle(locale).shape() != reference {
                return Err(CatalogError::ShapeMismatch(locale));
            }
        }
        Ok(catalog)
    }

    pub fn bundle(&self, locale: Locale) -> &TranslationBundle {
        match locale {
            Locale::En => &self.en,
            Locale::Th => &self.th,
            Locale::Zh => &self.zh,
        }
    }

    pub fn bundles(&self) -> impl Iterator<Item = &TranslationBundle> {
        Locale::ALL.into_iter().map(move |l| self.bundle(l))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::load().expect("embedded translations should load")
    }

    #[test]
    fn english_bundle_has_expected_lists() {
        let catalog = catalog();
        let en = catalog.bundle(Locale::En);
        assert_eq!(en.locale, Locale::En);
        assert_eq!(en.services.items.len(), 4);
        assert_eq!(en.pricing.plans.len(), 3);
        assert_eq!(en.works.items.len(), 3);
        assert_eq!(en.process.items.len(), 4);
        assert_eq!(en.faq.items.len(), 5);
        assert_eq!(en.contact.business_options.len(), 4);
        assert_eq!(en.pricing.plans[0].features.len(), 4);
        assert_eq!(en.pricing.plans[2].features.len(), 7);
    }

    #[test]
    fn exactly_one_highlighted_plan() {
        let catalog = catalog();
        for bundle in catalog.bundles() {
            let highlighted: Vec<_> = bundle
                .pricing
                .plans
                .iter()
                .filter(|p| p.is_highlighted())
                .map(|p| p.name.as_str())
                .collect();
            assert_eq!(highlighted.len(), 1, "{}: {highlighted:?}", bundle.locale);
        }
    }

    #[test]
    fn all_bundles_share_a_shape() {
        let catalog = catalog();
        let reference = catalog.bundle(Locale::En).shape();
        for bundle in catalog.bundles() {
            assert_eq!(bundle.shape(), reference, "{}", bundle.locale);
        }
    }

    #[test]
    fn bundles_are_not_copies_of_english() {
        let catalog = catalog();
        let en = catalog.bundle(Locale::En);
        for locale in [Locale::Th, Locale::Zh] {
            let other = catalog.bundle(locale);
            assert_ne!(other.nav, en.nav, "{locale} nav labels look untranslated");
            assert_ne!(other.hero.title, en.hero.title);
        }
    }

    #[test]
    fn nav_label_lookup_covers_every_section() {
        let catalog = catalog();
        let zh = catalog.bundle(Locale::Zh);
        assert_eq!(zh.nav.label(SectionId::Faq), "常见问题");
        for id in SectionId::ALL {
            assert!(!zh.nav.label(id).is_empty());
        }
    }

    #[test]
    fn numbered_lists_stop_at_first_gap() {
        let loader = i18n::loader(Locale::En).unwrap();
        assert!(numbered_values(&loader, "pricing-plan-9-feature").is_empty());
        let plans = numbered(&loader, "pricing-plan", "name", |e| e.get("name"));
        assert_eq!(plans, vec!["Starter", "Business", "Premium"]);
    }
}
