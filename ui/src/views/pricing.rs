use dioxus::prelude::*;

use crate::components::RevealSection;
use crate::content::PricingPlan;
use crate::core::sections::SectionId;
use crate::core::view_state::ViewState;
use crate::i18n::Locale;
use crate::site::SiteHandle;

use super::SectionHeading;

#[component]
pub fn PricingSection(state: Signal<ViewState>, site: SiteHandle, locale: Locale) -> Element {
    let pricing = &site.bundle(locale).pricing;

    rsx! {
        RevealSection { state, id: SectionId::Pricing, class: "section pricing",
            SectionHeading { heading: pricing.heading.clone() }
            div { class: "pricing__grid",
                for (i, plan) in pricing.plans.iter().enumerate() {
                    PlanCard {
                        key: "{i}",
                        plan: plan.clone(),
                        setup_label: pricing.setup_label.clone(),
                        monthly_label: pricing.monthly_label.clone(),
                        cta: pricing.cta.clone(),
                    }
                }
            }
        }
    }
}

#[component]
fn PlanCard(plan: PricingPlan, setup_label: String, monthly_label: String, cta: String) -> Element {
    let class = if plan.is_highlighted() {
        "plan-card plan-card--highlighted"
    } else {
        "plan-card"
    };
    let button_class = if plan.is_highlighted() {
        "button button--primary"
    } else {
        "button button--ghost"
    };

    rsx! {
        article { class: "{class}",
            if let Some(badge) = plan.badge.as_deref() {
                span { class: "plan-card__badge", "{badge}" }
            }
            h3 { class: "plan-card__name", "{plan.name}" }
            p { class: "plan-card__description", "{plan.description}" }
            div { class: "plan-card__prices",
                p { class: "plan-card__price",
                    span { class: "plan-card__amount", "{plan.setup_price}" }
                    span { class: "plan-card__period", "{setup_label}" }
                }
                p { class: "plan-card__price plan-card__price--monthly",
                    span { class: "plan-card__amount", "{plan.monthly_price}" }
                    span { class: "plan-card__period", "{monthly_label}" }
                }
            }
            ul { class: "plan-card__features",
                for (i, feature) in plan.features.iter().enumerate() {
                    li { key: "{i}", class: "plan-card__feature", "{feature}" }
                }
            }
            a { class: "{button_class}", href: SectionId::Contact.href(), "{cta}" }
        }
    }
}
