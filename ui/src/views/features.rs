use dioxus::prelude::*;

use crate::components::icons::{HeartIcon, MicIcon, TrendingUpIcon};
use crate::components::{FeatureCard, Tint};
use crate::t;

#[component]
pub fn Features() -> Element {
    let _lang = crate::i18n::use_locale();

    rsx! {
        section { class: "section features",
            div { class: "section__inner",
                header { class: "features__header",
                    h2 { class: "section__title", {t!("features-title")} }
                    p { class: "section__lead", {t!("features-intro")} }
                }

                div { class: "features__grid",
                    FeatureCard {
                        icon: rsx! { HeartIcon { class: "icon--lg" } },
                        title: t!("feature-reflections-title"),
                        subtitle: t!("feature-reflections-subtitle"),
                        description: t!("feature-reflections-body"),
                        tint: Tint::Green,
                    }
                    FeatureCard {
                        icon: rsx! { span { class: "feature-card__emoji", "😊" } },
                        title: t!("feature-moods-title"),
                        subtitle: t!("feature-moods-subtitle"),
                        description: t!("feature-moods-body"),
                        tint: Tint::Lavender,
                    }
                    FeatureCard {
                        icon: rsx! { TrendingUpIcon { class: "icon--lg" } },
                        title: t!("feature-insights-title"),
                        subtitle: t!("feature-insights-subtitle"),
                        description: t!("feature-insights-body"),
                        tint: Tint::Teal,
                    }
                    FeatureCard {
                        icon: rsx! { MicIcon { class: "icon--lg" } },
                        title: t!("feature-voice-title"),
                        subtitle: t!("feature-voice-subtitle"),
                        description: t!("feature-voice-body"),
                        tint: Tint::Coral,
                    }
                }
            }
        }
    }
}
