use dioxus::prelude::*;

use crate::components::icons::FlowerIcon;
use crate::components::WaitlistForm;
use crate::t;

#[component]
pub fn Hero() -> Element {
    let _lang = crate::i18n::use_locale();

    rsx! {
        section { class: "hero",
            div { class: "hero__floats", "aria-hidden": "true",
                span { class: "hero__float hero__float--coral" }
                span { class: "hero__float hero__float--teal", style: "animation-delay: 2s" }
                span { class: "hero__float hero__float--lavender", style: "animation-delay: 4s" }
            }

            div { class: "hero__inner fade-in",
                div { class: "hero__logo",
                    FlowerIcon { class: "icon--xl" }
                }
                h1 { class: "hero__title", {t!("brand-name")} }
                p { class: "hero__tagline", {t!("hero-tagline")} }
                WaitlistForm {}
            }
        }
    }
}
