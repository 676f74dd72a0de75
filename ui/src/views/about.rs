use dioxus::prelude::*;

use crate::t;

#[component]
pub fn About() -> Element {
    let _lang = crate::i18n::use_locale();
    let quote = t!("about-quote");

    rsx! {
        section { class: "section about",
            div { class: "section__inner section__inner--narrow",
                h2 { class: "section__title", {t!("about-title")} }
                p { class: "section__lead", {t!("about-body")} }
                blockquote { class: "about__quote",
                    p { "“{quote}”" }
                }
            }
        }
    }
}
