use dioxus::prelude::*;

use crate::components::icons::FlowerIcon;
use crate::t;

#[component]
pub fn NotFound() -> Element {
    let _lang = crate::i18n::use_locale();

    rsx! {
        section { class: "not-found",
            FlowerIcon { class: "icon--xl not-found__icon" }
            h1 { class: "not-found__title", {t!("not-found-title")} }
            a { class: "button button--primary", href: "/", {t!("not-found-back")} }
        }
    }
}
