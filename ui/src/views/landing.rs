use dioxus::prelude::*;

use super::{About, Features, Footer, Hero};
use crate::components::ThemeToggle;
use crate::core::theme::Theme;

/// The whole single-page site.
#[component]
pub fn Landing() -> Element {
    let theme = use_context::<Signal<Theme>>();

    rsx! {
        div { class: "landing {theme().css_class()}",
            ThemeToggle {}
            Hero {}
            About {}
            Features {}
            Footer {}
        }
    }
}
