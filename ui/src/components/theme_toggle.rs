use dioxus::prelude::*;

use super::icons::{MoonIcon, SunIcon};
use crate::core::theme::{toggle_theme, DocumentRoot, Theme};
use crate::t;

/// Floating light/dark switch. Reads and writes the `Signal<Theme>` context.
#[component]
pub fn ThemeToggle() -> Element {
    let _lang = crate::i18n::use_locale();
    let mut theme = use_context::<Signal<Theme>>();

    let on_click = move |_: MouseEvent| {
        let mut next = theme();
        toggle_theme(&mut next, &mut DocumentRoot);
        theme.set(next);
    };

    rsx! {
        button {
            class: "theme-toggle",
            r#type: "button",
            aria_label: t!("theme-toggle-label"),
            onclick: on_click,
            if theme().is_dark() {
                SunIcon { class: "theme-toggle__icon theme-toggle__icon--sun" }
            } else {
                MoonIcon { class: "theme-toggle__icon theme-toggle__icon--moon" }
            }
        }
    }
}
