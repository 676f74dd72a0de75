use dioxus::prelude::*;

use crate::i18n;
use crate::t;

/// Language picker. Hidden when only one locale is embedded.
///
/// On change it switches the shared loader and bumps the `Signal<String>`
/// language context so every `use_locale` subscriber re-renders.
#[component]
pub fn LocaleSwitcher() -> Element {
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let current = lang_code_ctx
        .map(|code| code())
        .unwrap_or_else(|| i18n::FALLBACK_LANGUAGE.to_string());
    let langs = use_signal(i18n::available_languages);

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!(%err, lang = %val, "language switch failed"),
        }
    };

    if langs().len() < 2 {
        return rsx! {};
    }

    rsx! {
        div { class: "locale-switcher",
            label { class: "visually-hidden", r#for: "locale-select", {t!("footer-language-label")} }
            select {
                id: "locale-select",
                class: "locale-switcher__select",
                value: "{current}",
                oninput: on_change,
                for code in langs() {
                    option { key: "{code}", value: "{code}", selected: code == current, "{code}" }
                }
            }
        }
    }
}
