use dioxus::prelude::*;

use super::icons::CheckIcon;
use super::toast::use_toasts;
use crate::core::waitlist::{self, WaitlistClient, WaitlistSession};
use crate::t;

/// Signup form, swapped for a confirmation panel once a submit succeeds.
///
/// Submits are not debounced or locked: overlapping requests each settle on
/// their own, and the store's unique constraint catches repeats.
#[component]
pub fn WaitlistForm() -> Element {
    let _lang = crate::i18n::use_locale();
    let client = use_context::<WaitlistClient>();
    let toasts = use_toasts();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut session = use_signal(WaitlistSession::default);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let mut toasts = toasts;
        spawn(async move {
            let outcome = waitlist::submit(client.store(), &email(), &name()).await;
            if let Some(outcome) = outcome {
                session.write().settle(&outcome, &mut toasts);
            }
        });
    };

    if session().submitted {
        return rsx! {
            div { class: "waitlist-confirmation",
                div { class: "waitlist-confirmation__badge",
                    CheckIcon { class: "icon--lg" }
                }
                h3 { class: "waitlist-confirmation__title", {t!("waitlist-confirm-title")} }
                p { class: "waitlist-confirmation__body", {t!("waitlist-confirm-body")} }
            }
        };
    }

    rsx! {
        form { class: "waitlist-form", onsubmit: on_submit,
            div { class: "waitlist-form__fields",
                input {
                    class: "waitlist-input",
                    r#type: "text",
                    name: "name",
                    placeholder: t!("waitlist-name-placeholder"),
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
                input {
                    class: "waitlist-input",
                    r#type: "email",
                    name: "email",
                    placeholder: t!("waitlist-email-placeholder"),
                    required: true,
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
            }
            button { class: "button button--primary waitlist-form__submit", r#type: "submit",
                {t!("waitlist-submit")}
            }
        }
    }
}
