//! Toast stack rendering and the UI-side notifier.

use dioxus::prelude::*;

use super::icons::CloseIcon;
use crate::core::toast::{self, Notify, QueuedToast, Toast, ToastQueue, ToastSlot};
use crate::t;

/// Handle to the page's toast queue (provided by `AppProviders`).
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts(pub Signal<ToastQueue>);

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

impl ToastSlot for Signal<ToastQueue> {
    fn with_queue<R>(&mut self, f: impl FnOnce(&mut ToastQueue) -> R) -> R {
        f(&mut *self.write())
    }
}

impl Notify for Toasts {
    fn notify(&mut self, message: Toast) {
        let (_, expiry) = toast::show(self.0, message);
        spawn(expiry);
    }
}

#[component]
pub fn Toaster() -> Element {
    let _lang = crate::i18n::use_locale();
    let Toasts(queue) = use_toasts();
    let items = queue.read().items().to_vec();

    rsx! {
        ol { class: "toaster", role: "status", aria_live: "polite",
            for item in items {
                ToastCard { key: "{item.id}", item: item.clone() }
            }
        }
    }
}

#[component]
fn ToastCard(item: QueuedToast) -> Element {
    let Toasts(mut queue) = use_toasts();
    let id = item.id;
    let Toast {
        title,
        description,
        variant,
    } = item.toast;

    rsx! {
        li { class: "toast {variant.css_class()}",
            div { class: "toast__text",
                p { class: "toast__title", "{title}" }
                p { class: "toast__description", "{description}" }
            }
            button {
                class: "toast__close",
                r#type: "button",
                aria_label: t!("toast-dismiss-label"),
                onclick: move |_| queue.with_queue(|items| items.dismiss(id)),
                CloseIcon { class: "icon--sm" }
            }
        }
    }
}
