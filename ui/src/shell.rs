use dioxus::prelude::*;

use crate::components::toast::{Toaster, Toasts};
use crate::core::theme::Theme;
use crate::core::toast::ToastQueue;
use crate::core::waitlist::WaitlistClient;
use crate::i18n::{self, LanguageLoader};

/// Installs the page-session state every view reads from context:
/// language code, theme, toast queue and the waitlist store.
#[component]
pub fn AppProviders(children: Element) -> Element {
    i18n::init();

    let lang_code = use_signal(|| i18n::LOADER.current_language().to_string());
    use_context_provider(|| lang_code);

    let theme = use_signal(Theme::default);
    use_context_provider(|| theme);

    let queue = use_signal(ToastQueue::default);
    use_context_provider(|| Toasts(queue));

    use_context_provider(WaitlistClient::from_env);

    rsx! {
        {children}
        Toaster {}
    }
}
