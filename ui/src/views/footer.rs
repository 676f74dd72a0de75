use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::components::icons::FlowerIcon;
use crate::components::LocaleSwitcher;
use crate::t;

#[component]
pub fn Footer() -> Element {
    let _lang = crate::i18n::use_locale();
    let year = OffsetDateTime::now_utc().year().to_string();

    rsx! {
        footer { class: "footer",
            div { class: "footer__inner",
                div { class: "footer__brand",
                    FlowerIcon { class: "icon--lg footer__logo" }
                    h3 { class: "footer__name", {t!("brand-name")} }
                }

                div { class: "footer__privacy",
                    p { class: "footer__privacy-main", {t!("footer-privacy")} }
                    p { class: "footer__privacy-sub", {t!("footer-privacy-sub")} }
                }

                nav { class: "footer__links",
                    a { class: "footer__link", href: "#", {t!("footer-twitter")} }
                    a { class: "footer__link", href: "#", {t!("footer-instagram")} }
                    a { class: "footer__link", href: "#", {t!("footer-contact")} }
                }

                LocaleSwitcher {}

                p { class: "footer__copyright", {t!("footer-copyright", year = year.as_str())} }
            }
        }
    }
}
