use dioxus::logger::tracing::{debug, Level};
use dioxus::prelude::*;

use ui::views::{Landing, NotFound};
use ui::AppProviders;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Landing {},
    #[route("/:..segments")]
    Missing { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const FONTS_CSS: &str = "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600&family=Playfair+Display:wght@700&display=swap";

fn main() {
    dioxus::logger::init(Level::DEBUG).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Title { "Bloomlog" }
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: FONTS_CSS }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        AppProviders {
            Router::<Route> {}
        }
    }
}

/// Any unknown path renders the shared not-found page.
#[component]
fn Missing(segments: Vec<String>) -> Element {
    debug!(path = %segments.join("/"), "unknown route");
    rsx! { NotFound {} }
}
