//! Inline stroke icons (24×24 grid, 2px stroke).

use dioxus::prelude::*;

fn stroke_icon(class: &str, body: Element) -> Element {
    rsx! {
        svg {
            class: "icon {class}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {body}
        }
    }
}

#[component]
pub fn FlowerIcon(#[props(default)] class: String) -> Element {
    stroke_icon(
        &class,
        rsx! {
            path { d: "M12 5a3 3 0 1 1 3 3m-3-3a3 3 0 1 0-3 3m3-3v1M9 8a3 3 0 1 0 3 3M9 8h1m5 0a3 3 0 1 1-3 3m3-3h-1m-2 3v-1" }
            circle { cx: "12", cy: "8", r: "2" }
            path { d: "M12 10v12" }
            path { d: "M12 22c4.2 0 7-1.667 7-5-4.2 0-7 1.667-7 5Z" }
            path { d: "M12 22c-4.2 0-7-1.667-7-5 4.2 0 7 1.667 7 5Z" }
        },
    )
}

#[component]
pub fn HeartIcon(#[props(default)] class: String) -> Element {
    stroke_icon(
        &class,
        rsx! {
            path { d: "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z" }
        },
    )
}

#[component]
pub fn MicIcon(#[props(default)] class: String) -> Element {
    stroke_icon(
        &class,
        rsx! {
            path { d: "M12 2a3 3 0 0 0-3 3v7a3 3 0 0 0 6 0V5a3 3 0 0 0-3-3Z" }
            path { d: "M19 10v2a7 7 0 0 1-14 0v-2" }
            line { x1: "12", x2: "12", y1: "19", y2: "22" }
        },
    )
}

#[component]
pub fn TrendingUpIcon(#[props(default)] class: String) -> Element {
    stroke_icon(
        &class,
        rsx! {
            polyline { points: "22 7 13.5 15.5 8.5 10.5 2 17" }
            polyline { points: "16 7 22 7 22 13" }
        },
    )
}

#[component]
pub fn MoonIcon(#[props(default)] class: String) -> Element {
    stroke_icon(
        &class,
        rsx! {
            path { d: "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" }
        },
    )
}

#[component]
pub fn SunIcon(#[props(default)] class: String) -> Element {
    stroke_icon(
        &class,
        rsx! {
            circle { cx: "12", cy: "12", r: "4" }
            path { d: "M12 2v2" }
            path { d: "M12 20v2" }
            path { d: "m4.93 4.93 1.41 1.41" }
            path { d: "m17.66 17.66 1.41 1.41" }
            path { d: "M2 12h2" }
            path { d: "M20 12h2" }
            path { d: "m6.34 17.66-1.41 1.41" }
            path { d: "m19.07 4.93-1.41 1.41" }
        },
    )
}

#[component]
pub fn CheckIcon(#[props(default)] class: String) -> Element {
    stroke_icon(
        &class,
        rsx! {
            path { d: "M20 6 9 17l-5-5" }
        },
    )
}

#[component]
pub fn CloseIcon(#[props(default)] class: String) -> Element {
    stroke_icon(
        &class,
        rsx! {
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        },
    )
}
