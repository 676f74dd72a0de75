//! Shared UI crate for Bloomlog. Every view and all cross-platform logic live
//! here; the `web` and `desktop` crates only launch it.

use dioxus::prelude::*;

pub mod core;
pub mod i18n;
pub mod views;

mod shell;
pub use shell::AppProviders;

pub mod components {
    pub mod icons;
    pub mod toast;

    mod feature_card;
    pub use feature_card::{FeatureCard, Tint};

    mod locale_switcher;
    pub use locale_switcher::LocaleSwitcher;

    mod theme_toggle;
    pub use theme_toggle::ThemeToggle;

    mod waitlist_form;
    pub use waitlist_form::WaitlistForm;
}

/// Shared stylesheet for platforms that link assets (web). Desktop inlines
/// the same file with `include_str!`.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

#[cfg(test)]
mod tests;
