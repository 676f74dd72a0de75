//! Light/dark theme state.
//!
//! The theme lives for the page session only. Toggling flips the value and
//! mirrors it onto the root document element as the `dark` class, which the
//! stylesheet keys every dark-mode rule on.

pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Class for the page wrapper (`""` in light mode).
    pub fn css_class(self) -> &'static str {
        if self.is_dark() {
            DARK_CLASS
        } else {
            ""
        }
    }
}

/// The document-level style flag a theme change is mirrored onto.
pub trait RootFlag {
    fn set_dark(&mut self, dark: bool);
}

/// The real `<html>` element of the running page.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentRoot;

impl RootFlag for DocumentRoot {
    fn set_dark(&mut self, dark: bool) {
        apply_root_class(dark);
    }
}

/// Flip `theme` and update the root flag to match.
pub fn toggle_theme(theme: &mut Theme, root: &mut impl RootFlag) {
    *theme = theme.toggled();
    root.set_dark(theme.is_dark());
}

#[cfg(target_arch = "wasm32")]
fn apply_root_class(dark: bool) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        tracing::warn!("no document element; theme class not applied");
        return;
    };
    if let Err(err) = root.class_list().toggle_with_force(DARK_CLASS, dark) {
        tracing::warn!(?err, "failed to update root theme class");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_root_class(dark: bool) {
    use dioxus::prelude::{document, spawn};

    // Native renderers run the page in a webview; reach the root through JS.
    let eval = document::eval(&root_class_script(dark));
    spawn(async move {
        if let Err(err) = eval.await {
            tracing::warn!(%err, "failed to update root theme class");
        }
    });
}

/// Force-sets the class and returns whether it ended up present.
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn root_class_script(dark: bool) -> String {
    format!("return document.documentElement.classList.toggle('{DARK_CLASS}', {dark});")
}
