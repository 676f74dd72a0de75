#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Ensures the selectors the shared UI components render with remain present in
the unified theme (`ui/assets/theme/main.css`), which desktop embeds at
compile time. A renamed class would otherwise only show up as unstyled markup
in a packaged build.

If you intentionally rename or remove a selector:
1. Update the Dioxus component markup.
2. Adjust `REQUIRED_SELECTORS` accordingly.

A substring check is enough here; no CSS parser dependency.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Selectors / tokens the landing page relies on.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    ".dark {",
    "body {",
    ".landing {",
    // Buttons & theme switch
    ".button {",
    ".button--primary",
    ".theme-toggle {",
    ".theme-toggle__icon--sun",
    ".theme-toggle__icon--moon",
    // Hero & waitlist
    ".hero {",
    ".hero__float--coral",
    ".hero__float--teal",
    ".hero__float--lavender",
    ".hero__title",
    ".hero__tagline",
    ".waitlist-form {",
    ".waitlist-input",
    ".waitlist-confirmation {",
    ".waitlist-confirmation__badge",
    // Sections
    ".about {",
    ".about__quote",
    ".features__grid",
    // Feature cards
    ".feature-card {",
    ".feature-card__icon {",
    ".feature-card__icon--green",
    ".feature-card__icon--lavender",
    ".feature-card__icon--teal",
    ".feature-card__icon--coral",
    ".feature-card__subtitle",
    // Footer
    ".footer {",
    ".footer__privacy",
    ".footer__links",
    ".locale-switcher__select",
    // Toasts
    ".toaster {",
    ".toast--default",
    ".toast--destructive",
    ".toast__close",
    // Animations
    "@keyframes float",
    "@keyframes bloom",
    "@keyframes fade-in",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    assert!(
        missing.is_empty(),
        "Missing {} required CSS selectors/tokens in unified theme:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({non_ws_len} non-whitespace chars) – \
         did the file get truncated or path change?"
    );
}

#[test]
fn dark_mode_overrides_core_colors() {
    // The root `dark` class must redefine the variables every surface reads.
    let dark_block = THEME_CSS
        .split(".dark {")
        .nth(1)
        .and_then(|rest| rest.split('}').next())
        .expect("`.dark {` block present");
    for var in ["--color-bg", "--color-text", "--color-surface"] {
        assert!(
            dark_block.contains(var),
            "dark theme does not override {var}"
        );
    }
}
