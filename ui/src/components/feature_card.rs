use dioxus::prelude::*;

/// Background tint behind a feature icon (maps to `feature-card__icon--*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Green,
    Lavender,
    Teal,
    Coral,
}

impl Tint {
    pub fn css_class(self) -> &'static str {
        match self {
            Tint::Green => "feature-card__icon--green",
            Tint::Lavender => "feature-card__icon--lavender",
            Tint::Teal => "feature-card__icon--teal",
            Tint::Coral => "feature-card__icon--coral",
        }
    }
}

#[component]
pub fn FeatureCard(
    icon: Element,
    title: String,
    subtitle: String,
    description: String,
    tint: Tint,
) -> Element {
    rsx! {
        article { class: "feature-card",
            div { class: "feature-card__icon {tint.css_class()}", {icon} }
            h3 { class: "feature-card__title", "{title}" }
            p { class: "feature-card__subtitle", "{subtitle}" }
            p { class: "feature-card__body", "{description}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tints_map_to_distinct_classes() {
        let classes = [Tint::Green, Tint::Lavender, Tint::Teal, Tint::Coral].map(Tint::css_class);
        for (i, a) in classes.iter().enumerate() {
            assert!(a.starts_with("feature-card__icon--"));
            for b in &classes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
