use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Tokens every card carries, ahead of anything computed from its props.
pub const BASE_CLASSES: [&str; 6] = [
    "rounded-xl",
    "border",
    "border-white/10",
    "bg-white/5",
    "transition-all",
    "duration-200",
];

/// Hover affordance: lift, background shift, shadow emphasis.
pub const HOVER_CLASSES: [&str; 3] = [
    "hover:-translate-y-0.5",
    "hover:bg-white/10",
    "hover:shadow-lg",
];

pub const CLICKABLE_CLASS: &str = "cursor-pointer";

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CardPadding {
    Small,
    Medium,
    Large,
}

impl CardPadding {
    pub const ALL: [CardPadding; 3] = [CardPadding::Small, CardPadding::Medium, CardPadding::Large];

    pub fn spacing_class(self) -> &'static str {
        match self {
            CardPadding::Small => "p-3",
            CardPadding::Medium => "p-5",
            CardPadding::Large => "p-8",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CardPadding::Small => "small",
            CardPadding::Medium => "medium",
            CardPadding::Large => "large",
        }
    }
}

impl Default for CardPadding {
    fn default() -> Self {
        CardPadding::Medium
    }
}

impl fmt::Display for CardPadding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown card padding {0:?}, expected small, medium or large")]
pub struct ParsePaddingError(pub String);

impl FromStr for CardPadding {
    type Err = ParsePaddingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(CardPadding::Small),
            "medium" => Ok(CardPadding::Medium),
            "large" => Ok(CardPadding::Large),
            _ => Err(ParsePaddingError(s.to_string())),
        }
    }
}

/// The styling-relevant half of a card's props.
///
/// `clickable` mirrors whether a click handler was supplied; the handler
/// itself lives with the component.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardStyle {
    #[serde(default)]
    pub padding: CardPadding,
    #[serde(default)]
    pub hoverable: bool,
    #[serde(default)]
    pub clickable: bool,
    #[serde(default)]
    pub class: Option<String>,
}

impl CardStyle {
    /// Ordered class tokens: base, spacing, hover, clickable cue, override.
    ///
    /// The override is kept as one entry, verbatim, even if it holds several
    /// class names.
    pub fn tokens(&self) -> Vec<&str> {
        let mut tokens: Vec<&str> = BASE_CLASSES.to_vec();
        tokens.push(self.padding.spacing_class());
        if self.hoverable {
            tokens.extend_from_slice(&HOVER_CLASSES);
        }
        if self.clickable {
            tokens.push(CLICKABLE_CLASS);
        }
        if let Some(class) = self.class.as_deref().filter(|c| !c.is_empty()) {
            tokens.push(class);
        }
        tokens
    }

    pub fn class_list(&self) -> String {
        self.tokens().join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(classes: &str) -> Vec<&str> {
        classes.split_whitespace().collect()
    }

    #[test]
    fn each_padding_gets_exactly_its_spacing_token() {
        for padding in CardPadding::ALL {
            let style = CardStyle {
                padding,
                ..Default::default()
            };
            let rendered = style.class_list();
            let classes = split(&rendered);

            for other in CardPadding::ALL {
                let count = classes.iter().filter(|c| **c == other.spacing_class()).count();
                let expected = if other == padding { 1 } else { 0 };
                assert_eq!(count, expected, "{padding} vs {other}: {rendered}");
            }
        }
    }

    #[test]
    fn default_style_is_medium_and_plain() {
        let style = CardStyle::default();
        assert_eq!(style.padding, CardPadding::Medium);
        assert_eq!(
            style.class_list(),
            "rounded-xl border border-white/10 bg-white/5 transition-all duration-200 p-5"
        );
    }

    #[test]
    fn hover_tokens_follow_hoverable() {
        let hoverable = CardStyle {
            hoverable: true,
            ..Default::default()
        };
        let tokens = hoverable.tokens();
        assert!(HOVER_CLASSES.iter().all(|h| tokens.contains(h)));

        let flat = CardStyle::default();
        let tokens = flat.tokens();
        assert!(HOVER_CLASSES.iter().all(|h| !tokens.contains(h)));
    }

    #[test]
    fn clickable_cue_follows_handler_presence() {
        let clickable = CardStyle {
            clickable: true,
            ..Default::default()
        };
        assert!(clickable.tokens().contains(&CLICKABLE_CLASS));
        assert!(!CardStyle::default().tokens().contains(&CLICKABLE_CLASS));
    }

    #[test]
    fn override_is_verbatim_and_last() {
        let style = CardStyle {
            padding: CardPadding::Small,
            hoverable: true,
            clickable: true,
            class: Some("md:col-span-2 ring-1".into()),
        };
        let tokens = style.tokens();
        assert_eq!(tokens.last(), Some(&"md:col-span-2 ring-1"));
        assert!(style.class_list().ends_with(" md:col-span-2 ring-1"));
    }

    #[test]
    fn empty_override_adds_nothing() {
        let style = CardStyle {
            class: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(style.class_list(), CardStyle::default().class_list());
        assert!(!style.class_list().ends_with(' '));
    }

    #[test]
    fn large_hoverable_with_override() {
        let style = CardStyle {
            padding: CardPadding::Large,
            hoverable: true,
            clickable: false,
            class: Some("my-custom".into()),
        };
        let rendered = style.class_list();
        let classes = split(&rendered);

        assert!(classes.contains(&"p-8"));
        assert!(!classes.contains(&"p-3"));
        assert!(!classes.contains(&"p-5"));
        for hover in HOVER_CLASSES {
            assert!(classes.contains(&hover));
        }
        assert!(!classes.contains(&CLICKABLE_CLASS));
        assert_eq!(classes.last(), Some(&"my-custom"));
    }

    #[test]
    fn class_list_is_idempotent() {
        let style = CardStyle {
            padding: CardPadding::Small,
            hoverable: true,
            clickable: true,
            class: Some("x".into()),
        };
        assert_eq!(style.class_list(), style.class_list());
        assert_eq!(style.clone().class_list(), style.class_list());
    }

    #[test]
    fn padding_parses_case_insensitively() {
        assert_eq!("small".parse::<CardPadding>(), Ok(CardPadding::Small));
        assert_eq!(" Medium ".parse::<CardPadding>(), Ok(CardPadding::Medium));
        assert_eq!("LARGE".parse::<CardPadding>(), Ok(CardPadding::Large));
    }

    #[test]
    fn unknown_padding_is_rejected() {
        let err = "huge".parse::<CardPadding>().unwrap_err();
        assert_eq!(err, ParsePaddingError("huge".into()));
        assert!(err.to_string().contains("\"huge\""));
    }

    #[test]
    fn padding_display_matches_parse() {
        for padding in CardPadding::ALL {
            assert_eq!(padding.to_string().parse::<CardPadding>(), Ok(padding));
        }
    }

    #[test]
    fn tailwind_scans_this_crate_for_classes() {
        // Card classes only appear as literals here, the UI builds them at runtime.
        let config = include_str!("../../../tailwind.config.js");
        assert!(config.contains("./crates/card-types/src/**/*.rs"), "{config}");
    }

    #[test]
    fn style_deserializes_with_defaults() {
        let style: CardStyle = serde_json::from_str(r#"{"padding":"large"}"#).unwrap();
        assert_eq!(
            style,
            CardStyle {
                padding: CardPadding::Large,
                ..Default::default()
            }
        );

        assert!(serde_json::from_str::<CardStyle>(r#"{"padding":"huge"}"#).is_err());
    }
}
