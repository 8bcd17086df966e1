//! Built-in theme registry.
//!
//! Themes ship as embedded YAML assets and are parsed once on first use.
//! A bad built-in asset is a packaging bug, so parse failures here panic
//! at first access instead of returning a `Result` on every lookup.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::config::ConfigOption;
use crate::error::Error;

use super::theme::Theme;

const DEFAULT_THEME_YAML: &str = include_str!("../../assets/themes/default.yaml");
const GRACE_THEME_YAML: &str = include_str!("../../assets/themes/grace.yaml");

static THEMES: Lazy<BTreeMap<&'static str, Theme>> = Lazy::new(|| {
    let mut themes = BTreeMap::new();
    for (name, yaml) in [("default", DEFAULT_THEME_YAML), ("grace", GRACE_THEME_YAML)] {
        let theme = Theme::from_yaml(yaml)
            .unwrap_or_else(|err| panic!("built-in theme {:?} failed to parse: {}", name, err))
            .with_name(name);
        themes.insert(name, theme);
    }
    themes
});

/// Resolves a built-in theme by its registry key.
pub fn by_name(name: &str) -> Option<&'static Theme> {
    THEMES.get(name)
}

/// Like [`by_name`], erroring for unknown keys. For callers resolving a
/// user-supplied theme identifier.
pub fn resolve(name: &str) -> Result<&'static Theme, Error> {
    by_name(name).ok_or_else(|| Error::UnknownTheme(name.to_string()))
}

/// The default built-in theme.
pub fn default_theme() -> &'static Theme {
    &THEMES["default"]
}

/// Registry keys of every built-in theme.
pub fn names() -> Vec<&'static str> {
    THEMES.keys().copied().collect()
}

/// Catalog entries for the theme picker.
pub fn options() -> Vec<ConfigOption> {
    vec![
        ConfigOption {
            label: "Classic",
            value: "default",
            desc: "clean blocks, centered headings",
        },
        ConfigOption {
            label: "Grace",
            value: "grace",
            desc: "lighter chrome, serif friendly",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ElementTag;

    #[test]
    fn test_builtin_themes_parse() {
        for name in names() {
            let theme = by_name(name).unwrap();
            assert_eq!(theme.name(), Some(name));
        }
    }

    #[test]
    fn test_every_slot_has_an_entry() {
        // The data invariant: built-in themes style every slot (possibly
        // with an empty map).
        for name in names() {
            let theme = by_name(name).unwrap();
            for tag in ElementTag::ALL {
                assert!(
                    theme.element(tag).is_some(),
                    "theme {:?} missing slot {}",
                    name,
                    tag
                );
            }
        }
    }

    #[test]
    fn test_heading_spans_carry_multipliers() {
        // Customization depends on every h{n}span having a numeric
        // font-size component.
        for name in names() {
            let theme = by_name(name).unwrap();
            for depth in 1..=6u8 {
                let span = theme.element(ElementTag::heading_span(depth)).unwrap();
                assert!(span.contains_key("font-size"), "{} h{}span", name, depth);
            }
        }
    }

    #[test]
    fn test_unknown_theme() {
        assert!(by_name("solarized").is_none());
        assert!(matches!(
            resolve("solarized"),
            Err(crate::Error::UnknownTheme(_))
        ));
    }

    #[test]
    fn test_options_match_registry() {
        for option in options() {
            assert!(by_name(option.value).is_some());
        }
    }
}
