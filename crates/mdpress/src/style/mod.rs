//! Property maps and the helpers that turn them into inline style text.

mod color;
mod merge;

pub use color::hex_to_rgba;
pub use merge::{merge_properties, overlay_properties};

use std::collections::BTreeMap;

/// A flat CSS property mapping (`property -> value`).
///
/// `BTreeMap` keeps iteration deterministic so rendered `style` attributes
/// are stable across runs, which the snapshot-style assertions in the test
/// suite rely on.
pub type PropertyMap = BTreeMap<String, String>;

/// Formats a property map as the body of an inline `style` attribute.
///
/// ```rust
/// use mdpress::style::{style_string, PropertyMap};
///
/// let mut props = PropertyMap::new();
/// props.insert("color".into(), "#777".into());
/// props.insert("margin".into(), "0".into());
/// assert_eq!(style_string(&props), "color: #777; margin: 0");
/// ```
pub fn style_string(props: &PropertyMap) -> String {
    props
        .iter()
        .map(|(property, value)| format!("{}: {}", property, value))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_string_empty() {
        assert_eq!(style_string(&PropertyMap::new()), "");
    }

    #[test]
    fn test_style_string_deterministic() {
        let mut props = PropertyMap::new();
        props.insert("margin".into(), "0".into());
        props.insert("color".into(), "red".into());
        // BTreeMap iterates in key order regardless of insertion order.
        assert_eq!(style_string(&props), "color: red; margin: 0");
    }
}
