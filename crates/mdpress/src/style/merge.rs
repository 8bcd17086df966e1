//! Structural merge for property maps.
//!
//! Theme layering is built from one precedence rule applied at every level:
//! the override wins per key. There is no array concatenation and no
//! special-casing of particular properties; nested structures (a theme's
//! `base` versus its per-element maps) are merged by their owners calling
//! these helpers per level rather than by a generic deep-merge.

use super::PropertyMap;

/// Returns `base` with every entry of `overrides` applied on top.
///
/// Keys present in both maps take the override's value; keys unique to
/// either side are kept.
pub fn merge_properties(base: &PropertyMap, overrides: &PropertyMap) -> PropertyMap {
    let mut merged = base.clone();
    overlay_properties(&mut merged, overrides);
    merged
}

/// Applies `overrides` onto `target` in place, override wins per key.
pub fn overlay_properties(target: &mut PropertyMap, overrides: &PropertyMap) {
    for (property, value) in overrides {
        target.insert(property.clone(), value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(entries: &[(&str, &str)]) -> PropertyMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_override_wins_per_key() {
        let base = props(&[("color", "red"), ("margin", "0")]);
        let over = props(&[("color", "blue")]);

        let merged = merge_properties(&base, &over);
        assert_eq!(merged["color"], "blue");
        assert_eq!(merged["margin"], "0");
    }

    #[test]
    fn test_unique_keys_kept_from_both_sides() {
        let base = props(&[("padding", "1em")]);
        let over = props(&[("border", "none")]);

        let merged = merge_properties(&base, &over);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged["padding"], "1em");
        assert_eq!(merged["border"], "none");
    }

    #[test]
    fn test_empty_override_is_identity() {
        let base = props(&[("color", "red")]);
        assert_eq!(merge_properties(&base, &PropertyMap::new()), base);
    }

    #[test]
    fn test_inputs_not_mutated() {
        let base = props(&[("color", "red")]);
        let over = props(&[("color", "blue")]);
        let _ = merge_properties(&base, &over);
        assert_eq!(base["color"], "red");
        assert_eq!(over["color"], "blue");
    }
}
