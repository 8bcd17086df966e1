//! The resolved, render-ready style table.

use std::collections::BTreeMap;

use crate::style::{style_string, PropertyMap};

use super::element::ElementTag;
use super::theme::Theme;

/// Fully resolved mapping from [`ElementTag`] to final CSS properties.
///
/// This is what the renderer consults per node. It is rebuilt whole (not
/// patched) whenever any input parameter changes; the mapping is small and
/// a full rebuild costs nothing compared to the render pass itself.
#[derive(Debug, Clone, Default)]
pub struct StyleTable {
    elements: BTreeMap<ElementTag, PropertyMap>,
}

impl StyleTable {
    /// Builds the table from a theme and the user's typography choices.
    ///
    /// The theme's `base` is merged with the font family and size, then
    /// folded into every element's properties (element wins on conflict).
    /// With `use_indent`, a `text-indent: 2em` default is added to the
    /// paragraph slot unless the theme (or custom CSS) already sets one.
    pub fn build(theme: &Theme, font_family: &str, font_size: &str, use_indent: bool) -> Self {
        let mut base = theme.base().clone();
        base.insert("font-family".to_string(), font_family.to_string());
        base.insert("font-size".to_string(), font_size.to_string());

        let mut elements = theme.resolved_elements(&base);

        if use_indent {
            let paragraph = elements.entry(ElementTag::P).or_insert_with(|| base.clone());
            paragraph
                .entry("text-indent".to_string())
                .or_insert_with(|| "2em".to_string());
        }

        Self { elements }
    }

    /// The resolved properties for one slot, if any.
    pub fn get(&self, tag: ElementTag) -> Option<&PropertyMap> {
        self.elements.get(&tag)
    }

    /// Renders a slot as a full `style="..."` attribute, or the empty
    /// string for unstyled slots (absent entries carry no inline style).
    pub fn style_attr(&self, tag: ElementTag) -> String {
        self.style_attr_with(tag, "")
    }

    /// Like [`style_attr`](Self::style_attr) with extra declaration text
    /// appended verbatim inside the attribute.
    pub fn style_attr_with(&self, tag: ElementTag, addition: &str) -> String {
        match self.elements.get(&tag) {
            Some(props) => format!("style=\"{}{}\"", style_string(props), addition),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::PropertyMap;

    fn props(entries: &[(&str, &str)]) -> PropertyMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn theme() -> Theme {
        Theme::new()
            .with_base_property("line-height", "1.75")
            .with_element(ElementTag::P, props(&[("margin", "0"), ("font-size", "0.9em")]))
            .with_element(ElementTag::Hr, props(&[("border", "none")]))
    }

    #[test]
    fn test_base_merged_into_every_element() {
        let table = StyleTable::build(&theme(), "serif", "14px", false);

        let p = table.get(ElementTag::P).unwrap();
        assert_eq!(p["font-family"], "serif");
        assert_eq!(p["line-height"], "1.75");
        // Element properties win over base on conflict.
        assert_eq!(p["font-size"], "0.9em");

        let hr = table.get(ElementTag::Hr).unwrap();
        assert_eq!(hr["font-size"], "14px");
    }

    #[test]
    fn test_indent_default_is_overridable() {
        let table = StyleTable::build(&theme(), "serif", "14px", true);
        assert_eq!(table.get(ElementTag::P).unwrap()["text-indent"], "2em");

        let indented = theme().with_element(
            ElementTag::P,
            props(&[("text-indent", "1em")]),
        );
        let table = StyleTable::build(&indented, "serif", "14px", true);
        assert_eq!(table.get(ElementTag::P).unwrap()["text-indent"], "1em");
    }

    #[test]
    fn test_style_attr_absent_slot_is_empty() {
        let table = StyleTable::build(&theme(), "serif", "14px", false);
        assert_eq!(table.style_attr(ElementTag::Blockquote), "");
    }

    #[test]
    fn test_style_attr_with_addition() {
        let table = StyleTable::build(&theme(), "serif", "14px", false);
        let attr = table.style_attr_with(ElementTag::Hr, ";margin: 2.325em 0px 1.875em 0px;");
        assert!(attr.starts_with("style=\""));
        assert!(attr.contains("border: none"));
        assert!(attr.ends_with(";margin: 2.325em 0px 1.875em 0px;\""));
    }
}
