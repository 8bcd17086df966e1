//! Theme struct: an immutable visual specification for every rendering slot.
//!
//! Themes are plain data, typically authored as YAML:
//!
//! ```yaml
//! base:
//!   "--md-primary-color": "#000000"
//!   line-height: "1.75"
//! elements:
//!   h1span:
//!     font-size: "1.4em"
//!     font-weight: bold
//!   p:
//!     margin: "0 0 1.5em 0"
//! ```
//!
//! Heading font sizes are written as bare multipliers with an `em` suffix:
//! `1.4em` means "1.4 times the chosen base font size in pixels". When a
//! theme is customized for a concrete font size, the multiplier is parsed
//! as a float (unit discarded) and replaced with a pixel value. This is an
//! intentional unit reinterpretation, not a CSS calculation.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::style::{hex_to_rgba, merge_properties, overlay_properties, PropertyMap};

use super::element::ElementTag;

/// Custom property carrying the user-selected accent color.
pub const PRIMARY_COLOR_VAR: &str = "--md-primary-color";
/// Custom property carrying the translucent accent variant.
pub const PRIMARY_LIGHTER_VAR: &str = "--md-primary-lighter-color";

/// Alpha used for the derived lighter accent color.
const LIGHTER_ALPHA: f32 = 0.2;

/// A named visual specification: global defaults plus per-slot properties.
///
/// Themes are immutable templates. All customization methods return a new
/// `Theme`; derived themes are produced by structural merge with documented
/// precedence (override wins per key).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name (optional, typically the registry key).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    /// Properties applied to every element unless overridden.
    #[serde(default)]
    base: PropertyMap,
    /// Per-slot property overrides. Absent slots render with no inline
    /// style of their own (only the merged base).
    #[serde(default)]
    elements: BTreeMap<ElementTag, PropertyMap>,
}

/// Parameters for [`Theme::customize`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomizeOptions<'a> {
    /// Base font size in pixels; scales every heading span's font-size
    /// multiplier into a concrete pixel value.
    pub font_size: Option<f32>,
    /// Primary accent color as a hex string.
    pub color: Option<&'a str>,
}

impl Theme {
    /// Creates an empty, unnamed theme.
    pub fn new() -> Self {
        Self {
            name: None,
            base: PropertyMap::new(),
            elements: BTreeMap::new(),
        }
    }

    /// Parses a theme from YAML content.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Theme`] if the document fails to deserialize,
    /// including when an element key is not a known slot name.
    pub fn from_yaml(yaml: &str) -> Result<Self, Error> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads a theme from a YAML file, deriving the name from the filename.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mut theme = Self::from_yaml(&content)?;
        if theme.name.is_none() {
            theme.name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .map(|s| s.to_string());
        }
        Ok(theme)
    }

    /// Returns the theme name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Sets the name, returning `self` for chaining.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The global default properties.
    pub fn base(&self) -> &PropertyMap {
        &self.base
    }

    /// The property map for one slot, if the theme styles it.
    pub fn element(&self, tag: ElementTag) -> Option<&PropertyMap> {
        self.elements.get(&tag)
    }

    /// Inserts or replaces one slot's properties, returning `self` for
    /// chaining. Mostly useful for building fixture themes in tests.
    pub fn with_element(mut self, tag: ElementTag, props: PropertyMap) -> Self {
        self.elements.insert(tag, props);
        self
    }

    /// Inserts or replaces a base property, returning `self` for chaining.
    pub fn with_base_property(
        mut self,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.base.insert(property.into(), value.into());
        self
    }

    /// Merges another theme onto this one, producing a derived theme.
    ///
    /// Precedence: `other` wins per key. The merge is deep on `base`
    /// (property-level) and per-element shallow overwrite-by-key (an
    /// element present in both has `other`'s properties layered onto this
    /// theme's, property by property).
    pub fn merge(&self, other: &Theme) -> Theme {
        let mut merged = self.clone();
        overlay_properties(&mut merged.base, &other.base);
        for (tag, props) in &other.elements {
            match merged.elements.get_mut(tag) {
                Some(existing) => overlay_properties(existing, props),
                None => {
                    merged.elements.insert(*tag, props.clone());
                }
            }
        }
        if other.name.is_some() {
            merged.name = other.name.clone();
        }
        merged
    }

    /// Produces a derived theme with user-chosen font size and accent color
    /// applied.
    ///
    /// With `font_size`, every `h1span`..`h6span` font-size multiplier is
    /// scaled into pixels (`1.4em` at 14px becomes `19.6px`). With `color`,
    /// the primary-color custom property is set and a translucent variant
    /// (alpha 0.2) is derived for accents and backgrounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] for malformed hex input. Rejecting
    /// bad colors here keeps `NaN`-like garbage out of generated markup.
    pub fn customize(&self, options: CustomizeOptions<'_>) -> Result<Theme, Error> {
        let mut theme = self.clone();

        if let Some(font_size) = options.font_size {
            for depth in 1..=6 {
                let span = ElementTag::heading_span(depth);
                if let Some(props) = theme.elements.get_mut(&span) {
                    if let Some(multiplier) = props.get("font-size").and_then(|v| leading_float(v))
                    {
                        props.insert("font-size".to_string(), format_px(font_size * multiplier));
                    }
                }
            }
        }

        if let Some(color) = options.color {
            let lighter = hex_to_rgba(color, LIGHTER_ALPHA)?;
            theme.base.insert(PRIMARY_COLOR_VAR.to_string(), color.to_string());
            theme.base.insert(PRIMARY_LIGHTER_VAR.to_string(), lighter);
        }

        Ok(theme)
    }

    /// Layers parsed custom CSS onto the theme, after applying the accent
    /// color.
    ///
    /// Only selectors in [`ElementTag::CUSTOM_CSS_WHITELIST`] take effect,
    /// in that fixed order; matching entries are shallow-merged onto the
    /// slot's properties (custom CSS wins per property, not whole-object
    /// replace). Other selectors are ignored here — the post-processing
    /// inliner may still consume them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] for malformed hex input.
    pub fn with_custom_css(
        &self,
        custom: &mdpress_css::RuleMap,
        color: &str,
    ) -> Result<Theme, Error> {
        let mut theme = self.customize(CustomizeOptions {
            font_size: None,
            color: Some(color),
        })?;

        for tag in ElementTag::CUSTOM_CSS_WHITELIST {
            if let Some(overrides) = custom.get(tag.as_str()) {
                let entry = theme.elements.entry(tag).or_default();
                overlay_properties(entry, overrides);
            }
        }

        Ok(theme)
    }

    /// Resolves the theme into per-slot property maps with `base` merged in.
    ///
    /// Element properties win over base on conflicting keys. Used by
    /// [`StyleTable::build`](super::StyleTable::build), which additionally
    /// applies fonts and indentation.
    pub(super) fn resolved_elements(
        &self,
        base: &PropertyMap,
    ) -> BTreeMap<ElementTag, PropertyMap> {
        self.elements
            .iter()
            .map(|(tag, props)| (*tag, merge_properties(base, props)))
            .collect()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats a pixel value, rounded to two decimals with no trailing noise
/// from binary float arithmetic (`19.6px`, not `19.599999px`).
fn format_px(value: f32) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == rounded.trunc() {
        format!("{}px", rounded as i64)
    } else {
        format!("{}px", rounded)
    }
}

/// Parses the leading float of a dimension value, discarding the unit.
///
/// `"1.4em"` yields `1.4`; a value with no leading number yields `None`.
fn leading_float(value: &str) -> Option<f32> {
    let digits: &str = {
        let end = value
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .unwrap_or(value.len());
        &value[..end]
    };
    digits.parse().ok()
}
