//! The closed set of semantic rendering slots a theme can style.
//!
//! Element tags are not raw HTML tag names: a single Markdown construct may
//! consume several slots (a heading uses `h1box`, `h1prefix`, `h1span` and
//! `h1suffix`), and two constructs may render the same HTML tag with
//! different slots (`code` vs `codespan`). Keeping the set closed as an enum
//! means a theme file with an unknown element name fails to deserialize
//! instead of silently styling nothing.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// A semantic rendering slot, keyed in themes by its selector spelling
/// (`h1box`, `blockquotep`, `a_link`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElementTag {
    Container,
    H1Box,
    H1Prefix,
    H1Span,
    H1Suffix,
    H2Box,
    H2Prefix,
    H2Span,
    H2Suffix,
    H3Box,
    H3Prefix,
    H3Span,
    H3Suffix,
    H4Box,
    H4Prefix,
    H4Span,
    H4Suffix,
    H5Box,
    H5Prefix,
    H5Span,
    H5Suffix,
    H6Box,
    H6Prefix,
    H6Span,
    H6Suffix,
    P,
    Blockquote,
    BlockquoteP,
    Pre,
    Code,
    Codespan,
    Image,
    Figure,
    Figcaption,
    Ol,
    Ul,
    Li,
    Hr,
    Footnotes,
    ALink,
    WxLink,
    Table,
    Thead,
    Tr,
    Th,
    Td,
    Strong,
    Em,
}

impl ElementTag {
    /// Every slot, in declaration order.
    pub const ALL: [ElementTag; 48] = [
        ElementTag::Container,
        ElementTag::H1Box,
        ElementTag::H1Prefix,
        ElementTag::H1Span,
        ElementTag::H1Suffix,
        ElementTag::H2Box,
        ElementTag::H2Prefix,
        ElementTag::H2Span,
        ElementTag::H2Suffix,
        ElementTag::H3Box,
        ElementTag::H3Prefix,
        ElementTag::H3Span,
        ElementTag::H3Suffix,
        ElementTag::H4Box,
        ElementTag::H4Prefix,
        ElementTag::H4Span,
        ElementTag::H4Suffix,
        ElementTag::H5Box,
        ElementTag::H5Prefix,
        ElementTag::H5Span,
        ElementTag::H5Suffix,
        ElementTag::H6Box,
        ElementTag::H6Prefix,
        ElementTag::H6Span,
        ElementTag::H6Suffix,
        ElementTag::P,
        ElementTag::Blockquote,
        ElementTag::BlockquoteP,
        ElementTag::Pre,
        ElementTag::Code,
        ElementTag::Codespan,
        ElementTag::Image,
        ElementTag::Figure,
        ElementTag::Figcaption,
        ElementTag::Ol,
        ElementTag::Ul,
        ElementTag::Li,
        ElementTag::Hr,
        ElementTag::Footnotes,
        ElementTag::ALink,
        ElementTag::WxLink,
        ElementTag::Table,
        ElementTag::Thead,
        ElementTag::Tr,
        ElementTag::Th,
        ElementTag::Td,
        ElementTag::Strong,
        ElementTag::Em,
    ];

    /// The fixed, ordered set of slots user CSS overrides may target.
    ///
    /// Selectors outside this list parse fine but have no effect on the
    /// theme; the post-processing inliner may still consume them.
    pub const CUSTOM_CSS_WHITELIST: [ElementTag; 45] = [
        ElementTag::H1Box,
        ElementTag::H1Prefix,
        ElementTag::H1Suffix,
        ElementTag::H1Span,
        ElementTag::H2Box,
        ElementTag::H2Prefix,
        ElementTag::H2Suffix,
        ElementTag::H2Span,
        ElementTag::H3Box,
        ElementTag::H3Prefix,
        ElementTag::H3Suffix,
        ElementTag::H3Span,
        ElementTag::H4Box,
        ElementTag::H4Prefix,
        ElementTag::H4Suffix,
        ElementTag::H4Span,
        ElementTag::H5Box,
        ElementTag::H5Prefix,
        ElementTag::H5Suffix,
        ElementTag::H5Span,
        ElementTag::H6Box,
        ElementTag::H6Prefix,
        ElementTag::H6Suffix,
        ElementTag::H6Span,
        ElementTag::P,
        ElementTag::Blockquote,
        ElementTag::BlockquoteP,
        ElementTag::Pre,
        ElementTag::Code,
        ElementTag::Image,
        ElementTag::Ol,
        ElementTag::Ul,
        ElementTag::Footnotes,
        ElementTag::Figure,
        ElementTag::Hr,
        ElementTag::Li,
        ElementTag::Codespan,
        ElementTag::ALink,
        ElementTag::WxLink,
        ElementTag::Table,
        ElementTag::Th,
        ElementTag::Td,
        ElementTag::Figcaption,
        ElementTag::Strong,
        ElementTag::Container,
    ];

    /// The selector spelling used in theme files and custom CSS.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementTag::Container => "container",
            ElementTag::H1Box => "h1box",
            ElementTag::H1Prefix => "h1prefix",
            ElementTag::H1Span => "h1span",
            ElementTag::H1Suffix => "h1suffix",
            ElementTag::H2Box => "h2box",
            ElementTag::H2Prefix => "h2prefix",
            ElementTag::H2Span => "h2span",
            ElementTag::H2Suffix => "h2suffix",
            ElementTag::H3Box => "h3box",
            ElementTag::H3Prefix => "h3prefix",
            ElementTag::H3Span => "h3span",
            ElementTag::H3Suffix => "h3suffix",
            ElementTag::H4Box => "h4box",
            ElementTag::H4Prefix => "h4prefix",
            ElementTag::H4Span => "h4span",
            ElementTag::H4Suffix => "h4suffix",
            ElementTag::H5Box => "h5box",
            ElementTag::H5Prefix => "h5prefix",
            ElementTag::H5Span => "h5span",
            ElementTag::H5Suffix => "h5suffix",
            ElementTag::H6Box => "h6box",
            ElementTag::H6Prefix => "h6prefix",
            ElementTag::H6Span => "h6span",
            ElementTag::H6Suffix => "h6suffix",
            ElementTag::P => "p",
            ElementTag::Blockquote => "blockquote",
            ElementTag::BlockquoteP => "blockquotep",
            ElementTag::Pre => "pre",
            ElementTag::Code => "code",
            ElementTag::Codespan => "codespan",
            ElementTag::Image => "image",
            ElementTag::Figure => "figure",
            ElementTag::Figcaption => "figcaption",
            ElementTag::Ol => "ol",
            ElementTag::Ul => "ul",
            ElementTag::Li => "li",
            ElementTag::Hr => "hr",
            ElementTag::Footnotes => "footnotes",
            ElementTag::ALink => "a_link",
            ElementTag::WxLink => "wx_link",
            ElementTag::Table => "table",
            ElementTag::Thead => "thead",
            ElementTag::Tr => "tr",
            ElementTag::Th => "th",
            ElementTag::Td => "td",
            ElementTag::Strong => "strong",
            ElementTag::Em => "em",
        }
    }

    /// Looks up a slot by its selector spelling.
    pub fn from_name(name: &str) -> Option<ElementTag> {
        Self::ALL.iter().copied().find(|tag| tag.as_str() == name)
    }

    /// The `h{depth}span` slot for a heading depth in `1..=6`.
    pub fn heading_span(depth: u8) -> ElementTag {
        Self::heading_slots(depth).2
    }

    /// The `(box, prefix, span, suffix)` slots for a heading depth in `1..=6`.
    ///
    /// Depths outside that range cannot occur: the Markdown parser's heading
    /// level is itself a six-valued enum.
    pub fn heading_slots(depth: u8) -> (ElementTag, ElementTag, ElementTag, ElementTag) {
        match depth {
            1 => (
                ElementTag::H1Box,
                ElementTag::H1Prefix,
                ElementTag::H1Span,
                ElementTag::H1Suffix,
            ),
            2 => (
                ElementTag::H2Box,
                ElementTag::H2Prefix,
                ElementTag::H2Span,
                ElementTag::H2Suffix,
            ),
            3 => (
                ElementTag::H3Box,
                ElementTag::H3Prefix,
                ElementTag::H3Span,
                ElementTag::H3Suffix,
            ),
            4 => (
                ElementTag::H4Box,
                ElementTag::H4Prefix,
                ElementTag::H4Span,
                ElementTag::H4Suffix,
            ),
            5 => (
                ElementTag::H5Box,
                ElementTag::H5Prefix,
                ElementTag::H5Span,
                ElementTag::H5Suffix,
            ),
            _ => (
                ElementTag::H6Box,
                ElementTag::H6Prefix,
                ElementTag::H6Span,
                ElementTag::H6Suffix,
            ),
        }
    }
}

impl fmt::Display for ElementTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ElementTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ElementTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        ElementTag::from_name(&name)
            .ok_or_else(|| de::Error::custom(format!("unknown element tag: {}", name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_names() {
        for tag in ElementTag::ALL {
            assert_eq!(ElementTag::from_name(tag.as_str()), Some(tag));
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(ElementTag::from_name("h7span"), None);
        assert_eq!(ElementTag::from_name(""), None);
    }

    #[test]
    fn test_heading_slots() {
        let (bx, prefix, span, suffix) = ElementTag::heading_slots(2);
        assert_eq!(bx.as_str(), "h2box");
        assert_eq!(prefix.as_str(), "h2prefix");
        assert_eq!(span.as_str(), "h2span");
        assert_eq!(suffix.as_str(), "h2suffix");
    }

    #[test]
    fn test_whitelist_is_subset_of_all() {
        for tag in ElementTag::CUSTOM_CSS_WHITELIST {
            assert!(ElementTag::ALL.contains(&tag));
        }
    }

    #[test]
    fn test_deserialize_from_yaml_key() {
        let tag: ElementTag = serde_yaml::from_str("a_link").unwrap();
        assert_eq!(tag, ElementTag::ALink);
        assert!(serde_yaml::from_str::<ElementTag>("sidebar").is_err());
    }
}
