//! Image caption policy.

/// Chooses which of an image's `title`/`alt` texts becomes its caption.
///
/// The two-part modes express a priority order with graceful fallback:
/// `TitleAlt` prefers the title but falls back to alt text when the title
/// is absent. When neither preferred field is present the caption is empty
/// and no `figcaption` is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendMode {
    TitleAlt,
    AltTitle,
    Title,
    #[default]
    Alt,
    None,
}

impl LegendMode {
    /// Parses a catalog value (`"title-alt"`, `"alt"`, ...).
    ///
    /// Unknown strings resolve to [`LegendMode::None`]: a policy nothing
    /// matches produces an empty caption, which is the contract rather
    /// than an error.
    pub fn parse(value: &str) -> LegendMode {
        match value {
            "title-alt" => LegendMode::TitleAlt,
            "alt-title" => LegendMode::AltTitle,
            "title" => LegendMode::Title,
            "alt" => LegendMode::Alt,
            _ => LegendMode::None,
        }
    }

    /// The catalog spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            LegendMode::TitleAlt => "title-alt",
            LegendMode::AltTitle => "alt-title",
            LegendMode::Title => "title",
            LegendMode::Alt => "alt",
            LegendMode::None => "none",
        }
    }

    /// Resolves the caption for an image, empty when the policy matches
    /// nothing.
    pub fn caption<'a>(&self, alt: &'a str, title: &'a str) -> &'a str {
        let fields: &[&str] = match self {
            LegendMode::TitleAlt => &["title", "alt"],
            LegendMode::AltTitle => &["alt", "title"],
            LegendMode::Title => &["title"],
            LegendMode::Alt => &["alt"],
            LegendMode::None => &[],
        };
        for field in fields {
            match *field {
                "alt" if !alt.is_empty() => return alt,
                "title" if !title.is_empty() => return title,
                _ => {}
            }
        }
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_values() {
        assert_eq!(LegendMode::parse("title-alt"), LegendMode::TitleAlt);
        assert_eq!(LegendMode::parse("alt-title"), LegendMode::AltTitle);
        assert_eq!(LegendMode::parse("title"), LegendMode::Title);
        assert_eq!(LegendMode::parse("alt"), LegendMode::Alt);
        assert_eq!(LegendMode::parse("none"), LegendMode::None);
    }

    #[test]
    fn test_parse_unknown_is_none() {
        assert_eq!(LegendMode::parse("alt-text"), LegendMode::None);
        assert_eq!(LegendMode::parse(""), LegendMode::None);
    }

    #[test]
    fn test_priority_with_fallback() {
        assert_eq!(LegendMode::TitleAlt.caption("cap", "headline"), "headline");
        // title absent: falls back to alt
        assert_eq!(LegendMode::TitleAlt.caption("cap", ""), "cap");
        assert_eq!(LegendMode::AltTitle.caption("", "headline"), "headline");
    }

    #[test]
    fn test_single_field_modes_do_not_fall_back() {
        assert_eq!(LegendMode::Title.caption("cap", ""), "");
        assert_eq!(LegendMode::Alt.caption("", "headline"), "");
    }

    #[test]
    fn test_none_is_always_empty() {
        assert_eq!(LegendMode::None.caption("cap", "headline"), "");
    }
}
