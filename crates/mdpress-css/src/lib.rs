//! Best-effort CSS text parser for per-tag style overrides.
//!
//! This crate turns free-form CSS source text into a flat mapping from
//! selector to `property -> value` declarations, the structured form the
//! `mdpress` theme layer and CSS inliner consume. It is intentionally not a
//! CSS engine: there is no cascade, no specificity, no at-rule handling and
//! no nesting. Selectors are plain strings; a comma-separated selector list
//! is split so each selector receives its own copy of the declarations.
//!
//! # Example
//!
//! ```rust
//! let rules = mdpress_css::parse(
//!     r#"
//!     /* paragraph text */
//!     p { color: #333; line-height: 1.75 }
//!     h1span, h2span { font-weight: bold; }
//!     "#,
//! );
//!
//! assert_eq!(rules["p"]["color"], "#333");
//! assert_eq!(rules["h1span"]["font-weight"], "bold");
//! assert_eq!(rules["h2span"]["font-weight"], "bold");
//! ```
//!
//! # Error Handling
//!
//! Parsing never fails. Malformed declarations (no `:`) are dropped
//! per-declaration, and an unbalanced brace stops the scan early, silently
//! ignoring whatever follows. Both behaviors are deliberate: the input is
//! user-authored override CSS and a partial result beats no result.
//!
//! # Known Limitations
//!
//! - A `{` or `}` inside a quoted value mis-parses the surrounding block.
//! - At-rules (`@media`, `@font-face`, ...) are treated as ordinary
//!   selectors and will produce garbage entries rather than errors.

use std::collections::BTreeMap;

/// Declarations of a single rule: CSS property name to value string.
pub type Declarations = BTreeMap<String, String>;

/// Parsed stylesheet: selector text to merged declarations.
pub type RuleMap = BTreeMap<String, Declarations>;

/// Parses CSS source text into a [`RuleMap`].
///
/// Block comments are stripped first (non-greedy, may span lines). The
/// scanner then repeatedly takes the next `{...}` block: the text before
/// `{` is a comma-separated selector list, the text inside is a
/// `;`-separated declaration list. When the same selector appears in more
/// than one block, later declarations win per property.
///
/// ```rust
/// let rules = mdpress_css::parse("p { color: red } p { color: blue; margin: 0 }");
/// assert_eq!(rules["p"]["color"], "blue");
/// assert_eq!(rules["p"]["margin"], "0");
/// ```
pub fn parse(css: &str) -> RuleMap {
    let mut rest = strip_comments(css);
    let mut rules = RuleMap::new();

    loop {
        let (Some(open), Some(close)) = (rest.find('{'), rest.find('}')) else {
            break;
        };
        if close < open {
            // Stray closing brace before the next block: malformed input,
            // stop scanning (best-effort contract).
            break;
        }

        let declarations = parse_declarations(&rest[open + 1..close]);
        for selector in rest[..open].split(',') {
            let selector = selector.trim();
            if selector.is_empty() {
                continue;
            }
            let entry = rules.entry(selector.to_string()).or_default();
            for (property, value) in &declarations {
                entry.insert(property.clone(), value.clone());
            }
        }

        rest = rest[close + 1..].trim().to_string();
    }

    rules
}

/// Serializes a [`RuleMap`] back to CSS text.
///
/// The output is normalized: one rule per selector, declarations on their
/// own lines, terminated with `;`. Re-parsing the output yields the same
/// mapping.
pub fn serialize(rules: &RuleMap) -> String {
    let mut out = String::new();
    for (selector, declarations) in rules {
        out.push_str(selector);
        out.push_str(" {\n");
        for (property, value) in declarations {
            out.push_str("  ");
            out.push_str(property);
            out.push_str(": ");
            out.push_str(value);
            out.push_str(";\n");
        }
        out.push_str("}\n");
    }
    out
}

/// Removes `/* ... */` comments, including ones spanning multiple lines.
fn strip_comments(css: &str) -> String {
    let mut out = String::with_capacity(css.len());
    let mut rest = css;
    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        match rest[start + 2..].find("*/") {
            Some(end) => rest = &rest[start + 2 + end + 2..],
            None => return out, // unterminated comment swallows the tail
        }
    }
    out.push_str(rest);
    out
}

/// Splits a declaration block body into property/value pairs.
///
/// Empty segments and segments without a `:` are dropped. The value keeps
/// any further `:` characters (`background: url(a:b)` style values).
fn parse_declarations(body: &str) -> Declarations {
    let mut declarations = Declarations::new();
    for segment in body.split(';') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        let Some((property, value)) = segment.split_once(':') else {
            continue;
        };
        let property = property.trim();
        if property.is_empty() {
            continue;
        }
        declarations.insert(property.to_string(), value.trim().to_string());
    }
    declarations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_rule() {
        let rules = parse("p { color: red; margin: 0 }");
        assert_eq!(rules.len(), 1);
        assert_eq!(rules["p"]["color"], "red");
        assert_eq!(rules["p"]["margin"], "0");
    }

    #[test]
    fn test_parse_selector_list() {
        let rules = parse("h1span, h2span { font-weight: bold }");
        assert_eq!(rules["h1span"]["font-weight"], "bold");
        assert_eq!(rules["h2span"]["font-weight"], "bold");
    }

    #[test]
    fn test_later_block_wins_per_property() {
        let rules = parse("p { color: red; padding: 1em } p { color: blue }");
        assert_eq!(rules["p"]["color"], "blue");
        assert_eq!(rules["p"]["padding"], "1em");
    }

    #[test]
    fn test_comments_stripped() {
        let rules = parse("/* note\nspanning lines */ p { /* inline */ color: red }");
        assert_eq!(rules["p"]["color"], "red");
    }

    #[test]
    fn test_malformed_declaration_dropped() {
        let rules = parse("p { color red; margin: 0 }");
        assert!(!rules["p"].contains_key("color"));
        assert_eq!(rules["p"]["margin"], "0");
    }

    #[test]
    fn test_value_may_contain_colon() {
        let rules = parse("p { background: url(http://example.com/x.png) }");
        assert_eq!(rules["p"]["background"], "url(http://example.com/x.png)");
    }

    #[test]
    fn test_unbalanced_braces_stop_early() {
        let rules = parse("p { color: red } blockquote { padding: 1em");
        assert_eq!(rules.len(), 1);
        assert!(rules.contains_key("p"));
    }

    #[test]
    fn test_stray_closing_brace_stops_scan() {
        let rules = parse("} p { color: red }");
        assert!(rules.is_empty());
    }

    #[test]
    fn test_trailing_text_without_braces_ignored() {
        let rules = parse("p { color: red } stray trailing text");
        assert_eq!(rules.len(), 1);
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(parse("").is_empty());
        assert!(parse("   \n\t  ").is_empty());
    }

    #[test]
    fn test_important_preserved_in_value() {
        let rules = parse("image { width: 100% !important }");
        assert_eq!(rules["image"]["width"], "100% !important");
    }

    #[test]
    fn test_serialize_round_trip() {
        let rules = parse("blockquote { padding: 0.8em; color: #777 } p { margin: 0 }");
        let reparsed = parse(&serialize(&rules));
        assert_eq!(rules, reparsed);
    }

    #[test]
    fn test_custom_properties() {
        let rules = parse("container { --md-primary-color: #0f4c81 }");
        assert_eq!(rules["container"]["--md-primary-color"], "#0f4c81");
    }
}
