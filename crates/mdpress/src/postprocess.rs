//! Turning a rendered fragment into self-contained output.
//!
//! The publishing host strips `<style>` blocks and external stylesheets, so
//! everything that can live in a `style` attribute must end up there. The
//! steps here run after rendering: drop the top margin of the first block,
//! append the fixed auxiliary styles, inline every flat tag rule from the
//! gathered CSS, and re-emit whatever could not be inlined (class,
//! descendant and pseudo-element selectors) in one trailing `<style>`
//! block for hosts that do keep them.

use once_cell::sync::Lazy;
use regex::{Captures, NoExpand, Regex};

static FIRST_STYLE_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(style=".*?)""#).expect("style attribute pattern is valid"));

static STYLE_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<style>(.*?)</style>").expect("style block pattern is valid"));

static STYLE_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"style="([^"]*)""#).expect("style attribute pattern is valid"));

/// Removes the top margin of the first styled element so the document does
/// not start with a gap.
///
/// A single substitution on the first `style="..."` attribute; the
/// `!important` suffix outranks anything the inliner merges later.
pub fn strip_leading_margin(html: &str) -> String {
    FIRST_STYLE_ATTR
        .replace(html, "${1};margin-top: 0!important\"")
        .into_owned()
}

/// The fixed auxiliary `<style>` fragments appended after the footnote
/// block: the language badge on code blocks, the code block padding
/// scheme, and (optionally) the rule revealing the mac traffic-light
/// marker.
pub fn additional_styles(mac_code_block: bool) -> String {
    let mut css = String::from(
        "<style>.preview-wrapper pre::before { position: absolute; top: 0; right: 0; \
         color: #ccc; text-align: center; font-size: 0.8em; padding: 5px 10px 0; \
         line-height: 15px; height: 15px; font-weight: 600; }</style>",
    );
    if mac_code_block {
        css.push_str("<style>.hljs.code__pre > .mac-sign { display: flex; }</style>");
    }
    css.push_str(
        "<style>.code__pre { padding: 0 !important; } \
         .hljs.code__pre code { display: -webkit-box; padding: 0.5em 1em 1em; \
         overflow-x: auto; text-indent: 0; }</style>",
    );
    css
}

/// Inlines flat tag rules from every embedded `<style>` block plus
/// `extra_css` into matching elements' `style` attributes.
///
/// Existing inline declarations win over rule declarations, except rules
/// marked `!important`, which always win. Rules whose selector is not a
/// bare tag name cannot be expressed inline and are re-emitted in a single
/// trailing `<style>` block.
pub fn inline_styles(html: &str, extra_css: &str) -> String {
    let mut css = String::new();
    for caps in STYLE_BLOCK.captures_iter(html) {
        css.push_str(&caps[1]);
        css.push('\n');
    }
    css.push_str(extra_css);

    let rules = mdpress_css::parse(&css);
    let mut out = STYLE_BLOCK.replace_all(html, "").into_owned();
    let mut leftover = mdpress_css::RuleMap::new();
    for (selector, declarations) in rules {
        if is_flat_tag(&selector) {
            out = apply_rule(&out, &selector, &declarations);
        } else {
            leftover.insert(selector, declarations);
        }
    }

    if !leftover.is_empty() {
        out.push_str("<style>\n");
        out.push_str(&mdpress_css::serialize(&leftover));
        out.push_str("</style>");
    }
    out
}

/// A selector the inliner can match against tags: a bare element name.
fn is_flat_tag(selector: &str) -> bool {
    !selector.is_empty() && selector.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Merges one rule into every occurrence of its tag.
fn apply_rule(html: &str, tag: &str, declarations: &mdpress_css::Declarations) -> String {
    let pattern = match Regex::new(&format!(r"<{}(\s[^>]*)?>", regex::escape(tag))) {
        Ok(pattern) => pattern,
        // Selector already vetted as alphanumeric; kept for completeness.
        Err(_) => return html.to_string(),
    };
    pattern
        .replace_all(html, |caps: &Captures| {
            let attrs = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            format!("<{}{}>", tag, merge_into_attrs(attrs, declarations))
        })
        .into_owned()
}

/// Merges rule declarations into a tag's attribute text, creating the
/// `style` attribute when absent.
fn merge_into_attrs(attrs: &str, declarations: &mdpress_css::Declarations) -> String {
    match STYLE_ATTR.captures(attrs) {
        Some(caps) => {
            let mut existing = parse_inline(&caps[1]);
            for (property, value) in declarations {
                let important = value.trim_end().ends_with("!important");
                if important || !existing.contains_key(property) {
                    existing.insert(property.clone(), value.clone());
                }
            }
            let replacement = format!("style=\"{}\"", inline_text(&existing));
            STYLE_ATTR
                .replace(attrs, NoExpand(&replacement))
                .into_owned()
        }
        None => format!("{} style=\"{}\"", attrs, inline_text(declarations)),
    }
}

/// Parses the body of a `style` attribute into a declaration map.
fn parse_inline(style: &str) -> mdpress_css::Declarations {
    let mut declarations = mdpress_css::Declarations::new();
    for part in style.split(';') {
        if let Some((property, value)) = part.split_once(':') {
            let property = property.trim();
            let value = value.trim();
            if !property.is_empty() && !value.is_empty() {
                declarations.insert(property.to_string(), value.to_string());
            }
        }
    }
    declarations
}

fn inline_text(declarations: &mdpress_css::Declarations) -> String {
    declarations
        .iter()
        .map(|(property, value)| format!("{}: {}", property, value))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_leading_margin_first_attr_only() {
        let html = r#"<h1 style="color: red">x</h1><p style="color: blue">y</p>"#;
        let out = strip_leading_margin(html);
        assert!(out.contains(r#"<h1 style="color: red;margin-top: 0!important">"#));
        assert!(out.contains(r#"<p style="color: blue">"#));
    }

    #[test]
    fn test_strip_leading_margin_no_styles() {
        assert_eq!(strip_leading_margin("<p>x</p>"), "<p>x</p>");
    }

    #[test]
    fn test_additional_styles_mac_toggle() {
        assert!(additional_styles(true).contains("mac-sign"));
        assert!(!additional_styles(false).contains("mac-sign"));
        assert!(additional_styles(false).contains("code__pre"));
    }

    #[test]
    fn test_inline_flat_tag_rule() {
        let html = r#"<p style="margin: 0">x</p>"#;
        let out = inline_styles(html, "p { color: red }");
        assert!(out.contains("color: red"));
        assert!(out.contains("margin: 0"));
        assert!(!out.contains("<style>"));
    }

    #[test]
    fn test_existing_inline_declaration_wins() {
        let html = r#"<p style="color: blue">x</p>"#;
        let out = inline_styles(html, "p { color: red }");
        assert!(out.contains("color: blue"));
        assert!(!out.contains("color: red"));
    }

    #[test]
    fn test_important_rule_overrides_inline() {
        let html = r#"<p style="color: blue">x</p>"#;
        let out = inline_styles(html, "p { color: red !important }");
        assert!(out.contains("color: red !important"));
        assert!(!out.contains("color: blue"));
    }

    #[test]
    fn test_rule_creates_missing_style_attr() {
        let out = inline_styles("<p>x</p>", "p { color: red }");
        assert_eq!(out, r#"<p style="color: red">x</p>"#);
    }

    #[test]
    fn test_embedded_style_blocks_are_consumed() {
        let html = r#"<style>p { color: red }</style><p>x</p>"#;
        let out = inline_styles(html, "");
        assert!(!out.contains("color: red }"));
        assert!(out.contains(r#"<p style="color: red">"#));
    }

    #[test]
    fn test_non_flat_rules_reemitted() {
        let html = "<p>x</p>";
        let out = inline_styles(html, ".note { color: red } p::first-line { color: blue }");
        assert!(out.contains("<style>"));
        assert!(out.contains(".note"));
        assert!(out.contains("p::first-line"));
        // The paragraph itself stays untouched.
        assert!(out.starts_with("<p>x</p>"));
    }

    #[test]
    fn test_rule_applies_to_every_occurrence() {
        let html = "<td>1</td><td>2</td>";
        let out = inline_styles(html, "td { padding: 4px }");
        assert_eq!(out.matches("padding: 4px").count(), 2);
    }
}
