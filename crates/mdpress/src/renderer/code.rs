//! Code block highlighting with inline-styled spans.
//!
//! The target host strips classes and stylesheets, so highlight colors must
//! land directly in `style` attributes. syntect's styled-HTML output does
//! exactly that; unknown language tokens fall back to plain text rather
//! than failing the render.

use once_cell::sync::Lazy;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::{styled_line_to_highlighted_html, IncludeBackground};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::config::DEFAULT_HIGHLIGHT_THEME;
use crate::util::escape_html;

static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

/// Highlights a code block into HTML with inline-styled spans.
///
/// `lang` is the fenced-block info string; only its first word is used as
/// the language token. Unrecognized tokens (and empty ones) highlight as
/// plain text. Lines that fail to highlight degrade to escaped text.
pub(crate) fn highlight_to_html(code: &str, lang: &str, theme_name: &str) -> String {
    let token = lang.split_whitespace().next().unwrap_or("");
    let syntax = SYNTAX_SET
        .find_syntax_by_token(token)
        .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text());
    let theme = resolve_theme(theme_name);

    let mut highlighter = HighlightLines::new(syntax, theme);
    let mut html = String::new();
    for line in LinesWithEndings::from(code) {
        let rendered = highlighter
            .highlight_line(line, &SYNTAX_SET)
            .ok()
            .and_then(|regions| {
                styled_line_to_highlighted_html(&regions[..], IncludeBackground::No).ok()
            });
        match rendered {
            Some(fragment) => html.push_str(&fragment),
            None => html.push_str(&escape_html(line)),
        }
    }
    html
}

/// Resolves a highlight theme name with fallback to the default theme.
fn resolve_theme(name: &str) -> &'static Theme {
    THEME_SET
        .themes
        .get(name)
        .or_else(|| THEME_SET.themes.get(DEFAULT_HIGHLIGHT_THEME))
        .unwrap_or_else(|| {
            // load_defaults always carries InspiredGitHub; if that ever
            // changes, any theme beats no theme.
            THEME_SET
                .themes
                .values()
                .next()
                .expect("syntect default theme set is empty")
        })
}
