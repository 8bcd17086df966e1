//! Markdown to inline-styled HTML.
//!
//! [`Renderer`] is a stateful session: it owns the active [`RenderOptions`],
//! the [`StyleTable`](crate::theme::StyleTable) resolved from them, and the
//! footnote registry accumulated while rendering. One renderer serves one
//! output document at a time; [`Renderer::reset`] starts the next one.
//!
//! ## Quick Start
//!
//! ```rust
//! use mdpress::renderer::{Renderer, RenderOptions};
//!
//! let mut renderer = Renderer::new(RenderOptions::default());
//! let html = renderer.export("# Title\n\nHello **world**.", "");
//! assert!(html.starts_with("<section"));
//! assert!(html.contains("<strong"));
//! ```

mod code;
mod legend;
mod session;

pub use legend::LegendMode;

use crate::config::{DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, DEFAULT_HIGHLIGHT_THEME};
use crate::postprocess;
use crate::theme::{self, ElementTag, StyleTable, Theme};

use session::{heading_html, Session};

/// One registered citation: 1-based index plus the link's title and target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footnote {
    pub index: usize,
    pub title: String,
    pub link: String,
}

/// Everything a render pass depends on.
///
/// The `theme` is expected to be fully customized already (accent color,
/// scaled heading sizes, custom CSS overrides); the renderer only resolves
/// it against the typography fields. Font size is kept as the CSS string
/// (`"14px"`), matching how it lands in the style table.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub theme: Theme,
    pub font_family: String,
    pub font_size: String,
    pub use_indent: bool,
    pub legend: LegendMode,
    /// Register non-native links as numbered footnotes.
    pub cite_links: bool,
    /// Reveal the traffic-light marker on code blocks.
    pub mac_code_block: bool,
    /// syntect theme name for code highlighting.
    pub highlight_theme: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: theme::default_theme().clone(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: DEFAULT_FONT_SIZE.to_string(),
            use_indent: false,
            legend: LegendMode::default(),
            cite_links: false,
            mac_code_block: true,
            highlight_theme: DEFAULT_HIGHLIGHT_THEME.to_string(),
        }
    }
}

/// A partial update to [`RenderOptions`]; unset fields keep their current
/// value.
#[derive(Debug, Clone, Default)]
pub struct OptionsPatch {
    pub theme: Option<Theme>,
    pub font_family: Option<String>,
    pub font_size: Option<String>,
    pub use_indent: Option<bool>,
    pub legend: Option<LegendMode>,
    pub cite_links: Option<bool>,
    pub mac_code_block: Option<bool>,
    pub highlight_theme: Option<String>,
}

impl OptionsPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = Some(font_family.into());
        self
    }

    pub fn with_font_size(mut self, font_size: impl Into<String>) -> Self {
        self.font_size = Some(font_size.into());
        self
    }

    pub fn with_use_indent(mut self, use_indent: bool) -> Self {
        self.use_indent = Some(use_indent);
        self
    }

    pub fn with_legend(mut self, legend: LegendMode) -> Self {
        self.legend = Some(legend);
        self
    }

    pub fn with_cite_links(mut self, cite_links: bool) -> Self {
        self.cite_links = Some(cite_links);
        self
    }

    pub fn with_mac_code_block(mut self, mac_code_block: bool) -> Self {
        self.mac_code_block = Some(mac_code_block);
        self
    }

    pub fn with_highlight_theme(mut self, name: impl Into<String>) -> Self {
        self.highlight_theme = Some(name.into());
        self
    }

    /// Folds the patch into existing options.
    pub fn apply(self, opts: &mut RenderOptions) {
        if let Some(theme) = self.theme {
            opts.theme = theme;
        }
        if let Some(font_family) = self.font_family {
            opts.font_family = font_family;
        }
        if let Some(font_size) = self.font_size {
            opts.font_size = font_size;
        }
        if let Some(use_indent) = self.use_indent {
            opts.use_indent = use_indent;
        }
        if let Some(legend) = self.legend {
            opts.legend = legend;
        }
        if let Some(cite_links) = self.cite_links {
            opts.cite_links = cite_links;
        }
        if let Some(mac_code_block) = self.mac_code_block {
            opts.mac_code_block = mac_code_block;
        }
        if let Some(highlight_theme) = self.highlight_theme {
            opts.highlight_theme = highlight_theme;
        }
    }
}

/// The stateful Markdown renderer.
pub struct Renderer {
    opts: RenderOptions,
    styles: StyleTable,
    footnotes: Vec<Footnote>,
}

impl Renderer {
    pub fn new(opts: RenderOptions) -> Self {
        let styles = StyleTable::build(
            &opts.theme,
            &opts.font_family,
            &opts.font_size,
            opts.use_indent,
        );
        Self {
            opts,
            styles,
            footnotes: Vec::new(),
        }
    }

    /// The active options.
    pub fn options(&self) -> &RenderOptions {
        &self.opts
    }

    /// The resolved style table for the active options.
    pub fn style_table(&self) -> &StyleTable {
        &self.styles
    }

    /// Footnotes registered since the last reset, in citation order.
    pub fn footnotes(&self) -> &[Footnote] {
        &self.footnotes
    }

    /// Applies a partial option update and rebuilds the style table.
    pub fn set_options(&mut self, patch: OptionsPatch) {
        patch.apply(&mut self.opts);
        self.styles = StyleTable::build(
            &self.opts.theme,
            &self.opts.font_family,
            &self.opts.font_size,
            self.opts.use_indent,
        );
    }

    /// Starts a fresh output document: clears the footnote registry, then
    /// applies the patch.
    pub fn reset(&mut self, patch: OptionsPatch) {
        self.footnotes.clear();
        self.set_options(patch);
    }

    /// Renders Markdown to an HTML fragment, accumulating footnotes.
    ///
    /// The fragment is not yet self-contained: margins, the footnote
    /// block, auxiliary styles and the container wrap are applied by
    /// [`export`](Self::export).
    pub fn render_fragment(&mut self, markdown: &str) -> String {
        Session::new(&self.opts, &self.styles, &mut self.footnotes).run(markdown)
    }

    /// The rendered footnote block, or the empty string when no footnotes
    /// were registered.
    ///
    /// Each entry renders as an indexed line; an entry whose title equals
    /// its link collapses to the link-only form.
    pub fn build_footnotes(&self) -> String {
        if self.footnotes.is_empty() {
            return String::new();
        }
        let lines = self
            .footnotes
            .iter()
            .map(|footnote| {
                if footnote.title == footnote.link {
                    format!(
                        "<code style=\"font-size: 90%; opacity: 0.6;\">[{}]</code>: \
                         <i style=\"word-break: break-all\">{}</i><br/>",
                        footnote.index, footnote.title,
                    )
                } else {
                    format!(
                        "<code style=\"font-size: 90%; opacity: 0.6;\">[{}]</code> {}: \
                         <i style=\"word-break: break-all\">{}</i><br/>",
                        footnote.index, footnote.title, footnote.link,
                    )
                }
            })
            .collect::<Vec<_>>()
            .join("\n");

        let heading = heading_html(&self.styles, 4, "References");
        let block = format!(
            "<p {}>{}</p>",
            self.styles.style_attr(ElementTag::Footnotes),
            lines,
        );
        format!("{}{}", heading, block)
    }

    /// Wraps finished content in the styled root container.
    pub fn create_container(&self, content: &str) -> String {
        format!(
            "<section {}>{}</section>",
            self.styles.style_attr(ElementTag::Container),
            content,
        )
    }

    /// Runs the full pipeline on one document and returns self-contained
    /// HTML: fragment, margin fix, footnote block, auxiliary styles, CSS
    /// inlining, container wrap.
    pub fn export(&mut self, markdown: &str, extra_css: &str) -> String {
        self.reset(OptionsPatch::new());
        let fragment = self.render_fragment(markdown);
        let mut html = postprocess::strip_leading_margin(&fragment);
        html.push_str(&self.build_footnotes());
        html.push_str(&postprocess::additional_styles(self.opts.mac_code_block));
        let inlined = postprocess::inline_styles(&html, extra_css);
        self.create_container(&inlined)
    }
}
