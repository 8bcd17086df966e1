//! The per-render event walk.
//!
//! A [`Session`] borrows the renderer's options, style table and footnote
//! registry for the duration of one Markdown document. All transient state
//! (output buffer stack, list frames, blockquote depth, table assembly) is
//! owned here, so two renders never observe each other.
//!
//! The walk is a depth-first pass over `pulldown-cmark` events. Container
//! constructs push a fresh output buffer on `Start` and, on `End`, pop it
//! and emit the wrapped result into the enclosing buffer. Events are
//! consumed through the offset iterator so the raw source slice is at hand
//! where the event alone is not enough (thematic break variants).

use once_cell::sync::Lazy;
use pulldown_cmark::{
    CodeBlockKind, Event, HeadingLevel, LinkType, Options, Parser, Tag, TagEnd,
};
use regex::{Captures, Regex};

use crate::theme::{ElementTag, StyleTable};
use crate::util::escape_html;

use super::code::highlight_to_html;
use super::{Footnote, RenderOptions};

/// Hosts whose links keep working as native anchors after publishing.
const NATIVE_LINK_PREFIX: &str = "https://mp.weixin.qq.com";

/// Decorative traffic-light marker prepended to code blocks. Hidden by
/// default; an auxiliary style rule reveals it when the mac-style frame is
/// enabled.
const MAC_CODE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" x="0px" y="0px" width="45px" height="13px" viewBox="0 0 450 130"><ellipse cx="50" cy="65" rx="50" ry="52" stroke="rgb(220,60,54)" stroke-width="2" fill="rgb(237,108,96)" /><ellipse cx="225" cy="65" rx="50" ry="52" stroke="rgb(218,151,33)" stroke-width="2" fill="rgb(247,193,81)" /><ellipse cx="400" cy="65" rx="50" ry="52" stroke="rgb(27,161,37)" stroke-width="2" fill="rgb(100,200,86)" /></svg>"#;

/// Non-tag text runs in highlighted code HTML: text after a `>` and text
/// before the first tag.
static NON_TAG_TEXT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(>[^<]+)|(^[^<]+)").expect("non-tag text pattern is valid")
});

/// One open list during the walk.
struct ListFrame {
    ordered: bool,
    start: u64,
    position: u64,
}

impl ListFrame {
    /// The visible item marker, emitted inside the item's inner span.
    fn prefix(&self) -> String {
        if self.ordered {
            format!(
                "<span style=\"margin-right: 4px;\">{}.</span>",
                self.start + self.position
            )
        } else {
            "<span style=\"font-family: Consolas, Monaco, Menlo, monospace; \
             margin-right: 6px;\">\u{2022}</span>"
                .to_string()
        }
    }
}

/// One open link during the walk.
struct LinkFrame {
    href: String,
    title: String,
    autolink: bool,
}

/// One open image during the walk.
struct ImageFrame {
    href: String,
    title: String,
}

pub(super) struct Session<'a> {
    opts: &'a RenderOptions,
    styles: &'a StyleTable,
    footnotes: &'a mut Vec<Footnote>,
    /// Output buffer stack; index 0 is the document root.
    out: Vec<String>,
    lists: Vec<ListFrame>,
    links: Vec<LinkFrame>,
    images: Vec<ImageFrame>,
    blockquote_depth: usize,
    /// Set between code block start and end; `Some` also marks raw text
    /// collection (code text must reach the highlighter unescaped).
    code_lang: Option<String>,
    /// Header cell run of the current table, staged until the table closes.
    table_head: Option<String>,
    in_table_head: bool,
}

impl<'a> Session<'a> {
    pub(super) fn new(
        opts: &'a RenderOptions,
        styles: &'a StyleTable,
        footnotes: &'a mut Vec<Footnote>,
    ) -> Self {
        Self {
            opts,
            styles,
            footnotes,
            out: vec![String::new()],
            lists: Vec::new(),
            links: Vec::new(),
            images: Vec::new(),
            blockquote_depth: 0,
            code_lang: None,
            table_head: None,
            in_table_head: false,
        }
    }

    /// Renders one Markdown document to an HTML fragment.
    pub(super) fn run(mut self, markdown: &str) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);

        for (event, range) in Parser::new_ext(markdown, options).into_offset_iter() {
            let raw = &markdown[range];
            self.event(event, raw);
        }
        self.out.pop().unwrap_or_default()
    }

    fn event(&mut self, event: Event<'_>, raw: &str) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => {
                // Code block text must stay raw for the highlighter (which
                // does its own escaping); alt text and everything else is
                // escaped here.
                if self.code_lang.is_some() {
                    self.emit(&text);
                } else {
                    self.emit(&escape_html(&text));
                }
            }
            Event::Code(text) => {
                if self.in_image() {
                    self.emit(&escape_html(&text));
                } else {
                    let html = self.styled(ElementTag::Codespan, &escape_html(&text), "code");
                    self.emit(&html);
                }
            }
            Event::Html(html) | Event::InlineHtml(html) => self.emit(&html),
            Event::SoftBreak => self.emit(if self.in_image() { " " } else { "\n" }),
            Event::HardBreak => {
                if self.in_image() {
                    self.emit(" ");
                } else {
                    self.emit("<br/>");
                }
            }
            Event::Rule => {
                // `***` and `---` share an event; only the source slice
                // tells them apart.
                let html = if raw.contains("***") {
                    format!(
                        "<hr {}>",
                        self.styles
                            .style_attr_with(ElementTag::Hr, ";margin: 2.325em 0px 1.875em 0px;")
                    )
                } else {
                    self.styled(ElementTag::Hr, "", "hr")
                };
                self.emit(&html);
            }
            // Extensions that stay disabled in the parser options.
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        // Alt text collects only character data; formatting inside an
        // image description is dropped.
        if self.in_image() && !matches!(tag, Tag::Image { .. }) {
            return;
        }
        match tag {
            Tag::Paragraph => self.push_buf(),
            Tag::Heading { .. } => self.push_buf(),
            Tag::BlockQuote(_) => {
                self.blockquote_depth += 1;
                self.push_buf();
            }
            Tag::CodeBlock(kind) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(info) => info.to_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                self.code_lang = Some(lang);
                self.push_buf();
            }
            Tag::List(start) => {
                self.lists.push(ListFrame {
                    ordered: start.is_some(),
                    start: start.unwrap_or(1),
                    position: 0,
                });
                self.push_buf();
            }
            Tag::Item => self.push_buf(),
            Tag::Table(_) => {
                self.table_head = None;
                self.push_buf();
            }
            Tag::TableHead => {
                self.in_table_head = true;
                self.push_buf();
            }
            Tag::TableRow => self.push_buf(),
            Tag::TableCell => self.push_buf(),
            Tag::Emphasis | Tag::Strong | Tag::Strikethrough => self.push_buf(),
            Tag::Link {
                link_type,
                dest_url,
                title,
                ..
            } => {
                self.links.push(LinkFrame {
                    href: dest_url.to_string(),
                    title: title.to_string(),
                    autolink: matches!(link_type, LinkType::Autolink),
                });
                self.push_buf();
            }
            Tag::Image {
                dest_url, title, ..
            } => {
                self.images.push(ImageFrame {
                    href: dest_url.to_string(),
                    title: title.to_string(),
                });
                self.push_buf();
            }
            Tag::HtmlBlock => {}
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        if self.in_image() && !matches!(tag, TagEnd::Image) {
            return;
        }
        match tag {
            TagEnd::Paragraph => {
                let text = self.pop_buf();
                let html = self.paragraph(text);
                self.emit(&html);
            }
            TagEnd::Heading(level) => {
                let text = self.pop_buf();
                let html = heading_html(self.styles, heading_depth(level), &text);
                self.emit(&html);
            }
            TagEnd::BlockQuote(_) => {
                let text = self.pop_buf();
                self.blockquote_depth = self.blockquote_depth.saturating_sub(1);
                let html = self.styled(ElementTag::Blockquote, &text, "blockquote");
                self.emit(&html);
            }
            TagEnd::CodeBlock => {
                let code = self.pop_buf();
                let lang = self.code_lang.take().unwrap_or_default();
                let html = self.code_block(&code, &lang);
                self.emit(&html);
            }
            TagEnd::Item => {
                let content = self.pop_buf();
                let prefix = match self.lists.last_mut() {
                    Some(frame) => {
                        let prefix = frame.prefix();
                        frame.position += 1;
                        prefix
                    }
                    None => String::new(),
                };
                let html = self.styled(
                    ElementTag::Li,
                    &format!("<span>{}{}</span>", prefix, content),
                    "li",
                );
                self.emit(&html);
            }
            TagEnd::List(_) => {
                let items = self.pop_buf();
                let ordered = self.lists.pop().map(|frame| frame.ordered).unwrap_or(false);
                let (slot, tag_name) = if ordered {
                    (ElementTag::Ol, "ol")
                } else {
                    (ElementTag::Ul, "ul")
                };
                let html = self.styled(slot, &items, tag_name);
                self.emit(&html);
            }
            TagEnd::TableHead => {
                self.table_head = Some(self.pop_buf());
                self.in_table_head = false;
            }
            TagEnd::TableRow => {
                let cells = self.pop_buf();
                let html = self.styled(ElementTag::Tr, &cells, "tr");
                self.emit(&html);
            }
            TagEnd::TableCell => {
                let text = self.pop_buf();
                let html = if self.in_table_head {
                    self.styled(ElementTag::Th, &text, "th")
                } else {
                    self.styled(ElementTag::Td, &text, "td")
                };
                self.emit(&html);
            }
            TagEnd::Table => {
                let body = self.pop_buf();
                let head = self.table_head.take().unwrap_or_default();
                let html = format!(
                    "<section {}><table style=\"margin-bottom: 0!important;\">\
                     <thead {}>{}</thead><tbody>{}</tbody></table></section>",
                    self.styles.style_attr(ElementTag::Table),
                    self.styles.style_attr(ElementTag::Thead),
                    head,
                    body,
                );
                self.emit(&html);
            }
            TagEnd::Emphasis => {
                let text = self.pop_buf();
                let html = self.styled(ElementTag::Em, &text, "em");
                self.emit(&html);
            }
            TagEnd::Strong => {
                let text = self.pop_buf();
                let html = self.styled(ElementTag::Strong, &text, "strong");
                self.emit(&html);
            }
            TagEnd::Strikethrough => {
                let text = self.pop_buf();
                self.emit(&format!("<del>{}</del>", text));
            }
            TagEnd::Link => {
                let text = self.pop_buf();
                if let Some(frame) = self.links.pop() {
                    let html = self.link(&frame, &text);
                    self.emit(&html);
                } else {
                    self.emit(&text);
                }
            }
            TagEnd::Image => {
                let alt = self.pop_buf();
                if let Some(frame) = self.images.pop() {
                    let html = self.image(&frame, &alt);
                    self.emit(&html);
                } else {
                    self.emit(&alt);
                }
            }
            TagEnd::HtmlBlock => {}
            _ => {}
        }
    }

    /// Paragraphs mostly wrap in a styled `<p>`, with two pass-through
    /// cases: empty content, and a figure produced by an image-only
    /// paragraph (the figure already carries its styling). Inside a
    /// blockquote the dedicated `blockquotep` slot applies.
    fn paragraph(&self, text: String) -> String {
        let is_figure = text.contains("<figure") && text.contains("<img");
        if is_figure || text.trim().is_empty() {
            return text;
        }
        let slot = if self.blockquote_depth > 0 {
            ElementTag::BlockquoteP
        } else {
            ElementTag::P
        };
        self.styled(slot, &text, "p")
    }

    fn code_block(&self, code: &str, lang: &str) -> String {
        let code = code.replace('\t', "    ");
        let mut highlighted = highlight_to_html(&code, lang, &self.opts.highlight_theme);
        highlighted = highlighted.replace("\r\n", "<br/>").replace('\n', "<br/>");
        // Rich-text hosts collapse whitespace runs; harden every blank in
        // text content (tag innards excluded).
        let highlighted = NON_TAG_TEXT.replace_all(&highlighted, |caps: &Captures| {
            let mut out = String::with_capacity(caps[0].len());
            for c in caps[0].chars() {
                if c.is_whitespace() {
                    out.push_str("&nbsp;");
                } else {
                    out.push(c);
                }
            }
            out
        });

        let sign = format!(
            "<span class=\"mac-sign\" style=\"padding: 10px 14px 0; font-size: 0.8em\" \
             hidden>{}</span>",
            MAC_CODE_SVG
        );
        let code_tag = format!(
            "<code class=\"language-{}\" {}>{}</code>",
            escape_html(lang),
            self.styles.style_attr(ElementTag::Code),
            highlighted,
        );
        format!(
            "<pre class=\"hljs code__pre\" {}>{}{}</pre>",
            self.styles.style_attr(ElementTag::Pre),
            sign,
            code_tag,
        )
    }

    /// Renders a link with the three-way policy: native anchor for hosts
    /// that survive publishing, bare text for autolinks, styled span (plus
    /// an optional numbered footnote) for everything else.
    fn link(&mut self, frame: &LinkFrame, text: &str) -> String {
        if frame.href.starts_with(NATIVE_LINK_PREFIX) {
            let title = if frame.title.is_empty() {
                text.to_string()
            } else {
                escape_html(&frame.title)
            };
            return format!(
                "<a href=\"{}\" title=\"{}\" {}>{}</a>",
                escape_html(&frame.href),
                title,
                self.styles.style_attr(ElementTag::WxLink),
                text,
            );
        }
        if frame.autolink || text == escape_html(&frame.href) {
            return text.to_string();
        }
        if self.opts.cite_links {
            let title = if frame.title.is_empty() {
                text.to_string()
            } else {
                frame.title.clone()
            };
            let index = self.add_footnote(title, frame.href.clone());
            return format!(
                "<span {}>{}<sup>[{}]</sup></span>",
                self.styles.style_attr(ElementTag::ALink),
                text,
                index,
            );
        }
        format!(
            "<span {}>{}</span>",
            self.styles.style_attr(ElementTag::ALink),
            text,
        )
    }

    fn image(&self, frame: &ImageFrame, alt: &str) -> String {
        let caption = if alt.is_empty() {
            String::new()
        } else {
            let text = self.opts.legend.caption(alt, &frame.title);
            self.styled(ElementTag::Figcaption, text, "figcaption")
        };
        format!(
            "<figure {}><img {} src=\"{}\" title=\"{}\" alt=\"{}\"/>{}</figure>",
            self.styles.style_attr(ElementTag::Figure),
            self.styles.style_attr(ElementTag::Image),
            escape_html(&frame.href),
            escape_html(&frame.title),
            alt,
            caption,
        )
    }

    fn add_footnote(&mut self, title: String, link: String) -> usize {
        let index = self.footnotes.len() + 1;
        self.footnotes.push(Footnote { index, title, link });
        index
    }

    fn styled(&self, slot: ElementTag, content: &str, tag: &str) -> String {
        format!(
            "<{} {}>{}</{}>",
            tag,
            self.styles.style_attr(slot),
            content,
            tag
        )
    }

    fn in_image(&self) -> bool {
        !self.images.is_empty()
    }

    fn push_buf(&mut self) {
        self.out.push(String::new());
    }

    fn pop_buf(&mut self) -> String {
        self.out.pop().unwrap_or_default()
    }

    fn emit(&mut self, text: &str) {
        if let Some(buf) = self.out.last_mut() {
            buf.push_str(text);
        }
    }
}

/// The four-slot heading shell shared by document headings and the
/// footnote block heading.
pub(super) fn heading_html(styles: &StyleTable, depth: u8, text: &str) -> String {
    let (bx, prefix, span, suffix) = ElementTag::heading_slots(depth);
    format!(
        "<h{d} {}><span {}></span><span {}>{}</span><span {}></span></h{d}>",
        styles.style_attr(bx),
        styles.style_attr(prefix),
        styles.style_attr(span),
        text,
        styles.style_attr(suffix),
        d = depth,
    )
}

fn heading_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
