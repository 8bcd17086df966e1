//! End-to-end pipeline tests over the public API: theme customization,
//! rendering, citation footnotes, CSS inlining and the container wrap.

use mdpress::prelude::*;
use mdpress::theme::by_name;

fn default_renderer() -> Renderer {
    Renderer::new(RenderOptions::default())
}

fn customized_renderer(font_size: f32, color: &str) -> Renderer {
    let theme = by_name("default")
        .unwrap()
        .customize(CustomizeOptions {
            font_size: Some(font_size),
            color: Some(color),
        })
        .unwrap();
    Renderer::new(RenderOptions {
        theme,
        ..RenderOptions::default()
    })
}

#[test]
fn title_and_bold_paragraph_at_14px() {
    let mut renderer = customized_renderer(14.0, "#0F4C81");
    let html = renderer.export("# Title\n\nHello **world**.", "");

    assert!(html.starts_with("<section"));
    assert!(html.ends_with("</section>"));
    // h1 span multiplier 1.4 scaled against the 14px base.
    assert!(html.contains("font-size: 19.6px"));
    assert!(html.contains("<strong"));
    assert!(html.contains(">world</strong>"));
    // Accent color propagated into the custom properties.
    assert!(html.contains("--md-primary-color: #0F4C81"));
}

#[test]
fn first_block_loses_its_top_margin() {
    let mut renderer = default_renderer();
    let html = renderer.export("opening paragraph\n\nsecond paragraph", "");
    assert_eq!(html.matches("margin-top: 0!important").count(), 1);
    let first_p = html.find("<p ").unwrap();
    let fix = html.find("margin-top: 0!important").unwrap();
    assert!(fix > first_p);
    assert!(fix < html.find("second").unwrap());
}

#[test]
fn plain_text_document_stays_plain() {
    let mut renderer = default_renderer();
    let html = renderer.export("nothing but prose, twice.\n\nand again.", "");
    assert!(!html.contains("<table"));
    assert!(!html.contains("<img"));
    assert!(!html.contains("<sup>"));
    assert!(!html.contains(">References<"));
}

#[test]
fn image_caption_title_alt_falls_back_to_alt() {
    let mut renderer = Renderer::new(RenderOptions {
        legend: LegendMode::TitleAlt,
        ..RenderOptions::default()
    });
    let html = renderer.render_fragment("![cap](https://example.com/p.png)");
    assert!(html.contains("<figcaption"));
    assert!(html.contains(">cap</figcaption>"));
}

#[test]
fn identical_cite_links_get_distinct_compacted_lines() {
    let mut renderer = Renderer::new(RenderOptions {
        cite_links: true,
        ..RenderOptions::default()
    });
    let html = renderer.export(
        "[x](https://example.com/a \"https://example.com/a\") and \
         [x](https://example.com/a \"https://example.com/a\")",
        "",
    );
    assert!(html.contains("<sup>[1]</sup>"));
    assert!(html.contains("<sup>[2]</sup>"));
    // Title equal to link renders the compacted, link-only form.
    assert!(html.contains("[1]</code>: "));
    assert!(html.contains("[2]</code>: "));
    assert!(html.contains(">References</span>"));
}

#[test]
fn custom_css_overrides_theme_slot() {
    let rules = mdpress_css::parse("h1span { color: #ff0000 }");
    let theme = by_name("default")
        .unwrap()
        .with_custom_css(&rules, "#232323")
        .unwrap();
    let mut renderer = Renderer::new(RenderOptions {
        theme,
        ..RenderOptions::default()
    });
    let html = renderer.render_fragment("# Red Title");
    assert!(html.contains("color: #ff0000"));
    // Untargeted slots keep their theme styling.
    let mut plain_renderer = default_renderer();
    assert!(!plain_renderer.render_fragment("prose").contains("#ff0000"));
}

#[test]
fn extra_css_is_inlined_on_export() {
    let mut renderer = default_renderer();
    let html = renderer.export("some words", "p { border-bottom: 2px solid }");
    let p = html.find("<p ").unwrap();
    let close = html[p..].find('>').unwrap() + p;
    assert!(html[p..close].contains("border-bottom: 2px solid"));
}

#[test]
fn non_flat_extra_css_survives_in_trailing_block() {
    let mut renderer = default_renderer();
    let html = renderer.export("words", ".callout { color: teal }");
    assert!(html.contains("<style>"));
    assert!(html.contains(".callout"));
}

#[test]
fn repeated_exports_are_identical() {
    let mut renderer = Renderer::new(RenderOptions {
        cite_links: true,
        ..RenderOptions::default()
    });
    let doc = "# T\n\n[a](https://example.com/1)\n\n- one\n- two";
    let first = renderer.export(doc, "");
    let second = renderer.export(doc, "");
    assert_eq!(first, second);
}

#[test]
fn themes_produce_different_chrome() {
    let mut classic = default_renderer();
    let mut grace = Renderer::new(RenderOptions {
        theme: by_name("grace").unwrap().clone(),
        ..RenderOptions::default()
    });
    let doc = "> a quiet aside";
    assert_ne!(classic.render_fragment(doc), grace.render_fragment(doc));
}

#[test]
fn options_patch_switches_behavior_mid_session() {
    let mut renderer = default_renderer();
    let before = renderer.render_fragment("[a](https://example.com/1)");
    assert!(!before.contains("<sup>"));

    renderer.reset(OptionsPatch::new().with_cite_links(true));
    let after = renderer.render_fragment("[a](https://example.com/1)");
    assert!(after.contains("<sup>[1]</sup>"));
}

#[test]
fn theme_loads_from_yaml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("night.yaml");
    std::fs::write(
        &path,
        "base:\n  color: \"#eee\"\nelements:\n  p:\n    margin: \"0\"\n",
    )
    .unwrap();

    let theme = Theme::from_file(&path).unwrap();
    assert_eq!(theme.name(), Some("night"));
    assert_eq!(theme.base()["color"], "#eee");
}

#[test]
fn mixed_document_renders_every_construct() {
    let mut renderer = default_renderer();
    let doc = "\
# Heading

A paragraph with `code` and *emphasis*.

> A quote.

1. first
2. second

| h |
| - |
| c |

---

```text
block
```
";
    let html = renderer.export(doc, "");
    for needle in [
        "<h1 ", "<em ", "<blockquote ", "<ol ", "<table ", "<hr ", "code__pre",
    ] {
        assert!(html.contains(needle), "missing {}", needle);
    }
}
