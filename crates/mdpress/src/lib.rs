//! # mdpress - Markdown to Inline-Styled HTML
//!
//! `mdpress` renders Markdown into HTML whose entire visual appearance is
//! carried by inline `style` attributes, for publishing hosts (rich-text
//! editors of official-account platforms) that strip `<style>` blocks and
//! external stylesheets on paste.
//!
//! ## Core Concepts
//!
//! - [`Theme`]: Named visual specification, one property map per rendering
//!   slot, authored as YAML
//! - [`ElementTag`]: The closed set of rendering slots a theme can style
//! - [`RenderOptions`] / [`OptionsPatch`]: Full and partial render settings
//! - [`Renderer`]: Stateful render session with footnote accumulation
//! - [`postprocess`]: Margin fix, CSS inlining and the container wrap that
//!   make the output self-contained
//!
//! ## Quick Start
//!
//! ```rust
//! use mdpress::{OptionsPatch, RenderOptions, Renderer};
//!
//! let mut renderer = Renderer::new(RenderOptions::default());
//! renderer.reset(OptionsPatch::new().with_cite_links(true));
//!
//! let html = renderer.export(
//!     "# Release Notes\n\nSee the [changelog](https://example.com/log).",
//!     "",
//! );
//! assert!(html.starts_with("<section"));
//! assert!(html.contains("<sup>[1]</sup>"));
//! ```
//!
//! ## Themes
//!
//! Built-in themes are embedded YAML assets resolved by key; custom themes
//! load from YAML and customize with a base font size and accent color:
//!
//! ```rust
//! use mdpress::theme::{by_name, CustomizeOptions};
//!
//! let theme = by_name("grace").unwrap();
//! let customized = theme
//!     .customize(CustomizeOptions {
//!         font_size: Some(15.0),
//!         color: Some("#0F4C81"),
//!     })
//!     .unwrap();
//! assert!(customized.base()["--md-primary-color"].contains("#0F4C81"));
//! ```

pub mod config;
mod error;
pub mod postprocess;
pub mod prelude;
pub mod renderer;
pub mod style;
pub mod theme;
mod util;

pub use error::Error;
pub use renderer::{Footnote, LegendMode, OptionsPatch, RenderOptions, Renderer};
pub use theme::{CustomizeOptions, ElementTag, StyleTable, Theme};
