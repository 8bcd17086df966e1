//! Rendering prelude for convenient imports.
//!
//! Re-exports the types most call sites need in one line:
//!
//! ```rust
//! use mdpress::prelude::*;
//!
//! let mut renderer = Renderer::new(RenderOptions::default());
//! let html = renderer.export("**hi**", "");
//! assert!(html.contains("<strong"));
//! ```

pub use crate::config::ConfigOption;
pub use crate::Error;
pub use crate::renderer::{Footnote, LegendMode, OptionsPatch, RenderOptions, Renderer};
pub use crate::theme::{CustomizeOptions, ElementTag, StyleTable, Theme};
