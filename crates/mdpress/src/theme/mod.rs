//! Theme model and style resolution.
//!
//! A [`Theme`] is an immutable visual specification: a `base` property map
//! applied to every element plus a per-[`ElementTag`] map of overrides.
//! Rendering never consults a theme directly; it consults a [`StyleTable`],
//! the fully resolved per-slot mapping built from a theme plus the active
//! render options.

mod element;
mod registry;
mod styles;
mod theme;

pub use element::ElementTag;
pub use registry::{by_name, default_theme, names, options, resolve};
pub use styles::StyleTable;
pub use theme::{CustomizeOptions, Theme};
