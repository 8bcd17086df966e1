//! Static option catalogs consumed by a host UI.
//!
//! The core only needs the values; labels and descriptions exist so a
//! settings panel can be built directly from these lists. Defaults used by
//! [`RenderOptions::default`](crate::renderer::RenderOptions) come from
//! here as well.

/// One entry of a configuration catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigOption {
    /// Human-readable label for a picker.
    pub label: &'static str,
    /// The value handed to the core.
    pub value: &'static str,
    /// Short description shown next to the label.
    pub desc: &'static str,
}

/// Font family choices.
pub const FONT_FAMILY_OPTIONS: &[ConfigOption] = &[
    ConfigOption {
        label: "Serif",
        value: "Optima-Regular, Optima, PingFangSC-light, PingFangTC-light, 'PingFang SC', Cambria, Cochin, Georgia, Times, 'Times New Roman', serif",
        desc: "classic print look",
    },
    ConfigOption {
        label: "Sans-serif",
        value: "-apple-system-font, BlinkMacSystemFont, 'Helvetica Neue', 'PingFang SC', 'Hiragino Sans GB', 'Microsoft YaHei UI', 'Microsoft YaHei', Arial, sans-serif",
        desc: "clean screen look",
    },
    ConfigOption {
        label: "Monospace",
        value: "Menlo, Monaco, 'Courier New', monospace",
        desc: "fixed width",
    },
];

/// Base font size choices.
pub const FONT_SIZE_OPTIONS: &[ConfigOption] = &[
    ConfigOption { label: "12px", value: "12px", desc: "smaller" },
    ConfigOption { label: "13px", value: "13px", desc: "small" },
    ConfigOption { label: "14px", value: "14px", desc: "recommended" },
    ConfigOption { label: "15px", value: "15px", desc: "large" },
    ConfigOption { label: "16px", value: "16px", desc: "larger" },
];

/// Primary color swatches.
pub const COLOR_OPTIONS: &[ConfigOption] = &[
    ConfigOption { label: "Graphite black", value: "#232323", desc: "restrained, minimal" },
    ConfigOption { label: "Classic blue", value: "#0F4C81", desc: "steady, calm" },
    ConfigOption { label: "Emerald green", value: "#009874", desc: "natural balance" },
    ConfigOption { label: "Vivid orange", value: "#FA5151", desc: "warm energy" },
    ConfigOption { label: "Lemon yellow", value: "#FECE00", desc: "bright, warm" },
    ConfigOption { label: "Lavender purple", value: "#92617E", desc: "elegant, subtle" },
    ConfigOption { label: "Sky blue", value: "#55C9EA", desc: "fresh, open" },
    ConfigOption { label: "Rose gold", value: "#B76E79", desc: "modern luxe" },
    ConfigOption { label: "Olive green", value: "#556B2F", desc: "muted, earthy" },
    ConfigOption { label: "Mist gray", value: "#A9A9A9", desc: "soft, low key" },
    ConfigOption { label: "Sakura pink", value: "#FFB7C5", desc: "sweet, romantic" },
];

/// Code-highlight theme choices (syntect default theme names).
pub const HIGHLIGHT_THEME_OPTIONS: &[ConfigOption] = &[
    ConfigOption { label: "github", value: "InspiredGitHub", desc: "light" },
    ConfigOption { label: "ocean dark", value: "base16-ocean.dark", desc: "dark" },
    ConfigOption { label: "solarized light", value: "Solarized (light)", desc: "light" },
    ConfigOption { label: "solarized dark", value: "Solarized (dark)", desc: "dark" },
];

/// Image caption policies, see [`LegendMode`](crate::renderer::LegendMode).
pub const LEGEND_OPTIONS: &[ConfigOption] = &[
    ConfigOption { label: "title first", value: "title-alt", desc: "" },
    ConfigOption { label: "alt first", value: "alt-title", desc: "" },
    ConfigOption { label: "title only", value: "title", desc: "" },
    ConfigOption { label: "alt only", value: "alt", desc: "" },
    ConfigOption { label: "no caption", value: "none", desc: "" },
];

/// Default font family (first catalog entry).
pub const DEFAULT_FONT_FAMILY: &str = FONT_FAMILY_OPTIONS[0].value;
/// Default font size.
pub const DEFAULT_FONT_SIZE: &str = "14px";
/// Default primary color.
pub const DEFAULT_PRIMARY_COLOR: &str = "#232323";
/// Default code-highlight theme.
pub const DEFAULT_HIGHLIGHT_THEME: &str = "InspiredGitHub";
