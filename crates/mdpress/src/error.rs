//! Error types for theme loading and style resolution.
//!
//! The render path itself is infallible for well-formed theme data; errors
//! surface where user input crosses a boundary (hex colors, theme files).

use std::fmt;

/// Error type for theme and style operations.
#[derive(Debug)]
pub enum Error {
    /// A color string was not a valid 3- or 6-digit hex value.
    InvalidColor(String),

    /// A theme document failed to deserialize.
    Theme(String),

    /// No built-in theme is registered under the given name.
    UnknownTheme(String),

    /// I/O error (e.g., reading a theme file from disk).
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidColor(value) => {
                write!(f, "invalid hex color: {:?} (expected #rgb or #rrggbb)", value)
            }
            Error::Theme(msg) => write!(f, "theme error: {}", msg),
            Error::UnknownTheme(name) => write!(f, "unknown theme: {}", name),
            Error::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Theme(err.to_string())
    }
}
