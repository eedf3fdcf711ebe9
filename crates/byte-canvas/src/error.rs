//! Error types for parsing style names.
//!
//! Rendering itself is infallible; the only fallible operations in this
//! crate turn user-supplied names into [`EffectStyle`](crate::EffectStyle)
//! and [`ColorMode`](crate::ColorMode) values.

use std::fmt;

/// Which enumeration a name was parsed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleKind {
    /// An [`EffectStyle`](crate::EffectStyle) name
    Effect,
    /// A [`ColorMode`](crate::ColorMode) name
    ColorMode,
}

impl fmt::Display for StyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleKind::Effect => write!(f, "effect style"),
            StyleKind::ColorMode => write!(f, "color mode"),
        }
    }
}

/// Error returned when a style or color mode name is not recognised.
///
/// # Example
///
/// ```
/// use byte_canvas::EffectStyle;
///
/// let err = "sparkle".parse::<EffectStyle>().unwrap_err();
/// assert!(err.to_string().starts_with("unknown effect style 'sparkle'"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStyleError {
    kind: StyleKind,
    name: String,
    expected: &'static [&'static str],
}

impl ParseStyleError {
    pub(crate) fn new(kind: StyleKind, name: &str, expected: &'static [&'static str]) -> Self {
        Self {
            kind,
            name: name.to_string(),
            expected,
        }
    }

    /// The enumeration the name was parsed for.
    pub fn kind(&self) -> StyleKind {
        self.kind
    }

    /// The rejected input.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ParseStyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown {} '{}' (expected one of: {})",
            self.kind,
            self.name,
            self.expected.join(", ")
        )
    }
}

impl std::error::Error for ParseStyleError {}
