//! Rendering configuration

/// Glyphs used when rendering a list as text.
///
/// Every value is followed by `arrow`; the rendering ends with `terminator`
/// and a newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderStyle {
    /// Written after every value
    pub arrow: String,

    /// Written once, after the last arrow
    pub terminator: String,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::unicode()
    }
}

impl RenderStyle {
    /// Create a style with custom glyphs.
    pub fn new(arrow: impl Into<String>, terminator: impl Into<String>) -> Self {
        Self {
            arrow: arrow.into(),
            terminator: terminator.into(),
        }
    }

    /// `1 → 2 → ╳`
    pub fn unicode() -> Self {
        Self::new(" \u{2192} ", "\u{2573}")
    }

    /// `1 -> 2 -> X`, for terminals without unicode support.
    pub fn ascii() -> Self {
        Self::new(" -> ", "X")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unicode() {
        assert_eq!(RenderStyle::default(), RenderStyle::unicode());
        assert_eq!(RenderStyle::default().arrow, " → ");
        assert_eq!(RenderStyle::default().terminator, "╳");
    }
}
