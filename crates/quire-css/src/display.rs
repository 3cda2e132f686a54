//! The `display` keyword
//!
//! [§ 2 Box Layout Modes: the display property](https://www.w3.org/TR/css-display-3/#the-display-properties)
//!
//! Only the distinction between block and inline participates in layout;
//! every other keyword is kept so callers can tell "inline" apart from
//! "anything that is not inline".

use std::fmt;

use strum_macros::EnumString;

/// A resolved `display` keyword.
#[derive(Debug, Clone, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum DisplayType {
    /// "The element generates a block-level box when placed in flow layout."
    Block,
    /// "The element generates an inline-level box when placed in flow layout."
    Inline,
    /// `display: inline-block`
    InlineBlock,
    /// `display: list-item`
    ListItem,
    /// `display: none`
    #[strum(serialize = "none")]
    Hidden,
    /// Any other non-empty keyword, kept verbatim.
    #[strum(default)]
    Other(String),
}

impl DisplayType {
    /// Whether the box claims the full container width.
    #[must_use]
    pub const fn is_block(&self) -> bool {
        matches!(self, Self::Block)
    }

    /// Whether the box flows horizontally next to its siblings.
    #[must_use]
    pub const fn is_inline(&self) -> bool {
        matches!(self, Self::Inline)
    }

    /// The keyword as written in a stylesheet.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Block => "block",
            Self::Inline => "inline",
            Self::InlineBlock => "inline-block",
            Self::ListItem => "list-item",
            Self::Hidden => "none",
            Self::Other(keyword) => keyword,
        }
    }
}

impl fmt::Display for DisplayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_keywords() {
        assert_eq!("block".parse::<DisplayType>(), Ok(DisplayType::Block));
        assert_eq!("INLINE".parse::<DisplayType>(), Ok(DisplayType::Inline));
        assert_eq!(
            "inline-block".parse::<DisplayType>(),
            Ok(DisplayType::InlineBlock)
        );
    }

    #[test]
    fn test_unknown_keyword_is_kept() {
        let display: DisplayType = "flex".parse().unwrap();
        assert_eq!(display, DisplayType::Other("flex".to_string()));
        assert_eq!(display.to_string(), "flex");
        assert!(!display.is_block());
        assert!(!display.is_inline());
    }
}
