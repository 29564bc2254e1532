//! Indentation configuration for rendered output.

/// Indentation style applied when an [`OutputBuffer`](crate::OutputBuffer) is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation (C#, Java).
    pub const CSHARP: Self = Self::Spaces(4);

    /// 2-space indentation (TypeScript, Haxe).
    pub const COMPACT: Self = Self::Spaces(2);

    /// Build an indent from a configured width, where `0` selects tabs.
    pub fn from_width(width: u8) -> Self {
        match width {
            0 => Self::Tab,
            n => Self::Spaces(n),
        }
    }

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(1) => " ",
            Self::Spaces(2) => "  ",
            Self::Spaces(3) => "   ",
            Self::Spaces(4) => "    ",
            Self::Spaces(8) => "        ",
            // Fallback to 4 whitespaces
            Self::Spaces(_) => "    ",
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::CSHARP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Spaces(2).as_str(), "  ");
        assert_eq!(Indent::Spaces(4).as_str(), "    ");
        assert_eq!(Indent::Tab.as_str(), "\t");
    }

    #[test]
    fn test_from_width() {
        assert_eq!(Indent::from_width(0), Indent::Tab);
        assert_eq!(Indent::from_width(2), Indent::COMPACT);
        assert_eq!(Indent::from_width(4), Indent::CSHARP);
    }

    #[test]
    fn test_odd_width_falls_back() {
        assert_eq!(Indent::Spaces(6).as_str(), "    ");
    }
}
