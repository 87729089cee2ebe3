use crate::types::{Rgb, TextStyle};

/// A single terminal cell. Wide characters occupy two cells, with the
/// second marked as a continuation so the diff writer skips it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: ' ',
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            style: TextStyle::new(),
            wide_continuation: false,
        }
    }
}

impl Cell {
    /// A fully specified glyph cell.
    pub fn styled(char: char, fg: Rgb, bg: Rgb, style: TextStyle) -> Self {
        Self {
            char,
            fg,
            bg,
            style,
            wide_continuation: false,
        }
    }

    /// The trailing half of a wide character. Carries the same colors so
    /// clearing either half repaints consistently.
    pub fn continuation(fg: Rgb, bg: Rgb, style: TextStyle) -> Self {
        Self {
            char: ' ',
            fg,
            bg,
            style,
            wide_continuation: true,
        }
    }
}
