use crossterm::style::{Color, Stylize};

use std::fmt;

/// A single position of the block representation, as drawn in a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockCell {
    /// A wall or pillar block.
    Block,
    /// An open room or passage.
    Space,
}

impl BlockCell {
    /// The width of each cell when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;

    pub fn is_block(self) -> bool {
        matches!(self, BlockCell::Block)
    }
}

impl From<bool> for BlockCell {
    fn from(is_block: bool) -> Self {
        if is_block {
            BlockCell::Block
        } else {
            BlockCell::Space
        }
    }
}

impl fmt::Display for BlockCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            BlockCell::Block => "⬜".with(Color::White),
            BlockCell::Space => "  ".with(Color::Reset),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                BlockCell::CELL_WIDTH as usize,
                "Each cell must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn test_from_bool() {
        assert_eq!(BlockCell::from(true), BlockCell::Block);
        assert_eq!(BlockCell::from(false), BlockCell::Space);
        assert!(BlockCell::Block.is_block());
        assert!(!BlockCell::Space.is_block());
    }

    #[test]
    fn test_cell_display_contains_symbol() {
        let block = BlockCell::Block.to_string();
        assert!(block.contains('⬜'));
        // Styling only adds escape sequences around the two-column symbol
        assert!(block.width() >= BlockCell::CELL_WIDTH as usize);
        assert!(BlockCell::Space.to_string().contains("  "));
    }
}
