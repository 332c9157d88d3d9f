use crossterm::style::{Color, Stylize};

use std::fmt;

/// A glyph of the rendered maze: either a cell or a wall slot between cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    Wall,
    Empty,
    /// Expanded by the search and revealed by the clock
    Seen,
    /// On the solution path
    Path,
    Start,
    Goal,
    Player,
}

impl GridCell {
    /// The width of each cell when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            GridCell::Wall => "⬜".with(Color::White),
            GridCell::Empty => "  ".with(Color::Reset),
            GridCell::Seen => "* ".with(Color::Blue),
            GridCell::Path => "🟦".with(Color::DarkBlue),
            GridCell::Start => "🟩".with(Color::Green),
            GridCell::Goal => "🟥".with(Color::Red),
            GridCell::Player => "🟡".with(Color::Magenta),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                GridCell::CELL_WIDTH as usize,
                "Each cell must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}
