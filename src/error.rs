use thiserror::Error;

use crate::maze::NodeId;

/// Errors raised by the maze engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("invalid maze dimensions {width}x{height}: width and height must be at least 1")]
    InvalidDimension { width: u16, height: u16 },

    /// A traversal emptied its frontier without reaching the goal.
    /// A spanning tree over a connected grid makes this unreachable.
    #[error("traversal from node {start} exhausted without reaching node {goal}: maze is disconnected")]
    Disconnected { start: NodeId, goal: NodeId },
}

/// Errors raised by the terminal front-end.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Maze(#[from] MazeError),

    #[error(
        "a {width}x{height} maze does not fit the terminal (maximum {max_width}x{max_height}), resize the terminal or pick a smaller maze"
    )]
    TooLarge {
        width: u16,
        height: u16,
        max_width: u16,
        max_height: u16,
    },
}
