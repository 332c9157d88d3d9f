use std::io::Write;

use crossterm::{
    cursor, queue,
    style::{self, Attribute, Color, StyledContent, Stylize},
    terminal::{self, ClearType},
};

use crate::{
    app::{cell::GridCell, log_terminal},
    game::{SolvedBy, Snapshot},
};

/// Number of terminal rows below the maze used for status messages.
pub const STATUS_LINES: u16 = 3;

/// Draws snapshots as a `(2w+1) x (2h+1)` glyph grid: cells sit at odd coordinates,
/// wall slots between them.
pub struct Renderer {
    /// Glyphs currently on screen
    frame: Vec<GridCell>,
    /// Terminal width, for truncating status lines
    term_width: u16,
    /// Repaint everything on the next draw
    dirty: bool,
}

impl Renderer {
    pub fn new(term_width: u16) -> Self {
        Self {
            frame: Vec::new(),
            term_width,
            dirty: true,
        }
    }

    /// Glyph grid dimensions for a maze of `width x height` cells.
    pub fn grid_dims(width: u16, height: u16) -> (usize, usize) {
        (width as usize * 2 + 1, height as usize * 2 + 1)
    }

    pub fn resize(&mut self, term_width: u16) {
        self.term_width = term_width;
        self.dirty = true;
    }

    /// First terminal row below the maze.
    pub fn status_row(&self, height: u16) -> u16 {
        height * 2 + 1
    }

    /// Builds the full glyph grid for `snapshot`, row-major.
    pub fn compose(snapshot: &Snapshot) -> Vec<GridCell> {
        let (grid_width, grid_height) = Renderer::grid_dims(snapshot.width, snapshot.height);
        let mut frame = vec![GridCell::Wall; grid_width * grid_height];
        let ravel = |gx: usize, gy: usize| gy * grid_width + gx;

        let mut on_path = vec![false; snapshot.nodes.len()];
        snapshot.path.iter().for_each(|&node| on_path[node] = true);
        let mut seen = vec![false; snapshot.nodes.len()];
        snapshot.seen().for_each(|node| seen[node] = true);

        for node in snapshot.nodes {
            let (x, y) = node.coord();
            let id = node.id();
            frame[ravel(x as usize * 2 + 1, y as usize * 2 + 1)] = if on_path[id] {
                GridCell::Path
            } else if seen[id] {
                GridCell::Seen
            } else {
                GridCell::Empty
            };
        }

        // Open the wall slots of passages whose walls have come down
        for &edge in &snapshot.wall_removal_order[..snapshot.walls_removed] {
            let (a, b) = snapshot.edges[edge].endpoints();
            let (ax, ay) = snapshot.nodes[a].coord();
            let (bx, by) = snapshot.nodes[b].coord();
            // Midpoint of (2a + 1) and (2b + 1)
            let slot = ravel(
                ax as usize + bx as usize + 1,
                ay as usize + by as usize + 1,
            );
            frame[slot] = if on_path[a] && on_path[b] {
                GridCell::Path
            } else if seen[a] && seen[b] {
                GridCell::Seen
            } else {
                GridCell::Empty
            };
        }

        let mut mark = |node: usize, cell: GridCell| {
            let (x, y) = snapshot.nodes[node].coord();
            frame[ravel(x as usize * 2 + 1, y as usize * 2 + 1)] = cell;
        };
        mark(snapshot.start, GridCell::Start);
        mark(snapshot.goal, GridCell::Goal);
        let (px, py) = snapshot.player;
        frame[ravel(px as usize * 2 + 1, py as usize * 2 + 1)] = GridCell::Player;
        frame
    }

    /// Text of the status line below the maze.
    pub fn status_text(snapshot: &Snapshot) -> String {
        if !snapshot.constructed {
            return format!(
                "Building maze... {}/{} walls down",
                snapshot.walls_removed,
                snapshot.passage_edges.len()
            );
        }
        let time = format!("Time: {}.{:02}", snapshot.seconds, snapshot.frames);
        match snapshot.solved_by {
            Some(SolvedBy::Player) => format!("{}  You solved the maze!", time),
            Some(SolvedBy::Solver(solver)) => format!("{}  Solved by {}", time, solver),
            None if snapshot.almost_solved => format!("{}  Almost there!", time),
            None => time,
        }
    }

    /// Draws `snapshot`, repainting only glyphs that changed since the previous draw.
    pub fn draw(&mut self, stdout: &mut impl Write, snapshot: &Snapshot) -> std::io::Result<()> {
        let frame = Renderer::compose(snapshot);
        let repaint = self.dirty || self.frame.len() != frame.len();
        if repaint {
            queue!(stdout, terminal::Clear(ClearType::All))?;
        }

        let (grid_width, _) = Renderer::grid_dims(snapshot.width, snapshot.height);
        for (index, cell) in frame.iter().enumerate() {
            if !repaint && self.frame[index] == *cell {
                continue;
            }
            let (gx, gy) = ((index % grid_width) as u16, (index / grid_width) as u16);
            queue!(
                stdout,
                cursor::MoveTo(gx * GridCell::CELL_WIDTH, gy),
                style::Print(cell)
            )?;
        }
        self.frame = frame;
        self.dirty = false;

        let row = self.status_row(snapshot.height);
        let status = Renderer::status_text(snapshot);
        let color = match snapshot.solved_by {
            Some(_) => Color::Green,
            None if snapshot.almost_solved => Color::Yellow,
            None => Color::Cyan,
        };
        log_terminal(
            stdout,
            row,
            self.term_width,
            Some(status.with(color).attribute(Attribute::Bold)),
        )?;
        log_terminal(
            stdout,
            row + 1,
            self.term_width,
            Some(
                "←/→/↑/↓: move  b: BFS  d: DFS  r: new maze  Esc: quit"
                    .to_string()
                    .with(Color::DarkGrey),
            ),
        )?;
        stdout.flush()
    }

    /// Prints the end-of-run message on the last status line.
    pub fn draw_message(
        &self,
        stdout: &mut impl Write,
        height: u16,
        message: StyledContent<String>,
    ) -> std::io::Result<()> {
        log_terminal(
            stdout,
            self.status_row(height) + STATUS_LINES - 1,
            self.term_width,
            Some(message),
        )?;
        stdout.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        game::{Command, Direction, GameState},
        maze::ScriptedWeights,
        solvers::Solver,
    };

    fn comb() -> GameState<ScriptedWeights> {
        GameState::new(3, 3, ScriptedWeights::new([0])).unwrap()
    }

    fn at(frame: &[GridCell], gx: usize, gy: usize) -> GridCell {
        frame[gy * 7 + gx]
    }

    #[test]
    fn test_all_walls_before_teardown() {
        let game = comb();
        let frame = Renderer::compose(&game.snapshot());
        assert_eq!(frame.len(), 7 * 7);
        assert_eq!(at(&frame, 1, 1), GridCell::Player);
        assert_eq!(at(&frame, 5, 5), GridCell::Goal);
        assert_eq!(at(&frame, 3, 3), GridCell::Empty);
        // Slot between (0,0) and (1,0) is still up
        assert_eq!(at(&frame, 2, 1), GridCell::Wall);
    }

    #[test]
    fn test_teardown_opens_slots() {
        let mut game = comb();
        (0..8).for_each(|_| game.on_tick());
        let frame = Renderer::compose(&game.snapshot());
        // Passage (0,0)-(1,0)
        assert_eq!(at(&frame, 2, 1), GridCell::Empty);
        // Passage (1,0)-(1,1)
        assert_eq!(at(&frame, 3, 2), GridCell::Empty);
        // Permanent wall (0,1)-(1,1)
        assert_eq!(at(&frame, 2, 3), GridCell::Wall);
        // Corners never open
        assert_eq!(at(&frame, 2, 2), GridCell::Wall);
    }

    #[test]
    fn test_solution_path_is_drawn() {
        let mut game = comb();
        (0..8).for_each(|_| game.on_tick());
        game.on_command(Command::Search(Solver::Dfs)).unwrap();
        (0..50).for_each(|_| game.on_tick());
        let snapshot = game.snapshot();
        assert!(snapshot.solved_by.is_some());
        let frame = Renderer::compose(&snapshot);
        // Path 8, 5, 2, 1, 0 runs along the top row and down the right column
        assert_eq!(at(&frame, 3, 1), GridCell::Path);
        assert_eq!(at(&frame, 4, 1), GridCell::Path);
        assert_eq!(at(&frame, 5, 3), GridCell::Path);
        assert_eq!(at(&frame, 5, 4), GridCell::Path);
        assert_eq!(at(&frame, 1, 1), GridCell::Player);
        assert!(Renderer::status_text(&snapshot).contains("Solved by"));
    }

    #[test]
    fn test_status_text() {
        let mut game = comb();
        assert!(Renderer::status_text(&game.snapshot()).starts_with("Building maze... 0/8"));
        (0..8).for_each(|_| game.on_tick());
        assert_eq!(Renderer::status_text(&game.snapshot()), "Time: 0.00");
        for direction in [Direction::Right, Direction::Right, Direction::Down] {
            game.on_command(Command::Move(direction)).unwrap();
        }
        assert!(Renderer::status_text(&game.snapshot()).ends_with("Almost there!"));
    }
}
