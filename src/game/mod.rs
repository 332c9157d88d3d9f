mod clock;
mod player;

pub use clock::{Clock, TICKS_PER_SECOND, TickEvent};
pub use player::{Direction, Player};

use rand::rngs::StdRng;

use crate::{
    error::MazeError,
    generators::get_rng,
    maze::{Edge, EdgeId, Maze, Node, NodeId, WeightSource},
    solvers::{Solution, Solver, solve},
};

/// Input accepted by [`GameState::on_command`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Search(Solver),
    Reset,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SolvedBy {
    Player,
    Solver(Solver),
}

/// Move statistics for a player who reached the goal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Score {
    pub moves: usize,
    /// Moves along the unique start-to-goal path.
    pub optimal_moves: usize,
    pub wrong_moves: usize,
}

/// A maze instance with its animation clock, player and latest search.
///
/// Driven once per tick through [`GameState::on_tick`] and once per input through
/// [`GameState::on_command`]. Everything is replaced on reset.
pub struct GameState<W = StdRng> {
    /// Source of edge weights, kept for regenerating on reset
    weights: W,
    maze: Maze,
    clock: Clock,
    player: Player,
    search: Option<(Solver, Solution)>,
    /// Start-to-goal path, kept while the player stands on the goal
    player_route: Option<Vec<NodeId>>,
}

impl GameState<StdRng> {
    /// New game whose mazes are drawn from a (optionally seeded) standard RNG.
    pub fn seeded(width: u16, height: u16, seed: Option<u64>) -> Result<Self, MazeError> {
        GameState::new(width, height, get_rng(seed))
    }
}

impl<W: WeightSource> GameState<W> {
    pub fn new(width: u16, height: u16, mut weights: W) -> Result<Self, MazeError> {
        let maze = Maze::generate(width, height, &mut weights)?;
        Ok(GameState {
            clock: Clock::new(maze.passages().len()),
            player: Player::new((0, 0)),
            weights,
            maze,
            search: None,
            player_route: None,
        })
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Latest search and the algorithm that produced it.
    pub fn search(&self) -> Option<(Solver, &Solution)> {
        self.search
            .as_ref()
            .map(|(solver, solution)| (*solver, solution))
    }

    /// Advances time by one tick.
    pub fn on_tick(&mut self) {
        if let TickEvent::WallRemoved(order) = self.clock.advance() {
            let (a, b) = self.maze.edge(self.maze.passages()[order]).endpoints();
            tracing::trace!("[game] Tick {}: removed wall between {} and {}", self.clock.tick(), a, b);
            if self.clock.is_constructed() {
                tracing::debug!("[game] Maze fully revealed after {} ticks", self.clock.tick());
            }
        }
    }

    /// Applies one input. Moves into walls are ignored.
    ///
    /// Only fails on a disconnected maze, which generation never produces.
    pub fn on_command(&mut self, command: Command) -> Result<(), MazeError> {
        match command {
            Command::Move(direction) => {
                if self.move_player(direction).is_none() {
                    return Ok(());
                }
                if !self.player_solved() {
                    self.player_route = None;
                } else if self.player_route.is_none() {
                    let route = solve(&self.maze, self.maze.start(), self.maze.goal(), Solver::Dfs)?;
                    tracing::info!(
                        "[game] Player reached the goal in {} moves (shortest is {})",
                        self.player.moves(),
                        route.path().len() - 1
                    );
                    self.player_route = Some(route.path().to_vec());
                }
            }
            Command::Search(solver) => self.run_search(solver)?,
            Command::Reset => self.reset()?,
        }
        Ok(())
    }

    /// Attempts to move the player one cell in `direction` through a passage.
    /// Returns the new position if the move is successful, None otherwise.
    fn move_player(&mut self, direction: Direction) -> Option<(u16, u16)> {
        let grid = self.maze.grid();
        let target = self
            .player
            .target(direction, grid.width(), grid.height())?;
        let (from, to) = (grid.id_at(self.player.position())?, grid.id_at(target)?);
        if self.maze.passage_between(from, to).is_none() {
            tracing::debug!("[game] Wall blocks move {:?} from {:?}", direction, self.player.position());
            return None;
        }
        tracing::debug!("[game] Moving {:?} to {:?}", direction, target);
        self.player.step_to(target, to);
        Some(target)
    }

    /// Discards the previous search, restarts the stopwatch and searches from start to goal.
    fn run_search(&mut self, solver: Solver) -> Result<(), MazeError> {
        self.search = None;
        self.clock.restart();
        let solution = solve(&self.maze, self.maze.start(), self.maze.goal(), solver)?;
        self.search = Some((solver, solution));
        Ok(())
    }

    /// Regenerates the maze with the same dimensions and fresh weights.
    fn reset(&mut self) -> Result<(), MazeError> {
        let (width, height) = (self.maze.width(), self.maze.height());
        self.maze = Maze::generate(width, height, &mut self.weights)?;
        self.clock = Clock::new(self.maze.passages().len());
        self.player = Player::new((0, 0));
        self.search = None;
        self.player_route = None;
        tracing::info!("[game] Reset with a new {}x{} maze", width, height);
        Ok(())
    }

    fn goal_coord(&self) -> (u16, u16) {
        self.maze.node(self.maze.goal()).coord()
    }

    pub fn player_solved(&self) -> bool {
        self.player.position() == self.goal_coord()
    }

    /// The search has found the goal and the clock has caught up with its discovery.
    pub fn algorithm_solved(&self) -> bool {
        self.search
            .as_ref()
            .is_some_and(|(_, solution)| solution.goal_reach_time() <= self.clock.tick())
    }

    pub fn is_solved(&self) -> bool {
        self.solved_by().is_some()
    }

    pub fn solved_by(&self) -> Option<SolvedBy> {
        if self.player_solved() {
            Some(SolvedBy::Player)
        } else if self.algorithm_solved() {
            self.search.as_ref().map(|(solver, _)| SolvedBy::Solver(*solver))
        } else {
            None
        }
    }

    /// The player is within one cell of the goal, diagonals included.
    pub fn is_almost_solved(&self) -> bool {
        let (px, py) = self.player.position();
        let (gx, gy) = self.goal_coord();
        px.abs_diff(gx) <= 1 && py.abs_diff(gy) <= 1
    }

    /// Move statistics, available while the player stands on the goal.
    pub fn score(&self) -> Option<Score> {
        let route = self.player_route.as_ref()?;
        let moves = self.player.moves();
        let optimal_moves = route.len() - 1;
        Some(Score {
            moves,
            optimal_moves,
            wrong_moves: moves.saturating_sub(optimal_moves),
        })
    }

    /// Read-only view for rendering.
    pub fn snapshot(&self) -> Snapshot<'_> {
        let (visited, reach_times) = match &self.search {
            Some((_, solution)) => (solution.visited(), solution.reach_times()),
            None => (&[][..], &[][..]),
        };
        let path = match (&self.player_route, &self.search) {
            (Some(route), _) => route.as_slice(),
            (None, Some((_, solution))) if self.algorithm_solved() => solution.path(),
            _ => &[][..],
        };
        Snapshot {
            width: self.maze.width(),
            height: self.maze.height(),
            nodes: self.maze.nodes(),
            edges: self.maze.edges(),
            passage_edges: self.maze.passages(),
            wall_edges: self.maze.walls(),
            wall_removal_order: self.maze.passages(),
            walls_removed: self.clock.walls_removed(),
            visited,
            reach_times,
            path,
            start: self.maze.start(),
            goal: self.maze.goal(),
            player: self.player.position(),
            tick: self.clock.tick(),
            seconds: self.clock.seconds(),
            frames: self.clock.frames(),
            constructed: self.clock.is_constructed(),
            solved_by: self.solved_by(),
            almost_solved: self.is_almost_solved(),
        }
    }
}

/// Borrowed view of a [`GameState`] at one instant.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub width: u16,
    pub height: u16,
    pub nodes: &'a [Node],
    pub edges: &'a [Edge],
    pub passage_edges: &'a [EdgeId],
    /// Edges never carved into passages
    pub wall_edges: &'a [EdgeId],
    /// Passages in the order their walls come down
    pub wall_removal_order: &'a [EdgeId],
    pub walls_removed: usize,
    /// Nodes expanded by the latest search
    pub visited: &'a [NodeId],
    pub reach_times: &'a [Option<u32>],
    /// Solution path from goal to start, empty until solved
    pub path: &'a [NodeId],
    pub start: NodeId,
    pub goal: NodeId,
    pub player: (u16, u16),
    pub tick: u32,
    pub seconds: u32,
    pub frames: u32,
    pub constructed: bool,
    pub solved_by: Option<SolvedBy>,
    pub almost_solved: bool,
}

impl Snapshot<'_> {
    /// The latest search discovered `node` and the clock has reached that moment.
    pub fn is_revealed(&self, node: NodeId) -> bool {
        self.reach_times
            .get(node)
            .copied()
            .flatten()
            .is_some_and(|time| time <= self.tick)
    }

    /// Visited nodes already revealed by the clock.
    pub fn seen(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.visited
            .iter()
            .copied()
            .filter(|&node| self.is_revealed(node))
    }

    /// Walls still drawn: permanent walls plus passages not yet torn down.
    pub fn standing_walls(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.wall_edges
            .iter()
            .chain(&self.wall_removal_order[self.walls_removed..])
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::ScriptedWeights;

    /// 3x3 maze with all-equal weights: enumeration order decides the tree.
    ///
    /// ```text
    /// 0 - 1 - 2
    /// |   |   |
    /// 3   4   5
    /// |   |   |
    /// 6   7   8
    /// ```
    fn comb() -> GameState<ScriptedWeights> {
        GameState::new(3, 3, ScriptedWeights::new([0])).unwrap()
    }

    #[test]
    fn test_comb_layout() {
        let game = comb();
        let maze = game.maze();
        for (a, b) in [(0, 1), (1, 2), (0, 3), (1, 4), (2, 5), (3, 6), (4, 7), (5, 8)] {
            assert!(maze.passage_between(a, b).is_some(), "{a}-{b}");
        }
        assert!(maze.passage_between(3, 4).is_none());
        assert!(maze.passage_between(7, 8).is_none());
    }

    #[test]
    fn test_moves_follow_passages_only() {
        let mut game = comb();
        game.on_command(Command::Move(Direction::Right)).unwrap();
        game.on_command(Command::Move(Direction::Down)).unwrap();
        assert_eq!(game.player().position(), (1, 1));
        // (1,1) -> (2,1) is walled
        game.on_command(Command::Move(Direction::Right)).unwrap();
        assert_eq!(game.player().position(), (1, 1));
        assert_eq!(game.player().moves(), 2);
        // Out of bounds is ignored as well
        let mut corner = comb();
        corner.on_command(Command::Move(Direction::Up)).unwrap();
        assert_eq!(corner.player().position(), (0, 0));
        assert!(corner.player().log().is_empty());
    }

    #[test]
    fn test_player_solve_and_score() {
        let mut game = comb();
        assert!(!game.is_almost_solved());
        // One detour down the first column, then the shortest route
        for direction in [
            Direction::Down,
            Direction::Up,
            Direction::Right,
            Direction::Right,
            Direction::Down,
        ] {
            game.on_command(Command::Move(direction)).unwrap();
        }
        assert!(game.is_almost_solved());
        assert!(!game.is_solved());
        assert_eq!(game.score(), None);
        game.on_command(Command::Move(Direction::Down)).unwrap();
        assert!(game.is_solved());
        assert_eq!(game.solved_by(), Some(SolvedBy::Player));
        assert_eq!(
            game.score(),
            Some(Score {
                moves: 6,
                optimal_moves: 4,
                wrong_moves: 2
            })
        );
        assert_eq!(game.snapshot().path, &[8, 5, 2, 1, 0]);
    }

    #[test]
    fn test_leaving_goal_drops_route() {
        let mut game = comb();
        for direction in [Direction::Right, Direction::Right, Direction::Down, Direction::Down] {
            game.on_command(Command::Move(direction)).unwrap();
        }
        assert_eq!(game.solved_by(), Some(SolvedBy::Player));

        game.on_command(Command::Move(Direction::Up)).unwrap();
        assert!(!game.is_solved());
        assert_eq!(game.score(), None);
        assert!(game.snapshot().path.is_empty());

        // A search now owns the overlay
        game.on_command(Command::Search(Solver::Bfs)).unwrap();
        let goal_time = game.search().unwrap().1.goal_reach_time();
        (0..goal_time).for_each(|_| game.on_tick());
        assert_eq!(game.solved_by(), Some(SolvedBy::Solver(Solver::Bfs)));
        assert_eq!(game.snapshot().path, game.search().unwrap().1.path());

        // Coming back scores every move made
        game.on_command(Command::Move(Direction::Down)).unwrap();
        assert_eq!(
            game.score(),
            Some(Score {
                moves: 6,
                optimal_moves: 4,
                wrong_moves: 2
            })
        );
    }

    #[test]
    fn test_search_reveals_over_time() {
        let mut game = comb();
        game.on_command(Command::Search(Solver::Bfs)).unwrap();
        let goal_time = game.search().unwrap().1.goal_reach_time();
        assert!(goal_time > 0);
        assert_eq!(game.clock().tick(), 0);
        assert!(!game.is_solved());
        assert!(game.snapshot().path.is_empty());
        assert!(game.snapshot().is_revealed(0));

        (0..goal_time).for_each(|_| game.on_tick());
        assert!(game.is_solved());
        assert_eq!(game.solved_by(), Some(SolvedBy::Solver(Solver::Bfs)));
        assert_eq!(game.snapshot().path.first(), Some(&8));
        assert_eq!(game.snapshot().path.last(), Some(&0));
        assert_eq!(game.score(), None);
    }

    #[test]
    fn test_search_restarts_stopwatch_but_not_teardown() {
        let mut game = comb();
        (0..5).for_each(|_| game.on_tick());
        game.on_command(Command::Search(Solver::Dfs)).unwrap();
        assert_eq!(game.clock().tick(), 0);
        assert_eq!(game.clock().walls_removed(), 5);
        assert_eq!(game.snapshot().standing_walls().count(), 4 + 3);
    }

    #[test]
    fn test_reset_regenerates() {
        let mut game = GameState::seeded(12, 12, Some(4)).unwrap();
        let before = game.maze().passages().to_vec();
        game.on_command(Command::Move(Direction::Right)).unwrap();
        game.on_command(Command::Search(Solver::Bfs)).unwrap();
        (0..20).for_each(|_| game.on_tick());
        game.on_command(Command::Reset).unwrap();
        assert_ne!(game.maze().passages(), before.as_slice());
        assert_eq!(game.player().position(), (0, 0));
        assert!(game.player().log().is_empty());
        assert!(game.search().is_none());
        assert_eq!(game.clock().tick(), 0);
        assert_eq!(game.clock().walls_removed(), 0);
    }

    #[test]
    fn test_snapshot_walls() {
        let mut game = comb();
        let snapshot = game.snapshot();
        assert_eq!(snapshot.standing_walls().count(), 12);
        assert!(snapshot.seen().next().is_none());
        (0..8).for_each(|_| game.on_tick());
        let walls: Vec<_> = game.snapshot().standing_walls().collect();
        assert_eq!(walls, game.maze().walls());
    }
}
