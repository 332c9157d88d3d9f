mod frontier;
mod traversal;

pub use frontier::{Frontier, Queue, Stack};
pub use traversal::{SearchState, Solution, Traversal};

use crate::{
    error::MazeError,
    maze::{Maze, NodeId},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    Dfs,
    Bfs,
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
        }
    }
}

/// Runs a fresh search from `start` to `goal` to completion.
pub fn solve(maze: &Maze, start: NodeId, goal: NodeId, solver: Solver) -> Result<Solution, MazeError> {
    let solution = match solver {
        Solver::Dfs => Traversal::new(maze, start, goal, Stack::default()).run()?,
        Solver::Bfs => Traversal::new(maze, start, goal, Queue::default()).run()?,
    };
    tracing::info!(
        "[solver] {} reached node {} from node {} after expanding {} nodes, path length {}",
        solver,
        goal,
        start,
        solution.visited().len(),
        solution.path().len()
    );
    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::get_rng;

    #[test]
    fn test_solve_dispatches_to_frontier() {
        let maze = Maze::generate(20, 20, &mut get_rng(Some(21))).unwrap();
        let (start, goal) = (maze.start(), maze.goal());
        let dfs = solve(&maze, start, goal, Solver::Dfs).unwrap();
        let bfs = solve(&maze, start, goal, Solver::Bfs).unwrap();
        let by_hand = Traversal::new(&maze, start, goal, Stack::default())
            .run()
            .unwrap();
        assert_eq!(dfs, by_hand);
        assert_eq!(dfs.path(), bfs.path());
    }

    #[test]
    fn test_repeated_searches_are_independent() {
        let maze = Maze::generate(10, 10, &mut get_rng(Some(2))).unwrap();
        let first = solve(&maze, maze.start(), maze.goal(), Solver::Bfs).unwrap();
        let _ = solve(&maze, maze.start(), maze.goal(), Solver::Dfs).unwrap();
        let again = solve(&maze, maze.start(), maze.goal(), Solver::Bfs).unwrap();
        assert_eq!(first, again);
    }
}
