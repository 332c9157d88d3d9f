use crate::{
    error::MazeError,
    maze::{Maze, NodeId},
    solvers::frontier::Frontier,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// The frontier still holds nodes to explore.
    Running,
    /// The goal was popped and the path reconstructed.
    Found,
    /// The frontier ran dry before reaching the goal.
    Exhausted,
}

/// One search session from `start` to `goal` over a maze's passages.
///
/// Depth-first and breadth-first search share this loop and differ only in the
/// [`Frontier`] they are given. All state is owned here and dropped with the session,
/// so a new search never sees a previous one's marks.
pub struct Traversal<'m, F> {
    maze: &'m Maze,
    start: NodeId,
    goal: NodeId,
    frontier: F,
    visited: Vec<bool>,
    /// Expanded nodes, in expansion order.
    visit_order: Vec<NodeId>,
    /// Predecessor through which each node was first reached. The start is its own parent.
    parents: Vec<Option<NodeId>>,
    /// Discovery step of each node.
    reach_times: Vec<Option<u32>>,
    /// Frontier pops so far, duplicates included.
    steps: u32,
    /// Goal back to start, filled once the goal is found.
    path: Vec<NodeId>,
    state: SearchState,
}

impl<'m, F: Frontier<NodeId>> Traversal<'m, F> {
    pub fn new(maze: &'m Maze, start: NodeId, goal: NodeId, mut frontier: F) -> Self {
        let size = maze.nodes().len();
        let mut parents = vec![None; size];
        let mut reach_times = vec![None; size];
        frontier.push(start);
        parents[start] = Some(start);
        reach_times[start] = Some(0);
        Traversal {
            maze,
            start,
            goal,
            frontier,
            visited: vec![false; size],
            visit_order: Vec::new(),
            parents,
            reach_times,
            steps: 0,
            path: Vec::new(),
            state: SearchState::Running,
        }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Pops one node from the frontier and processes it.
    /// Does nothing once the search has left [`SearchState::Running`].
    pub fn step(&mut self) -> SearchState {
        if self.state != SearchState::Running {
            return self.state;
        }

        let Some(current) = self.frontier.pop() else {
            self.state = SearchState::Exhausted;
            return self.state;
        };

        if self.visited[current] {
            // Duplicate frontier entry
        } else if current == self.goal {
            self.path = self.reconstruct_path();
            self.state = SearchState::Found;
            return self.state;
        } else {
            self.visited[current] = true;
            self.visit_order.push(current);
            for next in self.maze.neighbors(current) {
                if !self.visited[next] {
                    self.frontier.push(next);
                    self.parents[next] = Some(current);
                    self.reach_times[next] = Some(self.steps);
                }
            }
        }
        self.steps += 1;
        self.state
    }

    /// Walks parent pointers from the goal until reaching the node that is its own parent.
    fn reconstruct_path(&self) -> Vec<NodeId> {
        let mut path = vec![self.goal];
        let mut current = self.goal;
        while let Some(parent) = self.parents[current] {
            if parent == current {
                break;
            }
            path.push(parent);
            current = parent;
        }
        path
    }

    /// Steps until the goal is found or the frontier is exhausted.
    ///
    /// Exhaustion means the passages do not connect `start` and `goal`, which a correctly
    /// carved maze rules out; it is reported as [`MazeError::Disconnected`].
    pub fn run(mut self) -> Result<Solution, MazeError> {
        while self.step() == SearchState::Running {}

        match self.state {
            SearchState::Found => Ok(Solution {
                goal: self.goal,
                visit_order: self.visit_order,
                reach_times: self.reach_times,
                path: self.path,
                steps: self.steps,
            }),
            _ => {
                tracing::error!(
                    "[solver] Frontier exhausted after {} steps without reaching node {} from node {}",
                    self.steps,
                    self.goal,
                    self.start
                );
                Err(MazeError::Disconnected {
                    start: self.start,
                    goal: self.goal,
                })
            }
        }
    }
}

/// Result of a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    goal: NodeId,
    visit_order: Vec<NodeId>,
    reach_times: Vec<Option<u32>>,
    path: Vec<NodeId>,
    steps: u32,
}

impl Solution {
    /// Nodes expanded by the search, in order.
    pub fn visited(&self) -> &[NodeId] {
        &self.visit_order
    }

    /// Discovery step per node id, `None` for nodes never discovered.
    pub fn reach_times(&self) -> &[Option<u32>] {
        &self.reach_times
    }

    pub fn reach_time(&self, node: NodeId) -> Option<u32> {
        self.reach_times.get(node).copied().flatten()
    }

    /// Step at which the goal was discovered.
    pub fn goal_reach_time(&self) -> u32 {
        self.reach_time(self.goal).unwrap_or(0)
    }

    /// Path from the goal back to the start, both included.
    pub fn path(&self) -> &[NodeId] {
        &self.path
    }

    /// Frontier pops performed, duplicates included.
    pub fn steps(&self) -> u32 {
        self.steps
    }
}
