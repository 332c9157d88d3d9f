mod edge;
mod grid;

pub use edge::{Edge, EdgeId, ScriptedWeights, WeightSource, enumerate_edges};
pub use grid::{Grid, Node, NodeId, build_grid};

use crate::{
    error::MazeError,
    generators::{Representatives, build_maze},
};

/// A perfect maze: a grid whose passages form a spanning tree.
///
/// After construction every node's edge list holds passages only, so anything walking
/// the maze through [`Maze::neighbors`] never crosses a wall.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid,
    edges: Vec<Edge>,
    /// Spanning tree edges in construction order, which is also the wall teardown order.
    passages: Vec<EdgeId>,
    walls: Vec<EdgeId>,
}

impl Maze {
    /// Builds the grid, weights every adjacency from `weights`, and carves the maze with
    /// Kruskal's algorithm.
    pub fn generate<W: WeightSource + ?Sized>(
        width: u16,
        height: u16,
        weights: &mut W,
    ) -> Result<Self, MazeError> {
        let mut grid = build_grid(width, height)?;
        let mut edges = enumerate_edges(&mut grid, weights);

        let mut reps = Representatives::make_set(grid.len());
        let tree = build_maze(&edges, &mut reps);

        for (order, &id) in tree.passages.iter().enumerate() {
            edges[id].set_reach_time(order as u32);
        }
        let is_passage = edges
            .iter()
            .map(|edge| edge.reach_time().is_some())
            .collect::<Vec<_>>();
        grid.nodes_mut()
            .iter_mut()
            .for_each(|node| node.retain_edges(|&id| is_passage[id]));

        tracing::info!(
            "[maze] Generated {}x{} maze with {} passages and {} walls",
            width,
            height,
            tree.passages.len(),
            tree.walls.len()
        );

        Ok(Maze {
            grid,
            edges,
            passages: tree.passages,
            walls: tree.walls,
        })
    }

    pub fn width(&self) -> u16 {
        self.grid.width()
    }

    pub fn height(&self) -> u16 {
        self.grid.height()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn nodes(&self) -> &[Node] {
        self.grid.nodes()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        self.grid.node(id)
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id]
    }

    /// Spanning tree edges in construction order.
    pub fn passages(&self) -> &[EdgeId] {
        &self.passages
    }

    /// Edges that are not part of the spanning tree.
    pub fn walls(&self) -> &[EdgeId] {
        &self.walls
    }

    /// Top-left node.
    pub fn start(&self) -> NodeId {
        0
    }

    /// Bottom-right node.
    pub fn goal(&self) -> NodeId {
        self.grid.len() - 1
    }

    /// Nodes reachable from `node` through a single passage, in adjacency order.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.grid
            .node(node)
            .edges()
            .iter()
            .map(move |&id| self.edges[id].other(node))
    }

    /// The passage joining `a` and `b`, if there is no wall between them.
    pub fn passage_between(&self, a: NodeId, b: NodeId) -> Option<EdgeId> {
        self.grid
            .node(a)
            .edges()
            .iter()
            .copied()
            .find(|&id| self.edges[id].connects(a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::get_rng;

    /// Flood fill over passages only.
    fn reachable_from(maze: &Maze, start: NodeId) -> usize {
        let mut seen = vec![false; maze.nodes().len()];
        let mut stack = vec![start];
        seen[start] = true;
        let mut count = 1;
        while let Some(node) = stack.pop() {
            for next in maze.neighbors(node) {
                if !seen[next] {
                    seen[next] = true;
                    count += 1;
                    stack.push(next);
                }
            }
        }
        count
    }

    #[test]
    fn test_generated_maze_is_spanning_tree() {
        for (width, height, seed) in [(1, 5, 1), (5, 1, 2), (3, 3, 3), (12, 7, 4), (30, 30, 5)] {
            let maze = Maze::generate(width, height, &mut get_rng(Some(seed))).unwrap();
            let nodes = width as usize * height as usize;
            assert_eq!(maze.passages().len(), nodes - 1);
            assert_eq!(reachable_from(&maze, maze.start()), nodes);
            assert_eq!(reachable_from(&maze, maze.goal()), nodes);
        }
    }

    #[test]
    fn test_walls_are_pruned_from_adjacency() {
        let maze = Maze::generate(8, 8, &mut get_rng(Some(11))).unwrap();
        for &wall in maze.walls() {
            let (a, b) = maze.edge(wall).endpoints();
            assert!(!maze.node(a).edges().contains(&wall));
            assert!(!maze.node(b).edges().contains(&wall));
            assert_eq!(maze.passage_between(a, b), None);
            assert_eq!(maze.edge(wall).reach_time(), None);
        }
        let adjacency: usize = maze.nodes().iter().map(|n| n.edges().len()).sum();
        assert_eq!(adjacency, 2 * maze.passages().len());
    }

    #[test]
    fn test_passages_are_stamped_in_construction_order() {
        let maze = Maze::generate(6, 4, &mut get_rng(Some(5))).unwrap();
        for (order, &id) in maze.passages().iter().enumerate() {
            assert_eq!(maze.edge(id).reach_time(), Some(order as u32));
            let (a, b) = maze.edge(id).endpoints();
            assert_eq!(maze.passage_between(b, a), Some(id));
        }
    }

    #[test]
    fn test_same_weights_give_same_maze() {
        let first = Maze::generate(9, 9, &mut get_rng(Some(99))).unwrap();
        let second = Maze::generate(9, 9, &mut get_rng(Some(99))).unwrap();
        assert_eq!(first.passages(), second.passages());
        assert_eq!(first.walls(), second.walls());
    }

    #[test]
    fn test_single_cell_maze() {
        let maze = Maze::generate(1, 1, &mut get_rng(Some(0))).unwrap();
        assert!(maze.edges().is_empty());
        assert!(maze.passages().is_empty());
        assert!(maze.walls().is_empty());
        assert_eq!(maze.start(), maze.goal());
    }

    #[test]
    fn test_invalid_dimension() {
        assert_eq!(
            Maze::generate(0, 3, &mut get_rng(Some(0))).unwrap_err(),
            MazeError::InvalidDimension {
                width: 0,
                height: 3
            }
        );
    }
}
