use rand::Rng;

use super::grid::{Grid, NodeId};

/// Index of an edge in the maze's edge arena.
pub type EdgeId = usize;

/// Undirected adjacency between two grid-adjacent nodes.
///
/// Equality ignores the weight and the endpoint order: `(a, b) == (b, a)`.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    from: NodeId,
    to: NodeId,
    weight: u32,
    /// Position in the wall teardown order. Only set for passages.
    reach_time: Option<u32>,
}

impl Edge {
    pub fn new(from: NodeId, to: NodeId, weight: u32) -> Self {
        Edge {
            from,
            to,
            weight,
            reach_time: None,
        }
    }

    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.from, self.to)
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn reach_time(&self) -> Option<u32> {
        self.reach_time
    }

    pub(crate) fn set_reach_time(&mut self, time: u32) {
        self.reach_time = Some(time);
    }

    /// The endpoint opposite to `node`.
    pub fn other(&self, node: NodeId) -> NodeId {
        if self.from == node { self.to } else { self.from }
    }

    pub fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.connects(other.from, other.to)
    }
}

impl Eq for Edge {}

impl std::hash::Hash for Edge {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.from.min(self.to).hash(state);
        self.from.max(self.to).hash(state);
    }
}

/// Source of independent uniform edge weights.
pub trait WeightSource {
    /// Draws a weight in `[0, bound)`. `bound` is never 0.
    fn next_weight(&mut self, bound: u32) -> u32;
}

impl<R: Rng + ?Sized> WeightSource for R {
    fn next_weight(&mut self, bound: u32) -> u32 {
        self.random_range(0..bound)
    }
}

/// Replays a fixed list of weights, cycling when exhausted.
/// Values are reduced modulo the requested bound.
#[derive(Debug, Clone)]
pub struct ScriptedWeights {
    weights: Vec<u32>,
    cursor: usize,
}

impl ScriptedWeights {
    pub fn new(weights: impl Into<Vec<u32>>) -> Self {
        ScriptedWeights {
            weights: weights.into(),
            cursor: 0,
        }
    }
}

impl WeightSource for ScriptedWeights {
    fn next_weight(&mut self, bound: u32) -> u32 {
        if self.weights.is_empty() {
            return 0;
        }
        let weight = self.weights[self.cursor % self.weights.len()];
        self.cursor += 1;
        weight % bound
    }
}

/// Creates one edge per grid adjacency, each with a weight drawn from `weights` in
/// `[0, width * height)`, and attaches every edge to both of its endpoints.
///
/// Nodes are visited row-major; each contributes the edge to its right neighbor, then
/// the edge to its lower neighbor, so no adjacency is produced twice.
pub fn enumerate_edges<W: WeightSource + ?Sized>(grid: &mut Grid, weights: &mut W) -> Vec<Edge> {
    let (width, height) = (grid.width(), grid.height());
    let bound = width as u32 * height as u32;
    let mut edges = Vec::with_capacity(
        (width as usize - 1) * height as usize + width as usize * (height as usize - 1),
    );

    for y in 0..height {
        for x in 0..width {
            let neighbors = [
                (x + 1 < width).then(|| (x + 1, y)),
                (y + 1 < height).then(|| (x, y + 1)),
            ];
            for neighbor in neighbors.into_iter().flatten() {
                let from = grid[(x, y)].id();
                let to = grid[neighbor].id();
                let id = edges.len();
                edges.push(Edge::new(from, to, weights.next_weight(bound)));
                grid.nodes_mut()[from].attach(id);
                grid.nodes_mut()[to].attach(id);
            }
        }
    }
    edges
}
