use crate::error::MazeError;

use super::EdgeId;

/// Index of a node in the grid's flat arena, `y * width + x`.
pub type NodeId = usize;

/// A single maze cell.
///
/// Nodes compare by id only: coordinates are derived from the id and never change,
/// while the incident edge list is pruned once the maze is carved.
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    x: u16,
    y: u16,
    /// Incident edges in enumeration order: up, left, right, down.
    edges: Vec<EdgeId>,
}

impl Node {
    fn new(id: NodeId, x: u16, y: u16) -> Self {
        Node {
            id,
            x,
            y,
            edges: Vec::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn coord(&self) -> (u16, u16) {
        (self.x, self.y)
    }

    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub(crate) fn attach(&mut self, edge: EdgeId) {
        self.edges.push(edge);
    }

    pub(crate) fn retain_edges(&mut self, keep: impl FnMut(&EdgeId) -> bool) {
        self.edges.retain(keep);
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A `width x height` lattice of nodes, stored row-major.
#[derive(Debug, Clone)]
pub struct Grid {
    nodes: Vec<Node>,
    width: u16,
    height: u16,
}

impl Grid {
    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Number of nodes in the grid.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    /// Checks if the given coordinate is within the bounds of the grid.
    pub fn is_in_bounds(&self, coord: (u16, u16)) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    fn ravel_index(&self, x: u16, y: u16) -> NodeId {
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        y as usize * self.width as usize + x as usize
    }

    /// Node id at `coord`, or `None` when out of bounds.
    pub fn id_at(&self, coord: (u16, u16)) -> Option<NodeId> {
        self.is_in_bounds(coord)
            .then(|| self.ravel_index(coord.0, coord.1))
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }
}

impl std::ops::Index<(u16, u16)> for Grid {
    type Output = Node;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.nodes[self.ravel_index(index.0, index.1)]
    }
}

/// Allocates `width * height` nodes with ids assigned row-major.
///
/// Fails with [`MazeError::InvalidDimension`] when either dimension is 0.
pub fn build_grid(width: u16, height: u16) -> Result<Grid, MazeError> {
    if width < 1 || height < 1 {
        return Err(MazeError::InvalidDimension { width, height });
    }
    let nodes = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .enumerate()
        .map(|(id, (x, y))| Node::new(id, x, y))
        .collect();
    Ok(Grid {
        nodes,
        width,
        height,
    })
}
