use crate::{
    generators::union_find::Representatives,
    maze::{Edge, EdgeId},
};

/// Edges of a carved maze, split into passages and walls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    /// Tree edges in the order they were accepted.
    pub passages: Vec<EdgeId>,
    /// Every edge left out of the tree.
    pub walls: Vec<EdgeId>,
}

/// Randomized Kruskal over pre-weighted edges.
///
/// Edges are visited by ascending weight, ties kept in enumeration order. An edge joins
/// the tree when its endpoints have different representatives, after which the second
/// endpoint's root is merged under the first endpoint's root.
pub fn build_maze(edges: &[Edge], reps: &mut Representatives) -> SpanningTree {
    let mut worklist: Vec<EdgeId> = (0..edges.len()).collect();
    // Stable sort: equal weights stay in enumeration order
    worklist.sort_by_key(|&id| edges[id].weight());

    let mut passages = Vec::with_capacity(reps.len().saturating_sub(1));
    let mut walls = Vec::new();
    for id in worklist {
        let (from, to) = edges[id].endpoints();
        let (root_from, root_to) = (reps.find(from), reps.find(to));
        if root_from == root_to {
            // Would close a cycle
            walls.push(id);
        } else {
            passages.push(id);
            reps.union(root_from, root_to);
        }
    }

    tracing::debug!(
        "[maze] Kruskal kept {} passages and {} walls out of {} edges",
        passages.len(),
        walls.len(),
        edges.len()
    );
    SpanningTree { passages, walls }
}
