use crate::maze::NodeId;

/// Disjoint sets over node ids, used only while building the spanning tree.
///
/// Union is directional rather than by rank: `union(r1, r2)` always hangs `r2` under
/// `r1`. Kruskal's output for a fixed edge order depends on this.
#[derive(Debug, Clone)]
pub struct Representatives {
    parent: Vec<NodeId>,
}

impl Representatives {
    /// Every node starts as its own representative.
    pub fn make_set(size: usize) -> Self {
        Representatives {
            parent: (0..size).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Follows the representative chain until a node maps to itself.
    pub fn find(&self, mut node: NodeId) -> NodeId {
        while self.parent[node] != node {
            node = self.parent[node];
        }
        node
    }

    /// Sets `root2`'s representative to `root1`.
    pub fn union(&mut self, root1: NodeId, root2: NodeId) {
        self.parent[root2] = root1;
    }
}
