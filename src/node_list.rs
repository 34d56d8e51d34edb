use crate::{Cost, Path, Position, SearchNode};

/// The Type used to reference a Node within a [`NodeList`]
pub type NodeID = usize;

/// The arena holding every [`SearchNode`] created during one search run.
///
/// Nodes reference their parent by [`NodeID`], so the ancestry chains form a forest rooted at
/// the start Node. Nodes are never removed; the whole list is dropped when the run returns.
#[derive(Clone, Debug, Default)]
pub struct NodeList {
    nodes: slab::Slab<SearchNode>,
}

impl NodeList {
    /// Creates an empty NodeList
    pub fn new() -> Self {
        Self {
            nodes: slab::Slab::new(),
        }
    }

    /// Creates an empty NodeList with room for `capacity` Nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: slab::Slab::with_capacity(capacity),
        }
    }

    /// The number of Nodes created so far
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` if no Node was created yet
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Stores `node` and returns the ID to reference it with
    #[track_caller]
    pub fn add_node(&mut self, node: SearchNode) -> NodeID {
        if let Some(parent) = node.parent() {
            assert!(
                self.nodes.contains(parent),
                "parent {} of Node at {} is not in the NodeList",
                parent,
                node.position()
            );
        }
        self.nodes.insert(node)
    }

    /// Follows the parent links from `id` back to the root and returns the Positions in the order
    /// root → `id`. The Cost of the Path is the `g` of the Node at `id`.
    ///
    /// ## Examples
    /// ```
    /// # use surface_pathfinding::{NodeList, SearchNode};
    /// let mut nodes = NodeList::new();
    /// let start = nodes.add_node(SearchNode::new(0, None, 0, 0.0));
    /// let next = nodes.add_node(SearchNode::new(2, Some(start), 1, 0.0));
    ///
    /// assert_eq!(nodes.path_to(next), vec![0, 2]);
    /// ```
    #[track_caller]
    pub fn path_to(&self, id: NodeID) -> Path<Position> {
        let cost: Cost = self[id].g();

        let steps = {
            let mut steps = vec![];
            let mut current = Some(id);

            while let Some(node_id) = current {
                let node = &self[node_id];
                steps.push(node.position());
                current = node.parent();
            }
            steps.reverse();
            steps
        };

        Path::new(steps, cost)
    }
}

use std::ops::Index;
impl Index<NodeID> for NodeList {
    type Output = SearchNode;
    #[track_caller]
    fn index(&self, index: NodeID) -> &SearchNode {
        &self.nodes[index]
    }
}
