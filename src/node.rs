use crate::{Cost, NodeID, Position};

use std::hash::{Hash, Hasher};

/// One explored Position of a search run.
///
/// Nodes are immutable once created. `f` is computed as `g + h` in [`SearchNode::new`] and never
/// changes afterwards.
///
/// Two Nodes are equal if and only if they share the same Position, regardless of their costs or
/// their ancestry. The order in which Nodes leave the frontier is a separate concern and lives
/// in the frontier itself.
#[derive(Clone, Copy, Debug)]
pub struct SearchNode {
    position: Position,
    parent: Option<NodeID>,
    g: Cost,
    h: f64,
    f: f64,
}

impl SearchNode {
    /// Creates a new Node. `parent` is `None` for the start of a search.
    ///
    /// ## Examples
    /// ```
    /// # use surface_pathfinding::SearchNode;
    /// let node = SearchNode::new(4, None, 2, 0.5);
    ///
    /// assert_eq!(node.f(), 2.5);
    /// ```
    pub fn new(position: Position, parent: Option<NodeID>, g: Cost, h: f64) -> SearchNode {
        SearchNode {
            position,
            parent,
            g,
            h,
            f: g as f64 + h,
        }
    }

    /// The Position of this Node
    pub fn position(&self) -> Position {
        self.position
    }

    /// The Node this one was generated from
    pub fn parent(&self) -> Option<NodeID> {
        self.parent
    }

    /// The accumulated Cost from the start
    pub fn g(&self) -> Cost {
        self.g
    }

    /// The heuristic estimate to the target
    pub fn h(&self) -> f64 {
        self.h
    }

    /// The total evaluation score `g + h`
    pub fn f(&self) -> f64 {
        self.f
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &SearchNode) -> bool {
        self.position == other.position
    }
}
impl Eq for SearchNode {}

impl Hash for SearchNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position.hash(state);
    }
}
