use crate::utils::{assert_valid_delta, line_neighbors};
use crate::{heuristic, NodeID, NodeList, Path, Position, SearchConfig, SearchNode, SurfaceProfile};

use hashbrown::HashSet;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// An entry of the frontier.
///
/// The BinaryHeap is a max-heap, so the ordering is reversed: the entry with the lowest `f` is the
/// greatest. Entries with the same `f` leave in the order they were pushed.
#[derive(Clone, Copy, Debug)]
struct FrontierEntry {
    f: f64,
    sequence: u64,
    id: NodeID,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, rhs: &Self) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}
impl Eq for FrontierEntry {}
impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl Ord for FrontierEntry {
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.f
            .total_cmp(&self.f)
            .then_with(|| rhs.sequence.cmp(&self.sequence))
    }
}

/// Searches the Line using the [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm),
/// guided by the given `heuristic`.
///
/// Every Node has the two neighbors `position - config.delta` and `position + config.delta`,
/// which are generated in that order. Every step has a Cost of `1`.
///
/// Positions are discovered at most once: a neighbor that is already in the frontier or was
/// already expanded is skipped, even if the new way to reach it would be cheaper. Entries of the
/// frontier with the same `f` are expanded in the order they were discovered.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use surface_pathfinding::{a_star_search, SearchConfig};
/// let target = 12;
/// let path = a_star_search(0, target, &SearchConfig::with_delta(4), |pos| {
///     (pos - target).abs() as f64 / 4.0
/// });
///
/// assert_eq!(path.unwrap(), vec![0, 4, 8, 12]);
/// ```
///
/// If the target is never reached within the `expansion_limit`, None is returned:
/// ```
/// # use surface_pathfinding::{a_star_search, SearchConfig};
/// let config = SearchConfig {
///     delta: 4,
///     expansion_limit: Some(100),
/// };
/// let path = a_star_search(0, 13, &config, |pos| (pos - 13).abs() as f64);
///
/// assert!(path.is_none());
/// ```
///
/// ## Arguments
/// - `start` - the starting Position
/// - `target` - the Position that this function is supposed to search for
/// - `config` - the step size and the optional expansion limit. See [`SearchConfig`]
/// - `heuristic` - the Heuristic Function of the A* Algorithm. Takes a Position and estimates the
///     remaining Cost to `target`
///
/// ## Returns
/// the Path, if one was found, or None if the frontier ran empty or the expansion limit was hit.
/// The first Position in the Path is always the `start` and the last is the `target`.
///
/// ## Panics
/// if `config.delta` is not positive.
pub fn a_star_search(
    start: Position,
    target: Position,
    config: &SearchConfig,
    mut heuristic: impl FnMut(Position) -> f64,
) -> Option<Path<Position>> {
    assert_valid_delta(config.delta);

    timed!("a_star_search", {
        let mut nodes = NodeList::new();
        let mut next = BinaryHeap::new();
        let mut open = HashSet::new();
        let mut closed = HashSet::new();
        let mut sequence = 0u64;
        let mut expansions = 0usize;

        let start_node = SearchNode::new(start, None, 0, heuristic(start));
        let start_id = nodes.add_node(start_node);
        next.push(FrontierEntry {
            f: start_node.f(),
            sequence,
            id: start_id,
        });
        open.insert(start);

        let mut result = None;

        while let Some(FrontierEntry { id: current_id, .. }) = next.pop() {
            let current = nodes[current_id];
            open.remove(&current.position());

            if current.position() == target {
                result = Some(nodes.path_to(current_id));
                break;
            }
            if config.limit_reached(expansions) {
                debug!(
                    "a_star_search: giving up after {} expansions from {} to {}",
                    expansions,
                    start,
                    target
                );
                break;
            }

            expansions += 1;
            closed.insert(current.position());
            trace!(
                "expanding {} (g = {}, h = {}, f = {})",
                current.position(),
                current.g(),
                current.h(),
                current.f()
            );

            for neighbor in line_neighbors(current.position(), config.delta)
                .into_iter()
                .flatten()
            {
                if closed.contains(&neighbor) || open.contains(&neighbor) {
                    continue;
                }

                let node = SearchNode::new(
                    neighbor,
                    Some(current_id),
                    current.g() + 1,
                    heuristic(neighbor),
                );
                let id = nodes.add_node(node);

                sequence += 1;
                next.push(FrontierEntry {
                    f: node.f(),
                    sequence,
                    id,
                });
                open.insert(neighbor);
            }
        }

        debug!(
            "a_star_search from {} to {}: {} after {} expansions, {} nodes created",
            start,
            target,
            if result.is_some() { "found" } else { "not found" },
            expansions,
            nodes.len()
        );
        result
    })
}

/// Searches for a Path from `start` to `target`, guided by a [`SurfaceProfile`].
///
/// This runs [`a_star_search`] with the surface [`heuristic`]. If no `profile` is given,
/// [`SurfaceProfile::reference`] is used.
///
/// ## Examples
/// ```
/// use surface_pathfinding::search;
///
/// assert_eq!(search(0, 3, 1, None).unwrap(), vec![0, 1, 2, 3]);
/// assert_eq!(search(0, 5, 1, None).unwrap(), vec![0, 1, 2, 3, 4, 5]);
/// ```
///
/// ## Panics
/// if `delta` is not positive.
pub fn search(
    start: Position,
    target: Position,
    delta: Position,
    profile: Option<&SurfaceProfile>,
) -> Option<Path<Position>> {
    search_with_config(start, target, profile, &SearchConfig::with_delta(delta))
}

/// Same as [`search`], with full control over the [`SearchConfig`].
///
/// ## Panics
/// if `config.delta` is not positive.
pub fn search_with_config(
    start: Position,
    target: Position,
    profile: Option<&SurfaceProfile>,
    config: &SearchConfig,
) -> Option<Path<Position>> {
    let profile = profile.map_or_else(|| Cow::Owned(SurfaceProfile::reference()), Cow::Borrowed);

    a_star_search(start, target, config, |pos| heuristic(pos, target, &profile))
}
