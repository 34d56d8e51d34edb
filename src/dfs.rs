use crate::utils::{assert_valid_delta, line_neighbors};
use crate::{NodeList, Path, Position, SearchNode};

use hashbrown::HashSet;

/// Searches the Line depth-first, without any heuristic.
///
/// Nodes deeper than `max_depth` steps from the start are still checked against the `target`,
/// but never expanded, so the search always terminates.
///
/// Neighbors are pushed onto the stack rightwards first, which means the leftward neighbor is
/// explored first. A Position is pushed at most once.
///
/// ## Examples
/// ```
/// # use surface_pathfinding::depth_first_search;
/// let path = depth_first_search(0, 3, 1, 10);
///
/// assert_eq!(path.unwrap(), vec![0, 1, 2, 3]);
///
/// assert_eq!(depth_first_search(0, 3, 1, 2), None);
/// ```
///
/// ## Panics
/// if `delta` is not positive.
pub fn depth_first_search(
    start: Position,
    target: Position,
    delta: Position,
    max_depth: usize,
) -> Option<Path<Position>> {
    assert_valid_delta(delta);

    timed!("depth_first_search", {
        let mut nodes = NodeList::new();
        let mut visited = HashSet::new();

        let start_id = nodes.add_node(SearchNode::new(start, None, 0, 0.0));
        let mut stack = vec![start_id];
        visited.insert(start);

        let mut result = None;

        while let Some(current_id) = stack.pop() {
            let current = nodes[current_id];
            if current.position() == target {
                result = Some(nodes.path_to(current_id));
                break;
            }

            let depth = current.g();
            if depth >= max_depth {
                continue;
            }
            trace!("expanding {} at depth {}", current.position(), depth);

            let [left, right] = line_neighbors(current.position(), delta);
            for neighbor in [right, left].into_iter().flatten() {
                if visited.insert(neighbor) {
                    let id = nodes.add_node(SearchNode::new(neighbor, Some(current_id), depth + 1, 0.0));
                    stack.push(id);
                }
            }
        }

        debug!(
            "depth_first_search from {} to {}: {}, {} nodes created",
            start,
            target,
            if result.is_some() { "found" } else { "not found" },
            nodes.len()
        );
        result
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_scenario() {
        let path = depth_first_search(0, 3, 1, 10).unwrap();

        assert_eq!(path, vec![0, 1, 2, 3]);
        assert_eq!(path.cost(), 3);
    }

    #[test]
    fn explores_left_first() {
        // the left branch reaches -4 before the right branch is ever touched
        let path = depth_first_search(0, -4, 1, 10).unwrap();
        assert_eq!(path, vec![0, -1, -2, -3, -4]);
    }

    #[test]
    fn target_at_max_depth() {
        assert_eq!(depth_first_search(0, 10, 1, 10).map(|p| p.len()), Some(11));
        assert_eq!(depth_first_search(0, 11, 1, 10), None);
        assert_eq!(depth_first_search(0, -11, 1, 10), None);
    }

    #[test]
    fn unreachable_terminates() {
        assert_eq!(depth_first_search(0, 5, 2, 100), None);
    }

    #[test]
    fn larger_delta() {
        let path = depth_first_search(1, 10, 3, 5).unwrap();
        assert_eq!(path, vec![1, 4, 7, 10]);
    }

    #[test]
    fn start_is_target() {
        assert_eq!(depth_first_search(-7, -7, 1, 0).unwrap(), vec![-7]);
    }
}
