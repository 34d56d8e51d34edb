use crate::{search_with_config, Path, Position, SearchConfig, SurfaceProfile};

use hashbrown::HashMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Searches for Paths from `start` to every Position in `targets`.
///
/// Each target is an independent [`search_with_config`] run with its own frontier. With the
/// `parallel` feature (enabled by default) the runs are spread across the rayon thread pool.
///
/// ## Examples
/// ```
/// # use surface_pathfinding::{search_all, SearchConfig};
/// let config = SearchConfig {
///     delta: 1,
///     expansion_limit: Some(1000),
/// };
/// let paths = search_all(0, &[3, 5, -2], None, &config);
///
/// assert_eq!(paths[&3], vec![0, 1, 2, 3]);
/// assert_eq!(paths[&-2], vec![0, -1, -2]);
/// assert_eq!(paths.len(), 3);
/// ```
///
/// ## Returns
/// a HashMap from target to Path for every target that was reached. Targets that were not
/// reached are missing from the map.
///
/// ## Panics
/// if `config.delta` is not positive.
pub fn search_all(
    start: Position,
    targets: &[Position],
    profile: Option<&SurfaceProfile>,
    config: &SearchConfig,
) -> HashMap<Position, Path<Position>> {
    timed!("search_all", {
        #[cfg(feature = "parallel")]
        let iter = targets.par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = targets.iter();

        iter.filter_map(|&target| {
            search_with_config(start, target, profile, config).map(|path| (target, path))
        })
        .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_as_individual_searches() {
        let profile: SurfaceProfile = (-10i64..10).map(|pos| (pos, (10 - pos).abs() as f64 / 2.0)).collect();
        let config = SearchConfig::bounded(10_000);
        let targets: Vec<Position> = (-8..=8).step_by(2).collect();

        let paths = search_all(0, &targets, Some(&profile), &config);

        assert_eq!(paths.len(), targets.len());
        for target in targets {
            let single = search_with_config(0, target, Some(&profile), &config);
            assert_eq!(paths.get(&target), single.as_ref());
        }
    }

    #[test]
    fn unreachable_targets_are_missing() {
        let config = SearchConfig {
            delta: 3,
            expansion_limit: Some(200),
        };

        let paths = search_all(0, &[6, 7, -3], None, &config);

        assert!(paths.contains_key(&6));
        assert!(paths.contains_key(&-3));
        assert!(!paths.contains_key(&7));
    }

    #[test]
    fn empty_targets() {
        assert!(search_all(0, &[], None, &SearchConfig::default()).is_empty());
    }
}
