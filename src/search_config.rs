use crate::Position;

/// Options for configuring a search
///
/// Default options:
/// ```
/// # use surface_pathfinding::SearchConfig;
/// assert_eq!(
///     SearchConfig {
///         delta: 1,
///         expansion_limit: None,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SearchConfig {
    /// The distance covered by a single step (defaults to `1`).
    ///
    /// Every expansion generates the two neighbors `position - delta` and `position + delta`.
    /// Has to be positive.
    pub delta: Position,
    /// `None` (default): the search runs until the target is found or the frontier is empty.
    ///
    /// `Some(limit)`: the search gives up and reports that no Path exists after `limit` Nodes
    /// have been expanded.
    ///
    /// The line is unbounded, so a target that is not a multiple of `delta` away from the start
    /// makes an unlimited search run forever.
    pub expansion_limit: Option<usize>,
}

impl SearchConfig {
    /// Default options with a custom `delta`
    ///
    /// ```
    /// # use surface_pathfinding::SearchConfig;
    /// let config = SearchConfig::with_delta(3);
    ///
    /// assert_eq!(config.delta, 3);
    /// assert_eq!(config.expansion_limit, None);
    /// ```
    pub fn with_delta(delta: Position) -> SearchConfig {
        SearchConfig {
            delta,
            ..Default::default()
        }
    }

    /// Default options with an expansion limit
    ///
    /// ```
    /// # use surface_pathfinding::SearchConfig;
    /// let config = SearchConfig::bounded(500);
    ///
    /// assert_eq!(config.delta, 1);
    /// assert_eq!(config.expansion_limit, Some(500));
    /// ```
    pub fn bounded(limit: usize) -> SearchConfig {
        SearchConfig {
            expansion_limit: Some(limit),
            ..Default::default()
        }
    }

    pub(crate) fn limit_reached(&self, expansions: usize) -> bool {
        self.expansion_limit.map_or(false, |limit| expansions >= limit)
    }
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig {
            delta: 1,
            expansion_limit: None,
        }
    }
}
