use crate::Position;

use hashbrown::HashMap;

/// The fit assumed for Positions that are missing from a [`SurfaceProfile`].
///
/// A fit of `10` leaves the direct distance to the target unchanged.
pub const DEFAULT_FIT: f64 = 10.0;

/// A lookup table from Positions to how well the surface at that Position fits the target.
///
/// Lower values mean a better fit. Positions that are not in the table have a fit of
/// [`DEFAULT_FIT`].
///
/// ## Examples
/// ```
/// # use surface_pathfinding::SurfaceProfile;
/// let mut profile = SurfaceProfile::new();
/// profile.insert(3, 1.0);
///
/// assert_eq!(profile.fit(3), 1.0);
/// assert_eq!(profile.fit(4), 10.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SurfaceProfile {
    values: HashMap<Position, f64>,
}

impl SurfaceProfile {
    /// Creates an empty profile. Every Position has the [`DEFAULT_FIT`].
    pub fn new() -> SurfaceProfile {
        SurfaceProfile {
            values: HashMap::new(),
        }
    }

    /// The profile used when a search is not given one.
    ///
    /// Values:
    /// ```
    /// # use surface_pathfinding::SurfaceProfile;
    /// let profile = SurfaceProfile::reference();
    ///
    /// let fits: Vec<f64> = (0..6).map(|pos| profile.fit(pos)).collect();
    /// assert_eq!(fits, vec![10.0, 7.0, 3.0, 1.0, 4.0, 8.0]);
    /// assert_eq!(profile.len(), 6);
    /// ```
    pub fn reference() -> SurfaceProfile {
        [(0, 10.0), (1, 7.0), (2, 3.0), (3, 1.0), (4, 4.0), (5, 8.0)]
            .into_iter()
            .collect()
    }

    /// Sets the fit at `position`, returning the previous entry, if any.
    ///
    /// ## Panics
    /// if `fit` is negative, NaN or infinite.
    #[track_caller]
    pub fn insert(&mut self, position: Position, fit: f64) -> Option<f64> {
        assert!(
            fit.is_finite() && fit >= 0.0,
            "surface fit has to be finite and non-negative, got {} at {}",
            fit,
            position
        );
        self.values.insert(position, fit)
    }

    /// The fit at `position`, or [`DEFAULT_FIT`] if there is no entry for it
    pub fn fit(&self, position: Position) -> f64 {
        self.values.get(&position).copied().unwrap_or(DEFAULT_FIT)
    }

    /// The entry at `position`, if there is one
    pub fn get(&self, position: Position) -> Option<f64> {
        self.values.get(&position).copied()
    }

    /// The number of entries in the profile
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` if the profile has no entries
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// An Iterator over all entries, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (Position, f64)> + '_ {
        self.values.iter().map(|(&pos, &fit)| (pos, fit))
    }
}

impl FromIterator<(Position, f64)> for SurfaceProfile {
    #[track_caller]
    fn from_iter<I: IntoIterator<Item = (Position, f64)>>(iter: I) -> Self {
        let mut profile = SurfaceProfile::new();
        profile.extend(iter);
        profile
    }
}

impl Extend<(Position, f64)> for SurfaceProfile {
    #[track_caller]
    fn extend<I: IntoIterator<Item = (Position, f64)>>(&mut self, iter: I) {
        for (position, fit) in iter {
            self.insert(position, fit);
        }
    }
}

/// Estimates the remaining distance from `position` to `target`.
///
/// The direct distance `|position - target|` is scaled by `fit / 10`, where `fit` is the value of
/// `profile` at `position`. A well-fitting surface (low fit) therefore makes a Position look
/// closer to the target than it is, while a missing entry leaves the distance as it is.
///
/// The result is never negative.
///
/// ## Examples
/// ```
/// # use surface_pathfinding::{heuristic, SurfaceProfile};
/// let profile = SurfaceProfile::reference();
///
/// assert_eq!(heuristic(0, 3, &profile), 3.0);
/// assert_eq!(heuristic(3, 3, &profile), 0.0);
/// assert_eq!(heuristic(-4, 3, &profile), 7.0); // not in the profile
/// ```
pub fn heuristic(position: Position, target: Position, profile: &SurfaceProfile) -> f64 {
    let direct_distance = position.abs_diff(target) as f64;
    direct_distance * (profile.fit(position) / DEFAULT_FIT)
}
