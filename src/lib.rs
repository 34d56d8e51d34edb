#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to find Paths along a Line, guided by a Surface Profile.
//!
//! ## Introduction
//! The search space of this crate is the integer number line. An Agent starts at some Position
//! and may move exactly `delta` to the left or to the right in every step. Every step has a Cost
//! of `1`. The goal is to reach a target Position.
//!
//! Without any additional information, every step away from the start would be equally
//! promising. That is where the [`SurfaceProfile`] comes in: it maps Positions to a "fit" value,
//! where lower values mean that the surface at that Position looks more like the surface near
//! the target. The [`heuristic`] scales the direct distance to the target by that fit, which
//! biases the A* search towards Positions that look promising.
//!
//! Positions that are missing from the profile receive a fit of `10`, which leaves the direct
//! distance unchanged.
//!
//! Note that **the resulting Paths are not guaranteed to be optimal**. The heuristic is not
//! admissible in general, and a Position that was already discovered is never reconsidered,
//! even if a cheaper way to reach it shows up later.
//!
//! ## Examples
//! Finding a Path with the built-in reference profile:
//! ```
//! use surface_pathfinding::search;
//!
//! let path = search(0, 3, 1, None).unwrap();
//!
//! assert_eq!(path, vec![0, 1, 2, 3]);
//! assert_eq!(path.cost(), 3);
//! ```
//!
//! Supplying a custom profile:
//! ```
//! use surface_pathfinding::{search, SurfaceProfile};
//!
//! let profile: SurfaceProfile = [(-2, 1.0), (-1, 4.0), (0, 9.0)].into_iter().collect();
//!
//! let path = search(0, -2, 1, Some(&profile)).unwrap();
//!
//! assert_eq!(path, vec![0, -1, -2]);
//! ```
//!
//! ### Configuration
//! Every step moves `delta` units, so a target that is not a multiple of `delta` away from the
//! start can never be reached. Since the line is unbounded, the search would run forever in that
//! case. A [`SearchConfig`] can put a limit on the number of expanded Nodes:
//! ```
//! use surface_pathfinding::{search_with_config, SearchConfig};
//!
//! let config = SearchConfig {
//!     delta: 2,
//!     expansion_limit: Some(1000),
//! };
//!
//! let path = search_with_config(0, 3, None, &config);
//!
//! assert!(path.is_none());
//! ```

/// A Position on the Line
pub type Position = i64;

#[macro_use]
mod utils;

mod path;
pub use self::path::{Cost, Path};

mod node;
pub use self::node::SearchNode;

mod node_list;
pub use self::node_list::{NodeID, NodeList};

mod surface;
pub use self::surface::{heuristic, SurfaceProfile, DEFAULT_FIT};

mod search_config;
pub use self::search_config::SearchConfig;

mod a_star;
pub use self::a_star::{a_star_search, search, search_with_config};

mod dfs;
pub use self::dfs::depth_first_search;

mod batch;
pub use self::batch::search_all;

/// The prelude for this crate.
pub mod prelude {
    pub use crate::{
        a_star_search, depth_first_search, heuristic, search, search_all, search_with_config,
        Cost, Path, Position, SearchConfig, SurfaceProfile,
    };
}
