//! Queenscan - a k-queens placement search engine
//!
//! One-call API: pick a board size, a queen count, a solution cap, and call
//! [`solve`].
//!
//! # Example
//!
//! ```rust
//! use queenscan::prelude::*;
//!
//! let solutions = solve(4, 4, 10);
//! assert_eq!(solutions.len(), 2);
//! assert!(solutions.iter().all(|s| s.is_non_attacking()));
//! ```

// Board and placement model
pub use queenscan_core::{is_safe, Board, Placement, PlacementError, Position};

// Search engine
pub use queenscan_search::{
    solve, PlacementSearch, SearchResult, SearchScope, SearchStats, DEFAULT_SOLUTION_LIMIT,
};

// Configuration
pub use queenscan_config::{ConfigError, SearchConfig};

mod runner;
pub use runner::run_search;

pub mod prelude {
    pub use super::{is_safe, run_search, solve, Board, Placement, PlacementSearch, Position};
    pub use super::{SearchConfig, SearchResult};
}
