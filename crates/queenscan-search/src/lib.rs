//! Queenscan Search - bounded backtracking engine for queen placements.
//!
//! The crate provides [`PlacementSearch`], a reusable engine that enumerates
//! every way to place `k` mutually non-attacking queens on an `n` by `n`
//! board, up to a solution cap, and the [`solve`] convenience function that
//! wraps one run of it.
//!
//! # Examples
//!
//! ```
//! use queenscan_search::solve;
//!
//! // The classic 4-queens puzzle has exactly two answers.
//! let solutions = solve(4, 4, 100);
//! assert_eq!(solutions.len(), 2);
//! ```

pub mod result;
pub mod scope;
pub mod search;
pub mod stats;

pub use result::SearchResult;
pub use scope::SearchScope;
pub use search::{solve, PlacementSearch, DEFAULT_SOLUTION_LIMIT};
pub use stats::SearchStats;
