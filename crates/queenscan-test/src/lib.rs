//! Test fixtures shared across the queenscan workspace.
//!
//! This crate is a dev-dependency of the other workspace crates. It offers
//! shorthand builders for placements and assertion helpers for checking
//! that search output is well formed.

pub mod placements;

pub use placements::{assert_canonical_solution, four_queens_solutions, placement};
