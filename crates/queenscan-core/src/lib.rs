//! Queenscan Core - board and placement model for k-queens search
//!
//! This crate provides the domain types shared by the queenscan crates:
//! - `Board` and `Position` for n×n grid geometry in scan order
//! - `Placement` for ordered sets of mutually non-attacking queens
//! - `is_safe`, the row/column/diagonal safety predicate

pub mod board;
pub mod error;
pub mod placement;

pub use board::{Board, Position};
pub use error::PlacementError;
pub use placement::{is_safe, Placement};
