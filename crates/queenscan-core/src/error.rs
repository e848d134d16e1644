//! Error types for queenscan

use thiserror::Error;

use crate::board::Position;

/// Error raised when building a [`Placement`](crate::Placement) from
/// positions that violate the placement invariants.
///
/// The search engine never produces these: its output is canonical by
/// construction. They exist for callers (and test fixtures) that state
/// placements by hand.
#[derive(Debug, Error)]
pub enum PlacementError {
    /// A position lies outside the board.
    #[error("position {position} is outside the {size}x{size} board")]
    OutOfBounds {
        /// The offending position.
        position: Position,
        /// The board side length.
        size: usize,
    },

    /// Positions are not in strictly increasing scan order.
    #[error("position {position} breaks strictly increasing scan order")]
    OutOfOrder {
        /// The first position found out of order.
        position: Position,
    },

    /// Two queens attack each other.
    #[error("queens at {first} and {second} attack each other")]
    Attacking {
        /// The earlier of the attacking pair.
        first: Position,
        /// The later of the attacking pair.
        second: Position,
    },
}
