//! Placements and the safety predicate.
//!
//! A placement is an ordered sequence of queen positions. During search the
//! engine keeps a mutable working buffer and snapshots it into a `Placement`
//! whenever it reaches the target length; outside the engine, placements are
//! immutable values.

use crate::board::{Board, Position};
use crate::error::PlacementError;

/// Returns true if a queen may be placed on `candidate` without attacking
/// any queen already placed.
///
/// This is the safety predicate of the search: one pass over the accepted
/// positions, checking the row, column, and diagonal constraints. It has no
/// side effects and costs O(len) per call, which makes it the dominant cost
/// driver of the search. An empty slice is trivially safe for any candidate.
///
/// # Examples
///
/// ```
/// use queenscan_core::{is_safe, Position};
///
/// let placed = [Position::of(0, 1), Position::of(1, 3)];
///
/// assert!(is_safe(&placed, Position::of(2, 0)));
/// assert!(!is_safe(&placed, Position::of(2, 1))); // column clash
/// assert!(!is_safe(&placed, Position::of(2, 2))); // diagonal from (1, 3)
/// assert!(is_safe(&[], Position::of(7, 7)));
/// ```
pub fn is_safe(placed: &[Position], candidate: Position) -> bool {
    placed.iter().all(|queen| !queen.attacks(candidate))
}

/// An ordered sequence of mutually non-attacking queen positions.
///
/// Placements produced by the search are always *canonical*: positions
/// appear in strictly increasing scan order and no two attack each other.
/// [`Placement::new`] does not re-check those invariants (the engine output
/// satisfies them by construction); use [`Placement::from_positions`] to
/// validate hand-written data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Placement {
    positions: Vec<Position>,
}

impl Placement {
    /// Creates a placement from positions, without validation.
    pub fn new(positions: Vec<Position>) -> Self {
        Placement { positions }
    }

    /// The empty placement, the unique solution when zero queens are asked
    /// for.
    pub fn empty() -> Self {
        Placement {
            positions: Vec::new(),
        }
    }

    /// Creates a placement after checking every invariant against a board:
    /// all positions in bounds, strictly increasing scan order, and no
    /// attacking pair.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant as a [`PlacementError`].
    pub fn from_positions(
        board: Board,
        positions: Vec<Position>,
    ) -> Result<Self, PlacementError> {
        for (i, &position) in positions.iter().enumerate() {
            if !board.contains(position) {
                return Err(PlacementError::OutOfBounds {
                    position,
                    size: board.size(),
                });
            }
            if i > 0 && positions[i - 1] >= position {
                return Err(PlacementError::OutOfOrder { position });
            }
            for &earlier in &positions[..i] {
                if earlier.attacks(position) {
                    return Err(PlacementError::Attacking {
                        first: earlier,
                        second: position,
                    });
                }
            }
        }
        Ok(Placement { positions })
    }

    /// Returns the positions in placement order.
    #[inline]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Returns the number of queens placed.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if no queens are placed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterates over the positions in placement order.
    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.positions.iter()
    }

    /// Returns true if a queen stands on the given cell.
    pub fn occupies(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }

    /// Returns true if no two queens in this placement attack each other.
    pub fn is_non_attacking(&self) -> bool {
        self.positions
            .iter()
            .enumerate()
            .all(|(i, &queen)| is_safe(&self.positions[..i], queen))
    }

    /// Returns true if positions appear in strictly increasing scan order.
    pub fn is_canonical(&self) -> bool {
        self.positions.windows(2).all(|pair| pair[0] < pair[1])
    }
}

impl From<Vec<Position>> for Placement {
    fn from(positions: Vec<Position>) -> Self {
        Placement::new(positions)
    }
}

impl<'a> IntoIterator for &'a Placement {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(cells: &[(usize, usize)]) -> Vec<Position> {
        cells.iter().map(|&(r, c)| Position::of(r, c)).collect()
    }

    #[test]
    fn test_empty_slice_is_safe() {
        assert!(is_safe(&[], Position::of(0, 0)));
        assert!(is_safe(&[], Position::of(19, 19)));
    }

    #[test]
    fn test_is_safe_rejects_each_constraint() {
        let placed = positions(&[(2, 3)]);
        assert!(!is_safe(&placed, Position::of(2, 7))); // row
        assert!(!is_safe(&placed, Position::of(6, 3))); // column
        assert!(!is_safe(&placed, Position::of(4, 5))); // descending diagonal
        assert!(!is_safe(&placed, Position::of(0, 5))); // ascending diagonal
        assert!(is_safe(&placed, Position::of(3, 0)));
    }

    #[test]
    fn test_is_safe_checks_every_queen() {
        // Safe against the first queen, attacked by the second.
        let placed = positions(&[(0, 1), (1, 3)]);
        assert!(!is_safe(&placed, Position::of(3, 3)));
    }

    #[test]
    fn test_from_positions_accepts_valid() {
        let board = Board::new(4);
        let placement =
            Placement::from_positions(board, positions(&[(0, 1), (1, 3), (2, 0), (3, 2)]))
                .unwrap();
        assert_eq!(placement.len(), 4);
        assert!(placement.is_non_attacking());
        assert!(placement.is_canonical());
    }

    #[test]
    fn test_from_positions_rejects_out_of_bounds() {
        let board = Board::new(4);
        let err = Placement::from_positions(board, positions(&[(0, 4)])).unwrap_err();
        assert!(matches!(err, PlacementError::OutOfBounds { size: 4, .. }));
    }

    #[test]
    fn test_from_positions_rejects_out_of_order() {
        let board = Board::new(4);
        let err =
            Placement::from_positions(board, positions(&[(1, 3), (0, 1)])).unwrap_err();
        assert!(matches!(err, PlacementError::OutOfOrder { .. }));
    }

    #[test]
    fn test_from_positions_rejects_duplicates() {
        let board = Board::new(4);
        let err =
            Placement::from_positions(board, positions(&[(0, 1), (0, 1)])).unwrap_err();
        assert!(matches!(err, PlacementError::OutOfOrder { .. }));
    }

    #[test]
    fn test_from_positions_rejects_attacks() {
        let board = Board::new(4);
        let err =
            Placement::from_positions(board, positions(&[(0, 0), (1, 1)])).unwrap_err();
        assert!(matches!(err, PlacementError::Attacking { .. }));
    }

    #[test]
    fn test_occupies() {
        let placement = Placement::new(positions(&[(0, 1), (1, 3)]));
        assert!(placement.occupies(Position::of(0, 1)));
        assert!(!placement.occupies(Position::of(1, 0)));
    }

    #[test]
    fn test_empty_placement() {
        let placement = Placement::empty();
        assert!(placement.is_empty());
        assert_eq!(placement.len(), 0);
        assert!(placement.is_non_attacking());
        assert!(placement.is_canonical());
    }
}
