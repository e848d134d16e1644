//! Board geometry and queen positions.
//!
//! A board is a conceptual n×n grid of cells addressed by (row, col) pairs.
//! Cells are traversed in *scan order*: left to right, top to bottom, by
//! linear index `row * n + col`. Scan order is what makes the search
//! deterministic and duplicate-free, so every ordering in this crate
//! (`Position`'s `Ord`, `Board::positions`) follows it.

use std::fmt;

/// A single cell on the board, identified by row and column.
///
/// Positions have no identity of their own; they are compared by value and
/// ordered by scan order (row first, then column).
///
/// # Examples
///
/// ```
/// use queenscan_core::Position;
///
/// let a = Position::of(0, 3);
/// let b = Position::of(1, 3);
///
/// assert!(a < b);                 // scan order
/// assert!(a.attacks(b));          // same column
/// assert_eq!(a.index(8), 3);
/// assert_eq!(Position::from_index(11, 8), b);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position at the given row and column.
    #[inline]
    pub const fn of(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Converts a linear scan-order index back into a position.
    ///
    /// `n` is the board side length and must be at least 1.
    #[inline]
    pub const fn from_index(index: usize, n: usize) -> Self {
        Position {
            row: index / n,
            col: index % n,
        }
    }

    /// Returns the row of this position.
    #[inline]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Returns the column of this position.
    #[inline]
    pub const fn col(&self) -> usize {
        self.col
    }

    /// Returns the linear scan-order index of this position on an n×n board.
    #[inline]
    pub const fn index(&self, n: usize) -> usize {
        self.row * n + self.col
    }

    /// Returns true if two queens standing on these cells attack each other:
    /// same row, same column, or same diagonal (|Δrow| = |Δcol|).
    ///
    /// The relation is symmetric. A position trivially attacks itself.
    #[inline]
    pub const fn attacks(&self, other: Position) -> bool {
        self.row == other.row
            || self.col == other.col
            || self.row.abs_diff(other.row) == self.col.abs_diff(other.col)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({}, {})", self.row, self.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Conceptual n×n grid of cells.
///
/// The board owns no cell state; it only carries the side length and the
/// geometry helpers derived from it. A 0×0 board is valid and has no cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
}

impl Board {
    /// Creates a board with the given side length.
    #[inline]
    pub const fn new(size: usize) -> Self {
        Board { size }
    }

    /// Returns the side length n.
    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of cells, n².
    #[inline]
    pub const fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Returns true if the position lies on this board.
    #[inline]
    pub const fn contains(&self, pos: Position) -> bool {
        pos.row() < self.size && pos.col() < self.size
    }

    /// Iterates over every cell in scan order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let n = self.size;
        (0..self.cell_count()).map(move |index| Position::from_index(index, n))
    }
}
