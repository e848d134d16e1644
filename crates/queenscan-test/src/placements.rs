//! Placement fixtures and assertions.

use queenscan_core::{Placement, Position};

/// Builds a placement from `(row, col)` pairs without validation.
///
/// # Examples
///
/// ```
/// use queenscan_test::placement;
///
/// let p = placement(&[(0, 1), (1, 3)]);
/// assert_eq!(p.len(), 2);
/// ```
pub fn placement(cells: &[(usize, usize)]) -> Placement {
    Placement::new(
        cells
            .iter()
            .map(|&(row, col)| Position::of(row, col))
            .collect(),
    )
}

/// The two 4-queens solutions, in the order a scan-order search discovers
/// them.
pub fn four_queens_solutions() -> Vec<Placement> {
    vec![
        placement(&[(0, 1), (1, 3), (2, 0), (3, 2)]),
        placement(&[(0, 2), (1, 0), (2, 3), (3, 1)]),
    ]
}

/// Asserts that `solution` is a well-formed answer for `queens` queens:
/// right length, mutually non-attacking, cells in ascending scan order.
pub fn assert_canonical_solution(solution: &Placement, queens: usize) {
    assert_eq!(
        solution.len(),
        queens,
        "expected {queens} queens, got {}",
        solution.len()
    );
    assert!(
        solution.is_non_attacking(),
        "attacking pair in {solution:?}"
    );
    assert!(
        solution.is_canonical(),
        "cells out of scan order in {solution:?}"
    );
}
