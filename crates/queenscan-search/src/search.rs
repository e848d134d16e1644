//! Bounded backtracking search over board cells.
//!
//! The engine scans cells in row-major order and threads a start cursor
//! through the recursion so every queen set is visited exactly once, in
//! ascending cell order. A solution cap bounds the run; when it is hit, a
//! stop signal is handed back through every level and no further branch is
//! visited.
//!
//! Logging: one INFO event at the start and end of each run, one DEBUG
//! event per recorded solution.

use queenscan_core::{is_safe, Board, Placement, Position};
use tracing::{debug, info};

use crate::result::SearchResult;
use crate::scope::SearchScope;

/// Solution cap applied when a search is built without an explicit limit.
pub const DEFAULT_SOLUTION_LIMIT: usize = 5000;

/// Signal threaded out of the recursion once the solution cap is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Control {
    /// Keep exploring sibling branches.
    Continue,
    /// Unwind every level without exploring further.
    Stop,
}

/// A configured k-queens placement search.
///
/// The search itself is immutable; every [`run`](Self::run) starts from a
/// fresh [`SearchScope`] and runs to the same result, so one value can be
/// reused across runs.
///
/// # Examples
///
/// ```
/// use queenscan_search::PlacementSearch;
///
/// let result = PlacementSearch::new(8, 8).with_limit(1).run();
/// assert_eq!(result.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct PlacementSearch {
    board: Board,
    queens: usize,
    limit: usize,
}

impl PlacementSearch {
    /// Creates a search for `queens` queens on a `board_size` by
    /// `board_size` board, capped at [`DEFAULT_SOLUTION_LIMIT`] solutions.
    pub fn new(board_size: usize, queens: usize) -> Self {
        Self {
            board: Board::new(board_size),
            queens,
            limit: DEFAULT_SOLUTION_LIMIT,
        }
    }

    /// Replaces the solution cap.
    ///
    /// A cap of zero means the run records nothing and returns immediately.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// The board this search scans.
    #[inline]
    pub fn board(&self) -> Board {
        self.board
    }

    /// Number of queens each solution must place.
    #[inline]
    pub fn queens(&self) -> usize {
        self.queens
    }

    /// The solution cap for each run.
    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Runs the search to completion and returns every solution found, in
    /// discovery order, together with run statistics.
    ///
    /// A run that exhausts the board without finding anything returns an
    /// empty result; absence of solutions is an answer, not a failure.
    pub fn run(&self) -> SearchResult {
        let mut scope = SearchScope::new(self.limit);
        scope.start();
        info!(
            event = "search_start",
            board_size = self.board.size(),
            queens = self.queens,
            limit = self.limit,
        );

        self.descend(&mut scope, 0);

        let result = scope.finish();
        info!(
            event = "search_end",
            solutions = result.len(),
            cells_scanned = result.stats().cells_scanned,
            duration_ms = result.stats().elapsed().as_millis() as u64,
            cells_per_second = result.stats().cells_per_second() as u64,
        );
        result
    }

    /// One level of the scan. `start_index` is the first cell this level may
    /// occupy; cells below it belong to ancestors, which keeps each queen
    /// set visited exactly once and each snapshot in ascending cell order.
    fn descend(&self, scope: &mut SearchScope, start_index: usize) -> Control {
        if scope.limit_reached() {
            return Control::Stop;
        }
        if scope.placed_count() == self.queens {
            scope.record_solution();
            debug!(
                event = "solution_found",
                index = scope.solution_count(),
                queens = self.queens,
            );
            return Control::Continue;
        }

        for index in start_index..self.board.cell_count() {
            let candidate = Position::from_index(index, self.board.size());
            let safe = is_safe(scope.placed(), candidate);
            scope.record_cell(safe);
            if !safe {
                continue;
            }

            scope.push(candidate);
            let flow = self.descend(scope, index + 1);
            scope.pop();
            if flow == Control::Stop || scope.limit_reached() {
                return Control::Stop;
            }
        }
        Control::Continue
    }
}

/// Finds up to `limit` ways to place `k` non-attacking queens on an `n` by
/// `n` board.
///
/// Solutions come back in discovery order, which is ascending scan order of
/// their cells. Runs are deterministic; calling twice with the same
/// arguments yields identical results. When `k` exceeds the number of cells
/// the scan exhausts immediately and the result is empty, as it is whenever
/// no arrangement exists.
///
/// # Examples
///
/// ```
/// use queenscan_search::solve;
///
/// let solutions = solve(4, 4, 10);
/// assert_eq!(solutions.len(), 2);
///
/// assert!(solve(3, 3, 10).is_empty());
/// ```
pub fn solve(n: usize, k: usize, limit: usize) -> Vec<Placement> {
    PlacementSearch::new(n, k)
        .with_limit(limit)
        .run()
        .into_solutions()
}

#[cfg(test)]
mod tests {
    use super::*;
    use queenscan_test::{assert_canonical_solution, four_queens_solutions, placement};

    #[test]
    fn test_four_queens_finds_both_solutions_in_scan_order() {
        let solutions = solve(4, 4, 1000);
        assert_eq!(solutions, four_queens_solutions());
    }

    #[test]
    fn test_first_solution_is_scan_order_least() {
        let solutions = solve(4, 4, 1);
        assert_eq!(solutions, vec![placement(&[(0, 1), (1, 3), (2, 0), (3, 2)])]);
    }

    #[test]
    fn test_single_queen_enumerates_cells_in_scan_order() {
        let expected: Vec<Placement> = Board::new(3)
            .positions()
            .map(|p| Placement::new(vec![p]))
            .collect();
        assert_eq!(solve(3, 1, 100), expected);
    }

    #[test]
    fn test_single_queen_respects_limit() {
        assert_eq!(solve(3, 1, 4).len(), 4);
    }

    #[test]
    fn test_zero_queens_yields_one_empty_solution() {
        assert_eq!(solve(5, 0, 10), vec![Placement::empty()]);
        assert_eq!(solve(0, 0, 10), vec![Placement::empty()]);
    }

    #[test]
    fn test_empty_board_with_queens_finds_nothing() {
        assert!(solve(0, 1, 10).is_empty());
    }

    #[test]
    fn test_zero_limit_finds_nothing() {
        assert!(solve(4, 4, 0).is_empty());
    }

    #[test]
    fn test_queens_exceeding_cells_finds_nothing() {
        assert!(solve(2, 5, 10).is_empty());
        assert!(solve(2, usize::MAX, 1).is_empty());
    }

    #[test]
    fn test_unsolvable_sizes() {
        assert!(solve(2, 2, 10).is_empty());
        assert!(solve(2, 3, 10).is_empty());
        assert!(solve(3, 3, 10).is_empty());
    }

    #[test]
    fn test_two_queens_on_three_board() {
        let solutions = solve(3, 2, 100);
        assert_eq!(solutions.len(), 8);
        for solution in &solutions {
            assert_canonical_solution(solution, 2);
        }
    }

    #[test]
    fn test_full_boards_have_known_counts() {
        assert_eq!(solve(1, 1, 10).len(), 1);
        assert_eq!(solve(5, 5, 100).len(), 10);
        assert_eq!(solve(6, 6, 100).len(), 4);
    }

    #[test]
    fn test_eight_queens_full_enumeration() {
        let solutions = solve(8, 8, 5000);
        assert_eq!(solutions.len(), 92);
        for solution in &solutions {
            assert_canonical_solution(solution, 8);
        }
    }

    #[test]
    fn test_limit_truncates_enumeration_prefix() {
        let full = solve(8, 8, 5000);
        let capped = solve(8, 8, 5);
        assert_eq!(capped.len(), 5);
        assert_eq!(capped.as_slice(), &full[..5]);
    }

    #[test]
    fn test_runs_are_deterministic() {
        assert_eq!(solve(6, 4, 50), solve(6, 4, 50));
    }

    #[test]
    fn test_search_is_reusable() {
        let search = PlacementSearch::new(4, 4);
        let first = search.run();
        let second = search.run();
        assert_eq!(first.solutions(), second.solutions());
    }

    #[test]
    fn test_builder_exposes_configuration() {
        let search = PlacementSearch::new(6, 4);
        assert_eq!(search.board().size(), 6);
        assert_eq!(search.queens(), 4);
        assert_eq!(search.limit(), DEFAULT_SOLUTION_LIMIT);
        assert_eq!(search.with_limit(25).limit(), 25);
    }

    #[test]
    fn test_stats_reflect_search_work() {
        let result = PlacementSearch::new(4, 4).run();
        let stats = result.stats();
        assert_eq!(stats.solutions_found, 2);
        assert!(stats.cells_scanned >= stats.queens_placed);
        assert!(stats.queens_placed >= 8);
    }

    #[test]
    fn test_limit_stop_leaves_counters_consistent() {
        let result = PlacementSearch::new(8, 8).with_limit(1).run();
        assert_eq!(result.len(), 1);
        assert_eq!(result.stats().solutions_found, 1);
        assert_canonical_solution(&result.solutions()[0], 8);
    }
}
