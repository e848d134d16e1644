//! Per-run search state.
//!
//! A [`SearchScope`] is created for each [`run`](crate::PlacementSearch::run)
//! and discarded when the run finishes, so the engine itself stays immutable
//! and reusable across runs.

use queenscan_core::{Placement, Position};
use smallvec::SmallVec;

use crate::result::SearchResult;
use crate::stats::SearchStats;

/// Mutable state owned by a single search run.
///
/// The scope holds the working partial placement, the solutions snapshotted
/// so far, the solution cap, and the run statistics. The working buffer is
/// inline-allocated for up to eight queens and spills to the heap beyond
/// that.
#[derive(Debug)]
pub struct SearchScope {
    working: SmallVec<[Position; 8]>,
    solutions: Vec<Placement>,
    limit: usize,
    stats: SearchStats,
}

impl SearchScope {
    /// Creates a scope for a run keeping at most `limit` solutions.
    ///
    /// The working buffer grows only as queens are actually placed.
    pub fn new(limit: usize) -> Self {
        Self {
            working: SmallVec::new(),
            solutions: Vec::new(),
            limit,
            stats: SearchStats::default(),
        }
    }

    /// Starts the run clock.
    pub fn start(&mut self) {
        self.stats.start();
    }

    /// The queens currently on the working board, in placement order.
    pub fn placed(&self) -> &[Position] {
        &self.working
    }

    /// Number of queens currently placed.
    pub fn placed_count(&self) -> usize {
        self.working.len()
    }

    /// Places a queen on the working board.
    pub fn push(&mut self, position: Position) {
        self.working.push(position);
    }

    /// Removes the most recently placed queen.
    pub fn pop(&mut self) {
        self.working.pop();
    }

    /// Records one scanned cell in the run statistics.
    pub fn record_cell(&mut self, placed: bool) {
        self.stats.record_cell(placed);
    }

    /// Snapshots the working board as a complete solution.
    ///
    /// The working buffer is copied, not drained; the caller goes on
    /// backtracking with it untouched.
    pub fn record_solution(&mut self) {
        self.solutions.push(Placement::new(self.working.to_vec()));
        self.stats.record_solution();
    }

    /// Number of solutions recorded so far.
    pub fn solution_count(&self) -> usize {
        self.solutions.len()
    }

    /// True once the solution cap has been reached.
    pub fn limit_reached(&self) -> bool {
        self.solutions.len() >= self.limit
    }

    /// Consumes the scope, yielding the run's result.
    pub fn finish(self) -> SearchResult {
        SearchResult::new(self.solutions, self.stats)
    }
}
