//! Statistics collected while a placement search runs.

use std::time::{Duration, Instant};

/// Counters describing how much work a search performed.
///
/// A fresh value is attached to every run and travels out with the
/// [`SearchResult`](crate::SearchResult), so callers can report throughput
/// alongside the solutions themselves.
///
/// # Examples
///
/// ```
/// use queenscan_search::SearchStats;
///
/// let mut stats = SearchStats::default();
/// stats.start();
/// stats.record_cell(true);
/// stats.record_cell(false);
/// stats.record_solution();
///
/// assert_eq!(stats.cells_scanned, 2);
/// assert_eq!(stats.queens_placed, 1);
/// assert_eq!(stats.solutions_found, 1);
/// ```
#[derive(Debug, Default)]
pub struct SearchStats {
    start_time: Option<Instant>,
    /// Number of cells examined against the safety predicate.
    pub cells_scanned: u64,
    /// Number of queens placed on the working board, including ones later
    /// backtracked away.
    pub queens_placed: u64,
    /// Number of complete solutions recorded.
    pub solutions_found: u64,
}

impl SearchStats {
    /// Marks the beginning of the run.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Time elapsed since [`start`](Self::start) was called.
    ///
    /// Returns a zero duration if the run never started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    /// Records one scanned cell; `placed` is true when the cell passed the
    /// safety check and received a queen.
    pub fn record_cell(&mut self, placed: bool) {
        self.cells_scanned += 1;
        if placed {
            self.queens_placed += 1;
        }
    }

    /// Records one complete solution.
    pub fn record_solution(&mut self) {
        self.solutions_found += 1;
    }

    /// Cells scanned per second of elapsed time.
    pub fn cells_per_second(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.cells_scanned as f64 / secs
        } else {
            0.0
        }
    }

    /// Fraction of scanned cells that received a queen.
    pub fn placement_rate(&self) -> f64 {
        if self.cells_scanned > 0 {
            self.queens_placed as f64 / self.cells_scanned as f64
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::default();
        assert_eq!(stats.cells_scanned, 0);
        assert_eq!(stats.queens_placed, 0);
        assert_eq!(stats.solutions_found, 0);
        assert_eq!(stats.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_record_cell_counts_placements() {
        let mut stats = SearchStats::default();
        stats.record_cell(true);
        stats.record_cell(false);
        stats.record_cell(false);
        assert_eq!(stats.cells_scanned, 3);
        assert_eq!(stats.queens_placed, 1);
    }

    #[test]
    fn test_placement_rate() {
        let mut stats = SearchStats::default();
        assert_eq!(stats.placement_rate(), 0.0);
        stats.record_cell(true);
        stats.record_cell(true);
        stats.record_cell(false);
        stats.record_cell(false);
        assert!((stats.placement_rate() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cells_per_second() {
        let mut stats = SearchStats::default();
        assert_eq!(stats.cells_per_second(), 0.0);
        stats.start();
        stats.record_cell(true);
        stats.record_cell(false);
        std::thread::sleep(Duration::from_millis(1));
        assert!(stats.cells_per_second() > 0.0);
    }

    #[test]
    fn test_elapsed_advances_after_start() {
        let mut stats = SearchStats::default();
        stats.start();
        assert!(stats.elapsed() >= Duration::ZERO);
    }
}
