//! The outcome of a placement search run.

use queenscan_core::Placement;

use crate::stats::SearchStats;

/// Solutions and statistics produced by one search run.
///
/// An exhausted search that found nothing is still a successful run; it is
/// represented by an empty solution list, never by an error.
///
/// # Examples
///
/// ```
/// use queenscan_search::PlacementSearch;
///
/// let result = PlacementSearch::new(4, 4).run();
/// assert_eq!(result.len(), 2);
/// assert!(result.stats().cells_scanned > 0);
/// ```
#[derive(Debug)]
pub struct SearchResult {
    solutions: Vec<Placement>,
    stats: SearchStats,
}

impl SearchResult {
    pub(crate) fn new(solutions: Vec<Placement>, stats: SearchStats) -> Self {
        Self { solutions, stats }
    }

    /// The solutions, in discovery order.
    pub fn solutions(&self) -> &[Placement] {
        &self.solutions
    }

    /// Consumes the result, yielding the solutions.
    pub fn into_solutions(self) -> Vec<Placement> {
        self.solutions
    }

    /// Statistics for the run that produced this result.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Number of solutions found.
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    /// True when the search found no solutions.
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use queenscan_core::Placement;

    #[test]
    fn test_empty_result() {
        let result = SearchResult::new(Vec::new(), SearchStats::default());
        assert!(result.is_empty());
        assert_eq!(result.len(), 0);
        assert!(result.solutions().is_empty());
    }

    #[test]
    fn test_into_solutions_preserves_order() {
        let solutions = vec![Placement::empty(), Placement::empty()];
        let result = SearchResult::new(solutions, SearchStats::default());
        assert_eq!(result.len(), 2);
        assert_eq!(result.into_solutions().len(), 2);
    }
}
