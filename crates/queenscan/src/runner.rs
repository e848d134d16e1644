//! Config-driven entry point.

use queenscan_config::SearchConfig;
use queenscan_search::{PlacementSearch, SearchResult};

/// Runs the placement search described by `config`.
///
/// The configuration is clamped into its accepted ranges first, the way an
/// interactive front end would, so out-of-range values shrink the search
/// instead of failing it.
///
/// # Examples
///
/// ```
/// use queenscan::{run_search, SearchConfig};
///
/// let config = SearchConfig::new().with_board_size(4).with_queens(4);
/// let result = run_search(&config);
/// assert_eq!(result.len(), 2);
/// ```
pub fn run_search(config: &SearchConfig) -> SearchResult {
    let config = config.clamped();
    PlacementSearch::new(config.board_size, config.queens)
        .with_limit(config.solution_limit)
        .run()
}
