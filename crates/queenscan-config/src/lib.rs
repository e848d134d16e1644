//! Configuration system for queenscan.
//!
//! Load search configuration from TOML or YAML files to control board size,
//! queen count, and the solution cap without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use queenscan_config::SearchConfig;
//!
//! let config = SearchConfig::from_toml_str(r#"
//!     board_size = 6
//!     queens = 4
//!     solution_limit = 50
//! "#).unwrap();
//!
//! assert_eq!(config.board_size, 6);
//! assert_eq!(config.queens, 4);
//! assert_eq!(config.solution_limit, 50);
//! ```
//!
//! Use the default config when the file is missing:
//!
//! ```
//! use queenscan_config::SearchConfig;
//!
//! let config = SearchConfig::load("search.toml").unwrap_or_default();
//! // Proceeds with defaults if the file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use queenscan_core::Board;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Board side length used when none is configured.
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Queen count used when none is configured.
pub const DEFAULT_QUEENS: usize = 8;

/// Solution cap used when none is configured.
pub const DEFAULT_SOLUTION_LIMIT: usize = 1000;

/// Largest board side length accepted by [`SearchConfig::clamped`].
pub const MAX_BOARD_SIZE: usize = 20;

/// Largest solution cap accepted by [`SearchConfig::clamped`].
pub const MAX_SOLUTION_LIMIT: usize = 100_000;

/// Main search configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchConfig {
    /// Board side length.
    #[serde(default = "default_board_size")]
    pub board_size: usize,

    /// Number of queens each solution must place.
    #[serde(default = "default_queens")]
    pub queens: usize,

    /// Maximum number of solutions to record per run.
    #[serde(default = "default_solution_limit")]
    pub solution_limit: usize,
}

fn default_board_size() -> usize {
    DEFAULT_BOARD_SIZE
}

fn default_queens() -> usize {
    DEFAULT_QUEENS
}

fn default_solution_limit() -> usize {
    DEFAULT_SOLUTION_LIMIT
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            queens: DEFAULT_QUEENS,
            solution_limit: DEFAULT_SOLUTION_LIMIT,
        }
    }
}

impl SearchConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the board side length.
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Sets the queen count.
    pub fn with_queens(mut self, queens: usize) -> Self {
        self.queens = queens;
        self
    }

    /// Sets the solution cap.
    pub fn with_solution_limit(mut self, solution_limit: usize) -> Self {
        self.solution_limit = solution_limit;
        self
    }

    /// Returns a copy with every field forced into its accepted range.
    ///
    /// The board size lands in `1..=`[`MAX_BOARD_SIZE`], the queen count is
    /// capped at the cell count of the clamped board, and the solution cap
    /// lands in `1..=`[`MAX_SOLUTION_LIMIT`].
    ///
    /// # Examples
    ///
    /// ```
    /// use queenscan_config::SearchConfig;
    ///
    /// let config = SearchConfig::new()
    ///     .with_board_size(999)
    ///     .with_queens(999)
    ///     .clamped();
    ///
    /// assert_eq!(config.board_size, 20);
    /// assert_eq!(config.queens, 400);
    /// ```
    pub fn clamped(&self) -> Self {
        let board_size = self.board_size.clamp(1, MAX_BOARD_SIZE);
        let cells = Board::new(board_size).cell_count();
        Self {
            board_size,
            queens: self.queens.min(cells),
            solution_limit: self.solution_limit.clamp(1, MAX_SOLUTION_LIMIT),
        }
    }

    /// Checks every field against its accepted range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first field out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::Invalid(format!(
                "board_size must be between 1 and {MAX_BOARD_SIZE}, got {}",
                self.board_size
            )));
        }
        let cells = Board::new(self.board_size).cell_count();
        if self.queens > cells {
            return Err(ConfigError::Invalid(format!(
                "queens must not exceed the {cells} cells of the board, got {}",
                self.queens
            )));
        }
        if self.solution_limit == 0 || self.solution_limit > MAX_SOLUTION_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "solution_limit must be between 1 and {MAX_SOLUTION_LIMIT}, got {}",
                self.solution_limit
            )));
        }
        Ok(())
    }
}
