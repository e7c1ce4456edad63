use thiserror::Error;

/// Configuration for a [`sweep`](super::sweep).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    limit: Option<usize>,
}

/// Errors that can occur when validating a sweep config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("limit must be at least one combination")]
    ZeroLimit,
}

impl Config {
    /// Creates a new config.
    ///
    /// A `limit` of `None` lets the sweep run until the odometer is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroLimit`] if `limit` is `Some(0)`.
    pub fn new(limit: Option<usize>) -> Result<Self, ConfigError> {
        if limit == Some(0) {
            return Err(ConfigError::ZeroLimit);
        }
        Ok(Self { limit })
    }

    /// Returns the maximum number of combinations to visit, if any.
    #[must_use]
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}
