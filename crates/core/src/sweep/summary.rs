/// Indicates why a sweep finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every remaining combination was visited.
    Exhausted,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
    /// Reached the configured limit.
    LimitReached,
}

/// The result of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Final sweep status.
    pub status: Status,
    /// Number of combinations handed to the observer.
    pub visited: usize,
}
