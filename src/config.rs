//! Configuration for a solver run.

/// Settings applied by [`crate::Solver::with_config`].
///
/// # Examples
///
/// ```
/// use sliding_puzzle::SolverConfig;
///
/// let config = SolverConfig::new().with_max_expansions(50_000);
/// assert_eq!(config.max_expansions, Some(50_000));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolverConfig {
    /// Upper bound on boards expanded by both engines together.
    /// `None` searches until one engine reaches a goal.
    pub max_expansions: Option<usize>,
}

impl SolverConfig {
    /// Create a configuration with no search limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop with [`crate::Error::SearchLimit`] once more than `limit`
    /// boards have been expanded.
    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }
}
