//! Parser options.

/// Options for a parse.
///
/// ```
/// let config = parser::Config::default().step_limit(10_000);
/// assert_eq!(config.get_step_limit(), Some(10_000));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    step_limit: Option<usize>,
}

impl Config {
    /// Stop with [`Fault::StepLimitExceeded`][crate::Fault::StepLimitExceeded]
    /// after this many steps. There's no limit by default.
    pub fn step_limit(mut self, limit: usize) -> Self {
        self.step_limit = Some(limit);
        self
    }

    pub fn get_step_limit(&self) -> Option<usize> {
        self.step_limit
    }
}
