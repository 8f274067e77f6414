use crate::editor::DEFAULT_LIMIT;

/// The number of characters a query must exceed before it is validated while typing.
pub const LIVE_VALIDATION_THRESHOLD: usize = 10;

/// Holds the configuration of an [`EditSession`](crate::session::EditSession).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Queries of at most this many characters are not validated after an edit.
    pub live_validation_threshold: usize,
    /// The row count used when a `LIMIT` clause is added.
    pub default_limit: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            live_validation_threshold: LIVE_VALIDATION_THRESHOLD,
            default_limit: DEFAULT_LIMIT,
        }
    }
}
