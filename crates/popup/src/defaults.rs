/// Interval between surface polls, in milliseconds. Library-wide constant.
pub const POLL_INTERVAL_MS: u64 = 50;

/// Recommended minimum monitoring timeout, in milliseconds.
///
/// Not enforced: a timeout below this floor only triggers a diagnostic
/// warning, never a behavior change.
pub const DEFAULT_TIMEOUT_MS: u64 = 60_000;
