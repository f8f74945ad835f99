use thiserror::Error;

/// Errors produced while launching or monitoring an interactive surface.
#[derive(Debug, Error)]
pub enum Error {
    #[error("navigation target is empty")]
    EmptyTarget,

    #[error("surface unavailable: the environment refused to open a window")]
    SurfaceUnavailable,

    #[error("user cancelled: surface closed before the flow completed")]
    UserCancelled,

    #[error("monitoring timed out after {timeout_ms}ms of same-origin polling")]
    MonitorTimeout { timeout_ms: u64 },
}

pub type Result<T> = std::result::Result<T, Error>;
