//! Polls the interactive surface until one of three racing terminal
//! conditions resolves: recognized redirect fragment, closure by the user,
//! or an exhausted tick budget.

use std::time::Duration;

use {
    tokio::time::{Instant, Interval, interval_at},
    tracing::{debug, warn},
};

use crate::{
    defaults::{DEFAULT_TIMEOUT_MS, POLL_INTERVAL_MS},
    error::{Error, Result},
    hash::hash_contains_known_properties,
    surface::AuthSurface,
};

/// Wait for the surface to reach a terminal condition.
///
/// Resolves `Ok(hash)` when the surface navigates back carrying a recognized
/// authorization fragment, [`Error::UserCancelled`] when the user closes it
/// first, or [`Error::MonitorTimeout`] once `timeout_ms / POLL_INTERVAL_MS`
/// same-origin polls pass without either. Monitoring resources are released
/// on every path; the surface is closed on success and timeout but left
/// alone when the user already closed it.
pub async fn wait_for_completion<S: AuthSurface>(surface: S, timeout_ms: u64) -> Result<String> {
    wait_with_interval(surface, timeout_ms, POLL_INTERVAL_MS).await
}

/// The number of polls a timeout allows at a given interval (floored).
fn tick_budget(timeout_ms: u64, interval_ms: u64) -> u64 {
    timeout_ms / interval_ms
}

async fn wait_with_interval<S: AuthSurface>(
    surface: S,
    timeout_ms: u64,
    interval_ms: u64,
) -> Result<String> {
    if timeout_ms < DEFAULT_TIMEOUT_MS {
        warn!(
            timeout_ms,
            recommended = DEFAULT_TIMEOUT_MS,
            "monitoring timeout is below the recommended floor"
        );
    }

    let mut session = MonitorSession::start(tick_budget(timeout_ms, interval_ms), interval_ms);

    loop {
        session.next_poll().await;

        // Closed wins over everything else on every poll, including a hash
        // that would otherwise count as success.
        if surface.is_closed() {
            session.release(None::<&S>);
            debug!("surface closed by the user");
            return Err(Error::UserCancelled);
        }

        // While the surface sits on a cross-origin page its location is
        // unreadable and the tick budget does not run, so wall-clock time
        // until a timeout is unbounded by `timeout_ms`.
        let Some(hash) = surface.location_hash() else {
            continue;
        };

        if hash_contains_known_properties(&hash) {
            session.release(Some(&surface));
            debug!("recognized authorization fragment on surface");
            return Ok(hash);
        }

        session.ticks += 1;
        if session.ticks > session.max_ticks {
            session.release(Some(&surface));
            debug!(timeout_ms, "surface monitoring exhausted its tick budget");
            return Err(Error::MonitorTimeout { timeout_ms });
        }
    }
}

/// Per-session monitoring state: tick counter, budget and the active timer.
///
/// Created when monitoring starts and destroyed on the single terminal
/// transition. `release` is the cleanup step shared by every terminal path.
struct MonitorSession {
    ticks: u64,
    max_ticks: u64,
    timer: Option<Interval>,
}

impl MonitorSession {
    fn start(max_ticks: u64, interval_ms: u64) -> Self {
        let period = Duration::from_millis(interval_ms);
        // First poll fires after one full interval, not immediately.
        let timer = interval_at(Instant::now() + period, period);
        Self {
            ticks: 0,
            max_ticks,
            timer: Some(timer),
        }
    }

    /// Suspend until the next poll instant. A released session never polls
    /// again; every terminal path returns before reaching this.
    async fn next_poll(&mut self) {
        match self.timer.as_mut() {
            Some(timer) => {
                timer.tick().await;
            },
            None => std::future::pending::<()>().await,
        }
    }

    /// Release monitoring resources. Idempotent: the timer is dropped at
    /// most once and an already-closed surface is left alone.
    fn release<S: AuthSurface>(&mut self, surface: Option<&S>) {
        drop(self.timer.take());
        if let Some(surface) = surface
            && !surface.is_closed()
        {
            surface.close();
        }
    }
}
