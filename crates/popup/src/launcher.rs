use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use crate::{
    error::{Error, Result},
    surface::SurfaceOpener,
};

/// Process-wide "interaction in progress" flag.
///
/// Set by [`initiate`]; this crate never clears it. The flow controller
/// calls [`clear_interaction_in_progress`] once the flow concludes, on any
/// terminal path.
static INTERACTION_IN_PROGRESS: AtomicBool = AtomicBool::new(false);

/// Whether an interactive flow is currently in progress.
pub fn interaction_in_progress() -> bool {
    INTERACTION_IN_PROGRESS.load(Ordering::SeqCst)
}

/// Clear the interaction flag. Owned by the flow controller, not the
/// launch-and-monitor core.
pub fn clear_interaction_in_progress() {
    INTERACTION_IN_PROGRESS.store(false, Ordering::SeqCst);
}

/// Open (or adopt) an interactive surface navigated to `target_url`.
///
/// Marks the interaction as in progress before consulting the opener; the
/// flag is visible to concurrent readers as soon as this returns. A blank
/// target fails with [`Error::EmptyTarget`] without touching the opener or
/// the flag.
pub fn initiate<O: SurfaceOpener>(
    opener: &O,
    target_url: &str,
    surface_name: &str,
    existing: Option<O::Surface>,
) -> Result<O::Surface> {
    if target_url.trim().is_empty() {
        return Err(Error::EmptyTarget);
    }

    INTERACTION_IN_PROGRESS.store(true, Ordering::SeqCst);
    debug!(surface = surface_name, "opening interactive auth surface");
    opener.open(target_url, surface_name, existing)
}

/// Compose a window name for the interactive surface.
///
/// The uuid suffix keeps names collision-free when the same client runs
/// several flows against the same authority.
pub fn generate_surface_name(client_id: &str, scopes: &[String], authority: &str) -> String {
    format!(
        "auth.{client_id}.{}.{authority}.{}",
        scopes.join("-"),
        uuid::Uuid::new_v4()
    )
}
