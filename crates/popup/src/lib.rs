//! Launch-and-monitor core for redirect-based interactive authorization.
//!
//! Opens an externally-owned interactive surface (a popup window or any
//! platform equivalent) for an authorization URL, then polls it until one of
//! three racing terminal conditions resolves: a recognized redirect fragment
//! (success), closure by the user (cancellation), or an exhausted tick
//! budget (timeout). The surface's location may be unreadable for an
//! unbounded initial period while it sits on a cross-origin page.

pub mod defaults;
pub mod error;
pub mod hash;
pub mod launcher;
pub mod monitor;
pub mod surface;

pub use {
    defaults::{DEFAULT_TIMEOUT_MS, POLL_INTERVAL_MS},
    error::{Error, Result},
    hash::hash_contains_known_properties,
    launcher::{
        clear_interaction_in_progress, generate_surface_name, initiate, interaction_in_progress,
    },
    monitor::wait_for_completion,
    surface::{AuthSurface, SurfaceOpener},
};
