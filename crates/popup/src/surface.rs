use crate::error::Result;

/// Handle to an externally-owned interactive window.
///
/// A [`SurfaceOpener`] creates it, the monitor observes it and cleanup may
/// close it, but its lifecycle is ultimately driven by the user: it can
/// disappear at any moment.
pub trait AuthSurface: Send + Sync {
    /// Whether the surface has been closed. Always readable.
    fn is_closed(&self) -> bool;

    /// The current location fragment, or `None` while the surface sits on a
    /// cross-origin page where the location cannot be read.
    fn location_hash(&self) -> Option<String>;

    /// Close the surface. Must tolerate being called on an already-closed
    /// surface.
    fn close(&self);
}

/// Opens (or adopts) interactive surfaces for a navigation target.
///
/// Implementations wrap whatever the platform offers: `window.open` behind a
/// webview bridge, a spawned browser window, or a scripted fake in tests.
pub trait SurfaceOpener {
    type Surface: AuthSurface;

    /// Open a surface named `name` navigated to `url`. When `existing` is
    /// supplied, navigate that surface instead of creating a new one. Fails
    /// with [`crate::Error::SurfaceUnavailable`] when the environment
    /// refuses to produce a window (popup blocked, headless session).
    fn open(&self, url: &str, name: &str, existing: Option<Self::Surface>)
    -> Result<Self::Surface>;
}
