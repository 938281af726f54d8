//! Platform media element capability
//!
//! The platform resource that actually decodes and outputs audio is a single
//! shared handle, exclusively driven by the session manager. The platform
//! implements this trait and feeds progress back through the manager's
//! `handle_*` callbacks.

/// Commands the session manager issues to the platform media resource.
pub trait MediaElement: Send {
    /// Point the resource at a new media URL and reload it.
    fn load(&mut self, url: &str);

    /// Start or resume playback.
    fn play(&mut self);

    /// Stop playback, keeping position.
    fn pause(&mut self);

    /// Seek to a position in seconds.
    fn seek(&mut self, position_secs: f64);

    /// Set output volume (0-100).
    fn set_volume(&mut self, level: u8);
}

/// Media element that ignores every command.
///
/// Used for headless operation and tests.
#[derive(Debug, Default)]
pub struct NoopMedia;

impl MediaElement for NoopMedia {
    fn load(&mut self, _url: &str) {}
    fn play(&mut self) {}
    fn pause(&mut self) {}
    fn seek(&mut self, _position_secs: f64) {}
    fn set_volume(&mut self, _level: u8) {}
}
