/// Host platform refused a fullscreen transition
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct FullscreenError(pub String);

/// The embedded media element a controller commands.
///
/// Commands are fire-and-forget; the element reports back through
/// [`PlaybackEvent`](super::PlaybackEvent)s such as `TimeAdvanced` or
/// `FullscreenChanged`.
pub trait MediaElement {
    fn play(&mut self);

    fn pause(&mut self);

    /// Moves the playhead, in seconds
    fn set_position(&mut self, seconds: f64);

    fn set_volume(&mut self, volume: f64);

    fn set_muted(&mut self, muted: bool);

    /// Asks the platform to put the player container into fullscreen.
    ///
    /// `Ok` only means the request was accepted; the actual change arrives
    /// later as `FullscreenChanged`.
    fn request_fullscreen(&mut self) -> Result<(), FullscreenError>;

    fn exit_fullscreen(&mut self) -> Result<(), FullscreenError>;
}
