use std::time::{Duration, Instant};

use super::{media::FullscreenError, MediaElement, PlaybackState};

/// Default idle time before controls hide during playback
pub const CONTROLS_IDLE_TIMEOUT: Duration = Duration::from_secs(3);

/// Inputs to the playback state machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaybackEvent {
    // User input
    TogglePlay,
    Seek(f64),
    SetVolume(f64),
    ToggleMute,
    ToggleFullscreen,
    PointerMove,
    PointerLeave,

    // Media element notifications
    MetadataLoaded { duration: f64 },
    TimeAdvanced(f64),
    Ended,
    FullscreenChanged(bool),

    /// Periodic clock tick; lets the idle timer hide the controls
    Tick,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PlaybackError {
    #[error("cannot seek before the media duration is known")]
    DurationUnknown,

    #[error("invalid position: {0}")]
    InvalidPosition(f64),

    #[error("invalid duration: {0}")]
    InvalidDuration(f64),

    #[error("volume must be between 0 and 1, got {0}")]
    InvalidVolume(f64),

    #[error("fullscreen request rejected: {0}")]
    FullscreenRejected(#[from] FullscreenError),
}

/// State machine for one playback session.
///
/// Seeks outside `0..=duration` are clamped, not rejected. `is_fullscreen`
/// only ever changes on `FullscreenChanged`, never on the request itself.
#[derive(Debug)]
pub struct PlaybackController<M> {
    media: M,
    state: PlaybackState,
    idle_timeout: Duration,
    hide_controls_at: Option<Instant>,
}

impl<M: MediaElement> PlaybackController<M> {
    pub fn new(media: M) -> Self {
        Self::with_idle_timeout(media, CONTROLS_IDLE_TIMEOUT)
    }

    pub fn with_idle_timeout(media: M, idle_timeout: Duration) -> Self {
        Self {
            media,
            state: PlaybackState::default(),
            idle_timeout,
            hide_controls_at: None,
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    /// Ends the session, handing the media element back
    pub fn into_media(self) -> M {
        self.media
    }

    /// Applies a single event. On error the state is left untouched.
    pub fn handle(&mut self, event: PlaybackEvent, now: Instant) -> Result<(), PlaybackError> {
        tracing::trace!(?event, "Playback event");

        match event {
            PlaybackEvent::TogglePlay => self.toggle_play(now),
            PlaybackEvent::MetadataLoaded { duration } => {
                if !duration.is_finite() || duration < 0.0 {
                    return Err(PlaybackError::InvalidDuration(duration));
                }
                self.state.duration = Some(duration);
                self.state.current_position = self.clamp_position(self.state.current_position);
            }
            PlaybackEvent::TimeAdvanced(position) => {
                if position.is_nan() {
                    return Err(PlaybackError::InvalidPosition(position));
                }
                self.state.current_position = self.clamp_position(position);
            }
            PlaybackEvent::Ended => {
                self.state.is_playing = false;
                self.show_controls();
            }
            PlaybackEvent::Seek(position) => self.seek(position)?,
            PlaybackEvent::SetVolume(volume) => self.set_volume(volume)?,
            PlaybackEvent::ToggleMute => {
                self.state.is_muted = !self.state.is_muted;
                self.media.set_muted(self.state.is_muted);
            }
            PlaybackEvent::ToggleFullscreen => self.toggle_fullscreen()?,
            PlaybackEvent::FullscreenChanged(is_fullscreen) => {
                self.state.is_fullscreen = is_fullscreen;
            }
            PlaybackEvent::PointerMove => {
                self.state.controls_visible = true;
                self.arm_idle_timer(now);
            }
            PlaybackEvent::PointerLeave => {
                if self.state.is_playing {
                    self.state.controls_visible = false;
                    self.hide_controls_at = None;
                }
            }
            PlaybackEvent::Tick => self.expire_idle_timer(now),
        }

        Ok(())
    }

    /// Applies events in order, stopping at the first error
    pub fn handle_all(
        &mut self,
        events: impl IntoIterator<Item = PlaybackEvent>,
        now: Instant,
    ) -> Result<(), PlaybackError> {
        events.into_iter().try_for_each(|event| self.handle(event, now))
    }

    fn toggle_play(&mut self, now: Instant) {
        if self.state.is_playing {
            self.media.pause();
            self.state.is_playing = false;
            self.show_controls();
        } else {
            self.media.play();
            self.state.is_playing = true;
            self.arm_idle_timer(now);
        }
    }

    fn seek(&mut self, position: f64) -> Result<(), PlaybackError> {
        if self.state.duration.is_none() {
            return Err(PlaybackError::DurationUnknown);
        }
        if position.is_nan() {
            return Err(PlaybackError::InvalidPosition(position));
        }

        let position = self.clamp_position(position);
        self.state.current_position = position;
        self.media.set_position(position);
        Ok(())
    }

    fn set_volume(&mut self, volume: f64) -> Result<(), PlaybackError> {
        if !(0.0..=1.0).contains(&volume) {
            return Err(PlaybackError::InvalidVolume(volume));
        }

        self.state.volume = volume;
        self.state.is_muted = volume == 0.0;
        self.media.set_volume(volume);
        self.media.set_muted(self.state.is_muted);
        Ok(())
    }

    fn toggle_fullscreen(&mut self) -> Result<(), PlaybackError> {
        let result = if self.state.is_fullscreen {
            self.media.exit_fullscreen()
        } else {
            self.media.request_fullscreen()
        };

        result.map_err(|e| {
            tracing::warn!(error = %e, "Fullscreen request rejected");
            PlaybackError::from(e)
        })
    }

    fn clamp_position(&self, position: f64) -> f64 {
        match self.state.duration {
            Some(duration) => position.clamp(0.0, duration),
            None => position.max(0.0),
        }
    }

    fn show_controls(&mut self) {
        self.state.controls_visible = true;
        self.hide_controls_at = None;
    }

    fn arm_idle_timer(&mut self, now: Instant) {
        self.hide_controls_at = Some(now + self.idle_timeout);
    }

    fn expire_idle_timer(&mut self, now: Instant) {
        if !self.state.is_playing {
            return;
        }
        if let Some(deadline) = self.hide_controls_at {
            if now >= deadline {
                self.state.controls_visible = false;
                self.hide_controls_at = None;
            }
        }
    }
}
