use serde::Serialize;

/// Observable state of one playback session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaybackState {
    pub is_playing: bool,
    /// Seconds, always within `0..=duration` once the duration is known
    pub current_position: f64,
    /// Seconds; `None` until the media reports its metadata
    pub duration: Option<f64>,
    /// 0.0 to 1.0
    pub volume: f64,
    pub is_muted: bool,
    pub is_fullscreen: bool,
    pub controls_visible: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            is_playing: false,
            current_position: 0.0,
            duration: None,
            volume: 1.0,
            is_muted: false,
            is_fullscreen: false,
            controls_visible: true,
        }
    }
}

impl PlaybackState {
    /// Volume as shown on the slider: zero while muted
    pub fn effective_volume(&self) -> f64 {
        if self.is_muted {
            0.0
        } else {
            self.volume
        }
    }

    /// "position / duration", e.g. "1:05 / 12:34"
    pub fn time_display(&self) -> String {
        format!(
            "{} / {}",
            super::format_time(self.current_position),
            super::format_time(self.duration.unwrap_or(0.0))
        )
    }
}
