//! Playback control for a single embedded media element.
//!
//! A [`PlaybackController`] owns the element it drives and the
//! [`PlaybackState`] the player view renders from. User input and media
//! notifications both arrive as [`PlaybackEvent`]s and are applied one at a
//! time, in arrival order.

mod controller;
mod media;
mod state;

pub use controller::{PlaybackController, PlaybackError, PlaybackEvent};
pub use media::{FullscreenError, MediaElement};
pub use state::PlaybackState;

/// Formats seconds as `m:ss`. Minutes are not wrapped into hours.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }

    let minutes = (seconds / 60.0).floor() as u64;
    let remaining = (seconds % 60.0).floor() as u64;
    format!("{}:{:02}", minutes, remaining)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(5.9), "0:05");
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(754.2), "12:34");
        assert_eq!(format_time(3600.0), "60:00");
    }

    #[test]
    fn test_format_time_degenerate_input() {
        assert_eq!(format_time(-3.0), "0:00");
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
    }
}
