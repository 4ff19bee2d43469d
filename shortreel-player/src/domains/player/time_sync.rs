//! Progress/duration mirror of the embedded instance.

use crate::infra::embed_api::{EmbedInstance, EmbedPlaybackState};

/// Last observed position and length of the embedded video, in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlaybackClock {
    pub current_time: f64,
    pub duration: f64,
}

impl PlaybackClock {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Refresh from a poll of `instance`.
    ///
    /// Position is only read while playing; duration is read while playing
    /// or paused. Any other state leaves the clock untouched.
    pub fn poll(&mut self, instance: &dyn EmbedInstance) {
        let state = instance.state();
        if state == EmbedPlaybackState::Playing {
            self.current_time = sanitize(instance.current_time());
        }
        if matches!(
            state,
            EmbedPlaybackState::Playing | EmbedPlaybackState::Paused
        ) {
            self.duration = sanitize(instance.duration());
        }
    }

    /// Record the duration captured when the instance became ready.
    pub fn set_duration(&mut self, duration: f64) {
        self.duration = sanitize(duration);
    }

    pub fn seek(&mut self, seconds: f64) {
        self.current_time = sanitize(seconds);
    }

    pub fn skip_back_target(&self, by: f64) -> f64 {
        (self.current_time - by).max(0.0)
    }

    pub fn skip_forward_target(&self, by: f64) -> f64 {
        (self.current_time + by).min(self.duration)
    }

    /// Seek slider upper bound; stays positive so the slider has a range
    /// before the duration is known.
    pub fn slider_max(&self) -> f64 {
        if self.duration > 0.0 { self.duration } else { 1.0 }
    }
}

fn sanitize(seconds: f64) -> f64 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    }
}
