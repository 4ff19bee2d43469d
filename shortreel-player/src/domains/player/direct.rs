//! DIRECT media played by a native player process.
//!
//! Like the embedded player this is a single-slot owner: at most one
//! process, launched when a DIRECT video is presented and stopped when the
//! player is closed or switches to another video. A launch that failed, or
//! a window the user closed, is not relaunched for the same URL until the
//! video is selected again or the player is closed.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::infra::native_player::{LaunchRequest, NativeBackend, NativeHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectPhase {
    Idle,
    Playing,
    Paused,
    /// The native window was closed
    Ended,
    Failed,
}

#[derive(Debug)]
struct Active {
    url: String,
    handle: Box<dyn NativeHandle>,
    paused: bool,
}

#[derive(Debug)]
pub struct DirectPlayer {
    backend: Arc<dyn NativeBackend>,
    active: Option<Active>,
    /// URL that ended or failed, with how
    settled: Option<(String, DirectPhase)>,
}

impl DirectPlayer {
    pub fn new(backend: Arc<dyn NativeBackend>) -> Self {
        Self {
            backend,
            active: None,
            settled: None,
        }
    }

    pub fn phase(&self) -> DirectPhase {
        match (&self.active, &self.settled) {
            (Some(active), _) if active.paused => DirectPhase::Paused,
            (Some(_), _) => DirectPhase::Playing,
            (None, Some((_, phase))) => *phase,
            (None, None) => DirectPhase::Idle,
        }
    }

    pub fn url(&self) -> Option<&str> {
        self.active.as_ref().map(|active| active.url.as_str())
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Make `url` the one running video, matching `playing`.
    pub fn activate(&mut self, url: &str, title: &str, playing: bool) {
        if self.url() == Some(url) {
            self.set_playing(playing);
            return;
        }
        if matches!(&self.settled, Some((settled, _)) if settled == url) {
            return;
        }

        self.deactivate();

        let request = LaunchRequest {
            url: url.to_string(),
            title: title.to_string(),
            start_paused: !playing,
        };
        match self.backend.launch(request) {
            Ok(handle) => {
                info!("[Native] Playing {url}");
                self.active = Some(Active {
                    url: url.to_string(),
                    handle,
                    paused: !playing,
                });
            }
            Err(err) => {
                warn!("[Native] {err}; video stays unplayable");
                self.settled = Some((url.to_string(), DirectPhase::Failed));
            }
        }
    }

    pub fn set_playing(&mut self, playing: bool) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        if active.paused == !playing {
            return;
        }
        if let Err(err) = active.handle.set_paused(!playing) {
            let action = if playing { "resume" } else { "pause" };
            warn!("[Native] Could not {action}: {err}");
        }
        active.paused = !playing;
    }

    /// Notice a native window the user closed. Returns whether it was.
    pub fn check_alive(&mut self) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        if active.handle.is_alive() {
            return false;
        }
        info!("[Native] Player for {} exited", active.url);
        self.settled = Some((active.url.clone(), DirectPhase::Ended));
        self.active = None;
        true
    }

    /// Stop the running process and forget any ended or failed URL.
    pub fn deactivate(&mut self) {
        self.settled = None;
        if let Some(mut active) = self.active.take() {
            debug!("[Native] Stopping player for {}", active.url);
            active.handle.stop();
        }
    }

    /// Allow the last ended or failed URL to launch again.
    pub fn forget(&mut self) {
        self.settled = None;
    }
}

impl Drop for DirectPlayer {
    fn drop(&mut self) {
        self.deactivate();
    }
}
