//! Native playback for DIRECT media.
//!
//! DIRECT videos are plain media URLs. They are handed to an external
//! player process that owns its own window and transport controls; the
//! client only launches it, pauses or resumes it from the mini bar, checks
//! whether it is still running and stops it when the player goes away.

pub mod mpv;
pub mod simulated;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use mpv::MpvBackend;
pub use simulated::{NativeSnapshot, SimulatedNativeBackend};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NativeError {
    #[error("failed to launch native player `{command}`: {reason}")]
    Launch { command: String, reason: String },
    #[error("native player ipc failed: {0}")]
    Ipc(String),
    #[error("native player has exited")]
    Exited,
}

/// What to open in the native player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    pub url: String,
    pub title: String,
    pub start_paused: bool,
}

/// Which backend the desktop client launches DIRECT media with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NativeBackendKind {
    #[default]
    Mpv,
    Simulated,
}

/// The `[native]` config table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NativePlayerConfig {
    pub backend: NativeBackendKind,
    /// Executable for the mpv backend
    pub command: String,
    /// Extra arguments passed before the media URL
    pub extra_args: Vec<String>,
}

impl Default for NativePlayerConfig {
    fn default() -> Self {
        Self {
            backend: NativeBackendKind::Mpv,
            command: "mpv".to_string(),
            extra_args: Vec::new(),
        }
    }
}

/// Starts native player processes.
#[cfg_attr(test, mockall::automock)]
pub trait NativeBackend: Send + Sync + fmt::Debug {
    fn launch(
        &self,
        request: LaunchRequest,
    ) -> Result<Box<dyn NativeHandle>, NativeError>;
}

/// A running native player.
#[cfg_attr(test, mockall::automock)]
pub trait NativeHandle: Send + fmt::Debug {
    fn set_paused(&mut self, paused: bool) -> Result<(), NativeError>;

    /// Whether the process is still running (the user may close its window).
    fn is_alive(&mut self) -> bool;

    fn stop(&mut self);
}
