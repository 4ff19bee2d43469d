//! Seam over the third-party embedded player API.
//!
//! The real API is a script-injected global exposing a player constructor and
//! an imperative instance handle. The player domain only ever talks to these
//! traits; [`simulated`] provides the implementation used by the desktop
//! client and the tests.

pub mod simulated;

use futures::future::BoxFuture;
use std::fmt;

pub use simulated::{SimulatedEmbedApi, SimulatedEmbedConfig};

/// Errors raised by the embedded player API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmbedError {
    #[error("player api script failed to load: {0}")]
    ScriptLoad(String),
    #[error("player api is not available")]
    ApiUnavailable,
    #[error("failed to create player instance: {0}")]
    CreateFailed(String),
    #[error("player instance failed to become ready: {0}")]
    NotReady(String),
    #[error("no video id to embed")]
    MissingVideoId,
}

/// Playback state as reported by an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmbedPlaybackState {
    Unstarted,
    Ended,
    Playing,
    Paused,
    Buffering,
    Cued,
}

/// Element the player instance renders into.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MountPoint {
    id: String,
}

impl MountPoint {
    pub fn for_video(video_id: &str) -> Self {
        Self {
            id: format!("yt-player-{video_id}"),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Constructor options for a new instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerOptions {
    pub video_id: String,
}

/// The global API object.
#[cfg_attr(test, mockall::automock)]
pub trait EmbedApi: Send + Sync + fmt::Debug {
    /// Whether the API global is already present.
    fn is_available(&self) -> bool;

    /// Inject the loader script. Resolves when the API signals readiness.
    fn inject_script(&self) -> BoxFuture<'static, Result<(), EmbedError>>;

    /// Construct an instance bound to `mount`. The instance is not usable
    /// until [`EmbedInstance::ready`] resolves.
    fn create_player(
        &self,
        mount: &MountPoint,
        options: PlayerOptions,
    ) -> Result<Box<dyn EmbedInstance>, EmbedError>;
}

/// Imperative handle to a live player instance.
#[cfg_attr(test, mockall::automock)]
pub trait EmbedInstance: Send + fmt::Debug {
    /// Resolves once the instance fired its ready callback.
    fn ready(&self) -> BoxFuture<'static, Result<(), EmbedError>>;

    fn play(&mut self);

    fn pause(&mut self);

    fn state(&self) -> EmbedPlaybackState;

    fn current_time(&self) -> f64;

    fn duration(&self) -> f64;

    fn seek_to(&mut self, seconds: f64, allow_seek_ahead: bool);

    fn load_video_by_id(&mut self, video_id: &str);

    fn destroy(&mut self);
}

impl fmt::Display for EmbedPlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Unstarted => "unstarted",
            Self::Ended => "ended",
            Self::Playing => "playing",
            Self::Paused => "paused",
            Self::Buffering => "buffering",
            Self::Cued => "cued",
        };
        f.write_str(label)
    }
}
