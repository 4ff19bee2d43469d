//! Player domain
//!
//! Session store, embedded-player lifecycle, native DIRECT playback,
//! controls and the full/mini layouts.

pub mod controls;
pub mod direct;
pub mod embed;
pub mod gesture;
pub mod messages;
pub mod state;
pub mod store;
pub mod theme;
pub mod time_sync;
pub mod update;
pub mod view;

use std::sync::Arc;

use self::state::PlayerDomainState;
use crate::infra::config::PlayerConfig;
use crate::infra::embed_api::EmbedApi;
use crate::infra::native_player::NativeBackend;

// Re-export key types
pub use direct::{DirectPhase, DirectPlayer};
pub use embed::{EmbedPhase, EmbeddedPlayer};
pub use store::{PlayerMode, PlayerStore};

/// Player domain wrapper - PlayerDomainState is the actual domain state
#[derive(Debug)]
pub struct PlayerDomain {
    pub state: PlayerDomainState,
}

impl PlayerDomain {
    pub fn new(
        api: Arc<dyn EmbedApi>,
        native: Arc<dyn NativeBackend>,
        config: &PlayerConfig,
    ) -> Self {
        Self {
            state: PlayerDomainState::new(api, native, config),
        }
    }
}
