use std::sync::Arc;

use shortreel_model::VideoDataset;

use crate::domains::DomainRegistry;
use crate::domains::player::{PlayerDomain, PlayerStore};
use crate::infra::assets::AssetPolicy;
use crate::infra::config::PlayerConfig;
use crate::infra::embed_api::EmbedApi;
use crate::infra::native_player::NativeBackend;

/// Root application state
#[derive(Debug)]
pub struct State {
    /// Read-only catalogue shown by the feed
    pub dataset: VideoDataset,

    /// The one session store; every surface reads it from here
    pub player_store: PlayerStore,

    pub domains: DomainRegistry,

    pub asset_policy: AssetPolicy,
}

impl State {
    pub fn new(
        config: &PlayerConfig,
        dataset: VideoDataset,
        embed_api: Arc<dyn EmbedApi>,
        native: Arc<dyn NativeBackend>,
    ) -> Self {
        Self {
            dataset,
            player_store: PlayerStore::new(),
            domains: DomainRegistry {
                player: PlayerDomain::new(embed_api, native, config),
            },
            asset_policy: AssetPolicy::new(
                config.allowed_asset_hosts.iter().cloned(),
            ),
        }
    }
}
