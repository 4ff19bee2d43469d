use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use iced::Task;
use shortreel_model::VideoDataset;

use crate::common::messages::DomainMessage;
use crate::infra::assets::AssetPolicy;
use crate::infra::config::{ConfigSource, PlayerConfig};
use crate::infra::embed_api::{EmbedApi, SimulatedEmbedApi};
use crate::infra::native_player::{
    MpvBackend, NativeBackend, NativeBackendKind, NativePlayerConfig,
    SimulatedNativeBackend,
};
use crate::state::State;

/// Dataset compiled into the binary, used unless `dataset_path` is set.
pub const BUNDLED_DATASET: &str = include_str!("../../assets/videos.json");

/// Application configuration resolved before the runtime starts.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub player: PlayerConfig,
    pub source: ConfigSource,
    pub dataset: VideoDataset,
}

impl AppConfig {
    /// Read `.env`, the player config and the dataset.
    pub fn from_environment() -> anyhow::Result<Self> {
        let (player, source) =
            PlayerConfig::load().context("failed to load player config")?;
        log::info!("[Config] Using {source:?}");
        Self::with_player_config(player, source)
    }

    pub fn with_player_config(
        player: PlayerConfig,
        source: ConfigSource,
    ) -> anyhow::Result<Self> {
        let dataset = load_dataset(player.dataset_path.as_deref())?;
        Ok(Self {
            player,
            source,
            dataset,
        })
    }
}

pub fn load_dataset(path: Option<&Path>) -> anyhow::Result<VideoDataset> {
    let dataset = match path {
        Some(path) => VideoDataset::from_path(path).with_context(|| {
            format!("failed to load dataset from {}", path.display())
        })?,
        None => VideoDataset::from_json(BUNDLED_DATASET)
            .context("bundled dataset is invalid")?,
    };
    log::debug!(
        "[Feed] Loaded {} videos in {} categories",
        dataset.video_count(),
        dataset.categories.len()
    );
    Ok(dataset)
}

/// Log every thumbnail or icon outside the allow-list; returns how many.
pub fn audit_assets(dataset: &VideoDataset, policy: &AssetPolicy) -> usize {
    let icons = dataset
        .categories
        .iter()
        .map(|group| group.category.icon_url.as_str());
    let thumbnails = dataset
        .categories
        .iter()
        .flat_map(|group| group.contents.iter())
        .map(|video| video.thumbnail_url.as_str());

    icons
        .chain(thumbnails)
        .filter(|url| !url.is_empty() && !policy.is_allowed(url))
        .inspect(|url| log::warn!("[Feed] Asset host not allowed: {url}"))
        .count()
}

/// Native player backend selected by the `[native]` table.
pub fn native_backend(config: &NativePlayerConfig) -> Arc<dyn NativeBackend> {
    match config.backend {
        NativeBackendKind::Mpv => Arc::new(MpvBackend::new(config)),
        NativeBackendKind::Simulated => Arc::new(SimulatedNativeBackend::new()),
    }
}

/// Build the initial state with the given players.
pub fn base_state(
    config: &AppConfig,
    embed_api: Arc<dyn EmbedApi>,
    native: Arc<dyn NativeBackend>,
) -> State {
    let state = State::new(
        &config.player,
        config.dataset.clone(),
        embed_api,
        native,
    );
    audit_assets(&state.dataset, &state.asset_policy);
    state
}

/// Boot logic for the running application.
pub fn runtime_boot(config: &AppConfig) -> (State, Task<DomainMessage>) {
    let embed_api: Arc<dyn EmbedApi> =
        Arc::new(SimulatedEmbedApi::new(config.player.embed.clone()));
    let native = native_backend(&config.player.native);
    (base_state(config, embed_api, native), Task::none())
}
