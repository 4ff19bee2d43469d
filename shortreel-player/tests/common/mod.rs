#![allow(dead_code)]

use std::sync::Arc;

use shortreel_player::app::bootstrap::load_dataset;
use shortreel_player::domains::player::PlayerMode;
use shortreel_player::domains::player::embed::EmbedStep;
use shortreel_player::infra::config::PlayerConfig;
use shortreel_player::infra::embed_api::{
    EmbedApi, SimulatedEmbedApi, SimulatedEmbedConfig,
};
use shortreel_player::infra::native_player::{
    NativeBackend, SimulatedNativeBackend,
};
use shortreel_player::state::State;

pub const SOCIAL: &str = "social-media-ai";
pub const CAPTIONS: &str = "ai-captions-that-convert";
pub const CAPTIONS_ID: &str = "Qk3rT9vLm2A";
pub const REELS: &str = "batch-a-month-of-reels";
pub const REELS_ID: &str = "Zp8sWc1yHn4";
pub const HOOKS_MP4: &str = "hook-formulas-in-30-seconds";

/// Zero-delay simulated API on a manual clock.
pub fn simulated(api_preloaded: bool) -> SimulatedEmbedApi {
    simulated_with(SimulatedEmbedConfig {
        api_preloaded,
        ..instant()
    })
}

pub fn instant() -> SimulatedEmbedConfig {
    SimulatedEmbedConfig {
        api_preloaded: false,
        script_delay_ms: 0,
        ready_delay_ms: 0,
        default_duration_secs: 120.0,
        ..Default::default()
    }
}

pub fn simulated_with(config: SimulatedEmbedConfig) -> SimulatedEmbedApi {
    SimulatedEmbedApi::manual_clock(config)
}

pub fn app_state(api: &SimulatedEmbedApi) -> State {
    app_state_with(api, &SimulatedNativeBackend::new())
}

pub fn app_state_with(
    api: &SimulatedEmbedApi,
    native: &SimulatedNativeBackend,
) -> State {
    let embed_api: Arc<dyn EmbedApi> = Arc::new(api.clone());
    let native: Arc<dyn NativeBackend> = Arc::new(native.clone());
    State::new(
        &PlayerConfig::default(),
        load_dataset(None).expect("bundled dataset"),
        embed_api,
        native,
    )
}

/// Await pending embed futures until the adapter settles.
pub async fn settle(state: &mut State, mut step: EmbedStep) -> EmbedStep {
    loop {
        match step {
            EmbedStep::Pending(future) => {
                let event = future.await;
                let State {
                    player_store,
                    domains,
                    ..
                } = &mut *state;
                step = domains.player.state.handle_embed_event(event, player_store);
            }
            other => return other,
        }
    }
}

/// Select a video like the feed does and run the embed to completion.
pub async fn select(state: &mut State, category: &str, video: &str) -> EmbedStep {
    let step = select_pending(state, category, video);
    settle(state, step).await
}

/// Select a video without driving the resulting embed future.
pub fn select_pending(state: &mut State, category: &str, video: &str) -> EmbedStep {
    let (group, item) = state
        .dataset
        .lookup(category, video)
        .map(|(group, item)| (group.clone(), item.clone()))
        .expect("video in bundled dataset");
    state.player_store.play_video(item, group);
    state
        .domains
        .player
        .state
        .reconcile_selection(&state.player_store)
}

pub async fn set_mode(state: &mut State, mode: PlayerMode) -> EmbedStep {
    let step = set_mode_pending(state, mode);
    settle(state, step).await
}

pub fn set_mode_pending(state: &mut State, mode: PlayerMode) -> EmbedStep {
    state.player_store.set_mode(mode);
    state.domains.player.state.reconcile(&state.player_store)
}

/// Flip play/pause the way the transport button does.
pub fn toggle_play(state: &mut State) {
    let State {
        player_store,
        domains,
        ..
    } = state;
    domains.player.state.toggle_play(player_store);
}
