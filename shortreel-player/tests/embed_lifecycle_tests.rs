// Embedded player lifecycle against the simulated player API

mod common;

use common::*;
use shortreel_player::domains::player::embed::EmbedStep;
use shortreel_player::domains::player::{EmbedPhase, PlayerMode};
use shortreel_player::infra::embed_api::{
    EmbedError, EmbedPlaybackState, SimulatedEmbedConfig,
};

#[tokio::test]
async fn first_embed_injects_script_then_plays() {
    let api = simulated(false);
    let mut state = app_state(&api);

    let step = select(&mut state, SOCIAL, CAPTIONS).await;
    assert!(matches!(step, EmbedStep::Ready { duration } if duration == 120.0));

    let player = &state.domains.player.state;
    assert_eq!(player.embed.phase(), EmbedPhase::Ready);
    assert_eq!(player.clock.duration, 120.0);
    assert_eq!(api.script_injections(), 1);
    assert_eq!(api.instances_created(), 1);

    let latest = api.latest().unwrap();
    assert_eq!(latest.mount_id, format!("yt-player-{CAPTIONS_ID}"));
    assert_eq!(latest.state, EmbedPlaybackState::Playing);
    assert!(latest.ready);
}

#[tokio::test]
async fn preloaded_api_skips_script() {
    let api = simulated(true);
    let mut state = app_state(&api);

    select(&mut state, SOCIAL, CAPTIONS).await;
    assert_eq!(api.script_injections(), 0);
    assert_eq!(api.instances_created(), 1);
}

#[tokio::test]
async fn switching_embedded_videos_reuses_instance() {
    let api = simulated(true);
    let mut state = app_state(&api);

    select(&mut state, SOCIAL, CAPTIONS).await;
    let step = select(&mut state, SOCIAL, REELS).await;
    assert!(matches!(step, EmbedStep::Reloaded));

    assert_eq!(api.instances_created(), 1);
    let latest = api.latest().unwrap();
    assert_eq!(latest.loaded_ids, vec![CAPTIONS_ID, REELS_ID]);
    assert_eq!(latest.state, EmbedPlaybackState::Playing);
    assert_eq!(state.domains.player.state.embed.video_id(), Some(REELS_ID));
}

#[tokio::test]
async fn switching_to_direct_media_tears_down() {
    let api = simulated(true);
    let mut state = app_state(&api);

    select(&mut state, SOCIAL, CAPTIONS).await;
    let step = select(&mut state, SOCIAL, HOOKS_MP4).await;
    assert!(matches!(step, EmbedStep::Idle));

    let player = &state.domains.player.state;
    assert_eq!(player.embed.phase(), EmbedPhase::Destroyed);
    assert!(player.embed.container().is_empty());
    assert_eq!(api.live_instances(), 0);
    assert_eq!(state.player_store.mode(), PlayerMode::Full);
}

#[tokio::test]
async fn minimize_keeps_instance_and_close_destroys_it() {
    let api = simulated(true);
    let mut state = app_state(&api);
    select(&mut state, SOCIAL, CAPTIONS).await;

    set_mode(&mut state, PlayerMode::Mini).await;
    assert_eq!(state.domains.player.state.embed.phase(), EmbedPhase::Ready);
    assert_eq!(api.live_instances(), 1);

    set_mode(&mut state, PlayerMode::Full).await;
    assert_eq!(api.instances_created(), 1);

    set_mode(&mut state, PlayerMode::Hidden).await;
    assert_eq!(state.domains.player.state.embed.phase(), EmbedPhase::Destroyed);
    assert_eq!(api.live_instances(), 0);
    // Closing keeps the last selection around.
    assert!(state.player_store.current_video().is_some());
}

#[tokio::test]
async fn script_completing_after_close_is_ignored() {
    let api = simulated(false);
    let mut state = app_state(&api);

    let EmbedStep::Pending(script) = select_pending(&mut state, SOCIAL, CAPTIONS)
    else {
        panic!("expected a pending script load");
    };
    set_mode(&mut state, PlayerMode::Hidden).await;

    let event = script.await;
    let step = state
        .domains
        .player
        .state
        .handle_embed_event(event, &state.player_store);
    assert!(matches!(step, EmbedStep::Idle));
    assert_eq!(api.instances_created(), 0);
    assert!(state.domains.player.state.embed.container().is_empty());
    assert!(!state.domains.player.state.embed.has_pending_api_callback());
}

#[tokio::test]
async fn switch_during_script_load_restarts_with_new_video() {
    let api = simulated(false);
    let mut state = app_state(&api);

    let EmbedStep::Pending(stale) = select_pending(&mut state, SOCIAL, CAPTIONS)
    else {
        panic!("expected a pending script load");
    };
    let step = select(&mut state, SOCIAL, REELS).await;
    assert!(matches!(step, EmbedStep::Ready { .. }));

    // The first load resolves late and must not disturb the live instance.
    let event = stale.await;
    let step = state
        .domains
        .player
        .state
        .handle_embed_event(event, &state.player_store);
    assert!(matches!(step, EmbedStep::Idle));
    assert_eq!(api.instances_created(), 1);
    assert_eq!(api.latest().unwrap().video_id, REELS_ID);
}

#[tokio::test]
async fn script_failure_leaves_player_inert() {
    let api = simulated_with(SimulatedEmbedConfig {
        fail_script_load: true,
        ..instant()
    });
    let mut state = app_state(&api);

    let step = select(&mut state, SOCIAL, CAPTIONS).await;
    assert!(matches!(step, EmbedStep::Failed(EmbedError::ScriptLoad(_))));
    assert_eq!(state.domains.player.state.embed.phase(), EmbedPhase::Failed);
    assert_eq!(api.instances_created(), 0);
    // The store is untouched by the failure.
    assert!(state.player_store.is_playing());
}

#[tokio::test]
async fn create_failure_removes_mount_point() {
    let api = simulated_with(SimulatedEmbedConfig {
        api_preloaded: true,
        fail_create: true,
        ..instant()
    });
    let mut state = app_state(&api);

    let step = select(&mut state, SOCIAL, CAPTIONS).await;
    assert!(matches!(step, EmbedStep::Failed(EmbedError::CreateFailed(_))));
    assert!(state.domains.player.state.embed.container().is_empty());
}

#[tokio::test]
async fn failed_embed_is_not_retried_on_mode_changes() {
    let api = simulated_with(SimulatedEmbedConfig {
        fail_script_load: true,
        ..instant()
    });
    let mut state = app_state(&api);

    select(&mut state, SOCIAL, CAPTIONS).await;
    assert_eq!(api.script_injections(), 1);

    for mode in [PlayerMode::Mini, PlayerMode::Full, PlayerMode::Mini] {
        let step = set_mode(&mut state, mode).await;
        assert!(matches!(step, EmbedStep::Idle));
    }
    assert_eq!(api.script_injections(), 1);
    assert_eq!(state.domains.player.state.embed.phase(), EmbedPhase::Failed);

    // Selecting the video again is a fresh attempt.
    select(&mut state, SOCIAL, CAPTIONS).await;
    assert_eq!(api.script_injections(), 2);
}

#[tokio::test]
async fn closing_after_failure_allows_a_fresh_attempt() {
    let api = simulated_with(SimulatedEmbedConfig {
        api_preloaded: true,
        fail_create: true,
        ..instant()
    });
    let mut state = app_state(&api);

    select(&mut state, SOCIAL, CAPTIONS).await;
    set_mode(&mut state, PlayerMode::Full).await;
    set_mode(&mut state, PlayerMode::Hidden).await;

    // Reopening through the mode alone retries once the failure is cleared.
    let step = set_mode(&mut state, PlayerMode::Full).await;
    assert!(matches!(step, EmbedStep::Failed(EmbedError::CreateFailed(_))));
}

#[tokio::test]
async fn pause_during_load_is_honoured_on_ready() {
    let api = simulated(false);
    let mut state = app_state(&api);

    let step = select_pending(&mut state, SOCIAL, CAPTIONS);
    toggle_play(&mut state);
    assert!(!state.player_store.is_playing());

    let step = settle(&mut state, step).await;
    assert!(matches!(step, EmbedStep::Ready { .. }));
    let playing = api.latest().unwrap().state == EmbedPlaybackState::Playing;
    assert_eq!(playing, state.player_store.is_playing());
    assert!(!playing);

    toggle_play(&mut state);
    assert!(state.player_store.is_playing());
    assert_eq!(api.latest().unwrap().state, EmbedPlaybackState::Playing);

    toggle_play(&mut state);
    assert!(!state.player_store.is_playing());
    assert_eq!(api.latest().unwrap().state, EmbedPlaybackState::Paused);
}
