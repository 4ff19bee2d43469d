use super::embed::EmbedStep;
use super::messages::PlayerMessage;
use super::store::PlayerMode;
use super::gesture::DragRelease;

use crate::common::messages::{DomainMessage, DomainUpdateResult};
use crate::state::State;

use iced::Task;
use log::{debug, warn};
use std::time::Instant;

/// Handle player domain messages
pub fn update_player(
    app_state: &mut State,
    message: PlayerMessage,
) -> DomainUpdateResult {
    match message {
        PlayerMessage::PlayPause => {
            let State {
                player_store,
                domains,
                ..
            } = app_state;
            domains.player.state.toggle_play(player_store);
            DomainUpdateResult::none()
        }

        PlayerMessage::Seek(seconds) => {
            let player = &mut app_state.domains.player.state;
            let target = seconds.clamp(0.0, player.clock.duration.max(0.0));
            player.seek(target);
            DomainUpdateResult::none()
        }

        PlayerMessage::SkipBack => {
            app_state.domains.player.state.skip_back();
            DomainUpdateResult::none()
        }

        PlayerMessage::SkipForward => {
            app_state.domains.player.state.skip_forward();
            DomainUpdateResult::none()
        }

        PlayerMessage::Minimize => set_mode(app_state, PlayerMode::Mini),
        PlayerMessage::Close => set_mode(app_state, PlayerMode::Hidden),
        PlayerMessage::Expand => set_mode(app_state, PlayerMode::Full),

        PlayerMessage::DragPressed => {
            if app_state.player_store.mode() == PlayerMode::Full {
                app_state.domains.player.state.gesture.press();
            }
            DomainUpdateResult::none()
        }

        PlayerMessage::DragMoved(y) => {
            app_state.domains.player.state.gesture.cursor_moved(y);
            DomainUpdateResult::none()
        }

        PlayerMessage::DragReleased | PlayerMessage::DragExited => {
            let release = app_state
                .domains
                .player
                .state
                .gesture
                .release(Instant::now());
            match release {
                DragRelease::Minimize => set_mode(app_state, PlayerMode::Mini),
                DragRelease::SnapBack | DragRelease::Ignored => {
                    DomainUpdateResult::none()
                }
            }
        }

        PlayerMessage::AnimationFrame(now) => {
            app_state.domains.player.state.gesture.tick(now);
            DomainUpdateResult::none()
        }

        PlayerMessage::ToggleUpNext => {
            let player = &mut app_state.domains.player.state;
            player.up_next_open = !player.up_next_open;
            DomainUpdateResult::none()
        }

        PlayerMessage::SelectRelated(slug) => {
            let Some(category) = app_state.player_store.current_category()
            else {
                warn!("[Player] SelectRelated `{slug}` without a category");
                return DomainUpdateResult::none();
            };
            let Some(video) = category.video(&slug).cloned() else {
                warn!(
                    "[Player] `{slug}` is not part of `{}`",
                    category.slug()
                );
                return DomainUpdateResult::none();
            };
            let category = category.clone();
            app_state.player_store.play_video(video, category);
            DomainUpdateResult::task(reconcile_selection(app_state))
        }

        PlayerMessage::PollTick => {
            app_state.domains.player.state.poll();
            DomainUpdateResult::none()
        }

        PlayerMessage::Embed(event) => {
            let State {
                player_store,
                domains,
                ..
            } = app_state;
            let step = domains.player.state.handle_embed_event(event, player_store);
            DomainUpdateResult::task(embed_task(step))
        }
    }
}

fn set_mode(app_state: &mut State, mode: PlayerMode) -> DomainUpdateResult {
    app_state.player_store.set_mode(mode);
    DomainUpdateResult::task(reconcile(app_state))
}

/// Re-derive the embedded player from the store after a mutation.
pub fn reconcile(app_state: &mut State) -> Task<DomainMessage> {
    let step = app_state
        .domains
        .player
        .state
        .reconcile(&app_state.player_store);
    embed_task(step)
}

/// Reconcile after `play_video`, allowing a previously failed video to
/// start again.
pub fn reconcile_selection(app_state: &mut State) -> Task<DomainMessage> {
    let step = app_state
        .domains
        .player
        .state
        .reconcile_selection(&app_state.player_store);
    embed_task(step)
}

/// Turn an adapter step into the task that drives it forward.
pub fn embed_task(step: EmbedStep) -> Task<DomainMessage> {
    match step {
        EmbedStep::Pending(future) => Task::perform(future, |event| {
            DomainMessage::Player(PlayerMessage::Embed(event))
        }),
        EmbedStep::Ready { duration } => {
            debug!("[Player] Embedded playback started ({duration:.1}s)");
            Task::none()
        }
        EmbedStep::Failed(err) => {
            debug!("[Player] Embedded player inert: {err}");
            Task::none()
        }
        EmbedStep::Idle | EmbedStep::Reloaded => Task::none(),
    }
}
