use crate::common::messages::DomainMessage;
use crate::domains::player::messages::PlayerMessage;
use crate::domains::player::store::PlayerMode;
use crate::infra::constants::player::gesture::ANIMATION_FRAME_MS;
use crate::state::State;
use iced::Subscription;
use iced::keyboard::{Key, key::Named};
use std::time::Duration;

/// Creates all player-related subscriptions (poll, animation, keyboard)
pub fn subscription(state: &State) -> Subscription<DomainMessage> {
    let player = &state.domains.player.state;
    let mut subs = vec![];

    // Time sync for a live embed, exit watch for a native player
    if player.wants_polling(&state.player_store) {
        subs.push(
            iced::time::every(player.poll_interval)
                .map(|_| DomainMessage::Player(PlayerMessage::PollTick)),
        );
    }

    if player.gesture.is_animating() {
        subs.push(
            iced::time::every(Duration::from_millis(ANIMATION_FRAME_MS)).map(
                |now| DomainMessage::Player(PlayerMessage::AnimationFrame(now)),
            ),
        );
    }

    subs.push(keyboard_shortcuts(state));

    Subscription::batch(subs)
}

fn keyboard_shortcuts(state: &State) -> Subscription<DomainMessage> {
    if !state.player_store.is_presented() {
        return Subscription::none();
    }
    let embedded = state
        .player_store
        .current_video()
        .is_some_and(|video| video.is_embedded());

    match (state.player_store.mode(), embedded) {
        (PlayerMode::Full, true) => iced::keyboard::on_key_press(|key, _| {
            key_message(&key, PlayerMode::Full, true).map(DomainMessage::Player)
        }),
        (PlayerMode::Full, false) => iced::keyboard::on_key_press(|key, _| {
            key_message(&key, PlayerMode::Full, false)
                .map(DomainMessage::Player)
        }),
        (PlayerMode::Mini, _) => iced::keyboard::on_key_press(|key, _| {
            key_message(&key, PlayerMode::Mini, false).map(DomainMessage::Player)
        }),
        (PlayerMode::Hidden, _) => Subscription::none(),
    }
}

/// Shortcut for `key` in `mode`. The full player has no transport
/// controls for DIRECT media, so only Esc applies there.
pub fn key_message(
    key: &Key,
    mode: PlayerMode,
    embedded: bool,
) -> Option<PlayerMessage> {
    match (mode, key) {
        (PlayerMode::Hidden, _) => None,
        (PlayerMode::Full, Key::Named(Named::Escape)) => {
            Some(PlayerMessage::Minimize)
        }
        (PlayerMode::Full, _) if !embedded => None,
        (_, Key::Named(Named::Space)) => Some(PlayerMessage::PlayPause),
        (_, Key::Named(Named::ArrowLeft)) => Some(PlayerMessage::SkipBack),
        (_, Key::Named(Named::ArrowRight)) => Some(PlayerMessage::SkipForward),
        _ => None,
    }
}
