//! Root-level view composition

use crate::common::messages::DomainMessage;
use crate::domains::player::PlayerMode;
use crate::domains::{feed, player};
use crate::state::State;
use iced::widget::{container, stack};
use iced::{Element, Length, Theme};

pub fn view(
    state: &State,
    _window_id: iced::window::Id,
) -> Element<'_, DomainMessage, Theme, iced::Renderer> {
    let feed = feed::view::view_feed(&state.dataset, &state.player_store)
        .map(DomainMessage::from);

    let Some(overlay) = player::view::view_player(
        &state.player_store,
        &state.domains.player.state,
    ) else {
        return feed;
    };
    let overlay = overlay.map(DomainMessage::from);

    let overlay: Element<'_, DomainMessage> = match state.player_store.mode() {
        PlayerMode::Mini => container(overlay)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_bottom(Length::Fill)
            .into(),
        PlayerMode::Full | PlayerMode::Hidden => overlay,
    };

    stack![feed, overlay]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
