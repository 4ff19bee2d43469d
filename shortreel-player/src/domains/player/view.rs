//! Full-screen and mini player layouts.

use iced::widget::{
    Column, button, column, container, mouse_area, row, scrollable, text,
};
use iced::{Alignment, Element, Length, Padding};

use shortreel_model::VideoItem;

use super::controls;
use super::direct::DirectPhase;
use super::embed::EmbedPhase;
use super::messages::PlayerMessage;
use super::state::PlayerDomainState;
use super::store::{PlayerMode, PlayerStore};
use super::theme;
use crate::infra::constants::{full_player, mini_player};

/// Player overlay for the current mode, `None` while hidden.
pub fn view_player<'a>(
    store: &'a PlayerStore,
    player: &'a PlayerDomainState,
) -> Option<Element<'a, PlayerMessage>> {
    let video = store.current_video()?;
    match store.mode() {
        PlayerMode::Hidden => None,
        PlayerMode::Full => Some(view_full(store, player, video)),
        PlayerMode::Mini => Some(view_mini(store, player, video)),
    }
}

fn view_full<'a>(
    store: &'a PlayerStore,
    player: &'a PlayerDomainState,
    video: &'a VideoItem,
) -> Element<'a, PlayerMessage> {
    let header = mouse_area(
        container(
            row![
                column![
                    text(&video.title).size(16),
                    text("Drag down to minimize").size(11),
                ]
                .spacing(2)
                .width(Length::Fill),
                button(text("⌄").size(18))
                    .on_press(PlayerMessage::Minimize)
                    .style(theme::button_player),
                button(text("✕").size(16))
                    .on_press(PlayerMessage::Close)
                    .style(theme::button_player),
            ]
            .spacing(8)
            .align_y(Alignment::Center),
        )
        .padding([8, 16])
        .height(full_player::HEADER_HEIGHT)
        .style(theme::container_header),
    )
    .on_press(PlayerMessage::DragPressed);

    let surface = container(video_surface(player, video, false))
        .width(Length::Fill)
        .height(full_player::SURFACE_HEIGHT)
        .center_x(Length::Fill)
        .center_y(full_player::SURFACE_HEIGHT)
        .style(theme::container_video_surface);

    let mut body = column![header, surface].spacing(4).width(Length::Fill);
    // DIRECT media is driven from the native player's own controls.
    if video.is_embedded() {
        body = body.push(controls::embedded_controls(
            &player.clock,
            store.is_playing(),
            player.skip_seconds,
        ));
    }
    let body = body.push(up_next(store, player));

    let offset = player.gesture.offset();
    let shifted = container(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top: offset,
            right: 0.0,
            bottom: 0.0,
            left: 0.0,
        })
        .style(theme::container_full_player);

    // Move/release are tracked over the whole player so a drag keeps
    // following the cursor after it leaves the header.
    mouse_area(shifted)
        .on_move(|point| PlayerMessage::DragMoved(point.y))
        .on_release(PlayerMessage::DragReleased)
        .on_exit(PlayerMessage::DragExited)
        .into()
}

fn up_next<'a>(
    store: &'a PlayerStore,
    player: &'a PlayerDomainState,
) -> Element<'a, PlayerMessage> {
    let related = store.related_videos();
    let chevron = if player.up_next_open { "▾" } else { "▸" };

    let toggle = button(
        row![
            text("Up next · Same category").size(14).width(Length::Fill),
            text(format!("{} {chevron}", related.len())).size(12),
        ]
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([10, 12])
    .on_press(PlayerMessage::ToggleUpNext)
    .style(theme::button_list_item);

    let mut panel = Column::new().push(toggle).spacing(4);

    if player.up_next_open {
        let items = related.into_iter().fold(
            Column::new().spacing(4),
            |list, item| list.push(up_next_item(item)),
        );
        panel = panel.push(scrollable(items).height(Length::Fill));
    }

    container(panel)
        .padding(8)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(theme::container_up_next)
        .into()
}

fn up_next_item(video: &VideoItem) -> Element<'_, PlayerMessage> {
    let thumb = container(text(video.initials()).size(14))
        .width(full_player::UP_NEXT_THUMB_WIDTH)
        .height(full_player::UP_NEXT_THUMB_HEIGHT)
        .center_x(full_player::UP_NEXT_THUMB_WIDTH)
        .center_y(full_player::UP_NEXT_THUMB_HEIGHT)
        .style(theme::container_thumb);

    button(
        row![
            thumb,
            column![
                text(&video.title).size(13),
                text(video.media_type.to_string()).size(11),
            ]
            .spacing(4)
            .width(Length::Fill),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding(6)
    .on_press(PlayerMessage::SelectRelated(video.slug.clone()))
    .style(theme::button_list_item)
    .into()
}

fn view_mini<'a>(
    store: &'a PlayerStore,
    player: &'a PlayerDomainState,
    video: &'a VideoItem,
) -> Element<'a, PlayerMessage> {
    let surface = container(video_surface(player, video, true))
        .width(mini_player::SURFACE_WIDTH)
        .height(mini_player::SURFACE_HEIGHT)
        .center_x(mini_player::SURFACE_WIDTH)
        .center_y(mini_player::SURFACE_HEIGHT)
        .style(theme::container_video_surface);

    let status = if store.is_playing() { "Playing" } else { "Paused" };
    let body = mouse_area(
        row![
            surface,
            column![text(&video.title).size(13), text(status).size(11)]
                .spacing(4)
                .width(Length::Fill),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .on_press(PlayerMessage::Expand);

    let play_label = if store.is_playing() { "❚❚" } else { "▶" };
    let actions = row![
        mini_button("⤢", PlayerMessage::Expand),
        mini_button(play_label, PlayerMessage::PlayPause),
        mini_button("✕", PlayerMessage::Close),
    ]
    .spacing(4)
    .align_y(Alignment::Center);

    container(
        row![body, actions]
            .spacing(8)
            .align_y(Alignment::Center),
    )
    .padding([8, 12])
    .width(Length::Fill)
    .height(mini_player::HEIGHT)
    .style(theme::container_mini_bar)
    .into()
}

fn mini_button(
    label: &'static str,
    message: PlayerMessage,
) -> Element<'static, PlayerMessage> {
    button(container(text(label).size(16)).center(mini_player::BUTTON_SIZE))
        .width(mini_player::BUTTON_SIZE)
        .height(mini_player::BUTTON_SIZE)
        .padding(0)
        .on_press(message)
        .style(theme::button_player)
        .into()
}

/// What occupies the video area for the current media and embed phase.
fn surface_label(
    player: &PlayerDomainState,
    video: &VideoItem,
) -> String {
    if !video.is_embedded() {
        let host = url::Url::parse(&video.media_url)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .unwrap_or_else(|| "direct media".to_string());
        return match player.direct.phase() {
            DirectPhase::Idle => "Opening player…".to_string(),
            DirectPhase::Playing => format!("▶ Playing in native window · {host}"),
            DirectPhase::Paused => format!("❚❚ Paused · {host}"),
            DirectPhase::Ended => "Playback window closed".to_string(),
            DirectPhase::Failed => "This video can't be played".to_string(),
        };
    }

    if video.embed_video_id().is_none() {
        return "This video can't be played".to_string();
    }

    match player.embed.phase() {
        EmbedPhase::Uninitialized | EmbedPhase::LoadingScript => {
            "Loading player…".to_string()
        }
        EmbedPhase::Creating => "Starting…".to_string(),
        EmbedPhase::Ready => match player.embed.instance() {
            Some(instance) => instance.state().to_string(),
            None => "Starting…".to_string(),
        },
        EmbedPhase::Failed | EmbedPhase::Destroyed => {
            "This video can't be played".to_string()
        }
    }
}

fn video_surface<'a>(
    player: &PlayerDomainState,
    video: &VideoItem,
    compact: bool,
) -> Element<'a, PlayerMessage> {
    let label = surface_label(player, video);
    let mount = player
        .embed
        .container()
        .mounts()
        .first()
        .map(|mount| mount.id().to_string());

    let mut content = Column::new()
        .push(text(label).size(if compact { 11 } else { 15 }))
        .spacing(4)
        .align_x(Alignment::Center);
    if !compact && let Some(mount) = mount {
        content = content.push(text(mount).size(10));
    }
    content.into()
}
